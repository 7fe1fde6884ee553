use axum::{Json, extract::rejection::JsonRejection};

use super::ApiError;

/// Unwraps a JSON body, turning axum's rejection into a 400 in the API envelope.
pub fn extract_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|err| ApiError::validation(err.body_text()))
}

/// Path ids are database keys and must be positive.
pub fn validate_id(resource: &str, id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {resource} ID: {id}. ID must be a positive integer"
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id("movie", 1).ok(), Some(1));
        assert_eq!(validate_id("rating", 12345).ok(), Some(12345));
        assert!(validate_id("movie", 0).is_err());
        assert!(validate_id("rating", -1).is_err());
    }

    #[test]
    fn test_validate_id_names_resource() {
        let err = validate_id("rating", 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Invalid rating ID: 0. ID must be a positive integer"
        );
    }
}
