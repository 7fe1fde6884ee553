use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Genre, Movie, Review};
use crate::validation::ValidationReport;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationReport>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            errors: None,
        }
    }

    pub fn invalid(message: impl Into<String>, report: ValidationReport) -> Self {
        Self {
            errors: Some(report),
            ..Self::error(message)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieDto {
    pub id: i32,
    pub title: String,
    pub release_date: NaiveDate,
    pub description: String,
    pub price: f64,
    pub price_display: String,
    pub genre: Genre,
    pub rating: Option<String>,
    pub audience: Option<String>,
    pub reviews: Vec<Review>,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            description: movie.description,
            price: movie.price,
            price_display: format_currency(movie.price),
            genre: movie.genre,
            rating: movie.rating,
            audience: movie.audience,
            reviews: movie.reviews,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidationResultDto {
    pub valid: bool,
    pub errors: ValidationReport,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: bool,
    pub movies: u64,
    pub uptime_seconds: u64,
    pub version: &'static str,
}

#[must_use]
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(5.99), "$5.99");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(-3.0), "-$3.00");
    }

    #[test]
    fn test_invalid_response_shape() {
        let mut report = ValidationReport::new();
        report.add(
            "title",
            crate::validation::ValidationFailure::new("Too long"),
        );

        let body = serde_json::to_value(ApiResponse::<()>::invalid("Validation failed", report))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": "Validation failed",
                "errors": { "title": ["Too long"] }
            })
        );
    }
}
