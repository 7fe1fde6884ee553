use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::api::validation::{extract_json, validate_id};
use crate::models::{Review, ReviewInput};
use crate::services::ReviewError;

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::NotFound(id) => Self::review_not_found(id),
            ReviewError::IdMismatch { .. } | ReviewError::MovieNotFound(_) => {
                Self::validation(err.to_string())
            }
            ReviewError::Conflict(_) => Self::Conflict(err.to_string()),
            ReviewError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Review>>>, ApiError> {
    let reviews = state.review_service().list_reviews().await?;
    Ok(Json(ApiResponse::success(reviews)))
}

pub async fn get_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Review>>, ApiError> {
    let id = validate_id("rating", id)?;
    let review = state.review_service().get_review(id).await?;
    Ok(Json(ApiResponse::success(review)))
}

pub async fn create_rating(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ReviewInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Review>>), ApiError> {
    let payload = extract_json(body)?;
    let review = state.review_service().create_review(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(review))))
}

pub async fn update_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    body: Result<Json<ReviewInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = validate_id("rating", id)?;
    let payload = extract_json(body)?;
    state.review_service().update_review(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_rating(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Review>>, ApiError> {
    let id = validate_id("rating", id)?;
    let review = state.review_service().delete_review(id).await?;
    Ok(Json(ApiResponse::success(review)))
}
