use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, MovieDto, ValidationResultDto};
use crate::api::validation::{extract_json, validate_id};
use crate::models::MovieInput;
use crate::services::MovieError;
use crate::validation::ValidationContext;

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(id) => Self::movie_not_found(id),
            MovieError::Invalid(report) => Self::InvalidModel(report),
            MovieError::Database(msg) => Self::DatabaseError(msg),
            MovieError::Internal(msg) => Self::internal(msg),
        }
    }
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<MovieDto>>>, ApiError> {
    let movies = state.movie_service().list_movies().await?;
    let dtos = movies.into_iter().map(MovieDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MovieDto>>, ApiError> {
    let id = validate_id("movie", id)?;
    let movie = state.movie_service().get_movie(id).await?;
    Ok(Json(ApiResponse::success(movie.into())))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<MovieDto>>), ApiError> {
    let payload = extract_json(body)?;
    let ctx = ValidationContext::current();
    let movie = state.movie_service().create_movie(payload, &ctx).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(movie.into()))))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<Json<ApiResponse<MovieDto>>, ApiError> {
    let id = validate_id("movie", id)?;
    let payload = extract_json(body)?;
    let ctx = ValidationContext::current();
    let movie = state
        .movie_service()
        .update_movie(id, payload, &ctx)
        .await?;
    Ok(Json(ApiResponse::success(movie.into())))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MovieDto>>, ApiError> {
    let id = validate_id("movie", id)?;
    let movie = state.movie_service().delete_movie(id).await?;
    Ok(Json(ApiResponse::success(movie.into())))
}

/// Validates a movie without saving it.
///
/// # Endpoint
/// `POST /api/movies/validate`
pub async fn validate_movie(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<Json<ApiResponse<ValidationResultDto>>, ApiError> {
    let payload = extract_json(body)?;
    let ctx = ValidationContext::current();
    let report = state.movie_service().validate_movie(payload, &ctx);
    Ok(Json(ApiResponse::success(ValidationResultDto {
        valid: report.is_valid(),
        errors: report,
    })))
}
