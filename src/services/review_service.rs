//! Domain service for reviews (exposed over HTTP as "ratings").

use crate::models::{Review, ReviewInput};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(i32),

    #[error("Review id {body} does not match path id {path}")]
    IdMismatch { path: i32, body: i32 },

    #[error("Review {0} already exists")]
    Conflict(i32),

    #[error("Movie not found: {0}")]
    MovieNotFound(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ReviewError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ReviewError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait ReviewService: Send + Sync {
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError>;

    async fn get_review(&self, id: i32) -> Result<Review, ReviewError>;

    /// # Errors
    ///
    /// - [`ReviewError::Conflict`] if the input carries an id that is taken
    /// - [`ReviewError::MovieNotFound`] if `movie_id` points nowhere
    async fn create_review(&self, input: ReviewInput) -> Result<Review, ReviewError>;

    /// Replaces a review.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::IdMismatch`] if the body id differs from `id`
    /// - [`ReviewError::NotFound`] if the review does not exist
    async fn update_review(&self, id: i32, input: ReviewInput) -> Result<(), ReviewError>;

    async fn delete_review(&self, id: i32) -> Result<Review, ReviewError>;
}
