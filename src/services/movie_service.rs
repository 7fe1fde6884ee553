//! Domain service for movie records.
//!
//! Every create and update passes through the movie validator before it
//! reaches the store.

use crate::models::{Movie, MovieInput};
use crate::validation::{ValidationContext, ValidationReport};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(i32),

    #[error("Validation failed: {0}")]
    Invalid(ValidationReport),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for MovieError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for MovieError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait MovieService: Send + Sync {
    /// Lists all movies with their reviews, ordered by id.
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError>;

    /// # Errors
    ///
    /// Returns [`MovieError::NotFound`] if the movie does not exist.
    async fn get_movie(&self, id: i32) -> Result<Movie, MovieError>;

    /// Runs validation without touching the store.
    fn validate_movie(&self, input: MovieInput, ctx: &ValidationContext) -> ValidationReport;

    /// # Errors
    ///
    /// Returns [`MovieError::Invalid`] with every failure if validation fails.
    async fn create_movie(
        &self,
        input: MovieInput,
        ctx: &ValidationContext,
    ) -> Result<Movie, MovieError>;

    /// Replaces the whole record.
    ///
    /// # Errors
    ///
    /// - [`MovieError::Invalid`] if validation fails
    /// - [`MovieError::NotFound`] if the movie does not exist
    async fn update_movie(
        &self,
        id: i32,
        input: MovieInput,
        ctx: &ValidationContext,
    ) -> Result<Movie, MovieError>;

    /// Deletes the movie and its reviews, returning the removed record.
    async fn delete_movie(&self, id: i32) -> Result<Movie, MovieError>;
}
