//! `SeaORM` implementation of the `MovieService` trait.

use crate::db::Store;
use crate::models::{Movie, MovieFields, MovieInput};
use crate::services::movie_service::{MovieError, MovieService};
use crate::validation::{MovieValidator, ValidationContext, ValidationReport};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub struct SeaOrmMovieService {
    store: Store,
    validator: Arc<MovieValidator>,
}

impl SeaOrmMovieService {
    #[must_use]
    pub const fn new(store: Store, validator: Arc<MovieValidator>) -> Self {
        Self { store, validator }
    }

    fn checked_fields(
        &self,
        input: MovieInput,
        ctx: &ValidationContext,
    ) -> Result<MovieFields, MovieError> {
        let input = self.validator.prepare(input);

        if let Err(report) = self.validator.validate_or_err(&input, ctx) {
            for field in report.fields() {
                metrics::counter!("movie_validation_failures_total", "field" => field.to_string())
                    .increment(1);
            }
            warn!(failures = report.len(), "Rejected movie: {}", report);
            return Err(MovieError::Invalid(report));
        }

        input
            .into_fields()
            .ok_or_else(|| MovieError::Internal("Validated movie is missing fields".to_string()))
    }
}

#[async_trait]
impl MovieService for SeaOrmMovieService {
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieError> {
        Ok(self.store.list_movies().await?)
    }

    async fn get_movie(&self, id: i32) -> Result<Movie, MovieError> {
        self.store
            .get_movie(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    fn validate_movie(&self, input: MovieInput, ctx: &ValidationContext) -> ValidationReport {
        let input = self.validator.prepare(input);
        self.validator.validate(&input, ctx)
    }

    async fn create_movie(
        &self,
        input: MovieInput,
        ctx: &ValidationContext,
    ) -> Result<Movie, MovieError> {
        let fields = self.checked_fields(input, ctx)?;
        let movie = self.store.create_movie(fields).await?;
        info!(movie_id = movie.id, "Movie created");
        Ok(movie)
    }

    async fn update_movie(
        &self,
        id: i32,
        input: MovieInput,
        ctx: &ValidationContext,
    ) -> Result<Movie, MovieError> {
        let fields = self.checked_fields(input, ctx)?;
        self.store
            .update_movie(id, fields)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    async fn delete_movie(&self, id: i32) -> Result<Movie, MovieError> {
        self.store
            .delete_movie(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }
}
