//! `SeaORM` implementation of the `ReviewService` trait.

use crate::db::Store;
use crate::models::{Review, ReviewInput};
use crate::services::review_service::{ReviewError, ReviewService};
use async_trait::async_trait;
use tracing::info;

pub struct SeaOrmReviewService {
    store: Store,
}

impl SeaOrmReviewService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn ensure_movie(&self, movie_id: Option<i32>) -> Result<(), ReviewError> {
        match movie_id {
            Some(movie_id) if !self.store.movie_exists(movie_id).await? => {
                Err(ReviewError::MovieNotFound(movie_id))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ReviewService for SeaOrmReviewService {
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError> {
        Ok(self.store.list_reviews().await?)
    }

    async fn get_review(&self, id: i32) -> Result<Review, ReviewError> {
        self.store
            .get_review(id)
            .await?
            .ok_or(ReviewError::NotFound(id))
    }

    async fn create_review(&self, input: ReviewInput) -> Result<Review, ReviewError> {
        if let Some(id) = input.id
            && self.store.review_exists(id).await?
        {
            return Err(ReviewError::Conflict(id));
        }
        self.ensure_movie(input.movie_id).await?;

        let review = self
            .store
            .create_review(input.id, input.movie_id, input.rating)
            .await?;
        info!(review_id = review.id, movie_id = ?review.movie_id, "Review created");
        Ok(review)
    }

    async fn update_review(&self, id: i32, input: ReviewInput) -> Result<(), ReviewError> {
        if let Some(body_id) = input.id
            && body_id != id
        {
            return Err(ReviewError::IdMismatch { path: id, body: body_id });
        }
        self.ensure_movie(input.movie_id).await?;

        if self
            .store
            .update_review(id, input.movie_id, input.rating)
            .await?
        {
            Ok(())
        } else {
            Err(ReviewError::NotFound(id))
        }
    }

    async fn delete_review(&self, id: i32) -> Result<Review, ReviewError> {
        self.store
            .delete_review(id)
            .await?
            .ok_or(ReviewError::NotFound(id))
    }
}
