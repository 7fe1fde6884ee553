use super::movie::MovieRepository;
use crate::entities::{prelude::*, reviews};
use crate::models::Review;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

pub struct ReviewRepository {
    conn: DatabaseConnection,
}

impl ReviewRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<Review>> {
        let rows = Reviews::find()
            .order_by_asc(reviews::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(MovieRepository::map_review).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Review>> {
        let row = Reviews::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(MovieRepository::map_review))
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }

    /// Inserts a review. A `None` id lets the database assign one.
    pub async fn create(
        &self,
        id: Option<i32>,
        movie_id: Option<i32>,
        rating: String,
    ) -> Result<Review> {
        let model = reviews::ActiveModel {
            id: id.map_or(NotSet, Set),
            movie_id: Set(movie_id),
            rating: Set(rating),
        }
        .insert(&self.conn)
        .await?;

        Ok(MovieRepository::map_review(model))
    }

    /// Returns `false` if no review has this id.
    pub async fn update(&self, id: i32, movie_id: Option<i32>, rating: String) -> Result<bool> {
        if Reviews::find_by_id(id).one(&self.conn).await?.is_none() {
            return Ok(false);
        }

        reviews::ActiveModel {
            id: Set(id),
            movie_id: Set(movie_id),
            rating: Set(rating),
        }
        .update(&self.conn)
        .await?;

        Ok(true)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Review>> {
        let Some(model) = Reviews::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        Reviews::delete_by_id(id).exec(&self.conn).await?;
        Ok(Some(MovieRepository::map_review(model)))
    }
}
