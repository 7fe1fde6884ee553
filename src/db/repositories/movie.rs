use crate::entities::{movies, prelude::*, reviews};
use crate::models::{Genre, Movie, MovieFields, Review};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, warn};

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn map_review(model: reviews::Model) -> Review {
        Review {
            id: model.id,
            movie_id: model.movie_id,
            rating: model.rating,
        }
    }

    fn map_model_to_movie(model: movies::Model, mut reviews: Vec<reviews::Model>) -> Movie {
        let genre = model.genre.parse().unwrap_or_else(|_| {
            warn!(movie_id = model.id, genre = %model.genre, "Unknown genre in database");
            Genre::Unassigned
        });

        reviews.sort_by_key(|r| r.id);

        Movie {
            id: model.id,
            title: model.title,
            release_date: model.release_date,
            description: model.description,
            price: model.price,
            genre,
            rating: model.rating,
            audience: model.audience,
            reviews: reviews.into_iter().map(Self::map_review).collect(),
        }
    }

    fn active_model(fields: MovieFields) -> movies::ActiveModel {
        movies::ActiveModel {
            title: Set(fields.title),
            release_date: Set(fields.release_date),
            description: Set(fields.description),
            price: Set(fields.price),
            genre: Set(fields.genre.as_str().to_string()),
            rating: Set(fields.rating),
            audience: Set(fields.audience),
            ..Default::default()
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Movie>> {
        let movies = Movies::find()
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await?;
        let reviews = movies.load_many(Reviews, &self.conn).await?;

        Ok(movies
            .into_iter()
            .zip(reviews)
            .map(|(movie, reviews)| Self::map_model_to_movie(movie, reviews))
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Movie>> {
        let Some(movie) = Movies::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let reviews = movie.find_related(Reviews).all(&self.conn).await?;
        Ok(Some(Self::map_model_to_movie(movie, reviews)))
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        let count = Movies::find()
            .filter(movies::Column::Id.eq(id))
            .count(&self.conn)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Movies::find().count(&self.conn).await?)
    }

    pub async fn create(&self, fields: MovieFields) -> Result<Movie> {
        let model = Self::active_model(fields).insert(&self.conn).await?;
        info!("Created movie {}: {}", model.id, model.title);
        Ok(Self::map_model_to_movie(model, Vec::new()))
    }

    /// Replaces every column of an existing movie. Returns `None` if it does not exist.
    pub async fn update(&self, id: i32, fields: MovieFields) -> Result<Option<Movie>> {
        let txn = self.conn.begin().await?;

        if Movies::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(None);
        }

        let mut active = Self::active_model(fields);
        active.id = Set(id);
        let model = active.update(&txn).await?;
        let reviews = model.find_related(Reviews).all(&txn).await?;

        txn.commit().await?;
        info!("Updated movie {}: {}", model.id, model.title);
        Ok(Some(Self::map_model_to_movie(model, reviews)))
    }

    /// Deletes a movie and its reviews, returning what was removed.
    pub async fn delete(&self, id: i32) -> Result<Option<Movie>> {
        let txn = self.conn.begin().await?;

        let Some(model) = Movies::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let reviews = model.find_related(Reviews).all(&txn).await?;

        Reviews::delete_many()
            .filter(reviews::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;
        Movies::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!("Deleted movie {} with {} reviews", id, reviews.len());
        Ok(Some(Self::map_model_to_movie(model, reviews)))
    }
}
