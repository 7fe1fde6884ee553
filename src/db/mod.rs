use crate::models::{Movie, MovieFields, Review};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    /// Connects and brings the schema up to date.
    ///
    /// Safe to call on an existing database; applied migrations are skipped.
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn review_repo(&self) -> repositories::review::ReviewRepository {
        repositories::review::ReviewRepository::new(self.conn.clone())
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.movie_repo().list_all().await
    }

    pub async fn get_movie(&self, id: i32) -> Result<Option<Movie>> {
        self.movie_repo().get(id).await
    }

    pub async fn movie_exists(&self, id: i32) -> Result<bool> {
        self.movie_repo().exists(id).await
    }

    pub async fn count_movies(&self) -> Result<u64> {
        self.movie_repo().count().await
    }

    pub async fn create_movie(&self, fields: MovieFields) -> Result<Movie> {
        self.movie_repo().create(fields).await
    }

    pub async fn update_movie(&self, id: i32, fields: MovieFields) -> Result<Option<Movie>> {
        self.movie_repo().update(id, fields).await
    }

    pub async fn delete_movie(&self, id: i32) -> Result<Option<Movie>> {
        self.movie_repo().delete(id).await
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.review_repo().list_all().await
    }

    pub async fn get_review(&self, id: i32) -> Result<Option<Review>> {
        self.review_repo().get(id).await
    }

    pub async fn review_exists(&self, id: i32) -> Result<bool> {
        self.review_repo().exists(id).await
    }

    pub async fn create_review(
        &self,
        id: Option<i32>,
        movie_id: Option<i32>,
        rating: String,
    ) -> Result<Review> {
        self.review_repo().create(id, movie_id, rating).await
    }

    pub async fn update_review(
        &self,
        id: i32,
        movie_id: Option<i32>,
        rating: String,
    ) -> Result<bool> {
        self.review_repo().update(id, movie_id, rating).await
    }

    pub async fn delete_review(&self, id: i32) -> Result<Option<Review>> {
        self.review_repo().delete(id).await
    }
}
