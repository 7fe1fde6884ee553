use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{MovieService, ReviewService, SeaOrmMovieService, SeaOrmReviewService};
use crate::validation::MovieValidator;

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub movie_service: Arc<dyn MovieService>,

    pub review_service: Arc<dyn ReviewService>,
}

impl SharedState {
    /// Opens the database (migrating it once) and wires the services.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let validator = Arc::new(MovieValidator::new(&config.validation));

        let movie_service = Arc::new(SeaOrmMovieService::new(store.clone(), validator))
            as Arc<dyn MovieService>;

        let review_service = Arc::new(SeaOrmReviewService::new(store.clone()))
            as Arc<dyn ReviewService>;

        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            movie_service,
            review_service,
        }
    }
}
