use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

use movie_lobby_config::{AppConfig, CorsConfig, JwtConfig, StoreBackend};
use movie_lobby_db::init_database;

use crate::modules::movies::MovieService;
use crate::modules::movies::store::{
    InMemoryMovieRepository, MongoMovieRepository, MovieRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieService,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub metrics: Option<PrometheusHandle>,
}

/// Builds the shared state, connecting to MongoDB unless the in-memory
/// backend is selected.
///
/// # Errors
///
/// Fails when MongoDB cannot be reached. Callers treat this as fatal.
pub async fn init_app_state(
    config: &AppConfig,
    metrics: Option<PrometheusHandle>,
) -> anyhow::Result<AppState> {
    let repository: Arc<dyn MovieRepository> = match config.database.backend {
        StoreBackend::Mongo => {
            let database = init_database(&config.database).await?;
            Arc::new(MongoMovieRepository::new(
                database,
                &config.database.collection,
            ))
        }
        StoreBackend::Memory => {
            info!("Using in-memory movie store; data is discarded on exit");
            Arc::new(InMemoryMovieRepository::new())
        }
    };

    Ok(AppState {
        movies: MovieService::new(repository, config.database.timeout),
        jwt_config: config.jwt.clone(),
        cors_config: config.cors.clone(),
        metrics,
    })
}
