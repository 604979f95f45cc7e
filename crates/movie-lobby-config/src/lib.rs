//! # Movie Lobby Config
//!
//! Configuration structures loaded once at startup from the process
//! environment.
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: MongoDB connection and store settings
//! - [`jwt`]: bearer-token verification secret
//! - [`logging`]: log level and log file directory
//! - [`server`]: listener address
//!
//! `MONGO_URI`, `JWT_SECRET` and `PORT` are required; [`AppConfig::from_env`]
//! fails with [`ConfigError::Missing`] when any of them is absent.
//!
//! # Example
//!
//! ```ignore
//! use movie_lobby_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//! println!("listening on {}", config.server.bind_address());
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod logging;
pub mod server;

mod env;

use std::collections::HashMap;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::{DatabaseConfig, StoreBackend};
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use logging::LogConfig;
pub use server::ServerConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub log: LogConfig,
    pub metrics_enabled: bool,
}

impl AppConfig {
    /// Reads every setting from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads every setting from a fixed map, mostly for tests.
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            jwt: JwtConfig::from_lookup(&lookup)?,
            cors: CorsConfig::from_lookup(&lookup),
            log: LogConfig::from_lookup(&lookup),
            metrics_enabled: env::flag(&lookup, "METRICS_ENABLED", true),
        })
    }
}
