//! MongoDB connection and store settings.
//!
//! # Environment Variables
//!
//! - `MONGO_URI`: MongoDB connection string (required)
//! - `MONGO_DB_NAME`: database name (default `movie_lobby`)
//! - `MONGO_COLLECTION`: collection holding movie documents (default `movies`)
//! - `STORE_TIMEOUT_SECS`: upper bound for a single store call (default 10, must be positive)
//! - `STORE_BACKEND`: `mongo` (default) or `memory` for a throwaway local run

use std::str::FromStr;
use std::time::Duration;

use crate::env;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub collection: String,
    pub timeout: Duration,
    pub backend: StoreBackend,
}

impl DatabaseConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = env::parse(lookup, "STORE_TIMEOUT_SECS", 10)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "STORE_TIMEOUT_SECS".to_string(),
                value: timeout_secs.to_string(),
            });
        }

        Ok(Self {
            uri: env::required(lookup, "MONGO_URI")?,
            database_name: env::optional(lookup, "MONGO_DB_NAME")
                .unwrap_or_else(|| "movie_lobby".to_string()),
            collection: env::optional(lookup, "MONGO_COLLECTION")
                .unwrap_or_else(|| "movies".to_string()),
            timeout: Duration::from_secs(timeout_secs),
            backend: env::parse(lookup, "STORE_BACKEND", StoreBackend::Mongo)?,
        })
    }
}
