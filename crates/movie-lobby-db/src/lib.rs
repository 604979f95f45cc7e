//! # Movie Lobby DB
//!
//! MongoDB connection bootstrap for the Movie Lobby API.
//!
//! The database must be reachable before the HTTP listener starts.
//! [`init_database`] parses the connection string, builds a client and
//! issues a `ping`, so an unreachable server surfaces as an error at
//! startup instead of on the first request.
//!
//! # Example
//!
//! ```ignore
//! use movie_lobby_config::AppConfig;
//! use movie_lobby_db::init_database;
//!
//! let config = AppConfig::from_env()?;
//! let database = init_database(&config.database).await?;
//! ```

use mongodb::Client;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use movie_lobby_config::DatabaseConfig;
use tracing::info;

/// Connects to MongoDB and verifies the connection with a `ping`.
///
/// # Errors
///
/// Returns the driver error if the URI is malformed or the server does not
/// answer within the configured store timeout.
pub async fn init_database(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.server_selection_timeout = Some(config.timeout);
    options.connect_timeout = Some(config.timeout);

    let client = Client::with_options(options)?;
    let database = client.database(&config.database_name);

    database.run_command(doc! { "ping": 1 }).await?;

    info!(
        database = %config.database_name,
        collection = %config.collection,
        "Connected to MongoDB"
    );

    Ok(database)
}

// Re-export Database for convenience
pub use mongodb::Database;
