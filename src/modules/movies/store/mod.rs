//! Persistence backends for the movie catalog.
//!
//! [`MovieRepository`] is the seam between the service and the database.
//! Backends report a missing record as `Ok(None)` and any driver failure
//! as an `anyhow::Error`; validation and timeouts are handled one level up
//! in [`MovieService`](super::service::MovieService).
//!
//! - [`MongoMovieRepository`]: one document per movie in a MongoDB collection
//! - [`InMemoryMovieRepository`]: a process-local `Vec`, for tests and local runs

use anyhow::Result;
use async_trait::async_trait;

use super::model::{CreateMovieDto, Movie, UpdateMovieDto};

pub mod memory;
pub mod mongo;

pub use memory::InMemoryMovieRepository;
pub use mongo::MongoMovieRepository;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Persists a new movie and returns it with its assigned id.
    async fn insert(&self, movie: &CreateMovieDto) -> Result<Movie>;

    /// Every movie, in store-native order.
    async fn find_all(&self) -> Result<Vec<Movie>>;

    /// Movies whose title or genre contains `text`, ignoring case.
    async fn find_matching(&self, text: &str) -> Result<Vec<Movie>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>>;

    /// Applies `changes` and returns the record as it is after the update.
    async fn update_by_id(&self, id: &str, changes: &UpdateMovieDto) -> Result<Option<Movie>>;

    /// Removes the record and returns what was removed.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Movie>>;

    /// Round-trip to the backend, used by the health check.
    async fn ping(&self) -> Result<()>;
}

/// Case-insensitive pattern matching `text` literally.
pub(crate) fn contains_pattern(text: &str) -> String {
    regex::escape(text)
}
