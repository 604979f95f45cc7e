use anyhow::{Result, anyhow};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use regex::RegexBuilder;
use tokio::sync::RwLock;

use super::{MovieRepository, contains_pattern};
use crate::modules::movies::model::{CreateMovieDto, Movie, UpdateMovieDto};

/// Process-local repository with the same matching rules as the MongoDB one.
///
/// Ids are freshly generated ObjectIds so they look like the ones MongoDB
/// hands out. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn insert(&self, movie: &CreateMovieDto) -> Result<Movie> {
        let movie = Movie {
            id: ObjectId::new().to_hex(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            rating: movie.rating,
            streaming_link: movie.streaming_link.clone(),
        };

        self.movies.write().await.push(movie.clone());

        Ok(movie)
    }

    async fn find_all(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.read().await.clone())
    }

    async fn find_matching(&self, text: &str) -> Result<Vec<Movie>> {
        let pattern = RegexBuilder::new(&contains_pattern(text))
            .case_insensitive(true)
            .build()
            .map_err(|e| anyhow!("Failed to build search pattern: {}", e))?;

        Ok(self
            .movies
            .read()
            .await
            .iter()
            .filter(|m| pattern.is_match(&m.title) || pattern.is_match(&m.genre))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Movie>> {
        Ok(self
            .movies
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn update_by_id(&self, id: &str, changes: &UpdateMovieDto) -> Result<Option<Movie>> {
        let mut movies = self.movies.write().await;

        Ok(movies.iter_mut().find(|m| m.id == id).map(|movie| {
            changes.apply_to(movie);
            movie.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let mut movies = self.movies.write().await;

        Ok(movies
            .iter()
            .position(|m| m.id == id)
            .map(|index| movies.remove(index)))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
