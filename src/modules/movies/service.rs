use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{instrument, warn};
use validator::Validate;

use super::error::StoreError;
use super::model::{CreateMovieDto, Movie, UpdateMovieDto};
use super::store::MovieRepository;

/// Store operations exposed to the handlers.
///
/// Validates input before it reaches the repository and bounds every
/// repository call with `timeout`. Cheap to clone; clones share the
/// same repository.
#[derive(Clone)]
pub struct MovieService {
    repository: Arc<dyn MovieRepository>,
    timeout: Duration,
}

impl MovieService {
    pub fn new(repository: Arc<dyn MovieRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result.map_err(StoreError::Database),
            Err(_) => {
                warn!(timeout_ms = %self.timeout.as_millis(), "Store call timed out");
                Err(StoreError::Timeout(self.timeout))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Movie>, StoreError> {
        self.bounded(self.repository.find_all()).await
    }

    /// Case-insensitive substring search over title and genre.
    /// An empty query matches every movie.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, StoreError> {
        self.bounded(self.repository.find_matching(query)).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, dto: CreateMovieDto) -> Result<Movie, StoreError> {
        dto.validate()?;

        self.bounded(self.repository.insert(&dto)).await
    }

    #[instrument(skip(self))]
    pub async fn update_by_id(&self, id: &str, dto: UpdateMovieDto) -> Result<Movie, StoreError> {
        dto.validate()?;

        self.bounded(self.repository.update_by_id(id, &dto))
            .await?
            .ok_or(StoreError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.bounded(self.repository.delete_by_id(id))
            .await?
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(self.repository.ping()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::movies::store::InMemoryMovieRepository;
    use anyhow::Result;
    use async_trait::async_trait;

    fn service() -> (MovieService, Arc<InMemoryMovieRepository>) {
        let repo = Arc::new(InMemoryMovieRepository::new());
        let service = MovieService::new(repo.clone(), Duration::from_secs(5));
        (service, repo)
    }

    fn dune() -> CreateMovieDto {
        CreateMovieDto {
            title: "Dune".to_string(),
            genre: "Sci-Fi".to_string(),
            rating: 9.0,
            streaming_link: "http://x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_input_fields() {
        let (service, _) = service();

        let movie = service.create(dune()).await.unwrap();

        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.genre, "Sci-Fi");
        assert_eq!(movie.rating, 9.0);
        assert_eq!(movie.streaming_link, "http://x");
        assert!(!movie.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_invalid_persists_nothing() {
        let (service, repo) = service();

        let out_of_range = CreateMovieDto {
            rating: 10.5,
            ..dune()
        };
        let err = service.create(out_of_range).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        let blank = CreateMovieDto {
            genre: String::new(),
            ..dune()
        };
        let err = service.create(blank).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let (service, _) = service();
        let movie = service.create(dune()).await.unwrap();
        let changes = UpdateMovieDto {
            rating: Some(8.5),
            title: Some("Dune: Part One".to_string()),
            ..Default::default()
        };

        let first = service
            .update_by_id(&movie.id, changes.clone())
            .await
            .unwrap();
        let second = service.update_by_id(&movie.id, changes).await.unwrap();

        assert_eq!(first, second);
        let all = service.list_all().await.unwrap();
        assert_eq!(all, vec![second]);
    }

    #[tokio::test]
    async fn test_update_invalid_leaves_record_untouched() {
        let (service, _) = service();
        let movie = service.create(dune()).await.unwrap();

        let err = service
            .update_by_id(
                &movie.id,
                UpdateMovieDto {
                    rating: Some(-1.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(service.list_all().await.unwrap(), vec![movie]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (service, _) = service();
        service.create(dune()).await.unwrap();

        for id in ["65a1f0c2e4b0a1b2c3d4e5f6", "not-an-object-id"] {
            let err = service
                .update_by_id(id, UpdateMovieDto::default())
                .await
                .unwrap_err();
            assert!(matches!(err, StoreError::NotFound));

            let err = service.delete_by_id(id).await.unwrap_err();
            assert!(matches!(err, StoreError::NotFound));
        }
    }

    #[tokio::test]
    async fn test_search_empty_matches_everything() {
        let (service, _) = service();
        service.create(dune()).await.unwrap();
        service
            .create(CreateMovieDto {
                title: "Heat".to_string(),
                genre: "Crime".to_string(),
                ..dune()
            })
            .await
            .unwrap();

        assert_eq!(service.search("").await.unwrap().len(), 2);
        assert_eq!(service.search("sci").await.unwrap().len(), 1);
        assert!(service.search("western").await.unwrap().is_empty());
    }

    struct StalledRepository;

    #[async_trait]
    impl MovieRepository for StalledRepository {
        async fn insert(&self, _: &CreateMovieDto) -> Result<Movie> {
            std::future::pending().await
        }
        async fn find_all(&self) -> Result<Vec<Movie>> {
            std::future::pending().await
        }
        async fn find_matching(&self, _: &str) -> Result<Vec<Movie>> {
            std::future::pending().await
        }
        async fn find_by_id(&self, _: &str) -> Result<Option<Movie>> {
            std::future::pending().await
        }
        async fn update_by_id(&self, _: &str, _: &UpdateMovieDto) -> Result<Option<Movie>> {
            std::future::pending().await
        }
        async fn delete_by_id(&self, _: &str) -> Result<Option<Movie>> {
            std::future::pending().await
        }
        async fn ping(&self) -> Result<()> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_stalled_store_times_out() {
        let service = MovieService::new(Arc::new(StalledRepository), Duration::from_millis(20));

        let err = service.list_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Timeout(_)));
    }

    struct FailingRepository;

    #[async_trait]
    impl MovieRepository for FailingRepository {
        async fn insert(&self, _: &CreateMovieDto) -> Result<Movie> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn find_all(&self) -> Result<Vec<Movie>> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn find_matching(&self, _: &str) -> Result<Vec<Movie>> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn find_by_id(&self, _: &str) -> Result<Option<Movie>> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn update_by_id(&self, _: &str, _: &UpdateMovieDto) -> Result<Option<Movie>> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn delete_by_id(&self, _: &str) -> Result<Option<Movie>> {
            Err(anyhow::anyhow!("connection refused"))
        }
        async fn ping(&self) -> Result<()> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_backend_failure_is_database_error() {
        let service = MovieService::new(Arc::new(FailingRepository), Duration::from_secs(1));

        assert!(matches!(
            service.search("x").await.unwrap_err(),
            StoreError::Database(_)
        ));
        assert!(matches!(
            service.delete_by_id("x").await.unwrap_err(),
            StoreError::Database(_)
        ));
    }
}
