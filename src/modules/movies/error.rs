use std::time::Duration;

use anyhow::anyhow;
use movie_lobby_core::AppError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::validator::format_errors;

/// Failures of a movie store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Movie not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[source] anyhow::Error),

    #[error("store call exceeded {0:?}")]
    Timeout(Duration),
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Validation(format_errors(&errors))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(message) => AppError::bad_request(anyhow!(message)),
            StoreError::NotFound => AppError::not_found(anyhow!("Movie not found")),
            StoreError::Database(_) | StoreError::Timeout(_) => AppError::internal(err),
        }
    }
}
