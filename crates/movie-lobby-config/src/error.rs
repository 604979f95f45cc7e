use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: String, value: String },
}
