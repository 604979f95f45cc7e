use crate::env;
use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime in seconds of tokens minted by `create_token`.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: 3600, // 1 hour
        }
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            secret: env::required(lookup, "JWT_SECRET")?,
            token_expiry: env::parse(lookup, "JWT_EXPIRY", 3600)?,
        })
    }
}
