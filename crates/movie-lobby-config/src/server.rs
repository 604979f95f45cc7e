use crate::env;
use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = env::required(lookup, "PORT")?;
        let port = port.parse().map_err(|_| ConfigError::Invalid {
            key: "PORT".to_string(),
            value: port,
        })?;

        Ok(Self {
            host: env::optional(lookup, "HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
