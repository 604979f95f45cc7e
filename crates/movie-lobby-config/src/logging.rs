use crate::env;

#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for the rolling JSON log file. `None` disables file output.
    pub dir: Option<String>,
}

impl LogConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dir = match env::optional(lookup, "LOG_DIR") {
            Some(dir) if dir.eq_ignore_ascii_case("off") => None,
            Some(dir) => Some(dir),
            None => Some("storage/logs".to_string()),
        };

        Self {
            level: env::optional(lookup, "LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            dir,
        }
    }
}
