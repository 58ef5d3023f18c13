use std::env;
use std::str::FromStr;
use std::time::Duration;

use content_sync_core::document::merge::MergeStrategy;
use content_sync_core::store::SanityConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    pub sanity_project_id: String,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    /// Token with write access, used for every store call.
    pub sanity_token: Option<String>,
    /// Overrides the project API host (local fakes, proxies).
    pub sanity_api_host: Option<String>,
    /// How INSERT/UPDATE events combine with stored documents.
    pub sync_strategy: MergeStrategy,
    /// Shared secret expected in `x-webhook-secret`; unchecked when unset.
    pub webhook_secret: Option<String>,
    pub http_timeout_secs: u64,
    /// Maximum accepted webhook body size.
    pub body_limit_bytes: usize,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&var, "PORT", 3030)?,
            sanity_project_id: var("SANITY_PROJECT_ID").ok_or(ConfigError::Missing("SANITY_PROJECT_ID"))?,
            sanity_dataset: var("SANITY_DATASET").unwrap_or_else(|| "production".to_string()),
            sanity_api_version: var("SANITY_API_VERSION").unwrap_or_else(|| "2024-01-01".to_string()),
            sanity_token: var("SANITY_API_WRITE_TOKEN"),
            sanity_api_host: var("SANITY_API_HOST"),
            sync_strategy: parse_or(&var, "SYNC_STRATEGY", MergeStrategy::Merge)?,
            webhook_secret: var("WEBHOOK_SECRET"),
            http_timeout_secs: parse_or(&var, "HTTP_TIMEOUT_SECS", 10)?,
            body_limit_bytes: parse_or(&var, "BODY_LIMIT_BYTES", 1024 * 1024)?,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn sanity(&self) -> SanityConfig {
        SanityConfig {
            project_id: self.sanity_project_id.clone(),
            dataset: self.sanity_dataset.clone(),
            api_version: self.sanity_api_version.clone(),
            token: self.sanity_token.clone(),
            api_host: self.sanity_api_host.clone(),
            timeout: Duration::from_secs(self.http_timeout_secs),
        }
    }
}

fn parse_or<T, F>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
