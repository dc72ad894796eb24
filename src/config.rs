//! Environment-driven configuration.

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Backend origin used when `QUILLCAST_API_URL` is unset.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8001";

/// Fixed health polling cadence.
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Delay before the post-toggle reconciliation probe.
pub const MODEL_RECONCILE_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub origin: Url,
    pub poll_interval: Duration,
    pub reconcile_delay: Duration,
}

impl Config {
    /// Read configuration from the environment, honouring a `.env` file when
    /// present. Only the backend origin is configurable; polling timings are
    /// fixed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let raw = std::env::var("QUILLCAST_API_URL").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        Self::with_origin(&raw)
    }

    pub fn with_origin(origin: &str) -> Result<Self, ConfigError> {
        let origin = Url::parse(origin).map_err(|source| ConfigError::InvalidOrigin {
            origin: origin.to_string(),
            source,
        })?;
        Ok(Self {
            origin,
            poll_interval: HEALTH_POLL_INTERVAL,
            reconcile_delay: MODEL_RECONCILE_DELAY,
        })
    }
}
