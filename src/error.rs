use std::time::Duration;
use thiserror::Error;

/// Why a single URL produced no body
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Status {0}")]
    Status(u16),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("fetch task aborted: {0}")]
    Aborted(String),
}

/// Problems with a harvest configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Setup failures that prevent a batch from running at all
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
