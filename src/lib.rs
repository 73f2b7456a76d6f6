// Re-export modules
pub mod config;
pub mod crawlers;
pub mod display;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod progress;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use crawlers::{Fetcher, HttpFetcher};
pub use error::{ConfigError, FetchError, HarvestError};
pub use progress::Progress;
pub use results::{NO_DESCRIPTION, NO_TITLE, PageResult};

use crawlers::BatchOptions;
use std::sync::Arc;
use std::time::Duration;

/// Main builder for a single harvest batch
pub struct Harvest {
    urls: Vec<String>,
    config: HarvestConfig,
    timeout: Option<Duration>,
    fetcher: Option<Arc<dyn Fetcher>>,
    progress: Option<Arc<dyn Progress>>,
}

impl Harvest {
    /// Create a new Harvest builder for the given URLs
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            config: HarvestConfig::default(),
            timeout: None,
            fetcher: None,
            progress: None,
        }
    }

    /// Set the maximum number of concurrent requests
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Set the per-request timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self.timeout = None;
        self
    }

    /// Set the per-request timeout with sub-second precision
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set how many links are kept per page
    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.config.max_links = max_links;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: HarvestConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let config = HarvestConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, ConfigError> {
        let config = HarvestConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Use a custom fetcher instead of the default HTTP client
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Report per-URL completion to `progress`
    pub fn with_progress(mut self, progress: Arc<dyn Progress>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Current configuration
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Run the batch and return one result per URL, in input order
    ///
    /// Only setup problems are errors; every per-URL failure is reported as
    /// a [`PageResult`] with no title, description or links.
    pub async fn run(self) -> Result<Vec<PageResult>, HarvestError> {
        self.config.validate()?;

        let mut options = BatchOptions::from_config(&self.config);
        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err(ConfigError::Invalid("timeout must be non-zero".to_string()).into());
            }
            options.timeout = timeout;
        }

        // The HTTP pool is scoped to this batch and dropped with it
        let fetcher: Arc<dyn Fetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpFetcher::new(&self.config).map_err(HarvestError::Client)?),
        };

        let results = crawlers::harvest(&self.urls, fetcher, &options, self.progress).await;
        Ok(results)
    }
}
