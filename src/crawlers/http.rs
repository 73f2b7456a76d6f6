use crate::config::HarvestConfig;
use crate::crawlers::fetcher::Fetcher;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Fetcher backed by a pooled reqwest client
///
/// The pool lives as long as the fetcher; dropping it after a batch
/// releases every connection.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a client sized for `config.max_concurrency` connections per host
    pub fn new(config: &HarvestConfig) -> Result<Self, reqwest::Error> {
        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(config.max_concurrency)
            .build()?;

        ::log::debug!(
            "HTTP client ready: timeout {:?}, pool size {}",
            timeout,
            config.max_concurrency
        );

        Ok(Self { client, timeout })
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Request(err)
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        ::log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| self.classify(e))
    }
}
