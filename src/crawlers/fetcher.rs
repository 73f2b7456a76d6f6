use crate::error::FetchError;
use async_trait::async_trait;

/// Retrieves page bodies for a batch
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue one GET for `url`, returning the body only for status 200
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
