use crate::config::HarvestConfig;
use crate::crawlers::fetcher::Fetcher;
use crate::error::FetchError;
use crate::parsers;
use crate::progress::Progress;
use crate::results::PageResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// Limits applied to one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Maximum fetches in flight at once
    pub max_concurrency: usize,
    /// Independent timeout for each fetch
    pub timeout: Duration,
    /// Links kept per page
    pub max_links: usize,
}

impl BatchOptions {
    pub fn from_config(config: &HarvestConfig) -> Self {
        Self {
            max_concurrency: config.max_concurrency,
            timeout: config.timeout(),
            max_links: config.max_links,
        }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::from_config(&HarvestConfig::default())
    }
}

/// Fetches and extracts every URL, returning one result per URL in input order.
///
/// At most `options.max_concurrency` fetches run at once. A failing URL
/// (error status, transport error, timeout or a panicking task) yields
/// [`PageResult::failed`] in its own slot and never affects the others.
///
/// # Arguments
///
/// * `urls` - URLs to fetch, each attempted exactly once
/// * `fetcher` - Shared fetcher used by every task
/// * `options` - Concurrency cap, per-fetch timeout and link limit
/// * `progress` - Advanced once per finished URL, if present
pub async fn harvest(
    urls: &[String],
    fetcher: Arc<dyn Fetcher>,
    options: &BatchOptions,
    progress: Option<Arc<dyn Progress>>,
) -> Vec<PageResult> {
    if urls.is_empty() {
        return Vec::new();
    }

    ::log::info!(
        "Harvesting {} URLs with at most {} in flight",
        urls.len(),
        options.max_concurrency
    );

    let semaphore = Arc::new(Semaphore::new(options.max_concurrency.max(1)));

    // Handles are kept in submission order, so each one is its URL's output slot
    let handles: Vec<JoinHandle<PageResult>> = urls
        .iter()
        .enumerate()
        .map(|(index, url)| {
            spawn_page_task(
                index,
                url.clone(),
                Arc::clone(&fetcher),
                Arc::clone(&semaphore),
                options.clone(),
                progress.clone(),
            )
        })
        .collect();

    let mut results = Vec::with_capacity(urls.len());
    for (index, handle) in handles.into_iter().enumerate() {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => {
                ::log::error!("Error fetching {}: {}", urls[index], e);
                if let Some(progress) = &progress {
                    progress.advance();
                }
                PageResult::failed(urls[index].as_str())
            }
        };
        results.push(result);
    }

    let fetched = results.iter().filter(|r| r.is_fetched()).count();
    ::log::info!(
        "Batch complete: {} of {} URLs fetched",
        fetched,
        results.len()
    );

    results
}

/// Spawns the fetch+extract task for one URL
fn spawn_page_task(
    index: usize,
    url: String,
    fetcher: Arc<dyn Fetcher>,
    semaphore: Arc<Semaphore>,
    options: BatchOptions,
    progress: Option<Arc<dyn Progress>>,
) -> JoinHandle<PageResult> {
    ::log::trace!("Queuing URL {}: {}", index, url);

    tokio::spawn(async move {
        let body = match semaphore.acquire_owned().await {
            Ok(_permit) => {
                ::log::trace!("URL {} acquired a fetch slot", index);
                fetch_with_timeout(fetcher.as_ref(), &url, options.timeout).await
            }
            Err(e) => Err(FetchError::Aborted(e.to_string())),
        };

        let body = match body {
            Ok(body) => Some(body),
            Err(e) => {
                ::log::error!("Error fetching {}: {}", url, e);
                None
            }
        };

        let result = parsers::extract(&url, body.as_deref(), options.max_links);

        if let Some(progress) = &progress {
            progress.advance();
        }

        result
    })
}

async fn fetch_with_timeout(
    fetcher: &dyn Fetcher,
    url: &str,
    limit: Duration,
) -> Result<String, FetchError> {
    match timeout(limit, fetcher.fetch(url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(limit)),
    }
}
