pub mod batch;
pub mod fetcher;
pub mod http;

pub use batch::{BatchOptions, harvest};
pub use fetcher::Fetcher;
pub use http::HttpFetcher;
