use clap::{Parser, ValueEnum};
use page_harvest::utils::read_url_list;
use std::path::PathBuf;

/// URLs harvested when none are given
pub const DEFAULT_URLS: [&str; 5] = [
    "https://www.rust-lang.org",
    "https://doc.rust-lang.org/std/",
    "https://crates.io",
    "https://en.wikipedia.org/wiki/Rust_(programming_language)",
    "https://github.com/rust-lang/rust",
];

#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(about = "Concurrently fetch pages and report their title, description and links")]
#[command(version)]
pub struct Args {
    /// URLs to harvest (space-separated)
    pub urls: Vec<String>,

    /// File containing URLs (one per line)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Maximum concurrent requests
    #[arg(short = 'c', long)]
    pub concurrent: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// JSON configuration file (command-line flags take precedence)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    /// Positional URLs followed by those from `--file`, or the defaults if both are empty
    ///
    /// An unreadable file is reported and skipped.
    pub fn collect_urls(&self) -> Vec<String> {
        let mut urls = self.urls.clone();

        if let Some(path) = &self.file {
            match read_url_list(path) {
                Ok(file_urls) => urls.extend(file_urls),
                Err(e) => {
                    ::log::error!("Error reading file {}: {}", path.display(), e);
                    eprintln!("Error reading file: {}", e);
                }
            }
        }

        if urls.is_empty() {
            ::log::info!("No URLs given, using the default list");
            urls = DEFAULT_URLS.iter().map(|u| u.to_string()).collect();
        }

        urls
    }
}
