use clap::Parser;
use page_harvest::progress::ProgressBarReporter;
use page_harvest::{Harvest, display};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

mod args;
use args::{Args, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();
    let urls = args.collect_urls();

    // Configuration file first, then command-line overrides
    let mut harvest = Harvest::new(urls.clone());
    if let Some(path) = &args.config {
        harvest = match harvest.with_config_file(path) {
            Ok(harvest) => harvest,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        };
    }
    if let Some(concurrent) = args.concurrent {
        harvest = harvest.with_max_concurrency(concurrent);
    }
    if let Some(timeout) = args.timeout {
        harvest = harvest.with_timeout_secs(timeout);
    }

    eprintln!("Starting page harvest with {} URLs", urls.len());
    eprintln!(
        "Maximum concurrent requests: {}",
        harvest.config().max_concurrency
    );

    let reporter = Arc::new(if args.no_progress {
        ProgressBarReporter::hidden(urls.len())
    } else {
        ProgressBarReporter::new(urls.len())
    });
    harvest = harvest.with_progress(reporter.clone());

    let start_time = std::time::Instant::now();
    let results = match harvest.run().await {
        Ok(results) => results,
        Err(e) => {
            reporter.finish();
            ::log::error!("Harvest failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    reporter.finish();

    eprintln!(
        "\nCompleted in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match args.format {
        OutputFormat::Text => display::write_text(&mut out, &results),
        OutputFormat::Json => display::write_json(&mut out, &results),
    }
    .and_then(|_| out.flush());

    if let Err(e) = written {
        ::log::error!("Failed to write results: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
