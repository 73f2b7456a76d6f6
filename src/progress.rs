use indicatif::{ProgressBar, ProgressStyle};

/// Receives one signal per finished URL, successful or not
pub trait Progress: Send + Sync {
    /// Advance by one unit
    fn advance(&self);
}

/// Terminal progress bar backed by indicatif
pub struct ProgressBarReporter {
    bar: ProgressBar,
}

impl ProgressBarReporter {
    /// Create a bar sized for `total` URLs
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        match ProgressStyle::with_template(
            "{spinner:.green} {msg} [{bar:40.cyan/blue}] {percent:>3}% {elapsed_precise}",
        ) {
            Ok(style) => bar.set_style(style.progress_chars("=> ")),
            Err(e) => ::log::debug!("Falling back to default progress style: {}", e),
        }
        bar.set_message("Harvesting pages...");
        Self { bar }
    }

    /// Create a reporter that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Number of URLs reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total the bar was sized for
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Progress for ProgressBarReporter {
    fn advance(&self) {
        self.bar.inc(1);
    }
}
