//! Progress display for batch variation generation

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Variations: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single-bar progress display over a batch of variations
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the variation count
    pub fn new(count: usize) -> Self {
        let bar = ProgressBar::new(count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Show the variation currently being generated
    pub fn start_variation(&self, path: &Path) {
        let display_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.bar.set_message(display_name);
    }

    /// Mark the current variation complete
    pub fn complete_variation(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
