//! Progress tracking for interactive runs and batch sweeps

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ITERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Runs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates the progress bars of a CLI invocation
///
/// A batch bar counts finished runs; the iteration bar follows the passes of the
/// run currently animating.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    iteration_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            iteration_bar: None,
        }
    }

    /// Show an overall bar for `run_count` batch runs
    pub fn initialize_batch(&mut self, run_count: usize) {
        let bar = ProgressBar::new(run_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(bar));
    }

    /// Describe the batch configuration currently running
    pub fn set_batch_message(&self, message: String) {
        if let Some(ref bar) = self.batch_bar {
            bar.set_message(message);
        }
    }

    /// Count one finished batch run
    pub fn complete_batch_run(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Start the iteration bar for a run capped at `iteration_cap` passes
    pub fn start_run(&mut self, label: String, iteration_cap: usize) {
        let bar = ProgressBar::new(iteration_cap as u64);
        bar.set_style(ITERATION_STYLE.clone());
        bar.set_prefix(label);
        self.iteration_bar = Some(self.multi_progress.add(bar));
    }

    /// Report a finished pass with the satisfaction of both groups
    pub fn update_iteration(&self, iteration: usize, satisfaction_high: u8, satisfaction_low: u8) {
        if let Some(ref bar) = self.iteration_bar {
            bar.set_position(iteration as u64);
            bar.set_message(format!(
                "high {satisfaction_high:>3}% low {satisfaction_low:>3}%"
            ));
        }
    }

    /// Close the iteration bar with a final status line
    pub fn finish_run(&mut self, status: String) {
        if let Some(bar) = self.iteration_bar.take() {
            bar.finish_with_message(status);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All runs processed");
        }
        let _ = self.multi_progress.clear();
    }
}
