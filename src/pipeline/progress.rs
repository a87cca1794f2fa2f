// file: src/pipeline/progress.rs
// description: progress tracking and statistics for manifest fetches
// reference: uses indicatif for progress bars and tracks fetch metrics

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchStats {
    pub manifests_fetched: usize,
    pub manifests_failed: usize,
    pub assets_seen: usize,
    pub duration_ms: u64,
}

impl FetchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manifests_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        self.manifests_fetched as f64 / (self.duration_ms as f64 / 1000.0)
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.manifests_fetched + self.manifests_failed;
        if total == 0 {
            return 0.0;
        }
        (self.manifests_fetched as f64 / total as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} manifests fetched, {} failed ({:.1}% ok), {} assets in {}ms ({:.2} manifests/sec)",
            self.manifests_fetched.to_string().green(),
            self.manifests_failed.to_string().red(),
            self.success_rate(),
            self.assets_seen,
            self.duration_ms,
            self.manifests_per_second()
        )
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    manifests_fetched: AtomicUsize,
    manifests_failed: AtomicUsize,
    assets_seen: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_manifests: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, total_manifests as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self::from_bars(main_bar, detail_bar)
    }

    /// Tracker that counts without drawing anything.
    pub fn hidden() -> Self {
        Self::from_bars(ProgressBar::hidden(), ProgressBar::hidden())
    }

    fn from_bars(main_bar: ProgressBar, detail_bar: ProgressBar) -> Self {
        Self {
            main_bar,
            detail_bar,
            manifests_fetched: AtomicUsize::new(0),
            manifests_failed: AtomicUsize::new(0),
            assets_seen: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn inc_fetched(&self, assets: usize) {
        self.manifests_fetched.fetch_add(1, Ordering::SeqCst);
        self.assets_seen.fetch_add(assets, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_failed(&self) {
        self.manifests_failed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn set_message(&self, message: String) {
        self.main_bar.set_message(message);
    }

    pub fn finish(&self) {
        self.main_bar.finish_and_clear();
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> FetchStats {
        FetchStats {
            manifests_fetched: self.manifests_fetched.load(Ordering::SeqCst),
            manifests_failed: self.manifests_failed.load(Ordering::SeqCst),
            assets_seen: self.assets_seen.load(Ordering::SeqCst),
            duration_ms: self.start_time.elapsed().as_millis() as u64,
        }
    }

    fn update_detail_bar(&self) {
        let assets = self.assets_seen.load(Ordering::SeqCst);
        let failed = self.manifests_failed.load(Ordering::SeqCst);

        self.detail_bar
            .set_message(format!("Assets: {} | Failed: {}", assets, failed));
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} manifests {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} manifests {msg}"
    };

    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" }));
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_stats_calculations() {
        let mut stats = FetchStats::new();
        stats.manifests_fetched = 9;
        stats.manifests_failed = 1;
        stats.duration_ms = 3000;

        assert_eq!(stats.manifests_per_second(), 3.0);
        assert!((stats.success_rate() - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_fetch_stats_summary_reports_rates() {
        colored::control::set_override(false);
        let stats = FetchStats {
            manifests_fetched: 3,
            manifests_failed: 1,
            assets_seen: 7,
            duration_ms: 2000,
        };

        assert_eq!(
            stats.summary(),
            "3 manifests fetched, 1 failed (75.0% ok), 7 assets in 2000ms (1.50 manifests/sec)"
        );
    }

    #[test]
    fn test_fetch_stats_empty() {
        let stats = FetchStats::new();
        assert_eq!(stats.manifests_per_second(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::hidden();

        tracker.inc_fetched(4);
        tracker.inc_fetched(2);
        tracker.inc_failed();

        let stats = tracker.get_stats();
        assert_eq!(stats.manifests_fetched, 2);
        assert_eq!(stats.manifests_failed, 1);
        assert_eq!(stats.assets_seen, 6);
    }
}
