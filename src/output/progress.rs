//! Progress reporting
//!
//! The driver reports `(completed, total)` after every extracted machine;
//! rendering is the reporter's business and the driver never blocks on it.

use std::io::Write;

/// Receives progress updates from the crawl driver
pub trait ProgressReporter {
    /// Called after every extracted machine with the running counts
    ///
    /// `completed` is non-decreasing across a crawl and never exceeds
    /// `total`.
    fn report(&mut self, completed: u64, total: u64);

    /// Called once after the last update of a crawl
    fn finish(&mut self) {}
}

/// Renders a ten-slot progress bar on stdout
///
/// The bar overdraws itself with a carriage return, matching the shape
/// `Progress: 62.5% [######    ] 5/8`.
pub struct ConsoleProgress {
    slots: u64,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { slots: 10 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&mut self, completed: u64, total: u64) {
        if total == 0 {
            return;
        }

        let percentage = completed as f64 / total as f64 * 100.0;
        let filled = (completed * self.slots / total) as usize;
        let empty = self.slots as usize - filled;

        print!(
            "Progress: {:.1}% [{}{}] {}/{}\r",
            percentage,
            "#".repeat(filled),
            " ".repeat(empty),
            completed,
            total
        );
        let _ = std::io::stdout().flush();
    }

    fn finish(&mut self) {
        println!();
    }
}

/// Discards progress updates
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn report(&mut self, _completed: u64, _total: u64) {}
}
