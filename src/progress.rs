// src/progress.rs
use crate::error::FailureKind;

/// Lightweight progress reporting for a scrape run.
/// The CLI implements this to print one line per game id.
pub trait Progress {
    /// Called at the start with the number of ids in the range.
    fn begin(&mut self, _total: usize) {}

    /// One game id was written to all three tables.
    fn item_done(&mut self, _game_id: u32) {}

    /// One game id was skipped.
    fn item_failed(&mut self, _game_id: u32, _kind: FailureKind, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
