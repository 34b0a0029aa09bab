//! Results of one import run.

use std::path::PathBuf;

use super::errors::FileError;
use crate::summary::SkipReason;
use crate::tournament::TournamentRecord;

/// Per-file parse results of a directory
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Number of summary files found
    pub files: usize,
    pub parsed: Vec<TournamentRecord>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    pub failed: Vec<(PathBuf, FileError)>,
}

impl IngestReport {
    /// Sum of buy-ins of all parsed records
    pub fn total_buy_in(&self) -> f64 {
        self.parsed.iter().map(|r| r.buy_in).sum()
    }

    /// Sum of prizes of all parsed records
    pub fn total_prize(&self) -> f64 {
        self.parsed.iter().map(|r| r.my_prize).sum()
    }

    /// The `n` most expensive tournaments, highest buy-in first
    pub fn top_by_buy_in(&self, n: usize) -> Vec<&TournamentRecord> {
        let mut records: Vec<&TournamentRecord> = self.parsed.iter().collect();
        records.sort_by(|a, b| b.buy_in.total_cmp(&a.buy_in));
        records.truncate(n);
        records
    }
}

/// Counters of a completed import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub files: usize,
    pub parsed: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Records newly stored; already known ids are not counted
    pub inserted: usize,
}
