//! Summary import: scan a directory, parse every summary file in parallel and
//! store the parsed tournaments.
//!
//! Parsing shares nothing between files, so each file gets its own task. The
//! report is re-sorted by path afterwards so runs are reproducible.
//!
//! ## Example
//!
//! ```no_run
//! use poker_hand::db::MemoryTournamentRepository;
//! use poker_hand::ingest::{FailurePolicy, IngestConfig, Ingestor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = MemoryTournamentRepository::new();
//!     let config = IngestConfig::new("/data/summaries").with_policy(FailurePolicy::Continue);
//!
//!     let summary = Ingestor::new(config).run(&repo).await?;
//!     println!("Saved {} tournaments", summary.inserted);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod report;

pub use errors::{FileError, IngestError, IngestResult};
pub use report::{IngestReport, IngestSummary};

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::db::{StoreResult, TournamentRepository};
use crate::summary::{ParseOutcome, parse_summary_text};
use crate::tournament::TournamentRecord;

/// Extension of summary files
pub const SUMMARY_EXTENSION: &str = "txt";

/// Files read concurrently
pub const MAX_OPEN_FILES: usize = 64;

/// Records shown in the post-import log
const TOP_LOGGED: usize = 10;

/// What to do when a summary file is malformed or unreadable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the import at the first failure, nothing is stored
    #[default]
    Abort,
    /// Record the failure and import the remaining files
    Continue,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "continue" => Ok(FailurePolicy::Continue),
            other => Err(format!("unknown failure policy: {other}")),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Abort => f.write_str("abort"),
            FailurePolicy::Continue => f.write_str("continue"),
        }
    }
}

/// Import configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Directory scanned recursively
    pub root: PathBuf,
    /// Extension of summary files, without the dot
    pub extension: String,
    pub on_failure: FailurePolicy,
}

impl IngestConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: SUMMARY_EXTENSION.to_string(),
            on_failure: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, on_failure: FailurePolicy) -> Self {
        self.on_failure = on_failure;
        self
    }
}

/// Every regular file under `root` with the given extension, sorted
pub async fn find_summary_files(root: &Path, extension: &str) -> IngestResult<Vec<PathBuf>> {
    let scan_error = |path: &Path, source| IngestError::Scan {
        path: path.to_path_buf(),
        source,
    };

    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| scan_error(&dir, e))?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| scan_error(&dir, e))? {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(|e| scan_error(&path, e))?;

            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file()
                && path.extension().is_some_and(|ext| ext == extension)
            {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

/// Parse every file, one task per file, results sorted by path
pub async fn parse_files(
    paths: Vec<PathBuf>,
) -> IngestResult<Vec<(PathBuf, Result<ParseOutcome, std::io::Error>)>> {
    let permits = Arc::new(Semaphore::new(MAX_OPEN_FILES));
    let mut tasks = JoinSet::new();

    for path in paths {
        let permits = permits.clone();
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await;
            let outcome = tokio::fs::read_to_string(&path)
                .await
                .map(|text| parse_summary_text(&text));
            (path, outcome)
        });
    }

    let mut outcomes = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined?);
    }
    outcomes.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(outcomes)
}

/// Store records, returning how many were new
pub async fn save_all<R>(repo: &R, records: &[TournamentRecord]) -> StoreResult<usize>
where
    R: TournamentRepository + ?Sized,
{
    let mut inserted = 0;
    for record in records {
        if repo.save_tournament(record).await? {
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// Directory importer
#[derive(Debug, Clone)]
pub struct Ingestor {
    config: IngestConfig,
}

impl Ingestor {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Scan and parse, applying the failure policy
    pub async fn collect(&self) -> IngestResult<IngestReport> {
        let paths = find_summary_files(&self.config.root, &self.config.extension).await?;
        log::info!(
            "Found {} summary file(s) in {}",
            paths.len(),
            self.config.root.display()
        );

        let mut report = IngestReport {
            files: paths.len(),
            ..Default::default()
        };

        for (path, outcome) in parse_files(paths).await? {
            let failure = match outcome {
                Ok(ParseOutcome::Parsed(record)) => {
                    report.parsed.push(record);
                    continue;
                }
                Ok(ParseOutcome::Skipped(reason)) => {
                    log::debug!("Skipping {}: {}", path.display(), reason);
                    report.skipped.push((path, reason));
                    continue;
                }
                Ok(ParseOutcome::Failed(err)) => FileError::from(err),
                Err(err) => FileError::from(err),
            };

            match self.config.on_failure {
                FailurePolicy::Abort => {
                    return Err(IngestError::File {
                        path,
                        source: failure,
                    });
                }
                FailurePolicy::Continue => {
                    log::warn!("Failed to import {}: {}", path.display(), failure);
                    report.failed.push((path, failure));
                }
            }
        }

        Ok(report)
    }

    /// Scan, parse and store
    pub async fn run<R>(&self, repo: &R) -> IngestResult<IngestSummary>
    where
        R: TournamentRepository + ?Sized,
    {
        let report = self.collect().await?;

        log::info!(
            "Parsed {} tournament(s): total buy-in ${:.2}, total prize ${:.2}",
            report.parsed.len(),
            report.total_buy_in(),
            report.total_prize()
        );
        for record in report.top_by_buy_in(TOP_LOGGED) {
            log::debug!(
                "#{} {} buy-in ${:.2} place {} prize ${:.2}",
                record.id,
                record.kind,
                record.buy_in,
                record.my_place,
                record.my_prize
            );
        }

        let inserted = save_all(repo, &report.parsed).await?;
        log::info!("Saved {inserted} new tournament(s)");

        Ok(IngestSummary {
            files: report.files,
            parsed: report.parsed.len(),
            skipped: report.skipped.len(),
            failed: report.failed.len(),
            inserted,
        })
    }
}
