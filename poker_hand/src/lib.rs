//! # Poker Hand
//!
//! Tournament results from poker client hand history summaries.
//!
//! The client writes one summary file per finished tournament. This library
//! parses those files into typed [`TournamentRecord`]s, stores them, and derives
//! bankroll and ROI charts from the stored results.
//!
//! ## Core Modules
//!
//! - [`summary`]: Line-positional summary parser with currency normalization and
//!   tournament type classification
//! - [`tournament`]: Tournament record model
//! - [`db`]: PostgreSQL connection pool and tournament repository
//! - [`ingest`]: Directory import: scan, parse in parallel, store
//! - [`charts`]: Cumulative bankroll and ROI series, HTML line charts
//!
//! ## Example
//!
//! ```
//! use poker_hand::summary::{ParseOutcome, parse_summary_text};
//!
//! let text = "\
//! Tournament #183300341, Bounty Hunters Special $2.50 [7-Max], Hold'em No Limit
//! Buy-in: $1.3+$0.2+$1
//! 2245 Players
//! Total Prize Pool: $5,163.5
//! Tournament started 2025/01/13 12:30:00
//! 316th : Hero, $1
//! You finished the tournament in 316th place.
//! You made 1 re-entries and received a total of $1.";
//!
//! let ParseOutcome::Parsed(record) = parse_summary_text(text) else {
//!     panic!("summary should parse");
//! };
//! assert_eq!(record.id, "183300341");
//! assert_eq!(record.reentries, 1);
//! ```

/// Bankroll and ROI charts.
pub mod charts;

/// Tournament persistence.
pub mod db;

/// Directory import of summary files.
pub mod ingest;

/// Hand history summary parser.
pub mod summary;

/// Tournament record model.
pub mod tournament;

pub use summary::{ParseError, ParseOutcome, SkipReason, parse_summary, parse_summary_text};
pub use tournament::{TournamentId, TournamentRecord, TournamentType};
