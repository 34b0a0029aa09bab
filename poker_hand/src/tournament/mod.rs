//! Tournament result model.
//!
//! A [`TournamentRecord`] is what the summary parser produces, what the
//! repository stores and what the API and charts read back.

pub mod models;

pub use models::{TournamentId, TournamentRecord, TournamentType, UnknownTournamentType};
