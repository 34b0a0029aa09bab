//! Tournament result data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tournament ID type, the numeric identifier from the summary title
pub type TournamentId = String;

/// Tournament format category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentType {
    /// Bounty / knockout formats
    Bounty,
    /// Regular scheduled tournaments, also the fallback category
    Classic,
    Turbo,
    Hyper,
    /// Tournament builder series
    Builder,
    Freeroll,
    FlipAndGo,
    /// Satellites and qualifier steps
    Satellite,
    DeepStacks,
    Shootout,
    Flipout,
}

impl TournamentType {
    /// All categories, in declaration order
    pub const ALL: [TournamentType; 11] = [
        TournamentType::Bounty,
        TournamentType::Classic,
        TournamentType::Turbo,
        TournamentType::Hyper,
        TournamentType::Builder,
        TournamentType::Freeroll,
        TournamentType::FlipAndGo,
        TournamentType::Satellite,
        TournamentType::DeepStacks,
        TournamentType::Shootout,
        TournamentType::Flipout,
    ];

    /// Stable tag used for storage and the API
    pub fn as_str(self) -> &'static str {
        match self {
            TournamentType::Bounty => "bounty",
            TournamentType::Classic => "classic",
            TournamentType::Turbo => "turbo",
            TournamentType::Hyper => "hyper",
            TournamentType::Builder => "builder",
            TournamentType::Freeroll => "freeroll",
            TournamentType::FlipAndGo => "flip_and_go",
            TournamentType::Satellite => "satellite",
            TournamentType::DeepStacks => "deep_stacks",
            TournamentType::Shootout => "shootout",
            TournamentType::Flipout => "flipout",
        }
    }
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tournament type tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tournament type: {0}")]
pub struct UnknownTournamentType(pub String);

impl FromStr for TournamentType {
    type Err = UnknownTournamentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TournamentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTournamentType(s.to_string()))
    }
}

/// One finished tournament, as read from a hand history summary
///
/// All amounts are in dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecord {
    /// Tournament identifier (digits only)
    pub id: TournamentId,
    /// Title line, verbatim
    pub name: String,
    /// Format category
    #[serde(rename = "type")]
    pub kind: TournamentType,
    /// Sum of all buy-in fee components
    pub buy_in: f64,
    /// Entrant count
    pub players: u32,
    /// Stated total prize pool, rake excluded
    pub total_prize_pool: f64,
    /// Start instant
    pub started: DateTime<Utc>,
    /// Finishing position (1-indexed)
    pub my_place: u32,
    /// Amount won, 0 when eliminated without prize
    pub my_prize: f64,
    /// Re-entries purchased
    pub reentries: u32,
    /// Complimentary entry, set by the owner after import
    pub free: bool,
}

impl TournamentRecord {
    /// Buy-in actually paid: nothing for a free entry
    pub fn paid_buy_in(&self) -> f64 {
        if self.free { 0.0 } else { self.buy_in }
    }

    /// Prize minus the paid buy-in
    pub fn net_result(&self) -> f64 {
        self.my_prize - self.paid_buy_in()
    }

    /// Whether the player finished with a prize
    pub fn in_the_money(&self) -> bool {
        self.my_prize > 0.0
    }
}
