//! Line roles of a tournament summary.
//!
//! A summary is positional: the meaning of a line is decided by its index.
//! [`LAYOUT`] is the only place where positions are bound to roles.
//!
//! ```text
//! 0 Tournament #183300341, Daily Special $2.50 [7-Max], Hold'em No Limit
//! 1 Buy-in: $1.3+$0.2+$1
//! 2 2245 Players
//! 3 Total Prize Pool: $5,163.5
//! 4 Tournament started 2025/01/13 12:30:00
//! 5 316th : Hero, $1
//! 6 You finished the tournament in 316th place.
//! 7 You made 1 re-entries and received a total of $1.
//! ```

use std::fmt;

/// Semantic role of a summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    BuyIn,
    Players,
    PrizePool,
    StartTime,
    /// Payout table line, not consumed
    Payout,
    Placement,
    Result,
}

/// Role of every consumed line, indexed by position
pub const LAYOUT: [Field; 8] = [
    Field::Title,
    Field::BuyIn,
    Field::Players,
    Field::PrizePool,
    Field::StartTime,
    Field::Payout,
    Field::Placement,
    Field::Result,
];

impl Field {
    /// Role bound to a line position, `None` past the last consumed line
    pub fn at(position: usize) -> Option<Self> {
        LAYOUT.get(position).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::BuyIn => "buy-in",
            Self::Players => "players",
            Self::PrizePool => "prize pool",
            Self::StartTime => "start time",
            Self::Payout => "payout",
            Self::Placement => "placement",
            Self::Result => "result",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
