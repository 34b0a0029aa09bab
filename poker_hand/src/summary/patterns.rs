//! Compiled text patterns shared by all extractors.

use regex::Regex;
use std::sync::LazyLock;

/// Currency symbol followed by an amount with optional grouping commas
const AMOUNT: &str = r"([$¥€])([0-9][0-9,]*(?:\.[0-9]+)?)";

/// Every pattern the extractors match against
pub struct Patterns {
    pub amount: Regex,
    pub players: Regex,
    pub prize_pool: Regex,
    pub placement: Regex,
    pub reentries: Regex,
    pub my_prize: Regex,
    pub no_chips: Regex,
}

impl Patterns {
    fn compile() -> Self {
        Self {
            amount: compile(AMOUNT),
            players: compile(r"^\s*(\d+) Players\s*$"),
            prize_pool: compile(&format!(r"Total Prize Pool:\s*{AMOUNT}")),
            placement: compile(r"(\d+)(?:st|nd|rd|th)? place"),
            reentries: compile(r"You made (\d+) re-entries"),
            my_prize: compile(&format!(r"received a total of [TC,]?{AMOUNT}")),
            no_chips: compile(r"\b0 chips\b"),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    // Patterns are constants; a failure here is a programming error.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid summary pattern {pattern:?}: {e}"))
}

/// Process-wide pattern set, compiled on first use
pub static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::compile);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        let p = &*PATTERNS;
        assert!(p.amount.is_match("$1,234.50"));
        assert!(p.players.is_match("2245 Players"));
        assert!(!p.no_chips.is_match("10 chips"));
        assert!(p.no_chips.is_match("with 0 chips left"));
    }
}
