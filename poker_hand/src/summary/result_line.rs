//! Final summary line: prize and re-entries.

use super::errors::{ParseError, ParseResult};
use super::extract::labelled_amount;
use super::fields::Field;
use super::patterns::PATTERNS;

/// Phrase written while the player is still in a multi-stage event
pub const ADVANCED_PHRASE: &str = "You have advanced to";

/// Outcome of the result line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultLine {
    /// Player advanced to a later stage; the tournament is not over
    Pending,
    /// Tournament finished for the player
    Finished { prize: f64, reentries: u32 },
}

/// Decode the result line
///
/// ```text
/// You made 1 re-entries and received a total of $1.
/// You received a total of $1.
/// You have advanced to the next stage.
/// ```
pub fn parse_result(line: &str) -> ParseResult<ResultLine> {
    if line.contains(ADVANCED_PHRASE) {
        return Ok(ResultLine::Pending);
    }

    let prize = PATTERNS.my_prize.captures(line);

    if prize.is_none() && PATTERNS.no_chips.is_match(line) {
        return Ok(ResultLine::Finished {
            prize: 0.0,
            reentries: 0,
        });
    }

    let reentries = match PATTERNS.reentries.captures(line).and_then(|caps| caps.get(1)) {
        Some(count) => count.as_str().parse().map_err(|_| ParseError::Malformed {
            field: Field::Result,
            line: line.to_string(),
        })?,
        None => 0,
    };

    let caps = prize.ok_or_else(|| ParseError::NoPrize(line.to_string()))?;
    let prize = labelled_amount(Field::Result, &caps, line)?;

    Ok(ResultLine::Finished { prize, reentries })
}
