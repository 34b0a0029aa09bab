//! Field extractors, one per summary line role.
//!
//! Each extractor takes the raw line and returns a typed value or a
//! [`ParseError`] naming its field. Monetary results are in dollars.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::currency::Currency;
use super::errors::{ParseError, ParseResult};
use super::fields::Field;
use super::patterns::PATTERNS;

/// Layout of the start time tokens
pub const START_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

const START_TIME_PREFIX: &str = "Tournament started";

/// A currency-tagged amount literal found in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountMatch<'a> {
    pub currency: Currency,
    /// Numeric literal as written, grouping commas included
    pub literal: &'a str,
}

/// Every `<symbol><amount>` occurrence in `line`, in order
pub fn scan_amounts(line: &str) -> impl Iterator<Item = AmountMatch<'_>> {
    PATTERNS.amount.captures_iter(line).filter_map(|caps| {
        let symbol = caps.get(1)?.as_str().chars().next()?;
        Some(AmountMatch {
            currency: Currency::from_symbol(symbol)?,
            literal: caps.get(2)?.as_str(),
        })
    })
}

/// Parse an amount literal, stripping grouping commas first
///
/// Literals too long to fit a finite `f64` are rejected.
pub fn parse_amount(field: Field, literal: &str, line: &str) -> ParseResult<f64> {
    literal
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ParseError::InvalidAmount {
            field,
            literal: literal.to_string(),
            line: line.to_string(),
        })
}

/// Sums and conversions can still overflow a finite literal
fn finite(field: Field, amount: f64, line: &str) -> ParseResult<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(ParseError::InvalidAmount {
            field,
            literal: amount.to_string(),
            line: line.to_string(),
        })
    }
}

/// Sum of every fee component of the buy-in line
///
/// `Buy-in: $1.3+$0.2+$1` yields `2.5`. The currency of the first component
/// decides the conversion rate for the whole sum.
pub fn parse_buy_in(line: &str) -> ParseResult<f64> {
    let mut currency = None;
    let mut sum = 0.0;

    for found in scan_amounts(line) {
        currency.get_or_insert(found.currency);
        sum += parse_amount(Field::BuyIn, found.literal, line)?;
    }

    match currency {
        Some(currency) => finite(Field::BuyIn, currency.to_reference(sum), line),
        None => Err(ParseError::NoAmount {
            field: Field::BuyIn,
            line: line.to_string(),
        }),
    }
}

/// Entrant count from `<n> Players`
pub fn parse_players(line: &str) -> ParseResult<u32> {
    PATTERNS
        .players
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|count| count.as_str().parse().ok())
        .ok_or_else(|| ParseError::Malformed {
            field: Field::Players,
            line: line.to_string(),
        })
}

/// Stated total prize pool from `Total Prize Pool: <symbol><amount>`
pub fn parse_prize_pool(line: &str) -> ParseResult<f64> {
    let caps = PATTERNS
        .prize_pool
        .captures(line)
        .ok_or_else(|| ParseError::NoAmount {
            field: Field::PrizePool,
            line: line.to_string(),
        })?;
    labelled_amount(Field::PrizePool, &caps, line)
}

/// Convert the `(symbol, amount)` capture pair of a labelled amount pattern
pub(crate) fn labelled_amount(
    field: Field,
    caps: &regex::Captures<'_>,
    line: &str,
) -> ParseResult<f64> {
    let currency = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Currency::from_symbol);
    let literal = caps.get(2).map(|m| m.as_str());

    match (currency, literal) {
        (Some(currency), Some(literal)) => {
            let amount = parse_amount(field, literal, line)?;
            finite(field, currency.to_reference(amount), line)
        }
        _ => Err(ParseError::NoAmount {
            field,
            line: line.to_string(),
        }),
    }
}

/// Start instant from `Tournament started YYYY/MM/DD HH:MM:SS`
///
/// Tokens after the time are ignored. The timestamp is taken as UTC.
pub fn parse_started(line: &str) -> ParseResult<DateTime<Utc>> {
    let malformed = || ParseError::Malformed {
        field: Field::StartTime,
        line: line.to_string(),
    };

    let rest = line
        .trim_start()
        .strip_prefix(START_TIME_PREFIX)
        .ok_or_else(malformed)?;
    let mut tokens = rest.split_whitespace();
    let (date, time) = match (tokens.next(), tokens.next()) {
        (Some(date), Some(time)) => (date, time),
        _ => return Err(malformed()),
    };

    NaiveDateTime::parse_from_str(&format!("{date} {time}"), START_TIME_FORMAT)
        .map(|started| started.and_utc())
        .map_err(|_| malformed())
}

/// Finishing position from `... <n>th place`, counted from 1
pub fn parse_placement(line: &str) -> ParseResult<u32> {
    PATTERNS
        .placement
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|place| place.as_str().parse::<u32>().ok())
        .filter(|&place| place >= 1)
        .ok_or_else(|| ParseError::Malformed {
            field: Field::Placement,
            line: line.to_string(),
        })
}
