//! Line dispatcher: folds summary lines into a [`TournamentRecord`].

use chrono::{DateTime, Utc};
use std::fmt;

use crate::tournament::{TournamentRecord, TournamentType};

use super::errors::{ParseError, ParseResult};
use super::extract::{parse_buy_in, parse_placement, parse_players, parse_prize_pool, parse_started};
use super::fields::{Field, LAYOUT};
use super::result_line::{ResultLine, parse_result};
use super::title::{Title, parse_title};

/// Why a well-formed summary was not turned into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Game variant other than the tracked one
    UnsupportedVariant(String),
    /// Player advanced to a later stage
    NotFinished,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedVariant(variant) => write!(f, "unsupported variant: {variant}"),
            SkipReason::NotFinished => f.write_str("tournament not finished"),
        }
    }
}

/// Result of parsing one summary
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(TournamentRecord),
    /// Recognized input the pipeline does not track
    Skipped(SkipReason),
    /// Malformed input
    Failed(ParseError),
}

impl ParseOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ParseOutcome::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ParseOutcome::Failed(_))
    }

    /// The parsed record, if any
    pub fn record(&self) -> Option<&TournamentRecord> {
        match self {
            ParseOutcome::Parsed(record) => Some(record),
            _ => None,
        }
    }
}

enum Step {
    Continue,
    Skip(SkipReason),
}

/// Record under assembly
#[derive(Default)]
struct Draft {
    id: Option<String>,
    name: Option<String>,
    kind: Option<TournamentType>,
    buy_in: Option<f64>,
    players: Option<u32>,
    total_prize_pool: Option<f64>,
    started: Option<DateTime<Utc>>,
    my_place: Option<u32>,
    result: Option<(f64, u32)>,
}

impl Draft {
    fn apply(&mut self, field: Field, line: &str) -> ParseResult<Step> {
        match field {
            Field::Title => match parse_title(line)? {
                Title::Supported { id, kind } => {
                    self.id = Some(id);
                    self.kind = Some(kind);
                    self.name = Some(line.to_string());
                }
                Title::Unsupported { variant } => {
                    return Ok(Step::Skip(SkipReason::UnsupportedVariant(variant)));
                }
            },
            Field::BuyIn => self.buy_in = Some(parse_buy_in(line)?),
            Field::Players => self.players = Some(parse_players(line)?),
            Field::PrizePool => self.total_prize_pool = Some(parse_prize_pool(line)?),
            Field::StartTime => self.started = Some(parse_started(line)?),
            Field::Payout => {}
            Field::Placement => self.my_place = Some(parse_placement(line)?),
            Field::Result => match parse_result(line)? {
                ResultLine::Pending => return Ok(Step::Skip(SkipReason::NotFinished)),
                ResultLine::Finished { prize, reentries } => {
                    self.result = Some((prize, reentries));
                }
            },
        }
        Ok(Step::Continue)
    }

    fn finish(self, consumed: usize) -> ParseResult<TournamentRecord> {
        let truncated = |missing| ParseError::Truncated {
            lines: consumed,
            missing,
        };
        if let Some(missing) = LAYOUT.get(consumed) {
            return Err(truncated(*missing));
        }

        let (my_prize, reentries) = self.result.ok_or_else(|| truncated(Field::Result))?;
        Ok(TournamentRecord {
            id: self.id.ok_or_else(|| truncated(Field::Title))?,
            name: self.name.ok_or_else(|| truncated(Field::Title))?,
            kind: self.kind.ok_or_else(|| truncated(Field::Title))?,
            buy_in: self.buy_in.ok_or_else(|| truncated(Field::BuyIn))?,
            players: self.players.ok_or_else(|| truncated(Field::Players))?,
            total_prize_pool: self
                .total_prize_pool
                .ok_or_else(|| truncated(Field::PrizePool))?,
            started: self.started.ok_or_else(|| truncated(Field::StartTime))?,
            my_place: self.my_place.ok_or_else(|| truncated(Field::Placement))?,
            my_prize,
            reentries,
            free: false,
        })
    }
}

/// Parse one tournament summary
///
/// Lines past the result line are ignored. Fewer lines than the summary
/// layout yields [`ParseError::Truncated`].
///
/// # Example
///
/// ```
/// use poker_hand::summary::{ParseOutcome, parse_summary};
///
/// let lines = [
///     "Tournament #183300341, Daily Special $2.50 [7-Max], Hold'em No Limit",
///     "Buy-in: $1.3+$0.2+$1",
///     "2245 Players",
///     "Total Prize Pool: $5,163.5",
///     "Tournament started 2025/01/13 12:30:00",
///     "316th : Hero, $1",
///     "You finished the tournament in 316th place.",
///     "You made 1 re-entries and received a total of $1.",
/// ];
///
/// match parse_summary(lines) {
///     ParseOutcome::Parsed(record) => assert_eq!(record.my_place, 316),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
pub fn parse_summary<I, S>(lines: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut draft = Draft::default();
    let mut consumed = 0;

    for (position, line) in lines.into_iter().enumerate() {
        let Some(field) = Field::at(position) else {
            break;
        };
        let mut line = line.as_ref().trim_end_matches('\r');
        if field == Field::Title {
            line = line.trim_start_matches('\u{feff}');
        }

        match draft.apply(field, line) {
            Ok(Step::Continue) => consumed = position + 1,
            Ok(Step::Skip(reason)) => return ParseOutcome::Skipped(reason),
            Err(err) => return ParseOutcome::Failed(err),
        }
    }

    match draft.finish(consumed) {
        Ok(record) => ParseOutcome::Parsed(record),
        Err(err) => ParseOutcome::Failed(err),
    }
}

/// Parse a whole summary file's contents
pub fn parse_summary_text(text: &str) -> ParseOutcome {
    parse_summary(text.lines())
}
