//! Hand history summary parser.
//!
//! The poker client exports one text file per tournament with a fixed,
//! line-positional layout (see [`fields`]). Parsing a summary yields exactly one
//! [`ParseOutcome`]:
//!
//! - `Parsed`: a complete [`TournamentRecord`](crate::tournament::TournamentRecord)
//! - `Skipped`: an untracked game variant or a tournament still in progress
//! - `Failed`: a line that does not follow its layout, with the field and text
//!
//! Parsing is pure: no I/O and no state shared between calls beyond the
//! read-only compiled [`patterns`].

pub mod currency;
pub mod errors;
pub mod extract;
pub mod fields;
pub mod parser;
pub mod patterns;
pub mod result_line;
pub mod title;

pub use currency::Currency;
pub use errors::{ParseError, ParseResult};
pub use fields::{Field, LAYOUT};
pub use parser::{ParseOutcome, SkipReason, parse_summary, parse_summary_text};
pub use result_line::ResultLine;
pub use title::{SUPPORTED_VARIANT, Title, classify, parse_title};
