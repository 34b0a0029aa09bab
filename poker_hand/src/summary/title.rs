//! Tournament title classification.
//!
//! A title looks like
//! `Tournament #183300341, Bounty Hunters Special $2.50 [7-Max], Hold'em No Limit`:
//! the id sits after `#` in the first comma-separated part, the tournament name
//! in the second, and the game variant in the last.

use crate::tournament::TournamentType;

use super::errors::{ParseError, ParseResult};

/// The only game variant tracked
pub const SUPPORTED_VARIANT: &str = "Hold'em No Limit";

/// Decoded title line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Title {
    /// Tracked variant with its id and category
    Supported { id: String, kind: TournamentType },
    /// Well-formed title of a variant that is not tracked
    Unsupported { variant: String },
}

/// Where a rule looks for its phrases
#[derive(Debug, Clone, Copy)]
enum Scope {
    /// Tournament name segment only
    Name,
    /// Whole title line
    Line,
}

struct Rule {
    kind: TournamentType,
    scope: Scope,
    phrases: &'static [&'static str],
}

/// Classification rules in priority order; the first matching rule wins.
const RULES: &[Rule] = &[
    Rule {
        kind: TournamentType::Bounty,
        scope: Scope::Name,
        phrases: &["Bounty", "Баунти"],
    },
    Rule {
        kind: TournamentType::Classic,
        scope: Scope::Name,
        phrases: &["Daily Big", "Sunday Big", "Daily Special", "Weekender"],
    },
    Rule {
        kind: TournamentType::Turbo,
        scope: Scope::Name,
        phrases: &["Turbo"],
    },
    Rule {
        kind: TournamentType::Hyper,
        scope: Scope::Name,
        phrases: &["Hyper"],
    },
    Rule {
        kind: TournamentType::Builder,
        scope: Scope::Name,
        phrases: &["Builder"],
    },
    Rule {
        kind: TournamentType::Freeroll,
        scope: Scope::Name,
        phrases: &["Chat&Play", "ThanksHoldemPlayers"],
    },
    Rule {
        kind: TournamentType::Shootout,
        scope: Scope::Name,
        phrases: &["Шутаут"],
    },
    Rule {
        kind: TournamentType::FlipAndGo,
        scope: Scope::Name,
        phrases: &["Flip & Go"],
    },
    Rule {
        kind: TournamentType::Flipout,
        scope: Scope::Line,
        phrases: &["Flipout"],
    },
    Rule {
        kind: TournamentType::DeepStacks,
        scope: Scope::Name,
        phrases: &["Deep Stacks", " Monster Stack"],
    },
    Rule {
        kind: TournamentType::Satellite,
        scope: Scope::Name,
        phrases: &["Satellite", "Step to", "Road to"],
    },
];

/// First rule matching the tournament name, or `None`
pub fn match_rule(name: &str, line: &str) -> Option<TournamentType> {
    RULES
        .iter()
        .find(|rule| {
            let haystack = match rule.scope {
                Scope::Name => name,
                Scope::Line => line,
            };
            rule.phrases.iter().any(|phrase| haystack.contains(phrase))
        })
        .map(|rule| rule.kind)
}

/// Classify a tournament, falling back to [`TournamentType::Classic`]
pub fn classify(name: &str, line: &str) -> TournamentType {
    match_rule(name, line).unwrap_or_else(|| {
        log::warn!("Cannot classify tournament {line:?}, defaulting to classic");
        TournamentType::Classic
    })
}

/// Decode a title line
///
/// # Errors
///
/// - `InvalidTitle` with fewer than three comma-separated parts
/// - `MissingId` / `InvalidId` when the `#<digits>` id is absent or not numeric
pub fn parse_title(line: &str) -> ParseResult<Title> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 3 {
        return Err(ParseError::InvalidTitle(line.to_string()));
    }

    let id = parts[0]
        .split('#')
        .nth(1)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ParseError::MissingId(line.to_string()))?;
    if !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidId {
            id: id.to_string(),
            line: line.to_string(),
        });
    }

    let variant = parts[parts.len() - 1].trim();
    if variant != SUPPORTED_VARIANT {
        return Ok(Title::Unsupported {
            variant: variant.to_string(),
        });
    }

    Ok(Title::Supported {
        id: id.to_string(),
        kind: classify(parts[1], line),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(name: &str) -> TournamentType {
        let line = format!("Tournament #1, {name}, Hold'em No Limit");
        match parse_title(&line).unwrap() {
            Title::Supported { kind, .. } => kind,
            other => panic!("unexpected title {other:?}"),
        }
    }

    #[test]
    fn test_parse_title() {
        let title = parse_title(
            "Tournament #183300341, Daily Special $2.50 [7-Max], Hold'em No Limit",
        )
        .unwrap();
        assert_eq!(
            title,
            Title::Supported {
                id: "183300341".to_string(),
                kind: TournamentType::Classic,
            }
        );
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(kind_of("Bounty Hunters Special $2.50"), TournamentType::Bounty);
        assert_eq!(kind_of("Баунти Хантерс $5"), TournamentType::Bounty);
        assert_eq!(kind_of("Sunday Big $10"), TournamentType::Classic);
        assert_eq!(kind_of("Weekender $3"), TournamentType::Classic);
        assert_eq!(kind_of("Turbo $1"), TournamentType::Turbo);
        assert_eq!(kind_of("Hyper $1"), TournamentType::Hyper);
        assert_eq!(kind_of("Builder $0.50"), TournamentType::Builder);
        assert_eq!(kind_of("Chat&Play Freeroll"), TournamentType::Freeroll);
        assert_eq!(kind_of("ThanksHoldemPlayers"), TournamentType::Freeroll);
        assert_eq!(kind_of("Шутаут $1"), TournamentType::Shootout);
        assert_eq!(kind_of("Flip & Go $2"), TournamentType::FlipAndGo);
        assert_eq!(kind_of("Deep Stacks $5"), TournamentType::DeepStacks);
        assert_eq!(kind_of("Mini Monster Stack $1"), TournamentType::DeepStacks);
        assert_eq!(kind_of("Satellite to WSOP"), TournamentType::Satellite);
        assert_eq!(kind_of("Step to Sunday"), TournamentType::Satellite);
        assert_eq!(kind_of("Road to Vegas"), TournamentType::Satellite);
    }

    #[test]
    fn test_priority_bounty_before_turbo() {
        assert_eq!(kind_of("Bounty Turbo $5"), TournamentType::Bounty);
        assert_eq!(kind_of("Turbo Hyper $5"), TournamentType::Turbo);
        assert_eq!(kind_of("Hyper Satellite"), TournamentType::Hyper);
    }

    #[test]
    fn test_flipout_checks_whole_line() {
        let line = "Tournament #7, Mystery $1, Flipout, Hold'em No Limit";
        assert_eq!(
            parse_title(line).unwrap(),
            Title::Supported {
                id: "7".to_string(),
                kind: TournamentType::Flipout,
            }
        );
        // Earlier name rules still take priority
        assert_eq!(
            match_rule("Turbo $1", "Tournament #7, Turbo $1, Flipout, Hold'em No Limit"),
            Some(TournamentType::Turbo)
        );
    }

    #[test]
    fn test_unmatched_defaults_to_classic() {
        assert_eq!(match_rule("Mystery Event", "x"), None);
        assert_eq!(kind_of("Mystery Event $1"), TournamentType::Classic);
    }

    #[test]
    fn test_unsupported_variant() {
        let title = parse_title("Tournament #55, Turbo $1, Omaha Pot Limit").unwrap();
        assert_eq!(
            title,
            Title::Unsupported {
                variant: "Omaha Pot Limit".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_titles() {
        assert!(matches!(
            parse_title("Tournament #55, Turbo $1"),
            Err(ParseError::InvalidTitle(_))
        ));
        assert!(matches!(
            parse_title("Tournament #, Turbo $1, Hold'em No Limit"),
            Err(ParseError::MissingId(_))
        ));
        assert!(matches!(
            parse_title("Tournament 55, Turbo $1, Hold'em No Limit"),
            Err(ParseError::MissingId(_))
        ));
        assert!(matches!(
            parse_title("Tournament #5a5, Turbo $1, Hold'em No Limit"),
            Err(ParseError::InvalidId { .. })
        ));
    }
}
