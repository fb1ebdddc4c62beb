//! Evidence screening
//!
//! Boat names come from free-text extraction and sometimes carry parsing
//! artifacts ("2", "club boat", "not sure"). A fixed rule table decides whether
//! a token is a plausible boat name. Claims that depend on an implausible
//! token are dropped before reconstruction, with a diagnostic for each.

use regatta_domain::{BoatId, Claim, Diagnostic};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// One rejection rule of the boat-name table
struct NameRule {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
}

macro_rules! name_rule {
    ($ident:ident, $pattern:expr) => {
        static $ident: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

name_rule!(RE_LEADING_DASH, r"^-\s");
name_rule!(RE_NUMERIC_ONLY, r"^\d+$");
name_rule!(RE_DIRECTION_WORD, r"ahead|behind");
name_rule!(RE_FILLER_PHRASE, r"not sure|no one|finished");
name_rule!(RE_GENERIC_TERM, r"club boat|team\s|1nv");
name_rule!(RE_HAS_LETTER, r"[a-z]");

static REJECTION_RULES: [NameRule; 5] = [
    NameRule { name: "leading_dash", regex: &RE_LEADING_DASH },
    NameRule { name: "numeric_only", regex: &RE_NUMERIC_ONLY },
    NameRule { name: "direction_word", regex: &RE_DIRECTION_WORD },
    NameRule { name: "filler_phrase", regex: &RE_FILLER_PHRASE },
    NameRule { name: "generic_term", regex: &RE_GENERIC_TERM },
];

/// Name of the first rule a token violates, or `None` if it is a plausible boat name
///
/// Matching is case-insensitive.
pub fn rejection_rule(token: &str) -> Option<&'static str> {
    let lowered = token.to_lowercase();
    if let Some(rule) = REJECTION_RULES.iter().find(|r| r.regex.is_match(&lowered)) {
        return Some(rule.name);
    }
    if !RE_HAS_LETTER.is_match(&lowered) {
        return Some("no_letters");
    }
    None
}

/// Check whether a token is a plausible boat name
///
/// # Examples
///
/// ```
/// use regatta_engine::evidence::is_valid_boat_name;
///
/// assert!(is_valid_boat_name("danger zone"));
/// assert!(!is_valid_boat_name("42"));
/// assert!(!is_valid_boat_name("Club Boat"));
/// ```
pub fn is_valid_boat_name(token: &str) -> bool {
    rejection_rule(token).is_none()
}

/// Claims that survived screening plus what was dropped and why
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screening {
    /// Claims safe to feed into reconstruction and scoring
    pub kept: Vec<Claim>,
    /// One entry per dropped token or repeated boat
    pub diagnostics: Vec<Diagnostic>,
}

fn invalid(boat: &BoatId, claim: &Claim) -> Diagnostic {
    Diagnostic::InvalidEvidence {
        token: boat.to_string(),
        claim: claim.kind_name().to_string(),
    }
}

/// Screen a week's claims against the boat-name rules
///
/// - Relative claims need both endpoints valid and distinct.
/// - Complete orders lose invalid entries; a repeated boat keeps its first
///   position. An order left empty is dropped.
/// - Novice and penalty claims on an invalid boat are dropped.
pub fn screen(claims: &[Claim]) -> Screening {
    let mut screening = Screening::default();

    for claim in claims {
        match claim {
            Claim::CompleteOrder { sequence } => {
                let mut seen = HashSet::new();
                let mut kept = Vec::with_capacity(sequence.len());
                for boat in sequence {
                    if !is_valid_boat_name(boat.as_str()) {
                        screening.diagnostics.push(invalid(boat, claim));
                    } else if !seen.insert(boat) {
                        screening
                            .diagnostics
                            .push(Diagnostic::DuplicateBoat { boat: boat.clone() });
                    } else {
                        kept.push(boat.clone());
                    }
                }
                if !kept.is_empty() {
                    screening.kept.push(Claim::CompleteOrder { sequence: kept });
                }
            }
            Claim::RelativePosition { ahead, behind } => {
                let bad: Vec<&BoatId> = [ahead, behind]
                    .into_iter()
                    .filter(|b| !is_valid_boat_name(b.as_str()))
                    .collect();
                if !bad.is_empty() {
                    screening
                        .diagnostics
                        .extend(bad.into_iter().map(|b| invalid(b, claim)));
                } else if ahead == behind {
                    screening.diagnostics.push(invalid(ahead, claim));
                } else {
                    screening.kept.push(claim.clone());
                }
            }
            Claim::Novice { boat, .. } | Claim::Penalty { boat, .. } => {
                if is_valid_boat_name(boat.as_str()) {
                    screening.kept.push(claim.clone());
                } else {
                    screening.diagnostics.push(invalid(boat, claim));
                }
            }
        }
    }

    screening
}

#[cfg(test)]
mod tests {
    use super::*;
    use regatta_domain::PenaltyKind;

    #[test]
    fn test_plausible_names() {
        for name in ["psycho killer", "Go Hogs Go", "fred", "b-52", "team2go"] {
            assert!(is_valid_boat_name(name), "{} should be valid", name);
        }
    }

    #[test]
    fn test_rule_table() {
        assert_eq!(rejection_rule("- ambush"), Some("leading_dash"));
        assert_eq!(rejection_rule("12"), Some("numeric_only"));
        assert_eq!(rejection_rule("fred ahead"), Some("direction_word"));
        assert_eq!(rejection_rule("Behind"), Some("direction_word"));
        assert_eq!(rejection_rule("not sure"), Some("filler_phrase"));
        assert_eq!(rejection_rule("we finished"), Some("filler_phrase"));
        assert_eq!(rejection_rule("the club boat"), Some("generic_term"));
        assert_eq!(rejection_rule("team blue"), Some("generic_term"));
        assert_eq!(rejection_rule("1nv"), Some("generic_term"));
        assert_eq!(rejection_rule("!!"), Some("no_letters"));
        assert_eq!(rejection_rule(""), Some("no_letters"));
    }

    #[test]
    fn test_screen_drops_relative_with_invalid_endpoint() {
        let claims = vec![Claim::ahead("ambush", "2"), Claim::ahead("ambush", "fred")];
        let screening = screen(&claims);
        assert_eq!(screening.kept, vec![Claim::ahead("ambush", "fred")]);
        assert_eq!(
            screening.diagnostics,
            vec![Diagnostic::InvalidEvidence {
                token: "2".to_string(),
                claim: "relative_position".to_string(),
            }]
        );
    }

    #[test]
    fn test_screen_drops_self_reference() {
        let screening = screen(&[Claim::ahead("fred", "fred")]);
        assert!(screening.kept.is_empty());
        assert_eq!(screening.diagnostics.len(), 1);
    }

    #[test]
    fn test_screen_cleans_complete_order() {
        let claims = vec![Claim::order(["a", "no one", "b", "a", "c"])];
        let screening = screen(&claims);
        assert_eq!(screening.kept, vec![Claim::order(["a", "b", "c"])]);
        assert!(screening
            .diagnostics
            .contains(&Diagnostic::DuplicateBoat { boat: "a".into() }));
        assert_eq!(screening.diagnostics.len(), 2);
    }

    #[test]
    fn test_screen_drops_empty_complete_order() {
        let screening = screen(&[Claim::order(["1", "2"])]);
        assert!(screening.kept.is_empty());
        assert_eq!(screening.diagnostics.len(), 2);
    }

    #[test]
    fn test_screen_filters_novice_and_penalty() {
        let claims = vec![
            Claim::novice("UNKNOWN 1nv", 1),
            Claim::penalty("caper", PenaltyKind::Dnf),
        ];
        let screening = screen(&claims);
        assert_eq!(screening.kept, vec![Claim::penalty("caper", PenaltyKind::Dnf)]);
        assert_eq!(screening.diagnostics.len(), 1);
    }
}
