//! Diagnostics attached to week results
//!
//! Nothing in week processing aborts on bad evidence. Each problem becomes a
//! diagnostic on the week so a caller can always render something and explain
//! why the result looks the way it does.

use crate::BoatId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal finding about one week's evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// No usable relative or complete-order evidence
    NoData,

    /// Relative claims contradict each other
    Cycle {
        /// Boats caught in or behind the contradiction, in arrival order
        boats: Vec<BoatId>,
    },

    /// A claim referenced a token that is not a plausible boat name
    InvalidEvidence {
        /// Offending token
        token: String,
        /// Variant of the claim that carried it
        claim: String,
    },

    /// A novice or penalty claim named a boat with no finishing evidence
    UnplacedBoat {
        /// Boat that could not be placed
        boat: BoatId,
        /// Variant of the ignored claim
        claim: String,
    },

    /// A complete order listed the same boat more than once
    DuplicateBoat {
        /// Repeated boat
        boat: BoatId,
    },

    /// The order is definite but some positions are not pinned down
    Underdetermined {
        /// Boats whose range spans more than one position
        boats: Vec<BoatId>,
    },
}

impl Diagnostic {
    /// Whether the diagnostic describes an ambiguity rather than dropped input
    pub fn is_ambiguity(&self) -> bool {
        matches!(
            self,
            Diagnostic::NoData | Diagnostic::Cycle { .. } | Diagnostic::Underdetermined { .. }
        )
    }
}

fn join(boats: &[BoatId]) -> String {
    boats
        .iter()
        .map(BoatId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoData => write!(f, "No finish order data found"),
            Diagnostic::Cycle { boats } => {
                write!(f, "Circular dependency in finish order among: {}", join(boats))
            }
            Diagnostic::InvalidEvidence { token, claim } => {
                write!(f, "Ignored {} claim with invalid boat name '{}'", claim, token)
            }
            Diagnostic::UnplacedBoat { boat, claim } => {
                write!(f, "Ignored {} claim for '{}' (no finishing evidence)", claim, boat)
            }
            Diagnostic::DuplicateBoat { boat } => {
                write!(f, "Boat '{}' listed more than once in finish order", boat)
            }
            Diagnostic::Underdetermined { boats } => {
                write!(f, "Positions not fully determined for: {}", join(boats))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_cycle() {
        let diag = Diagnostic::Cycle {
            boats: vec!["a".into(), "b".into()],
        };
        assert_eq!(
            diag.to_string(),
            "Circular dependency in finish order among: a, b"
        );
        assert!(diag.is_ambiguity());
    }

    #[test]
    fn test_invalid_evidence_is_not_ambiguity() {
        let diag = Diagnostic::InvalidEvidence {
            token: "123".to_string(),
            claim: "novice".to_string(),
        };
        assert!(!diag.is_ambiguity());
        assert!(diag.to_string().contains("'123'"));
    }
}
