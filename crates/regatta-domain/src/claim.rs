//! Claim module - the normalized evidence unit

use crate::{BoatId, PenaltyKind};
use serde::{Deserialize, Serialize};

/// One atomic piece of evidence about a week's race
///
/// Claims are produced by an external extractor from free-text reports.
/// Boat ids are already canonical; the engine never re-normalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Claim {
    /// An explicit, fully-ranked finish report
    CompleteOrder {
        /// Boats in finishing order, winner first
        sequence: Vec<BoatId>,
    },

    /// `ahead` finished before `behind`
    RelativePosition {
        /// Boat that finished first
        ahead: BoatId,
        /// Boat that finished later
        behind: BoatId,
    },

    /// Number of novice crew sailing on a boat
    Novice {
        /// Boat carrying novices
        boat: BoatId,
        /// Novice count
        count: u32,
    },

    /// Penalty reported against a boat
    Penalty {
        /// Penalized boat
        boat: BoatId,
        /// Kind of penalty
        kind: PenaltyKind,
    },
}

impl Claim {
    /// Shorthand for a relative-position claim
    ///
    /// # Examples
    ///
    /// ```
    /// use regatta_domain::Claim;
    ///
    /// let claim = Claim::ahead("ambush", "fred");
    /// assert_eq!(claim.kind_name(), "relative_position");
    /// ```
    pub fn ahead(ahead: impl Into<BoatId>, behind: impl Into<BoatId>) -> Self {
        Claim::RelativePosition {
            ahead: ahead.into(),
            behind: behind.into(),
        }
    }

    /// Shorthand for a complete finish order
    pub fn order<I, B>(sequence: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<BoatId>,
    {
        Claim::CompleteOrder {
            sequence: sequence.into_iter().map(Into::into).collect(),
        }
    }

    /// Shorthand for a novice claim
    pub fn novice(boat: impl Into<BoatId>, count: u32) -> Self {
        Claim::Novice {
            boat: boat.into(),
            count,
        }
    }

    /// Shorthand for a penalty claim
    pub fn penalty(boat: impl Into<BoatId>, kind: PenaltyKind) -> Self {
        Claim::Penalty {
            boat: boat.into(),
            kind,
        }
    }

    /// Short name of the claim variant
    pub fn kind_name(&self) -> &'static str {
        match self {
            Claim::CompleteOrder { .. } => "complete_order",
            Claim::RelativePosition { .. } => "relative_position",
            Claim::Novice { .. } => "novice",
            Claim::Penalty { .. } => "penalty",
        }
    }
}
