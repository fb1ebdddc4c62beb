//! Reconstruction outcomes

use crate::{BoatId, PositionRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A definite finishing order, winner first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinishOrder(Vec<BoatId>);

impl FinishOrder {
    /// Wrap an ordered boat list
    pub fn new(boats: Vec<BoatId>) -> Self {
        Self(boats)
    }

    /// Boats in finishing order
    pub fn boats(&self) -> &[BoatId] {
        &self.0
    }

    /// 1-indexed position of a boat, if present
    pub fn position_of(&self, boat: &BoatId) -> Option<u32> {
        self.0.iter().position(|b| b == boat).map(|i| i as u32 + 1)
    }

    /// Number of boats in the order
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the order is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the boat list
    pub fn into_inner(self) -> Vec<BoatId> {
        self.0
    }
}

/// Why the evidence did not yield a definite order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityReason {
    /// No usable relative or complete-order evidence
    NoData,

    /// Relative claims contradict each other
    Cycle,
}

/// Structured signal that the evidence under-determines or contradicts a total order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguityReport {
    /// Why no definite order exists
    pub reason: AmbiguityReason,

    /// Boats left unresolved by topological resolution, in arrival order
    pub partial: Vec<BoatId>,

    /// Best-effort order over all boats (resolved prefix, then residue)
    pub provisional: Vec<BoatId>,

    /// Feasible position range of every boat
    pub ranges: BTreeMap<BoatId, PositionRange>,
}

impl AmbiguityReport {
    /// Report for a week without usable evidence
    pub fn no_data() -> Self {
        Self {
            reason: AmbiguityReason::NoData,
            partial: Vec::new(),
            provisional: Vec::new(),
            ranges: BTreeMap::new(),
        }
    }
}

/// Outcome of order reconstruction
///
/// Callers must handle both branches; contradictory evidence is a value,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The evidence supports a single order
    Definite {
        /// The resolved order
        order: FinishOrder,
    },

    /// The evidence is missing or contradictory
    Ambiguous {
        /// Details of the ambiguity
        report: AmbiguityReport,
    },
}

impl Resolution {
    /// The order used for scoring: the definite order, or the provisional one
    pub fn scoring_order(&self) -> &[BoatId] {
        match self {
            Resolution::Definite { order } => order.boats(),
            Resolution::Ambiguous { report } => &report.provisional,
        }
    }

    /// Whether a definite order was found
    pub fn is_definite(&self) -> bool {
        matches!(self, Resolution::Definite { .. })
    }
}
