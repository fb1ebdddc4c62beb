//! Standing module - one row of the series table

use crate::BoatId;
use serde::{Deserialize, Serialize};

/// Season-to-date result for one boat
///
/// Derived from `SeriesState::per_boat_scores` on every request; never
/// updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Boat
    pub boat: BoatId,

    /// Weeks with a recorded score (DNC included)
    pub races: u32,

    /// Sum of every recorded score
    pub raw_total: u32,

    /// Scores excluded as throwouts, worst first
    pub dropped: Vec<u32>,

    /// Sum of the scores that were kept
    pub net: u32,
}
