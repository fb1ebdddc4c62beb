//! Series state - the history carried from one week to the next

use crate::{BoatId, WeekResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Recorded weekly scores for one boat, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoatScores {
    /// Boat
    pub boat: BoatId,
    /// One score per week the boat was entered (DNC included)
    pub scores: Vec<u32>,
}

/// Append-only history of a racing series
///
/// Each weekly step takes the previous state by value and returns the next
/// one; a finalized week is never rewritten. `per_boat_scores` keeps boats in
/// the order they first received a score.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesState {
    /// Every boat that has ever started a race in the series
    pub cumulative_starters: BTreeSet<BoatId>,

    /// Recorded weeks in chronological order
    pub weeks: Vec<WeekResult>,

    /// Weekly scores per boat
    pub per_boat_scores: Vec<BoatScores>,
}

impl SeriesState {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Date of the most recently recorded week
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.weeks.last().map(|w| w.date)
    }

    /// Number of recorded weeks with at least one starter
    pub fn races_with_starters(&self) -> usize {
        self.weeks.iter().filter(|w| w.has_starters()).count()
    }

    /// Recorded scores for a boat
    pub fn scores_for(&self, boat: &BoatId) -> Option<&[u32]> {
        self.per_boat_scores
            .iter()
            .find(|s| &s.boat == boat)
            .map(|s| s.scores.as_slice())
    }

    /// Boats with at least one non-DNC result, sorted
    pub fn boats_seen(&self) -> BTreeSet<BoatId> {
        self.weeks
            .iter()
            .flat_map(|w| w.finishers())
            .map(|e| e.boat.clone())
            .collect()
    }

    /// Append a finalized week and return the advanced state
    ///
    /// Scores are appended for every entry (DNC included) and this week's
    /// starters join `cumulative_starters`. The week must already carry its
    /// DNC entries, since absence is judged against the state *before* this
    /// call.
    pub fn record(mut self, week: WeekResult) -> Self {
        for entry in &week.entries {
            match self.per_boat_scores.iter_mut().find(|s| s.boat == entry.boat) {
                Some(record) => record.scores.push(entry.score),
                None => self.per_boat_scores.push(BoatScores {
                    boat: entry.boat.clone(),
                    scores: vec![entry.score],
                }),
            }
        }
        self.cumulative_starters.extend(week.starters.iter().cloned());
        self.weeks.push(week);
        self
    }
}
