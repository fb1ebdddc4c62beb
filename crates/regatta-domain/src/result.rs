//! Weekly result records

use crate::{BoatId, Claim, Diagnostic, FinishStatus, PositionRange, WeekStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One boat's scored line for one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Boat
    pub boat: BoatId,

    /// Finishing position (absent for DNC)
    pub position: Option<u32>,

    /// Feasible position range under the week's evidence
    pub range: PositionRange,

    /// Novice crew count credited
    pub novices: u32,

    /// Outcome code
    pub status: FinishStatus,

    /// Low-point score
    pub score: u32,
}

impl ResultEntry {
    /// Whether the boat was absent this week
    pub fn is_absent(&self) -> bool {
        self.status.is_absent()
    }

    /// Sort key: finishers before absentees, then by position, then by boat
    pub fn sort_key(&self) -> (bool, u32, &BoatId) {
        (
            self.is_absent(),
            self.position.unwrap_or(u32::MAX),
            &self.boat,
        )
    }
}

/// Scored outcome of one race week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekResult {
    /// Race date
    pub date: NaiveDate,

    /// Boats with finishing evidence this week
    pub starters: BTreeSet<BoatId>,

    /// Entries ordered finishers first (by position), then absentees
    pub entries: Vec<ResultEntry>,

    /// Overall week outcome
    pub status: WeekStatus,

    /// Findings about the evidence, never fatal
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,

    /// Claims received for the week, kept for transparency
    #[serde(default)]
    pub evidence: Vec<Claim>,
}

impl WeekResult {
    /// A week with no usable evidence
    pub fn no_race(date: NaiveDate, evidence: Vec<Claim>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            date,
            starters: BTreeSet::new(),
            entries: Vec::new(),
            status: WeekStatus::NoRace,
            diagnostics,
            evidence,
        }
    }

    /// Whether the week counts as a race (at least one starter)
    pub fn has_starters(&self) -> bool {
        !self.starters.is_empty()
    }

    /// Entry for a specific boat
    pub fn entry(&self, boat: &BoatId) -> Option<&ResultEntry> {
        self.entries.iter().find(|e| &e.boat == boat)
    }

    /// Entries for boats that started (everything but DNC)
    pub fn finishers(&self) -> impl Iterator<Item = &ResultEntry> {
        self.entries.iter().filter(|e| !e.is_absent())
    }

    /// Entries for absent boats
    pub fn absentees(&self) -> impl Iterator<Item = &ResultEntry> {
        self.entries.iter().filter(|e| e.is_absent())
    }
}
