//! Season results grid
//!
//! A boat × week matrix derived from `SeriesState`. Columns are the weeks with
//! starters, in date order; rows are every boat with a recorded score, sorted
//! by boat id. A `None` cell means the boat had not yet entered the series.

use chrono::NaiveDate;
use regatta_domain::{BoatId, FinishStatus, SeriesState};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One boat's outcome in one week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Outcome code
    pub status: FinishStatus,
    /// Scoring position (absent for DNC)
    pub position: Option<u32>,
    /// Low-point score
    pub score: u32,
}

/// One row of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// Boat
    pub boat: BoatId,
    /// One cell per grid column
    pub cells: Vec<Option<GridCell>>,
}

/// Boat × week results matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonGrid {
    /// Column dates
    pub dates: Vec<NaiveDate>,
    /// Rows sorted by boat
    pub rows: Vec<GridRow>,
}

impl SeasonGrid {
    /// Row for a specific boat
    pub fn row(&self, boat: &BoatId) -> Option<&GridRow> {
        self.rows.iter().find(|r| &r.boat == boat)
    }
}

/// Build the results grid for a series
pub fn season_grid(state: &SeriesState) -> SeasonGrid {
    let raced: Vec<_> = state.weeks.iter().filter(|w| w.has_starters()).collect();
    let boats: BTreeSet<&BoatId> = raced
        .iter()
        .flat_map(|w| w.entries.iter().map(|e| &e.boat))
        .collect();

    let mut rows: BTreeMap<&BoatId, Vec<Option<GridCell>>> = boats
        .into_iter()
        .map(|boat| (boat, vec![None; raced.len()]))
        .collect();
    for (column, week) in raced.iter().enumerate() {
        for entry in &week.entries {
            if let Some(cells) = rows.get_mut(&entry.boat) {
                cells[column] = Some(GridCell {
                    status: entry.status,
                    position: entry.position,
                    score: entry.score,
                });
            }
        }
    }

    SeasonGrid {
        dates: raced.iter().map(|w| w.date).collect(),
        rows: rows
            .into_iter()
            .map(|(boat, cells)| GridRow {
                boat: boat.clone(),
                cells,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::{SeriesScorer, WeekInput};
    use regatta_domain::Claim;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_empty_series() {
        let grid = season_grid(&SeriesState::new());
        assert!(grid.dates.is_empty());
        assert!(grid.rows.is_empty());
    }

    #[test]
    fn test_grid_layout() {
        let scorer = SeriesScorer::default_config();
        let state = scorer
            .run_season(vec![
                WeekInput {
                    date: day(4),
                    claims: vec![Claim::ahead("zulu", "alpha")],
                },
                WeekInput {
                    date: day(11),
                    claims: vec![],
                },
                WeekInput {
                    date: day(18),
                    claims: vec![Claim::ahead("mike", "zulu")],
                },
            ])
            .unwrap();

        let grid = season_grid(&state);
        assert_eq!(grid.dates, vec![day(4), day(18)]);
        let boats: Vec<&str> = grid.rows.iter().map(|r| r.boat.as_str()).collect();
        assert_eq!(boats, vec!["alpha", "mike", "zulu"]);

        let mike = grid.row(&"mike".into()).unwrap();
        assert_eq!(mike.cells[0], None);
        assert_eq!(mike.cells[1].map(|c| c.score), Some(1));

        let alpha = grid.row(&"alpha".into()).unwrap();
        let week2 = alpha.cells[1].unwrap();
        assert_eq!(week2.status, FinishStatus::Dnc);
        assert_eq!(week2.position, None);
        assert_eq!(week2.score, 4);
    }
}
