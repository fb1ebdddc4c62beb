//! Regatta Engine
//!
//! Reconstructs weekly finishing orders from loose evidence and scores a
//! racing series under low-point rules.
//!
//! # Overview
//!
//! Each week passes through a fixed pipeline:
//! - **Screening**: implausible boat-name tokens are dropped with a diagnostic
//! - **Reconstruction**: a complete order wins outright; otherwise relative
//!   claims are topologically sorted with a lexicographic tie-break
//! - **Ranges**: each boat gets the `[min, max]` positions consistent with the
//!   evidence, even when the evidence contains cycles
//! - **Scoring**: position, novice credit, DSQ/DNF penalties
//! - **Absence**: boats seen in earlier weeks but missing now score DNC
//!
//! Standings and the season grid are recomputed from the series state on
//! demand and never stored.
//!
//! # Scoring Rules
//!
//! | Outcome | Score |
//! |---------|-------|
//! | Finisher | `max(1, position - min(2, novices))` |
//! | DSQ / DNF | starters this week + 1 |
//! | DNC | distinct boats in the series through this week + 1 |
//!
//! One throwout is earned per 4 weeks with starters.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use regatta_domain::Claim;
//! use regatta_engine::{SeriesScorer, WeekInput};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scorer = SeriesScorer::default_config();
//! let state = scorer.run_season(vec![
//!     WeekInput {
//!         date: NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(),
//!         claims: vec![Claim::ahead("a", "b"), Claim::ahead("b", "c")],
//!     },
//!     WeekInput {
//!         date: NaiveDate::from_ymd_opt(2025, 5, 14).unwrap(),
//!         claims: vec![Claim::ahead("c", "a")],
//!     },
//! ])?;
//!
//! let table = scorer.standings(&state);
//! assert_eq!(table[0].boat.as_str(), "a");
//! assert_eq!(table[0].net, 3);
//! // "b" missed week two and scored DNC
//! assert_eq!(table[2].net, 6);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! novice_credit_cap = 2
//! min_finisher_score = 1
//! races_per_throwout = 4
//! ```

#![warn(missing_docs)]

pub mod absence;
pub mod config;
pub mod error;
pub mod evidence;
pub mod graph;
pub mod grid;
pub mod ranges;
pub mod reconstruct;
pub mod scorer;
pub mod season;
pub mod standings;

pub use config::{ScoringConfig, ScoringSummary};
pub use error::{EngineError, Result};
pub use evidence::{screen, Screening};
pub use grid::{season_grid, GridCell, GridRow, SeasonGrid};
pub use reconstruct::reconstruct;
pub use scorer::{ScoredWeek, Scorer};
pub use season::{SeriesScorer, WeekInput};
pub use standings::standings;
