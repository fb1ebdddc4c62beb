//! Weekly pipeline and season driver
//!
//! Each week flows through: screening → reconstruction → ranges → scoring →
//! DNC injection → `SeriesState::record`. The state is taken and returned by
//! value, so the cross-week dependency is explicit in every call.

use crate::absence::inject_dnc;
use crate::config::ScoringConfig;
use crate::error::{EngineError, Result};
use crate::evidence;
use crate::graph::PrecedenceGraph;
use crate::ranges;
use crate::reconstruct::reconstruct;
use crate::scorer::Scorer;
use crate::standings;
use chrono::NaiveDate;
use regatta_domain::{
    AmbiguityReason, BoatId, Claim, Diagnostic, FinishOrder, PositionRange, Resolution,
    SeriesState, Standing, WeekResult, WeekStatus,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Claims reported for one race week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekInput {
    /// Race date
    pub date: NaiveDate,
    /// Claims extracted for the week
    #[serde(default)]
    pub claims: Vec<Claim>,
}

/// Drives weekly scoring across a series
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use regatta_domain::{Claim, SeriesState};
/// use regatta_engine::SeriesScorer;
///
/// let scorer = SeriesScorer::default_config();
/// let date = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();
/// let claims = vec![Claim::ahead("a", "b"), Claim::ahead("b", "c")];
///
/// let (week, state) = scorer.process_week(&SeriesState::new(), date, claims).unwrap();
/// assert_eq!(week.entries.len(), 3);
/// assert_eq!(state.weeks.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeriesScorer {
    scorer: Scorer,
}

impl SeriesScorer {
    /// Create a new SeriesScorer after validating the configuration
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scorer: Scorer::new(config),
        })
    }

    /// Create a SeriesScorer with default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Active configuration
    pub fn config(&self) -> &ScoringConfig {
        self.scorer.config()
    }

    /// Score one week in isolation (no DNC entries)
    ///
    /// Never fails: missing or contradictory evidence shows up in the
    /// week's status and diagnostics.
    pub fn score_week(&self, date: NaiveDate, claims: &[Claim]) -> WeekResult {
        let screening = evidence::screen(claims);
        let mut diagnostics = screening.diagnostics;
        let kept = screening.kept;

        let (status, order, ranges) = match reconstruct(&kept) {
            Resolution::Ambiguous { report } if report.reason == AmbiguityReason::NoData => {
                diagnostics.push(Diagnostic::NoData);
                return WeekResult::no_race(date, claims.to_vec(), diagnostics);
            }
            Resolution::Ambiguous { report } => {
                diagnostics.push(Diagnostic::Cycle {
                    boats: report.partial,
                });
                let provisional = FinishOrder::new(report.provisional);
                (WeekStatus::Ambiguous, provisional, report.ranges)
            }
            Resolution::Definite { order } => {
                let ranges = definite_ranges(&kept, order.boats());
                let loose: Vec<BoatId> = order
                    .boats()
                    .iter()
                    .filter(|b| ranges.get(*b).is_some_and(|r| !r.is_exact()))
                    .cloned()
                    .collect();
                if !loose.is_empty() {
                    diagnostics.push(Diagnostic::Underdetermined { boats: loose });
                }
                (WeekStatus::Ok, order, ranges)
            }
        };

        let scored = self.scorer.score(&order, &ranges, &kept);
        diagnostics.extend(scored.diagnostics);

        WeekResult {
            date,
            starters: order.into_inner().into_iter().collect(),
            entries: scored.entries,
            status,
            diagnostics,
            evidence: claims.to_vec(),
        }
    }

    /// Score a week against the series so far and return the advanced state
    ///
    /// The input state is left untouched.
    pub fn process_week(
        &self,
        state: &SeriesState,
        date: NaiveDate,
        claims: Vec<Claim>,
    ) -> Result<(WeekResult, SeriesState)> {
        self.advance(state.clone(), date, claims)
    }

    /// Consuming form of [`process_week`](Self::process_week)
    pub fn advance(
        &self,
        state: SeriesState,
        date: NaiveDate,
        claims: Vec<Claim>,
    ) -> Result<(WeekResult, SeriesState)> {
        if let Some(last) = state.last_date() {
            if date <= last {
                return Err(EngineError::OutOfOrder { date, last });
            }
        }

        let mut week = self.score_week(date, &claims);
        if week.has_starters() {
            let entries = std::mem::take(&mut week.entries);
            week.entries = inject_dnc(entries, &week.starters, &state.cumulative_starters);
        }

        info!(
            "Week {}: {} with {} starters, {} DNC",
            week.date,
            week.status.as_str(),
            week.starters.len(),
            week.absentees().count()
        );
        for diagnostic in &week.diagnostics {
            warn!("Week {}: {}", week.date, diagnostic);
        }

        // Cumulative starters advance only after this week's DNC entries exist
        let next = state.record(week.clone());
        Ok((week, next))
    }

    /// Fold a sequence of weeks onto an existing state, in order
    pub fn extend_season<I>(&self, state: SeriesState, weeks: I) -> Result<SeriesState>
    where
        I: IntoIterator<Item = WeekInput>,
    {
        weeks.into_iter().try_fold(state, |state, input| {
            debug!("Processing week {} ({} claims)", input.date, input.claims.len());
            self.advance(state, input.date, input.claims)
                .map(|(_, next)| next)
        })
    }

    /// Score a full season from an empty state
    pub fn run_season<I>(&self, weeks: I) -> Result<SeriesState>
    where
        I: IntoIterator<Item = WeekInput>,
    {
        self.extend_season(SeriesState::new(), weeks)
    }

    /// Current standings under this scorer's configuration
    pub fn standings(&self, state: &SeriesState) -> Vec<Standing> {
        standings::standings(state, self.config())
    }
}

/// Ranges for a definite order
///
/// A complete-order claim pins every boat; otherwise the relative claims
/// decide how tight each range is.
fn definite_ranges(claims: &[Claim], order: &[BoatId]) -> BTreeMap<BoatId, PositionRange> {
    let has_complete = claims
        .iter()
        .any(|c| matches!(c, Claim::CompleteOrder { .. }));
    let graph = if has_complete {
        PrecedenceGraph::from_sequence(order)
    } else {
        PrecedenceGraph::from_claims(claims)
    };
    ranges::estimate(&graph)
}
