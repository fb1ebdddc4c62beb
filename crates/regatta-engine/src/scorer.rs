//! Weekly scoring (low-point)
//!
//! - DSQ/DNF: `starters + 1`, regardless of position
//! - Finisher: `max(1, position - min(2, novices))`
//!
//! Ranges ride along on each entry for transparency but never change a score.

use crate::config::ScoringConfig;
use regatta_domain::{
    BoatId, Claim, Diagnostic, FinishOrder, FinishStatus, PenaltyKind, PositionRange, ResultEntry,
};
use std::collections::{BTreeMap, HashMap};

/// Entries for one week's starters plus any ignored claims
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoredWeek {
    /// One entry per starter, in scoring order
    pub entries: Vec<ResultEntry>,
    /// Novice/penalty claims naming boats outside the order
    pub diagnostics: Vec<Diagnostic>,
}

/// Score for a boat that finished normally
pub fn finisher_score(position: u32, novices: u32, config: &ScoringConfig) -> u32 {
    let credit = novices.min(config.novice_credit_cap);
    position
        .saturating_sub(credit)
        .max(config.min_finisher_score)
}

/// Score for a disqualified or retired boat
pub fn penalty_score(starters_count: usize) -> u32 {
    starters_count as u32 + 1
}

/// Applies the scoring formula to a resolved (or provisional) order
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    /// Create a new Scorer with the given configuration
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Create a Scorer with default configuration
    pub fn default_config() -> Self {
        Self::new(ScoringConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score every boat in `order`
    ///
    /// # Arguments
    ///
    /// * `order` - Boats in scoring order (definite or provisional)
    /// * `ranges` - Feasible range per boat (a point range is used if missing)
    /// * `claims` - The week's claims; only novice and penalty claims are read
    ///
    /// For repeated novice or penalty claims about one boat the last one wins.
    pub fn score(
        &self,
        order: &FinishOrder,
        ranges: &BTreeMap<BoatId, PositionRange>,
        claims: &[Claim],
    ) -> ScoredWeek {
        let mut diagnostics = Vec::new();
        let mut novices: HashMap<&BoatId, u32> = HashMap::new();
        let mut penalties: HashMap<&BoatId, PenaltyKind> = HashMap::new();

        for claim in claims {
            let boat = match claim {
                Claim::Novice { boat, count } => {
                    novices.insert(boat, *count);
                    boat
                }
                Claim::Penalty { boat, kind } => {
                    penalties.insert(boat, *kind);
                    boat
                }
                _ => continue,
            };
            if order.position_of(boat).is_none() {
                diagnostics.push(Diagnostic::UnplacedBoat {
                    boat: boat.clone(),
                    claim: claim.kind_name().to_string(),
                });
            }
        }

        let starters_count = order.len();
        let entries = order
            .boats()
            .iter()
            .enumerate()
            .map(|(i, boat)| {
                let position = i as u32 + 1;
                let novice_count = novices.get(boat).copied().unwrap_or(0);
                let status = penalties
                    .get(boat)
                    .map(|&kind| FinishStatus::from(kind))
                    .unwrap_or(FinishStatus::Fin);
                let score = if status.is_penalty() {
                    penalty_score(starters_count)
                } else {
                    finisher_score(position, novice_count, &self.config)
                };
                ResultEntry {
                    boat: boat.clone(),
                    position: Some(position),
                    range: ranges
                        .get(boat)
                        .copied()
                        .unwrap_or_else(|| PositionRange::point(position)),
                    novices: novice_count,
                    status,
                    score,
                }
            })
            .collect();

        ScoredWeek {
            entries,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(names: &[&str]) -> FinishOrder {
        FinishOrder::new(names.iter().map(|&n| BoatId::new(n)).collect())
    }

    fn score_of(week: &ScoredWeek, boat: &str) -> u32 {
        week.entries
            .iter()
            .find(|e| e.boat.as_str() == boat)
            .map(|e| e.score)
            .unwrap()
    }

    #[test]
    fn test_finisher_formula() {
        let config = ScoringConfig::default();
        assert_eq!(finisher_score(5, 0, &config), 5);
        assert_eq!(finisher_score(5, 1, &config), 4);
        assert_eq!(finisher_score(5, 4, &config), 3);
        assert_eq!(finisher_score(2, 2, &config), 1);
        assert_eq!(finisher_score(1, 2, &config), 1);
    }

    #[test]
    fn test_plain_positions() {
        let scorer = Scorer::default_config();
        let week = scorer.score(&order(&["a", "b", "c"]), &BTreeMap::new(), &[]);
        assert_eq!(score_of(&week, "a"), 1);
        assert_eq!(score_of(&week, "b"), 2);
        assert_eq!(score_of(&week, "c"), 3);
        assert!(week.entries.iter().all(|e| e.range.is_exact()));
    }

    #[test]
    fn test_penalty_overrides_position() {
        let scorer = Scorer::default_config();
        let claims = vec![
            Claim::penalty("a", PenaltyKind::Dsq),
            Claim::novice("a", 2),
            Claim::penalty("c", PenaltyKind::Dnf),
        ];
        let week = scorer.score(&order(&["a", "b", "c"]), &BTreeMap::new(), &claims);
        assert_eq!(score_of(&week, "a"), 4);
        assert_eq!(score_of(&week, "c"), 4);
        assert_eq!(week.entries[0].status, FinishStatus::Dsq);
        assert_eq!(week.entries[0].position, Some(1));
    }

    #[test]
    fn test_last_novice_claim_wins() {
        let scorer = Scorer::default_config();
        let claims = vec![Claim::novice("c", 1), Claim::novice("c", 3)];
        let week = scorer.score(&order(&["a", "b", "c"]), &BTreeMap::new(), &claims);
        assert_eq!(score_of(&week, "c"), 1);
        assert_eq!(week.entries[2].novices, 3);
    }

    #[test]
    fn test_unplaced_claims_reported() {
        let scorer = Scorer::default_config();
        let claims = vec![Claim::novice("ghost", 2)];
        let week = scorer.score(&order(&["a"]), &BTreeMap::new(), &claims);
        assert_eq!(week.entries.len(), 1);
        assert_eq!(
            week.diagnostics,
            vec![Diagnostic::UnplacedBoat {
                boat: "ghost".into(),
                claim: "novice".to_string(),
            }]
        );
    }

    #[test]
    fn test_configured_credit_cap() {
        let config = ScoringConfig {
            novice_credit_cap: 3,
            ..ScoringConfig::default()
        };
        assert_eq!(finisher_score(6, 5, &config), 3);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: novice credit never raises a score or drops it below 1
        #[test]
        fn test_finisher_score_bounds(position in 1u32..40, novices in 0u32..10) {
            let config = ScoringConfig::default();
            let score = finisher_score(position, novices, &config);
            prop_assert!(score >= 1);
            prop_assert!(score <= position);
            prop_assert!(position - score <= 2);
        }

        /// Property: penalties score one worse than the last starter
        #[test]
        fn test_penalty_worse_than_any_finisher(starters in 1usize..30, novices in 0u32..5) {
            let config = ScoringConfig::default();
            let last = finisher_score(starters as u32, novices, &config);
            prop_assert!(penalty_score(starters) > last);
        }
    }
}
