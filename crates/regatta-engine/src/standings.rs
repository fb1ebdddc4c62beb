//! Series standings with throwouts
//!
//! Recomputed from scratch on every call. One throwout is earned per
//! `races_per_throwout` weeks with starters; each boat drops that many of its
//! worst scores (DNC scores included).

use crate::config::ScoringConfig;
use regatta_domain::{BoatId, SeriesState, Standing};

/// Number of scores each boat drops after `races_with_starters` races
pub fn throwouts(races_with_starters: usize, config: &ScoringConfig) -> usize {
    races_with_starters / config.races_per_throwout.max(1) as usize
}

/// Standing for one boat's score history
pub fn standing_for(boat: &BoatId, scores: &[u32], throwouts: usize) -> Standing {
    let mut worst_first = scores.to_vec();
    worst_first.sort_unstable_by(|a, b| b.cmp(a));
    let cut = throwouts.min(worst_first.len());
    let dropped = worst_first[..cut].to_vec();
    let net: u32 = worst_first[cut..].iter().sum();

    Standing {
        boat: boat.clone(),
        races: scores.len() as u32,
        raw_total: scores.iter().sum(),
        dropped,
        net,
    }
}

/// Ranked standings, best (lowest net) first
///
/// Ties on `(net, raw_total)` keep the order in which boats first scored.
pub fn standings(state: &SeriesState, config: &ScoringConfig) -> Vec<Standing> {
    let throwouts = throwouts(state.races_with_starters(), config);
    let mut table: Vec<Standing> = state
        .per_boat_scores
        .iter()
        .map(|record| standing_for(&record.boat, &record.scores, throwouts))
        .collect();
    // Stable sort
    table.sort_by_key(|s| (s.net, s.raw_total));
    table
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: dropped plus net scores add up to the raw total
        #[test]
        fn test_net_plus_dropped_is_raw(scores in prop::collection::vec(1u32..30, 0..12), throwouts in 0usize..4) {
            let standing = standing_for(&BoatId::new("a"), &scores, throwouts);
            let dropped: u32 = standing.dropped.iter().sum();
            prop_assert_eq!(standing.net + dropped, standing.raw_total);
            prop_assert_eq!(standing.dropped.len(), throwouts.min(scores.len()));
        }

        /// Property: fewer than four races means no throwouts
        #[test]
        fn test_no_throwouts_before_fourth_race(races in 0usize..4) {
            prop_assert_eq!(throwouts(races, &ScoringConfig::default()), 0);
        }
    }
}
