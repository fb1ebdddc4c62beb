//! Absence (DNC) injection
//!
//! A boat that has started any earlier week is scored DNC in every later week
//! it misses. Absence is judged against history *before* this week, while the
//! DNC score counts this week's newcomers too.

use regatta_domain::{BoatId, FinishStatus, PositionRange, ResultEntry};
use std::collections::BTreeSet;

/// Score given to every absent boat this week
///
/// One worse than the number of distinct boats the series has seen through
/// this week, inclusive of this week's starters.
pub fn dnc_score(starters: &BTreeSet<BoatId>, cumulative_before: &BTreeSet<BoatId>) -> u32 {
    cumulative_before.union(starters).count() as u32 + 1
}

/// Append DNC entries for previously active boats missing this week
///
/// Entries are re-sorted finishers first (by position), then absentees, with
/// ties broken by boat id. Absentee ranges span the whole series field since
/// they carry no position.
pub fn inject_dnc(
    mut entries: Vec<ResultEntry>,
    starters: &BTreeSet<BoatId>,
    cumulative_before: &BTreeSet<BoatId>,
) -> Vec<ResultEntry> {
    let absent: Vec<&BoatId> = cumulative_before.difference(starters).collect();
    if absent.is_empty() {
        return entries;
    }

    let score = dnc_score(starters, cumulative_before);
    let field = score - 1;
    // Entries cover starters only, so an absentee never has one yet
    debug_assert!(entries.iter().all(|e| starters.contains(&e.boat)));
    for boat in absent {
        entries.push(ResultEntry {
            boat: boat.clone(),
            position: None,
            range: PositionRange::new(1, field),
            novices: 0,
            status: FinishStatus::Dnc,
            score,
        });
    }

    entries.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<BoatId> {
        names.iter().map(|&n| BoatId::new(n)).collect()
    }

    fn finisher(boat: &str, position: u32) -> ResultEntry {
        ResultEntry {
            boat: boat.into(),
            position: Some(position),
            range: PositionRange::point(position),
            novices: 0,
            status: FinishStatus::Fin,
            score: position,
        }
    }

    #[test]
    fn test_dnc_score_counts_newcomers() {
        assert_eq!(dnc_score(&set(&["a"]), &set(&["a", "b"])), 3);
        assert_eq!(dnc_score(&set(&["a", "new"]), &set(&["a", "b"])), 4);
    }

    #[test]
    fn test_absent_boat_scored_dnc() {
        let entries = inject_dnc(vec![finisher("a", 1)], &set(&["a"]), &set(&["a", "b"]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].boat.as_str(), "b");
        assert_eq!(entries[1].status, FinishStatus::Dnc);
        assert_eq!(entries[1].position, None);
        assert_eq!(entries[1].score, 3);
    }

    #[test]
    fn test_no_history_no_dnc() {
        let entries = inject_dnc(vec![finisher("a", 1)], &set(&["a"]), &BTreeSet::new());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_order_finishers_then_absentees_alphabetically() {
        let entries = inject_dnc(
            vec![finisher("z", 2), finisher("y", 1)],
            &set(&["y", "z"]),
            &set(&["m", "c", "y"]),
        );
        let boats: Vec<&str> = entries.iter().map(|e| e.boat.as_str()).collect();
        assert_eq!(boats, vec!["y", "z", "c", "m"]);
        assert!(entries[2..].iter().all(|e| e.score == 5));
    }

    #[test]
    fn test_every_boat_listed_once() {
        let starters = set(&["a", "new"]);
        let history = set(&["a", "b", "c"]);
        let entries = inject_dnc(vec![finisher("a", 1), finisher("new", 2)], &starters, &history);
        let boats: BTreeSet<&str> = entries.iter().map(|e| e.boat.as_str()).collect();
        assert_eq!(entries.len(), 4);
        assert_eq!(boats.len(), entries.len());
        assert_eq!(entries.iter().filter(|e| e.is_absent()).count(), 2);
    }
}
