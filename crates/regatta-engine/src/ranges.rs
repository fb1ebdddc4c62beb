//! Range estimation
//!
//! For every boat, the best feasible position is one past the number of boats
//! strictly known to finish ahead of it, and the worst is the field size minus
//! the number strictly known to finish behind. Boats on a common cycle are
//! both ahead of and behind each other; such pairs are contradictory evidence
//! and count on neither side, so `min <= max` always holds.

use crate::graph::PrecedenceGraph;
use regatta_domain::{BoatId, PositionRange};
use std::collections::{BTreeMap, BTreeSet};

/// Strict ahead/behind sets for every boat of a graph
#[derive(Debug, Clone)]
pub struct Reachability {
    ahead: Vec<BTreeSet<usize>>,
    behind: Vec<BTreeSet<usize>>,
}

impl Reachability {
    /// Compute strict reachability for all boats (O(n * edges))
    pub fn new(graph: &PrecedenceGraph) -> Self {
        let mut ahead = Vec::with_capacity(graph.len());
        let mut behind = Vec::with_capacity(graph.len());
        for idx in 0..graph.len() {
            let ancestors = graph.ancestors(idx);
            let descendants = graph.descendants(idx);
            ahead.push(ancestors.difference(&descendants).copied().collect());
            behind.push(descendants.difference(&ancestors).copied().collect());
        }
        Self { ahead, behind }
    }

    /// Boats strictly known to finish ahead of `idx`
    pub fn ahead_of(&self, idx: usize) -> &BTreeSet<usize> {
        &self.ahead[idx]
    }

    /// Boats strictly known to finish behind `idx`
    pub fn behind(&self, idx: usize) -> &BTreeSet<usize> {
        &self.behind[idx]
    }

    /// Feasible range for `idx` in a field of `n` boats
    pub fn range(&self, idx: usize, n: usize) -> PositionRange {
        let min = self.ahead[idx].len() + 1;
        let max = n - self.behind[idx].len();
        PositionRange::new(min as u32, max as u32)
    }
}

/// Feasible position range of every boat in the graph
pub fn estimate(graph: &PrecedenceGraph) -> BTreeMap<BoatId, PositionRange> {
    let reach = Reachability::new(graph);
    let n = graph.len();
    graph
        .boats()
        .iter()
        .enumerate()
        .map(|(idx, boat)| (boat.clone(), reach.range(idx, n)))
        .collect()
}

/// Feasible position ranges for a boat set under `(ahead, behind)` edges
///
/// Boats without any edge span the full width `1..=n`. Boats named only in
/// an edge join the field.
///
/// # Examples
///
/// ```
/// use regatta_domain::{BoatId, PositionRange};
/// use regatta_engine::ranges::ranges;
///
/// let boats: Vec<BoatId> = vec!["a".into(), "b".into(), "c".into()];
/// let edges: Vec<(BoatId, BoatId)> = vec![("a".into(), "b".into())];
/// let result = ranges(&boats, &edges);
/// assert_eq!(result[&BoatId::new("a")], PositionRange::new(1, 2));
/// assert_eq!(result[&BoatId::new("c")], PositionRange::new(1, 3));
/// ```
pub fn ranges(boats: &[BoatId], edges: &[(BoatId, BoatId)]) -> BTreeMap<BoatId, PositionRange> {
    let mut graph = PrecedenceGraph::new();
    for boat in boats {
        graph.add_boat(boat);
    }
    for (ahead, behind) in edges {
        graph.add_edge(ahead, behind);
    }
    estimate(&graph)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use regatta_domain::Claim;

    fn boat(i: usize) -> BoatId {
        BoatId::new(format!("b{}", i))
    }

    proptest! {
        /// Property: every range satisfies 1 <= min <= max <= n
        #[test]
        fn test_ranges_within_field(pairs in prop::collection::vec((0usize..6, 0usize..6), 1..14)) {
            let claims: Vec<Claim> = pairs
                .iter()
                .filter(|(a, b)| a != b)
                .map(|&(a, b)| Claim::ahead(boat(a), boat(b)))
                .collect();
            let graph = PrecedenceGraph::from_claims(&claims);
            let n = graph.len() as u32;
            let map = estimate(&graph);
            prop_assert_eq!(map.len(), graph.len());
            for range in map.values() {
                prop_assert!(range.min >= 1);
                prop_assert!(range.min <= range.max);
                prop_assert!(range.max <= n);
            }
        }

        /// Property: a chain pins every boat to its own position
        #[test]
        fn test_chain_ranges_are_exact(order in Just((0..7).collect::<Vec<usize>>()).prop_shuffle()) {
            let sequence: Vec<BoatId> = order.iter().map(|&i| boat(i)).collect();
            let map = estimate(&PrecedenceGraph::from_sequence(&sequence));
            for (i, b) in sequence.iter().enumerate() {
                prop_assert_eq!(map[b], PositionRange::point(i as u32 + 1));
            }
        }
    }
}
