//! Precedence graph over boats
//!
//! Edge `a -> b` means "a finished ahead of b". Boats are indexed in arrival
//! order (first mention across the claims) and all adjacency is kept in
//! ordered sets so traversal order never depends on hashing.

use regatta_domain::{BoatId, Claim};
use std::collections::{BTreeSet, HashMap};

/// Directed "finished ahead of" graph
#[derive(Debug, Clone, Default)]
pub struct PrecedenceGraph {
    boats: Vec<BoatId>,
    index: HashMap<BoatId, usize>,
    successors: Vec<BTreeSet<usize>>,
    predecessors: Vec<BTreeSet<usize>>,
}

impl PrecedenceGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from the relative-position claims in a claim list
    ///
    /// Every other claim variant is ignored.
    pub fn from_claims(claims: &[Claim]) -> Self {
        let mut graph = Self::new();
        for claim in claims {
            if let Claim::RelativePosition { ahead, behind } = claim {
                graph.add_edge(ahead, behind);
            }
        }
        graph
    }

    /// Build a chain graph from an explicit finishing sequence
    pub fn from_sequence(sequence: &[BoatId]) -> Self {
        let mut graph = Self::new();
        for boat in sequence {
            graph.add_boat(boat);
        }
        for pair in sequence.windows(2) {
            graph.add_edge(&pair[0], &pair[1]);
        }
        graph
    }

    /// Insert a boat if absent and return its index
    pub fn add_boat(&mut self, boat: &BoatId) -> usize {
        if let Some(&idx) = self.index.get(boat) {
            return idx;
        }
        let idx = self.boats.len();
        self.boats.push(boat.clone());
        self.index.insert(boat.clone(), idx);
        self.successors.push(BTreeSet::new());
        self.predecessors.push(BTreeSet::new());
        idx
    }

    /// Record that `ahead` finished before `behind`
    pub fn add_edge(&mut self, ahead: &BoatId, behind: &BoatId) {
        let a = self.add_boat(ahead);
        let b = self.add_boat(behind);
        self.successors[a].insert(b);
        self.predecessors[b].insert(a);
    }

    /// Boats in arrival order
    pub fn boats(&self) -> &[BoatId] {
        &self.boats
    }

    /// Boat at an index
    pub fn boat(&self, idx: usize) -> &BoatId {
        &self.boats[idx]
    }

    /// Index of a boat
    pub fn index_of(&self, boat: &BoatId) -> Option<usize> {
        self.index.get(boat).copied()
    }

    /// Number of boats
    pub fn len(&self) -> usize {
        self.boats.len()
    }

    /// Whether the graph has no boats
    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    /// Direct successors (boats known to finish right behind)
    pub fn successors(&self, idx: usize) -> &BTreeSet<usize> {
        &self.successors[idx]
    }

    /// Direct predecessors (boats known to finish right ahead)
    pub fn predecessors(&self, idx: usize) -> &BTreeSet<usize> {
        &self.predecessors[idx]
    }

    /// Boats transitively known to finish ahead of `idx`
    ///
    /// Contains `idx` itself only when `idx` lies on a cycle.
    pub fn ancestors(&self, idx: usize) -> BTreeSet<usize> {
        Self::reach(idx, &self.predecessors)
    }

    /// Boats transitively known to finish behind `idx`
    ///
    /// Contains `idx` itself only when `idx` lies on a cycle.
    pub fn descendants(&self, idx: usize) -> BTreeSet<usize> {
        Self::reach(idx, &self.successors)
    }

    fn reach(start: usize, adjacency: &[BTreeSet<usize>]) -> BTreeSet<usize> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for &next in &adjacency[current] {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen
    }
}
