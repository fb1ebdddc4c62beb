//! Order reconstruction
//!
//! Evidence precedence is "most complete wins": the first complete-order
//! claim is authoritative and skips the graph entirely. Otherwise the
//! relative claims are resolved with Kahn's algorithm, always taking the
//! lexicographically smallest eligible boat so the result never depends on
//! claim arrival order.

use crate::graph::PrecedenceGraph;
use crate::ranges::{self, Reachability};
use regatta_domain::{AmbiguityReason, AmbiguityReport, Claim, FinishOrder, Resolution};
use std::collections::BTreeSet;
use tracing::debug;

/// Reconstruct the finishing order from a week's claims
///
/// # Examples
///
/// ```
/// use regatta_domain::{Claim, Resolution};
/// use regatta_engine::reconstruct::reconstruct;
///
/// let claims = vec![Claim::ahead("b", "c"), Claim::ahead("a", "b")];
/// match reconstruct(&claims) {
///     Resolution::Definite { order } => {
///         let names: Vec<&str> = order.boats().iter().map(|b| b.as_str()).collect();
///         assert_eq!(names, vec!["a", "b", "c"]);
///     }
///     Resolution::Ambiguous { .. } => panic!("chain should resolve"),
/// }
/// ```
pub fn reconstruct(claims: &[Claim]) -> Resolution {
    let complete = claims.iter().find_map(|claim| match claim {
        Claim::CompleteOrder { sequence } => Some(sequence),
        _ => None,
    });
    if let Some(sequence) = complete {
        debug!("Using complete finish order with {} boats", sequence.len());
        return Resolution::Definite {
            order: FinishOrder::new(sequence.clone()),
        };
    }

    resolve(&PrecedenceGraph::from_claims(claims))
}

/// Resolve a precedence graph into a definite order or an ambiguity report
pub fn resolve(graph: &PrecedenceGraph) -> Resolution {
    if graph.is_empty() {
        return Resolution::Ambiguous {
            report: AmbiguityReport::no_data(),
        };
    }

    let prefix = topological_prefix(graph);
    if prefix.len() == graph.len() {
        debug!("Relative claims resolved to a total order of {} boats", prefix.len());
        let order = prefix.into_iter().map(|idx| graph.boat(idx).clone()).collect();
        return Resolution::Definite {
            order: FinishOrder::new(order),
        };
    }

    let mut placed = vec![false; graph.len()];
    for &idx in &prefix {
        placed[idx] = true;
    }
    // Index order is arrival order
    let residue: Vec<usize> = (0..graph.len()).filter(|&idx| !placed[idx]).collect();
    debug!(
        "Cycle detected: {} of {} boats unresolved",
        residue.len(),
        graph.len()
    );

    let reach = Reachability::new(graph);
    let mut provisional = prefix;
    provisional.extend(order_residue(graph, &reach, &residue, &mut placed));

    Resolution::Ambiguous {
        report: AmbiguityReport {
            reason: AmbiguityReason::Cycle,
            partial: residue.iter().map(|&idx| graph.boat(idx).clone()).collect(),
            provisional: provisional
                .into_iter()
                .map(|idx| graph.boat(idx).clone())
                .collect(),
            ranges: ranges::estimate(graph),
        },
    }
}

/// Kahn's algorithm with a lexicographic tie-break
///
/// Returns every boat that can be removed before a cycle blocks progress.
fn topological_prefix(graph: &PrecedenceGraph) -> Vec<usize> {
    let mut in_degree: Vec<usize> = (0..graph.len())
        .map(|idx| graph.predecessors(idx).len())
        .collect();
    let mut ready: BTreeSet<_> = (0..graph.len())
        .filter(|&idx| in_degree[idx] == 0)
        .map(|idx| (graph.boat(idx), idx))
        .collect();

    let mut order = Vec::with_capacity(graph.len());
    while let Some((_, idx)) = ready.pop_first() {
        order.push(idx);
        for &next in graph.successors(idx) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.insert((graph.boat(next), next));
            }
        }
    }
    order
}

/// Order the boats Kahn's algorithm could not place
///
/// Boats that reach each other form one group. A group is placed once every
/// boat strictly ahead of its members is placed; among ready groups the one
/// with the smallest member goes first, and members go in name order. Each
/// boat therefore lands inside its feasible range.
fn order_residue(
    graph: &PrecedenceGraph,
    reach: &Reachability,
    residue: &[usize],
    placed: &mut [bool],
) -> Vec<usize> {
    let mut grouped = vec![false; graph.len()];
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for &idx in residue {
        if grouped[idx] {
            continue;
        }
        let ancestors = graph.ancestors(idx);
        let descendants = graph.descendants(idx);
        let mut members: Vec<usize> = residue
            .iter()
            .copied()
            .filter(|&other| {
                other == idx || (ancestors.contains(&other) && descendants.contains(&other))
            })
            .collect();
        members.sort_by(|&a, &b| graph.boat(a).cmp(graph.boat(b)));
        for &member in &members {
            grouped[member] = true;
        }
        groups.push(members);
    }

    let mut order = Vec::with_capacity(residue.len());
    while !groups.is_empty() {
        let pick = groups
            .iter()
            .enumerate()
            .filter(|(_, members)| {
                members
                    .iter()
                    .all(|&m| reach.ahead_of(m).iter().all(|&a| placed[a]))
            })
            .min_by(|(_, x), (_, y)| graph.boat(x[0]).cmp(graph.boat(y[0])))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let members = groups.remove(pick);
        for member in members {
            placed[member] = true;
            order.push(member);
        }
    }
    order
}
