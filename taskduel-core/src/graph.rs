/// Directed relation graph over the recorded outcome history.
///
/// Nodes are item IDs appearing in outcomes; every outcome contributes a
/// winner → loser edge (repeats of the same pair collapse into one edge).
/// Rebuilt on demand from the ordered history — the graph has no lifecycle
/// of its own and is never persisted. Reachability can only grow as
/// outcomes accumulate; no relationship is ever undone.
use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{ItemId, Outcome};

#[derive(Debug, Default)]
pub struct RelationGraph {
    /// winner id -> set of ids it directly beat.
    edges: HashMap<ItemId, HashSet<ItemId>>,
}

impl RelationGraph {
    /// Build the adjacency mapping by grouping outcomes by winner.
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut edges: HashMap<ItemId, HashSet<ItemId>> = HashMap::new();
        for outcome in outcomes {
            edges
                .entry(outcome.winner_id)
                .or_default()
                .insert(outcome.loser_id);
        }
        RelationGraph { edges }
    }

    /// True iff `start` has been shown, directly or transitively, to outrank
    /// `end`.
    ///
    /// Breadth-first search over out-edges, short-circuiting on `end`.
    /// Contradictory human input can make the edge set cyclic (A beat B,
    /// B beat C, C beat A are three legal outcomes); the visited set keeps
    /// the search terminating regardless.
    pub fn reaches(&self, start: ItemId, end: ItemId) -> bool {
        let mut visited: HashSet<ItemId> = HashSet::new();
        let mut queue: VecDeque<ItemId> = VecDeque::new();
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                return true;
            }
            if visited.insert(current) {
                if let Some(losers) = self.edges.get(&current) {
                    queue.extend(losers.iter().copied());
                }
            }
        }
        false
    }
}

/// Build the graph from `outcomes` and answer one reachability query.
///
/// Convenience for callers that only need a single answer; selection builds
/// the graph once and queries it many times instead.
pub fn reachable(outcomes: &[Outcome], from: ItemId, to: ItemId) -> bool {
    RelationGraph::from_outcomes(outcomes).reaches(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beat(winner_id: ItemId, loser_id: ItemId) -> Outcome {
        Outcome { winner_id, loser_id, timestamp: 0 }
    }

    #[test]
    fn test_direct_edge() {
        let outcomes = vec![beat(1, 2)];
        assert!(reachable(&outcomes, 1, 2));
        assert!(!reachable(&outcomes, 2, 1));
    }

    #[test]
    fn test_transitive_path_without_direct_edge() {
        // A beat B, B beat C — no A vs C outcome needed.
        let outcomes = vec![beat(1, 2), beat(2, 3)];
        assert!(reachable(&outcomes, 1, 3));
        assert!(!reachable(&outcomes, 3, 1));
    }

    #[test]
    fn test_cycle_terminates_and_reaches_both_ways() {
        // Self-contradictory but legal: A > B > C > A.
        let outcomes = vec![beat(1, 2), beat(2, 3), beat(3, 1)];
        assert!(reachable(&outcomes, 1, 3));
        assert!(reachable(&outcomes, 3, 1));
        assert!(reachable(&outcomes, 2, 1));
    }

    #[test]
    fn test_unknown_ids_are_unreachable() {
        let outcomes = vec![beat(1, 2)];
        assert!(!reachable(&outcomes, 1, 99));
        assert!(!reachable(&outcomes, 99, 1));
        assert!(!reachable(&[], 1, 2));
    }

    #[test]
    fn test_duplicate_outcomes_change_nothing() {
        let once = vec![beat(1, 2), beat(2, 3)];
        let thrice = vec![beat(1, 2), beat(1, 2), beat(1, 2), beat(2, 3)];
        assert_eq!(reachable(&once, 1, 3), reachable(&thrice, 1, 3));
        assert_eq!(reachable(&once, 3, 1), reachable(&thrice, 3, 1));
    }

    #[test]
    fn test_path_through_removed_item_still_counts() {
        // Item 5 may be long gone from the caller's list; its recorded
        // outcomes still carry inference between survivors.
        let outcomes = vec![beat(1, 5), beat(5, 2)];
        assert!(reachable(&outcomes, 1, 2));
    }
}
