/// "King-hunting" pair selection.
///
/// Instead of soliciting all O(n²) pairwise judgments, hunt down the top of
/// the list: take the strongest item whose rank is not yet transitively
/// confirmed (the king) and challenge it with the strongest item whose order
/// relative to it is still unknown (the contender). Once a king has a known
/// relationship to every other eligible item, its position is settled and
/// the hunt moves one spot down.
use crate::graph::RelationGraph;
use crate::types::{Item, Outcome, Pair, Timestamp};

/// Pick the next pair worth asking the user about, as (king, contender) IDs.
///
/// `now` is the caller's clock reading, used only to filter out deferred
/// items. Returns `None` when fewer than two items are eligible or when the
/// eligible set is already fully, transitively ordered — a normal outcome,
/// not an error.
///
/// The returned pair never has a recorded relationship in either direction,
/// and the two IDs are always distinct.
pub fn select_next_pair(items: &[Item], outcomes: &[Outcome], now: Timestamp) -> Option<Pair> {
    let mut eligible: Vec<&Item> = items.iter().filter(|t| t.is_eligible(now)).collect();
    if eligible.len() < 2 {
        return None;
    }

    // Stable sort: equal strengths keep input order, so the choice of king
    // and contender is reproducible for a given snapshot.
    eligible.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let graph = RelationGraph::from_outcomes(outcomes);

    for king in &eligible {
        // Contenders are scanned in the same strength-descending order, so
        // the first undetermined item is the strongest contender — the
        // matchup most likely to rearrange the top of the list.
        let contender = eligible.iter().find(|t| {
            t.id != king.id && !graph.reaches(king.id, t.id) && !graph.reaches(t.id, king.id)
        });

        if let Some(contender) = contender {
            return Some((king.id, contender.id));
        }
        // This king is settled at its position; hunt the next spot down.
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::reachable;
    use crate::types::Item;

    fn item(id: i64, strength: f64) -> Item {
        let mut item = Item::new(id, format!("task {id}"));
        item.strength = strength;
        item
    }

    fn beat(winner_id: i64, loser_id: i64) -> Outcome {
        Outcome { winner_id, loser_id, timestamp: 0 }
    }

    #[test]
    fn test_none_with_fewer_than_two_eligible() {
        assert_eq!(select_next_pair(&[], &[], 0), None);
        assert_eq!(select_next_pair(&[item(1, 1000.0)], &[], 0), None);

        let mut snoozed = item(2, 1000.0);
        snoozed.deferred_until = Some(10);
        assert_eq!(select_next_pair(&[item(1, 1000.0), snoozed], &[], 5), None);
    }

    #[test]
    fn test_ineligible_items_are_filtered() {
        let mut completed = item(1, 2000.0);
        completed.active = false;
        let mut withdrawn = item(2, 1900.0);
        withdrawn.withdrawn_at = Some(1);
        let items = vec![completed, withdrawn, item(3, 1000.0), item(4, 900.0)];

        assert_eq!(select_next_pair(&items, &[], 0), Some((3, 4)));
    }

    #[test]
    fn test_snoozed_item_returns_after_deferral() {
        let mut snoozed = item(2, 1100.0);
        snoozed.deferred_until = Some(100);
        let items = vec![item(1, 1000.0), snoozed, item(3, 900.0)];

        // While deferred, the snoozed item is invisible.
        assert_eq!(select_next_pair(&items, &[], 50), Some((1, 3)));
        // At the deferral instant it is back, and strongest.
        assert_eq!(select_next_pair(&items, &[], 100), Some((2, 1)));
    }

    #[test]
    fn test_ties_break_by_input_order() {
        let items = vec![item(10, 1000.0), item(20, 1000.0), item(30, 1000.0)];
        assert_eq!(select_next_pair(&items, &[], 0), Some((10, 20)));
    }

    #[test]
    fn test_strongest_contender_challenges_king() {
        let items = vec![item(1, 1200.0), item(2, 1100.0), item(3, 1000.0)];
        // King 1 already beat 2 directly, so 3 is the only contender left.
        let outcomes = vec![beat(1, 2)];
        assert_eq!(select_next_pair(&items, &outcomes, 0), Some((1, 3)));
    }

    #[test]
    fn test_settled_king_passes_hunt_downward() {
        let items = vec![item(1, 1200.0), item(2, 1100.0), item(3, 1000.0)];
        // 1 beats 2 and (transitively or directly) 3: the top spot is settled.
        let outcomes = vec![beat(1, 2), beat(1, 3)];
        assert_eq!(select_next_pair(&items, &outcomes, 0), Some((2, 3)));
    }

    #[test]
    fn test_transitive_knowledge_skips_pair() {
        let items = vec![item(1, 1000.0), item(2, 1000.0), item(3, 1000.0)];
        // A > B and B > C imply A > C: the pair (1, 3) must never be offered.
        let outcomes = vec![beat(1, 2), beat(2, 3)];
        assert_eq!(select_next_pair(&items, &outcomes, 0), None);
    }

    #[test]
    fn test_full_round_robin_yields_none() {
        let items = vec![item(1, 1300.0), item(2, 1200.0), item(3, 1100.0), item(4, 1000.0)];
        let outcomes = vec![
            beat(1, 2), beat(1, 3), beat(1, 4),
            beat(2, 3), beat(2, 4),
            beat(3, 4),
        ];
        assert_eq!(select_next_pair(&items, &outcomes, 0), None);
    }

    #[test]
    fn test_never_offers_a_determined_pair() {
        let items = vec![item(1, 1000.0), item(2, 990.0), item(3, 980.0), item(4, 970.0)];
        let outcomes = vec![beat(2, 1), beat(3, 2), beat(4, 1)];

        let (a, b) = select_next_pair(&items, &outcomes, 0).expect("pairs remain");
        assert_ne!(a, b);
        assert!(!reachable(&outcomes, a, b));
        assert!(!reachable(&outcomes, b, a));
    }

    #[test]
    fn test_three_item_session_end_to_end() {
        // A, B, C all at the 1000 baseline.
        let items = vec![item(1, 1000.0), item(2, 1000.0), item(3, 1000.0)];
        let mut outcomes = Vec::new();

        // First ask: the two strongest by input order.
        assert_eq!(select_next_pair(&items, &outcomes, 0), Some((1, 2)));
        outcomes.push(beat(1, 2));

        // A still needs testing against C.
        assert_eq!(select_next_pair(&items, &outcomes, 0), Some((1, 3)));
        outcomes.push(beat(1, 3));

        // A is settled, but B vs C has no path either way: hunt spot #2.
        assert_eq!(select_next_pair(&items, &outcomes, 0), Some((2, 3)));
        outcomes.push(beat(2, 3));

        // Fully, transitively ordered.
        assert_eq!(select_next_pair(&items, &outcomes, 0), None);
    }

    #[test]
    fn test_cyclic_history_still_selects_only_unknown_pairs() {
        let items = vec![item(1, 1000.0), item(2, 1000.0), item(3, 1000.0), item(4, 1000.0)];
        // 1, 2, 3 form a contradiction cycle; everyone reaches everyone
        // within it, so only pairs involving 4 remain askable.
        let outcomes = vec![beat(1, 2), beat(2, 3), beat(3, 1)];

        assert_eq!(select_next_pair(&items, &outcomes, 0), Some((1, 4)));
    }
}
