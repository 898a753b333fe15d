/// Session termination heuristic.
///
/// A session is one sitting of answered comparisons. Exhaustively resolving
/// the whole list in one sitting would be exhausting for a human, so the
/// session stops once the top spot is no longer in question — a heuristic
/// trade of completeness for a bounded number of asks per sitting.
use crate::constants::MIN_SESSION_COMPARISONS;
use crate::types::{ItemId, Pair};

/// Decide whether to keep presenting pairs after `asked_count` answers.
///
/// - No next pair: stop — the eligible set is fully ordered.
/// - Fewer than `MIN_SESSION_COMPARISONS` answered: continue unconditionally.
/// - Otherwise continue only while the next pair is still challenging the
///   overall top-ranked eligible item (the caller computes `overall_top`
///   with the same strength-descending, input-order tiebreak selection
///   uses). Once the hunt drops below the top spot, let the user resume
///   later.
pub fn should_continue_session(
    asked_count: usize,
    next_pair: Option<Pair>,
    overall_top: Option<ItemId>,
) -> bool {
    let Some((king, _)) = next_pair else {
        return false;
    };
    if asked_count < MIN_SESSION_COMPARISONS {
        return true;
    }
    overall_top == Some(king)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_without_a_next_pair() {
        assert!(!should_continue_session(0, None, Some(1)));
        assert!(!should_continue_session(10, None, None));
    }

    #[test]
    fn test_continues_unconditionally_below_minimum() {
        // Which king the pair concerns is irrelevant before 3 answers.
        assert!(should_continue_session(0, Some((5, 6)), Some(1)));
        assert!(should_continue_session(1, Some((5, 6)), None));
        assert!(should_continue_session(2, Some((5, 6)), Some(5)));
    }

    #[test]
    fn test_continues_while_hunting_the_top_spot() {
        assert!(should_continue_session(3, Some((1, 2)), Some(1)));
        assert!(should_continue_session(99, Some((1, 7)), Some(1)));
    }

    #[test]
    fn test_stops_once_hunt_drops_below_top() {
        assert!(!should_continue_session(3, Some((2, 3)), Some(1)));
        assert!(!should_continue_session(3, Some((1, 2)), None));
    }
}
