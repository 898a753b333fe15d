/// taskduel-core: Pure-computation pairwise ranking engine.
///
/// "Which matters more?" judgments → Elo strengths → the next pair worth
/// asking about. No IO, no clock, no storage — just math. Bring your own UI.
///
/// Items are identified by caller-provided `i64` IDs. The caller owns the item
/// list and the append-only outcome history; every operation here is a pure
/// function over a snapshot of both.
///
/// # Quick start
///
/// ```rust
/// use taskduel_core::{select_next_pair, update_ratings, Item, Outcome};
///
/// let mut items = vec![
///     Item::new(1, "write report"),
///     Item::new(2, "file taxes"),
///     Item::new(3, "water plants"),
/// ];
/// let mut outcomes: Vec<Outcome> = Vec::new();
///
/// // Ask the engine which pair to present (0 = the caller's "now").
/// let (king, contender) = select_next_pair(&items, &outcomes, 0).unwrap();
///
/// // Suppose the user picks the king as more important:
/// let w = items.iter().position(|t| t.id == king).unwrap();
/// let l = items.iter().position(|t| t.id == contender).unwrap();
/// let update = update_ratings(items[w].strength, items[l].strength);
/// items[w].strength = update.winner;
/// items[l].strength = update.loser;
/// outcomes.push(Outcome { winner_id: king, loser_id: contender, timestamp: 0 });
///
/// // ...and ask again until `select_next_pair` returns `None`.
/// ```
pub mod constants;
pub mod graph;
pub mod rating;
pub mod schedule;
pub mod selection;
pub mod session;
pub mod types;

// Re-export primary public API at crate root.
pub use constants::{INITIAL_STRENGTH, K_FACTOR, MIN_SESSION_COMPARISONS, RATING_SCALE};
pub use graph::{reachable, RelationGraph};
pub use rating::{update_ratings, RatingUpdate};
pub use schedule::add_working_days;
pub use selection::select_next_pair;
pub use session::should_continue_session;
pub use types::{Item, ItemId, Outcome, Pair, Timestamp};
