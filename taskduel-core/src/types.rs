use crate::constants::INITIAL_STRENGTH;

/// Caller-assigned item identifier. Opaque to the engine — only compared
/// for equality, never generated here.
pub type ItemId = i64;

/// Epoch-millisecond timestamp supplied by the caller. The engine never
/// reads a clock; "now" is always an argument.
pub type Timestamp = i64;

/// A selected pair: the king being challenged, then its strongest contender.
pub type Pair = (ItemId, ItemId);

/// A task being ranked. The caller owns creation, persistence, and ID
/// assignment; the engine reads snapshots and returns new strength values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    /// Elo strength. Starts at `INITIAL_STRENGTH`, updated only by
    /// `update_ratings` — always a whole number after the first update.
    pub strength: f64,
    /// In play at all. Callers clear this when an item is completed.
    pub active: bool,
    /// Deferred ("snoozed") until this instant; eligible again once reached.
    pub deferred_until: Option<Timestamp>,
    /// Set when the item is permanently withdrawn from ranking.
    pub withdrawn_at: Option<Timestamp>,
    /// Last time this item participated in a resolved comparison.
    /// Maintained by callers; never mutated here.
    pub last_ranked_at: Option<Timestamp>,
}

impl Item {
    pub fn new(id: ItemId, label: impl Into<String>) -> Self {
        Item {
            id,
            label: label.into(),
            strength: INITIAL_STRENGTH,
            active: true,
            deferred_until: None,
            withdrawn_at: None,
            last_ranked_at: None,
        }
    }

    /// Eligible for ranking at `now`: active, not currently deferred
    /// (deferral is over once `deferred_until <= now`), not withdrawn.
    pub fn is_eligible(&self, now: Timestamp) -> bool {
        self.active
            && self.deferred_until.map_or(true, |until| until <= now)
            && self.withdrawn_at.is_none()
    }
}

/// One resolved comparison: the winner was judged more important than the
/// loser. Append-only — outcomes are never mutated or reordered, and the
/// ordered history is the sole input to the relation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub winner_id: ItemId,
    pub loser_id: ItemId,
    pub timestamp: Timestamp,
}
