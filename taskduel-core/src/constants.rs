/// Strength assigned to every item when it is created.
/// All items start equal; only resolved comparisons move them.
pub const INITIAL_STRENGTH: f64 = 1000.0;

/// Elo K-factor: the maximum strength movement one comparison can cause.
/// 32 keeps a small personal list responsive — a handful of judgments is
/// enough to separate items — without letting one answer swing the order
/// past what transitive inference has already established.
pub const K_FACTOR: f64 = 32.0;

/// Elo scale divisor. A 400-point strength gap means 10:1 expected odds,
/// so the expected-score curve saturates well before strengths drift apart.
pub const RATING_SCALE: f64 = 400.0;

/// Minimum comparisons solicited per session before the stop heuristic
/// applies. Prevents trivially short sessions when the current top spot
/// happens to be settled on the first ask.
pub const MIN_SESSION_COMPARISONS: usize = 3;
