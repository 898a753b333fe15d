/// Elo strength update for a single resolved comparison.
///
/// Pure function — no state, no side effects. Inputs are arbitrary finite
/// numbers; nothing is validated because the formula is total over them.
use crate::constants::{K_FACTOR, RATING_SCALE};

/// New strengths after one comparison. Both values are whole numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingUpdate {
    pub winner: f64,
    pub loser: f64,
}

/// Compute updated strengths for the winner and loser of one comparison.
///
/// Expected score of the winner is `1 / (1 + 10^((loser - winner) / 400))`,
/// symmetric for the loser. New strength is `old + K * (actual - expected)`
/// with K = 32 and actual 1 for the winner, 0 for the loser, rounded to the
/// nearest integer (halves round away from zero, per `f64::round`).
///
/// Winning never decreases a strength and losing never increases it, for
/// any finite integer-valued inputs.
pub fn update_ratings(winner_strength: f64, loser_strength: f64) -> RatingUpdate {
    let expected_winner =
        1.0 / (1.0 + 10f64.powf((loser_strength - winner_strength) / RATING_SCALE));
    let expected_loser =
        1.0 / (1.0 + 10f64.powf((winner_strength - loser_strength) / RATING_SCALE));

    RatingUpdate {
        winner: (winner_strength + K_FACTOR * (1.0 - expected_winner)).round(),
        loser: (loser_strength + K_FACTOR * (0.0 - expected_loser)).round(),
    }
}
