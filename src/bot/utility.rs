//! Utility evaluation for one hypothetical round.
//!
//! Scores a candidate pick against one simulated field, from the
//! evaluating bot's perspective. Deliberately reuses the real rules'
//! target and winner-set computation so the search optimizes exactly the
//! game it will be scored by, including the endgame collision penalty.

use smallvec::SmallVec;

use crate::rules::{field_target, is_endgame, winner_indices};

/// Weight of the distance-to-target shaping term.
const SHAPING_WEIGHT: f64 = 0.01;

/// Score one hypothetical round outcome for the participant picking
/// `my_pick`, with the evaluator at position 0 of the combined field.
///
/// Base utility is `+1` for landing in the winner set, `-1` otherwise.
/// In 2-3 player endgames an extra `-1` applies when `my_pick` collides
/// with any simulated opponent, mirroring the duplicate-pick rule. A
/// small `-0.01 × |my_pick - target|` term smooths the surface so that
/// among picks with the same discrete result, the one nearer the
/// predicted target scores higher.
#[must_use]
pub fn evaluate(my_pick: i32, others: &[i32], alive_count: usize) -> f64 {
    let mut all: SmallVec<[i32; 10]> = SmallVec::with_capacity(others.len() + 1);
    all.push(my_pick);
    all.extend_from_slice(others);

    let (_, target) = field_target(&all);
    let winners = winner_indices(&all, target);

    let mut utility = if winners.contains(&0) { 1.0 } else { -1.0 };

    if is_endgame(alive_count) {
        let same_as_me = all.iter().filter(|&&v| v == my_pick).count();
        if same_as_me >= 2 {
            utility -= 1.0;
        }
    }

    utility - SHAPING_WEIGHT * (f64::from(my_pick) - target).abs()
}
