//! Opponent modeling: simulate where the rest of the field might pick.
//!
//! The bot does not know the other participants' strategies, so it
//! models them statistically: a hypothesis says the field clusters
//! around some center with some spread, and one simulation draws every
//! opponent's pick from that distribution.

use smallvec::SmallVec;

use crate::core::GameRng;
use crate::rules::clamp_pick;

/// A simulated opponent pick buffer; games cap at 10 players, so at most
/// 9 opponents and no heap allocation in the search's hot loop.
pub type FieldPicks = SmallVec<[i32; 9]>;

/// Chance that a simulated opponent who collided with `avoid` moves away.
pub const AVOID_PROBABILITY: f64 = 0.55;

/// Offsets a colliding simulated opponent may shift by.
pub const NUDGE_OFFSETS: [i32; 6] = [-3, -2, -1, 1, 2, 3];

/// An assumed clustering of the rest of the field: where they center and
/// how widely they scatter. Only ever lives inside one search call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hypothesis {
    /// Assumed mean of the field's picks.
    pub center: f64,
    /// Assumed standard deviation of the field's picks.
    pub spread: f64,
}

impl Hypothesis {
    /// Create a hypothesis.
    #[must_use]
    pub fn new(center: f64, spread: f64) -> Self {
        Self { center, spread }
    }
}

/// Simulate `count` opponent picks under a hypothesis.
///
/// Each pick is a Gaussian draw rounded to the nearest integer and
/// clamped into the legal range. When `avoid` is given (only done in
/// 2-3 player endgames, where duplicate picks cost points), a simulated
/// opponent that landed exactly on `avoid` moves away by 1-3 with
/// probability [`AVOID_PROBABILITY`] — a weak collision-avoidance
/// tendency that makes endgame self-play slightly more adversarial.
pub fn simulate_field(
    rng: &mut GameRng,
    count: usize,
    hypothesis: Hypothesis,
    avoid: Option<i32>,
) -> FieldPicks {
    let mut picks = FieldPicks::new();
    for _ in 0..count {
        let drawn = rng.gaussian(hypothesis.center, hypothesis.spread).round() as i32;
        let mut pick = clamp_pick(drawn);
        if let Some(taken) = avoid {
            // The coin is flipped before looking at the value, so the RNG
            // stream advances identically whether or not a collision
            // happened.
            if rng.gen_bool(AVOID_PROBABILITY) && pick == taken {
                if let Some(&shift) = rng.choose(&NUDGE_OFFSETS) {
                    pick = clamp_pick(pick + shift);
                }
            }
        }
        picks.push(pick);
    }
    picks
}
