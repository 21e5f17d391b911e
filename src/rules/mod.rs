//! Game rules: pick range constants, round resolution, elimination.

pub mod round;

pub use round::{
    clamp_pick, field_target, is_endgame, resolve_round, winner_indices, PickSet, RoundOutcome,
    PICK_MAX, PICK_MIN, START_POINTS, TARGET_FACTOR, TIE_EPSILON,
};
