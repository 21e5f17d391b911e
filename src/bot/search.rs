//! The decision engine: adaptive Monte Carlo minimax over the pick range.
//!
//! The bot cannot search a game tree — opponents move simultaneously and
//! their strategies are unknown — so it searches an empirically sampled
//! payoff surface instead. For every candidate pick it asks: under each
//! hypothesis about where the field clusters, what is my expected
//! utility? The candidate's value is the *worst* of those expectations,
//! and the bot commits to the candidate with the best worst case. The
//! hypothesis set mixes fixed anchors with centers derived from the
//! previous round's observed picks, so the bot exploits recent tendencies
//! while staying robust to a single wrong guess about the field.

use tracing::debug;

use crate::core::{GameRng, PlayerId, Roster};
use crate::rules::{clamp_pick, is_endgame, PICK_MAX, PICK_MIN, TARGET_FACTOR};

use super::config::SearchConfig;
use super::model::{simulate_field, Hypothesis};
use super::utility::evaluate;

/// The candidate move set for a field of `alive_count` players.
///
/// Small fields get the full range; past the stride threshold every
/// second integer is enough, trading move granularity for throughput as
/// the candidate × hypothesis product grows.
#[must_use]
pub fn candidate_picks(alive_count: usize, config: &SearchConfig) -> Vec<i32> {
    let stride = if alive_count <= config.stride_threshold {
        1
    } else {
        2
    };
    (PICK_MIN..=PICK_MAX).step_by(stride).collect()
}

/// The hypothesis center set: fixed anchors, plus data-driven centers
/// when any alive player has a recorded pick from the previous round.
///
/// The adaptive centers are the previous round's observed mean, its
/// implied target, and that target scaled by 1.1 and 0.9 — a prior
/// informed by where the field actually went last round.
#[must_use]
pub fn hypothesis_centers(roster: &Roster, config: &SearchConfig) -> Vec<i32> {
    let mut centers = config.anchors.clone();

    let previous: Vec<i32> = roster
        .alive_ids()
        .filter_map(|id| roster[id].last_choice)
        .collect();
    if !previous.is_empty() {
        let prev_mean =
            previous.iter().map(|&p| f64::from(p)).sum::<f64>() / previous.len() as f64;
        let prev_target = TARGET_FACTOR * prev_mean;
        centers.push(prev_mean.round() as i32);
        centers.push(prev_target.round() as i32);
        centers.push(clamp_pick((prev_target * 1.1).round() as i32));
        centers.push(clamp_pick((prev_target * 0.9).round() as i32));
    }

    centers.sort_unstable();
    centers.dedup();
    centers
}

/// The assumed dispersion of the field: tighter for small fields, where
/// everyone is reading everyone, coarser as the field grows.
#[must_use]
pub fn assumed_spread(alive_count: usize, config: &SearchConfig) -> f64 {
    if alive_count <= 4 {
        config.spread_close
    } else if alive_count <= 7 {
        config.spread_mid
    } else {
        config.spread_wide
    }
}

/// Simulations per (candidate, hypothesis) cell. Larger fields get fewer
/// trials each, since they also get more cells.
#[must_use]
pub fn trials_per_cell(alive_count: usize, config: &SearchConfig) -> u32 {
    if alive_count >= config.large_field_from {
        config.trials_large
    } else {
        config.trials_small
    }
}

/// Choose a pick for a bot-controlled participant.
///
/// Pure computation over the roster snapshot and the supplied RNG: same
/// roster, same seed, same pick. Always returns a value in
/// `[PICK_MIN, PICK_MAX]`.
///
/// A single jitter in `[-config.jitter, config.jitter]` is drawn up
/// front and added to every candidate's score, breaking exact ties in a
/// way that is stable within one call but varies across calls. Ties that
/// survive the jitter go to the first candidate in enumeration order.
pub fn choose_pick(
    roster: &Roster,
    me: PlayerId,
    config: &SearchConfig,
    rng: &mut GameRng,
) -> i32 {
    debug_assert!(roster[me].alive, "eliminated players do not pick");

    let alive_count = roster.alive_count();
    let candidates = candidate_picks(alive_count, config);
    assert!(
        !candidates.is_empty(),
        "candidate set empty: pick range or stride misconfigured"
    );

    let centers = hypothesis_centers(roster, config);
    let spread = assumed_spread(alive_count, config);
    let trials = trials_per_cell(alive_count, config);
    let opponent_count = alive_count - 1;

    let jitter = (rng.uniform() * 2.0 - 1.0) * config.jitter;

    let mut best_pick = None;
    let mut best_value = f64::NEG_INFINITY;

    for &pick in &candidates {
        // Only simulated opponents dodge collisions in endgames; larger
        // fields have no duplicate penalty to dodge.
        let avoid = is_endgame(alive_count).then_some(pick);

        let mut worst_case = f64::INFINITY;
        for &center in &centers {
            let hypothesis = Hypothesis::new(f64::from(center), spread);
            let mut total = 0.0;
            for _ in 0..trials {
                let others = simulate_field(rng, opponent_count, hypothesis, avoid);
                total += evaluate(pick, &others, alive_count);
            }
            let expected = total / f64::from(trials);
            if expected < worst_case {
                worst_case = expected;
            }
        }

        let value = worst_case + jitter;
        if value > best_value {
            best_value = value;
            best_pick = Some(pick);
        }
    }

    let pick = best_pick.unwrap_or(config.fallback_pick);
    debug!(
        player = %me,
        pick,
        worst_case = best_value,
        alive = alive_count,
        "bot committed to pick"
    );
    pick
}
