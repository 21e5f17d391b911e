//! Round resolution: target computation, winner detection, scoring and
//! elimination.
//!
//! One round works like this: every alive participant commits an integer
//! pick in `[1, 100]` simultaneously; the target is `0.8 ×` the mean of
//! all picks; whoever lands closest (within a floating-point tie
//! tolerance) keeps their points and everyone else loses one. In the
//! endgame (2 or 3 alive) any participants sharing the exact same pick
//! value each lose an extra point, winners included.
//!
//! The winner-set computation lives here and is shared with the bot's
//! utility evaluator, so the search can never disagree with the real
//! rules about who wins a hypothetical round.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlayerId, Roster};

/// Smallest legal pick.
pub const PICK_MIN: i32 = 1;
/// Largest legal pick.
pub const PICK_MAX: i32 = 100;
/// Life points every participant starts with.
pub const START_POINTS: i32 = 10;
/// The target is this fraction of the round's mean pick.
pub const TARGET_FACTOR: f64 = 0.8;
/// Absolute tolerance for distance ties. Targets are average-derived and
/// inherently fractional, so exact equality would be wrong here.
pub const TIE_EPSILON: f64 = 1e-9;

/// Clamp a value into the legal pick range.
#[must_use]
pub fn clamp_pick(value: i32) -> i32 {
    value.clamp(PICK_MIN, PICK_MAX)
}

/// Whether the duplicate-pick penalty is active at this field size.
#[must_use]
pub fn is_endgame(alive_count: usize) -> bool {
    matches!(alive_count, 2 | 3)
}

/// Mean and target of a set of picks.
///
/// Panics if `picks` is empty; resolution and evaluation both guarantee
/// at least one pick.
#[must_use]
pub fn field_target(picks: &[i32]) -> (f64, f64) {
    assert!(!picks.is_empty(), "cannot take the target of zero picks");
    let mean = picks.iter().map(|&p| f64::from(p)).sum::<f64>() / picks.len() as f64;
    (mean, TARGET_FACTOR * mean)
}

/// Indices of the picks closest to the target, within [`TIE_EPSILON`].
///
/// Never empty for a non-empty input: the minimum distance is itself
/// within tolerance of the minimum.
#[must_use]
pub fn winner_indices(picks: &[i32], target: f64) -> Vec<usize> {
    let distances: Vec<f64> = picks.iter().map(|&p| (f64::from(p) - target).abs()).collect();
    let min_dist = distances.iter().copied().fold(f64::INFINITY, f64::min);
    distances
        .iter()
        .enumerate()
        .filter(|(_, &d)| (d - min_dist).abs() < TIE_EPSILON)
        .map(|(i, _)| i)
        .collect()
}

/// One round's simultaneous picks, one entry per alive participant.
///
/// Collected in full before any resolution logic runs; no participant's
/// pick is revealed to another before [`resolve_round`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickSet {
    picks: FxHashMap<PlayerId, i32>,
}

impl PickSet {
    /// Create an empty pick set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one participant's pick. Replaces any earlier entry.
    pub fn insert(&mut self, player: PlayerId, pick: i32) {
        debug_assert!(
            (PICK_MIN..=PICK_MAX).contains(&pick),
            "pick {pick} out of range for {player}"
        );
        self.picks.insert(player, pick);
    }

    /// Look up a participant's pick.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<i32> {
        self.picks.get(&player).copied()
    }

    /// Number of picks collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Whether no picks have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

impl FromIterator<(PlayerId, i32)> for PickSet {
    fn from_iter<I: IntoIterator<Item = (PlayerId, i32)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (player, pick) in iter {
            set.insert(player, pick);
        }
        set
    }
}

/// Everything derived from one resolved round, for rendering.
///
/// Participant order in `distances` and `deltas` is seating order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Mean of all picks this round.
    pub mean: f64,
    /// `0.8 × mean`, the number everyone was trying to approach.
    pub target: f64,
    /// Each participant's absolute distance to the target.
    pub distances: Vec<(PlayerId, f64)>,
    /// Participants whose distance tied for minimum. Never empty.
    pub winners: Vec<PlayerId>,
    /// Point change applied to each participant this round (0 or negative).
    pub deltas: Vec<(PlayerId, i32)>,
}

impl RoundOutcome {
    /// Whether a participant was in this round's winner set.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }

    /// The point change a participant took this round.
    #[must_use]
    pub fn delta(&self, player: PlayerId) -> i32 {
        self.deltas
            .iter()
            .find(|(id, _)| *id == player)
            .map_or(0, |&(_, d)| d)
    }
}

/// Resolve one round: score the pick set and apply eliminations.
///
/// Mutates only `points`, `alive` and `last_choice` on the roster.
/// Point deltas for the whole round are computed first and applied
/// together; `alive` is then recomputed for every participant at once,
/// so a player reaching 0 is eliminated at the same instant as any peer
/// reaching 0 regardless of seating order.
///
/// The caller guarantees a well-formed pick set: one in-range pick per
/// currently-alive participant. Malformed input is a programming error,
/// not a runtime condition.
pub fn resolve_round(roster: &mut Roster, picks: &PickSet) -> RoundOutcome {
    debug_assert_eq!(
        picks.len(),
        roster.alive_count(),
        "pick set must cover exactly the alive participants"
    );

    // Seating order, so outcome vectors and RNG-free logic are stable.
    let entries: Vec<(PlayerId, i32)> = roster
        .player_ids()
        .filter_map(|id| picks.get(id).map(|p| (id, p)))
        .collect();
    let alive_count = entries.len();

    debug_assert!(entries.iter().all(|&(id, _)| roster[id].alive));

    // Picks become modeling history before any scoring, so next round's
    // adaptive search sees them even from players this round eliminates.
    for &(id, pick) in &entries {
        roster[id].last_choice = Some(pick);
    }

    let values: Vec<i32> = entries.iter().map(|&(_, p)| p).collect();
    let (mean, target) = field_target(&values);
    let distances: Vec<(PlayerId, f64)> = entries
        .iter()
        .map(|&(id, p)| (id, (f64::from(p) - target).abs()))
        .collect();
    let winners: Vec<PlayerId> = winner_indices(&values, target)
        .into_iter()
        .map(|i| entries[i].0)
        .collect();

    let mut deltas: Vec<(PlayerId, i32)> = entries.iter().map(|&(id, _)| (id, 0)).collect();

    // Base rule: everyone outside the winner set loses one point.
    for (id, delta) in &mut deltas {
        if !winners.contains(id) {
            *delta -= 1;
        }
    }

    // Endgame collision rule: with 2-3 alive, every member of a
    // duplicate-pick group loses an extra point. This stacks with the
    // base rule and applies to winners too.
    if is_endgame(alive_count) {
        let mut by_value: FxHashMap<i32, Vec<usize>> = FxHashMap::default();
        for (slot, &(_, pick)) in entries.iter().enumerate() {
            by_value.entry(pick).or_default().push(slot);
        }
        for slots in by_value.values() {
            if slots.len() >= 2 {
                for &slot in slots {
                    deltas[slot].1 -= 1;
                }
            }
        }
    }

    for &(id, delta) in &deltas {
        roster[id].points += delta;
    }

    // Simultaneous elimination, only after every delta is in.
    for &(id, _) in &entries {
        let player = &mut roster[id];
        player.alive = player.points > 0;
    }

    debug!(
        mean,
        round_target = target,
        winner_count = winners.len(),
        alive_after = roster.alive_count(),
        "round resolved"
    );

    RoundOutcome {
        mean,
        target,
        distances,
        winners,
        deltas,
    }
}
