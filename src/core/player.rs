//! Player identification and the life-point registry.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Roster
//!
//! The registry of every participant in a session, backed by `Vec` for
//! O(1) access. The roster is an explicit state object: the round engine
//! takes it by `&mut` and touches only `points`, `alive` and
//! `last_choice` — there is no ambient game state anywhere in the crate.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::rules::START_POINTS;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One participant's mutable state.
///
/// Invariant outside the scoring step of a round: `alive == (points > 0)`.
/// Points never rise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, opaque to the rules.
    pub name: String,
    /// Human participants pick via the session's `PickSource`; the rest
    /// pick via the decision engine.
    pub is_human: bool,
    /// Life points, starts at [`START_POINTS`].
    pub points: i32,
    /// False once points reach 0; eliminated players never act again.
    pub alive: bool,
    /// Most recent pick, fed back into the bot's adaptive modeling.
    pub last_choice: Option<i32>,
}

impl Player {
    /// Create a participant at full points.
    #[must_use]
    pub fn new(name: impl Into<String>, is_human: bool) -> Self {
        Self {
            name: name.into(),
            is_human,
            points: START_POINTS,
            alive: true,
            last_choice: None,
        }
    }
}

/// The registry of all participants in a session.
///
/// ## Example
///
/// ```
/// use beauty_contest::core::{PlayerId, Roster};
///
/// let roster = Roster::new_game(4);
/// assert_eq!(roster.alive_count(), 4);
/// assert!(roster[PlayerId::new(0)].is_human);
/// assert!(!roster[PlayerId::new(1)].is_human);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from explicit participants.
    pub fn new(players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");
        Self { players }
    }

    /// Create the standard session roster: one human and `total - 1` bots,
    /// everyone at full points.
    #[must_use]
    pub fn new_game(total: usize) -> Self {
        assert!(total >= 2, "A session needs at least 2 players");
        let mut players = vec![Player::new("You", true)];
        players.extend((1..total).map(|i| Player::new(format!("Bot {i}"), false)));
        Self::new(players)
    }

    /// Total number of participants, alive or not.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of participants still alive.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.alive).count()
    }

    /// IDs of alive participants, in seating order.
    pub fn alive_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.alive)
            .map(|(i, _)| PlayerId(i as u8))
    }

    /// Iterate over all player IDs in seating order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len() as u8).map(PlayerId)
    }

    /// Iterate over `(PlayerId, &Player)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Get a reference to a participant.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    /// Get a mutable reference to a participant.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player.index()]
    }

    /// The session standings: alive IDs sorted by points descending then
    /// name, followed by the eliminated IDs in seating order.
    #[must_use]
    pub fn standings(&self) -> (Vec<PlayerId>, Vec<PlayerId>) {
        let mut alive: Vec<PlayerId> = self.alive_ids().collect();
        alive.sort_by(|&a, &b| {
            let (pa, pb) = (self.get(a), self.get(b));
            pb.points.cmp(&pa.points).then_with(|| pa.name.cmp(&pb.name))
        });
        let eliminated = self
            .player_ids()
            .filter(|&id| !self.get(id).alive)
            .collect();
        (alive, eliminated)
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_player_starts_at_full_points() {
        let p = Player::new("Bot 1", false);
        assert_eq!(p.points, START_POINTS);
        assert!(p.alive);
        assert!(p.last_choice.is_none());
    }

    #[test]
    fn test_new_game_roster() {
        let roster = Roster::new_game(5);
        assert_eq!(roster.player_count(), 5);
        assert_eq!(roster.alive_count(), 5);
        assert!(roster[PlayerId::new(0)].is_human);
        for id in PlayerId::all(5).skip(1) {
            assert!(!roster[id].is_human);
        }
        assert_eq!(roster[PlayerId::new(1)].name, "Bot 1");
        assert_eq!(roster[PlayerId::new(4)].name, "Bot 4");
    }

    #[test]
    fn test_alive_ids_skip_eliminated() {
        let mut roster = Roster::new_game(3);
        roster[PlayerId::new(1)].points = 0;
        roster[PlayerId::new(1)].alive = false;

        let alive: Vec<_> = roster.alive_ids().collect();
        assert_eq!(alive, vec![PlayerId::new(0), PlayerId::new(2)]);
        assert_eq!(roster.alive_count(), 2);
    }

    #[test]
    fn test_standings_order() {
        let mut roster = Roster::new_game(4);
        roster[PlayerId::new(0)].points = 3;
        roster[PlayerId::new(2)].points = 7;
        roster[PlayerId::new(3)].points = 0;
        roster[PlayerId::new(3)].alive = false;

        let (alive, eliminated) = roster.standings();
        // Bot 1 still at 10, then Bot 2 at 7, then the human at 3.
        assert_eq!(
            alive,
            vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(0)]
        );
        assert_eq!(eliminated, vec![PlayerId::new(3)]);
    }

    #[test]
    fn test_standings_tie_breaks_by_name() {
        let roster = Roster::new(vec![
            Player::new("Zed", false),
            Player::new("Amy", false),
        ]);
        let (alive, _) = roster.standings();
        assert_eq!(alive, vec![PlayerId::new(1), PlayerId::new(0)]);
    }

    #[test]
    fn test_roster_serialization() {
        let roster = Roster::new_game(3);
        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, deserialized);
    }

    #[test]
    #[should_panic(expected = "at least 2 players")]
    fn test_new_game_rejects_solo() {
        let _ = Roster::new_game(1);
    }
}
