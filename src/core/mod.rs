//! Core types: player identities, the roster, and deterministic RNG.
//!
//! Everything here is plain state with no game logic; the rules and the
//! bot operate on these types explicitly rather than through globals.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerId, Roster};
pub use rng::{GameRng, GameRngState};
