//! # beauty-contest
//!
//! An elimination variant of the Keynesian beauty-contest guessing game,
//! with a Monte Carlo minimax bot.
//!
//! N participants simultaneously pick an integer in `[1, 100]`. The
//! target is `0.8 ×` the mean of the picks; whoever lands closest keeps
//! their life points, everyone else loses one. Once only 2-3 players
//! remain, participants sharing the exact same pick each lose an extra
//! point — winners included. Last player standing wins.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: the [`Roster`] is passed by reference
//!    everywhere; resolution mutates only `points`, `alive` and
//!    `last_choice`. No globals.
//!
//! 2. **Injectable randomness**: every stochastic step goes through a
//!    seedable [`GameRng`], so searches and whole sessions replay
//!    deterministically.
//!
//! 3. **One rulebook**: the bot's utility evaluator reuses the round
//!    engine's target and winner-set computation, so the search
//!    optimizes exactly the game it plays.
//!
//! ## Modules
//!
//! - `core`: player identities, the roster, deterministic RNG
//! - `rules`: pick constants, round resolution, elimination
//! - `bot`: opponent model, utility evaluation, minimax search
//! - `session`: the input seam and error taxonomy for interactive drivers
//!
//! ## Driving a session
//!
//! A driver loops while more than one participant is alive: collect one
//! pick per alive player ([`choose_pick`] for bots, a
//! [`session::PickSource`] for humans) into a [`PickSet`], then hand it
//! to [`resolve_round`] and render the returned [`RoundOutcome`].

pub mod bot;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Player, PlayerId, Roster};

pub use crate::rules::{
    clamp_pick, is_endgame, resolve_round, PickSet, RoundOutcome, PICK_MAX, PICK_MIN,
    START_POINTS, TARGET_FACTOR, TIE_EPSILON,
};

pub use crate::bot::{choose_pick, evaluate, simulate_field, Hypothesis, SearchConfig};

pub use crate::session::{PickPrompt, PickResponse, PickSource, SessionError};
