//! The bot: opponent modeling, utility evaluation, and the minimax search.
//!
//! Split the same way the round rules are consumed:
//!
//! - `model`: simulate a field of opponents under a [`Hypothesis`]
//! - `utility`: score one hypothetical round via the real rules
//! - `search`: sweep candidates × hypotheses × trials, keep the best
//!   worst case
//! - `config`: the tunable budgets and anchors

pub mod config;
pub mod model;
pub mod search;
pub mod utility;

pub use config::SearchConfig;
pub use model::{simulate_field, FieldPicks, Hypothesis};
pub use search::{assumed_spread, candidate_picks, choose_pick, hypothesis_centers, trials_per_cell};
pub use utility::evaluate;
