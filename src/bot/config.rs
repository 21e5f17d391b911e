//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Tunable knobs for the bot's minimax search.
///
/// Defaults reproduce the baseline bot. Every parameter trades search
/// quality against the candidate × hypothesis × trial product, which
/// bounds the total work per decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fixed hypothesis centers to always consider; data-driven centers
    /// from the previous round are unioned in at search time.
    pub anchors: Vec<i32>,

    /// Candidate picks step by 2 instead of 1 once the alive count
    /// exceeds this, halving search cost for larger fields.
    pub stride_threshold: usize,

    /// Simulations per (candidate, hypothesis) cell for small fields.
    pub trials_small: u32,

    /// Simulations per cell once `large_field_from` players are alive.
    pub trials_large: u32,

    /// Alive count at which the reduced trial budget kicks in.
    pub large_field_from: usize,

    /// Assumed opponent spread for 4 or fewer alive.
    pub spread_close: f64,

    /// Assumed opponent spread for 5-7 alive.
    pub spread_mid: f64,

    /// Assumed opponent spread for 8 or more alive.
    pub spread_wide: f64,

    /// Magnitude of the per-decision tie-breaking jitter; one value in
    /// `[-jitter, jitter]` is drawn per call and shared by all candidates.
    pub jitter: f64,

    /// Returned if the candidate set were somehow empty. Unreachable
    /// while `PICK_MIN <= PICK_MAX`; the search asserts on it.
    pub fallback_pick: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            anchors: vec![10, 20, 30, 40, 50, 60, 70, 80, 90],
            stride_threshold: 5,
            trials_small: 10,
            trials_large: 6,
            large_field_from: 6,
            spread_close: 10.0,
            spread_mid: 15.0,
            spread_wide: 20.0,
            jitter: 0.005,
            fallback_pick: 40,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom fixed anchors.
    pub fn with_anchors(mut self, anchors: Vec<i32>) -> Self {
        self.anchors = anchors;
        self
    }

    /// Create a new config with custom trial budgets.
    pub fn with_trials(mut self, small: u32, large: u32) -> Self {
        self.trials_small = small;
        self.trials_large = large;
        self
    }

    /// Create a new config with custom jitter magnitude.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }
}
