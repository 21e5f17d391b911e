//! The seam between the game core and an interactive session.
//!
//! The core never reads input or renders output. A session collaborator
//! implements [`PickSource`] for its human participants (stdin, a chat
//! bot, a test stub) and hands back a [`PickResponse`]; the core only
//! validates the result. Rendering the [`RoundOutcome`] and driving the
//! round loop stay on the collaborator's side.
//!
//! [`RoundOutcome`]: crate::rules::RoundOutcome

use thiserror::Error;

use crate::rules::{PICK_MAX, PICK_MIN};

/// Why a human participant's turn did not produce a pick.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The supplied value was out of range, non-numeric, or empty.
    ///
    /// This aborts the current round; the session does not re-prompt.
    #[error("invalid pick: {0}")]
    InvalidPick(String),

    /// The participant asked to quit. Ends the session, not just the round.
    #[error("quit requested")]
    QuitRequested,
}

/// Context shown to a human participant when asking for a pick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickPrompt {
    /// 1-based round number.
    pub round: u32,
    /// The prompted participant's display name.
    pub player: String,
    /// Their current points.
    pub points: i32,
}

/// What a human input capability came back with.
///
/// The core treats all three as opaque results; it never parses raw text
/// itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickResponse {
    /// A parsed integer, not yet range-checked.
    Pick(i32),
    /// An explicit cancel/quit signal.
    Quit,
    /// Unparseable input, carrying the raw offending text.
    Invalid(String),
}

impl PickResponse {
    /// Validate into a legal pick.
    ///
    /// Out-of-range values and unparseable input both become
    /// [`SessionError::InvalidPick`]; quitting becomes
    /// [`SessionError::QuitRequested`].
    pub fn into_pick(self) -> Result<i32, SessionError> {
        match self {
            PickResponse::Pick(value) if (PICK_MIN..=PICK_MAX).contains(&value) => Ok(value),
            PickResponse::Pick(value) => Err(SessionError::InvalidPick(value.to_string())),
            PickResponse::Quit => Err(SessionError::QuitRequested),
            PickResponse::Invalid(raw) => Err(SessionError::InvalidPick(raw)),
        }
    }
}

/// Human input capability: produce a response to a pick prompt.
pub trait PickSource {
    /// Ask for one pick. Implementations own all I/O and parsing.
    fn request_pick(&mut self, prompt: &PickPrompt) -> PickResponse;
}
