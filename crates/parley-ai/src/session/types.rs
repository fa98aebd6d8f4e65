//! Session data types and cycle inputs/outputs.

use crate::{TokenUsage, Turn};

/// The directive plus every user/assistant turn, in order.
///
/// The directive is the system turn; it is never stored in `turns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transcript {
    pub(crate) directive: String,
    pub(crate) turns: Vec<Turn>,
}

impl Transcript {
    pub(crate) fn new(directive: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            turns: Vec::new(),
        }
    }
}

/// What the input surface produced for one cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleInput {
    /// Text returned by the transcription collaborator, if audio arrived.
    pub transcription: Option<String>,
    /// Text typed by the user.
    pub user_text: Option<String>,
    /// Send the transcript again without new text (after a failed cycle).
    pub resend: bool,
}

impl CycleInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            user_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn transcription(text: impl Into<String>) -> Self {
        Self {
            transcription: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn resend() -> Self {
        Self {
            resend: true,
            ..Self::default()
        }
    }
}

/// Result of a successful cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleOutcome {
    /// Whether a transcription was appended as a user turn.
    pub transcribed: bool,
    /// The assistant reply, when a completion was requested.
    pub reply: Option<String>,
    pub usage: Option<TokenUsage>,
}
