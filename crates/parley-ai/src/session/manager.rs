//! Session struct and transcript mutation.

use tracing::debug;

use crate::usage::UsageTracker;
use crate::{ChatError, Role, Turn};

use super::types::Transcript;

/// A conversation owned by the caller.
///
/// The transcript is created lazily by `ensure_initialized` and dropped
/// by `reset`. While it exists, the logical message list is the
/// directive (as a system turn) followed by the recorded turns.
#[derive(Debug, Default)]
pub struct Session {
    pub(super) transcript: Option<Transcript>,
    pub(super) usage: UsageTracker,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the transcript with `persona_directive` if it doesn't exist yet.
    pub fn ensure_initialized(&mut self, persona_directive: &str) {
        self.transcript.get_or_insert_with(|| {
            debug!("initializing transcript");
            Transcript::new(persona_directive)
        });
    }

    /// Overwrite the directive with the currently selected persona's text.
    ///
    /// Recorded turns are left untouched. No-op before initialization.
    pub fn reconcile_persona(&mut self, persona_directive: &str) {
        if let Some(transcript) = self.transcript.as_mut() {
            if transcript.directive != persona_directive {
                debug!("persona directive changed");
                transcript.directive = persona_directive.to_string();
            }
        }
    }

    /// Append a user turn. Empty text is rejected and nothing is recorded.
    pub fn append_user_text(&mut self, text: impl Into<String>) -> Result<(), ChatError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }
        self.push(Turn::new(Role::User, text))
    }

    pub fn append_assistant_text(&mut self, text: impl Into<String>) -> Result<(), ChatError> {
        self.push(Turn::new(Role::Assistant, text))
    }

    /// Turns can only follow a directive.
    fn push(&mut self, turn: Turn) -> Result<(), ChatError> {
        let transcript = self.transcript.as_mut().ok_or(ChatError::Uninitialized)?;
        transcript.turns.push(turn);
        Ok(())
    }

    /// Discard the transcript and usage. The next `ensure_initialized` rebuilds it.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.transcript = None;
        self.usage.reset();
    }

    /// `(role, content)` for every non-system turn, in order.
    pub fn render_pairs(&self) -> impl Iterator<Item = (Role, &str)> + Clone + '_ {
        self.turns()
            .iter()
            .filter(|t| t.role != Role::System)
            .map(|t| (t.role, t.content.as_str()))
    }

    /// `You: ...` / `AI: ...` per turn, separated by blank lines.
    pub fn export_plain_text(&self) -> String {
        self.render_pairs()
            .map(|(role, content)| format!("{}: {content}", role.label()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// The full message list sent to the completion service.
    pub fn request_messages(&self) -> Vec<Turn> {
        let Some(transcript) = self.transcript.as_ref() else {
            return Vec::new();
        };
        let mut msgs = Vec::with_capacity(transcript.turns.len() + 1);
        msgs.push(Turn::new(Role::System, transcript.directive.clone()));
        msgs.extend(transcript.turns.iter().cloned());
        msgs
    }

    pub fn is_initialized(&self) -> bool {
        self.transcript.is_some()
    }

    pub fn directive(&self) -> Option<&str> {
        self.transcript.as_ref().map(|t| t.directive.as_str())
    }

    pub fn turns(&self) -> &[Turn] {
        self.transcript
            .as_ref()
            .map(|t| t.turns.as_slice())
            .unwrap_or(&[])
    }

    /// Number of turns including the system turn (0 before initialization).
    pub fn transcript_len(&self) -> usize {
        self.transcript.as_ref().map_or(0, |t| t.turns.len() + 1)
    }

    /// Whether the last recorded turn is a user turn with no reply yet.
    pub fn has_unanswered_turn(&self) -> bool {
        matches!(self.turns().last(), Some(t) if t.role == Role::User)
    }

    pub fn usage(&self) -> &UsageTracker {
        &self.usage
    }
}
