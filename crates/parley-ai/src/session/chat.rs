//! One chat cycle: reconcile, append, request, record.

use tracing::{debug, warn};

use crate::{ChatError, CompletionClient, CompletionParams};

use super::manager::Session;
use super::types::{CycleInput, CycleOutcome};

impl Session {
    /// Run one interaction cycle.
    ///
    /// The persona directive is reconciled first, then any transcription
    /// and typed text are appended as user turns. When text was typed (or
    /// `input.resend` is set) the whole transcript is sent to `client`
    /// and the reply is appended as one assistant turn.
    ///
    /// On a completion failure nothing else is recorded: the user turn
    /// appended in this cycle stays in place and goes out again with the
    /// next request.
    pub async fn run_cycle(
        &mut self,
        client: &dyn CompletionClient,
        persona_directive: &str,
        params: &CompletionParams,
        input: CycleInput,
    ) -> Result<CycleOutcome, ChatError> {
        if !(0.0..=1.0).contains(&params.temperature) {
            return Err(ChatError::InvalidTemperature(params.temperature));
        }
        if matches!(input.user_text.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(ChatError::EmptyInput);
        }

        self.ensure_initialized(persona_directive);
        self.reconcile_persona(persona_directive);

        let mut outcome = CycleOutcome::default();

        if let Some(text) = input.transcription {
            if !text.trim().is_empty() {
                self.append_user_text(text)?;
                outcome.transcribed = true;
            }
        }

        let wants_reply = match input.user_text {
            Some(text) => {
                self.append_user_text(text)?;
                true
            }
            None if input.resend => {
                if !self.has_unanswered_turn() {
                    return Err(ChatError::NothingToResend);
                }
                true
            }
            None => false,
        };

        if !wants_reply {
            return Ok(outcome);
        }

        let messages = self.request_messages();
        debug!(
            model = %params.model,
            messages = messages.len(),
            "sending transcript"
        );

        let completion = client.complete(&messages, params).await.map_err(|e| {
            warn!(model = %params.model, "completion failed: {e}");
            ChatError::CompletionFailure(e)
        })?;

        self.usage.record(&params.model, &completion.usage);
        self.append_assistant_text(completion.content.clone())?;

        outcome.reply = Some(completion.content);
        outcome.usage = Some(completion.usage);
        Ok(outcome)
    }
}
