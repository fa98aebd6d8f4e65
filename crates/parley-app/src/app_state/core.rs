//! ChatApp struct and the operations behind each user action.

use std::path::{Path, PathBuf};

use parley_ai::{
    write_export, ChatError, CompletionClient, CycleInput, CycleOutcome, Session,
    SpeechSynthesizer, Transcriber,
};
use parley_common::{ConfigError, ParleyError};
use parley_config::ParleyConfig;
use tracing::{info, warn};

use super::settings::Sidebar;
use super::voice::{audio_extension, speech_filename};

/// The remote services one chat cycle may call.
pub(crate) struct Clients {
    pub(crate) completion: Box<dyn CompletionClient>,
    pub(crate) transcriber: Box<dyn Transcriber>,
    pub(crate) speech: Box<dyn SpeechSynthesizer>,
}

pub(crate) struct ChatApp {
    pub(crate) config: ParleyConfig,
    pub(crate) sidebar: Sidebar,
    pub(crate) session: Session,
    clients: Clients,
    output_dir: PathBuf,
}

impl ChatApp {
    pub(crate) fn new(
        config: ParleyConfig,
        sidebar: Sidebar,
        clients: Clients,
        output_dir: PathBuf,
    ) -> Self {
        let mut session = Session::new();
        session.ensure_initialized(sidebar.directive());
        Self {
            config,
            sidebar,
            session,
            clients,
            output_dir,
        }
    }

    /// Bring the session in line with the sidebar before anything is shown.
    pub(crate) fn sync_persona(&mut self) {
        let directive = self.sidebar.directive().to_string();
        self.session.ensure_initialized(&directive);
        self.session.reconcile_persona(&directive);
    }

    /// Send typed text and wait for the reply.
    pub(crate) async fn send(&mut self, text: &str) -> Result<CycleOutcome, ChatError> {
        self.cycle(CycleInput::text(text)).await
    }

    /// Resend the transcript whose last user turn got no reply.
    pub(crate) async fn retry(&mut self) -> Result<CycleOutcome, ChatError> {
        self.cycle(CycleInput::resend()).await
    }

    async fn cycle(&mut self, input: CycleInput) -> Result<CycleOutcome, ChatError> {
        let params = self.sidebar.params();
        self.session
            .run_cycle(
                self.clients.completion.as_ref(),
                &self.sidebar.persona.directive,
                &params,
                input,
            )
            .await
    }

    /// Transcribe an audio file and append the text as a user turn.
    ///
    /// Returns whether anything was appended. Failures leave the
    /// transcript untouched.
    pub(crate) async fn transcribe_file(&mut self, path: &Path) -> Result<bool, ParleyError> {
        let extension = audio_extension(path)
            .filter(|ext| self.config.voice.accepts_format(ext))
            .ok_or_else(|| {
                ParleyError::Input(format!(
                    "unsupported audio file {} (accepted: {})",
                    path.display(),
                    self.config.voice.audio_formats.join(", ")
                ))
            })?;

        let audio = tokio::fs::read(path).await?;
        info!(path = %path.display(), bytes = audio.len(), "transcribing audio");

        let text = self
            .clients
            .transcriber
            .transcribe(audio, &extension)
            .await
            .map_err(|e| {
                warn!("transcription failed: {e}");
                ChatError::TranscriptionFailure(e)
            })?;

        let outcome = self.cycle(CycleInput::transcription(text)).await?;
        Ok(outcome.transcribed)
    }

    /// Synthesize `text` and save the clip in the output directory.
    pub(crate) async fn speak(&self, text: &str) -> Result<PathBuf, ParleyError> {
        let clip = self
            .clients
            .speech
            .synthesize(text, &self.config.voice.language)
            .await
            .map_err(ChatError::SynthesisFailure)?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self
            .output_dir
            .join(speech_filename(chrono::Utc::now().timestamp(), &clip.extension));
        tokio::fs::write(&path, &clip.bytes).await?;
        info!("saved speech clip to {}", path.display());
        Ok(path)
    }

    /// Write the transcript to `dir` (or the output directory).
    pub(crate) fn export(&self, dir: Option<&Path>) -> std::io::Result<PathBuf> {
        let dir = dir.unwrap_or(&self.output_dir);
        write_export(&self.session, dir, chrono::Local::now().naive_local())
    }

    pub(crate) fn new_chat(&mut self) {
        self.session.reset();
        self.sync_persona();
    }

    pub(crate) fn switch_persona(&mut self, name: &str) -> Result<(), ConfigError> {
        self.sidebar.select_persona(&self.config, name)?;
        self.sync_persona();
        Ok(())
    }

    pub(crate) fn switch_model(&mut self, name: &str) -> Result<(), ConfigError> {
        self.sidebar.select_model(&self.config, name)
    }

    pub(crate) fn set_temperature(&mut self, value: f64) -> Result<(), ConfigError> {
        self.sidebar.set_temperature(value)
    }

    pub(crate) fn set_tts(&mut self, enabled: bool) {
        self.sidebar.tts = enabled;
    }

    pub(crate) fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests;
