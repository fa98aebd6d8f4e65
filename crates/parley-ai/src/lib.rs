//! Chat engine for Parley.
//!
//! Provides the conversation session and its collaborators:
//! - `Session`: directive + ordered user/assistant turns, one chat cycle at a time
//! - OpenAI-compatible chat completion, Whisper transcription, and speech clients
//! - Plain-text transcript export
//! - Token usage tracking per model

pub mod export;
mod http;
pub mod openai;
pub mod session;
pub mod speech;
pub mod usage;
pub mod whisper;

use async_trait::async_trait;

pub use export::{export_filename, write_export};
pub use openai::{resolve_api_key, resolve_base_url, OpenAiClient, OpenAiConfig};
pub use session::{CycleInput, CycleOutcome, Session};
pub use speech::{SpeechClient, SpeechConfig};
pub use usage::UsageTracker;
pub use whisper::{WhisperClient, WhisperConfig};

/// Sends a full transcript to a chat-completion service and returns one reply.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[Turn],
        params: &CompletionParams,
    ) -> Result<Completion, AiError>;
}

/// Turns recorded audio into text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// `extension` is the declared audio format without the dot (e.g. "wav").
    async fn transcribe(&self, audio: Vec<u8>, extension: &str) -> Result<String, AiError>;
}

/// Turns reply text into a playable audio clip.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language: &str) -> Result<SpeechClip, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Speaker label used in rendered and exported transcripts.
    pub fn label(self) -> &'static str {
        match self {
            Role::System => "System",
            Role::User => "You",
            Role::Assistant => "AI",
        }
    }
}

/// Per-request settings chosen by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub temperature: f64,
}

impl CompletionParams {
    pub fn new(model: impl Into<String>, temperature: f64) -> Self {
        Self {
            model: model.into(),
            temperature,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens.saturating_add(self.completion_tokens)
    }
}

/// Audio returned by a `SpeechSynthesizer`.
#[derive(Debug, Clone)]
pub struct SpeechClip {
    pub bytes: Vec<u8>,
    /// File extension matching the encoding (e.g. "mp3").
    pub extension: String,
}

/// Failure reported by a remote collaborator.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

/// Failure of a chat cycle or one of its optional steps.
///
/// None of these are retried; each ends the cycle that raised it.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("no API key found; set OPENAI_API_KEY or api.api_key in the config")]
    MissingCredential,
    #[error("completion failed: {0}")]
    CompletionFailure(#[source] AiError),
    #[error("transcription failed: {0}")]
    TranscriptionFailure(#[source] AiError),
    #[error("speech synthesis failed: {0}")]
    SynthesisFailure(#[source] AiError),
    #[error("message must not be empty")]
    EmptyInput,
    #[error("temperature {0} is outside [0.0, 1.0]")]
    InvalidTemperature(f64),
    #[error("no unanswered message to resend")]
    NothingToResend,
    #[error("session has no directive yet")]
    Uninitialized,
}

impl From<ChatError> for parley_common::ParleyError {
    fn from(err: ChatError) -> Self {
        parley_common::ParleyError::Chat(Box::new(err))
    }
}
