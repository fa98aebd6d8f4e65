//! OpenAI text-to-speech client.
//!
//! Replies can optionally be spoken: the text is sent to the
//! `/audio/speech` endpoint and the returned MP3 is handed back as a
//! `SpeechClip` for the caller to save or play.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::http;
use crate::openai::DEFAULT_BASE_URL;
use crate::{AiError, SpeechClip, SpeechSynthesizer};

/// Longest input the speech endpoint accepts, in characters.
pub const MAX_SPEECH_CHARS: usize = 4096;

/// Speech client configuration.
#[derive(Clone)]
pub struct SpeechConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub voice: String,
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("voice", &self.voice)
            .finish()
    }
}

impl SpeechConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "tts-1".to_string(),
            voice: "alloy".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

/// Text-to-speech client.
pub struct SpeechClient {
    config: SpeechConfig,
    http: reqwest::Client,
}

impl SpeechClient {
    pub fn new(config: SpeechConfig) -> Result<Self, AiError> {
        let http = http::build_client(Duration::from_secs(10), Duration::from_secs(60))?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl SpeechSynthesizer for SpeechClient {
    /// The endpoint detects the spoken language from the input; `language`
    /// is only logged.
    async fn synthesize(&self, text: &str, language: &str) -> Result<SpeechClip, AiError> {
        let length = text.chars().count();
        if length > MAX_SPEECH_CHARS {
            return Err(AiError::ApiError(format!(
                "text too long for speech ({length} > {MAX_SPEECH_CHARS} chars)"
            )));
        }

        let request = SpeechRequest {
            model: &self.config.model,
            input: text,
            voice: &self.config.voice,
            response_format: "mp3",
        };

        debug!(
            model = %self.config.model,
            voice = %self.config.voice,
            language,
            text_len = length,
            "speech synthesis request"
        );

        let response = self
            .http
            .post(http::endpoint(&self.config.base_url, "audio/speech"))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(http::send_error)?;

        let response = http::check_status(response).await?;

        let bytes = response.bytes().await.map_err(http::send_error)?;
        debug!("speech synthesis response: {} bytes", bytes.len());

        Ok(SpeechClip {
            bytes: bytes.to_vec(),
            extension: "mp3".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_expected_fields() {
        let request = SpeechRequest {
            model: "tts-1",
            input: "Hello",
            voice: "alloy",
            response_format: "mp3",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "tts-1",
                "input": "Hello",
                "voice": "alloy",
                "response_format": "mp3"
            })
        );
    }

    #[tokio::test]
    async fn overlong_text_is_rejected_before_sending() {
        let client = SpeechClient::new(SpeechConfig::new("sk-test").with_base_url("http://127.0.0.1:9"))
            .unwrap();
        let text = "a".repeat(MAX_SPEECH_CHARS + 1);
        let err = client.synthesize(&text, "en").await.unwrap_err();
        assert!(matches!(err, AiError::ApiError(ref m) if m.contains("too long")));
    }
}
