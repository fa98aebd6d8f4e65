//! Whisper transcription client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::http;
use crate::openai::DEFAULT_BASE_URL;
use crate::{AiError, Transcriber};

#[derive(Clone)]
pub struct WhisperConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub language: Option<String>,
}

impl std::fmt::Debug for WhisperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("language", &self.language)
            .finish()
    }
}

impl WhisperConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "whisper-1".to_string(),
            language: None,
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

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// MIME type for a declared audio extension.
pub(crate) fn mime_for(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "mp3" | "mpga" | "mpeg" => "audio/mpeg",
        "m4a" | "mp4" => "audio/mp4",
        "webm" => "audio/webm",
        "ogg" => "audio/ogg",
        _ => "audio/wav",
    }
}

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
// Long recordings take a while to upload and decode.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Speech-to-text over `POST <base_url>/audio/transcriptions`.
pub struct WhisperClient {
    config: WhisperConfig,
    http: reqwest::Client,
}

impl WhisperClient {
    pub fn new(config: WhisperConfig) -> Result<Self, AiError> {
        let http = http::build_client(CONNECT_TIMEOUT, REQUEST_TIMEOUT)?;
        Ok(Self { config, http })
    }

    /// Multipart body: `file` named `audio.<ext>`, `model`, optional `language`.
    fn form(&self, audio: Vec<u8>, extension: &str) -> Result<Form, AiError> {
        let file = Part::bytes(audio)
            .file_name(format!("audio.{extension}"))
            .mime_str(mime_for(extension))
            .map_err(|e| AiError::ApiError(format!("bad audio part: {e}")))?;

        let form = Form::new()
            .part("file", file)
            .text("model", self.config.model.clone());

        Ok(match &self.config.language {
            Some(language) => form.text("language", language.clone()),
            None => form,
        })
    }
}

#[async_trait]
impl Transcriber for WhisperClient {
    async fn transcribe(&self, audio: Vec<u8>, extension: &str) -> Result<String, AiError> {
        debug!(model = %self.config.model, bytes = audio.len(), extension, "transcribing");
        let form = self.form(audio, extension)?;

        let response = self
            .http
            .post(http::endpoint(&self.config.base_url, "audio/transcriptions"))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(http::send_error)?;

        let body: TranscriptionResponse = http::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| AiError::ParseError(format!("transcription response: {e}")))?;

        Ok(body.text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_for_accepted_formats() {
        assert_eq!(mime_for("mp3"), "audio/mpeg");
        assert_eq!(mime_for("M4A"), "audio/mp4");
        assert_eq!(mime_for("ogg"), "audio/ogg");
        assert_eq!(mime_for("wav"), "audio/wav");
        assert_eq!(mime_for("unknown"), "audio/wav");
    }

    #[test]
    fn response_text_is_read() {
        let body: TranscriptionResponse =
            serde_json::from_str(r#"{"text": "  hello there \n"}"#).unwrap();
        assert_eq!(body.text.trim(), "hello there");
    }

    #[test]
    fn config_builders() {
        let config = WhisperConfig::new("sk-test")
            .with_model("whisper-large")
            .with_language("en")
            .with_base_url("http://localhost:1/v1");
        assert_eq!(config.model, "whisper-large");
        assert_eq!(config.language.as_deref(), Some("en"));
        assert!(!format!("{config:?}").contains("sk-test"));
    }
}
