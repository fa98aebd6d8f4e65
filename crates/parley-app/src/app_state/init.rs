//! Credential resolution and client construction.

use std::time::Duration;

use console::style;
use parley_ai::{
    resolve_api_key, resolve_base_url, AiError, ChatError, OpenAiClient, OpenAiConfig,
    SpeechClient, SpeechConfig, WhisperClient, WhisperConfig,
};
use parley_config::ParleyConfig;
use tracing::info;

use super::core::Clients;

/// Find an API key in the config or environment, prompting for one when
/// running in a terminal.
pub(crate) fn resolve_credential(config: &ParleyConfig) -> Result<String, ChatError> {
    match resolve_api_key(config.api.api_key.as_deref()) {
        Ok(key) => Ok(key),
        Err(ChatError::MissingCredential) if console::user_attended() => {
            println!(
                "  {} No OpenAI API key found (OPENAI_API_KEY).",
                style("!").yellow().bold()
            );
            let entered = dialoguer::Password::new()
                .with_prompt("  OpenAI API key")
                .allow_empty_password(true)
                .interact()
                .map_err(|_| ChatError::MissingCredential)?;
            resolve_api_key(Some(&entered))
        }
        Err(e) => Err(e),
    }
}

/// Build the completion, transcription, and speech clients.
pub(crate) fn build_clients(config: &ParleyConfig, api_key: &str) -> Result<Clients, AiError> {
    let base_url = resolve_base_url(&config.api.base_url);
    info!(%base_url, "using completion endpoint");

    let completion = OpenAiClient::new(
        OpenAiConfig::new(api_key)
            .with_base_url(base_url.clone())
            .with_timeouts(
                Duration::from_secs(config.api.connect_timeout_secs.into()),
                Duration::from_secs(config.api.request_timeout_secs.into()),
            ),
    )?;
    let transcriber = WhisperClient::new(whisper_config(config, api_key, &base_url))?;
    let speech = SpeechClient::new(
        SpeechConfig::new(api_key)
            .with_base_url(base_url)
            .with_model(config.voice.tts_model.clone())
            .with_voice(config.voice.voice.clone()),
    )?;

    Ok(Clients {
        completion: Box::new(completion),
        transcriber: Box::new(transcriber),
        speech: Box::new(speech),
    })
}

/// Language is only sent when configured; otherwise Whisper detects it.
fn whisper_config(config: &ParleyConfig, api_key: &str, base_url: &str) -> WhisperConfig {
    let whisper = WhisperConfig::new(api_key)
        .with_base_url(base_url)
        .with_model(config.voice.transcription_model.clone());
    match &config.voice.transcription_language {
        Some(language) => whisper.with_language(language.clone()),
        None => whisper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcription_language_is_detected_by_default() {
        let config = ParleyConfig::default();
        let whisper = whisper_config(&config, "sk-test", "http://localhost:1/v1");
        assert_eq!(whisper.language, None);
        assert_eq!(whisper.model, "whisper-1");
        assert_eq!(whisper.base_url, "http://localhost:1/v1");
    }

    #[test]
    fn configured_transcription_language_is_sent() {
        let mut config = ParleyConfig::default();
        config.voice.transcription_language = Some("fr".into());
        let whisper = whisper_config(&config, "sk-test", "http://localhost:1/v1");
        assert_eq!(whisper.language.as_deref(), Some("fr"));
    }
}
