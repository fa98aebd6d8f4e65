//! Validation for smaller config sections: api, voice, and export.

use crate::schema::ParleyConfig;

use super::helpers::{validate_non_empty, validate_range};

/// Validate endpoint and timeout settings.
pub(crate) fn validate_api(errors: &mut Vec<String>, config: &ParleyConfig) {
    let url = config.api.base_url.as_str();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!("api.base_url = {url:?} must be an http(s) URL"));
    }
    validate_range(
        errors,
        "api.connect_timeout_secs",
        config.api.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "api.request_timeout_secs",
        config.api.request_timeout_secs,
        5,
        600,
    );
}

/// Validate voice constraints.
pub(crate) fn validate_voice(errors: &mut Vec<String>, config: &ParleyConfig) {
    validate_non_empty(errors, "voice.tts_model", &config.voice.tts_model);
    validate_non_empty(errors, "voice.voice", &config.voice.voice);
    validate_non_empty(errors, "voice.language", &config.voice.language);
    validate_non_empty(
        errors,
        "voice.transcription_model",
        &config.voice.transcription_model,
    );
    if let Some(language) = &config.voice.transcription_language {
        validate_non_empty(errors, "voice.transcription_language", language);
    }
    if config.voice.audio_formats.is_empty() {
        errors.push("voice.audio_formats must list at least one format".into());
    }
    for format in &config.voice.audio_formats {
        if format.starts_with('.') {
            errors.push(format!(
                "voice.audio_formats entry {format:?} must not start with '.'"
            ));
        }
    }
}

/// Validate export constraints.
pub(crate) fn validate_export(errors: &mut Vec<String>, config: &ParleyConfig) {
    validate_non_empty(errors, "export.directory", &config.export.directory);
}
