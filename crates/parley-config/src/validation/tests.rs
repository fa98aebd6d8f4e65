//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ParleyConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_too_high() {
    let mut config = ParleyConfig::default();
    config.chat.temperature = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.temperature"));
}

#[test]
fn catches_negative_temperature() {
    let mut config = ParleyConfig::default();
    config.chat.temperature = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.temperature"));
}

#[test]
fn temperature_bounds_are_inclusive() {
    assert!(validate_temperature(0.0).is_ok());
    assert!(validate_temperature(1.0).is_ok());
    assert!(validate_temperature(0.35).is_ok());
    assert!(validate_temperature(1.01).is_err());
    assert!(validate_temperature(f64::NAN).is_err());
}

#[test]
fn catches_unknown_model() {
    let mut config = ParleyConfig::default();
    config.chat.model = "gpt-9".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.model"));
}

#[test]
fn catches_empty_model_list() {
    let mut config = ParleyConfig::default();
    config.chat.models.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.models"));
}

#[test]
fn catches_unknown_persona_selection() {
    let mut config = ParleyConfig::default();
    config.chat.persona = "Pirate".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.persona"));
}

#[test]
fn catches_duplicate_persona_names() {
    let mut config = ParleyConfig::default();
    config
        .personas
        .push(PersonaConfig::new("sales agent", "Another sales persona."));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate persona"));
}

#[test]
fn catches_empty_directive() {
    let mut config = ParleyConfig::default();
    config.personas[1].directive = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("personas[1].directive"));
}

#[test]
fn catches_bad_base_url() {
    let mut config = ParleyConfig::default();
    config.api.base_url = "api.openai.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.base_url"));
}

#[test]
fn catches_timeout_out_of_range() {
    let mut config = ParleyConfig::default();
    config.api.request_timeout_secs = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("api.request_timeout_secs"));
}

#[test]
fn catches_dotted_audio_format() {
    let mut config = ParleyConfig::default();
    config.voice.audio_formats = vec![".mp3".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("voice.audio_formats"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ParleyConfig::default();
    config.chat.temperature = 3.0;
    config.voice.language = String::new();
    config.export.directory = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.temperature"));
    assert!(err.contains("voice.language"));
    assert!(err.contains("export.directory"));
    assert!(err.contains("; "));
}

#[test]
fn transcription_language_is_optional_but_not_blank() {
    let mut config = ParleyConfig::default();
    assert!(validate(&config).is_ok());

    config.voice.transcription_language = Some("de".into());
    assert!(validate(&config).is_ok());

    config.voice.transcription_language = Some(" ".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("voice.transcription_language"));
}
