//! Speech output and audio transcription settings.

use serde::{Deserialize, Serialize};

/// Voice configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Speak replies at startup.
    pub tts_enabled: bool,
    pub tts_model: String,
    pub voice: String,
    /// Language tag passed with synthesis requests.
    pub language: String,
    pub transcription_model: String,
    /// ISO-639-1 hint for transcription. Unset lets the service detect it.
    pub transcription_language: Option<String>,
    /// Audio file extensions accepted by `/transcribe`.
    pub audio_formats: Vec<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            tts_enabled: false,
            tts_model: "tts-1".into(),
            voice: "alloy".into(),
            language: "en".into(),
            transcription_model: "whisper-1".into(),
            transcription_language: None,
            audio_formats: vec!["mp3".into(), "wav".into(), "m4a".into(), "ogg".into()],
        }
    }
}

impl VoiceConfig {
    /// Whether `extension` (without the dot) is an accepted audio format.
    pub fn accepts_format(&self, extension: &str) -> bool {
        self.audio_formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(extension))
    }
}
