//! File naming helpers for audio input and speech output.

use std::path::Path;

/// Lowercased extension of an audio file, without the dot.
pub(crate) fn audio_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_ascii_lowercase)
}

/// `tts_<unix-seconds>.<ext>`
pub(crate) fn speech_filename(unix_secs: i64, extension: &str) -> String {
    format!("tts_{unix_secs}.{extension}")
}
