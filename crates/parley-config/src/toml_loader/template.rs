//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Parley Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[chat]
# models = ["gpt-4o-mini", "gpt-4o", "gpt-3.5-turbo"]
# model = "gpt-4o-mini"      # must be one of `models`
# temperature = 0.3          # 0.0-1.0
# persona = "General Assistant"

[api]
# base_url = "https://api.openai.com/v1"
# api_key = "sk-..."         # prefer the OPENAI_API_KEY environment variable
# connect_timeout_secs = 10  # 1-60
# request_timeout_secs = 120 # 5-600

[voice]
# tts_enabled = false
# tts_model = "tts-1"
# voice = "alloy"
# language = "en"
# transcription_model = "whisper-1"
# transcription_language = "en"   # unset: detected from the audio
# audio_formats = ["mp3", "wav", "m4a", "ogg"]

[export]
# directory = "."

[logging]
# level = "info"             # trace, debug, info, warn, error

# Defining any [[personas]] entry replaces the built-in list.
# [[personas]]
# name = "General Assistant"
# directive = "You are a helpful, concise AI assistant."
"##
    .to_string()
}
