//! OpenAI client configuration and credential resolution.

use std::fmt;
use std::time::Duration;

use crate::ChatError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI client configuration.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}

/// Pick the API key to use.
///
/// Resolution order:
/// 1. `OPENAI_API_KEY` env var, when non-blank
/// 2. `configured` (the config file's `api.api_key`), when non-blank
///
/// Returns `ChatError::MissingCredential` when neither yields a key.
pub fn resolve_api_key(configured: Option<&str>) -> Result<String, ChatError> {
    let env_key = std::env::var("OPENAI_API_KEY").ok();
    first_non_blank(env_key.as_deref(), configured)
        .map(String::from)
        .ok_or(ChatError::MissingCredential)
}

/// Endpoint to use: `OPENAI_BASE_URL` when non-blank, else `configured`.
pub fn resolve_base_url(configured: &str) -> String {
    let env_url = std::env::var("OPENAI_BASE_URL").ok();
    first_non_blank(env_url.as_deref(), Some(configured))
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

fn first_non_blank<'a>(preferred: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    [preferred, fallback]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
}
