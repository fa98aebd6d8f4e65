//! Chat settings: model list, selected model, temperature, persona.

use serde::{Deserialize, Serialize};

/// Settings that drive every completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Models offered by `/model`.
    pub models: Vec<String>,
    /// Model selected at startup. Must appear in `models`.
    pub model: String,
    /// Sampling temperature (valid range: 0.0-1.0).
    pub temperature: f64,
    /// Persona selected at startup.
    pub persona: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            models: vec![
                "gpt-4o-mini".into(),
                "gpt-4o".into(),
                "gpt-3.5-turbo".into(),
            ],
            model: "gpt-4o-mini".into(),
            temperature: 0.3,
            persona: "General Assistant".into(),
        }
    }
}
