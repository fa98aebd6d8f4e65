//! Configuration schema types for Parley.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the same defaults the chat client
//! ships with.

mod api;
mod chat;
mod persona;
mod system;
mod voice;

pub use api::*;
pub use chat::*;
pub use persona::*;
pub use system::*;
pub use voice::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Parley.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParleyConfig {
    pub chat: ChatConfig,
    pub personas: Vec<PersonaConfig>,
    pub api: ApiConfig,
    pub voice: VoiceConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

impl Default for ParleyConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            personas: default_personas(),
            api: ApiConfig::default(),
            voice: VoiceConfig::default(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ParleyConfig {
    /// Look up a persona by name (case-insensitive).
    pub fn persona(&self, name: &str) -> Option<&PersonaConfig> {
        self.personas
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// The persona named by `chat.persona`, falling back to the first one.
    pub fn default_persona(&self) -> Option<&PersonaConfig> {
        self.persona(&self.chat.persona)
            .or_else(|| self.personas.first())
    }

    /// Whether `model` is one of the selectable models.
    pub fn has_model(&self, model: &str) -> bool {
        self.chat.models.iter().any(|m| m == model)
    }
}

// =============================================================================
// Tests
// =============================================================================
