//! Sidebar selections: model, temperature, persona, speech output.

use parley_ai::CompletionParams;
use parley_common::ConfigError;
use parley_config::{ParleyConfig, PersonaConfig};

use crate::cli::Args;

/// The user's current selections, checked against the config.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Sidebar {
    pub(crate) model: String,
    pub(crate) temperature: f64,
    pub(crate) persona: PersonaConfig,
    pub(crate) tts: bool,
}

impl Sidebar {
    /// Start from the config, then apply CLI overrides.
    pub(crate) fn from_config(config: &ParleyConfig, args: &Args) -> Result<Self, ConfigError> {
        let persona = config
            .default_persona()
            .cloned()
            .ok_or_else(|| ConfigError::ValidationError("no personas configured".into()))?;

        let mut sidebar = Self {
            model: config.chat.model.clone(),
            temperature: config.chat.temperature,
            persona,
            tts: config.voice.tts_enabled || args.tts,
        };

        if let Some(ref model) = args.model {
            sidebar.select_model(config, model)?;
        }
        if let Some(temperature) = args.temperature {
            sidebar.set_temperature(temperature)?;
        }
        if let Some(ref persona) = args.persona {
            sidebar.select_persona(config, persona)?;
        }

        Ok(sidebar)
    }

    pub(crate) fn select_model(&mut self, config: &ParleyConfig, name: &str) -> Result<(), ConfigError> {
        if !config.has_model(name) {
            return Err(ConfigError::ValidationError(format!(
                "unknown model {name:?} (choose from: {})",
                config.chat.models.join(", ")
            )));
        }
        self.model = name.to_string();
        Ok(())
    }

    pub(crate) fn select_persona(&mut self, config: &ParleyConfig, name: &str) -> Result<(), ConfigError> {
        let persona = config.persona(name).ok_or_else(|| {
            let names: Vec<&str> = config.personas.iter().map(|p| p.name.as_str()).collect();
            ConfigError::ValidationError(format!(
                "unknown persona {name:?} (choose from: {})",
                names.join(", ")
            ))
        })?;
        self.persona = persona.clone();
        Ok(())
    }

    pub(crate) fn set_temperature(&mut self, value: f64) -> Result<(), ConfigError> {
        parley_config::validate_temperature(value)?;
        self.temperature = value;
        Ok(())
    }

    pub(crate) fn params(&self) -> CompletionParams {
        CompletionParams::new(self.model.clone(), self.temperature)
    }

    pub(crate) fn directive(&self) -> &str {
        &self.persona.directive
    }
}
