//! Full configuration validation.
//!
//! Validates numeric ranges, model and persona selections, and voice
//! settings. Each domain has its own submodule; this orchestrator calls
//! them all and collects errors into a single `ConfigError`.

mod chat;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::ParleyConfig;
use parley_common::ConfigError;

pub(crate) use helpers::validate_range_f64;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ParleyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    chat::validate_chat(&mut errors, config);
    chat::validate_personas(&mut errors, config);
    misc::validate_api(&mut errors, config);
    misc::validate_voice(&mut errors, config);
    misc::validate_export(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Check a temperature value against the accepted `[0.0, 1.0]` range.
pub fn validate_temperature(value: f64) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    validate_range_f64(&mut errors, "temperature", value, 0.0, 1.0);
    match errors.pop() {
        Some(e) => Err(ConfigError::ValidationError(e)),
        None => Ok(()),
    }
}
