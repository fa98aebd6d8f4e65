//! Validation for the `[chat]` section and the persona list.

use std::collections::HashSet;

use crate::schema::ParleyConfig;

use super::helpers::{validate_non_empty, validate_range_f64};

/// Validate model selection and temperature.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &ParleyConfig) {
    if config.chat.models.is_empty() {
        errors.push("chat.models must list at least one model".into());
    } else if !config.has_model(&config.chat.model) {
        errors.push(format!(
            "chat.model = {:?} is not one of chat.models",
            config.chat.model
        ));
    }
    validate_range_f64(
        errors,
        "chat.temperature",
        config.chat.temperature,
        0.0,
        1.0,
    );
}

/// Validate persona names, directives, and the startup selection.
pub(crate) fn validate_personas(errors: &mut Vec<String>, config: &ParleyConfig) {
    if config.personas.is_empty() {
        errors.push("personas must define at least one persona".into());
        return;
    }

    let mut seen = HashSet::new();
    for (i, persona) in config.personas.iter().enumerate() {
        validate_non_empty(errors, &format!("personas[{i}].name"), &persona.name);
        validate_non_empty(
            errors,
            &format!("personas[{i}].directive"),
            &persona.directive,
        );
        if !seen.insert(persona.name.to_lowercase()) {
            errors.push(format!("duplicate persona name {:?}", persona.name));
        }
    }

    if config.persona(&config.chat.persona).is_none() {
        errors.push(format!(
            "chat.persona = {:?} does not match any persona",
            config.chat.persona
        ));
    }
}
