//! Persona definitions.

use serde::{Deserialize, Serialize};

/// A named persona and the directive sent as the system turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaConfig {
    pub name: String,
    pub directive: String,
}

impl PersonaConfig {
    pub fn new(name: impl Into<String>, directive: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directive: directive.into(),
        }
    }
}

/// Built-in personas.
pub fn default_personas() -> Vec<PersonaConfig> {
    vec![
        PersonaConfig::new(
            "General Assistant",
            "You are a helpful, concise AI assistant.",
        ),
        PersonaConfig::new(
            "Sales Agent",
            "You are a proactive sales rep. Qualify leads, ask clarifying business \
             questions, and keep answers brief and persuasive.",
        ),
        PersonaConfig::new(
            "Support Agent",
            "You are a friendly customer support agent. Ask for required details, \
             provide step-by-step troubleshooting, and be empathetic.",
        ),
        PersonaConfig::new(
            "Expert Advisor",
            "You are a senior consultant. Provide structured, best-practice guidance \
             with examples and clear steps.",
        ),
    ]
}
