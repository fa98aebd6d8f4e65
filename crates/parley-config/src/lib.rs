//! Parley configuration system.
//!
//! Provides TOML-based configuration for the chat client: model and
//! persona selection, endpoint settings, voice, export, and logging.
//! All config sections use defaults so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parley_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("default model: {}", config.chat.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ParleyConfig, PersonaConfig};
pub use validation::{validate, validate_temperature};

use std::path::Path;

use parley_common::ConfigError;

/// Load config from `path` if given, otherwise from the platform default
/// path (creating it on first run), and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<ParleyConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
