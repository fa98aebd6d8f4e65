//! OpenAI-compatible chat completion client.
//!
//! Implements the `CompletionClient` trait against any endpoint that
//! speaks the `/chat/completions` protocol (OpenAI by default; the base
//! URL is configurable).

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::{resolve_api_key, resolve_base_url, OpenAiConfig, DEFAULT_BASE_URL};
