//! Conversation session management.
//!
//! A `Session` holds the persona directive and the ordered user/assistant
//! turns of one interactive conversation, and runs one chat cycle at a
//! time against a `CompletionClient`.

mod chat;
mod manager;
mod types;


pub use manager::Session;
pub use types::{CycleInput, CycleOutcome};
