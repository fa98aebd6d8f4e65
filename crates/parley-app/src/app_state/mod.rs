//! Interactive chat application state.
//!
//! `ChatApp` owns the session, the sidebar selections, and the remote
//! collaborators. The REPL in `run_loop` drives it one cycle at a time.

mod commands;
mod core;
mod init;
mod input;
mod render;
mod run_loop;
mod settings;
mod voice;

pub(crate) use self::core::ChatApp;
pub(crate) use init::{build_clients, resolve_credential};
pub(crate) use run_loop::run_chat_loop;
pub(crate) use settings::Sidebar;
