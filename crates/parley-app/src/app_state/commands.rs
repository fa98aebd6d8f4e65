//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and stand in for the settings sidebar:
//! persona, model, temperature, speech, new chat, transcription, export.

use std::path::PathBuf;

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub(crate) enum ChatCommand {
    Help,
    Exit,
    /// Discard the conversation and start over.
    New,
    /// Show or switch the persona.
    Persona(Option<String>),
    /// Show or switch the model.
    Model(Option<String>),
    /// Show or set the temperature.
    Temperature(Option<f64>),
    /// Toggle or set speech output.
    Tts(Option<bool>),
    /// Transcribe an audio file into the conversation.
    Transcribe(PathBuf),
    /// Export the transcript, optionally to a specific directory.
    Export(Option<PathBuf>),
    /// Resend the transcript after a failed reply.
    Retry,
    History,
    Usage,
    Settings,
    /// Malformed or unknown command, with a message for the user.
    Invalid(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` for chat messages: input not starting with `/`, a
/// leading word that looks like a path (`/etc/hosts`), or `//` escapes.
pub(crate) fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    let name = trimmed.strip_prefix('/')?;

    let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd.to_lowercase(), Some(rest.trim()).filter(|a| !a.is_empty())),
        None => (trimmed.to_lowercase(), None),
    };
    if name.starts_with('/') || cmd[1..].contains('/') {
        return None;
    }

    let command = match cmd.as_str() {
        "/help" | "/h" | "/?" => ChatCommand::Help,
        "/exit" | "/quit" | "/q" => ChatCommand::Exit,
        "/new" | "/reset" => ChatCommand::New,
        "/persona" => ChatCommand::Persona(arg.map(String::from)),
        "/model" => ChatCommand::Model(arg.map(String::from)),
        "/temperature" | "/temp" => match arg.map(str::parse::<f64>) {
            None => ChatCommand::Temperature(None),
            Some(Ok(value)) => ChatCommand::Temperature(Some(value)),
            Some(Err(_)) => ChatCommand::Invalid("/temperature expects a number between 0 and 1".into()),
        },
        "/tts" => match arg.map(str::to_lowercase).as_deref() {
            None => ChatCommand::Tts(None),
            Some("on") | Some("true") => ChatCommand::Tts(Some(true)),
            Some("off") | Some("false") => ChatCommand::Tts(Some(false)),
            Some(_) => ChatCommand::Invalid("/tts expects on or off".into()),
        },
        "/transcribe" => match arg {
            Some(path) => ChatCommand::Transcribe(PathBuf::from(path)),
            None => ChatCommand::Invalid("/transcribe requires an audio file path".into()),
        },
        "/export" | "/download" => ChatCommand::Export(arg.map(PathBuf::from)),
        "/retry" => ChatCommand::Retry,
        "/history" => ChatCommand::History,
        "/usage" => ChatCommand::Usage,
        "/settings" => ChatCommand::Settings,
        other => ChatCommand::Invalid(format!(
            "Unknown command: {other}. Type /help for available commands."
        )),
    };
    Some(command)
}

/// Text to send for a non-command line; `//foo` sends `/foo`.
pub(crate) fn message_text(input: &str) -> &str {
    match input.trim_start().strip_prefix("//") {
        Some(rest) => &input[input.len() - rest.len() - 1..],
        None => input,
    }
}

/// Print the help text listing all available commands.
pub(crate) fn print_help() {
    let rows = [
        ("/persona [NAME]", "Show personas or switch persona"),
        ("/model [NAME]", "Show models or switch model"),
        ("/temperature [T]", "Show or set temperature (0.0-1.0)"),
        ("/tts [on|off]", "Toggle speaking replies"),
        ("/transcribe FILE", "Add a transcribed audio file to the chat"),
        ("/export [DIR]", "Save the chat as a .txt file"),
        ("/retry", "Resend after a failed reply"),
        ("/history", "Show the conversation"),
        ("/usage", "Show token usage"),
        ("/settings", "Show current settings"),
        ("/new", "Start a new chat"),
        ("/exit", "Quit"),
        ("//text", "Send a message that starts with /"),
    ];

    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    for (cmd, desc) in rows {
        println!("  {:<18} {desc}", style(cmd).cyan());
    }
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}
