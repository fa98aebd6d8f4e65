//! Main chat loop.
//!
//! Reads one line at a time, dispatches slash commands, and runs one
//! chat cycle per message. Input is not read again until the cycle
//! (including any speech output) has finished.

use std::error::Error;
use std::path::{Path, PathBuf};

use console::style;
use parley_ai::{ChatError, CycleOutcome};
use parley_common::ParleyError;
use tracing::{info, warn};

use super::commands::{self, ChatCommand};
use super::core::ChatApp;
use super::input::{ChatInput, InputEvent};
use super::render;

/// Run the interactive chat loop until the user exits.
pub(crate) async fn run_chat_loop(
    app: &mut ChatApp,
    initial_audio: Option<PathBuf>,
) -> Result<(), ParleyError> {
    render::print_banner(&app.sidebar);

    if let Some(path) = initial_audio {
        transcribe(app, &path).await;
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let mut input =
        ChatInput::new(prompt).map_err(|e| ParleyError::Input(format!("failed to initialize input: {e}")))?;

    loop {
        let text = match input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) if text.is_empty() => continue,
            InputEvent::Message(text) => text,
        };

        app.sync_persona();

        match commands::parse(&text) {
            Some(ChatCommand::Exit) => break,
            Some(command) => handle_command(app, command).await,
            None => {
                let result = {
                    let spinner = render::spinner("Thinking...");
                    let result = app.send(commands::message_text(&text)).await;
                    spinner.finish_and_clear();
                    result
                };
                show_reply(app, result).await;
            }
        }
    }

    input.close();
    println!("\n  {}", style("Session ended.").dim());
    info!("chat loop finished");
    Ok(())
}

async fn handle_command(app: &mut ChatApp, command: ChatCommand) {
    match command {
        ChatCommand::Help => commands::print_help(),
        ChatCommand::Exit => {}
        ChatCommand::New => {
            app.new_chat();
            render::success("Started a new chat.");
        }
        ChatCommand::Persona(None) => render::print_personas(&app.config, &app.sidebar),
        ChatCommand::Persona(Some(name)) => match app.switch_persona(&name) {
            Ok(()) => render::success(&format!("Persona: {}", app.sidebar.persona.name)),
            Err(e) => render::warning(&e.to_string()),
        },
        ChatCommand::Model(None) => render::print_models(&app.config, &app.sidebar),
        ChatCommand::Model(Some(name)) => match app.switch_model(&name) {
            Ok(()) => render::success(&format!("Model: {}", app.sidebar.model)),
            Err(e) => render::warning(&e.to_string()),
        },
        ChatCommand::Temperature(None) => {
            render::info(&format!("Temperature: {}", app.sidebar.temperature));
        }
        ChatCommand::Temperature(Some(value)) => match app.set_temperature(value) {
            Ok(()) => render::success(&format!("Temperature: {value}")),
            Err(e) => render::warning(&e.to_string()),
        },
        ChatCommand::Tts(setting) => {
            let enabled = setting.unwrap_or(!app.sidebar.tts);
            app.set_tts(enabled);
            render::success(if enabled {
                "Speaking replies."
            } else {
                "Speech off."
            });
        }
        ChatCommand::Transcribe(path) => transcribe(app, &path).await,
        ChatCommand::Export(dir) => match app.export(dir.as_deref()) {
            Ok(path) => render::success(&format!("Saved chat to {}", path.display())),
            Err(e) => render::error(&format!("Export failed: {e}")),
        },
        ChatCommand::Retry => {
            let result = {
                let spinner = render::spinner("Thinking...");
                let result = app.retry().await;
                spinner.finish_and_clear();
                result
            };
            show_reply(app, result).await;
        }
        ChatCommand::History => render::print_history(&app.session),
        ChatCommand::Usage => render::print_usage(app.session.usage()),
        ChatCommand::Settings => render::print_settings(&app.sidebar, &app.session, app.output_dir()),
        ChatCommand::Invalid(message) => render::warning(&message),
    }
}

async fn show_reply(app: &ChatApp, result: Result<CycleOutcome, ChatError>) {
    match result {
        Ok(outcome) => {
            let Some(reply) = outcome.reply else { return };
            render::print_turn(parley_ai::Role::Assistant, &reply);
            if app.sidebar.tts {
                speak(app, &reply).await;
            }
        }
        Err(ChatError::CompletionFailure(e)) => {
            warn!("cycle halted: {e}");
            render::error(&format!("Request failed: {e}"));
            render::info("Your message is kept. Type /retry to resend it.");
        }
        Err(e) => render::warning(&e.to_string()),
    }
}

async fn speak(app: &ChatApp, reply: &str) {
    let spinner = render::spinner("Speaking...");
    let result = app.speak(reply).await;
    spinner.finish_and_clear();
    match result {
        Ok(path) => render::info(&format!("Reply audio saved to {}", path.display())),
        Err(e) => render::info(&format!("TTS failed: {}", root_cause(&e))),
    }
}

/// Innermost error in a `source()` chain.
fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut cause = err;
    while let Some(next) = cause.source() {
        cause = next;
    }
    cause
}

async fn transcribe(app: &mut ChatApp, path: &Path) {
    let spinner = render::spinner("Transcribing audio...");
    let result = app.transcribe_file(path).await;
    spinner.finish_and_clear();
    match result {
        Ok(true) => render::success("Transcribed and added to chat."),
        Ok(false) => render::info("No speech found in the audio."),
        Err(e) => render::warning(&e.to_string()),
    }
}
