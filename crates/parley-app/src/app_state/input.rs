//! Async readline input handling for the chat loop.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub(crate) enum InputEvent {
    Message(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler wrapping rustyline_async.
pub(crate) struct ChatInput {
    rl: Readline,
    // Readline stops once every writer handle is dropped.
    _writer: SharedWriter,
}

impl ChatInput {
    pub(crate) fn new(prompt: String) -> Result<Self, ReadlineError> {
        let (rl, writer) = Readline::new(prompt)?;
        Ok(Self {
            rl,
            _writer: writer,
        })
    }

    /// Read one line; leading and trailing whitespace is trimmed.
    pub(crate) async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let trimmed = line.trim().to_string();
                if !trimmed.is_empty() {
                    self.rl.add_history_entry(trimmed.clone());
                }
                InputEvent::Message(trimmed)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Restore the terminal before the process exits.
    pub(crate) fn close(mut self) {
        let _ = self.rl.flush();
    }
}
