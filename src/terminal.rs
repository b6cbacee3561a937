//! Stdin reader that also listens for Ctrl-C.
//!
//! A background thread reads stdin lines and the SIGINT handler posts an
//! interrupt, both into one channel. A prompt blocked on the channel wakes
//! up for whichever comes first, so Ctrl-C ends the session through
//! [`PromptError::Interrupted`] instead of killing the process.

use crate::error::PromptError;
use crate::prompt::LineSource;
use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

/// Something that happened on the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of input, terminator stripped.
    Line(String),
    /// Stdin reached end of file or failed.
    Eof,
    /// The user pressed Ctrl-C.
    Interrupt,
}

/// Line source fed by the stdin thread and the Ctrl-C handler.
pub struct TerminalInput {
    events: Receiver<InputEvent>,
}

impl TerminalInput {
    /// Install the Ctrl-C handler and start reading stdin.
    ///
    /// The handler is process-wide, so call this once.
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let signal_tx = tx.clone();
        ctrlc::set_handler(move || {
            let _ = signal_tx.send(InputEvent::Interrupt);
        })
        .context("failed to install Ctrl-C handler")?;

        thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || read_lines(io::stdin().lock(), tx))
            .context("failed to start stdin reader")?;

        Ok(Self::from_receiver(rx))
    }

    /// Build from an existing event channel.
    pub fn from_receiver(events: Receiver<InputEvent>) -> Self {
        Self { events }
    }
}

impl LineSource for TerminalInput {
    fn next_line(&mut self) -> Result<Option<String>, PromptError> {
        match self.events.recv() {
            Ok(InputEvent::Line(line)) => Ok(Some(line)),
            Ok(InputEvent::Interrupt) => {
                debug!("Ctrl-C received");
                Err(PromptError::Interrupted)
            }
            // Both senders gone means nothing more can arrive.
            Ok(InputEvent::Eof) | Err(_) => Ok(None),
        }
    }
}

/// Forward lines from `input` until end of file or until nobody listens.
pub fn read_lines<R: BufRead>(mut input: R, tx: Sender<InputEvent>) {
    loop {
        let event = match input.next_line() {
            Ok(Some(line)) => InputEvent::Line(line),
            Ok(None) => InputEvent::Eof,
            Err(PromptError::Interrupted) => continue,
            Err(e) => {
                warn!(error = %e, "Stdin read failed");
                InputEvent::Eof
            }
        };
        let done = event == InputEvent::Eof;
        if tx.send(event).is_err() || done {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_lines_forwards_lines_then_eof() {
        let (tx, rx) = mpsc::channel();
        read_lines(Cursor::new(b"first\nsecond\r\n".to_vec()), tx);

        let events: Vec<InputEvent> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                InputEvent::Line("first".into()),
                InputEvent::Line("second".into()),
                InputEvent::Eof,
            ]
        );
    }

    #[test]
    fn interrupt_event_surfaces_as_interrupted() {
        let (tx, rx) = mpsc::channel();
        tx.send(InputEvent::Line("1".into())).unwrap();
        tx.send(InputEvent::Interrupt).unwrap();
        let mut input = TerminalInput::from_receiver(rx);

        assert_eq!(input.next_line().unwrap(), Some("1".to_string()));
        assert!(matches!(input.next_line(), Err(PromptError::Interrupted)));
    }

    #[test]
    fn closed_channel_is_end_of_input() {
        let (tx, rx) = mpsc::channel::<InputEvent>();
        drop(tx);
        let mut input = TerminalInput::from_receiver(rx);
        assert_eq!(input.next_line().unwrap(), None);
    }
}
