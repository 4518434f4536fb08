//! REPL driver.
//!
//! The game runs in a read-eval-print loop. [`run_repl`] pulls each turn from
//! a [`GameSession`] and pushes everything through a [`GameIo`], which is the
//! only thing that knows about the terminal. [`TerminalIo`] is the real one;
//! tests drive the loop with a scripted implementation instead.

mod input;

pub use input::{InputEvent, InputManager};

use std::io;

use anyhow::{Context, Result};
use log::info;
use textwrap::{fill, termwidth};

use crate::session::GameSession;
use crate::style::GameStyle;
use crate::transcript::Transcript;
use crate::vocab::Vocabulary;

/// What a block of rendered text is, so front ends can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Title,
    Header,
    Description,
    Event,
    Hint,
    Actions,
    Success,
    Failure,
    Farewell,
}

/// Presentation side of the game: show text, read one line.
pub trait GameIo {
    fn render(&mut self, kind: MessageKind, text: &str);
    /// Blocking read of one line of player input.
    ///
    /// # Errors
    /// Unrecoverable input failures.
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

/// Terminal front end: wrapped, colored output and line editing.
pub struct TerminalIo {
    input: InputManager,
    wrap_width: Option<usize>,
    transcript: Option<Transcript>,
}

impl TerminalIo {
    pub fn new(vocab: &Vocabulary, wrap_width: Option<usize>, transcript: Option<Transcript>) -> Self {
        Self {
            input: InputManager::new(vocab),
            wrap_width,
            transcript,
        }
    }

    fn width(&self) -> usize {
        self.wrap_width.unwrap_or_else(termwidth)
    }
}

impl GameIo for TerminalIo {
    fn render(&mut self, kind: MessageKind, text: &str) {
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.record(text);
        }
        let wrapped = fill(text, self.width());
        let styled = match kind {
            MessageKind::Title => wrapped.title_style(),
            MessageKind::Header => wrapped.room_titlebar_style(),
            MessageKind::Description => wrapped.description_style(),
            MessageKind::Event => wrapped.event_style(),
            MessageKind::Hint => wrapped.hint_style(),
            MessageKind::Actions => wrapped.actions_style(),
            MessageKind::Success => wrapped.success_style(),
            MessageKind::Failure => wrapped.denied_style(),
            MessageKind::Farewell => wrapped.farewell_style(),
        };
        println!("{styled}");
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let event = self.input.read_line(&prompt.prompt_style().to_string())?;
        if let (Some(transcript), InputEvent::Line(line)) = (self.transcript.as_mut(), &event) {
            transcript.record_input(line);
        }
        Ok(event)
    }
}

/// Run the main read-eval-print loop until the session ends.
///
/// Each submitted line is one turn. Ctrl-C cancels the line being typed
/// without advancing time; end of input ends the session like a confirmed quit.
///
/// # Errors
/// Only unrecoverable input failures are returned.
pub fn run_repl(session: &mut GameSession, io: &mut dyn GameIo) -> Result<()> {
    while !session.is_over() {
        let report = session.begin_turn();
        info!("================> BEGIN TURN {} <================", session.world.turn_count);
        for event in &report.events {
            io.render(MessageKind::Event, event);
        }
        if session.is_over() {
            break;
        }
        if !report.header.is_empty() {
            io.render(MessageKind::Header, &report.header);
        }
        io.render(MessageKind::Description, &report.description);
        for hint in &report.hints {
            io.render(MessageKind::Hint, hint);
        }
        io.render(
            MessageKind::Actions,
            &format!("Available actions: {}", session.available_actions().join(", ")),
        );

        let prompt = format!("\n[Turn: {}]>> ", session.world.turn_count);
        let line = loop {
            match io.read_line(&prompt).context("reading player input")? {
                InputEvent::Line(line) => break Some(line),
                InputEvent::Eof => break None,
                InputEvent::Interrupted => io.render(MessageKind::Failure, "Command canceled."),
            }
        };

        let Some(line) = line else {
            session.force_quit();
            break;
        };
        let result = session.submit(&line);
        let kind = if result.success {
            MessageKind::Success
        } else {
            MessageKind::Failure
        };
        io.render(kind, &result.message);
    }

    if let Some(farewell) = session.farewell() {
        io.render(MessageKind::Farewell, farewell);
    }
    Ok(())
}
