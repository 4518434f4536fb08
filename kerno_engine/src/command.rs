//! Command module
//!
//! Turns a raw input line into a [`Command`]. Words are resolved through the
//! active [`Vocabulary`], so nothing downstream compares raw strings against
//! verb names.

use variantly::Variantly;

use crate::vocab::{Direction, Token, Verb, Vocabulary};

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// Blank input.
    Empty,
    Go(Direction),
    Verb { verb: Verb, target: Option<String> },
    /// A yes/no answer.
    Confirm(bool),
    /// The normalized input, echoed back to the player.
    Unknown(String),
}

/// Trim and lowercase an input line.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Parses an input string and returns the corresponding `Command`.
///
/// The first whitespace-delimited word picks the command; everything after it
/// (whitespace collapsed) is the free-text target.
pub fn parse_command(input: &str, vocab: &Vocabulary) -> Command {
    let normalized = normalize(input);
    let mut words = normalized.split_whitespace();
    let Some(first) = words.next() else {
        return Command::Empty;
    };
    let rest: Vec<&str> = words.collect();
    let target = if rest.is_empty() { None } else { Some(rest.join(" ")) };

    match vocab.resolve(first) {
        Some(Token::Direction(direction)) => Command::Go(direction),
        Some(Token::Verb(verb)) => Command::Verb { verb, target },
        Some(Token::Yes) => Command::Confirm(true),
        Some(Token::No) => Command::Confirm(false),
        None => Command::Unknown(normalized),
    }
}
