//! Status, help, quit and fallback handlers.

use log::info;

use crate::interpreter::{ActionData, ActionResult, ActionType};
use crate::player::Player;
use crate::vocab::{Direction, Verb, Vocabulary};

pub const QUIT_PROMPT: &str = "Are you sure you want to quit? (yes/no)";

/// Tiered vitals plus active status effects.
pub fn status_handler(player: &Player, vocab: &Vocabulary) -> ActionResult {
    let report = player.status(vocab.language());
    ActionResult::success(ActionType::Status, report.to_string()).with_data(ActionData::Status(report))
}

/// Static command reference, using the active language's words.
pub fn help_handler(vocab: &Vocabulary) -> ActionResult {
    let word = |verb: Verb| vocab.verb_word(verb);
    let directions: Vec<&str> = Direction::ALL.iter().map(|dir| vocab.direction_word(*dir)).collect();

    let lines = [
        format!("- {}: Look around your current location", word(Verb::Look)),
        format!("- {} [object]: Examine an object more closely", word(Verb::Examine)),
        format!("- {} [item]: Take an item and add it to your inventory", word(Verb::Take)),
        format!("- {} [item]: Drop an item from your inventory", word(Verb::Drop)),
        format!("- {} [item]: Use an item from your inventory", word(Verb::Use)),
        format!("- {} [object]: Interact with an object in the environment", word(Verb::Interact)),
        format!("- {}: Check your inventory", word(Verb::Inventory)),
        format!("- {}: Check your current status", word(Verb::Status)),
        format!("- [direction]: Move in a direction ({})", directions.join(", ")),
        format!("- {}: Exit the game", word(Verb::Quit)),
    ];
    ActionResult::success(ActionType::Help, format!("Available commands:\n{}", lines.join("\n")))
}

/// First half of quitting: ask.
pub fn quit_handler() -> ActionResult {
    info!("quit requested, awaiting confirmation");
    ActionResult::success(ActionType::Quit, QUIT_PROMPT)
}

/// Second half of quitting: the player's yes or no.
pub fn confirm_quit_handler(confirmed: bool) -> ActionResult {
    if confirmed {
        info!("quit confirmed");
        ActionResult::success(ActionType::Quit, "Farewell.").with_data(ActionData::QuitConfirmed)
    } else {
        info!("quit declined");
        ActionResult::success(ActionType::Quit, "Then let's carry on.")
    }
}

/// Input that resolved to nothing the interpreter can act on.
pub fn unknown_handler(input: &str) -> ActionResult {
    ActionResult::failure(ActionType::Unknown, format!("I don't understand '{input}'."))
}
