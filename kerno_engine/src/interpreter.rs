//! Command interpreter.
//!
//! [`ActionHandler::process_action`] takes one line of player input and turns
//! it into exactly one [`ActionResult`]. Gameplay failures (blocked exits,
//! missing targets, unknown words) are ordinary results with `success: false`;
//! nothing in here returns an error.
//!
//! Handlers live in submodules grouped by concern and are plain functions over
//! the world, the player and (where wording depends on it) the vocabulary.

pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use log::info;
use serde::Serialize;

use crate::Id;
use crate::command::{Command, normalize, parse_command};
use crate::item::{Furniture, Item, UseEffect};
use crate::player::Player;
use crate::vitals::StatusReport;
use crate::vocab::{Direction, Verb, Vocabulary};
use crate::world::KernoWorld;

/// Which kind of command produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    None,
    Move,
    Look,
    Examine,
    Take,
    Drop,
    Use,
    Interact,
    Inventory,
    Status,
    Help,
    Quit,
    Unknown,
}

impl From<Verb> for ActionType {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Look => ActionType::Look,
            Verb::Examine => ActionType::Examine,
            Verb::Take => ActionType::Take,
            Verb::Drop => ActionType::Drop,
            Verb::Use => ActionType::Use,
            Verb::Interact => ActionType::Interact,
            Verb::Inventory => ActionType::Inventory,
            Verb::Status => ActionType::Status,
            Verb::Help => ActionType::Help,
            Verb::Quit => ActionType::Quit,
        }
    }
}

/// Structured payload attached to some results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionData {
    Destination(Id),
    Item(Item),
    Furniture(Furniture),
    Items(Vec<Item>),
    Nutrition(f32),
    Hydration(f32),
    ToolEffect(UseEffect),
    Status(StatusReport),
    /// The player answered yes to the quit prompt.
    QuitConfirmed,
}

/// Outcome of interpreting one line of input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
    pub action_type: ActionType,
    pub data: Option<ActionData>,
}

impl ActionResult {
    pub fn success(action_type: ActionType, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            action_type,
            data: None,
        }
    }

    pub fn failure(action_type: ActionType, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            action_type,
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: ActionData) -> Self {
        self.data = Some(data);
        self
    }

    /// True for the result of a confirmed quit.
    pub fn is_quit_confirmed(&self) -> bool {
        matches!(self.data, Some(ActionData::QuitConfirmed))
    }
}

/// Interprets player input against a world and a player.
///
/// The only state carried between calls is whether a quit is waiting to be
/// confirmed.
#[derive(Debug, Clone, Default)]
pub struct ActionHandler {
    vocab: Vocabulary,
    awaiting_confirmation: bool,
}

impl ActionHandler {
    pub fn new(vocab: Vocabulary) -> Self {
        Self {
            vocab,
            awaiting_confirmation: false,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn awaiting_confirmation(&self) -> bool {
        self.awaiting_confirmation
    }

    /// Advisory list of commands that make sense right now.
    ///
    /// The fixed verbs come first, then the compass directions with an exit
    /// here, then targeted commands for room items, furniture and inventory items.
    pub fn available_actions(&self, world: &KernoWorld, player: &Player) -> Vec<String> {
        let word = |verb: Verb| self.vocab.verb_word(verb);
        let mut actions: Vec<String> = Verb::ALL.iter().map(|verb| word(*verb).to_string()).collect();

        if let Some(place) = world.place(&player.location) {
            let exits = place.exits();
            actions.extend(
                Direction::ALL
                    .iter()
                    .filter(|dir| exits.contains_key(dir.key()))
                    .map(|dir| self.vocab.direction_word(*dir).to_string()),
            );
            for item in place.items() {
                actions.push(format!("{} {}", word(Verb::Examine), item.name));
                actions.push(format!("{} {}", word(Verb::Take), item.name));
            }
            for furniture in place.furniture() {
                actions.push(format!("{} {}", word(Verb::Interact), furniture.name));
                actions.push(format!("{} {}", word(Verb::Examine), furniture.name));
            }
        }
        for item in &player.inventory {
            actions.push(format!("{} {}", word(Verb::Examine), item.name));
            actions.push(format!("{} {}", word(Verb::Drop), item.name));
            actions.push(format!("{} {}", word(Verb::Use), item.name));
        }
        actions
    }

    /// Interpret one line of input.
    pub fn process_action(&mut self, world: &mut KernoWorld, player: &mut Player, input: &str) -> ActionResult {
        let command = parse_command(input, &self.vocab);

        if std::mem::take(&mut self.awaiting_confirmation) {
            if let Command::Confirm(answer) = command {
                return confirm_quit_handler(answer);
            }
            info!("quit confirmation abandoned by new command");
        }

        match &command {
            Command::Empty => ActionResult::failure(ActionType::None, "What would you like to do?"),
            Command::Go(direction) => move_handler(world, player, &self.vocab, *direction),
            Command::Verb { verb, target } => {
                let target = target.as_deref();
                match verb {
                    Verb::Look => look_handler(world, player, &self.vocab),
                    Verb::Examine => examine_handler(world, player, target),
                    Verb::Take => take_handler(world, player, target),
                    Verb::Drop => drop_handler(world, player, target),
                    Verb::Use => use_handler(world, player, target),
                    Verb::Interact => interact_handler(world, player, target),
                    Verb::Inventory => inventory_handler(player),
                    Verb::Status => status_handler(player, &self.vocab),
                    Verb::Help => help_handler(&self.vocab),
                    Verb::Quit => {
                        self.awaiting_confirmation = true;
                        quit_handler()
                    },
                }
            },
            Command::Confirm(_) => unknown_handler(&normalize(input)),
            Command::Unknown(input) => {
                named_exit_handler(world, player, input).unwrap_or_else(|| unknown_handler(input))
            },
        }
    }
}
