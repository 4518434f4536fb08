//! Game session.
//!
//! A [`GameSession`] owns everything that changes during play (the world, the
//! player and the interpreter) and enforces the order of a turn:
//!
//! 1. [`GameSession::begin_turn`] advances world time and describes the
//!    player's location,
//! 2. the front end shows the available actions and reads one line,
//! 3. [`GameSession::submit`] interprets that line.
//!
//! The session stops once a quit is confirmed or the player dies. It never
//! touches the terminal; rendering and input belong to the REPL driver.

use anyhow::{Result, bail};
use log::info;

use crate::config::EngineConfig;
use crate::interpreter::{ActionHandler, ActionResult};
use crate::player::Player;
use crate::vocab::{Phrase, Vocabulary};
use crate::world::KernoWorld;

/// Hunger and thirst above this trigger a survival hint.
pub const NEED_HINT_THRESHOLD: f32 = 80.0;
/// Energy below this triggers a survival hint.
pub const ENERGY_HINT_THRESHOLD: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Quit,
    Dead,
}

/// Everything shown to the player before they type a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Messages from events that fired this turn.
    pub events: Vec<String>,
    /// Location name, underlined.
    pub header: String,
    pub description: String,
    pub hints: Vec<String>,
}

#[derive(Debug)]
pub struct GameSession {
    pub world: KernoWorld,
    pub player: Player,
    handler: ActionHandler,
    show_hints: bool,
    state: SessionState,
}

impl GameSession {
    /// Start a session with the player in the world's starting room.
    ///
    /// # Errors
    /// Fails if the starting room doesn't exist.
    pub fn new(world: KernoWorld, vocab: Vocabulary) -> Result<Self> {
        if world.place(&world.starting_room).is_none() {
            bail!("starting room '{}' does not exist", world.starting_room);
        }
        let player = Player::new(world.starting_room.clone());
        info!("session started in '{}' ({})", player.location, vocab.language());
        Ok(Self {
            world,
            player,
            handler: ActionHandler::new(vocab),
            show_hints: true,
            state: SessionState::Running,
        })
    }

    /// Start a session using the language, aliases, seed and hint settings of `config`.
    ///
    /// # Errors
    /// Fails if the starting room doesn't exist.
    pub fn from_config(mut world: KernoWorld, config: &EngineConfig) -> Result<Self> {
        if let Some(seed) = config.seed {
            world.reseed(seed);
        }
        let mut session = Self::new(world, config.vocabulary())?;
        session.show_hints = config.show_hints;
        Ok(session)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.handler.vocabulary()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != SessionState::Running
    }

    pub fn awaiting_confirmation(&self) -> bool {
        self.handler.awaiting_confirmation()
    }

    /// Advance world time and describe where the player is.
    ///
    /// If an event kills the player, the report carries only the event messages.
    pub fn begin_turn(&mut self) -> TurnReport {
        let events = self.world.process_events(&mut self.player);
        if self.check_death() {
            return TurnReport {
                events,
                ..TurnReport::default()
            };
        }

        let vocab = self.handler.vocabulary();
        let (header, description) = match self.world.place_mut(&self.player.location) {
            Some(place) => {
                let name = place.name().to_string();
                let underline = "=".repeat(name.chars().count());
                (format!("{name}\n{underline}"), place.describe(false, vocab))
            },
            None => (String::new(), "You can't make out your surroundings.".to_string()),
        };

        TurnReport {
            events,
            header,
            description,
            hints: self.hints(),
        }
    }

    /// Survival hints for the current vitals.
    pub fn hints(&self) -> Vec<String> {
        if !self.show_hints {
            return Vec::new();
        }
        let vocab = self.handler.vocabulary();
        let mut hints = Vec::new();
        if self.player.hunger > NEED_HINT_THRESHOLD {
            hints.push(vocab.phrase(Phrase::HungerWarning).to_string());
        }
        if self.player.thirst > NEED_HINT_THRESHOLD {
            hints.push(vocab.phrase(Phrase::ThirstWarning).to_string());
        }
        if self.player.energy < ENERGY_HINT_THRESHOLD {
            hints.push(vocab.phrase(Phrase::EnergyWarning).to_string());
        }
        hints
    }

    pub fn available_actions(&self) -> Vec<String> {
        self.handler.available_actions(&self.world, &self.player)
    }

    /// Interpret one line of player input.
    pub fn submit(&mut self, line: &str) -> ActionResult {
        let result = self.handler.process_action(&mut self.world, &mut self.player, line);
        if result.is_quit_confirmed() {
            info!("player quit after {} turns", self.world.turn_count);
            self.state = SessionState::Quit;
        } else {
            self.check_death();
        }
        result
    }

    /// End the session without confirmation (input closed).
    pub fn force_quit(&mut self) {
        if self.state == SessionState::Running {
            info!("input closed, ending session");
            self.state = SessionState::Quit;
        }
    }

    /// Closing line for a finished session.
    pub fn farewell(&self) -> Option<&'static str> {
        let vocab = self.handler.vocabulary();
        match self.state {
            SessionState::Running => None,
            SessionState::Quit => Some(vocab.phrase(Phrase::Goodbye)),
            SessionState::Dead => Some(vocab.phrase(Phrase::Death)),
        }
    }

    fn check_death(&mut self) -> bool {
        if self.state == SessionState::Running && !self.player.is_alive() {
            info!("player died on turn {}", self.world.turn_count);
            self.state = SessionState::Dead;
        }
        self.state == SessionState::Dead
    }
}
