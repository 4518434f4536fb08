#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Kerno: a turn-based text adventure engine.
//!
//! Worlds are authored as JSON (see the `kerno_data` crate), loaded into a
//! [`KernoWorld`], and played through a [`GameSession`] driven by [`run_repl`].

pub const KERNO_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use kerno_data::Id;

// Core modules
pub mod command;
pub mod config;
pub mod data_paths;
pub mod effect;
pub mod entity_search;
pub mod interpreter;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod scheduler;
pub mod session;
pub mod style;
pub mod transcript;
pub mod vitals;
pub mod vocab;
pub mod world;

// Re-exports for convenience
pub use config::EngineConfig;
pub use interpreter::{ActionData, ActionHandler, ActionResult, ActionType};
pub use item::{Item, ItemHolder};
pub use loader::{load_world, world_from_def};
pub use player::Player;
pub use repl::{GameIo, InputEvent, MessageKind, TerminalIo, run_repl};
pub use room::{Passage, Place, Room};
pub use session::{GameSession, SessionState, TurnReport};
pub use vocab::{Language, Vocabulary};
pub use world::{KernoWorld, WorldObject};
