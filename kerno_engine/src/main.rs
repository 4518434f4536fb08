#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Kerno **
//! Terminal front end for the Kerno adventure engine.
//!
//! Usage: `kerno [WORLD_FILE]`. Without an argument the world file named in
//! the configuration (default `world.json` in the data directory) is played.

use kerno_engine::data_paths::data_path;
use kerno_engine::transcript::Transcript;
use kerno_engine::{EngineConfig, GameIo, GameSession, MessageKind, TerminalIo, load_world, run_repl};

use anyhow::{Context, Result};
use log::{info, warn};

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let config = EngineConfig::load().context("while loading configuration")?;
    let world_path = env::args_os()
        .nth(1)
        .map_or_else(|| config.world_path(), PathBuf::from);

    info!("Start: loading Kerno world from '{}'...", world_path.display());
    let world = load_world(&world_path).context("while loading KernoWorld")?;
    info!("KernoWorld loaded successfully.");

    let mut session = GameSession::from_config(world, &config)?;

    let transcript = match config.transcript.as_deref() {
        Some(path) => match Transcript::open(path) {
            Ok(transcript) => Some(transcript),
            Err(err) => {
                warn!("transcript disabled: {err:#}");
                None
            },
        },
        None => None,
    };
    let mut io = TerminalIo::new(session.vocabulary(), config.wrap_width, transcript);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    io::stdout().flush().context("flushing stdout")?;
    info!("Starting the game!");

    io.render(MessageKind::Title, "KERNO: LA LASTA DEVO");
    match fs::read_to_string(data_path("intro.txt")) {
        Ok(intro) => io.render(MessageKind::Description, intro.trim_end()),
        Err(err) => warn!("no intro text: {err}"),
    }
    io.render(
        MessageKind::Description,
        &format!("You are the {}.", session.player.profession),
    );

    run_repl(&mut session, &mut io)
}
