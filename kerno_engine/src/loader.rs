//! Loader utilities for building a `KernoWorld` from a JSON world file.
//!
//! Loading is the one place gameplay can fail hard: a missing, malformed or
//! inconsistent world file is reported as an error and the session never starts.

pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use kerno_data::WorldDef;
use log::info;

use crate::loader::worlddef::{build_world_from_def, load_worlddef};
use crate::world::KernoWorld;

/// Load, validate and convert the world file at `path`.
///
/// # Errors
/// Errors bubble up from file IO, JSON parsing, or validation.
pub fn load_world(path: &Path) -> Result<KernoWorld> {
    let worlddef = load_worlddef(path).context("while loading worlddef from file")?;
    let world = world_from_def(&worlddef)?;
    info!("world loaded from '{}'", path.display());
    Ok(world)
}

/// Validate and convert an already-parsed `WorldDef`.
///
/// # Errors
/// Returns one aggregated error listing every validation problem.
pub fn world_from_def(worlddef: &WorldDef) -> Result<KernoWorld> {
    validate_worlddef(worlddef)?;
    let world = build_world_from_def(worlddef).context("while building world from worlddef")?;
    info!("{} rooms added to KernoWorld", world.rooms.len());
    info!("{} passages added to KernoWorld", world.passages.len());
    info!("{} catalog items added to KernoWorld", world.items.len());
    info!("{} global flags added to KernoWorld", world.global_state.len());
    info!("{} pending events added to KernoWorld", world.scheduler.len());
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = kerno_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
