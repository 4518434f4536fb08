//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.
//! Content is authored by hand, so conversion is permissive: unknown effect
//! tags and effects missing their essential fields are dropped (and logged at
//! debug level) rather than rejected.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use kerno_data::{
    AmbientEventDef, EffectDef, EffectTargetDef, FurnitureDef, ItemDef, ItemTypeDef, PassageDef, PlayerEffectDef,
    RoomDef, StateValue, UseEffectDef, WorldDef,
};

use crate::effect::{Effect, EffectTarget, ItemSource, PlayerEffect};
use crate::item::{DEFAULT_HYDRATION, DEFAULT_NUTRITION, Furniture, Interaction, Item, ItemKind, UseEffect};
use crate::player::StatusEffect;
use crate::room::{AmbientEvent, Passage, Room};
use crate::scheduler::ScheduledEvent;
use crate::world::KernoWorld;

/// Load a `WorldDef` from a JSON file.
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing worlddef JSON from '{}'", path.display()))
}

/// Convert a (validated) `WorldDef` into a populated `KernoWorld`.
pub fn build_world_from_def(def: &WorldDef) -> Result<KernoWorld> {
    let mut world = KernoWorld::new_empty();

    for room_def in &def.rooms {
        let room = room_from_def(room_def);
        world.rooms.insert(room.id.clone(), room);
    }
    for passage_def in &def.passages {
        let passage = passage_from_def(passage_def);
        world.passages.insert(passage.id.clone(), passage);
    }
    for item_def in &def.items {
        let item = item_from_def(item_def);
        world.items.insert(item.id.clone(), item);
    }

    world.starting_room.clone_from(&def.starting_room);
    world
        .place(&world.starting_room)
        .with_context(|| format!("starting room '{}' does not exist", def.starting_room))?;
    world.global_state = def.global_state.clone();

    for event in &def.events {
        world.scheduler.schedule(ScheduledEvent {
            turns_remaining: event.turns_remaining,
            message: event.message.clone(),
            effects: effects_from_defs(&event.effects),
        });
    }

    Ok(world)
}

fn room_from_def(def: &RoomDef) -> Room {
    Room {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.description.clone(),
        room_type: def.room_type.clone(),
        visited: false,
        items: def.items.iter().map(item_from_def).collect(),
        furniture: def.furniture.iter().map(furniture_from_def).collect(),
        exits: def.exits.clone(),
        events: def.events.iter().map(ambient_event_from_def).collect(),
        properties: def.properties.clone(),
    }
}

fn passage_from_def(def: &PassageDef) -> Passage {
    Passage {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.description.clone(),
        passage_type: def.passage_type.clone(),
        visited: false,
        items: def.items.iter().map(item_from_def).collect(),
        connections: def.connections.clone(),
        properties: def.properties.clone(),
    }
}

fn ambient_event_from_def(def: &AmbientEventDef) -> AmbientEvent {
    AmbientEvent {
        probability: def.probability,
        message: def.message.clone(),
        effects: effects_from_defs(&def.effects),
    }
}

pub(crate) fn item_from_def(def: &ItemDef) -> Item {
    let kind = match def.item_type {
        ItemTypeDef::Food => ItemKind::Food {
            nutrition: def.nutrition.unwrap_or(DEFAULT_NUTRITION),
        },
        ItemTypeDef::Drink => ItemKind::Drink {
            hydration: def.hydration.unwrap_or(DEFAULT_HYDRATION),
        },
        ItemTypeDef::Tool => ItemKind::Tool {
            use_effects: def.use_effects.iter().map(use_effect_from_def).collect(),
        },
        ItemTypeDef::Generic => ItemKind::Generic {
            use_message: def.use_message.clone(),
        },
    };
    Item {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.description.clone().unwrap_or_default(),
        takeable: def.takeable,
        usable: def.usable,
        consumable: def.consumable,
        kind,
        weight: def.weight,
    }
}

fn use_effect_from_def(def: &UseEffectDef) -> UseEffect {
    UseEffect {
        room_type: def.room_type.clone(),
        message: def.message.clone(),
        effects: effects_from_defs(&def.effects),
    }
}

fn furniture_from_def(def: &FurnitureDef) -> Furniture {
    Furniture {
        id: def.id.clone(),
        name: def.name.clone(),
        description: def.description.clone().unwrap_or_default(),
        interaction: def.interaction.as_ref().map(|inter| Interaction {
            message: inter.message.clone(),
            effects: effects_from_defs(&inter.effects),
        }),
    }
}

/// Convert a list of effect definitions, dropping the ones that can't be carried out.
pub(crate) fn effects_from_defs(defs: &[EffectDef]) -> Vec<Effect> {
    defs.iter().filter_map(effect_from_def).collect()
}

fn effect_target(target: EffectTargetDef, room_id: Option<&String>) -> Option<EffectTarget> {
    match target {
        EffectTargetDef::Player => Some(EffectTarget::Player),
        EffectTargetDef::Room => Some(EffectTarget::Room(room_id.cloned())),
        EffectTargetDef::Unspecified => None,
    }
}

fn effect_from_def(def: &EffectDef) -> Option<Effect> {
    let effect = match def {
        EffectDef::AddItem {
            target,
            room_id,
            item,
            item_id,
        } => {
            let source = match (item, item_id) {
                (Some(item), _) => ItemSource::Inline(Box::new(item_from_def(item))),
                (None, Some(id)) => ItemSource::Catalog(id.clone()),
                (None, None) => {
                    debug!("add_item effect without an item dropped");
                    return None;
                },
            };
            Effect::AddItem {
                target: effect_target(*target, room_id.as_ref())?,
                item: source,
            }
        },
        EffectDef::RemoveItem {
            target,
            room_id,
            item_id,
        } => Effect::RemoveItem {
            target: effect_target(*target, room_id.as_ref())?,
            item_id: item_id.clone()?,
        },
        EffectDef::SetGlobal { key, value } => Effect::SetGlobal {
            key: key.clone()?,
            value: value.clone().unwrap_or(StateValue::Null),
        },
        EffectDef::ScheduleEvent {
            turns,
            message,
            effects,
        } => Effect::ScheduleEvent {
            turns: *turns,
            message: message.clone(),
            effects: effects_from_defs(effects),
        },
        EffectDef::PlayerEffect { effect, value } => {
            let effect = match effect {
                PlayerEffectDef::Rest => PlayerEffect::Rest,
                PlayerEffectDef::Heal => PlayerEffect::Heal,
                PlayerEffectDef::Damage => PlayerEffect::Damage,
                PlayerEffectDef::Feed => PlayerEffect::Feed,
                PlayerEffectDef::Hydrate => PlayerEffect::Hydrate,
                PlayerEffectDef::Unknown => {
                    debug!("player_effect with unknown sub-effect dropped");
                    return None;
                },
            };
            Effect::Player { effect, amount: *value }
        },
        EffectDef::AddStatus { status } => Effect::AddStatus(StatusEffect {
            id: status.id.clone(),
            name: status.name.clone(),
            description: status.description.clone(),
            turns_remaining: status.turns,
        }),
        EffectDef::RemoveStatus { id } => Effect::RemoveStatus(id.clone()),
        EffectDef::Learn { key, value } => Effect::Learn {
            key: key.clone(),
            value: value.clone(),
        },
        EffectDef::AddScar { description } => Effect::AddScar(description.clone()),
        EffectDef::Unknown => {
            debug!("effect with unrecognized type tag dropped");
            return None;
        },
    };
    Some(effect)
}
