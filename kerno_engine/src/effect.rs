//! Effects
//!
//! Effects are the data-driven mutations attached to furniture interactions,
//! tool uses and events. Content authors write them as tagged JSON records
//! (see `kerno_data::EffectDef`); the loader turns the recognizable ones into
//! [`Effect`] values and [`KernoWorld::apply_effects`](crate::KernoWorld::apply_effects)
//! carries them out.

use std::fmt;

use kerno_data::StateValue;
use serde::Serialize;
use variantly::Variantly;

use crate::Id;
use crate::item::Item;
use crate::player::StatusEffect;

/// Recipient of an item effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Variantly)]
pub enum EffectTarget {
    Player,
    /// A specific room, or the player's current location when `None`.
    Room(Option<Id>),
}

/// Where the item of an `add_item` effect comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ItemSource {
    /// Spelled out in full inside the effect.
    Inline(Box<Item>),
    /// Copied from the world's item table when the effect runs.
    Catalog(Id),
}

/// Vitals adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerEffect {
    Rest,
    Heal,
    Damage,
    Feed,
    Hydrate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    AddItem {
        target: EffectTarget,
        item: ItemSource,
    },
    RemoveItem {
        target: EffectTarget,
        item_id: Id,
    },
    /// Store a value under a global key. A key is never removed; clearing it stores `Null`.
    SetGlobal {
        key: String,
        value: StateValue,
    },
    ScheduleEvent {
        turns: i32,
        message: String,
        effects: Vec<Effect>,
    },
    Player {
        effect: PlayerEffect,
        amount: f32,
    },
    AddStatus(StatusEffect),
    RemoveStatus(Id),
    Learn {
        key: String,
        value: StateValue,
    },
    AddScar(String),
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::AddItem { target, item } => {
                let what = match item {
                    ItemSource::Inline(item) => item.id.as_str(),
                    ItemSource::Catalog(id) => id.as_str(),
                };
                write!(f, "add_item({what} -> {target:?})")
            },
            Effect::RemoveItem { target, item_id } => write!(f, "remove_item({item_id} <- {target:?})"),
            Effect::SetGlobal { key, value } => write!(f, "set_global({key} = {value})"),
            Effect::ScheduleEvent { turns, message, .. } => write!(f, "schedule_event(+{turns}: \"{message}\")"),
            Effect::Player { effect, amount } => write!(f, "player_effect({effect:?} {amount})"),
            Effect::AddStatus(status) => write!(f, "add_status({})", status.id),
            Effect::RemoveStatus(id) => write!(f, "remove_status({id})"),
            Effect::Learn { key, value } => write!(f, "learn({key} = {value})"),
            Effect::AddScar(description) => write!(f, "add_scar(\"{description}\")"),
        }
    }
}
