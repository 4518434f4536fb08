use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world document loaded by the engine.
///
/// Mirrors the JSON layout authored by content writers: a starting room, an
/// initial global state map, and tables of rooms, passages and items.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    #[serde(default)]
    pub starting_room: Id,
    #[serde(default)]
    pub global_state: BTreeMap<String, StateValue>,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub passages: Vec<PassageDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    /// Global countdown events already pending when the game starts.
    #[serde(default)]
    pub events: Vec<ScheduledEventDef>,
}

/// Opaque value stored in global state, knowledge, and property bags.
///
/// Accepts any JSON value; scalars keep their kind and containers nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<StateValue>),
    Map(BTreeMap<String, StateValue>),
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Bool(b) => write!(f, "{b}"),
            StateValue::Int(i) => write!(f, "{i}"),
            StateValue::Float(x) => write!(f, "{x}"),
            StateValue::Text(s) => write!(f, "{s}"),
            StateValue::Null => write!(f, "null"),
            StateValue::List(values) => {
                write!(f, "[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            StateValue::Map(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Bool(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        StateValue::Int(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::Text(value.to_string())
    }
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoomDef {
    pub id: Id,
    #[serde(default = "default_room_name")]
    pub name: String,
    #[serde(default = "default_room_description")]
    pub description: String,
    #[serde(rename = "type", default = "default_type_tag")]
    pub room_type: String,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub furniture: Vec<FurnitureDef>,
    /// direction name -> destination room or passage id
    #[serde(default)]
    pub exits: BTreeMap<String, Id>,
    #[serde(default)]
    pub events: Vec<AmbientEventDef>,
    #[serde(default)]
    pub properties: BTreeMap<String, StateValue>,
}

/// A transient, liminal location. Has connections instead of exits and never
/// carries furniture or ambient events.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PassageDef {
    pub id: Id,
    #[serde(default = "default_passage_name")]
    pub name: String,
    #[serde(default = "default_passage_description")]
    pub description: String,
    #[serde(rename = "type", default = "default_type_tag")]
    pub passage_type: String,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub connections: BTreeMap<String, Id>,
    #[serde(default)]
    pub properties: BTreeMap<String, StateValue>,
}

/// Item record as authored. Only `id` and `name` are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub takeable: bool,
    #[serde(default)]
    pub usable: bool,
    #[serde(default)]
    pub consumable: bool,
    #[serde(rename = "type", default)]
    pub item_type: ItemTypeDef,
    #[serde(default)]
    pub nutrition: Option<f32>,
    #[serde(default)]
    pub hydration: Option<f32>,
    #[serde(default)]
    pub use_effects: Vec<UseEffectDef>,
    #[serde(default)]
    pub use_message: Option<String>,
    #[serde(default)]
    pub weight: Option<f32>,
}

impl Default for ItemDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: None,
            takeable: true,
            usable: false,
            consumable: false,
            item_type: ItemTypeDef::Generic,
            nutrition: None,
            hydration: None,
            use_effects: Vec::new(),
            use_message: None,
            weight: None,
        }
    }
}

/// The `type` tag of an item. Unrecognized tags fall back to `Generic`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemTypeDef {
    Food,
    Drink,
    Tool,
    #[default]
    #[serde(other)]
    Generic,
}

/// Context-dependent result of using a tool, keyed by the room's type tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UseEffectDef {
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub effects: Vec<EffectDef>,
}

/// Fixed scenery: can be examined and interacted with, never taken.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FurnitureDef {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub interaction: Option<InteractionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InteractionDef {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub effects: Vec<EffectDef>,
}

/// Room-bound event rolled each turn the player is present.
/// Events without a probability never fire.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AmbientEventDef {
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub effects: Vec<EffectDef>,
}

/// Global countdown event.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduledEventDef {
    pub turns_remaining: i32,
    #[serde(default = "default_event_message")]
    pub message: String,
    #[serde(default)]
    pub effects: Vec<EffectDef>,
}

/// Who receives an `add_item` / `remove_item` effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTargetDef {
    Player,
    Room,
    #[default]
    #[serde(other)]
    Unspecified,
}

/// Named sub-effect applied to the player's vitals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerEffectDef {
    Rest,
    Heal,
    Damage,
    Feed,
    Hydrate,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Status effect record as authored inside an `add_status` effect.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusEffectDef {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Turns until the effect wears off; absent means it lasts until removed.
    #[serde(default)]
    pub turns: Option<u32>,
}

/// Tagged effect instruction executed when an event fires or an interaction triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EffectDef {
    AddItem {
        #[serde(default)]
        target: EffectTargetDef,
        #[serde(default)]
        room_id: Option<Id>,
        #[serde(default)]
        item: Option<ItemDef>,
        /// Reference into the global items table, used when `item` is absent.
        #[serde(default)]
        item_id: Option<Id>,
    },
    RemoveItem {
        #[serde(default)]
        target: EffectTargetDef,
        #[serde(default)]
        room_id: Option<Id>,
        #[serde(default)]
        item_id: Option<Id>,
    },
    /// A missing or `null` value stores [`StateValue::Null`] under the key.
    SetGlobal {
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        value: Option<StateValue>,
    },
    ScheduleEvent {
        #[serde(default = "default_turns")]
        turns: i32,
        #[serde(default = "default_event_message")]
        message: String,
        #[serde(default)]
        effects: Vec<EffectDef>,
    },
    PlayerEffect {
        #[serde(default)]
        effect: PlayerEffectDef,
        #[serde(default)]
        value: f32,
    },
    AddStatus {
        status: StatusEffectDef,
    },
    RemoveStatus {
        id: Id,
    },
    Learn {
        key: String,
        value: StateValue,
    },
    AddScar {
        description: String,
    },
    #[serde(other)]
    Unknown,
}

fn default_true() -> bool {
    true
}

fn default_turns() -> i32 {
    1
}

fn default_type_tag() -> String {
    "generic".to_string()
}

fn default_room_name() -> String {
    "Unknown Room".to_string()
}

fn default_room_description() -> String {
    "An empty room.".to_string()
}

fn default_passage_name() -> String {
    "Unknown Passage".to_string()
}

fn default_passage_description() -> String {
    "A nondescript passage.".to_string()
}

fn default_event_message() -> String {
    "Something happens.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_room_gets_documented_defaults() {
        let room: RoomDef = serde_json::from_str(r#"{ "id": "cellar" }"#).unwrap();
        assert_eq!(room.name, "Unknown Room");
        assert_eq!(room.description, "An empty room.");
        assert_eq!(room.room_type, "generic");
        assert!(room.exits.is_empty());
    }

    #[test]
    fn item_flags_default_to_takeable_only() {
        let item: ItemDef = serde_json::from_str(r#"{ "id": "rock", "name": "Rock" }"#).unwrap();
        assert!(item.takeable);
        assert!(!item.usable);
        assert!(!item.consumable);
        assert_eq!(item.item_type, ItemTypeDef::Generic);
    }

    #[test]
    fn unrecognized_item_type_is_generic() {
        let item: ItemDef = serde_json::from_str(r#"{ "id": "orb", "name": "Orb", "type": "magic" }"#).unwrap();
        assert_eq!(item.item_type, ItemTypeDef::Generic);
    }

    #[test]
    fn unknown_effect_tag_deserializes_to_unknown() {
        let fx: EffectDef = serde_json::from_str(r#"{ "type": "summon_dragon", "size": "large" }"#).unwrap();
        assert!(matches!(fx, EffectDef::Unknown));
    }

    #[test]
    fn schedule_event_defaults() {
        let fx: EffectDef = serde_json::from_str(r#"{ "type": "schedule_event" }"#).unwrap();
        match fx {
            EffectDef::ScheduleEvent { turns, message, effects } => {
                assert_eq!(turns, 1);
                assert_eq!(message, "Something happens.");
                assert!(effects.is_empty());
            },
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn state_values_keep_their_scalar_kind() {
        let map: BTreeMap<String, StateValue> =
            serde_json::from_str(r#"{ "a": true, "b": 3, "c": 0.5, "d": "power" }"#).unwrap();
        assert_eq!(map["a"], StateValue::Bool(true));
        assert_eq!(map["b"], StateValue::Int(3));
        assert_eq!(map["c"], StateValue::Float(0.5));
        assert_eq!(map["d"], StateValue::Text("power".into()));
    }

    #[test]
    fn state_values_accept_null_and_nested_containers() {
        let map: BTreeMap<String, StateValue> =
            serde_json::from_str(r#"{ "door": null, "codes": [1, 2], "npc": { "mood": "calm", "tags": [] } }"#)
                .unwrap();
        assert_eq!(map["door"], StateValue::Null);
        assert_eq!(map["codes"], StateValue::List(vec![StateValue::Int(1), StateValue::Int(2)]));
        let StateValue::Map(npc) = &map["npc"] else {
            panic!("npc should be a map: {:?}", map["npc"]);
        };
        assert_eq!(npc["mood"], StateValue::Text("calm".into()));
        assert_eq!(npc["tags"], StateValue::List(Vec::new()));
        assert_eq!(map["npc"].to_string(), "{mood: calm, tags: []}");
        assert_eq!(map["codes"].to_string(), "[1, 2]");
    }
}
