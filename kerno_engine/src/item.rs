//! Item types and related helpers.
//!
//! Items are owned values: a room, passage or the player's inventory holds the
//! item itself, and moving it means moving the value. Furniture is fixed
//! scenery that only ever lives in a room.

use serde::Serialize;

use crate::Id;
use crate::effect::Effect;
use crate::world::WorldObject;

/// Nutrition restored by food that does not say otherwise.
pub const DEFAULT_NUTRITION: f32 = 10.0;
/// Hydration restored by drink that does not say otherwise.
pub const DEFAULT_HYDRATION: f32 = 10.0;

/// Something the player can carry (or at least try to).
///
/// `takeable` gates the `take` command; `usable` gates `use`. A `consumable`
/// item disappears from the inventory once it has been used successfully.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: Id,
    pub name: String,
    /// May be empty; [`Item::examine_text`] supplies a fallback.
    pub description: String,
    pub takeable: bool,
    pub usable: bool,
    pub consumable: bool,
    pub kind: ItemKind,
    /// Kilograms, shown in the inventory listing when present.
    pub weight: Option<f32>,
}

/// Type-specific payload of an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Food { nutrition: f32 },
    Drink { hydration: f32 },
    Tool { use_effects: Vec<UseEffect> },
    Generic { use_message: Option<String> },
}

impl ItemKind {
    /// The type tag as it appears in world data.
    pub fn tag(&self) -> &'static str {
        match self {
            ItemKind::Food { .. } => "food",
            ItemKind::Drink { .. } => "drink",
            ItemKind::Tool { .. } => "tool",
            ItemKind::Generic { .. } => "generic",
        }
    }
}

impl Item {
    /// A plain takeable item with no special behavior.
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            takeable: true,
            usable: false,
            consumable: false,
            kind: ItemKind::Generic { use_message: None },
            weight: None,
        }
    }

    /// Text shown by `examine`.
    pub fn examine_text(&self) -> String {
        if self.description.is_empty() {
            format!("A {}.", self.name)
        } else {
            self.description.clone()
        }
    }

    /// First use-effect of a tool keyed to the given location type, if any.
    pub fn use_effect_for(&self, location_type: &str) -> Option<&UseEffect> {
        match &self.kind {
            ItemKind::Tool { use_effects } => use_effects
                .iter()
                .find(|ue| ue.room_type.as_deref() == Some(location_type)),
            _ => None,
        }
    }
}

impl WorldObject for Item {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// What happens when a tool is used in a particular kind of location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseEffect {
    /// Location type this applies to. `None` never matches.
    pub room_type: Option<String>,
    pub message: Option<String>,
    pub effects: Vec<Effect>,
}

/// Fixed scenery in a room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Furniture {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub interaction: Option<Interaction>,
}

impl Furniture {
    pub fn examine_text(&self) -> String {
        if self.description.is_empty() {
            format!("A {}.", self.name)
        } else {
            self.description.clone()
        }
    }
}

impl WorldObject for Furniture {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub message: Option<String>,
    pub effects: Vec<Effect>,
}

/// Methods common to things that can hold items.
pub trait ItemHolder {
    /// Items currently held, in insertion order.
    fn items(&self) -> &[Item];
    /// Append an item.
    fn add_item(&mut self, item: Item);
    /// Remove every item with `item_id`, returning how many were removed.
    fn remove_items(&mut self, item_id: &str) -> usize;
    /// Move the first item with `item_id` out of the holder.
    fn take_item(&mut self, item_id: &str) -> Option<Item>;
    /// Return `true` when the holder contains an item with the given id.
    fn contains_item(&self, item_id: &str) -> bool {
        self.items().iter().any(|item| item.id == item_id)
    }
}

/// Shared `remove_items` / `take_item` logic for `Vec<Item>`-backed holders.
pub(crate) fn remove_all(items: &mut Vec<Item>, item_id: &str) -> usize {
    let before = items.len();
    items.retain(|item| item.id != item_id);
    before - items.len()
}

pub(crate) fn take_first(items: &mut Vec<Item>, item_id: &str) -> Option<Item> {
    let idx = items.iter().position(|item| item.id == item_id)?;
    Some(items.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Item {
        Item {
            kind: ItemKind::Tool {
                use_effects: vec![
                    UseEffect {
                        room_type: None,
                        message: Some("never".into()),
                        effects: Vec::new(),
                    },
                    UseEffect {
                        room_type: Some("dark".into()),
                        message: Some("The lamp pushes back the dark.".into()),
                        effects: Vec::new(),
                    },
                ],
            },
            ..Item::new("lamp", "Oil Lamp")
        }
    }

    #[test]
    fn examine_text_falls_back_to_name() {
        let mut rock = Item::new("rock", "rock");
        assert_eq!(rock.examine_text(), "A rock.");
        rock.description = "Grey and unremarkable.".into();
        assert_eq!(rock.examine_text(), "Grey and unremarkable.");
    }

    #[test]
    fn tool_use_effect_matches_location_type_only() {
        let lamp = lamp();
        let found = lamp.use_effect_for("dark").expect("dark effect");
        assert_eq!(found.message.as_deref(), Some("The lamp pushes back the dark."));
        assert!(lamp.use_effect_for("generic").is_none());
        assert!(Item::new("rock", "Rock").use_effect_for("dark").is_none());
    }

    #[test]
    fn remove_all_counts_duplicates() {
        let mut items = vec![Item::new("coin", "Coin"), Item::new("key", "Key"), Item::new("coin", "Coin")];
        assert_eq!(remove_all(&mut items, "coin"), 2);
        assert_eq!(items.len(), 1);
        assert_eq!(remove_all(&mut items, "coin"), 0);
    }

    #[test]
    fn take_first_moves_a_single_copy() {
        let mut items = vec![Item::new("coin", "Coin"), Item::new("coin", "Coin")];
        let taken = take_first(&mut items, "coin").expect("coin present");
        assert_eq!(taken.id, "coin");
        assert_eq!(items.len(), 1);
        assert!(take_first(&mut items, "gem").is_none());
    }
}
