//! Room and passage definitions.
//!
//! Rooms are the places a scene happens in: they can hold furniture and roll
//! ambient events. Passages are the in-between spaces (corridors, shafts,
//! ladders) that only carry items and connections. Both implement [`Place`],
//! which is all that movement, `look` and item transfer need to know about.

use std::collections::BTreeMap;

use kerno_data::StateValue;
use serde::Serialize;

use crate::Id;
use crate::effect::Effect;
use crate::item::{Furniture, Item, ItemHolder, remove_all, take_first};
use crate::vocab::{Direction, Phrase, Vocabulary};
use crate::world::WorldObject;

/// Room-bound event with a per-turn chance of firing while the player is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbientEvent {
    /// Chance in `[0, 1]`. Events without one never fire.
    pub probability: Option<f64>,
    pub message: String,
    pub effects: Vec<Effect>,
}

/// Behavior shared by every location the player can stand in.
pub trait Place: WorldObject + ItemHolder {
    /// Direction key -> destination id.
    fn exits(&self) -> &BTreeMap<String, Id>;
    /// Type tag matched against tool use-effects.
    fn location_type(&self) -> &str;
    fn furniture(&self) -> &[Furniture] {
        &[]
    }
    fn ambient_events(&self) -> &[AmbientEvent] {
        &[]
    }
    fn visited(&self) -> bool;
    /// Render the location. The first call always renders in detail and marks
    /// the place visited.
    fn describe(&mut self, detailed: bool, vocab: &Vocabulary) -> String;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub room_type: String,
    pub visited: bool,
    pub items: Vec<Item>,
    pub furniture: Vec<Furniture>,
    pub exits: BTreeMap<String, Id>,
    pub events: Vec<AmbientEvent>,
    pub properties: BTreeMap<String, StateValue>,
}

impl Room {
    /// An empty, unvisited generic room.
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: "An empty room.".to_string(),
            room_type: "generic".to_string(),
            visited: false,
            items: Vec::new(),
            furniture: Vec::new(),
            exits: BTreeMap::new(),
            events: Vec::new(),
            properties: BTreeMap::new(),
        }
    }
}

impl WorldObject for Room {
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

impl ItemHolder for Room {
    fn items(&self) -> &[Item] {
        &self.items
    }
    fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }
    fn remove_items(&mut self, item_id: &str) -> usize {
        remove_all(&mut self.items, item_id)
    }
    fn take_item(&mut self, item_id: &str) -> Option<Item> {
        take_first(&mut self.items, item_id)
    }
}

impl Place for Room {
    fn exits(&self) -> &BTreeMap<String, Id> {
        &self.exits
    }
    fn location_type(&self) -> &str {
        &self.room_type
    }
    fn furniture(&self) -> &[Furniture] {
        &self.furniture
    }
    fn ambient_events(&self) -> &[AmbientEvent] {
        &self.events
    }
    fn visited(&self) -> bool {
        self.visited
    }

    fn describe(&mut self, detailed: bool, vocab: &Vocabulary) -> String {
        let detailed = detailed || !self.visited;
        self.visited = true;

        let mut desc = self.description.clone();
        if detailed {
            push_listing(&mut desc, vocab.phrase(Phrase::YouCanSee), self.items.iter().map(|i| i.name.as_str()));
            push_listing(
                &mut desc,
                vocab.phrase(Phrase::RoomContains),
                self.furniture.iter().map(|f| f.name.as_str()),
            );
        }
        if self.exits.is_empty() {
            desc.push('\n');
            desc.push_str(vocab.phrase(Phrase::NoExits));
        } else {
            push_listing(&mut desc, vocab.phrase(Phrase::Exits), exit_labels(&self.exits, vocab).iter().map(String::as_str));
        }
        desc
    }
}

/// A liminal location between rooms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passage {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub passage_type: String,
    pub visited: bool,
    pub items: Vec<Item>,
    pub connections: BTreeMap<String, Id>,
    pub properties: BTreeMap<String, StateValue>,
}

impl Passage {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: "A nondescript passage.".to_string(),
            passage_type: "generic".to_string(),
            visited: false,
            items: Vec::new(),
            connections: BTreeMap::new(),
            properties: BTreeMap::new(),
        }
    }
}

impl WorldObject for Passage {
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

impl ItemHolder for Passage {
    fn items(&self) -> &[Item] {
        &self.items
    }
    fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }
    fn remove_items(&mut self, item_id: &str) -> usize {
        remove_all(&mut self.items, item_id)
    }
    fn take_item(&mut self, item_id: &str) -> Option<Item> {
        take_first(&mut self.items, item_id)
    }
}

impl Place for Passage {
    fn exits(&self) -> &BTreeMap<String, Id> {
        &self.connections
    }
    fn location_type(&self) -> &str {
        &self.passage_type
    }
    fn visited(&self) -> bool {
        self.visited
    }

    fn describe(&mut self, detailed: bool, vocab: &Vocabulary) -> String {
        let detailed = detailed || !self.visited;
        self.visited = true;

        let mut desc = self.description.clone();
        if detailed {
            push_listing(&mut desc, vocab.phrase(Phrase::YouCanSee), self.items.iter().map(|i| i.name.as_str()));
        }
        if self.connections.is_empty() {
            desc.push('\n');
            desc.push_str(vocab.phrase(Phrase::PassageLeadsNowhere));
        } else {
            push_listing(
                &mut desc,
                vocab.phrase(Phrase::PassageLeadsTo),
                exit_labels(&self.connections, vocab).iter().map(String::as_str),
            );
        }
        desc
    }
}

/// Appends `"\n<label>a, b, c"` unless `names` is empty.
fn push_listing<'a>(desc: &mut String, label: &str, names: impl Iterator<Item = &'a str>) {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        return;
    }
    desc.push('\n');
    desc.push_str(label);
    desc.push_str(&names.join(", "));
}

/// Exit labels in compass order, followed by any non-compass keys alphabetically.
fn exit_labels(exits: &BTreeMap<String, Id>, vocab: &Vocabulary) -> Vec<String> {
    let mut labels: Vec<String> = Direction::ALL
        .iter()
        .filter(|dir| exits.contains_key(dir.key()))
        .map(|dir| vocab.direction_word(*dir).to_string())
        .collect();
    labels.extend(
        exits
            .keys()
            .filter(|key| Direction::from_key(key).is_none())
            .map(|key| vocab.exit_label(key)),
    );
    labels
}
