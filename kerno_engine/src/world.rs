//! World store.
//!
//! [`KernoWorld`] owns every room, passage and catalog item, the global state
//! map, the turn counter and the pending global events. It is built once by the
//! loader and mutated turn by turn afterwards; nothing is ever written back to
//! the world file.

use std::collections::{BTreeMap, HashMap};

use kerno_data::StateValue;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::effect::{Effect, EffectTarget, ItemSource, PlayerEffect};
use crate::item::Item;
use crate::player::Player;
use crate::room::{AmbientEvent, Passage, Place, Room};
use crate::scheduler::{ScheduledEvent, Scheduler};
use crate::{Id, KERNO_VERSION};

/// Methods common to any named object in the world.
pub trait WorldObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

/// Complete state of the running world, minus the player.
#[derive(Debug, Clone)]
pub struct KernoWorld {
    pub rooms: HashMap<Id, Room>,
    pub passages: HashMap<Id, Passage>,
    /// Catalog of items that effects can spawn by id.
    pub items: HashMap<Id, Item>,
    pub starting_room: Id,
    pub global_state: BTreeMap<String, StateValue>,
    pub turn_count: usize,
    pub scheduler: Scheduler,
    pub version: String,
    rng: StdRng,
}

impl KernoWorld {
    /// Create a new empty world with an entropy-seeded random source.
    pub fn new_empty() -> KernoWorld {
        let world = Self {
            rooms: HashMap::new(),
            passages: HashMap::new(),
            items: HashMap::new(),
            starting_room: Id::new(),
            global_state: BTreeMap::new(),
            turn_count: 0,
            scheduler: Scheduler::default(),
            version: KERNO_VERSION.to_string(),
            rng: StdRng::from_os_rng(),
        };
        info!("new, empty 'KernoWorld' created");
        world
    }

    /// Replace the random source with a deterministic one.
    pub fn reseed(&mut self, seed: u64) {
        info!("world random source seeded with {seed}");
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Builder-style [`KernoWorld::reseed`].
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// Room or passage with the given id.
    pub fn place(&self, id: &str) -> Option<&dyn Place> {
        match self.rooms.get(id) {
            Some(room) => Some(room),
            None => self.passages.get(id).map(|passage| passage as &dyn Place),
        }
    }

    pub fn place_mut(&mut self, id: &str) -> Option<&mut dyn Place> {
        match self.rooms.get_mut(id) {
            Some(room) => Some(room),
            None => self.passages.get_mut(id).map(|passage| passage as &mut dyn Place),
        }
    }

    /// True iff the location exists and has an exit registered for `direction`.
    /// The destination itself is not checked here.
    pub fn can_move(&self, location_id: &str, direction: &str) -> bool {
        self.place(location_id)
            .is_some_and(|place| place.exits().contains_key(direction))
    }

    pub fn get_destination(&self, location_id: &str, direction: &str) -> Option<&Id> {
        self.place(location_id)?.exits().get(direction)
    }

    /// Append an item to a location. Unknown locations are a no-op.
    pub fn add_item_to_room(&mut self, location_id: &str, item: Item) {
        match self.place_mut(location_id) {
            Some(place) => {
                info!("'{}' placed in '{location_id}'", item.id);
                place.add_item(item);
            },
            None => debug!("add_item_to_room: no location '{location_id}', '{}' discarded", item.id),
        }
    }

    /// Remove every item with `item_id` from a location, returning how many went.
    pub fn remove_item_from_room(&mut self, location_id: &str, item_id: &str) -> usize {
        self.place_mut(location_id)
            .map_or(0, |place| place.remove_items(item_id))
    }

    /// Move a single item out of a location (the `take` half of a transfer).
    pub fn take_item_from_location(&mut self, location_id: &str, item_id: &str) -> Option<Item> {
        self.place_mut(location_id)?.take_item(item_id)
    }

    /// Advance the world by one turn and return the messages to show, in order.
    ///
    /// Ambient events of the player's current room are rolled first, then the
    /// global countdown events, then timed status effects on the player.
    pub fn process_events(&mut self, player: &mut Player) -> Vec<String> {
        self.turn_count += 1;
        let mut messages = Vec::new();

        let fired: Vec<AmbientEvent> = match self.rooms.get(&player.location) {
            Some(room) => {
                let rng = &mut self.rng;
                room.events
                    .iter()
                    .filter(|event| event.probability.is_some_and(|p| rng.random::<f64>() < p))
                    .cloned()
                    .collect()
            },
            None => Vec::new(),
        };
        for event in fired {
            info!("turn {}: ambient event in '{}': \"{}\"", self.turn_count, player.location, event.message);
            messages.push(event.message);
            self.apply_effects(&event.effects, player);
        }

        for event in self.scheduler.tick() {
            let ScheduledEvent { message, effects, .. } = event;
            messages.push(message);
            self.apply_effects(&effects, player);
        }

        for status in player.tick_status_effects() {
            info!("status effect '{}' expired", status.id);
            messages.push(format!("{} wears off.", status.name));
        }

        messages
    }

    /// Carry out effects in order.
    pub fn apply_effects(&mut self, effects: &[Effect], player: &mut Player) {
        for effect in effects {
            debug!("applying {effect}");
            match effect {
                Effect::AddItem { target, item } => {
                    let item = match item {
                        ItemSource::Inline(item) => (**item).clone(),
                        ItemSource::Catalog(id) => {
                            let Some(item) = self.items.get(id) else {
                                debug!("add_item: '{id}' is not in the item catalog, ignored");
                                continue;
                            };
                            item.clone()
                        },
                    };
                    match target {
                        EffectTarget::Player => player.add_item(item),
                        EffectTarget::Room(room_id) => {
                            let room_id = room_id.as_deref().unwrap_or(&player.location).to_string();
                            self.add_item_to_room(&room_id, item);
                        },
                    }
                },
                Effect::RemoveItem { target, item_id } => match target {
                    EffectTarget::Player => {
                        player.remove_item(item_id);
                    },
                    EffectTarget::Room(room_id) => {
                        let room_id = room_id.as_deref().unwrap_or(&player.location).to_string();
                        self.remove_item_from_room(&room_id, item_id);
                    },
                },
                Effect::SetGlobal { key, value } => {
                    self.global_state.insert(key.clone(), value.clone());
                },
                Effect::ScheduleEvent { turns, message, effects } => {
                    self.scheduler.schedule_in(*turns, message.clone(), effects.clone());
                },
                Effect::Player { effect, amount } => match effect {
                    PlayerEffect::Rest => player.rest(*amount),
                    PlayerEffect::Heal => player.heal(*amount),
                    PlayerEffect::Damage => {
                        player.take_damage(*amount);
                    },
                    PlayerEffect::Feed => player.consume_food(*amount),
                    PlayerEffect::Hydrate => player.consume_drink(*amount),
                },
                Effect::AddStatus(status) => player.add_status_effect(status.clone()),
                Effect::RemoveStatus(id) => {
                    player.remove_status_effect(id);
                },
                Effect::Learn { key, value } => player.learn(key.clone(), value.clone()),
                Effect::AddScar(description) => player.add_scar(description.clone()),
            }
        }
    }

    /// Read a global flag.
    pub fn global(&self, key: &str) -> Option<&StateValue> {
        self.global_state.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::StatusEffect;

    fn two_room_world() -> KernoWorld {
        let mut world = KernoWorld::new_empty().with_seed(7);
        let mut start = Room::new("start", "Start");
        start.exits.insert("north".into(), "hall".into());
        start.exits.insert("down".into(), "shaft".into());
        start.items.push(Item::new("coin", "coin"));
        start.items.push(Item::new("coin", "coin"));
        world.rooms.insert("start".into(), start);
        world.rooms.insert("hall".into(), Room::new("hall", "Hall"));
        let mut shaft = Passage::new("shaft", "Shaft");
        shaft.connections.insert("up".into(), "start".into());
        world.passages.insert("shaft".into(), shaft);
        world.starting_room = "start".into();
        world
    }

    #[test]
    fn movement_lookups() {
        let world = two_room_world();
        assert!(world.can_move("start", "north"));
        assert!(!world.can_move("start", "south"));
        assert!(!world.can_move("attic", "north"));
        assert_eq!(world.get_destination("start", "north").map(String::as_str), Some("hall"));
        assert!(world.get_destination("start", "west").is_none());
        assert!(world.can_move("shaft", "up"));
    }

    #[test]
    fn remove_item_filters_every_match() {
        let mut world = two_room_world();
        assert_eq!(world.remove_item_from_room("start", "coin"), 2);
        assert_eq!(world.remove_item_from_room("start", "coin"), 0);
        assert_eq!(world.remove_item_from_room("attic", "coin"), 0);
    }

    #[test]
    fn remove_item_effect_takes_one_copy_from_player() {
        let mut world = two_room_world();
        let mut player = Player::new("start");
        player.add_item(Item::new("coin", "coin"));
        player.add_item(Item::new("coin", "coin"));

        let take_coin = Effect::RemoveItem {
            target: EffectTarget::Player,
            item_id: "coin".into(),
        };
        world.apply_effects(std::slice::from_ref(&take_coin), &mut player);
        assert_eq!(player.inventory.iter().filter(|item| item.id == "coin").count(), 1);
        world.apply_effects(&[take_coin.clone(), take_coin], &mut player);
        assert!(!player.has_item("coin"));
    }

    #[test]
    fn add_item_to_missing_room_is_noop() {
        let mut world = two_room_world();
        world.add_item_to_room("attic", Item::new("gem", "gem"));
        assert!(world.rooms.values().all(|room| room.items.iter().all(|i| i.id != "gem")));
    }

    #[test]
    fn take_item_moves_one_copy() {
        let mut world = two_room_world();
        let coin = world.take_item_from_location("start", "coin").expect("coin");
        assert_eq!(coin.id, "coin");
        assert_eq!(world.rooms["start"].items.len(), 1);
    }

    #[test]
    fn process_events_counts_turns_and_fires_certain_ambient_events() {
        let mut world = two_room_world();
        let room = world.rooms.get_mut("start").expect("start");
        room.events.push(AmbientEvent {
            probability: Some(1.0),
            message: "Water drips.".into(),
            effects: vec![Effect::SetGlobal {
                key: "wet".into(),
                value: StateValue::Bool(true),
            }],
        });
        room.events.push(AmbientEvent {
            probability: Some(0.0),
            message: "Never.".into(),
            effects: Vec::new(),
        });
        room.events.push(AmbientEvent {
            probability: None,
            message: "Also never.".into(),
            effects: Vec::new(),
        });

        let mut player = Player::new("start");
        let messages = world.process_events(&mut player);
        assert_eq!(messages, vec!["Water drips.".to_string()]);
        assert_eq!(world.turn_count, 1);
        assert_eq!(world.global("wet"), Some(&StateValue::Bool(true)));
    }

    #[test]
    fn scheduled_events_fire_after_countdown() {
        let mut world = two_room_world();
        let mut player = Player::new("start");
        world.scheduler.schedule_in(
            2,
            "The floor shakes.",
            vec![Effect::Player {
                effect: PlayerEffect::Damage,
                amount: 5.0,
            }],
        );
        assert!(world.process_events(&mut player).is_empty());
        assert_eq!(world.process_events(&mut player), vec!["The floor shakes.".to_string()]);
        assert!((player.health - 95.0).abs() < f32::EPSILON);
        assert!(world.scheduler.is_empty());
    }

    #[test]
    fn effects_route_items_to_player_and_rooms() {
        let mut world = two_room_world();
        world.items.insert("key".into(), Item::new("key", "brass key"));
        let mut player = Player::new("start");

        world.apply_effects(
            &[
                Effect::AddItem {
                    target: EffectTarget::Player,
                    item: ItemSource::Catalog("key".into()),
                },
                Effect::AddItem {
                    target: EffectTarget::Room(Some("hall".into())),
                    item: ItemSource::Inline(Box::new(Item::new("map", "map"))),
                },
                Effect::AddItem {
                    target: EffectTarget::Player,
                    item: ItemSource::Catalog("missing".into()),
                },
                Effect::RemoveItem {
                    target: EffectTarget::Room(None),
                    item_id: "coin".into(),
                },
            ],
            &mut player,
        );

        assert!(player.has_item("key"));
        assert_eq!(player.inventory.len(), 1);
        assert!(world.rooms["hall"].items.iter().any(|i| i.id == "map"));
        assert!(world.rooms["start"].items.is_empty());
    }

    #[test]
    fn effects_schedule_and_touch_the_player() {
        let mut world = two_room_world();
        let mut player = Player::new("start");
        player.energy = 50.0;

        world.apply_effects(
            &[
                Effect::ScheduleEvent {
                    turns: 1,
                    message: "Later.".into(),
                    effects: Vec::new(),
                },
                Effect::Player {
                    effect: PlayerEffect::Rest,
                    amount: 20.0,
                },
                Effect::AddStatus(StatusEffect {
                    id: "dazed".into(),
                    name: "Dazed".into(),
                    description: String::new(),
                    turns_remaining: Some(1),
                }),
                Effect::Learn {
                    key: "vent_code".into(),
                    value: StateValue::from("7-3-1"),
                },
                Effect::AddScar("A scraped knee.".into()),
                Effect::SetGlobal {
                    key: "alarm".into(),
                    value: StateValue::Null,
                },
            ],
            &mut player,
        );

        assert!((player.energy - 70.0).abs() < f32::EPSILON);
        assert!(player.knows("vent_code"));
        assert_eq!(player.scars.len(), 1);
        assert_eq!(world.global("alarm"), Some(&StateValue::Null));
        let messages = world.process_events(&mut player);
        assert_eq!(messages, vec!["Later.".to_string(), "Dazed wears off.".to_string()]);
    }

    #[test]
    fn seeded_worlds_roll_identically() {
        let build = || {
            let mut world = two_room_world().with_seed(42);
            world.rooms.get_mut("start").expect("start").events.push(AmbientEvent {
                probability: Some(0.5),
                message: "A coin flips.".into(),
                effects: Vec::new(),
            });
            world
        };
        let (mut a, mut b) = (build(), build());
        let (mut pa, mut pb) = (Player::new("start"), Player::new("start"));
        for _ in 0..20 {
            assert_eq!(a.process_events(&mut pa), b.process_events(&mut pb));
        }
    }
}
