//! Player -- the actor the person at the keyboard controls.
//!
//! Everything here is a plain mutator over owned state. Vitals are clamped to
//! `[0, 100]` on every write; nothing else is validated.

use std::collections::BTreeMap;

use kerno_data::StateValue;
use log::info;
use serde::Serialize;

use crate::Id;
use crate::item::{Item, take_first};
use crate::vitals::{EnergyTier, HealthTier, HungerTier, StatusReport, ThirstTier};
use crate::vocab::Language;
use crate::world::WorldObject;

const VITAL_MAX: f32 = 100.0;

fn clamp_vital(value: f32) -> f32 {
    value.clamp(0.0, VITAL_MAX)
}

/// A temporary (or until-removed) condition on the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEffect {
    pub id: Id,
    pub name: String,
    pub description: String,
    /// Turns left before it wears off; `None` lasts until explicitly removed.
    pub turns_remaining: Option<u32>,
}

/// Lifetime counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerStats {
    pub moves: u32,
    pub items_taken: u32,
    pub items_used: u32,
    pub interactions: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub name: String,
    pub profession: String,
    /// Id of the room or passage the player is standing in.
    pub location: Id,
    pub inventory: Vec<Item>,
    pub health: f32,
    /// 0 is sated, 100 is starving.
    pub hunger: f32,
    /// 0 is hydrated, 100 is parched.
    pub thirst: f32,
    /// 100 is fresh, 0 is exhausted.
    pub energy: f32,
    pub knowledge: BTreeMap<String, StateValue>,
    pub scars: Vec<String>,
    pub status_effects: Vec<StatusEffect>,
    pub stats: PlayerStats,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: "Technician".to_string(),
            profession: "technician".to_string(),
            location: Id::new(),
            inventory: Vec::new(),
            health: VITAL_MAX,
            hunger: 0.0,
            thirst: 0.0,
            energy: VITAL_MAX,
            knowledge: BTreeMap::new(),
            scars: Vec::new(),
            status_effects: Vec::new(),
            stats: PlayerStats::default(),
        }
    }
}

impl WorldObject for Player {
    fn id(&self) -> &str {
        "player"
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.profession
    }
}

impl Player {
    /// A fresh player standing at `location`.
    pub fn new(location: impl Into<Id>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    /// Put an item in the inventory. Counts toward `items_taken` however it arrived.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
        self.stats.items_taken += 1;
    }

    /// Remove the first inventory item with `item_id`.
    pub fn remove_item(&mut self, item_id: &str) -> Option<Item> {
        take_first(&mut self.inventory, item_id)
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|item| item.id == item_id)
    }

    /// Record a use of the first inventory item with `item_id`, removing it if
    /// it is consumable. Returns `false` if no such item is carried.
    pub fn use_item(&mut self, item_id: &str) -> bool {
        let Some(idx) = self.inventory.iter().position(|item| item.id == item_id) else {
            return false;
        };
        self.stats.items_used += 1;
        if self.inventory[idx].consumable {
            let used = self.inventory.remove(idx);
            info!("{} consumed", used.id);
        }
        true
    }

    /// Record a move through the exit keyed `exit`: costs a point of energy
    /// and nudges hunger and thirst up.
    pub fn record_move(&mut self, exit: &str) {
        self.stats.moves += 1;
        self.energy = clamp_vital(self.energy - 1.0);
        self.hunger = clamp_vital(self.hunger + 0.5);
        self.thirst = clamp_vital(self.thirst + 0.8);
        info!("player moved {exit} (move #{})", self.stats.moves);
    }

    pub fn interact(&mut self) {
        self.stats.interactions += 1;
    }

    pub fn learn(&mut self, key: impl Into<String>, value: StateValue) {
        self.knowledge.insert(key.into(), value);
    }

    pub fn knows(&self, key: &str) -> bool {
        self.knowledge.contains_key(key)
    }

    pub fn knowledge_of(&self, key: &str) -> Option<&StateValue> {
        self.knowledge.get(key)
    }

    pub fn add_scar(&mut self, description: impl Into<String>) {
        self.scars.push(description.into());
    }

    /// Add a status effect, replacing (and so refreshing) one with the same id.
    pub fn add_status_effect(&mut self, effect: StatusEffect) {
        self.status_effects.retain(|existing| existing.id != effect.id);
        info!("status effect '{}' applied", effect.id);
        self.status_effects.push(effect);
    }

    /// Returns `true` if anything was removed.
    pub fn remove_status_effect(&mut self, effect_id: &str) -> bool {
        let before = self.status_effects.len();
        self.status_effects.retain(|effect| effect.id != effect_id);
        before != self.status_effects.len()
    }

    pub fn has_status_effect(&self, effect_id: &str) -> bool {
        self.status_effects.iter().any(|effect| effect.id == effect_id)
    }

    /// Count down timed status effects and return the ones that just ran out.
    pub fn tick_status_effects(&mut self) -> Vec<StatusEffect> {
        let mut expired = Vec::new();
        let mut live = Vec::with_capacity(self.status_effects.len());
        for mut effect in self.status_effects.drain(..) {
            match effect.turns_remaining {
                Some(turns) if turns <= 1 => expired.push(effect),
                Some(turns) => {
                    effect.turns_remaining = Some(turns - 1);
                    live.push(effect);
                },
                None => live.push(effect),
            }
        }
        self.status_effects = live;
        expired
    }

    pub fn consume_food(&mut self, nutrition: f32) {
        self.hunger = clamp_vital(self.hunger - nutrition);
    }

    pub fn consume_drink(&mut self, hydration: f32) {
        self.thirst = clamp_vital(self.thirst - hydration);
    }

    pub fn rest(&mut self, recovery: f32) {
        self.energy = clamp_vital(self.energy + recovery);
    }

    /// Reduce health. Returns `true` when health has hit zero.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health = clamp_vital(self.health - amount);
        info!("player took {amount} damage (health now {})", self.health);
        self.health <= 0.0
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = clamp_vital(self.health + amount);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Tiered description of the current vitals.
    pub fn status(&self, language: Language) -> StatusReport {
        StatusReport {
            health: HealthTier::from_value(self.health).label(language).to_string(),
            hunger: HungerTier::from_value(self.hunger).label(language).to_string(),
            thirst: ThirstTier::from_value(self.thirst).label(language).to_string(),
            energy: EnergyTier::from_value(self.energy).label(language).to_string(),
            effects: self.status_effects.iter().map(|effect| effect.name.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snack(consumable: bool) -> Item {
        Item {
            consumable,
            ..Item::new("bar", "Ration Bar")
        }
    }

    fn chill(turns: Option<u32>) -> StatusEffect {
        StatusEffect {
            id: "chill".into(),
            name: "Chilled".into(),
            description: "Your fingers are numb.".into(),
            turns_remaining: turns,
        }
    }

    #[test]
    fn vitals_are_clamped() {
        let mut player = Player::new("start");
        player.take_damage(30.0);
        player.heal(1000.0);
        assert!((player.health - 100.0).abs() < f32::EPSILON);
        assert!(player.take_damage(1000.0));
        assert!(player.health.abs() < f32::EPSILON);
        assert!(!player.is_alive());

        player.consume_food(50.0);
        player.consume_drink(50.0);
        assert!(player.hunger.abs() < f32::EPSILON);
        assert!(player.thirst.abs() < f32::EPSILON);
        player.rest(500.0);
        assert!((player.energy - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn moves_drain_resources() {
        let mut player = Player::new("start");
        for _ in 0..10 {
            player.record_move("north");
        }
        assert_eq!(player.stats.moves, 10);
        assert!((player.energy - 90.0).abs() < 1e-4);
        assert!((player.hunger - 5.0).abs() < 1e-4);
        assert!((player.thirst - 8.0).abs() < 1e-4);
    }

    #[test]
    fn long_walks_saturate() {
        let mut player = Player::new("start");
        for _ in 0..150 {
            player.record_move("up");
        }
        assert!(player.energy.abs() < f32::EPSILON);
        assert!(player.hunger <= 100.0);
        assert!((player.thirst - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn use_item_removes_only_consumables() {
        let mut player = Player::new("start");
        player.add_item(snack(false));
        assert!(player.use_item("bar"));
        assert!(player.has_item("bar"));

        player.remove_item("bar");
        player.add_item(snack(true));
        assert!(player.use_item("bar"));
        assert!(!player.has_item("bar"));
        assert!(!player.use_item("bar"));
        assert_eq!(player.stats.items_used, 2);
        assert_eq!(player.stats.items_taken, 2);
    }

    #[test]
    fn timed_status_effects_expire() {
        let mut player = Player::new("start");
        player.add_status_effect(chill(Some(2)));
        assert!(player.tick_status_effects().is_empty());
        let expired = player.tick_status_effects();
        assert_eq!(expired.len(), 1);
        assert!(!player.has_status_effect("chill"));
    }

    #[test]
    fn untimed_status_effects_persist_until_removed() {
        let mut player = Player::new("start");
        player.add_status_effect(chill(None));
        for _ in 0..5 {
            assert!(player.tick_status_effects().is_empty());
        }
        assert!(player.remove_status_effect("chill"));
        assert!(!player.remove_status_effect("chill"));
    }

    #[test]
    fn status_report_reflects_vitals() {
        let mut player = Player::new("start");
        player.take_damage(45.0);
        player.hunger = 85.0;
        player.add_status_effect(chill(None));
        let report = player.status(Language::English);
        assert_eq!(report.health, "Injured");
        assert_eq!(report.hunger, "Starving");
        assert_eq!(report.effects, vec!["Chilled".to_string()]);
        assert_eq!(player.status(Language::Ido).health, "Vundita");
    }

    #[test]
    fn knowledge_and_scars() {
        let mut player = Player::new("start");
        player.learn("door_code", StateValue::Int(4711));
        assert!(player.knows("door_code"));
        assert_eq!(player.knowledge_of("door_code"), Some(&StateValue::Int(4711)));
        player.add_scar("A burn across the left palm.");
        assert_eq!(player.scars.len(), 1);
    }
}
