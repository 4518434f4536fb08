//! Vitals Module
//!
//! Bucketed descriptions of the player's four vitals. Raw values live on
//! [`Player`](crate::Player) as floats in `[0, 100]`; these tiers are what the
//! player actually gets to read.

use std::fmt;

use serde::Serialize;

use crate::vocab::Language;

/// Condition of the player's body, from unhurt down to near death.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    Healthy,
    SlightlyInjured,
    Injured,
    SeriouslyInjured,
    CriticallyInjured,
    NearDeath,
}

impl HealthTier {
    pub fn from_value(health: f32) -> Self {
        if health > 90.0 {
            HealthTier::Healthy
        } else if health > 70.0 {
            HealthTier::SlightlyInjured
        } else if health > 50.0 {
            HealthTier::Injured
        } else if health > 30.0 {
            HealthTier::SeriouslyInjured
        } else if health > 10.0 {
            HealthTier::CriticallyInjured
        } else {
            HealthTier::NearDeath
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, HealthTier::Healthy) => "Healthy",
            (Language::English, HealthTier::SlightlyInjured) => "Slightly injured",
            (Language::English, HealthTier::Injured) => "Injured",
            (Language::English, HealthTier::SeriouslyInjured) => "Seriously injured",
            (Language::English, HealthTier::CriticallyInjured) => "Critically injured",
            (Language::English, HealthTier::NearDeath) => "Near death",
            (Language::Ido, HealthTier::Healthy) => "Sanoza",
            (Language::Ido, HealthTier::SlightlyInjured) => "Kelke vundita",
            (Language::Ido, HealthTier::Injured) => "Vundita",
            (Language::Ido, HealthTier::SeriouslyInjured) => "Serioze vundita",
            (Language::Ido, HealthTier::CriticallyInjured) => "Kritike vundita",
            (Language::Ido, HealthTier::NearDeath) => "Proxim morto",
        }
    }
}

/// Hunger rises from 0 (sated) to 100 (starving).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HungerTier {
    Satiated,
    SlightlyHungry,
    Hungry,
    VeryHungry,
    Starving,
}

impl HungerTier {
    pub fn from_value(hunger: f32) -> Self {
        if hunger < 20.0 {
            HungerTier::Satiated
        } else if hunger < 40.0 {
            HungerTier::SlightlyHungry
        } else if hunger < 60.0 {
            HungerTier::Hungry
        } else if hunger < 80.0 {
            HungerTier::VeryHungry
        } else {
            HungerTier::Starving
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, HungerTier::Satiated) => "Satiated",
            (Language::English, HungerTier::SlightlyHungry) => "Slightly hungry",
            (Language::English, HungerTier::Hungry) => "Hungry",
            (Language::English, HungerTier::VeryHungry) => "Very hungry",
            (Language::English, HungerTier::Starving) => "Starving",
            (Language::Ido, HungerTier::Satiated) => "Satita",
            (Language::Ido, HungerTier::SlightlyHungry) => "Iomete hungrega",
            (Language::Ido, HungerTier::Hungry) => "Hungrega",
            (Language::Ido, HungerTier::VeryHungry) => "Tre hungrega",
            (Language::Ido, HungerTier::Starving) => "Afamanta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirstTier {
    Hydrated,
    SlightlyThirsty,
    Thirsty,
    VeryThirsty,
    Dehydrated,
}

impl ThirstTier {
    pub fn from_value(thirst: f32) -> Self {
        if thirst < 20.0 {
            ThirstTier::Hydrated
        } else if thirst < 40.0 {
            ThirstTier::SlightlyThirsty
        } else if thirst < 60.0 {
            ThirstTier::Thirsty
        } else if thirst < 80.0 {
            ThirstTier::VeryThirsty
        } else {
            ThirstTier::Dehydrated
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, ThirstTier::Hydrated) => "Hydrated",
            (Language::English, ThirstTier::SlightlyThirsty) => "Slightly thirsty",
            (Language::English, ThirstTier::Thirsty) => "Thirsty",
            (Language::English, ThirstTier::VeryThirsty) => "Very thirsty",
            (Language::English, ThirstTier::Dehydrated) => "Dehydrated",
            (Language::Ido, ThirstTier::Hydrated) => "Hidratizita",
            (Language::Ido, ThirstTier::SlightlyThirsty) => "Kelke soifanta",
            (Language::Ido, ThirstTier::Thirsty) => "Soifanta",
            (Language::Ido, ThirstTier::VeryThirsty) => "Tre soifanta",
            (Language::Ido, ThirstTier::Dehydrated) => "Dehidratizita",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyTier {
    Energetic,
    Alert,
    Tired,
    VeryTired,
    Exhausted,
}

impl EnergyTier {
    pub fn from_value(energy: f32) -> Self {
        if energy > 80.0 {
            EnergyTier::Energetic
        } else if energy > 60.0 {
            EnergyTier::Alert
        } else if energy > 40.0 {
            EnergyTier::Tired
        } else if energy > 20.0 {
            EnergyTier::VeryTired
        } else {
            EnergyTier::Exhausted
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, EnergyTier::Energetic) => "Energetic",
            (Language::English, EnergyTier::Alert) => "Alert",
            (Language::English, EnergyTier::Tired) => "Tired",
            (Language::English, EnergyTier::VeryTired) => "Very tired",
            (Language::English, EnergyTier::Exhausted) => "Exhausted",
            (Language::Ido, EnergyTier::Energetic) => "Energioza",
            (Language::Ido, EnergyTier::Alert) => "Vigla",
            (Language::Ido, EnergyTier::Tired) => "Fatigita",
            (Language::Ido, EnergyTier::VeryTired) => "Tre fatigita",
            (Language::Ido, EnergyTier::Exhausted) => "Exhaustita",
        }
    }
}

/// Tiered snapshot of the player's condition, as shown by the `status` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub health: String,
    pub hunger: String,
    pub thirst: String,
    pub energy: String,
    /// Names of active status effects.
    pub effects: Vec<String>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Health: {}", self.health)?;
        writeln!(f, "Hunger: {}", self.hunger)?;
        writeln!(f, "Thirst: {}", self.thirst)?;
        writeln!(f, "Energy: {}", self.energy)?;
        if !self.effects.is_empty() {
            write!(f, "Status effects: {}", self.effects.join(", "))?;
        }
        Ok(())
    }
}
