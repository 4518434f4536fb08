//! Use and interact handlers.

use log::info;

use crate::entity_search::{Found, SearchScope, find_entity_match, find_item_match};
use crate::interpreter::{ActionData, ActionResult, ActionType};
use crate::item::ItemKind;
use crate::player::Player;
use crate::world::KernoWorld;

/// Use a carried item. What happens depends on the item's kind:
/// food and drink restore hunger and thirst, tools look for a use-effect keyed
/// to the current location's type, anything else just reports its message.
pub fn use_handler(world: &mut KernoWorld, player: &mut Player, target: Option<&str>) -> ActionResult {
    let Some(target) = target else {
        return ActionResult::failure(ActionType::Use, "What would you like to use?");
    };
    let item = match find_item_match(world, player, target, SearchScope::Inventory) {
        Ok(item) => item.clone(),
        Err(_) => return ActionResult::failure(ActionType::Use, format!("You don't have any {target} to use.")),
    };
    if !item.usable {
        return ActionResult::failure(ActionType::Use, format!("You can't use the {} like that.", item.name));
    }

    let result = match &item.kind {
        ItemKind::Food { nutrition } => {
            player.consume_food(*nutrition);
            ActionResult::success(
                ActionType::Use,
                format!("You eat the {}. It satisfies your hunger.", item.name),
            )
            .with_data(ActionData::Nutrition(*nutrition))
        },
        ItemKind::Drink { hydration } => {
            player.consume_drink(*hydration);
            ActionResult::success(
                ActionType::Use,
                format!("You drink the {}. It quenches your thirst.", item.name),
            )
            .with_data(ActionData::Hydration(*hydration))
        },
        ItemKind::Tool { .. } => {
            let location_type = world
                .place(&player.location)
                .map(|place| place.location_type().to_string())
                .unwrap_or_default();
            let Some(use_effect) = item.use_effect_for(&location_type).cloned() else {
                return ActionResult::failure(
                    ActionType::Use,
                    format!("You can't find a way to use the {} here.", item.name),
                );
            };
            info!("tool '{}' used in a '{location_type}' location", item.id);
            world.apply_effects(&use_effect.effects, player);
            let message = use_effect
                .message
                .clone()
                .unwrap_or_else(|| format!("You use the {}.", item.name));
            ActionResult::success(ActionType::Use, message).with_data(ActionData::ToolEffect(use_effect))
        },
        ItemKind::Generic { use_message } => {
            let message = use_message.clone().unwrap_or_else(|| format!("You use the {}.", item.name));
            ActionResult::success(ActionType::Use, message).with_data(ActionData::Item(item.clone()))
        },
    };

    player.use_item(&item.id);
    result
}

/// Interact with a piece of furniture in the current room.
pub fn interact_handler(world: &mut KernoWorld, player: &mut Player, target: Option<&str>) -> ActionResult {
    let Some(target) = target else {
        return ActionResult::failure(ActionType::Interact, "What would you like to interact with?");
    };
    let furniture = match find_entity_match(world, player, target, SearchScope::Furniture) {
        Ok(Found::Furniture(furniture)) => furniture.clone(),
        _ => {
            return ActionResult::failure(
                ActionType::Interact,
                format!("You don't see any {target} here that you can interact with."),
            );
        },
    };

    player.interact();
    let Some(interaction) = &furniture.interaction else {
        return ActionResult::success(
            ActionType::Interact,
            format!("You interact with the {} but nothing happens.", furniture.name),
        );
    };

    info!("interaction with '{}' ({} effect(s))", furniture.id, interaction.effects.len());
    world.apply_effects(&interaction.effects, player);
    let message = interaction
        .message
        .clone()
        .unwrap_or_else(|| format!("You interact with the {}.", furniture.name));
    ActionResult::success(ActionType::Interact, message).with_data(ActionData::Furniture(furniture.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerno_data::StateValue;

    use crate::effect::Effect;
    use crate::item::{Furniture, Interaction, Item, UseEffect};
    use crate::room::Room;

    fn setup() -> (KernoWorld, Player) {
        let mut world = KernoWorld::new_empty();
        let mut room = Room::new("vault", "Vault");
        room.room_type = "dark".into();
        room.furniture.push(Furniture {
            id: "lever".into(),
            name: "Iron Lever".into(),
            description: String::new(),
            interaction: Some(Interaction {
                message: Some("Somewhere, a door grinds open.".into()),
                effects: vec![Effect::SetGlobal {
                    key: "door_open".into(),
                    value: StateValue::Bool(true),
                }],
            }),
        });
        room.furniture.push(Furniture {
            id: "crate".into(),
            name: "Crate".into(),
            description: String::new(),
            interaction: None,
        });
        world.rooms.insert("vault".into(), room);
        (world, Player::new("vault"))
    }

    fn food(consumable: bool) -> Item {
        Item {
            usable: true,
            consumable,
            kind: ItemKind::Food { nutrition: 15.0 },
            ..Item::new("bread", "Bread")
        }
    }

    #[test]
    fn food_reduces_hunger_and_respects_consumable() {
        let (mut world, mut player) = setup();
        player.hunger = 40.0;
        player.add_item(food(false));
        let result = use_handler(&mut world, &mut player, Some("bread"));
        assert!(result.success);
        assert_eq!(result.message, "You eat the Bread. It satisfies your hunger.");
        assert!((player.hunger - 25.0).abs() < f32::EPSILON);
        assert!(player.has_item("bread"));

        player.remove_item("bread");
        player.add_item(food(true));
        player.hunger = 10.0;
        use_handler(&mut world, &mut player, Some("bread"));
        assert!(player.hunger.abs() < f32::EPSILON);
        assert!(!player.has_item("bread"));
    }

    #[test]
    fn drink_reduces_thirst() {
        let (mut world, mut player) = setup();
        player.thirst = 30.0;
        player.add_item(Item {
            usable: true,
            kind: ItemKind::Drink { hydration: 10.0 },
            ..Item::new("water", "Water Bottle")
        });
        let result = use_handler(&mut world, &mut player, Some("water"));
        assert_eq!(result.data, Some(ActionData::Hydration(10.0)));
        assert!((player.thirst - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tools_only_work_where_they_apply() {
        let (mut world, mut player) = setup();
        player.add_item(Item {
            usable: true,
            kind: ItemKind::Tool {
                use_effects: vec![UseEffect {
                    room_type: Some("dark".into()),
                    message: Some("The lamp throws long shadows.".into()),
                    effects: vec![Effect::SetGlobal {
                        key: "lit".into(),
                        value: StateValue::Bool(true),
                    }],
                }],
            },
            ..Item::new("lamp", "Lamp")
        });

        let result = use_handler(&mut world, &mut player, Some("lamp"));
        assert!(result.success);
        assert_eq!(result.message, "The lamp throws long shadows.");
        assert_eq!(world.global("lit"), Some(&StateValue::Bool(true)));

        world.rooms.get_mut("vault").expect("vault").room_type = "generic".into();
        let result = use_handler(&mut world, &mut player, Some("lamp"));
        assert!(!result.success);
        assert_eq!(result.message, "You can't find a way to use the Lamp here.");
        assert_eq!(player.stats.items_used, 1);
    }

    #[test]
    fn generic_items_and_refusals() {
        let (mut world, mut player) = setup();
        player.add_item(Item::new("pebble", "Pebble"));
        player.add_item(Item {
            usable: true,
            kind: ItemKind::Generic {
                use_message: Some("The coin spins and lands on its edge.".into()),
            },
            ..Item::new("coin", "Coin")
        });

        assert_eq!(
            use_handler(&mut world, &mut player, Some("pebble")).message,
            "You can't use the Pebble like that."
        );
        assert_eq!(
            use_handler(&mut world, &mut player, Some("coin")).message,
            "The coin spins and lands on its edge."
        );
        assert_eq!(
            use_handler(&mut world, &mut player, Some("ghost")).message,
            "You don't have any ghost to use."
        );
        assert_eq!(use_handler(&mut world, &mut player, None).message, "What would you like to use?");
    }

    #[test]
    fn interacting_applies_furniture_effects() {
        let (mut world, mut player) = setup();
        let result = interact_handler(&mut world, &mut player, Some("lever"));
        assert!(result.success);
        assert_eq!(result.message, "Somewhere, a door grinds open.");
        assert_eq!(world.global("door_open"), Some(&StateValue::Bool(true)));

        let result = interact_handler(&mut world, &mut player, Some("crate"));
        assert!(result.success);
        assert_eq!(result.message, "You interact with the Crate but nothing happens.");
        assert_eq!(player.stats.interactions, 2);
    }

    #[test]
    fn interacting_with_missing_furniture_fails() {
        let (mut world, mut player) = setup();
        let result = interact_handler(&mut world, &mut player, Some("throne"));
        assert!(!result.success);
        assert_eq!(result.message, "You don't see any throne here that you can interact with.");
        assert_eq!(player.stats.interactions, 0);
    }
}
