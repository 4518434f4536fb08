//! Take, drop and inventory handlers.
//!
//! Items move as owned values: taking removes one item from the location and
//! hands that same value to the player, dropping does the reverse.

use log::info;

use crate::entity_search::{SearchScope, find_item_match};
use crate::interpreter::{ActionData, ActionResult, ActionType};
use crate::player::Player;
use crate::world::KernoWorld;

/// Pick up an item lying in the current location.
pub fn take_handler(world: &mut KernoWorld, player: &mut Player, target: Option<&str>) -> ActionResult {
    let Some(target) = target else {
        return ActionResult::failure(ActionType::Take, "What would you like to take?");
    };
    let not_here = || {
        ActionResult::failure(
            ActionType::Take,
            format!("You don't see any {target} here that you can take."),
        )
    };

    let (item_id, item_name, takeable) = match find_item_match(world, player, target, SearchScope::LocationItems) {
        Ok(item) => (item.id.clone(), item.name.clone(), item.takeable),
        Err(_) => return not_here(),
    };
    if !takeable {
        return ActionResult::failure(ActionType::Take, format!("You can't take the {item_name}."));
    }
    let Some(item) = world.take_item_from_location(&player.location, &item_id) else {
        return not_here();
    };

    info!("player took '{}' from '{}'", item.id, player.location);
    player.add_item(item.clone());
    ActionResult::success(ActionType::Take, format!("You take the {item_name}.")).with_data(ActionData::Item(item))
}

/// Put a carried item down in the current location.
pub fn drop_handler(world: &mut KernoWorld, player: &mut Player, target: Option<&str>) -> ActionResult {
    let Some(target) = target else {
        return ActionResult::failure(ActionType::Drop, "What would you like to drop?");
    };
    let not_carried = || ActionResult::failure(ActionType::Drop, format!("You don't have any {target} to drop."));

    let item_id = match find_item_match(world, player, target, SearchScope::Inventory) {
        Ok(item) => item.id.clone(),
        Err(_) => return not_carried(),
    };
    if world.place(&player.location).is_none() {
        return ActionResult::failure(ActionType::Drop, "There is nowhere to put it down here.");
    }
    let Some(item) = player.remove_item(&item_id) else {
        return not_carried();
    };

    info!("player dropped '{}' in '{}'", item.id, player.location);
    let message = format!("You drop the {}.", item.name);
    world.add_item_to_room(&player.location, item.clone());
    ActionResult::success(ActionType::Drop, message).with_data(ActionData::Item(item))
}

/// List what the player is carrying.
pub fn inventory_handler(player: &Player) -> ActionResult {
    if player.inventory.is_empty() {
        return ActionResult::success(ActionType::Inventory, "Your inventory is empty.");
    }
    let mut listing = String::from("Inventory:");
    for item in &player.inventory {
        listing.push_str("\n- ");
        listing.push_str(&item.name);
        if let Some(weight) = item.weight {
            listing.push_str(&format!(" ({weight} kg)"));
        }
    }
    ActionResult::success(ActionType::Inventory, listing).with_data(ActionData::Items(player.inventory.clone()))
}
