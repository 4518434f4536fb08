//! Look and examine handlers.

use crate::entity_search::{Found, SearchScope, find_entity_match};
use crate::interpreter::{ActionData, ActionResult, ActionType};
use crate::player::Player;
use crate::vocab::Vocabulary;
use crate::world::KernoWorld;

/// Full description of the current location.
pub fn look_handler(world: &mut KernoWorld, player: &Player, vocab: &Vocabulary) -> ActionResult {
    match world.place_mut(&player.location) {
        Some(place) => ActionResult::success(ActionType::Look, place.describe(true, vocab)),
        None => ActionResult::failure(ActionType::Look, "You can't make out your surroundings."),
    }
}

/// Describe a carried item, an item in the room, or a piece of furniture (in that order).
pub fn examine_handler(world: &KernoWorld, player: &Player, target: Option<&str>) -> ActionResult {
    let Some(target) = target else {
        return ActionResult::failure(ActionType::Examine, "What would you like to examine?");
    };
    match find_entity_match(world, player, target, SearchScope::Examinable) {
        Ok(Found::Item(item)) => {
            ActionResult::success(ActionType::Examine, item.examine_text()).with_data(ActionData::Item(item.clone()))
        },
        Ok(Found::Furniture(furniture)) => ActionResult::success(ActionType::Examine, furniture.examine_text())
            .with_data(ActionData::Furniture(furniture.clone())),
        Err(_) => ActionResult::failure(ActionType::Examine, format!("You don't see any {target} here.")),
    }
}
