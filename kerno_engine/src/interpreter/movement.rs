//! Movement between locations.

use log::info;

use crate::interpreter::{ActionData, ActionResult, ActionType};
use crate::player::Player;
use crate::vocab::{Direction, Vocabulary};
use crate::world::KernoWorld;

/// Move the player through the exit registered for `direction`.
///
/// The new location is not described here; the next turn does that.
pub fn move_handler(world: &KernoWorld, player: &mut Player, vocab: &Vocabulary, direction: Direction) -> ActionResult {
    travel(world, player, direction.key(), vocab.direction_word(direction))
}

/// Move through a non-compass exit (`"portal"`, `"ladder"`) typed as a bare word.
///
/// Exit keys match case-insensitively. Returns `None` when the current
/// location has no such exit, so the input can be treated as unknown.
pub fn named_exit_handler(world: &KernoWorld, player: &mut Player, input: &str) -> Option<ActionResult> {
    let key = world
        .place(&player.location)?
        .exits()
        .keys()
        .find(|key| key.to_lowercase() == input)?
        .clone();
    Some(travel(world, player, &key, &key))
}

fn travel(world: &KernoWorld, player: &mut Player, key: &str, label: &str) -> ActionResult {
    let Some(destination) = world.get_destination(&player.location, key).cloned() else {
        let here = world.place(&player.location).map_or(player.location.as_str(), |place| place.name());
        return ActionResult::failure(ActionType::Move, format!("You can't go {label} from {here}."));
    };

    info!("player moving '{}' -> '{destination}' ({label})", player.location);
    player.location.clone_from(&destination);
    player.record_move(key);
    ActionResult::success(ActionType::Move, format!("You move {label}.")).with_data(ActionData::Destination(destination))
}
