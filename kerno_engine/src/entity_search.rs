//! Entity Search Module
//!
//! Handlers that take a target from player input (`examine`, `take`, `drop`,
//! `use`, `interact`) all need to turn a fragment of text into a concrete item
//! or piece of furniture. Matching is a case-insensitive substring test against
//! names, and the first candidate in declaration order wins.
//!
//! Callers send the world, the player, the search text and a [`SearchScope`],
//! and get back either the matching entity or the reason there is none.

use thiserror::Error;
use variantly::Variantly;

use crate::item::{Furniture, Item};
use crate::player::Player;
use crate::world::{KernoWorld, WorldObject};
use crate::Id;

/// Which collections a search looks through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Only the player's inventory.
    Inventory,
    /// Only items lying in the current location.
    LocationItems,
    /// Only furniture in the current location.
    Furniture,
    /// Inventory, then location items, then furniture.
    Examinable,
}

/// A search hit.
#[derive(Debug, Clone, Copy, PartialEq, Variantly)]
pub enum Found<'a> {
    Item(&'a Item),
    Furniture(&'a Furniture),
}

impl Found<'_> {
    pub fn name(&self) -> &str {
        match self {
            Found::Item(item) => &item.name,
            Found::Furniture(furniture) => &furniture.name,
        }
    }
}

/// Possible reasons a search comes up empty.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("nothing in scope has a name matching '{0}'")]
    NoMatchingName(String),
    #[error("no room or passage with id '{0}'")]
    InvalidLocation(Id),
}

/// First object in `candidates` whose name contains `search_term`, ignoring case.
pub fn find_world_object<'a, T: WorldObject>(
    candidates: impl IntoIterator<Item = &'a T>,
    search_term: &str,
) -> Option<&'a T> {
    let lc_term = search_term.to_lowercase();
    candidates
        .into_iter()
        .find(|candidate| candidate.name().to_lowercase().contains(&lc_term))
}

/// Find an item or piece of furniture matching `pattern` within `scope`.
pub fn find_entity_match<'a>(
    world: &'a KernoWorld,
    player: &'a Player,
    pattern: &str,
    scope: SearchScope,
) -> Result<Found<'a>, SearchError> {
    if matches!(scope, SearchScope::Inventory | SearchScope::Examinable)
        && let Some(item) = find_world_object(&player.inventory, pattern)
    {
        return Ok(Found::Item(item));
    }
    if scope == SearchScope::Inventory {
        return Err(SearchError::NoMatchingName(pattern.to_string()));
    }

    let place = world
        .place(&player.location)
        .ok_or_else(|| SearchError::InvalidLocation(player.location.clone()))?;

    if matches!(scope, SearchScope::LocationItems | SearchScope::Examinable)
        && let Some(item) = find_world_object(place.items(), pattern)
    {
        return Ok(Found::Item(item));
    }
    if matches!(scope, SearchScope::Furniture | SearchScope::Examinable)
        && let Some(furniture) = find_world_object(place.furniture(), pattern)
    {
        return Ok(Found::Furniture(furniture));
    }

    Err(SearchError::NoMatchingName(pattern.to_string()))
}

/// Item-only convenience wrapper around [`find_entity_match`].
pub fn find_item_match<'a>(
    world: &'a KernoWorld,
    player: &'a Player,
    pattern: &str,
    scope: SearchScope,
) -> Result<&'a Item, SearchError> {
    match find_entity_match(world, player, pattern, scope)? {
        Found::Item(item) => Ok(item),
        Found::Furniture(_) => Err(SearchError::NoMatchingName(pattern.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;

    fn insert_room<'a>(world: &'a mut KernoWorld, id: &str) -> &'a mut Room {
        world.rooms.entry(id.to_string()).or_insert_with(|| Room::new(id, id))
    }

    fn setup() -> (KernoWorld, Player) {
        let mut world = KernoWorld::new_empty();
        let room = insert_room(&mut world, "workshop");
        room.items.push(Item::new("wrench", "Heavy Wrench"));
        room.items.push(Item::new("key_copy", "Spare Key"));
        room.furniture.push(Furniture {
            id: "lathe".into(),
            name: "Old Lathe".into(),
            description: String::new(),
            interaction: None,
        });
        let mut player = Player::new("workshop");
        player.add_item(Item::new("rusty_key", "Rusty Key"));
        (world, player)
    }

    #[test]
    fn substring_match_ignores_case() {
        let (world, player) = setup();
        for pattern in ["key", "RUSTY", "sty k"] {
            match find_entity_match(&world, &player, pattern, SearchScope::Examinable) {
                Ok(Found::Item(item)) => assert_eq!(item.id, "rusty_key"),
                other => panic!("unexpected result for '{pattern}': {other:?}"),
            }
        }
    }

    #[test]
    fn inventory_wins_over_location_items() {
        let (world, player) = setup();
        let item = find_item_match(&world, &player, "key", SearchScope::Examinable).expect("a key");
        assert_eq!(item.id, "rusty_key");
        let item = find_item_match(&world, &player, "key", SearchScope::LocationItems).expect("a key");
        assert_eq!(item.id, "key_copy");
    }

    #[test]
    fn furniture_only_in_furniture_scopes() {
        let (world, player) = setup();
        let found = find_entity_match(&world, &player, "lathe", SearchScope::Examinable).expect("lathe");
        assert!(found.is_furniture());
        assert_eq!(found.name(), "Old Lathe");
        assert_eq!(
            find_entity_match(&world, &player, "lathe", SearchScope::LocationItems),
            Err(SearchError::NoMatchingName("lathe".into()))
        );
        assert!(find_entity_match(&world, &player, "wrench", SearchScope::Furniture).is_err());
    }

    #[test]
    fn inventory_scope_ignores_the_room() {
        let (world, player) = setup();
        assert!(find_item_match(&world, &player, "wrench", SearchScope::Inventory).is_err());
    }

    #[test]
    fn unknown_location_is_reported() {
        let (world, mut player) = setup();
        player.location = "nowhere".into();
        match find_entity_match(&world, &player, "wrench", SearchScope::LocationItems) {
            Err(SearchError::InvalidLocation(id)) => assert_eq!(id, "nowhere"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
