use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use kerno_data::{RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     starting_room: "start".into(),
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         ..RoomDef::default()
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut passages = HashSet::new();
    let mut items = HashSet::new();

    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);
    track_ids(
        "passage",
        world.passages.iter().map(|p| p.id.as_str()),
        &mut passages,
        &mut errors,
    );
    track_ids("item", world.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);

    for id in rooms.intersection(&passages) {
        errors.push(ValidationError::DuplicateId {
            kind: "location",
            id: (*id).to_string(),
        });
    }

    let is_location = |id: &str| rooms.contains(id) || passages.contains(id);

    if world.starting_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "starting room missing".to_string(),
        });
    } else if !rooms.contains(world.starting_room.as_str()) {
        errors.push(ValidationError::MissingReference {
            kind: "room",
            id: world.starting_room.clone(),
            context: "starting room".to_string(),
        });
    }

    for room in &world.rooms {
        for (direction, to) in &room.exits {
            if !is_location(to) {
                errors.push(ValidationError::MissingReference {
                    kind: "location",
                    id: to.clone(),
                    context: format!("room '{}' exit '{direction}'", room.id),
                });
            }
        }
        for (idx, event) in room.events.iter().enumerate() {
            if let Some(p) = event.probability
                && !(0.0..=1.0).contains(&p)
            {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' event #{idx} probability out of range ({p})", room.id),
                });
            }
        }
        for item in &room.items {
            validate_item(item, &mut errors, &format!("room '{}'", room.id));
        }
    }

    for passage in &world.passages {
        for (direction, to) in &passage.connections {
            if !is_location(to) {
                errors.push(ValidationError::MissingReference {
                    kind: "location",
                    id: to.clone(),
                    context: format!("passage '{}' connection '{direction}'", passage.id),
                });
            }
        }
        for item in &passage.items {
            validate_item(item, &mut errors, &format!("passage '{}'", passage.id));
        }
    }

    for item in &world.items {
        validate_item(item, &mut errors, "items table");
    }

    for (idx, event) in world.events.iter().enumerate() {
        if event.turns_remaining < 1 {
            errors.push(ValidationError::InvalidValue {
                context: format!("pending event #{idx} has non-positive turns_remaining"),
            });
        }
    }

    errors
}

fn validate_item(item: &ItemDef, errors: &mut Vec<ValidationError>, context: &str) {
    if item.id.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context}: item '{}' has an empty id", item.name),
        });
    }
    for (label, value) in [("nutrition", item.nutrition), ("hydration", item.hydration)] {
        if let Some(v) = value
            && v < 0.0
        {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context}: item '{}' has negative {label} ({v})", item.id),
            });
        }
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    seen: &mut HashSet<&'a str>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn room(id: &str) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            name: format!("Room {id}"),
            description: "Test room".into(),
            room_type: "generic".into(),
            ..RoomDef::default()
        }
    }

    fn base_world() -> WorldDef {
        WorldDef {
            starting_room: "start".into(),
            rooms: vec![room("start")],
            ..WorldDef::default()
        }
    }

    #[test]
    fn minimal_world_is_valid() {
        assert!(validate_world(&base_world()).is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut world = base_world();
        world.rooms = vec![room("start"), room("start")];

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "room" && id == "start"))
        );
    }

    #[test]
    fn room_and_passage_sharing_an_id_is_reported() {
        let mut world = base_world();
        world.passages = vec![PassageDef {
            id: "start".into(),
            ..PassageDef::default()
        }];

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, .. } if *kind == "location"))
        );
    }

    #[test]
    fn dangling_exit_is_reported() {
        let mut world = base_world();
        world.rooms[0].exits = BTreeMap::from([("north".to_string(), "nowhere".to_string())]);

        let errors = validate_world(&world);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::MissingReference { id, context, .. } if id == "nowhere" && context.contains("north"))
        ));
    }

    #[test]
    fn exit_into_passage_is_accepted() {
        let mut world = base_world();
        world.rooms[0].exits = BTreeMap::from([("down".to_string(), "tunnel".to_string())]);
        world.passages = vec![PassageDef {
            id: "tunnel".into(),
            connections: BTreeMap::from([("up".to_string(), "start".to_string())]),
            ..PassageDef::default()
        }];

        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn missing_starting_room_is_reported() {
        let mut world = base_world();
        world.starting_room = "attic".into();

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::MissingReference { id, .. } if id == "attic"))
        );
    }

    #[test]
    fn probability_out_of_range_is_reported() {
        let mut world = base_world();
        world.rooms[0].events = vec![AmbientEventDef {
            probability: Some(1.5),
            message: "drip".into(),
            effects: Vec::new(),
        }];

        let errors = validate_world(&world);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::InvalidValue { context } if context.contains("probability")))
        );
    }
}
