use std::fs;
use std::path::Path;

use kerno_data::StateValue;
use kerno_engine as ke;

use ke::item::ItemKind;
use ke::{Place, Player, load_world};

fn write_world(json: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    fs::write(file.path(), json).unwrap();
    file
}

#[test]
fn sparse_world_gets_defaults() {
    let file = write_world(
        r#"{
            "starting_room": "cellar",
            "rooms": [
                { "id": "cellar", "items": [ { "id": "jar", "name": "Jar", "type": "food" } ] }
            ]
        }"#,
    );
    let world = load_world(file.path()).unwrap();
    let cellar = &world.rooms["cellar"];
    assert_eq!(cellar.name, "Unknown Room");
    assert_eq!(cellar.description, "An empty room.");
    assert_eq!(cellar.location_type(), "generic");
    let jar = &cellar.items[0];
    assert!(jar.takeable);
    assert!(!jar.usable);
    assert_eq!(jar.kind, ItemKind::Food { nutrition: 10.0 });
}

#[test]
fn global_state_accepts_any_json_value() {
    let file = write_world(
        r#"{
            "starting_room": "vault",
            "global_state": {
                "door": null,
                "codes": [1, 2],
                "npc": { "mood": "calm", "seen": [true] }
            },
            "rooms": [
                {
                    "id": "vault",
                    "events": [
                        {
                            "probability": 1.0,
                            "message": "The codes scramble.",
                            "effects": [ { "type": "set_global", "key": "codes", "value": null } ]
                        }
                    ]
                }
            ]
        }"#,
    );
    let mut world = load_world(file.path()).unwrap();
    assert_eq!(world.global("door"), Some(&StateValue::Null));
    assert_eq!(
        world.global("codes"),
        Some(&StateValue::List(vec![StateValue::Int(1), StateValue::Int(2)]))
    );
    let Some(StateValue::Map(npc)) = world.global("npc") else {
        panic!("npc should load as a map");
    };
    assert_eq!(npc["mood"], StateValue::from("calm"));
    assert_eq!(npc["seen"], StateValue::List(vec![StateValue::Bool(true)]));

    let mut player = Player::new("vault");
    assert_eq!(world.process_events(&mut player), vec!["The codes scramble.".to_string()]);
    assert_eq!(world.global("codes"), Some(&StateValue::Null));
}

#[test]
fn invalid_world_reports_every_problem() {
    let file = write_world(
        r#"{
            "starting_room": "attic",
            "rooms": [
                { "id": "hall", "exits": { "north": "nowhere" } },
                { "id": "hall" }
            ]
        }"#,
    );
    let err = load_world(file.path()).unwrap_err();
    let text = format!("{err:#}");
    assert!(text.contains("validation failed"));
    assert!(text.contains("- missing room 'attic'"));
    assert!(text.contains("- missing location 'nowhere'"));
    assert!(text.contains("- duplicate room id 'hall'"));
}

#[test]
fn malformed_json_is_an_error() {
    let file = write_world(r#"{ "starting_room": "hall", "rooms": [ "#);
    let err = load_world(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("parsing worlddef JSON"));
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_world(Path::new("/no/such/world.json")).is_err());
}

#[test]
fn sample_world_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/world.json");
    let world = load_world(&path).unwrap();
    assert_eq!(world.starting_room, "control_room");
    assert!(world.passages.contains_key("maintenance_shaft"));
    assert!(world.items.contains_key("memory_core"));
    assert_eq!(world.global("reactor_online"), Some(&StateValue::Bool(false)));
    assert_eq!(world.scheduler.len(), 1);
}
