//! Gameplay integration tests: presentation mode, fall damage, the tether
//! and level/save files, driven through a real world and schedule.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;

use catghost::components::character::Character;
use catghost::components::falldamage::{FallDamage, GroundContact};
use catghost::components::health::Health;
use catghost::components::transform::Transform;
use catghost::events::damage::DamageTakenEvent;
use catghost::events::presentation::{
    PresentationCameraOpenedEvent, PresentationCommand, PresentationCueEvent,
};
use catghost::events::tether::MaxDistanceReachedEvent;
use catghost::game::{LevelDescription, LevelError, build_update_schedule, setup_level, tick};
use catghost::resources::fadingeffect::{FadeCurve, FadingEffect};
use catghost::resources::gameconfig::GameConfig;
use catghost::resources::keepinrange::KeepInRange;
use catghost::resources::levelcameras::LevelCameras;
use catghost::resources::presentation::PresentationDeck;
use catghost::resources::worldtime::WorldTime;
use catghost::savedata::GameData;

const LEVEL_JSON: &str = r#"{
    "name": "forest",
    "scene_index": 2,
    "cameras": ["cam_overview"],
    "blends": {
        "default_duration": 1.0,
        "custom": [
            { "from": "*", "to": "cam_bridge", "duration": 0.25 },
            { "from": "cam_gate", "to": "cam_bridge", "duration": 2.0 }
        ]
    },
    "checkpoints": [
        { "id": "gate", "position": [0.0, 0.0, 0.0], "cam_key": "cam_gate", "area_max_distance": 6.0 },
        { "id": "bridge", "position": [12.0, 0.0, 0.0], "yaw_degrees": 180.0, "cam_key": "cam_bridge", "area_max_distance": 4.0 }
    ],
    "presentation": ["cam_overview", "cam_gate", "cam_bridge"]
}"#;

fn forest_world() -> World {
    let level: LevelDescription = serde_json::from_str(LEVEL_JSON).unwrap();
    let mut world = World::new();
    setup_level(&mut world, &level, &GameConfig::new()).unwrap();
    world
}

fn character(world: &mut World, which: Character) -> Entity {
    world
        .query::<(Entity, &Character)>()
        .iter(world)
        .find(|(_, c)| **c == which)
        .map(|(e, _)| e)
        .unwrap()
}

#[test]
fn level_file_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forest.json");
    std::fs::write(&path, LEVEL_JSON).unwrap();

    let level = LevelDescription::load_from_file(&path).unwrap();
    assert_eq!(level.name, "forest");
    assert_eq!(level.checkpoints.len(), 2);
    assert_eq!(level.checkpoints[0].yaw_degrees, 0.0);
    assert_eq!(level.start, None);
}

#[test]
fn malformed_level_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"name\": ").unwrap();

    assert!(matches!(
        LevelDescription::load_from_file(&path),
        Err(LevelError::Format { .. })
    ));
}

#[test]
fn missing_level_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = LevelDescription::load_from_file(&path).unwrap_err();
    assert!(matches!(err, LevelError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn configured_fade_curve_reaches_the_fade() {
    let level: LevelDescription = serde_json::from_str(LEVEL_JSON).unwrap();
    let mut config = GameConfig::new();
    config.fade_curve = FadeCurve::QuadIn;
    let mut world = World::new();
    setup_level(&mut world, &level, &config).unwrap();

    assert_eq!(world.resource::<FadingEffect>().curve, FadeCurve::QuadIn);
}

#[test]
fn characters_start_beside_the_first_checkpoint() {
    let mut world = forest_world();
    let cat = character(&mut world, Character::Cat);
    let ghost = character(&mut world, Character::Ghost);

    assert_eq!(world.get::<Transform>(cat).unwrap().translation, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(world.get::<Transform>(ghost).unwrap().translation, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(world.get::<Health>(cat).unwrap().current, 10.0);
}

#[test]
fn presentation_walks_cameras_and_reports() {
    let mut world = forest_world();
    let opened = Arc::new(Mutex::new(Vec::new()));
    let cues = Arc::new(Mutex::new(Vec::new()));

    let opened_clone = opened.clone();
    world.add_observer(move |trigger: On<PresentationCameraOpenedEvent>| {
        let event = trigger.event();
        opened_clone.lock().unwrap().push((event.index, event.key.clone()));
    });
    let cues_clone = cues.clone();
    world.add_observer(move |trigger: On<PresentationCueEvent>| {
        cues_clone.lock().unwrap().push(trigger.event().key.clone());
    });
    world.flush();

    world.trigger(PresentationCommand::Next);
    world.flush();
    world.trigger(PresentationCommand::Next);
    world.flush();
    // Already on the last camera.
    world.trigger(PresentationCommand::Next);
    world.flush();
    world.trigger(PresentationCommand::Cue);
    world.flush();
    world.trigger(PresentationCommand::Previous);
    world.flush();

    assert_eq!(
        *opened.lock().unwrap(),
        vec![
            (1, "cam_gate".to_string()),
            (2, "cam_bridge".to_string()),
            (1, "cam_gate".to_string()),
        ]
    );
    assert_eq!(*cues.lock().unwrap(), vec!["cam_bridge".to_string()]);

    let cameras = world.resource::<LevelCameras>();
    assert_eq!(cameras.open_cameras().collect::<Vec<_>>(), vec!["cam_gate"]);
    assert_eq!(world.resource::<PresentationDeck>().current_index(), 1);
}

#[test]
fn previous_on_first_camera_does_nothing() {
    let mut world = forest_world();
    let opened = Arc::new(Mutex::new(0u32));
    let opened_clone = opened.clone();
    world.add_observer(move |_trigger: On<PresentationCameraOpenedEvent>| {
        *opened_clone.lock().unwrap() += 1;
    });
    world.flush();

    world.trigger(PresentationCommand::Previous);
    world.flush();

    assert_eq!(*opened.lock().unwrap(), 0);
    assert_eq!(world.resource::<LevelCameras>().open_cameras().count(), 0);
}

#[test]
fn custom_blends_from_level_apply_to_switches() {
    let mut world = forest_world();
    let mut cameras = world.resource_mut::<LevelCameras>();

    cameras.open_camera("cam_gate");
    assert_eq!(cameras.last_blend().unwrap().duration, 1.0);

    cameras.close_all_cameras();
    cameras.open_camera("cam_bridge");
    let blend = cameras.last_blend().unwrap();
    assert_eq!(blend.from.as_deref(), Some("cam_gate"));
    assert_eq!(blend.duration, 2.0);

    cameras.close_all_cameras();
    cameras.open_camera("cam_overview");
    cameras.close_all_cameras();
    cameras.open_camera("cam_bridge");
    assert_eq!(cameras.last_blend().unwrap().duration, 0.25);
}

#[test]
fn landing_after_a_high_fall_hurts() {
    let mut world = forest_world();
    let mut update = build_update_schedule();
    let cat = character(&mut world, Character::Cat);
    let damage = Arc::new(Mutex::new(Vec::new()));
    let damage_clone = damage.clone();
    world.add_observer(move |trigger: On<DamageTakenEvent>| {
        let event = trigger.event();
        damage_clone.lock().unwrap().push((event.entity, event.amount));
    });
    world.flush();

    // Start the fall from y=0 in the air, land five units lower.
    world.get_mut::<GroundContact>(cat).unwrap().0 = false;
    world.get_mut::<Transform>(cat).unwrap().translation.y = -1.0;
    tick(&mut world, &mut update, 0.1);
    assert!(world.get::<FallDamage>(cat).unwrap().is_falling);

    world.get_mut::<Transform>(cat).unwrap().translation.y = -5.0;
    world.get_mut::<GroundContact>(cat).unwrap().0 = true;
    tick(&mut world, &mut update, 0.1);

    // Fall measured from y=-1 where it was detected: 4 units, 2 over the threshold.
    assert_eq!(*damage.lock().unwrap(), vec![(cat, 2.0)]);
    assert_eq!(world.get::<Health>(cat).unwrap().current, 8.0);
    assert!(!world.get::<FallDamage>(cat).unwrap().is_falling);
}

#[test]
fn short_fall_is_harmless() {
    let mut world = forest_world();
    let mut update = build_update_schedule();
    let ghost = character(&mut world, Character::Ghost);

    world.get_mut::<Transform>(ghost).unwrap().translation.y = -1.0;
    tick(&mut world, &mut update, 0.1);
    world.get_mut::<Transform>(ghost).unwrap().translation.y = -2.5;
    tick(&mut world, &mut update, 0.1);

    assert_eq!(world.get::<Health>(ghost).unwrap().current, 10.0);
}

#[test]
fn tether_fires_once_per_excursion() {
    let mut world = forest_world();
    let mut update = build_update_schedule();
    let snaps = Arc::new(Mutex::new(0u32));
    let snaps_clone = snaps.clone();
    world.add_observer(move |_trigger: On<MaxDistanceReachedEvent>| {
        *snaps_clone.lock().unwrap() += 1;
    });
    world.flush();

    let cat = character(&mut world, Character::Cat);
    world.get_mut::<Transform>(cat).unwrap().translation.x = 30.0;
    for _ in 0..5 {
        tick(&mut world, &mut update, 0.1);
    }
    assert_eq!(*snaps.lock().unwrap(), 1);
    assert!(world.resource::<KeepInRange>().exceeded);

    world.resource_mut::<KeepInRange>().reset_values();
    tick(&mut world, &mut update, 0.1);
    assert_eq!(*snaps.lock().unwrap(), 2);
}

#[test]
fn world_time_advances_with_scale() {
    let mut world = forest_world();
    world.insert_resource(WorldTime::default().with_time_scale(0.5));
    let mut update = build_update_schedule();

    tick(&mut world, &mut update, 0.2);
    tick(&mut world, &mut update, 0.2);

    let time = world.resource::<WorldTime>();
    assert!((time.elapsed - 0.2).abs() < 1e-6);
    assert!((time.delta - 0.1).abs() < 1e-6);
    assert_eq!(time.frame_count, 2);
}

#[test]
fn save_file_keeps_other_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut data = GameData {
        last_checkpoint_id: Some("bridge".to_string()),
        ..Default::default()
    };
    data.entries.insert("collected_bells".to_string(), "3".to_string());
    data.save_to_file(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"keys\""));

    let loaded = GameData::load_from_file(&path).unwrap();
    assert_eq!(loaded, data);
}

#[test]
fn save_file_with_mismatched_entries_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(
        &path,
        r#"{ "last_checkpoint_id": "gate", "entries": { "keys": ["a", "b"], "values": ["1"] } }"#,
    )
    .unwrap();

    assert!(GameData::load_from_file(&path).is_err());
}
