//! Level setup and spawn system lifecycle.
//!
//! This module turns a [`LevelDescription`] into entities and resources,
//! owns the attach/detach lifecycle of the spawn system observers, and
//! provides the per-frame update schedule.
//!
//! # Level File Format
//!
//! ```json
//! {
//!   "name": "forest",
//!   "scene_index": 1,
//!   "start": "gate",
//!   "cameras": ["cam_gate", "cam_bridge"],
//!   "checkpoints": [
//!     { "id": "gate", "position": [0.0, 0.0, 0.0], "yaw_degrees": 90.0,
//!       "cam_key": "cam_gate", "area_max_distance": 6.0 }
//!   ],
//!   "presentation": ["cam_gate"]
//! }
//! ```
//!
//! # Lifecycle
//!
//! ```ignore
//! let mut world = World::new();
//! setup_level(&mut world, &level, &config)?;
//! let mut scope = SpawnSystemScope::enter(&mut world)?;
//! scope.trigger(LoadGameEvent {});
//! // ... frames ...
//! // observers are detached when `scope` is dropped
//! ```

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::components::character::Character;
use crate::components::checkpoint::Checkpoint;
use crate::components::falldamage::{FallDamage, GroundContact};
use crate::components::health::Health;
use crate::components::transform::Transform;
use crate::resources::fadingeffect::FadingEffect;
use crate::resources::gameconfig::GameConfig;
use crate::resources::keepinrange::KeepInRange;
use crate::resources::levelcameras::{BlendSettings, LevelCameras};
use crate::resources::presentation::PresentationDeck;
use crate::resources::scene::ActiveScene;
use crate::resources::spawnsystem::{SpawnError, SpawnSystem};
use crate::resources::worldtime::WorldTime;
use crate::systems::fade::fade_system;
use crate::systems::falldamage::fall_damage_system;
use crate::systems::keepinrange::keep_in_range_system;
use crate::systems::presentation::presentation_observer;
use crate::systems::spawn::{
    checkpoint_passed_observer, load_game_observer, max_distance_observer, save_game_observer,
    spawn_request_observer,
};
use crate::systems::time::advance_world_time;

const DEFAULT_CHARACTER_HEALTH: f32 = 10.0;

/// One authored checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointDescription {
    pub id: String,
    pub position: Vec3,
    #[serde(default)]
    pub yaw_degrees: f32,
    pub cam_key: String,
    pub area_max_distance: f32,
}

/// Authored content of a level, usually read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescription {
    pub name: String,
    pub scene_index: usize,
    /// Id of the start checkpoint. Defaults to the first checkpoint.
    #[serde(default)]
    pub start: Option<String>,
    /// Extra camera keys beyond the ones named by checkpoints.
    #[serde(default)]
    pub cameras: Vec<String>,
    #[serde(default)]
    pub blends: Option<BlendSettings>,
    pub checkpoints: Vec<CheckpointDescription>,
    /// Camera keys for presentation mode, in slide order.
    #[serde(default)]
    pub presentation: Vec<String>,
}

/// Errors while reading a level description.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse level {path:?}: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LevelDescription {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| LevelError::Format {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Spawn the level's entities and insert its resources.
///
/// Checkpoints are spawned in authored order; the cat and ghost are placed
/// beside the start checkpoint. Returns the checkpoint entities in order.
///
/// Nothing is spawned when the level is rejected. See [`SpawnError`] for
/// the reasons.
pub fn setup_level(
    world: &mut World,
    level: &LevelDescription,
    config: &GameConfig,
) -> Result<Vec<Entity>, SpawnError> {
    if level.checkpoints.is_empty() {
        return Err(SpawnError::NoCheckpoints);
    }

    // The pair spawns `2 * player_offset` apart and must fit in every
    // checkpoint's tether radius.
    let required = 2.0 * config.player_offset;
    if let Some(cramped) = level
        .checkpoints
        .iter()
        .find(|c| c.area_max_distance < required)
    {
        return Err(SpawnError::AreaTooSmall {
            id: cramped.id.clone(),
            area_max_distance: cramped.area_max_distance,
            required,
        });
    }

    let start_index = match level.start.as_deref() {
        Some(id) => level
            .checkpoints
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| SpawnError::UnknownStartId(id.to_string()))?,
        None => 0,
    };

    let mut cameras = LevelCameras::new(level.cameras.iter().cloned());
    let mut checkpoints = Vec::with_capacity(level.checkpoints.len());
    for description in &level.checkpoints {
        cameras.register(description.cam_key.clone());
        let entity = world
            .spawn((
                Checkpoint::new(
                    description.id.clone(),
                    description.cam_key.clone(),
                    description.area_max_distance,
                ),
                Transform::from_translation(description.position)
                    .with_rotation(Quat::from_rotation_y(description.yaw_degrees.to_radians())),
            ))
            .id();
        checkpoints.push(entity);
    }
    for key in &level.presentation {
        cameras.register(key.clone());
    }
    if let Some(blends) = &level.blends {
        cameras.change_custom_blend(blends.clone());
    }

    let start = &level.checkpoints[start_index];
    let lateral = Vec3::X * config.player_offset;
    for character in [Character::Cat, Character::Ghost] {
        let position = start.position + lateral * character.spawn_side();
        world.spawn((
            character,
            Transform::from_translation(position),
            FallDamage::new(config.fall_height_distance).starting_at(position.y),
            GroundContact(true),
            Health::new(DEFAULT_CHARACTER_HEALTH),
        ));
    }

    let spawn_system = SpawnSystem::new(checkpoints.clone(), config.player_offset)?
        .with_start(checkpoints[start_index])?;

    world.insert_resource(spawn_system);
    world.insert_resource(cameras);
    world.insert_resource(KeepInRange::new(config.default_max_distance));
    world.insert_resource(
        FadingEffect::new(config.fade_duration).with_curve(config.fade_curve),
    );
    world.insert_resource(ActiveScene::new(level.scene_index, level.name.clone()));
    if !world.contains_resource::<WorldTime>() {
        world.insert_resource(WorldTime::default());
    }
    if !level.presentation.is_empty() {
        world.insert_resource(PresentationDeck::new(level.presentation.iter().cloned()));
        world.add_observer(presentation_observer);
    }
    world.flush();

    info!(
        "Level '{}' set up with {} checkpoints, start '{}'",
        level.name,
        checkpoints.len(),
        start.id
    );
    Ok(checkpoints)
}

/// Attach the spawn system to the world.
///
/// Builds the checkpoint registry on first activation, resets progress to
/// the start checkpoint, and registers the spawn observers. Calling it on an
/// already active spawn system does nothing.
pub fn enable_spawn_system(world: &mut World) -> Result<(), SpawnError> {
    let ids: Vec<(Entity, Option<String>)> = {
        let spawn_system = world
            .get_resource::<SpawnSystem>()
            .ok_or(SpawnError::MissingSpawnSystem)?;
        if spawn_system.is_active() {
            debug!("Spawn system already enabled");
            return Ok(());
        }
        spawn_system
            .checkpoints()
            .iter()
            .map(|&entity| (entity, world.get::<Checkpoint>(entity).map(|c| c.id.clone())))
            .collect()
    };

    let listeners = vec![
        world.add_observer(checkpoint_passed_observer).id(),
        world.add_observer(max_distance_observer).id(),
        world.add_observer(spawn_request_observer).id(),
        world.add_observer(save_game_observer).id(),
        world.add_observer(load_game_observer).id(),
    ];

    {
        let mut spawn_system = world.resource_mut::<SpawnSystem>();
        spawn_system.ensure_registry(|entity| {
            let id = ids
                .iter()
                .find(|(e, _)| *e == entity)
                .and_then(|(_, id)| id.clone());
            if id.is_none() {
                warn!("Checkpoint entity {:?} has no Checkpoint component", entity);
            }
            id
        });
        spawn_system.reset_progress();
        spawn_system.set_listeners(listeners);
    }
    world.flush();
    debug!("Spawn system enabled");
    Ok(())
}

/// Detach the spawn system observers. Progress is kept.
pub fn disable_spawn_system(world: &mut World) {
    let listeners = match world.get_resource_mut::<SpawnSystem>() {
        Some(mut spawn_system) => spawn_system.take_listeners(),
        None => return,
    };
    for listener in listeners {
        world.despawn(listener);
    }
    debug!("Spawn system disabled");
}

/// Keeps the spawn system enabled for as long as the scope lives.
///
/// Dropping the scope (normally or while unwinding) detaches the observers.
pub struct SpawnSystemScope<'w> {
    world: &'w mut World,
}

impl<'w> SpawnSystemScope<'w> {
    pub fn enter(world: &'w mut World) -> Result<Self, SpawnError> {
        enable_spawn_system(world)?;
        Ok(Self { world })
    }
}

impl Deref for SpawnSystemScope<'_> {
    type Target = World;

    fn deref(&self) -> &World {
        self.world
    }
}

impl DerefMut for SpawnSystemScope<'_> {
    fn deref_mut(&mut self) -> &mut World {
        self.world
    }
}

impl Drop for SpawnSystemScope<'_> {
    fn drop(&mut self) {
        disable_spawn_system(self.world);
    }
}

/// Per-frame gameplay systems.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(fall_damage_system);
    update.add_systems(keep_in_range_system.after(fall_damage_system));
    // Runs after the tether so a respawn fade starts on the frame it is requested.
    update.add_systems(fade_system.after(keep_in_range_system));
    update
}

/// Advance time and run one frame of `schedule`.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    advance_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}
