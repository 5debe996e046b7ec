//! Checkpoint progress and respawn coordination.
//!
//! [`Spawner`] is a [`SystemParam`] bundling the [`SpawnSystem`] resource with
//! every collaborator a spawn touches: the two characters, the checkpoints,
//! the level cameras, the tether and the fade. Observers receive it from the
//! ECS scheduler, so the coordinator never looks its collaborators up from
//! global state.
//!
//! # Operations
//!
//! - [`Spawner::update_last_checkpoint`] – progress on a passed checkpoint
//! - [`Spawner::spawn_at_checkpoint`] / [`Spawner::spawn_at_checkpoint_id`] /
//!   [`Spawner::spawn_at_last_checkpoint`] – move both characters
//! - [`Spawner::respawn`] – fade, spawn at the last checkpoint, reveal
//! - [`Spawner::save_game`] / [`Spawner::load_game`] – save data bridge
//!
//! # Failure policy
//!
//! Nothing here panics. Unknown or missing checkpoints fall back to the start
//! checkpoint with a warning. Missing collaborators abort the spawn with an
//! error log before anything is moved.
//!
//! # Related
//!
//! - [`crate::game::enable_spawn_system`] – registers the observers below

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use glam::{Quat, Vec3};
use log::{debug, error, info, warn};

use crate::components::character::Character;
use crate::components::checkpoint::Checkpoint;
use crate::components::transform::Transform;
use crate::events::checkpoint::{CheckpointPassedEvent, LastCheckpointReachedEvent};
use crate::events::savegame::{LoadGameEvent, SaveGameEvent};
use crate::events::spawn::SpawnRequest;
use crate::events::tether::MaxDistanceReachedEvent;
use crate::resources::fadingeffect::FadingEffect;
use crate::resources::keepinrange::KeepInRange;
use crate::resources::levelcameras::LevelCameras;
use crate::resources::scene::ActiveScene;
use crate::resources::spawnsystem::SpawnSystem;
use crate::savedata::GameData;

/// Data copied out of a checkpoint for a spawn.
#[derive(Debug, Clone, PartialEq)]
struct SpawnPoint {
    entity: Entity,
    translation: Vec3,
    rotation: Quat,
    cam_key: String,
    area_max_distance: f32,
}

/// Spawn system state plus the collaborators it drives.
#[derive(SystemParam)]
pub struct Spawner<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub spawn_system: Option<ResMut<'w, SpawnSystem>>,
    pub checkpoints:
        Query<'w, 's, (&'static mut Checkpoint, &'static Transform), Without<Character>>,
    pub characters:
        Query<'w, 's, (&'static Character, &'static mut Transform), Without<Checkpoint>>,
    pub cameras: Option<ResMut<'w, LevelCameras>>,
    pub tether: Option<ResMut<'w, KeepInRange>>,
    pub fade: Option<ResMut<'w, FadingEffect>>,
}

impl Spawner<'_, '_> {
    /// Advance progress to `checkpoint`.
    ///
    /// Already-passed checkpoints are ignored, which makes repeated events for
    /// the same checkpoint harmless and keeps the level completion event to a
    /// single firing.
    pub fn update_last_checkpoint(&mut self, checkpoint: Entity) {
        let Some(spawn_system) = self.spawn_system.as_deref_mut() else {
            error!("SpawnSystem resource missing; checkpoint {:?} ignored", checkpoint);
            return;
        };
        let Ok((mut data, _)) = self.checkpoints.get_mut(checkpoint) else {
            warn!("Entity {:?} passed as checkpoint is not a checkpoint", checkpoint);
            return;
        };
        if data.passed {
            debug!("Checkpoint '{}' already passed", data.id);
            return;
        }

        spawn_system.record_reached(checkpoint);
        data.passed = true;
        info!("Checkpoint '{}' reached", data.id);

        match self.tether.as_deref_mut() {
            Some(tether) => tether.change_max_distance(data.area_max_distance),
            None => warn!("KeepInRange resource missing; tether distance not updated"),
        }

        if spawn_system.is_final(checkpoint) {
            info!("Last checkpoint of the level reached");
            self.commands.trigger(LastCheckpointReachedEvent {});
        }
    }

    pub fn spawn_at_last_checkpoint(&mut self) {
        let last = self
            .spawn_system
            .as_deref()
            .and_then(SpawnSystem::last_reached);
        self.spawn_at_checkpoint(last);
    }

    /// Spawn the checkpoint registered under `id`, or the start checkpoint
    /// if there is none.
    pub fn spawn_at_checkpoint_id(&mut self, id: &str) {
        let Some(spawn_system) = self.spawn_system.as_deref() else {
            error!("SpawnSystem resource missing; cannot spawn at '{}'", id);
            return;
        };
        let target = match spawn_system.lookup(id) {
            Some(entity) => entity,
            None => {
                warn!("Checkpoint with id '{}' not found. Defaulting to start checkpoint.", id);
                spawn_system.start()
            }
        };
        self.spawn_at_checkpoint(Some(target));
    }

    /// Place both characters at `target` and point the level at it.
    ///
    /// `None` resolves to the start checkpoint.
    pub fn spawn_at_checkpoint(&mut self, target: Option<Entity>) {
        let Some(point) = self.resolve(target) else {
            return;
        };

        let mut cat = None;
        let mut ghost = None;
        for (character, transform) in self.characters.iter_mut() {
            match character {
                Character::Cat => cat = Some(transform),
                Character::Ghost => ghost = Some(transform),
            }
        }

        let (Some(mut cat), Some(mut ghost), Some(cameras), Some(tether)) = (
            cat,
            ghost,
            self.cameras.as_deref_mut(),
            self.tether.as_deref_mut(),
        ) else {
            error!("One or more spawn collaborators are missing (cat, ghost, LevelCameras, KeepInRange)");
            return;
        };

        let offset = self
            .spawn_system
            .as_deref()
            .map(SpawnSystem::player_offset)
            .unwrap_or_default();
        let lateral = Vec3::X * offset;

        cat.set_position_and_rotation(point.translation + lateral, point.rotation);
        ghost.set_position_and_rotation(point.translation - lateral, point.rotation);

        cameras.close_all_cameras();
        cameras.open_camera(&point.cam_key);

        tether.change_max_distance(point.area_max_distance);

        debug!("Spawned at checkpoint {:?}", point.entity);
    }

    /// Hide the screen, spawn at the last checkpoint, reveal, re-arm the tether.
    pub fn respawn(&mut self) {
        match self.fade.as_deref_mut() {
            Some(fade) => fade.fade_in(),
            None => warn!("FadingEffect resource missing; respawning without fade"),
        }

        self.spawn_at_last_checkpoint();

        if let Some(fade) = self.fade.as_deref_mut() {
            fade.fade_out();
        }
        if let Some(tether) = self.tether.as_deref_mut() {
            tether.reset_values();
        }
    }

    /// Write the last reached checkpoint id into `data`.
    pub fn save_game(&self, data: &mut GameData) {
        let last = self
            .spawn_system
            .as_deref()
            .and_then(SpawnSystem::last_reached);
        data.last_checkpoint_id = last
            .and_then(|entity| self.checkpoints.get(entity).ok())
            .map(|(checkpoint, _)| checkpoint.id.clone());
        if data.last_checkpoint_id.is_none() {
            warn!("No checkpoint reached yet; saving without a checkpoint id");
        }
    }

    /// Spawn according to `data`, unless on the title scene.
    pub fn load_game(&mut self, data: &GameData, scene: &ActiveScene) {
        if scene.is_title() {
            debug!("Title scene '{}'; save data not applied", scene.name);
            return;
        }
        match data.last_checkpoint_id.as_deref() {
            Some(id) => self.spawn_at_checkpoint_id(id),
            None => {
                let start = self.spawn_system.as_deref().map(SpawnSystem::start);
                self.spawn_at_checkpoint(start);
            }
        }
    }

    /// Resolve `target` to spawn data, falling back to the start checkpoint.
    fn resolve(&self, target: Option<Entity>) -> Option<SpawnPoint> {
        let Some(spawn_system) = self.spawn_system.as_deref() else {
            error!("SpawnSystem resource missing; spawn aborted");
            return None;
        };
        let start = spawn_system.start();

        let entity = match target {
            Some(entity) => entity,
            None => {
                warn!("Attempted to spawn at a null checkpoint. Defaulting to start checkpoint.");
                start
            }
        };

        let point = |entity: Entity| {
            self.checkpoints
                .get(entity)
                .ok()
                .map(|(checkpoint, transform)| SpawnPoint {
                    entity,
                    translation: transform.translation,
                    rotation: transform.rotation,
                    cam_key: checkpoint.cam_key.clone(),
                    area_max_distance: checkpoint.area_max_distance,
                })
        };

        point(entity).or_else(|| {
            if entity == start {
                error!("Start checkpoint {:?} no longer exists; spawn aborted", start);
                return None;
            }
            warn!("Entity {:?} is not a checkpoint. Defaulting to start checkpoint.", entity);
            let fallback = point(start);
            if fallback.is_none() {
                error!("Start checkpoint {:?} no longer exists; spawn aborted", start);
            }
            fallback
        })
    }
}

/// Observer: progress on [`CheckpointPassedEvent`].
pub fn checkpoint_passed_observer(trigger: On<CheckpointPassedEvent>, mut spawner: Spawner) {
    spawner.update_last_checkpoint(trigger.event().checkpoint);
}

/// Observer: respawn when the tether snaps.
pub fn max_distance_observer(_trigger: On<MaxDistanceReachedEvent>, mut spawner: Spawner) {
    spawner.respawn();
}

/// Observer: serve [`SpawnRequest`]s.
pub fn spawn_request_observer(trigger: On<SpawnRequest>, mut spawner: Spawner) {
    match trigger.event() {
        SpawnRequest::Last => spawner.spawn_at_last_checkpoint(),
        SpawnRequest::Checkpoint(target) => spawner.spawn_at_checkpoint(*target),
        SpawnRequest::Id(id) => spawner.spawn_at_checkpoint_id(id),
    }
}

/// Observer: write progress into the [`GameData`] resource.
pub fn save_game_observer(
    _trigger: On<SaveGameEvent>,
    spawner: Spawner,
    game_data: Option<ResMut<GameData>>,
) {
    let Some(mut game_data) = game_data else {
        warn!("GameData resource missing; nothing saved");
        return;
    };
    spawner.save_game(&mut game_data);
}

/// Observer: spawn from the [`GameData`] resource.
pub fn load_game_observer(
    _trigger: On<LoadGameEvent>,
    mut spawner: Spawner,
    game_data: Option<Res<GameData>>,
    scene: Option<Res<ActiveScene>>,
) {
    let (Some(game_data), Some(scene)) = (game_data.as_deref(), scene.as_deref()) else {
        warn!(
            "Resources missing in load_game_observer. game_data: {:?}, scene: {:?}",
            game_data.is_some(),
            scene.is_some()
        );
        return;
    };
    spawner.load_game(game_data, scene);
}
