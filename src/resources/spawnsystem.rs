//! Checkpoint progress and spawn configuration.
//!
//! [`SpawnSystem`] is the state half of the checkpoint/respawn coordinator.
//! It owns the authored checkpoint order, the start checkpoint, the lateral
//! offset used to place the two characters side by side, the id registry,
//! and the progress made so far. Checkpoint entities themselves are owned by
//! the level; this resource only refers to them.
//!
//! The behaviour half (spawning, respawning, save/load) lives in
//! [`crate::systems::spawn::Spawner`], which combines this resource with the
//! collaborators it drives.
//!
//! # Lifecycle
//!
//! 1. Insert a `SpawnSystem` built from the level's ordered checkpoints.
//! 2. [`enable_spawn_system`](crate::game::enable_spawn_system) builds the
//!    registry (once), resets progress to the start checkpoint and registers
//!    the observers.
//! 3. [`disable_spawn_system`](crate::game::disable_spawn_system) removes the
//!    observers again.

use bevy_ecs::prelude::*;
use log::debug;
use thiserror::Error;

use crate::resources::checkpointregistry::CheckpointRegistry;

/// Errors raised while wiring a level's spawn system.
#[derive(Debug, Error, PartialEq)]
pub enum SpawnError {
    #[error("level has no checkpoints")]
    NoCheckpoints,
    #[error("start checkpoint {0:?} is not one of the level's checkpoints")]
    UnknownStart(Entity),
    #[error("start checkpoint id '{0}' does not exist in the level")]
    UnknownStartId(String),
    #[error(
        "checkpoint '{id}' allows {area_max_distance} between the characters but they spawn {required} apart"
    )]
    AreaTooSmall {
        id: String,
        area_max_distance: f32,
        required: f32,
    },
    #[error("no SpawnSystem resource in the world")]
    MissingSpawnSystem,
}

/// Checkpoint progress and spawn configuration for the current level.
#[derive(Resource, Debug)]
pub struct SpawnSystem {
    checkpoints: Vec<Entity>,
    start: Entity,
    player_offset: f32,
    registry: Option<CheckpointRegistry>,
    last_reached: Option<Entity>,
    history: Vec<Entity>,
    listeners: Vec<Entity>,
}

impl SpawnSystem {
    /// Create the spawn system for `checkpoints`, listed in level order.
    ///
    /// The first checkpoint is the start checkpoint unless
    /// [`with_start`](Self::with_start) designates another one.
    pub fn new(checkpoints: Vec<Entity>, player_offset: f32) -> Result<Self, SpawnError> {
        let start = *checkpoints.first().ok_or(SpawnError::NoCheckpoints)?;
        Ok(Self {
            checkpoints,
            start,
            player_offset,
            registry: None,
            last_reached: None,
            history: Vec::new(),
            listeners: Vec::new(),
        })
    }

    /// Builder: designate the start checkpoint.
    pub fn with_start(mut self, start: Entity) -> Result<Self, SpawnError> {
        if !self.checkpoints.contains(&start) {
            return Err(SpawnError::UnknownStart(start));
        }
        self.start = start;
        Ok(self)
    }

    /// Checkpoints in authored order.
    pub fn checkpoints(&self) -> &[Entity] {
        &self.checkpoints
    }

    pub fn start(&self) -> Entity {
        self.start
    }

    pub fn player_offset(&self) -> f32 {
        self.player_offset
    }

    pub fn last_reached(&self) -> Option<Entity> {
        self.last_reached
    }

    /// Checkpoints accepted as passed, in the order they were passed.
    pub fn history(&self) -> &[Entity] {
        &self.history
    }

    /// Whether `checkpoint` is the final entry of the authored order.
    pub fn is_final(&self, checkpoint: Entity) -> bool {
        self.checkpoints.last() == Some(&checkpoint)
    }

    /// The id registry, once [`ensure_registry`](Self::ensure_registry) has run.
    pub fn registry(&self) -> Option<&CheckpointRegistry> {
        self.registry.as_ref()
    }

    /// Build the id registry on first use. `id_of` resolves a checkpoint
    /// entity to its id; entities it cannot resolve are skipped.
    pub fn ensure_registry<F>(&mut self, mut id_of: F) -> &CheckpointRegistry
    where
        F: FnMut(Entity) -> Option<String>,
    {
        if self.registry.is_none() {
            let ids: Vec<(String, Entity)> = self
                .checkpoints
                .iter()
                .filter_map(|&entity| id_of(entity).map(|id| (id, entity)))
                .collect();
            let registry =
                CheckpointRegistry::build(ids.iter().map(|(id, entity)| (id.as_str(), *entity)));
            debug!("Checkpoint registry built with {} entries", registry.len());
            self.registry = Some(registry);
        }
        self.registry.get_or_insert_with(CheckpointRegistry::default)
    }

    /// Resolve a checkpoint id. Misses (or a registry that was never built)
    /// return `None`.
    pub fn lookup(&self, id: &str) -> Option<Entity> {
        self.registry.as_ref().and_then(|registry| registry.lookup(id))
    }

    /// Reset progress to the start checkpoint.
    pub fn reset_progress(&mut self) {
        self.last_reached = Some(self.start);
    }

    /// Record `checkpoint` as the last one reached.
    pub fn record_reached(&mut self, checkpoint: Entity) {
        self.last_reached = Some(checkpoint);
        self.history.push(checkpoint);
    }

    pub fn is_active(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub(crate) fn set_listeners(&mut self, listeners: Vec<Entity>) {
        self.listeners = listeners;
    }

    pub(crate) fn take_listeners(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.listeners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities<const N: usize>() -> [Entity; N] {
        let mut world = World::new();
        std::array::from_fn(|_| world.spawn_empty().id())
    }

    #[test]
    fn empty_level_is_rejected() {
        assert_eq!(
            SpawnSystem::new(Vec::new(), 1.0).unwrap_err(),
            SpawnError::NoCheckpoints
        );
    }

    #[test]
    fn start_defaults_to_first_checkpoint() {
        let [a, b] = entities();
        let spawn = SpawnSystem::new(vec![a, b], 1.0).unwrap();
        assert_eq!(spawn.start(), a);
        assert_eq!(spawn.last_reached(), None);
    }

    #[test]
    fn designated_start_must_belong_to_level() {
        let [a, b, stray] = entities();
        let spawn = SpawnSystem::new(vec![a, b], 1.0).unwrap().with_start(b).unwrap();
        assert_eq!(spawn.start(), b);

        let err = SpawnSystem::new(vec![a, b], 1.0)
            .unwrap()
            .with_start(stray)
            .unwrap_err();
        assert_eq!(err, SpawnError::UnknownStart(stray));
    }

    #[test]
    fn final_checkpoint_is_compared_by_identity() {
        let [a, b, c] = entities();
        let spawn = SpawnSystem::new(vec![a, b, c], 1.0).unwrap();
        assert!(spawn.is_final(c));
        assert!(!spawn.is_final(a));
    }

    #[test]
    fn registry_is_built_once() {
        let [a, b] = entities();
        let mut spawn = SpawnSystem::new(vec![a, b], 1.0).unwrap();
        assert_eq!(spawn.lookup("a"), None);

        spawn.ensure_registry(|e| Some(if e == a { "a".into() } else { "b".into() }));
        assert_eq!(spawn.lookup("b"), Some(b));

        // A second call does not rebuild with the new resolver.
        spawn.ensure_registry(|_| Some("other".into()));
        assert_eq!(spawn.lookup("a"), Some(a));
        assert_eq!(spawn.lookup("other"), None);
    }

    #[test]
    fn record_reached_appends_history() {
        let [a, b, c] = entities();
        let mut spawn = SpawnSystem::new(vec![a, b, c], 1.0).unwrap();
        spawn.reset_progress();
        assert_eq!(spawn.last_reached(), Some(a));

        spawn.record_reached(b);
        spawn.record_reached(c);
        assert_eq!(spawn.last_reached(), Some(c));
        assert_eq!(spawn.history(), &[b, c]);
    }
}
