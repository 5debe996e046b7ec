//! Checkpoint progress events.
//!
//! The host triggers [`CheckpointPassedEvent`] when the characters cross a
//! checkpoint. The spawn system observes it, updates progress, and triggers
//! [`LastCheckpointReachedEvent`] the first time the final checkpoint of the
//! level is passed.

use bevy_ecs::prelude::*;

/// A checkpoint entity has been crossed.
#[derive(Event, Debug, Clone, Copy)]
pub struct CheckpointPassedEvent {
    /// The entity carrying the [`Checkpoint`](crate::components::checkpoint::Checkpoint).
    pub checkpoint: Entity,
}

/// The last checkpoint of the authored list has been passed.
///
/// Fired at most once per level. Observe it to run level completion logic.
#[derive(Event, Debug, Clone, Copy)]
pub struct LastCheckpointReachedEvent {}
