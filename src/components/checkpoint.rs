//! Level checkpoint component.
//!
//! A [`Checkpoint`] is an authored waypoint in a level. When both characters
//! cross it the host fires a
//! [`CheckpointPassedEvent`](crate::events::checkpoint::CheckpointPassedEvent)
//! and the spawn system remembers it as the place to respawn from.
//!
//! The checkpoint pose lives in a sibling
//! [`Transform`](crate::components::transform::Transform) on the same entity.
//! The entity itself is the checkpoint identity; the string `id` is only
//! used for save data and lookups by name.
//!
//! # Related
//!
//! - [`crate::resources::spawnsystem::SpawnSystem`] – progress and spawn state
//! - [`crate::systems::spawn::Spawner`] – operations that read checkpoints

use bevy_ecs::prelude::Component;

/// An authored level waypoint.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Checkpoint {
    /// Unique identifier, persisted in save data.
    pub id: String,
    /// Key of the level camera to open when spawning here.
    pub cam_key: String,
    /// Maximum tether distance between the characters in this area.
    pub area_max_distance: f32,
    /// Set once the characters have crossed this checkpoint.
    pub passed: bool,
}

impl Checkpoint {
    pub fn new(id: impl Into<String>, cam_key: impl Into<String>, area_max_distance: f32) -> Self {
        Self {
            id: id.into(),
            cam_key: cam_key.into(),
            area_max_distance,
            passed: false,
        }
    }
}
