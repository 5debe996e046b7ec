//! World-space pose component.
//!
//! [`Transform`] stores an entity's translation and rotation in 3D. It is
//! used both for checkpoints (where a character spawns and which way it
//! faces) and for the playable characters themselves.

use bevy_ecs::prelude::Component;
use glam::{Quat, Vec3};

/// Position and orientation of an entity in world space.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a transform at `translation` with no rotation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Builder: replace the rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Overwrite both position and rotation in one call.
    pub fn set_position_and_rotation(&mut self, translation: Vec3, rotation: Quat) {
        self.translation = translation;
        self.rotation = rotation;
    }
}
