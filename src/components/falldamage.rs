//! Fall damage tracking components.
//!
//! [`FallDamage`] keeps the per-entity state needed to detect a fall and
//! measure its height. [`GroundContact`] is written by the host physics
//! (typically from a short downward ray cast) and tells the
//! [`fall_damage_system`](crate::systems::falldamage::fall_damage_system)
//! when the entity has landed.
//!
//! Damage is `fall_height - fall_height_distance` and only applies when the
//! fall is higher than `fall_height_distance`.

use bevy_ecs::prelude::Component;

const DEFAULT_FALL_HEIGHT_DISTANCE: f32 = 2.0;

/// Fall detection state for an entity that can take fall damage.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FallDamage {
    /// Falls up to this height are harmless.
    pub fall_height_distance: f32,
    /// Height on the previous frame.
    pub previous_y: f32,
    /// Height recorded when the current fall started.
    pub last_y: f32,
    pub is_falling: bool,
}

impl Default for FallDamage {
    fn default() -> Self {
        Self::new(DEFAULT_FALL_HEIGHT_DISTANCE)
    }
}

impl FallDamage {
    pub fn new(fall_height_distance: f32) -> Self {
        Self {
            fall_height_distance,
            previous_y: 0.0,
            last_y: 0.0,
            is_falling: false,
        }
    }

    /// Builder: seed the height history so the first frame is not read as a fall.
    pub fn starting_at(mut self, y: f32) -> Self {
        self.previous_y = y;
        self.last_y = y;
        self
    }

    /// Damage for a fall of `height`, or `None` when under the threshold.
    pub fn damage_for(&self, height: f32) -> Option<f32> {
        (height > self.fall_height_distance).then(|| height - self.fall_height_distance)
    }
}

/// Whether the entity is touching the ground this frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContact(pub bool);
