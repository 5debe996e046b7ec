//! Tether distance service.
//!
//! The cat and the ghost must stay within a maximum distance of each other.
//! The allowed distance depends on the area of the level: every checkpoint
//! carries its own `area_max_distance`, applied through
//! [`KeepInRange::change_max_distance`] when it is passed or spawned at.
//!
//! [`keep_in_range_system`](crate::systems::keepinrange::keep_in_range_system)
//! measures the distance each frame and triggers
//! [`MaxDistanceReachedEvent`](crate::events::tether::MaxDistanceReachedEvent)
//! when it is exceeded.

use bevy_ecs::prelude::Resource;
use log::debug;

/// Tether state between the two playable characters.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KeepInRange {
    /// Current allowed separation.
    pub max_distance: f32,
    /// Separation restored when the level starts.
    pub default_max_distance: f32,
    /// Distance measured on the last frame.
    pub last_distance: f32,
    /// Latched once the max distance is exceeded, until [`reset_values`](Self::reset_values).
    pub exceeded: bool,
}

impl KeepInRange {
    pub fn new(max_distance: f32) -> Self {
        Self {
            max_distance,
            default_max_distance: max_distance,
            last_distance: 0.0,
            exceeded: false,
        }
    }

    pub fn change_max_distance(&mut self, max_distance: f32) {
        debug!("Tether max distance {} -> {}", self.max_distance, max_distance);
        self.max_distance = max_distance;
    }

    /// Clear the measurement and re-arm the exceeded latch.
    pub fn reset_values(&mut self) {
        self.last_distance = 0.0;
        self.exceeded = false;
    }

    /// Record a measurement. Returns `true` only on the frame the limit is
    /// first exceeded.
    pub fn observe(&mut self, distance: f32) -> bool {
        self.last_distance = distance;
        if self.exceeded || distance <= self.max_distance {
            return false;
        }
        self.exceeded = true;
        true
    }
}
