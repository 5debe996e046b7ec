//! Playable character tag.
//!
//! The game always has exactly two playable characters. The cat is the
//! primary one; the ghost is the secondary one. Systems that need to move,
//! measure or respawn "the pair" look them up through this component.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Which of the two playable characters an entity is.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    /// Primary character, spawned on the positive X side of a checkpoint.
    Cat,
    /// Secondary character, spawned on the negative X side of a checkpoint.
    Ghost,
}

impl Character {
    /// Sign applied to the lateral spawn offset for this character.
    pub fn spawn_side(self) -> f32 {
        match self {
            Character::Cat => 1.0,
            Character::Ghost => -1.0,
        }
    }
}
