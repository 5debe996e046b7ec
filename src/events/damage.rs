//! Damage notification.

use bevy_ecs::prelude::*;

/// An entity lost hit points.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageTakenEvent {
    pub entity: Entity,
    pub amount: f32,
}
