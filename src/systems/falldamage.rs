//! Fall damage system.
//!
//! Detects falls from the vertical position of entities carrying
//! [`FallDamage`] and applies damage on landing.
//!
//! # Flow
//!
//! Each frame, per entity:
//!
//! 1. Not falling and `y` dropped since last frame: start a fall and remember
//!    the height.
//! 2. Falling and [`GroundContact`] reports ground: the fall ends. If the
//!    height lost exceeds `fall_height_distance`, the excess is subtracted
//!    from [`Health`] and a [`DamageTakenEvent`] is triggered.
//! 3. `previous_y` is updated.
//!
//! Ground detection is left to the host physics, which writes
//! [`GroundContact`].

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::falldamage::{FallDamage, GroundContact};
use crate::components::health::Health;
use crate::components::transform::Transform;
use crate::events::damage::DamageTakenEvent;

pub fn fall_damage_system(
    mut query: Query<(
        Entity,
        &Transform,
        &GroundContact,
        &mut FallDamage,
        Option<&mut Health>,
    )>,
    mut commands: Commands,
) {
    for (entity, transform, ground, mut fall, health) in query.iter_mut() {
        let y = transform.translation.y;

        if fall.is_falling {
            if ground.0 {
                fall.is_falling = false;
                let height = fall.last_y - y;
                if let Some(damage) = fall.damage_for(height) {
                    debug!("{:?} fell {} units, {} damage", entity, height, damage);
                    if let Some(mut health) = health {
                        health.take_damage(damage);
                    }
                    commands.trigger(DamageTakenEvent {
                        entity,
                        amount: damage,
                    });
                }
            }
        } else if y < fall.previous_y {
            fall.is_falling = true;
            fall.last_y = y;
        }

        fall.previous_y = y;
    }
}
