//! Frame clock.
//!
//! The host calls [`advance_world_time`] once per frame, before running the
//! update schedule, with the unscaled frame delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Apply `time_scale` to `dt`, accumulate it, and count the frame.
///
/// Returns the scaled delta written to [`WorldTime::delta`].
pub fn advance_world_time(world: &mut World, dt: f32) -> f32 {
    let mut clock = world.resource_mut::<WorldTime>();
    clock.delta = dt * clock.time_scale;
    clock.elapsed += clock.delta;
    clock.frame_count += 1;
    clock.delta
}
