//! Tether distance event.

use bevy_ecs::prelude::*;

/// The characters drifted further apart than the tether allows.
///
/// Triggered by [`keep_in_range_system`](crate::systems::keepinrange::keep_in_range_system)
/// once per excursion; the latch is cleared by
/// [`KeepInRange::reset_values`](crate::resources::keepinrange::KeepInRange::reset_values).
#[derive(Event, Debug, Clone, Copy)]
pub struct MaxDistanceReachedEvent {}
