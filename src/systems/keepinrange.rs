//! Tether distance system.
//!
//! Measures the distance between the cat and the ghost every frame and
//! triggers [`MaxDistanceReachedEvent`] when it exceeds
//! [`KeepInRange::max_distance`]. The event fires once per excursion: the
//! latch inside [`KeepInRange`] is re-armed by
//! [`KeepInRange::reset_values`], which the respawn sequence calls.

use bevy_ecs::prelude::*;

use crate::components::character::Character;
use crate::components::transform::Transform;
use crate::events::tether::MaxDistanceReachedEvent;
use crate::resources::keepinrange::KeepInRange;

pub fn keep_in_range_system(
    characters: Query<(&Character, &Transform)>,
    tether: Option<ResMut<KeepInRange>>,
    mut commands: Commands,
) {
    let Some(mut tether) = tether else {
        return;
    };

    let mut cat = None;
    let mut ghost = None;
    for (character, transform) in characters.iter() {
        match character {
            Character::Cat => cat = Some(transform.translation),
            Character::Ghost => ghost = Some(transform.translation),
        }
    }
    let (Some(cat), Some(ghost)) = (cat, ghost) else {
        return;
    };

    if tether.observe(cat.distance(ghost)) {
        log::info!(
            "Characters {} apart, max is {}",
            tether.last_distance,
            tether.max_distance
        );
        commands.trigger(MaxDistanceReachedEvent {});
    }
}
