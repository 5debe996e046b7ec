//! Fade update system.
//!
//! Advances the [`FadingEffect`](crate::resources::fadingeffect::FadingEffect)
//! queue by the frame delta from
//! [`WorldTime`](crate::resources::worldtime::WorldTime).
use bevy_ecs::prelude::*;

use crate::resources::fadingeffect::FadingEffect;
use crate::resources::worldtime::WorldTime;

pub fn fade_system(world_time: Res<WorldTime>, fade: Option<ResMut<FadingEffect>>) {
    let Some(mut fade) = fade else {
        return;
    };
    if fade.is_idle() {
        return;
    }
    fade.advance(world_time.delta);
}
