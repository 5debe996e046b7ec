//! Presentation mode observer.
//!
//! Handles [`PresentationCommand`]s against the [`PresentationDeck`]:
//!
//! - `Next` / `Previous`: if the deck moved, close every level camera, open
//!   the new current one and trigger [`PresentationCameraOpenedEvent`].
//! - `Cue`: trigger [`PresentationCueEvent`] for the current camera.
//!
//! Commands against an empty or missing deck are ignored.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::events::presentation::{
    PresentationCameraOpenedEvent, PresentationCommand, PresentationCueEvent,
};
use crate::resources::levelcameras::LevelCameras;
use crate::resources::presentation::PresentationDeck;

pub fn presentation_observer(
    trigger: On<PresentationCommand>,
    deck: Option<ResMut<PresentationDeck>>,
    cameras: Option<ResMut<LevelCameras>>,
    mut commands: Commands,
) {
    let Some(mut deck) = deck else {
        debug!("No PresentationDeck; {:?} ignored", trigger.event());
        return;
    };

    let moved = match trigger.event() {
        PresentationCommand::Next => deck.next_camera(),
        PresentationCommand::Previous => deck.previous_camera(),
        PresentationCommand::Cue => {
            if let Some(key) = deck.current_key() {
                commands.trigger(PresentationCueEvent {
                    index: deck.current_index(),
                    key: key.to_string(),
                });
            }
            return;
        }
    };
    if !moved {
        return;
    }

    let Some(key) = deck.current_key().map(str::to_string) else {
        return;
    };
    match cameras {
        Some(mut cameras) => {
            cameras.close_all_cameras();
            cameras.open_camera(&key);
        }
        None => warn!("LevelCameras resource missing; presentation camera '{}' not opened", key),
    }
    commands.trigger(PresentationCameraOpenedEvent {
        index: deck.current_index(),
        key,
    });
}
