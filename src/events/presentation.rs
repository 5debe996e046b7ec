//! Presentation mode events.
//!
//! The host maps its own keys (or a remote clicker) to
//! [`PresentationCommand`]s. The
//! [`presentation_observer`](crate::systems::presentation::presentation_observer)
//! moves through the [`PresentationDeck`](crate::resources::presentation::PresentationDeck)
//! and reports what happened with the two output events.

use bevy_ecs::prelude::*;

/// Navigation request for the presentation deck.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationCommand {
    /// Advance to the next camera, unless already on the last one.
    Next,
    /// Go back to the previous camera, unless already on the first one.
    Previous,
    /// Fire the cue attached to the current camera.
    Cue,
}

/// A presentation camera became the open camera.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PresentationCameraOpenedEvent {
    pub index: usize,
    pub key: String,
}

/// The cue of the current presentation camera was requested.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct PresentationCueEvent {
    pub index: usize,
    pub key: String,
}
