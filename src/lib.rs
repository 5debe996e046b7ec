//! Cat & Ghost gameplay library.
//!
//! Checkpoints, respawning and the services around them for a two-character
//! puzzle-platformer, built on `bevy_ecs`. The host game supplies rendering,
//! input and physics; this crate keeps track of progress and moves the
//! characters, cameras and screen fade when they need to respawn.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod savedata;
pub mod systems;
