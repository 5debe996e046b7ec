//! Save and load requests.
//!
//! Triggering [`SaveGameEvent`] writes the spawn progress into the
//! [`GameData`](crate::savedata::GameData) resource; [`LoadGameEvent`] reads
//! it back and spawns the characters accordingly. Writing the record to disk
//! is up to the caller (see [`GameData::save_to_file`](crate::savedata::GameData::save_to_file)).

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy)]
pub struct SaveGameEvent {}

#[derive(Event, Debug, Clone, Copy)]
pub struct LoadGameEvent {}
