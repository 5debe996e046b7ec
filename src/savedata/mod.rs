//! Save game record.
//!
//! [`GameData`] is the persisted state of a play session. The spawn system
//! owns exactly one field of it, `last_checkpoint_id`; other subsystems keep
//! their own entries in `entries`. The record is kept in the world as a
//! resource and written to / read from disk as JSON.
//!
//! # File Format
//!
//! ```json
//! {
//!   "last_checkpoint_id": "bridge",
//!   "entries": { "keys": ["collected_bells"], "values": ["3"] }
//! }
//! ```

pub mod dictionary;

use bevy_ecs::prelude::Resource;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub use dictionary::SerializableDictionary;

/// Errors while reading or writing a save file.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("save file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Persisted play session state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    /// Checkpoint to resume from. `None` means the start checkpoint.
    #[serde(default)]
    pub last_checkpoint_id: Option<String>,
    /// Free-form entries owned by other subsystems.
    #[serde(default)]
    pub entries: SerializableDictionary<String, String>,
}

impl GameData {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let data = serde_json::from_str(&json)?;
        info!("Loaded save data from {:?}", path);
        Ok(data)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("Saved game data to {:?}", path);
        Ok(())
    }
}
