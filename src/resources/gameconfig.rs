//! Game configuration resource.
//!
//! Manages gameplay tuning loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [spawn]
//! player_offset = 1
//!
//! [tether]
//! default_max_distance = 8
//!
//! [fade]
//! duration = 0.5
//! curve = quad_in_out
//!
//! [falldamage]
//! height_distance = 2
//!
//! [save]
//! path = ./savegame.json
//!
//! [time]
//! frame_delta = 0.016
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::fadingeffect::FadeCurve;

/// Default safe values for startup
const DEFAULT_PLAYER_OFFSET: f32 = 1.0;
const DEFAULT_TETHER_DISTANCE: f32 = 8.0;
const DEFAULT_FADE_DURATION: f32 = 0.5;
const DEFAULT_FALL_HEIGHT_DISTANCE: f32 = 2.0;
const DEFAULT_FRAME_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_SAVE_PATH: &str = "./savegame.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Lateral distance between a checkpoint and each spawned character.
    pub player_offset: f32,
    /// Tether distance used until the first checkpoint sets its own.
    pub default_max_distance: f32,
    /// Seconds per fade step.
    pub fade_duration: f32,
    /// Easing of each fade step.
    pub fade_curve: FadeCurve,
    /// Falls up to this height are harmless.
    pub fall_height_distance: f32,
    /// Fixed simulation step used by the headless runner.
    pub frame_delta: f32,
    /// Where the save record is written.
    pub save_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            player_offset: DEFAULT_PLAYER_OFFSET,
            default_max_distance: DEFAULT_TETHER_DISTANCE,
            fade_duration: DEFAULT_FADE_DURATION,
            fade_curve: FadeCurve::default(),
            fall_height_distance: DEFAULT_FALL_HEIGHT_DISTANCE,
            frame_delta: DEFAULT_FRAME_DELTA,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();

        // [spawn] section
        if let Some(offset) = float("spawn", "player_offset") {
            self.player_offset = offset as f32;
        }

        // [tether] section
        if let Some(distance) = float("tether", "default_max_distance") {
            self.default_max_distance = distance as f32;
        }

        // [fade] section
        if let Some(duration) = float("fade", "duration") {
            self.fade_duration = duration as f32;
        }

        if let Some(name) = config.get("fade", "curve") {
            match FadeCurve::from_name(&name) {
                Some(curve) => self.fade_curve = curve,
                None => warn!("Unknown fade curve '{}'; keeping {}", name, self.fade_curve.name()),
            }
        }

        // [falldamage] section
        if let Some(height) = float("falldamage", "height_distance") {
            self.fall_height_distance = height as f32;
        }

        // [time] section
        if let Some(delta) = float("time", "frame_delta") {
            self.frame_delta = delta as f32;
        }

        // [save] section
        if let Some(path) = config.get("save", "path") {
            self.save_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: offset={}, tether={}, fade={}s {}, fall={}, dt={}, save={:?}",
            self.player_offset,
            self.default_max_distance,
            self.fade_duration,
            self.fade_curve.name(),
            self.fall_height_distance,
            self.frame_delta,
            self.save_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("spawn", "player_offset", Some(self.player_offset.to_string()));
        config.set(
            "tether",
            "default_max_distance",
            Some(self.default_max_distance.to_string()),
        );
        config.set("fade", "duration", Some(self.fade_duration.to_string()));
        config.set("fade", "curve", Some(self.fade_curve.name().to_string()));
        config.set(
            "falldamage",
            "height_distance",
            Some(self.fall_height_distance.to_string()),
        );
        config.set("time", "frame_delta", Some(self.frame_delta.to_string()));
        config.set(
            "save",
            "path",
            Some(self.save_path.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("/nonexistent/catghost/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.player_offset, DEFAULT_PLAYER_OFFSET);
        assert_eq!(config.save_path, PathBuf::from(DEFAULT_SAVE_PATH));
    }

    #[test]
    fn partial_file_overrides_present_keys_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[spawn]\nplayer_offset = 2.5\n\n[fade]\nduration = 1\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.player_offset, 2.5);
        assert_eq!(config.fade_duration, 1.0);
        assert_eq!(config.default_max_distance, DEFAULT_TETHER_DISTANCE);
        assert_eq!(config.fade_curve, FadeCurve::Linear);
    }

    #[test]
    fn fade_curve_is_read_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[fade]\ncurve = quad_in\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.fade_curve, FadeCurve::QuadIn);

        std::fs::write(&path, "[fade]\ncurve = wobble\n").unwrap();
        config.load_from_file().unwrap();
        assert_eq!(config.fade_curve, FadeCurve::QuadIn);
    }

    #[test]
    fn save_then_load_restores_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut written = GameConfig::with_path(&path);
        written.player_offset = 3.0;
        written.default_max_distance = 12.0;
        written.fade_curve = FadeCurve::QuadOut;
        written.save_path = dir.path().join("slot1.json");
        written.save_to_file().unwrap();

        let mut read = GameConfig::with_path(&path);
        read.load_from_file().unwrap();
        assert_eq!(read, written);
    }
}
