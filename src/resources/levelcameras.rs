//! Level virtual camera manager.
//!
//! A level is split into areas, each watched by its own virtual camera
//! identified by a string key. Exactly one camera is normally open; the
//! renderer follows whichever is. Checkpoints name the camera to open when
//! the characters spawn there.
//!
//! Switching cameras can be blended. [`BlendSettings`] holds per-pair
//! overrides (with `*` matching any camera) on top of a default duration;
//! every [`LevelCameras::open_camera`] records the resulting
//! [`ActiveBlend`] for the renderer to play back.

use bevy_ecs::prelude::Resource;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Key that matches any camera in a [`CustomBlend`] rule.
pub const ANY_CAMERA: &str = "*";

/// One blend override between two cameras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomBlend {
    pub from: String,
    pub to: String,
    /// Seconds. Zero means a hard cut.
    pub duration: f32,
}

/// Blend durations used when switching cameras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BlendSettings {
    pub default_duration: f32,
    #[serde(default)]
    pub custom: Vec<CustomBlend>,
}

impl BlendSettings {
    /// Duration for a switch from `from` to `to`.
    ///
    /// Exact matches win over wildcard matches; among equally specific rules
    /// the first one listed wins. Without a match the default applies.
    pub fn blend_duration(&self, from: &str, to: &str) -> f32 {
        let score = |rule: &CustomBlend| -> Option<u8> {
            let from_ok = rule.from == from || rule.from == ANY_CAMERA;
            let to_ok = rule.to == to || rule.to == ANY_CAMERA;
            (from_ok && to_ok).then(|| (rule.from == from) as u8 + (rule.to == to) as u8)
        };
        let mut best: Option<(u8, f32)> = None;
        for rule in &self.custom {
            if let Some(s) = score(rule) {
                if best.is_none_or(|(b, _)| s > b) {
                    best = Some((s, rule.duration));
                }
            }
        }
        best.map(|(_, d)| d).unwrap_or(self.default_duration)
    }
}

/// The most recent camera switch.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveBlend {
    /// Previously active camera, `None` on the first switch.
    pub from: Option<String>,
    pub to: String,
    pub duration: f32,
}

/// Open/closed state of the level's virtual cameras.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelCameras {
    cameras: Vec<(String, bool)>,
    active: Option<String>,
    custom_blends: Option<BlendSettings>,
    last_blend: Option<ActiveBlend>,
}

impl LevelCameras {
    /// Register the given camera keys, all closed.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cameras: keys.into_iter().map(|k| (k.into(), false)).collect(),
            ..Default::default()
        }
    }

    /// Add a camera if the key is not known yet.
    pub fn register(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.cameras.iter().any(|(k, _)| *k == key) {
            self.cameras.push((key, false));
        }
    }

    pub fn close_all_cameras(&mut self) {
        for (_, open) in self.cameras.iter_mut() {
            *open = false;
        }
    }

    /// Open the camera registered under `key`.
    ///
    /// Unknown keys are logged and leave the cameras untouched.
    pub fn open_camera(&mut self, key: &str) -> bool {
        let Some((_, open)) = self.cameras.iter_mut().find(|(k, _)| k == key) else {
            warn!("Camera '{}' is not registered in this level", key);
            return false;
        };
        *open = true;

        let from = self.active.replace(key.to_string());
        let duration = match (&self.custom_blends, &from) {
            (Some(blends), Some(from)) => blends.blend_duration(from, key),
            (Some(blends), None) => blends.blend_duration(ANY_CAMERA, key),
            (None, _) => 0.0,
        };
        debug!("Opening camera '{}' from {:?} (blend {}s)", key, from, duration);
        self.last_blend = Some(ActiveBlend {
            from,
            to: key.to_string(),
            duration,
        });
        true
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.cameras.iter().any(|(k, open)| k == key && *open)
    }

    /// Keys of all currently open cameras.
    pub fn open_cameras(&self) -> impl Iterator<Item = &str> {
        self.cameras
            .iter()
            .filter(|(_, open)| *open)
            .map(|(k, _)| k.as_str())
    }

    /// The camera most recently opened.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Replace the custom blend settings used for subsequent switches.
    pub fn change_custom_blend(&mut self, settings: BlendSettings) {
        self.custom_blends = Some(settings);
    }

    pub fn last_blend(&self) -> Option<&ActiveBlend> {
        self.last_blend.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blends() -> BlendSettings {
        BlendSettings {
            default_duration: 1.0,
            custom: vec![
                CustomBlend {
                    from: ANY_CAMERA.into(),
                    to: "cave".into(),
                    duration: 0.25,
                },
                CustomBlend {
                    from: "forest".into(),
                    to: "cave".into(),
                    duration: 0.0,
                },
            ],
        }
    }

    #[test]
    fn open_camera_closes_nothing_else_by_itself() {
        let mut cameras = LevelCameras::new(["forest", "cave"]);
        assert!(cameras.open_camera("forest"));
        assert!(cameras.open_camera("cave"));
        assert_eq!(cameras.open_cameras().count(), 2);

        cameras.close_all_cameras();
        assert_eq!(cameras.open_cameras().count(), 0);
        assert_eq!(cameras.active(), Some("cave"));
    }

    #[test]
    fn unknown_camera_is_ignored() {
        let mut cameras = LevelCameras::new(["forest"]);
        assert!(!cameras.open_camera("desert"));
        assert!(!cameras.is_open("desert"));
        assert_eq!(cameras.active(), None);
    }

    #[test]
    fn exact_blend_beats_wildcard() {
        let settings = blends();
        assert_eq!(settings.blend_duration("forest", "cave"), 0.0);
        assert_eq!(settings.blend_duration("lake", "cave"), 0.25);
        assert_eq!(settings.blend_duration("cave", "forest"), 1.0);
    }

    #[test]
    fn open_camera_records_blend() {
        let mut cameras = LevelCameras::new(["forest", "cave"]);
        cameras.change_custom_blend(blends());
        cameras.open_camera("forest");
        cameras.open_camera("cave");

        let blend = cameras.last_blend().unwrap();
        assert_eq!(blend.from.as_deref(), Some("forest"));
        assert_eq!(blend.to, "cave");
        assert_eq!(blend.duration, 0.0);
    }

    #[test]
    fn register_skips_known_keys() {
        let mut cameras = LevelCameras::new(["forest"]);
        cameras.register("forest");
        cameras.register("cave");
        assert!(cameras.open_camera("cave"));
        cameras.close_all_cameras();
        assert_eq!(cameras.open_cameras().count(), 0);
    }
}
