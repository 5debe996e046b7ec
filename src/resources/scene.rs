//! Active scene resource.
//!
//! Scenes are numbered in build order. Scene 0 is the title/menu scene,
//! where save data must not move the characters around.

use bevy_ecs::prelude::Resource;

/// Build index of the title/menu scene.
pub const TITLE_SCENE_INDEX: usize = 0;

/// The scene currently loaded.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ActiveScene {
    pub index: usize,
    pub name: String,
}

impl ActiveScene {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    pub fn is_title(&self) -> bool {
        self.index == TITLE_SCENE_INDEX
    }
}
