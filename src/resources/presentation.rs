//! Presentation camera deck.
//!
//! Presentation mode walks through a fixed list of cameras like slides.
//! [`PresentationDeck`] only tracks the position; the
//! [`presentation_observer`](crate::systems::presentation::presentation_observer)
//! opens the cameras and emits the events.

use bevy_ecs::prelude::Resource;

/// Ordered presentation cameras and the current position.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationDeck {
    cameras: Vec<String>,
    current: usize,
}

impl PresentationDeck {
    pub fn new<I, S>(cameras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cameras: cameras.into_iter().map(Into::into).collect(),
            current: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Key of the current camera, `None` for an empty deck.
    pub fn current_key(&self) -> Option<&str> {
        self.cameras.get(self.current).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Move forward. Returns `false` when already on the last camera.
    pub fn next_camera(&mut self) -> bool {
        if self.current + 1 < self.cameras.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move back. Returns `false` when already on the first camera.
    pub fn previous_camera(&mut self) -> bool {
        if self.current > 0 && self.current <= self.cameras.len() {
            self.current -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        let mut deck = PresentationDeck::new(["intro", "level", "outro"]);
        assert!(!deck.previous_camera());
        assert!(deck.next_camera());
        assert!(deck.next_camera());
        assert!(!deck.next_camera());
        assert_eq!(deck.current_key(), Some("outro"));
        assert!(deck.previous_camera());
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn empty_deck_never_moves() {
        let mut deck = PresentationDeck::default();
        assert!(!deck.next_camera());
        assert!(!deck.previous_camera());
        assert_eq!(deck.current_key(), None);
    }
}
