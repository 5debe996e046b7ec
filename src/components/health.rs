//! Hit points for damageable entities.

use bevy_ecs::prelude::Component;

/// Current and maximum hit points.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount` (clamped at zero). Returns the damage actually applied.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        if amount <= 0.0 {
            return 0.0;
        }
        let applied = amount.min(self.current);
        self.current -= applied;
        applied
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}
