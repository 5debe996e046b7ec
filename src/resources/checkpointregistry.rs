//! Checkpoint id lookup.
//!
//! [`CheckpointRegistry`] maps checkpoint ids to their entities so that save
//! data and spawn requests can refer to checkpoints by name. It is built once
//! from the authored checkpoint order and never changes afterwards.
//!
//! Duplicate ids are not an error: the first checkpoint registered under an
//! id keeps it, later ones are dropped with a warning and remembered in
//! [`CheckpointRegistry::duplicates`].

use bevy_ecs::prelude::Entity;
use log::warn;
use rustc_hash::FxHashMap;

/// Read-only `id -> Entity` map for the level's checkpoints.
#[derive(Debug, Clone, Default)]
pub struct CheckpointRegistry {
    by_id: FxHashMap<String, Entity>,
    duplicates: Vec<(String, Entity)>,
}

impl CheckpointRegistry {
    /// Build the registry from `(id, entity)` pairs in authored order.
    pub fn build<'a>(entries: impl IntoIterator<Item = (&'a str, Entity)>) -> Self {
        let mut registry = Self::default();
        for (id, entity) in entries {
            if registry.by_id.contains_key(id) {
                warn!(
                    "Duplicate checkpoint id detected: {}. Checkpoint {:?} was not added to the registry.",
                    id, entity
                );
                registry.duplicates.push((id.to_string(), entity));
            } else {
                registry.by_id.insert(id.to_string(), entity);
            }
        }
        registry
    }

    /// Find the checkpoint registered under `id`.
    pub fn lookup(&self, id: &str) -> Option<Entity> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Entries dropped because their id was already taken, in encounter order.
    pub fn duplicates(&self) -> &[(String, Entity)] {
        &self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    fn entities<const N: usize>() -> [Entity; N] {
        let mut world = World::new();
        std::array::from_fn(|_| world.spawn_empty().id())
    }

    #[test]
    fn lookup_finds_every_unique_id() {
        let [a, b, c] = entities();
        let registry = CheckpointRegistry::build([("a", a), ("b", b), ("c", c)]);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.lookup("a"), Some(a));
        assert_eq!(registry.lookup("b"), Some(b));
        assert_eq!(registry.lookup("c"), Some(c));
        assert!(registry.duplicates().is_empty());
    }

    #[test]
    fn first_registered_wins_on_duplicate() {
        let [first, second, third] = entities();
        let registry = CheckpointRegistry::build([("a", first), ("a", second), ("a", third)]);

        assert_eq!(registry.lookup("a"), Some(first));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.duplicates(),
            &[("a".to_string(), second), ("a".to_string(), third)]
        );
    }

    #[test]
    fn unknown_id_is_a_miss() {
        let [a] = entities();
        let registry = CheckpointRegistry::build([("a", a)]);
        assert_eq!(registry.lookup("nope"), None);
    }
}
