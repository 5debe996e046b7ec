//! Spawn request event.
//!
//! Lets hosts and scripts move the characters to a checkpoint without
//! holding a [`Spawner`](crate::systems::spawn::Spawner) themselves.
//!
//! ```ignore
//! commands.trigger(SpawnRequest::Id("bridge".into()));
//! ```

use bevy_ecs::prelude::*;

/// Where to put the characters.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum SpawnRequest {
    /// The last checkpoint reached.
    Last,
    /// A checkpoint entity. `None` resolves to the start checkpoint.
    Checkpoint(Option<Entity>),
    /// A checkpoint by its string id. Unknown ids resolve to the start checkpoint.
    Id(String),
}
