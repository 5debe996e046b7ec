//! ECS components for entities.
//!
//! Submodules overview:
//! - [`character`] – tag telling the cat and the ghost apart
//! - [`checkpoint`] – authored level waypoint with camera key and tether radius
//! - [`falldamage`] – fall detection state and host-written ground contact
//! - [`health`] – hit points
//! - [`transform`] – world-space position and rotation

pub mod character;
pub mod checkpoint;
pub mod falldamage;
pub mod health;
pub mod transform;
