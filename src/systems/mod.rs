//! Gameplay systems and observers.
//!
//! Submodules overview
//! - [`fade`] – advance the screen fade
//! - [`falldamage`] – detect falls and apply damage on landing
//! - [`keepinrange`] – measure the tether and signal when it snaps
//! - [`presentation`] – presentation mode navigation
//! - [`spawn`] – checkpoint progress, spawning and save/load
//! - [`time`] – frame clock

pub mod fade;
pub mod falldamage;
pub mod keepinrange;
pub mod presentation;
pub mod spawn;
pub mod time;
