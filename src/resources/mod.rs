//! ECS resources made available to systems.
//!
//! Overview
//! - `checkpointregistry` – checkpoint id to entity lookup
//! - `fadingeffect` – queued screen fades
//! - `gameconfig` – gameplay tuning loaded from INI
//! - `keepinrange` – tether distance between the characters
//! - `levelcameras` – virtual cameras and blend settings
//! - `presentation` – presentation mode camera deck
//! - `scene` – the active scene
//! - `spawnsystem` – checkpoint progress and spawn configuration
//! - `worldtime` – simulation time and delta
pub mod checkpointregistry;
pub mod fadingeffect;
pub mod gameconfig;
pub mod keepinrange;
pub mod levelcameras;
pub mod presentation;
pub mod scene;
pub mod spawnsystem;
pub mod worldtime;
