//! Event types exchanged between the host, systems and observers.
//!
//! Submodules:
//! - [`checkpoint`] – checkpoint passed (input) and level completed (output)
//! - [`damage`] – damage notifications
//! - [`presentation`] – presentation mode commands and notifications
//! - [`savegame`] – save/load requests
//! - [`spawn`] – explicit spawn requests
//! - [`tether`] – the characters drifted too far apart
pub mod checkpoint;
pub mod damage;
pub mod presentation;
pub mod savegame;
pub mod spawn;
pub mod tether;
