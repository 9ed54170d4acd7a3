//! `drift-bot` — the autonomous controller.
//!
//! This crate assembles the framework into a playing bot:
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`nodes`]      | The reusable behavior-node library                     |
//! | [`controller`] | Per-tick driver: rebuilds, tree execution, actuation   |
//! | [`bot`]        | `Bot` — owns the bus and queues, runs the tick loop    |
//! | [`zones`]      | `Zone` ids, `ZoneController` trait, reference zones    |
//! | [`config`]     | JSON configuration (login, servers, per-zone sections) |
//!
//! Per tick the controller: clears the input frame, rebuilds the region
//! registry and map weights when the map or the active ship radius changed,
//! rebuilds the KD partition, decays the influence field, resets steering,
//! seeds per-tick blackboard keys, executes the active behavior tree, and
//! actuates the accumulated steering into the input frame.  The run loop
//! then hands the frame and the chat/command queues to the client.

pub mod bot;
pub mod config;
pub mod controller;
pub mod nodes;
pub mod zones;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bot::Bot;
pub use config::{Config, ServerConfig, ZoneConfig};
pub use controller::Controller;
pub use zones::{BehaviorChangeEvent, JoinRequestEvent, Zone, ZoneController, ZoneDispatcher};
