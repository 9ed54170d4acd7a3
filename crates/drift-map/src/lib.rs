//! `drift-map` — the static playfield and every collision question asked of it.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`tile`]  | `TileId` constants and classification helpers              |
//! | [`map`]   | `Map` — solidity, footprint occupancy, traversal, raycast  |
//! | [`brick`] | `BrickMap` — temporary player-laid solid tiles             |
//!
//! # The footprint model
//!
//! Higher layers never reason about pixels.  A ship of radius `r` (in tiles)
//! occupies a `d×d` block of tiles with `d = ceil(2r)`; every occupancy
//! question reduces to "does a fully-empty `d×d` block exist that covers the
//! tiles in question".  See [`Map`] for the four query primitives the
//! pathfinder and region builder are built from.

pub mod brick;
pub mod map;
pub mod tile;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use brick::{Brick, BrickMap};
pub use map::{CastResult, FREQUENCY_ANY, MAP_DIM, Map, OccupyRect};
pub use tile::TileId;
