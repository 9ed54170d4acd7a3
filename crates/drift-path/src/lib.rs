//! `drift-path` — connectivity analysis and grid pathfinding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`region`]     | `RegionRegistry` — flood-filled connectivity classes  |
//! | [`node`]       | `Node` storage and ship-aware edge enumeration        |
//! | [`path`]       | `Path` — immutable point sequence with a cursor       |
//! | [`pathfinder`] | `Pathfinder` — map weights + A* driver                |
//!
//! # How the pieces fit
//!
//! The registry answers "is B reachable from A at this ship radius" in O(1),
//! letting the pathfinder reject impossible queries before touching the node
//! grid.  The node processor owns one lazy [`node::Node`] per tile and knows
//! which neighbor steps a ship footprint can actually make (including the
//! no-corner-cutting rule for diagonals).  The pathfinder runs A* over those
//! edges with weights that push paths away from walls and out of safe tiles.
//!
//! Everything here is rebuilt per map load / ship-radius change and queried
//! from the single controller thread; nothing blocks.

pub mod node;
pub mod path;
pub mod pathfinder;
pub mod region;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use node::{Node, NodeFlags, NodeProcessor};
pub use path::Path;
pub use pathfinder::Pathfinder;
pub use region::{RegionBuildEvent, RegionRegistry, RegionTileAddEvent};
