//! `drift-sense` — spatial awareness structures the controller refreshes
//! each tick.
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`kd`]        | `KdTree` — one-tick KD partition over live players  |
//! | [`influence`] | `InfluenceMap` — decaying threat/territory field    |

pub mod influence;
pub mod kd;


pub use influence::InfluenceMap;
pub use kd::{KdNode, KdTree};
