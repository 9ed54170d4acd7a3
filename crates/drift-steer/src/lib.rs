//! `drift-steer` — turning intent into key presses.
//!
//! Behavior-tree leaves express movement as accumulated steering: a desired
//! force vector plus a rotation delta ([`Steering`]).  Once the tree has
//! run, the [`Actuator`] converts whatever accumulated into the discrete
//! input actions the wire protocol understands (thrust forward/backward,
//! turn left/right).  Both halves are pure math over the current player
//! record; neither touches the network.

pub mod actuator;
pub mod steering;


pub use actuator::{Actuator, DEFAULT_ROTATION_THRESHOLD};
pub use steering::Steering;
