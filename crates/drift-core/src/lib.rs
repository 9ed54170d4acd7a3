//! `drift-core` — foundational types for the `drift` bot framework.
//!
//! This crate is a dependency of every other `drift-*` crate.  It
//! intentionally has no `drift-*` dependencies and minimal external ones
//! (only `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`math`]   | `Vec2`, `Rect`, `Ray`, rotation and wrap helpers      |
//! | [`tick`]   | `Tick` — wrap-aware 31-bit protocol time              |
//! | [`ids`]    | `PlayerId`, `RegionId`                                |
//! | [`event`]  | `EventBus`, RAII `Subscription`                       |
//! | [`error`]  | `DriftError`, `DriftResult`                           |

pub mod error;
pub mod event;
pub mod ids;
pub mod math;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DriftError, DriftResult};
pub use event::{EventBus, Subscription};
pub use ids::{PlayerId, RegionId};
pub use math::{Ray, Rect, Vec2};
pub use tick::{Tick, make_tick};
