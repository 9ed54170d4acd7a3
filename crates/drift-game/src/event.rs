//! Game event types dispatched through the [`drift_core::EventBus`].
//!
//! Events carry owned data (ids, copies) rather than references so they can
//! cross the `'static` bound of the bus; handlers re-resolve ids against the
//! current `GameState` when they need live records.

use drift_core::{PlayerId, Vec2};
use drift_map::Brick;

use crate::chat::ChatKind;

/// The connection entered the arena and the first snapshot is coherent.
pub struct JoinGameEvent;

/// The map finished loading (or reloading) into `GameState::map`.
pub struct MapLoadEvent;

/// The server told us which arena we landed in.
pub struct ArenaNameEvent {
    pub name: String,
}

/// Our own ship (re)spawned.
pub struct SpawnEvent {
    pub player: PlayerId,
}

pub struct PlayerEnterEvent {
    pub player: PlayerId,
}

pub struct PlayerLeaveEvent {
    pub player: PlayerId,
}

pub struct PlayerDeathEvent {
    pub player: PlayerId,
    pub killer: PlayerId,
    /// Where the kill happened — threat heuristics deposit here.
    pub position: Vec2,
    pub bounty: u16,
}

/// An inbound chat line.
pub struct ChatEvent {
    pub kind: ChatKind,
    pub sender: String,
    pub message: String,
}

/// A brick was laid.
pub struct BrickTileEvent {
    pub brick: Brick,
}

/// A brick expired or was cleared.
pub struct BrickTileClearEvent {
    pub brick: Brick,
}

/// The connection is going away; the run loop tears down after this.
pub struct DisconnectEvent;
