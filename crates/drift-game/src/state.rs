//! The per-tick world snapshot.

use drift_core::{PlayerId, Tick, Vec2};
use drift_map::Map;

use crate::player::Player;
use crate::settings::ArenaSettings;

/// Connection progress as reported by the network collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Disconnected,
    Connecting,
    Authenticating,
    MapDownload,
    /// Fully in the arena; the controller runs only in this state.
    Complete,
}

/// A capture flag on the playfield.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameFlag {
    pub id: u16,
    pub position: Vec2,
    /// Owning frequency, or `0xFFFF` when neutral.
    pub owner_frequency: u16,
}

impl GameFlag {
    pub const NEUTRAL: u16 = 0xFFFF;

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.owner_frequency == GameFlag::NEUTRAL
    }
}

/// A collectible prize.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Green {
    pub position: Vec2,
    pub prize: i32,
    pub end_tick: Tick,
}

/// Coherent world snapshot the collaborator refreshes every tick.
///
/// The core reads freely during its update; the collaborator must not
/// mutate it while the controller runs (single-threaded cooperative
/// scheduling makes this trivially true in-process).
#[derive(Default)]
pub struct GameState {
    pub map: Map,
    pub players: Vec<Player>,
    pub self_id: PlayerId,
    pub flags: Vec<GameFlag>,
    pub greens: Vec<Green>,
    /// Current protocol tick, wrap-aware.
    pub tick: Tick,
    pub settings: ArenaSettings,
    pub login_state: LoginState,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn self_player(&self) -> Option<&Player> {
        self.player(self.self_id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }
}
