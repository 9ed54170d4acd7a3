//! Player records as synchronized by the network layer.

use drift_core::{PlayerId, Vec2};

/// Ship value meaning "in the spectator list, not on the playfield".
pub const SPECTATOR_SHIP: u8 = 8;

/// Toggleable status bits mirrored from the wire protocol.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusFlag;

impl StatusFlag {
    pub const STEALTH: u8 = 1 << 0;
    pub const CLOAK: u8 = 1 << 1;
    pub const XRADAR: u8 = 1 << 2;
    pub const ANTIWARP: u8 = 1 << 3;
    pub const SAFETY: u8 = 1 << 5;
}

/// One player in the arena.  Fields are written by the network collaborator;
/// the core only reads them.
#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing angle in radians; `heading()` turns it into a unit vector.
    pub rotation: f32,

    /// Team id.
    pub frequency: u16,
    /// Ship class `0..=7`, or [`SPECTATOR_SHIP`].
    pub ship: u8,

    pub energy: f32,
    /// Seconds of respawn grace remaining; positive while dead.
    pub enter_delay: f32,
    pub bounty: u16,

    /// Bitset of [`StatusFlag`] values.
    pub togglables: u8,

    /// Carrier when riding as a turret; `PlayerId::INVALID` when detached.
    pub attach_parent: PlayerId,

    /// Whether a recent position packet has been received for this player.
    /// Unsynchronized players have stale coordinates and are ignored by
    /// targeting and the spatial index.
    pub synchronized: bool,
}

impl Player {
    /// A freshly-entered player with neutral state, used by collaborators
    /// and tests as a base to fill in.
    pub fn entering(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            frequency: 0,
            ship: SPECTATOR_SHIP,
            energy: 0.0,
            enter_delay: 0.0,
            bounty: 0,
            togglables: 0,
            attach_parent: PlayerId::INVALID,
            synchronized: false,
        }
    }

    /// Unit facing vector derived from `rotation`.
    #[inline]
    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.rotation.cos(), self.rotation.sin())
    }

    #[inline]
    pub fn is_spectator(&self) -> bool {
        self.ship >= SPECTATOR_SHIP
    }

    #[inline]
    pub fn is_respawning(&self) -> bool {
        self.enter_delay > 0.0
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attach_parent.is_valid()
    }

    #[inline]
    pub fn has_status(&self, flag: u8) -> bool {
        self.togglables & flag != 0
    }
}
