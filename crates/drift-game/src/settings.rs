//! Arena settings delivered by the server at login.
//!
//! The wire format carries speeds in pixels per 10 ms and radii in pixels;
//! the network layer converts to tile units (16 px = 1 tile) before filling
//! these structs so the core never sees protocol units.

/// Per-ship tuning, tile units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShipSettings {
    /// Collision radius in tiles.
    pub radius: f32,
    /// Top thrust speed, tiles/second.
    pub max_speed: f32,
    /// Bullet muzzle speed, tiles/second.
    pub bullet_speed: f32,
    /// Bomb muzzle speed, tiles/second.
    pub bomb_speed: f32,
}

impl Default for ShipSettings {
    fn default() -> Self {
        Self {
            radius: 14.0 / 16.0,
            max_speed: 18.75,
            bullet_speed: 31.25,
            bomb_speed: 18.75,
        }
    }
}

/// Arena-wide settings the core consumes.
#[derive(Clone, Debug)]
pub struct ArenaSettings {
    /// Respawn grace period in ticks.
    pub enter_delay_ticks: u32,
    /// Brick lifetime in ticks.
    pub brick_time_ticks: u32,
    pub ships: [ShipSettings; 8],
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            enter_delay_ticks: 200,
            brick_time_ticks: 6_000,
            ships: [ShipSettings::default(); 8],
        }
    }
}

impl ArenaSettings {
    /// Settings for `ship`, clamping spectators to ship 0 so lookups made
    /// before a ship is assigned still return usable values.
    #[inline]
    pub fn ship(&self, ship: u8) -> &ShipSettings {
        &self.ships[(ship as usize).min(7)]
    }

    /// Respawn grace period in seconds (100 ticks per second).
    #[inline]
    pub fn enter_delay_secs(&self) -> f32 {
        self.enter_delay_ticks as f32 / 100.0
    }
}
