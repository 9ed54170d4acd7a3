//! Zone identification and per-zone behavior registration.
//!
//! Every server belongs to one [`Zone`].  A [`ZoneController`] knows how to
//! play there: which named behaviors exist and which one to start with.
//! The [`ZoneDispatcher`] owns all controllers and activates the matching
//! one when the bot joins a server — at most one controller is "in zone"
//! per session.

pub mod local;
pub mod warzone;

use serde::{Deserialize, Serialize};

use drift_behavior::BehaviorRepository;

pub use local::LocalController;
pub use warzone::WarzoneController;

// ── Zone ──────────────────────────────────────────────────────────────────────

/// Closed set of known game worlds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// A server on this machine — the practice arena.
    Local,
    /// Open-field free-for-all combat.
    Warzone,
    /// Base assault with attach play.
    Fortress,
    /// Flag capture.
    Capture,
    /// Not claimed by any controller; the bot connects but idles.
    Unknown,
}

impl Zone {
    /// Lowercase config key for this zone.
    pub fn key(self) -> &'static str {
        match self {
            Zone::Local => "local",
            Zone::Warzone => "warzone",
            Zone::Fortress => "fortress",
            Zone::Capture => "capture",
            Zone::Unknown => "unknown",
        }
    }
}

// ── Bot-level events ──────────────────────────────────────────────────────────

/// The bot is joining a server; zone controllers decide whether it's theirs.
pub struct JoinRequestEvent {
    pub zone: Zone,
    pub server: String,
}

/// A request (chat command, tree node) to switch the active behavior.
pub struct BehaviorChangeEvent {
    pub name: String,
}

// ── ZoneController ────────────────────────────────────────────────────────────

/// Per-zone behavior registration.
pub trait ZoneController: Send {
    fn is_zone(&self, zone: Zone) -> bool;

    /// Register this zone's named behaviors.  The map is loaded by the time
    /// this runs, so behaviors may inspect it.
    fn create_behaviors(&mut self, arena: &str, repo: &mut BehaviorRepository);

    /// Behavior to activate when the config names none.
    fn default_behavior(&self) -> &'static str;
}

// ── ZoneDispatcher ────────────────────────────────────────────────────────────

pub struct ZoneDispatcher {
    controllers: Vec<Box<dyn ZoneController>>,
    active: Option<usize>,
}

impl ZoneDispatcher {
    pub fn new(controllers: Vec<Box<dyn ZoneController>>) -> Self {
        Self { controllers, active: None }
    }

    /// The built-in controller set.
    pub fn standard() -> Self {
        Self::new(vec![Box::new(LocalController), Box::new(WarzoneController)])
    }

    /// Activate the controller claiming `zone`.  Returns whether any did.
    pub fn enter_zone(&mut self, zone: Zone) -> bool {
        self.active = self.controllers.iter().position(|c| c.is_zone(zone));
        if self.active.is_none() {
            log::warn!("no zone controller for {zone:?}; the bot will idle");
        }
        self.active.is_some()
    }

    pub fn active(&mut self) -> Option<&mut dyn ZoneController> {
        let index = self.active?;
        Some(self.controllers[index].as_mut())
    }
}
