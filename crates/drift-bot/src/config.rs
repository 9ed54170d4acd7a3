//! Bot configuration.
//!
//! Loaded once at startup from a JSON file and passed down — nothing reads
//! configuration through globals.  Per-zone sections choose the initial
//! behavior and requested ship; the `"general"` section is the fallback for
//! zones without one, mirroring how arena settings cascade.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use drift_core::{DriftError, DriftResult};

use crate::zones::Zone;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginConfig {
    pub name: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub address: String,
    pub port: u16,
    pub zone: Zone,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Behavior name to activate on arena entry; the zone controller's
    /// default applies when absent.
    #[serde(default)]
    pub behavior: Option<String>,
    /// Ship class (1-based, as players write it) to request on entry.
    #[serde(default)]
    pub request_ship: Option<u8>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub login: LoginConfig,
    pub servers: Vec<ServerConfig>,
    /// Sections keyed by lowercase zone name, plus the `"general"` fallback.
    #[serde(default)]
    pub zones: FxHashMap<String, ZoneConfig>,
    /// Root for per-server downloaded files (`<cache_root>/<server>/…`).
    #[serde(default = "default_cache_root")]
    pub cache_root: PathBuf,
}

fn default_cache_root() -> PathBuf {
    PathBuf::from("zones")
}

impl Default for Config {
    /// A practice-arena configuration for running without a config file.
    fn default() -> Self {
        Self {
            login: LoginConfig { name: "driftbot".into(), password: "none".into() },
            servers: vec![ServerConfig {
                name: "local".into(),
                address: "127.0.0.1".into(),
                port: 5000,
                zone: Zone::Local,
            }],
            zones: FxHashMap::default(),
            cache_root: default_cache_root(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> DriftResult<Config> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| DriftError::Parse(e.to_string()))
    }

    pub fn server(&self, name: &str) -> Option<&ServerConfig> {
        self.servers.iter().find(|s| s.name == name)
    }

    /// Effective section for `zone`: the zone's own section, with the
    /// `"general"` section filling gaps.
    pub fn zone_section(&self, zone: Zone) -> ZoneConfig {
        let general = self.zones.get("general");
        let specific = self.zones.get(zone.key());

        ZoneConfig {
            behavior: specific
                .and_then(|z| z.behavior.clone())
                .or_else(|| general.and_then(|z| z.behavior.clone())),
            request_ship: specific
                .and_then(|z| z.request_ship)
                .or_else(|| general.and_then(|z| z.request_ship)),
        }
    }

    /// Directory for files downloaded on behalf of `server`.
    pub fn cache_dir(&self, server: &str) -> PathBuf {
        self.cache_root.join(server)
    }
}
