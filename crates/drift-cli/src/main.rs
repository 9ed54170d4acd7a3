//! The `drift` binary.

mod local;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use drift_bot::{Bot, Config};
use drift_bot::zones::Zone;

use crate::local::LocalClient;

#[derive(Parser)]
#[command(name = "drift", version, about = "Autonomous client for tile-based multiplayer action servers.")]
struct Cli {
    /// Configuration file; falls back to `<path>.dist`, then to built-in
    /// practice defaults.
    #[arg(long, default_value = "drift.json")]
    config: PathBuf,

    /// Override the configured login name.
    #[arg(long)]
    name: Option<String>,

    /// Override the configured login password.
    #[arg(long)]
    password: Option<String>,

    /// Server (by config name) to join; defaults to the first configured.
    #[arg(long)]
    server: Option<String>,

    /// Practice-session length in seconds (local zone only).
    #[arg(long, default_value_t = 60.0)]
    duration: f32,

    /// Deterministic seed for the practice arena.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn load_config(path: &PathBuf) -> Config {
    match Config::load(path) {
        Ok(config) => {
            log::info!("using config {}", path.display());
            config
        }
        Err(_) => {
            let dist = path.with_extension("json.dist");
            match Config::load(&dist) {
                Ok(config) => {
                    log::warn!("failed to load {}; using {}", path.display(), dist.display());
                    config
                }
                Err(_) => {
                    log::warn!("no config file found; using practice defaults");
                    Config::default()
                }
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = load_config(&cli.config);
    if let Some(name) = cli.name {
        config.login.name = name;
    }
    if let Some(password) = cli.password {
        config.login.password = password;
    }

    let server = match &cli.server {
        Some(name) => match config.server(name) {
            Some(server) => server.clone(),
            None => {
                log::error!("no server named '{name}' in the configuration");
                return ExitCode::FAILURE;
            }
        },
        None => match config.servers.first() {
            Some(server) => server.clone(),
            None => {
                log::error!("configuration lists no servers");
                return ExitCode::FAILURE;
            }
        },
    };

    let cache_dir = config.cache_dir(&server.name);
    if let Err(error) = std::fs::create_dir_all(&cache_dir) {
        log::warn!("could not create cache dir {}: {error}", cache_dir.display());
    }

    let mut bot = Bot::new(config);
    bot.join_server(&server);

    // Only the in-process practice arena ships with this binary; real
    // servers need the UDP protocol stack plugged in as a `Client`.
    let mut client = match server.zone {
        Zone::Local => LocalClient::new(cli.seed, Some(cli.duration)),
        zone => {
            log::error!("no protocol driver available for {zone:?} servers");
            return ExitCode::FAILURE;
        }
    };

    match bot.run(&mut client) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("fatal: {error}");
            ExitCode::FAILURE
        }
    }
}
