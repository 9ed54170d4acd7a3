//! The bot process: event wiring and the run loop.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use drift_core::{DriftResult, EventBus, Subscription};
use drift_game::event::{ArenaNameEvent, DisconnectEvent, MapLoadEvent};
use drift_game::{Client, ClientStatus, Command, InputFrame, LoginState};

use crate::config::{Config, ServerConfig};
use crate::controller::Controller;
use crate::zones::{JoinRequestEvent, Zone, ZoneDispatcher};

/// Target cadence of the controller loop (100 Hz, one protocol tick).
const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Upper bound on a single frame's delta so a stall (debugger, swap) does
/// not turn into one giant simulation step.
const MAX_DT: f32 = 0.05;

/// Bus notifications that must be acted on from the tick loop rather than
/// inside the dispatch.
#[derive(Default)]
struct Pending {
    map_loaded: bool,
    arena: Option<String>,
    behavior: Option<String>,
}

/// Owns the event bus, the controller, and the zone dispatcher, and drives
/// them against a [`Client`].
pub struct Bot {
    pub bus: Arc<EventBus>,
    pub controller: Controller,
    pub dispatcher: ZoneDispatcher,
    pub config: Config,
    pub input: InputFrame,

    zone: Zone,
    pending: Arc<Mutex<Pending>>,
    _subs: Vec<Subscription>,
}

impl Bot {
    pub fn new(config: Config) -> Self {
        let bus = EventBus::new();
        let controller = Controller::new(&bus);
        let pending: Arc<Mutex<Pending>> = Arc::default();

        // Collaborator events are recorded here and handled at a safe point
        // in the tick loop.
        let mut subs = Vec::new();
        {
            let sink = Arc::clone(&pending);
            subs.push(bus.subscribe::<MapLoadEvent, _>(move |_| {
                sink.lock().expect("pending queue poisoned").map_loaded = true;
            }));
        }
        {
            let sink = Arc::clone(&pending);
            subs.push(bus.subscribe::<ArenaNameEvent, _>(move |event| {
                sink.lock().expect("pending queue poisoned").arena = Some(event.name.clone());
            }));
        }
        {
            let sink = Arc::clone(&pending);
            subs.push(bus.subscribe::<crate::zones::BehaviorChangeEvent, _>(move |event| {
                sink.lock().expect("pending queue poisoned").behavior = Some(event.name.clone());
            }));
        }

        Self {
            bus,
            controller,
            dispatcher: ZoneDispatcher::standard(),
            config,
            input: InputFrame::new(),
            zone: Zone::Unknown,
            pending,
            _subs: subs,
        }
    }

    /// Select the zone controller for `server` and announce the join.
    pub fn join_server(&mut self, server: &ServerConfig) {
        log::info!("joining {} ({}:{})", server.name, server.address, server.port);
        self.zone = server.zone;
        self.dispatcher.enter_zone(server.zone);
        self.bus.dispatch(&JoinRequestEvent { zone: server.zone, server: server.name.clone() });
    }

    /// Drive the session until the client closes.  Always sends a
    /// disconnect on the way out, clean exit or not.
    pub fn run(&mut self, client: &mut dyn Client) -> DriftResult<()> {
        let mut deadline = Instant::now() + TICK_INTERVAL;
        let mut last = Instant::now();

        loop {
            let now = Instant::now();
            let dt = (now - last).as_secs_f32().min(MAX_DT);
            last = now;

            if client.pump(dt, &self.bus) == ClientStatus::Closed {
                break;
            }

            self.handle_pending(client);

            if client.state().login_state == LoginState::Complete {
                self.controller.update(dt, client.state(), &mut self.input);
            }

            client.submit_input(self.input);
            client.flush_chat(&mut self.controller.chat);
            client.flush_commands(&mut self.controller.commands);

            // Monotonic deadline: sleep to the next slot, and when a tick
            // overruns, re-anchor instead of trying to catch up in a burst.
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
                deadline += TICK_INTERVAL;
            } else {
                deadline = now + TICK_INTERVAL;
            }
        }

        log::info!("session over, disconnecting");
        self.controller.commands.push(Command::Disconnect);
        client.flush_commands(&mut self.controller.commands);
        self.bus.dispatch(&DisconnectEvent);

        Ok(())
    }

    fn handle_pending(&mut self, client: &dyn Client) {
        let pending = std::mem::take(&mut *self.pending.lock().expect("pending queue poisoned"));

        if pending.map_loaded {
            self.controller.mark_map_dirty();
        }
        if let Some(arena) = pending.arena {
            self.enter_arena(&arena, client);
        }
        if let Some(name) = pending.behavior {
            self.controller.activate_behavior(&name, client.state(), &mut self.input);
        }
    }

    /// Arena entry: let the zone controller register its behaviors, pick
    /// the starting one (config wins over the controller default), and seed
    /// the configured ship request.
    fn enter_arena(&mut self, arena: &str, client: &dyn Client) {
        log::info!("entered arena '{arena}'");

        let section = self.config.zone_section(self.zone);

        self.controller.behaviors.clear();
        let default_behavior = match self.dispatcher.active() {
            Some(zone_controller) => {
                zone_controller.create_behaviors(arena, &mut self.controller.behaviors);
                Some(zone_controller.default_behavior())
            }
            None => None,
        };

        let chosen = section.behavior.as_deref().or(default_behavior);
        if let Some(name) = chosen {
            self.controller.activate_behavior(name, client.state(), &mut self.input);
        }

        // Seeded after behavior init so the config overrides whatever the
        // behavior chose.  Config ships are 1-based, the wire is 0-based.
        if let Some(ship) = section.request_ship {
            if (1..=8).contains(&ship) {
                self.controller.blackboard.set("request_ship", (ship - 1) as i32);
            }
        }
    }
}
