//! The practice arena: an in-process [`Client`] with toy physics.
//!
//! Stands in for the UDP protocol stack so the whole controller loop can be
//! exercised offline — walled map, one wandering drone to chase, simple
//! thrust/turn integration of the bot's own input frames.  Nothing here is
//! a simulation of the real server; it exists to drive the framework
//! end-to-end.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use drift_core::{EventBus, PlayerId, Vec2};
use drift_game::event::{ArenaNameEvent, JoinGameEvent, MapLoadEvent};
use drift_game::{Client, ClientStatus, Command, CommandQueue, ChatQueue, GameState, InputAction, InputFrame, LoginState, Player};
use drift_map::TileId;

const SELF_ID: PlayerId = PlayerId(1);
const DRONE_ID: PlayerId = PlayerId(2);

/// Turn rate applied per held turn key, rad/s.
const TURN_RATE: f32 = 3.0;
/// Thrust acceleration, tiles/s².
const THRUST: f32 = 30.0;

pub struct LocalClient {
    state: GameState,
    rng: SmallRng,
    input: InputFrame,

    joined: bool,
    closed: bool,
    /// Seconds of session remaining; `None` runs until interrupted.
    remaining: Option<f32>,
    tick_accum: f32,
}

impl LocalClient {
    pub fn new(seed: u64, duration_secs: Option<f32>) -> Self {
        let mut state = GameState::new();

        // Border walls plus a few pillars near the middle to path around.
        for i in 0..1024u16 {
            state.map.set_tile(i, 0, TileId::SOLID);
            state.map.set_tile(i, 1023, TileId::SOLID);
            state.map.set_tile(0, i, TileId::SOLID);
            state.map.set_tile(1023, i, TileId::SOLID);
        }
        for (px, py) in [(500u16, 500u16), (524, 500), (500, 524), (524, 524)] {
            for y in py..py + 4 {
                for x in px..px + 4 {
                    state.map.set_tile(x, y, TileId::SOLID);
                }
            }
        }

        let mut me = Player::entering(SELF_ID, "driftbot");
        me.position = Vec2::new(512.5, 512.5);
        me.synchronized = true;
        state.players.push(me);
        state.self_id = SELF_ID;

        let mut drone = Player::entering(DRONE_ID, "drone");
        drone.ship = 0;
        drone.frequency = 1;
        drone.position = Vec2::new(540.5, 540.5);
        drone.synchronized = true;
        state.players.push(drone);

        Self {
            state,
            rng: SmallRng::seed_from_u64(seed),
            input: InputFrame::new(),
            joined: false,
            closed: false,
            remaining: duration_secs,
            tick_accum: 0.0,
        }
    }

    fn integrate_self(&mut self, dt: f32) {
        let input = self.input;
        let Some(player) = self.state.player(SELF_ID) else {
            return;
        };
        if player.is_spectator() {
            return;
        }
        let max_speed = self.state.settings.ship(player.ship).max_speed;

        let mut rotation = player.rotation;
        if input.is_set(InputAction::Left) {
            rotation += TURN_RATE * dt;
        }
        if input.is_set(InputAction::Right) {
            rotation -= TURN_RATE * dt;
        }

        let heading = Vec2::new(rotation.cos(), rotation.sin());
        let mut velocity = player.velocity;
        if input.is_set(InputAction::Forward) {
            velocity += heading * (THRUST * dt);
        }
        if input.is_set(InputAction::Backward) {
            velocity -= heading * (THRUST * dt);
        }
        if velocity.length() > max_speed {
            velocity = velocity.normalized() * max_speed;
        }

        let mut next = player.position + velocity * dt;
        let (tx, ty) = next.tile();
        if self.state.map.is_solid(tx, ty, 0) {
            // Stop at the wall rather than tunneling in.
            velocity = Vec2::ZERO;
            next = player.position;
        }

        let player = self.state.player_mut(SELF_ID).expect("self exists");
        player.rotation = rotation;
        player.velocity = velocity;
        player.position = next;
    }

    fn wander_drone(&mut self, dt: f32) {
        let steer: f32 = self.rng.gen_range(-1.0..1.0);
        let Some(drone) = self.state.player(DRONE_ID) else {
            return;
        };

        let mut rotation = drone.rotation + steer * dt;
        let heading = Vec2::new(rotation.cos(), rotation.sin());
        let velocity = heading * 6.0;

        let mut next = drone.position + velocity * dt;
        let (tx, ty) = next.tile();
        if self.state.map.is_solid(tx, ty, 1) {
            rotation += std::f32::consts::FRAC_PI_2;
            next = drone.position;
        }

        let drone = self.state.player_mut(DRONE_ID).expect("drone exists");
        drone.rotation = rotation;
        drone.velocity = velocity;
        drone.position = next;
    }
}

impl Client for LocalClient {
    fn pump(&mut self, dt: f32, bus: &EventBus) -> ClientStatus {
        if self.closed {
            return ClientStatus::Closed;
        }

        if !self.joined {
            self.joined = true;
            self.state.login_state = LoginState::Complete;
            bus.dispatch(&JoinGameEvent);
            bus.dispatch(&MapLoadEvent);
            bus.dispatch(&ArenaNameEvent { name: "practice".into() });
        }

        // 100 protocol ticks per second, accumulated from wall time.
        self.tick_accum += dt * 100.0;
        let whole = self.tick_accum as u32;
        self.tick_accum -= whole as f32;
        self.state.tick = self.state.tick + whole;

        self.integrate_self(dt);
        self.wander_drone(dt);

        if let Some(remaining) = &mut self.remaining {
            *remaining -= dt;
            if *remaining <= 0.0 {
                log::info!("practice session over");
                return ClientStatus::Closed;
            }
        }

        ClientStatus::Active
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn submit_input(&mut self, frame: InputFrame) {
        self.input = frame;
    }

    fn flush_chat(&mut self, chat: &mut ChatQueue) {
        while let Some(entry) = chat.pop() {
            log::info!("chat {:?}: {}", entry.kind, entry.message);
        }
    }

    fn flush_commands(&mut self, commands: &mut CommandQueue) {
        while let Some(command) = commands.pop() {
            match command {
                Command::ShipRequest(ship) => {
                    let player = self.state.player_mut(SELF_ID).expect("self exists");
                    player.ship = ship;
                    player.position = Vec2::new(512.5, 512.5);
                    player.velocity = Vec2::ZERO;
                    log::info!("ship request granted: {ship}");
                }
                Command::Warp => {
                    let player = self.state.player_mut(SELF_ID).expect("self exists");
                    player.position = Vec2::new(512.5, 512.5);
                    player.velocity = Vec2::ZERO;
                }
                Command::Attach(target) => {
                    self.state.player_mut(SELF_ID).expect("self exists").attach_parent = target;
                }
                Command::Detach => {
                    self.state.player_mut(SELF_ID).expect("self exists").attach_parent = PlayerId::INVALID;
                }
                Command::Disconnect => {
                    self.closed = true;
                }
            }
        }
    }
}
