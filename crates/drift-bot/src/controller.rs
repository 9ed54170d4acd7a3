//! The per-tick driver.

use std::sync::{Arc, Mutex};

use drift_behavior::{Behavior, BehaviorNode, BehaviorRepository, Blackboard, ExecuteContext};
use drift_core::{EventBus, Subscription, Vec2};
use drift_game::event::PlayerDeathEvent;
use drift_game::{ChatQueue, CommandQueue, GameState, InputFrame};
use drift_path::{Path, Pathfinder, RegionRegistry};
use drift_sense::{InfluenceMap, KdTree};
use drift_steer::{Actuator, DEFAULT_ROTATION_THRESHOLD, Steering};

/// Influence deposited where a player died.
const THREAT_DEPOSIT: f32 = 10.0;

/// Default chase leash, tiles; seeded onto the blackboard every tick so
/// trees can reference it without each behavior re-defining it.
const LEASH_DISTANCE: f32 = 15.0;

/// Owns everything the behavior tree runs against and drives one tick.
///
/// Tick order: clear input → rebuild static analysis if the map or ship
/// radius changed → rebuild the KD partition → decay/deposit influence →
/// reset steering → seed per-tick keys → execute the tree → actuate.
pub struct Controller {
    pub blackboard: Blackboard,
    pub steering: Steering,
    pub actuator: Actuator,
    pub pathfinder: Pathfinder,
    pub regions: RegionRegistry,
    pub kd: KdTree,
    pub influence: InfluenceMap,
    pub behaviors: BehaviorRepository,
    pub chat: ChatQueue,
    pub commands: CommandQueue,

    bus: Arc<EventBus>,
    tree: Option<Box<dyn BehaviorNode>>,
    path: Path,

    /// Ship radius the regions/weights were last built for.
    built_radius: Option<f32>,
    map_dirty: bool,
    rotation_threshold: f32,

    /// Death positions collected from the bus between ticks.
    threat_deposits: Arc<Mutex<Vec<Vec2>>>,
    _death_sub: Subscription,
}

impl Controller {
    pub fn new(bus: &Arc<EventBus>) -> Self {
        let threat_deposits = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&threat_deposits);
        let death_sub = bus.subscribe::<PlayerDeathEvent, _>(move |event| {
            sink.lock().expect("threat deposit queue poisoned").push(event.position);
        });

        Self {
            blackboard: Blackboard::new(),
            steering: Steering::new(),
            actuator: Actuator,
            pathfinder: Pathfinder::new(),
            regions: RegionRegistry::new(),
            kd: KdTree::new(),
            influence: InfluenceMap::new(),
            behaviors: BehaviorRepository::new(),
            chat: ChatQueue::new(),
            commands: CommandQueue::new(),
            bus: Arc::clone(bus),
            tree: None,
            path: Path::empty(),
            built_radius: None,
            map_dirty: true,
            rotation_threshold: DEFAULT_ROTATION_THRESHOLD,
            threat_deposits,
            _death_sub: death_sub,
        }
    }

    /// Force a region/weight rebuild on the next tick (map loaded or
    /// changed).
    pub fn mark_map_dirty(&mut self) {
        self.map_dirty = true;
    }

    pub fn set_rotation_threshold(&mut self, threshold: f32) {
        self.rotation_threshold = threshold;
    }

    /// Install a tree directly, bypassing the repository.
    pub fn set_tree(&mut self, tree: Box<dyn BehaviorNode>) {
        self.tree = Some(tree);
    }

    pub fn has_tree(&self) -> bool {
        self.tree.is_some()
    }

    /// Switch to the named behavior: run its `on_initialize`, then install
    /// a fresh tree.  Returns `false` (and warns) for unknown names.
    pub fn activate_behavior(&mut self, name: &str, state: &GameState, input: &mut InputFrame) -> bool {
        let Controller {
            behaviors,
            blackboard,
            steering,
            chat,
            commands,
            pathfinder,
            regions,
            kd,
            influence,
            path,
            ..
        } = self;

        let Some(behavior) = behaviors.find_mut(name) else {
            log::warn!("unknown behavior '{name}'");
            return false;
        };

        let tree = {
            let mut ctx = ExecuteContext {
                state,
                dt: 0.0,
                blackboard,
                steering,
                input,
                chat,
                commands,
                pathfinder,
                regions,
                kd,
                influence,
                path,
            };
            behavior.on_initialize(&mut ctx);
            behavior.create_tree(&mut ctx)
        };

        self.tree = Some(tree);
        log::info!("behavior '{name}' active");
        true
    }

    /// Register a behavior and immediately activate it — convenience for
    /// tests and ad-hoc wiring.
    pub fn install_behavior(
        &mut self,
        name: &str,
        behavior: Box<dyn Behavior>,
        state: &GameState,
        input: &mut InputFrame,
    ) {
        self.behaviors.add(name, behavior);
        self.activate_behavior(name, state, input);
    }

    /// Run one tick against `state`, writing output into `input`.
    pub fn update(&mut self, dt: f32, state: &GameState, input: &mut InputFrame) {
        input.clear();

        let Some(player) = state.self_player() else {
            return;
        };
        let radius = state.settings.ship(player.ship).radius;

        // ── Static analysis rebuild ───────────────────────────────────────
        //
        // The region registry and weight field depend only on the map and
        // the ship radius, so they rebuild exactly when either changes.
        if self.map_dirty || self.built_radius != Some(radius) {
            self.regions.create_all(&state.map, radius, &self.bus);
            self.pathfinder.create_map_weights(&state.map, radius);
            self.built_radius = Some(radius);
            self.map_dirty = false;
            self.path.clear();
        }

        // ── Per-tick spatial awareness ────────────────────────────────────
        self.kd.build(
            state
                .players
                .iter()
                .filter(|p| !p.is_spectator() && !p.is_respawning() && p.synchronized)
                .map(|p| (p.id, p.position)),
        );

        self.influence.update(dt);
        let deposits: Vec<Vec2> = std::mem::take(&mut *self.threat_deposits.lock().expect("threat deposit queue poisoned"));
        for position in deposits {
            self.influence.add_at(position, THREAT_DEPOSIT);
        }

        // ── Tree execution ────────────────────────────────────────────────
        self.steering.reset();
        self.blackboard.set("leash_distance", LEASH_DISTANCE);

        if let Some(mut tree) = self.tree.take() {
            let mut ctx = ExecuteContext {
                state,
                dt,
                blackboard: &mut self.blackboard,
                steering: &mut self.steering,
                input,
                chat: &mut self.chat,
                commands: &mut self.commands,
                pathfinder: &mut self.pathfinder,
                regions: &self.regions,
                kd: &self.kd,
                influence: &mut self.influence,
                path: &mut self.path,
            };
            tree.execute(&mut ctx);
            self.tree = Some(tree);
        }

        // ── Actuation ─────────────────────────────────────────────────────
        if let Some(player) = state.self_player() {
            self.actuator.update(
                player,
                &state.settings,
                input,
                self.steering.force,
                self.steering.rotation,
                self.rotation_threshold,
            );
        }
    }
}
