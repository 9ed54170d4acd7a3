//! Unit tests for the node library, controller, and zone dispatch.

#[cfg(test)]
mod helpers {
    use drift_behavior::{Blackboard, BehaviorNode, ExecuteContext, ExecuteResult};
    use drift_core::{EventBus, PlayerId, Vec2};
    use drift_game::{ChatQueue, CommandQueue, GameState, InputFrame, LoginState, Player};
    use drift_map::Map;
    use drift_path::{Path, Pathfinder, RegionRegistry};
    use drift_sense::{InfluenceMap, KdTree};
    use drift_steer::Steering;

    pub const R: f32 = 14.0 / 16.0;

    /// Owns everything an `ExecuteContext` borrows, pre-loaded with a
    /// playable snapshot.
    pub struct Harness {
        pub state: GameState,
        pub blackboard: Blackboard,
        pub steering: Steering,
        pub input: InputFrame,
        pub chat: ChatQueue,
        pub commands: CommandQueue,
        pub pathfinder: Pathfinder,
        pub regions: RegionRegistry,
        pub kd: KdTree,
        pub influence: InfluenceMap,
        pub path: Path,
    }

    impl Harness {
        /// Empty open map with a live self player at mid-field.
        pub fn new() -> Self {
            let mut state = GameState::new();
            state.login_state = LoginState::Complete;
            state.players.push(live_player(1, "self", Vec2::new(512.5, 512.5), 0));
            state.self_id = PlayerId(1);

            Self {
                state,
                blackboard: Blackboard::new(),
                steering: Steering::new(),
                input: InputFrame::new(),
                chat: ChatQueue::new(),
                commands: CommandQueue::new(),
                pathfinder: Pathfinder::new(),
                regions: RegionRegistry::new(),
                kd: KdTree::new(),
                influence: InfluenceMap::new(),
                path: Path::empty(),
            }
        }

        /// Rebuild regions and weights for the current map.
        pub fn prepare_map(&mut self) {
            let bus = EventBus::new();
            self.regions.create_all(&self.state.map, R, &bus);
            self.pathfinder.create_map_weights(&self.state.map, R);
        }

        pub fn map_mut(&mut self) -> &mut Map {
            &mut self.state.map
        }

        pub fn exec(&mut self, node: &mut dyn BehaviorNode) -> ExecuteResult {
            let mut ctx = ExecuteContext {
                state: &self.state,
                dt: 0.01,
                blackboard: &mut self.blackboard,
                steering: &mut self.steering,
                input: &mut self.input,
                chat: &mut self.chat,
                commands: &mut self.commands,
                pathfinder: &mut self.pathfinder,
                regions: &self.regions,
                kd: &self.kd,
                influence: &mut self.influence,
                path: &mut self.path,
            };
            node.execute(&mut ctx)
        }
    }

    pub fn live_player(id: u16, name: &str, position: Vec2, frequency: u16) -> Player {
        let mut player = Player::entering(PlayerId(id), name);
        player.ship = 0;
        player.frequency = frequency;
        player.position = position;
        player.synchronized = true;
        player
    }
}

#[cfg(test)]
mod ship_nodes {
    use drift_behavior::ExecuteResult;
    use drift_core::Tick;
    use drift_game::Command;

    use super::helpers::Harness;
    use crate::nodes::{ShipQueryNode, ShipRequestNode};

    #[test]
    fn query_matches_literal_and_key() {
        let mut harness = Harness::new();

        assert_eq!(harness.exec(&mut ShipQueryNode::new(0)), ExecuteResult::Success);
        assert_eq!(harness.exec(&mut ShipQueryNode::new(3)), ExecuteResult::Failure);

        harness.blackboard.set("want", 0i32);
        assert_eq!(harness.exec(&mut ShipQueryNode::from_key("want")), ExecuteResult::Success);

        // Missing key reads as failure, not a panic.
        assert_eq!(harness.exec(&mut ShipQueryNode::from_key("absent")), ExecuteResult::Failure);
    }

    #[test]
    fn request_is_rate_limited() {
        let mut harness = Harness::new();
        harness.state.tick = Tick(1_000);
        let mut node = ShipRequestNode::new(2);

        // First attempt sends and reports Running.
        assert_eq!(harness.exec(&mut node), ExecuteResult::Running);
        assert_eq!(harness.commands.pop(), Some(Command::ShipRequest(2)));

        // Inside the cooldown window: no send, Failure.
        harness.state.tick = Tick(1_200);
        assert_eq!(harness.exec(&mut node), ExecuteResult::Failure);
        assert!(harness.commands.is_empty());

        // Cooldown elapsed: sends again.
        harness.state.tick = Tick(1_300);
        assert_eq!(harness.exec(&mut node), ExecuteResult::Running);
        assert_eq!(harness.commands.pop(), Some(Command::ShipRequest(2)));
    }

    #[test]
    fn request_succeeds_once_in_ship() {
        let mut harness = Harness::new();
        let mut node = ShipRequestNode::new(0); // already in ship 0
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
        assert!(harness.commands.is_empty());
    }
}

#[cfg(test)]
mod target_nodes {
    use drift_behavior::ExecuteResult;
    use drift_core::{PlayerId, Vec2};
    use drift_map::TileId;

    use super::helpers::{Harness, live_player};
    use crate::nodes::NearestTargetNode;

    #[test]
    fn picks_closest_enemy_and_skips_ineligible() {
        let mut harness = Harness::new();
        let center = Vec2::new(512.5, 512.5);

        // Eligible enemy, 30 tiles out.
        harness.state.players.push(live_player(2, "far", center + Vec2::new(30.0, 0.0), 1));
        // Closer but a teammate.
        harness.state.players.push(live_player(3, "mate", center + Vec2::new(5.0, 0.0), 0));
        // Closer but a spectator.
        let mut spectator = live_player(4, "spectator", center + Vec2::new(4.0, 0.0), 1);
        spectator.ship = 8;
        harness.state.players.push(spectator);
        // Closer but respawning.
        let mut dead = live_player(5, "dead", center + Vec2::new(3.0, 0.0), 1);
        dead.enter_delay = 1.0;
        harness.state.players.push(dead);
        // Closer but not synchronized.
        let mut ghost = live_player(6, "ghost", center + Vec2::new(2.0, 0.0), 1);
        ghost.synchronized = false;
        harness.state.players.push(ghost);
        // Closer but parked on a safe tile.
        let safe_pos = center + Vec2::new(6.0, 0.0);
        let (sx, sy) = safe_pos.tile();
        harness.map_mut().set_tile(sx, sy, TileId::SAFE);
        harness.state.players.push(live_player(7, "safe", safe_pos, 1));

        let mut node = NearestTargetNode::new("target");
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
        assert_eq!(harness.blackboard.get::<PlayerId>("target"), Some(PlayerId(2)));
    }

    #[test]
    fn fails_with_no_enemies() {
        let mut harness = Harness::new();
        let mut node = NearestTargetNode::new("target");
        assert_eq!(harness.exec(&mut node), ExecuteResult::Failure);
        assert!(!harness.blackboard.has("target"));
    }
}

#[cfg(test)]
mod timer_nodes {
    use drift_behavior::ExecuteResult;
    use drift_core::Tick;

    use super::helpers::Harness;
    use crate::nodes::{TimerExpiredNode, TimerSetNode};

    /// Set a 100-tick timer at tick 1000: not expired at 1099, expired at
    /// 1100.
    #[test]
    fn set_then_expire() {
        let mut harness = Harness::new();
        harness.state.tick = Tick(1_000);

        assert_eq!(harness.exec(&mut TimerSetNode::new("t", 100)), ExecuteResult::Success);

        harness.state.tick = Tick(1_099);
        assert_eq!(harness.exec(&mut TimerExpiredNode::new("t")), ExecuteResult::Failure);

        harness.state.tick = Tick(1_100);
        assert_eq!(harness.exec(&mut TimerExpiredNode::new("t")), ExecuteResult::Success);
    }

    #[test]
    fn missing_timer_counts_as_expired() {
        let mut harness = Harness::new();
        assert_eq!(harness.exec(&mut TimerExpiredNode::new("never_set")), ExecuteResult::Success);
    }

    #[test]
    fn expiry_survives_tick_wrap() {
        let mut harness = Harness::new();
        harness.state.tick = Tick(0x7FFF_FFF0);
        harness.exec(&mut TimerSetNode::new("t", 0x40));

        // Still before the (wrapped) deadline.
        assert_eq!(harness.exec(&mut TimerExpiredNode::new("t")), ExecuteResult::Failure);

        harness.state.tick = Tick(0x30); // past the wrap, past the deadline
        assert_eq!(harness.exec(&mut TimerExpiredNode::new("t")), ExecuteResult::Success);
    }

    #[test]
    fn duration_from_blackboard_key() {
        let mut harness = Harness::new();
        harness.state.tick = Tick(50);
        harness.blackboard.set("cooldown", 25u32);

        assert_eq!(harness.exec(&mut TimerSetNode::from_key("t", "cooldown")), ExecuteResult::Success);
        assert_eq!(harness.blackboard.get::<Tick>("t"), Some(Tick(75)));
    }
}

#[cfg(test)]
mod blackboard_nodes {
    use drift_behavior::{ExecuteResult, SelectorNode};
    use drift_core::Vec2;

    use super::helpers::Harness;
    use crate::nodes::{
        BlackboardEraseNode, BlackboardSetNode, BlackboardSetQueryNode, PlayerPositionQueryNode,
        ValueCompareQueryNode,
    };

    #[test]
    fn presence_and_compare() {
        let mut harness = Harness::new();
        harness.blackboard.set("mode", 2i32);

        assert_eq!(harness.exec(&mut BlackboardSetQueryNode::new("mode")), ExecuteResult::Success);
        assert_eq!(harness.exec(&mut BlackboardSetQueryNode::new("other")), ExecuteResult::Failure);

        assert_eq!(harness.exec(&mut ValueCompareQueryNode::new("mode", 2i32)), ExecuteResult::Success);
        assert_eq!(harness.exec(&mut ValueCompareQueryNode::new("mode", 3i32)), ExecuteResult::Failure);
        // Type mismatch compares as missing.
        assert_eq!(harness.exec(&mut ValueCompareQueryNode::new("mode", 2u32)), ExecuteResult::Failure);
    }

    #[test]
    fn set_and_erase() {
        let mut harness = Harness::new();

        harness.exec(&mut BlackboardSetNode::new("spot", Vec2::new(3.0, 4.0)));
        assert_eq!(harness.blackboard.get::<Vec2>("spot"), Some(Vec2::new(3.0, 4.0)));

        harness.exec(&mut BlackboardEraseNode::new("spot"));
        assert!(!harness.blackboard.has("spot"));
    }

    /// A selector falls through a child that failed on a missing key.
    #[test]
    fn selector_over_missing_key() {
        let mut harness = Harness::new();

        let mut tree = SelectorNode::new(vec![
            // "pos" was never written: the query fails.
            Box::new(PlayerPositionQueryNode::new("pos", "out")),
            Box::new(BlackboardSetNode::new("fallback", true)),
        ]);

        assert_eq!(harness.exec(&mut tree), ExecuteResult::Success);
        assert!(!harness.blackboard.has("out"), "failed child must not have written output");
        assert_eq!(harness.blackboard.get::<bool>("fallback"), Some(true));
    }
}

#[cfg(test)]
mod aim_and_movement {
    use drift_behavior::ExecuteResult;
    use drift_core::{PlayerId, Vec2};

    use super::helpers::{Harness, live_player};
    use crate::nodes::{AimNode, ArriveNode, FaceNode, GoToNode, PursueNode, SeekNode, Weapon};

    #[test]
    fn aim_leads_a_crossing_target() {
        let mut harness = Harness::new();
        let center = Vec2::new(512.5, 512.5);
        let mut enemy = live_player(2, "enemy", center + Vec2::new(20.0, 0.0), 1);
        enemy.velocity = Vec2::new(0.0, 10.0);
        harness.state.players.push(enemy);
        harness.blackboard.set("target", PlayerId(2));

        let mut node = AimNode::new(Weapon::Bullet, "target", "aim");
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);

        let aim = harness.blackboard.get::<Vec2>("aim").unwrap();
        assert!(aim.y > center.y, "aim point should lead the +y motion, got {aim}");
    }

    #[test]
    fn aim_fails_without_target() {
        let mut harness = Harness::new();
        let mut node = AimNode::new(Weapon::Bomb, "target", "aim");
        assert_eq!(harness.exec(&mut node), ExecuteResult::Failure);
    }

    #[test]
    fn face_and_seek_write_steering() {
        let mut harness = Harness::new();
        harness.blackboard.set("spot", Vec2::new(522.5, 512.5)); // 10 east

        assert_eq!(harness.exec(&mut SeekNode::new("spot")), ExecuteResult::Success);
        assert!(harness.steering.force.x > 0.0);

        harness.blackboard.set("above", Vec2::new(512.5, 520.5));
        assert_eq!(harness.exec(&mut FaceNode::new("above")), ExecuteResult::Success);
        assert!(harness.steering.rotation != 0.0);
    }

    #[test]
    fn seek_with_distance_key_requires_it() {
        let mut harness = Harness::new();
        harness.blackboard.set("spot", Vec2::new(522.5, 512.5));

        let mut node = SeekNode::with_distance("spot", "leash");
        assert_eq!(harness.exec(&mut node), ExecuteResult::Failure);

        harness.blackboard.set("leash", 5.0f32);
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
    }

    #[test]
    fn arrive_short_stop() {
        let mut harness = Harness::new();
        harness.blackboard.set("spot", Vec2::new(515.5, 512.5)); // 3 east, hold 8
        assert_eq!(harness.exec(&mut ArriveNode::new("spot", 8.0)), ExecuteResult::Success);
        assert!(harness.steering.force.x < 0.0, "inside hold distance pushes back");
    }

    #[test]
    fn pursue_requires_live_target() {
        let mut harness = Harness::new();
        harness.blackboard.set("target", PlayerId(99));
        assert_eq!(harness.exec(&mut PursueNode::new("target", 5.0)), ExecuteResult::Failure);

        harness.state.players.push(live_player(2, "enemy", Vec2::new(530.5, 512.5), 1));
        harness.blackboard.set("target", PlayerId(2));
        assert_eq!(harness.exec(&mut PursueNode::new("target", 5.0)), ExecuteResult::Success);
        assert!(harness.steering.force.x > 0.0);
    }

    #[test]
    fn goto_paths_and_follows() {
        let mut harness = Harness::new();
        harness.prepare_map();
        harness.blackboard.set("goal", Vec2::new(540.5, 512.5));

        let mut node = GoToNode::new("goal");
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
        assert!(!harness.path.is_empty());
        assert_eq!(harness.path.goal().tile(), (540, 512));
        assert!(harness.steering.force.length_sq() > 0.0);

        // Same goal next tick: no re-plan, same path instance advances.
        let goal_points = harness.path.points().len();
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
        assert_eq!(harness.path.points().len(), goal_points);
    }

    #[test]
    fn goto_fails_for_unreachable_goal() {
        let mut harness = Harness::new();
        // Wall off a pocket far away.
        for y in 100..=110u16 {
            for x in 100..=110u16 {
                harness.map_mut().set_tile(x, y, drift_map::TileId::SOLID);
            }
        }
        harness.prepare_map();

        harness.blackboard.set("goal", Vec2::new(105.5, 105.5)); // inside the solid block
        let mut node = GoToNode::new("goal");
        assert_eq!(harness.exec(&mut node), ExecuteResult::Failure);
        assert!(harness.path.is_empty());
    }
}

#[cfg(test)]
mod misc_nodes {
    use drift_behavior::ExecuteResult;
    use drift_core::{PlayerId, Vec2};
    use drift_game::{ChatKind, Command, InputAction};

    use super::helpers::{Harness, live_player};
    use crate::nodes::{
        AttachNode, AttachedQueryNode, ChatMessageNode, DetachNode, InfluenceQueryNode, InputActionNode,
        NearestFlagNode, VisibilityQueryNode,
    };

    #[test]
    fn chat_node_enqueues() {
        let mut harness = Harness::new();

        harness.exec(&mut ChatMessageNode::team("cover me"));
        harness.exec(&mut ChatMessageNode::private("ref", "gg"));

        assert_eq!(harness.chat.pop().unwrap().kind, ChatKind::Team);
        let private = harness.chat.pop().unwrap();
        assert_eq!(private.kind, ChatKind::Private("ref".into()));
        assert_eq!(private.message, "gg");
    }

    #[test]
    fn input_action_node_sets_flag() {
        let mut harness = Harness::new();
        harness.exec(&mut InputActionNode::new(InputAction::Bomb));
        assert!(harness.input.is_set(InputAction::Bomb));
    }

    #[test]
    fn attach_cycle() {
        let mut harness = Harness::new();
        harness.state.players.push(live_player(2, "carrier", Vec2::new(520.5, 512.5), 0));

        // Detached: query fails, detach fails.
        assert_eq!(harness.exec(&mut AttachedQueryNode::new()), ExecuteResult::Failure);
        assert_eq!(harness.exec(&mut DetachNode), ExecuteResult::Failure);

        // Request attach to the teammate.
        harness.blackboard.set("carrier", PlayerId(2));
        assert_eq!(harness.exec(&mut AttachNode::new("carrier")), ExecuteResult::Success);
        assert_eq!(harness.commands.pop(), Some(Command::Attach(PlayerId(2))));

        // Server confirmed: now attached, detach works.
        harness.state.player_mut(PlayerId(1)).unwrap().attach_parent = PlayerId(2);
        assert_eq!(harness.exec(&mut AttachedQueryNode::new()), ExecuteResult::Success);
        assert_eq!(harness.exec(&mut DetachNode), ExecuteResult::Success);
        assert_eq!(harness.commands.pop(), Some(Command::Detach));
    }

    #[test]
    fn attach_refuses_enemy_target() {
        let mut harness = Harness::new();
        harness.state.players.push(live_player(2, "enemy", Vec2::new(520.5, 512.5), 1));
        harness.blackboard.set("carrier", PlayerId(2));
        assert_eq!(harness.exec(&mut AttachNode::new("carrier")), ExecuteResult::Failure);
        assert!(harness.commands.is_empty());
    }

    #[test]
    fn visibility_query_tracks_walls() {
        let mut harness = Harness::new();
        harness.blackboard.set("spot", Vec2::new(530.5, 512.5));

        assert_eq!(harness.exec(&mut VisibilityQueryNode::new("spot")), ExecuteResult::Success);

        for y in 500..525u16 {
            harness.map_mut().set_tile(520, y, drift_map::TileId::SOLID);
        }
        assert_eq!(harness.exec(&mut VisibilityQueryNode::new("spot")), ExecuteResult::Failure);
    }

    #[test]
    fn nearest_flag_ignores_our_own() {
        use drift_game::GameFlag;

        let mut harness = Harness::new();
        let center = Vec2::new(512.5, 512.5);
        harness.state.flags.push(GameFlag { id: 0, position: center + Vec2::new(5.0, 0.0), owner_frequency: 0 });
        harness.state.flags.push(GameFlag {
            id: 1,
            position: center + Vec2::new(9.0, 0.0),
            owner_frequency: GameFlag::NEUTRAL,
        });

        let mut node = NearestFlagNode::new("flag", "flag_pos");
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
        assert_eq!(harness.blackboard.get::<u16>("flag"), Some(1), "own-frequency flag is not a goal");
    }

    #[test]
    fn nearest_green_skips_expired() {
        use drift_core::Tick;
        use drift_game::Green;

        use crate::nodes::NearestGreenNode;

        let mut harness = Harness::new();
        harness.state.tick = Tick(500);
        let center = Vec2::new(512.5, 512.5);
        // Closer but already expired.
        harness.state.greens.push(Green { position: center + Vec2::new(3.0, 0.0), prize: 1, end_tick: Tick(400) });
        harness.state.greens.push(Green { position: center + Vec2::new(8.0, 0.0), prize: 2, end_tick: Tick(900) });

        let mut node = NearestGreenNode::new("green_pos");
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
        assert_eq!(harness.blackboard.get::<Vec2>("green_pos"), Some(center + Vec2::new(8.0, 0.0)));
    }

    #[test]
    fn territory_position_from_partition() {
        use crate::nodes::TerritoryPositionNode;

        let mut harness = Harness::new();
        harness.state.players.push(live_player(2, "enemy", Vec2::new(100.5, 100.5), 1));
        harness.blackboard.set("target", PlayerId(2));

        let mut node = TerritoryPositionNode::new("target", 50.0, "regroup");

        // Empty partition: nothing to anchor on.
        assert_eq!(harness.exec(&mut node), ExecuteResult::Failure);

        harness.kd.build([
            (PlayerId(1), Vec2::new(512.5, 512.5)),
            (PlayerId(2), Vec2::new(100.5, 100.5)),
        ]);
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
        assert!(harness.blackboard.get::<Vec2>("regroup").is_some());
    }

    #[test]
    fn influence_threshold() {
        let mut harness = Harness::new();
        harness.blackboard.set("spot", Vec2::new(100.5, 100.5));

        let mut node = InfluenceQueryNode::new("spot", 1.0);
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);

        harness.influence.add(100, 100, 5.0);
        assert_eq!(harness.exec(&mut node), ExecuteResult::Failure);
    }
}

#[cfg(test)]
mod waypoints {
    use drift_behavior::ExecuteResult;
    use drift_core::Vec2;

    use super::helpers::Harness;
    use crate::nodes::WaypointNode;

    #[test]
    fn cycles_when_close() {
        let mut harness = Harness::new();
        let a = Vec2::new(512.5, 512.5); // where we stand
        let b = Vec2::new(600.5, 512.5);
        harness.blackboard.set("route", vec![a, b]);

        let mut node = WaypointNode::new("route", "route_index", "route_target", 2.0);

        // Standing on waypoint 0: it advances to waypoint 1.
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
        assert_eq!(harness.blackboard.get::<Vec2>("route_target"), Some(b));
        assert_eq!(harness.blackboard.get::<usize>("route_index"), Some(1));

        // Far from waypoint 1: stays.
        assert_eq!(harness.exec(&mut node), ExecuteResult::Success);
        assert_eq!(harness.blackboard.get::<usize>("route_index"), Some(1));
    }

    #[test]
    fn empty_route_fails() {
        let mut harness = Harness::new();
        harness.blackboard.set("route", Vec::<Vec2>::new());
        let mut node = WaypointNode::new("route", "i", "t", 2.0);
        assert_eq!(harness.exec(&mut node), ExecuteResult::Failure);
    }
}

#[cfg(test)]
mod controller {
    use drift_behavior::{Behavior, BehaviorNode, ExecuteContext, ExecuteNode, ExecuteResult};
    use drift_core::{EventBus, PlayerId, Vec2};
    use drift_game::event::PlayerDeathEvent;
    use drift_game::{GameState, InputAction, InputFrame, LoginState};

    use super::helpers::live_player;
    use crate::Controller;

    fn playable_state() -> GameState {
        let mut state = GameState::new();
        state.login_state = LoginState::Complete;
        state.players.push(live_player(1, "self", Vec2::new(512.5, 512.5), 0));
        state.players.push(live_player(2, "enemy", Vec2::new(530.5, 512.5), 1));
        let mut spectator = live_player(3, "watcher", Vec2::new(100.5, 100.5), 1);
        spectator.ship = 8;
        state.players.push(spectator);
        state.self_id = PlayerId(1);
        state
    }

    /// Behavior whose tree pushes straight east every tick.
    struct PushEast;

    impl Behavior for PushEast {
        fn on_initialize(&mut self, ctx: &mut ExecuteContext<'_>) {
            ctx.blackboard.set("initialized", true);
        }

        fn create_tree(&mut self, _ctx: &mut ExecuteContext<'_>) -> Box<dyn BehaviorNode> {
            Box::new(ExecuteNode::new(|ctx| {
                let player = ctx.self_player().expect("self available in tests");
                ctx.steering.seek(player, player.position + Vec2::new(10.0, 0.0));
                ExecuteResult::Success
            }))
        }
    }

    #[test]
    fn full_tick_produces_forward_thrust() {
        let bus = EventBus::new();
        let mut controller = Controller::new(&bus);
        let state = playable_state();
        let mut input = InputFrame::new();

        controller.install_behavior("push", Box::new(PushEast), &state, &mut input);
        assert_eq!(controller.blackboard.get::<bool>("initialized"), Some(true));

        controller.update(0.01, &state, &mut input);

        // Self faces +x (rotation 0) and the tree pushed +x.
        assert!(input.is_set(InputAction::Forward));
        assert!(!input.is_set(InputAction::Backward));

        // Per-tick seeds and spatial index.
        assert_eq!(controller.blackboard.get::<f32>("leash_distance"), Some(15.0));
        assert_eq!(controller.kd.len(), 2, "spectator is excluded from the partition");
    }

    #[test]
    fn steering_resets_between_ticks() {
        let bus = EventBus::new();
        let mut controller = Controller::new(&bus);
        let state = playable_state();
        let mut input = InputFrame::new();
        controller.install_behavior("push", Box::new(PushEast), &state, &mut input);

        controller.update(0.01, &state, &mut input);
        let first = controller.steering.force;
        controller.update(0.01, &state, &mut input);

        // Accumulator was reset, not compounded.
        assert_eq!(controller.steering.force, first);
    }

    #[test]
    fn death_events_deposit_threat() {
        let bus = EventBus::new();
        let mut controller = Controller::new(&bus);
        let state = playable_state();
        let mut input = InputFrame::new();

        bus.dispatch(&PlayerDeathEvent {
            player: PlayerId(2),
            killer: PlayerId(1),
            position: Vec2::new(530.5, 512.5),
            bounty: 10,
        });

        controller.update(0.01, &state, &mut input);
        assert!(controller.influence.get(530, 512) > 0.0);
    }

    #[test]
    fn no_self_player_is_a_quiet_tick() {
        let bus = EventBus::new();
        let mut controller = Controller::new(&bus);
        let mut state = playable_state();
        state.self_id = PlayerId(42); // not in the snapshot
        let mut input = InputFrame::new();

        controller.update(0.01, &state, &mut input);
        assert_eq!(input.bits(), 0);
    }
}

#[cfg(test)]
mod zones_and_config {
    use crate::zones::{Zone, ZoneDispatcher};
    use crate::{Config, ZoneConfig};

    #[test]
    fn dispatcher_picks_matching_controller() {
        let mut dispatcher = ZoneDispatcher::standard();

        assert!(dispatcher.enter_zone(Zone::Warzone));
        assert_eq!(dispatcher.active().unwrap().default_behavior(), "center");

        assert!(dispatcher.enter_zone(Zone::Local));
        assert_eq!(dispatcher.active().unwrap().default_behavior(), "patrol");

        assert!(!dispatcher.enter_zone(Zone::Capture));
        assert!(dispatcher.active().is_none());
    }

    #[test]
    fn config_round_trip_and_fallback() {
        let mut config = Config::default();
        config.zones.insert(
            "general".into(),
            ZoneConfig { behavior: Some("patrol".into()), request_ship: Some(3) },
        );
        config.zones.insert(
            "warzone".into(),
            ZoneConfig { behavior: Some("center".into()), request_ship: None },
        );

        let json = serde_json::to_string(&config).unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();

        // Zone section wins where present, general fills the rest.
        let warzone = config.zone_section(Zone::Warzone);
        assert_eq!(warzone.behavior.as_deref(), Some("center"));
        assert_eq!(warzone.request_ship, Some(3));

        let local = config.zone_section(Zone::Local);
        assert_eq!(local.behavior.as_deref(), Some("patrol"));

        assert_eq!(config.cache_dir("local"), std::path::PathBuf::from("zones/local"));
        assert!(config.server("local").is_some());
    }

    #[test]
    fn zone_names_round_trip() {
        assert_eq!(serde_json::to_string(&Zone::Warzone).unwrap(), "\"warzone\"");
        let zone: Zone = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(zone, Zone::Local);
        assert!(serde_json::from_str::<Zone>("\"somewhere-new\"").is_err());
    }
}
