//! The practice zone: behaviors for poking at the framework against a
//! local server.

use drift_behavior::{Behavior, BehaviorNode, BehaviorRepository, ExecuteContext, ExecuteNode, ExecuteResult, TreeBuilder};
use drift_core::Vec2;

use crate::nodes::{GoToNode, ShipQueryNode, ShipRequestNode, TimerExpiredNode, TimerSetNode, WaypointNode};
use crate::zones::{Zone, ZoneController};

pub struct LocalController;

impl ZoneController for LocalController {
    fn is_zone(&self, zone: Zone) -> bool {
        zone == Zone::Local
    }

    fn create_behaviors(&mut self, _arena: &str, repo: &mut BehaviorRepository) {
        log::info!("registering local behaviors");
        repo.add("patrol", Box::new(PatrolBehavior));
        repo.add("shipchange", Box::new(ShipChangeBehavior));
    }

    fn default_behavior(&self) -> &'static str {
        "patrol"
    }
}

/// Fly a fixed loop around the middle of the arena — exercises pathing and
/// waypoint following with no enemies required.
pub struct PatrolBehavior;

impl Behavior for PatrolBehavior {
    fn on_initialize(&mut self, ctx: &mut ExecuteContext<'_>) {
        ctx.blackboard.set("request_ship", 0i32);
        ctx.blackboard.set(
            "patrol_waypoints",
            vec![
                Vec2::new(492.5, 492.5),
                Vec2::new(532.5, 492.5),
                Vec2::new(532.5, 532.5),
                Vec2::new(492.5, 532.5),
            ],
        );
    }

    fn create_tree(&mut self, _ctx: &mut ExecuteContext<'_>) -> Box<dyn BehaviorNode> {
        TreeBuilder::new()
            .selector()
                .sequence()
                    .invert_child(ShipQueryNode::from_key("request_ship"))
                    .child(ShipRequestNode::from_key("request_ship"))
                .end()
                .sequence()
                    .child(WaypointNode::new("patrol_waypoints", "patrol_index", "patrol_target", 3.0))
                    .child(GoToNode::new("patrol_target"))
                .end()
            .end()
            .build()
    }
}

/// Cycle through every ship class on a timer — exercises the request
/// cooldown path.
pub struct ShipChangeBehavior;

impl Behavior for ShipChangeBehavior {
    fn on_initialize(&mut self, ctx: &mut ExecuteContext<'_>) {
        let first_change = ctx.state.tick + 100;
        ctx.blackboard.set("ship_change_timer", first_change);
    }

    fn create_tree(&mut self, _ctx: &mut ExecuteContext<'_>) -> Box<dyn BehaviorNode> {
        TreeBuilder::new()
            .sequence()
                .child(TimerExpiredNode::new("ship_change_timer"))
                .child(ExecuteNode::new(|ctx| {
                    let next = (ctx.blackboard.get_or::<i32>("ship_cycle", -1) + 1) % 8;
                    ctx.blackboard.set("ship_cycle", next);
                    ExecuteResult::Success
                }))
                .child(ShipRequestNode::from_key("ship_cycle"))
                .child(TimerSetNode::new("ship_change_timer", 1_000))
            .end()
            .build()
    }
}
