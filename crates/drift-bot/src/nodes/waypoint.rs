//! Patrol waypoint cycling.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::Vec2;

/// Walks a `Vec<Vec2>` stored on the blackboard, advancing to the next
/// entry (wrapping) once the ship is within `radius` of the current one.
/// The active target is written to `position_key` for a follower node.
pub struct WaypointNode {
    waypoints_key: &'static str,
    index_key: &'static str,
    position_key: &'static str,
    radius_sq: f32,
}

impl WaypointNode {
    pub fn new(
        waypoints_key: &'static str,
        index_key: &'static str,
        position_key: &'static str,
        radius: f32,
    ) -> Self {
        Self { waypoints_key, index_key, position_key, radius_sq: radius * radius }
    }
}

impl BehaviorNode for WaypointNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };
        let Some(waypoints) = ctx.blackboard.get::<Vec<Vec2>>(self.waypoints_key) else {
            return ExecuteResult::Failure;
        };
        if waypoints.is_empty() {
            return ExecuteResult::Failure;
        }

        let mut index = ctx.blackboard.get_or::<usize>(self.index_key, 0);
        if index >= waypoints.len() {
            index = 0;
        }

        let mut target = waypoints[index];
        if player.position.distance_sq(target) <= self.radius_sq {
            index = (index + 1) % waypoints.len();
            target = waypoints[index];
        }

        ctx.blackboard.set(self.position_key, target);
        ctx.blackboard.set(self.index_key, index);
        ExecuteResult::Success
    }
}
