//! Steering wrappers and the pathing waypoint follower.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::{PlayerId, Vec2};

/// Rotate toward the position under `position_key`.
pub struct FaceNode {
    position_key: &'static str,
}

impl FaceNode {
    pub fn new(position_key: &'static str) -> Self {
        Self { position_key }
    }
}

impl BehaviorNode for FaceNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(target) = ctx.blackboard.get::<Vec2>(self.position_key) else {
            return ExecuteResult::Failure;
        };
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        ctx.steering.face(player, target);
        ExecuteResult::Success
    }
}

/// Push toward the position under `position_key`, optionally holding the
/// distance stored under `distance_key` (`f32`).
pub struct SeekNode {
    position_key: &'static str,
    distance_key: Option<&'static str>,
}

impl SeekNode {
    pub fn new(position_key: &'static str) -> Self {
        Self { position_key, distance_key: None }
    }

    pub fn with_distance(position_key: &'static str, distance_key: &'static str) -> Self {
        Self { position_key, distance_key: Some(distance_key) }
    }
}

impl BehaviorNode for SeekNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(target) = ctx.blackboard.get::<Vec2>(self.position_key) else {
            return ExecuteResult::Failure;
        };
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        match self.distance_key {
            Some(key) => {
                let Some(distance) = ctx.blackboard.get::<f32>(key) else {
                    return ExecuteResult::Failure;
                };
                ctx.steering.seek_within(player, target, distance);
            }
            None => ctx.steering.seek(player, target),
        }

        ExecuteResult::Success
    }
}

/// [`SeekNode`] with a literal hold distance.
pub struct ArriveNode {
    position_key: &'static str,
    distance: f32,
}

impl ArriveNode {
    pub fn new(position_key: &'static str, distance: f32) -> Self {
        Self { position_key, distance }
    }
}

impl BehaviorNode for ArriveNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(target) = ctx.blackboard.get::<Vec2>(self.position_key) else {
            return ExecuteResult::Failure;
        };
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        ctx.steering.seek_within(player, target, self.distance);
        ExecuteResult::Success
    }
}

/// Chase the player under `player_key` with velocity lead.
pub struct PursueNode {
    player_key: &'static str,
    distance: f32,
}

impl PursueNode {
    pub fn new(player_key: &'static str, distance: f32) -> Self {
        Self { player_key, distance }
    }
}

impl BehaviorNode for PursueNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(target_id) = ctx.blackboard.get::<PlayerId>(self.player_key) else {
            return ExecuteResult::Failure;
        };
        let Some(target) = ctx.state.player(target_id) else {
            return ExecuteResult::Failure;
        };
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        let max_speed = ctx.state.settings.ship(player.ship).max_speed;
        ctx.steering.pursue(player, target, target.position, self.distance, max_speed);
        ExecuteResult::Success
    }
}

/// Plan a path to the position under `position_key` and steer along it.
///
/// The current path persists in the context across ticks; a re-plan happens
/// when there is no path yet or the goal tile moved.  Succeeds while a path
/// exists and is being followed, fails when the goal is unreachable.
pub struct GoToNode {
    position_key: &'static str,
}

impl GoToNode {
    pub fn new(position_key: &'static str) -> Self {
        Self { position_key }
    }
}

impl BehaviorNode for GoToNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(target) = ctx.blackboard.get::<Vec2>(self.position_key) else {
            return ExecuteResult::Failure;
        };
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        let radius = ctx.state.settings.ship(player.ship).radius;

        let needs_plan = ctx.path.is_empty() || ctx.path.goal().tile() != target.tile();
        if needs_plan {
            *ctx.path = ctx.pathfinder.find_path(
                &ctx.state.map,
                ctx.regions,
                player.position,
                target,
                radius,
                player.frequency,
            );
        }

        if ctx.path.is_empty() {
            return ExecuteResult::Failure;
        }

        // Step the cursor off waypoints we've reached.
        while ctx.path.is_current_tile(player.position) && !ctx.path.is_on_goal() {
            ctx.path.advance();
        }

        let waypoint = ctx.path.current();
        ctx.steering.seek(player, waypoint);
        ExecuteResult::Success
    }
}
