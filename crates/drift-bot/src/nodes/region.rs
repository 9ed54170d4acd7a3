//! Region connectivity queries.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::Vec2;

/// Succeeds when our ship can reach `coord`.
pub struct InRegionNode {
    coord: Vec2,
}

impl InRegionNode {
    pub fn new(coord: Vec2) -> Self {
        Self { coord }
    }
}

impl BehaviorNode for InRegionNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        if ctx.regions.is_connected(player.position, self.coord) {
            ExecuteResult::Success
        } else {
            ExecuteResult::Failure
        }
    }
}

/// Succeeds when the two positions under the given keys share a region.
pub struct SameRegionNode {
    a_key: &'static str,
    b_key: &'static str,
}

impl SameRegionNode {
    pub fn new(a_key: &'static str, b_key: &'static str) -> Self {
        Self { a_key, b_key }
    }
}

impl BehaviorNode for SameRegionNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(a) = ctx.blackboard.get::<Vec2>(self.a_key) else {
            return ExecuteResult::Failure;
        };
        let Some(b) = ctx.blackboard.get::<Vec2>(self.b_key) else {
            return ExecuteResult::Failure;
        };

        if ctx.regions.is_connected(a, b) { ExecuteResult::Success } else { ExecuteResult::Failure }
    }
}
