//! Territory queries over the live-player partition.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::PlayerId;

/// Picks a held position at least `min_distance` away from the player under
/// `target_key`, using the per-tick KD partition, and stores it as a
/// `Vec2` — "regroup over there, away from them".
pub struct TerritoryPositionNode {
    target_key: &'static str,
    min_distance: f32,
    out_key: &'static str,
}

impl TerritoryPositionNode {
    pub fn new(target_key: &'static str, min_distance: f32, out_key: &'static str) -> Self {
        Self { target_key, min_distance, out_key }
    }
}

impl BehaviorNode for TerritoryPositionNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(target_id) = ctx.blackboard.get::<PlayerId>(self.target_key) else {
            return ExecuteResult::Failure;
        };
        let Some(target) = ctx.state.player(target_id) else {
            return ExecuteResult::Failure;
        };

        let Some(anchor) = ctx.kd.range_search(target.position, self.min_distance) else {
            return ExecuteResult::Failure;
        };

        let position = ctx.kd.node(anchor).position;
        ctx.blackboard.set(self.out_key, position);
        ExecuteResult::Success
    }
}
