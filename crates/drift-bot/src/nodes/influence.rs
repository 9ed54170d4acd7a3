//! Influence-field queries.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::Vec2;

/// Succeeds when the influence under the position key is below `threshold` —
/// "is this spot quiet enough".
pub struct InfluenceQueryNode {
    position_key: &'static str,
    threshold: f32,
}

impl InfluenceQueryNode {
    pub fn new(position_key: &'static str, threshold: f32) -> Self {
        Self { position_key, threshold }
    }
}

impl BehaviorNode for InfluenceQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(position) = ctx.blackboard.get::<Vec2>(self.position_key) else {
            return ExecuteResult::Failure;
        };

        if ctx.influence.get_at(position) < self.threshold {
            ExecuteResult::Success
        } else {
            ExecuteResult::Failure
        }
    }
}
