//! Prize ("green") hunting.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};

/// Finds the closest prize that hasn't expired and stores its position as
/// a `Vec2`.
pub struct NearestGreenNode {
    position_key: &'static str,
}

impl NearestGreenNode {
    pub fn new(position_key: &'static str) -> Self {
        Self { position_key }
    }
}

impl BehaviorNode for NearestGreenNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        let nearest = ctx
            .state
            .greens
            .iter()
            .filter(|green| green.end_tick.gt(ctx.state.tick))
            .min_by(|a, b| {
                let da = a.position.distance_sq(player.position);
                let db = b.position.distance_sq(player.position);
                da.total_cmp(&db)
            });

        match nearest {
            Some(green) => {
                let position = green.position;
                ctx.blackboard.set(self.position_key, position);
                ExecuteResult::Success
            }
            None => ExecuteResult::Failure,
        }
    }
}
