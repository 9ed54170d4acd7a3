//! Capture-flag queries.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};

/// Finds the closest flag our frequency does not hold and stores its
/// position (`Vec2`) and id (`u16`).
pub struct NearestFlagNode {
    position_key: &'static str,
    flag_key: &'static str,
}

impl NearestFlagNode {
    pub fn new(flag_key: &'static str, position_key: &'static str) -> Self {
        Self { position_key, flag_key }
    }
}

impl BehaviorNode for NearestFlagNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        let nearest = ctx
            .state
            .flags
            .iter()
            .filter(|flag| flag.owner_frequency != player.frequency)
            .min_by(|a, b| {
                let da = a.position.distance_sq(player.position);
                let db = b.position.distance_sq(player.position);
                da.total_cmp(&db)
            });

        match nearest {
            Some(flag) => {
                let (id, position) = (flag.id, flag.position);
                ctx.blackboard.set(self.flag_key, id);
                ctx.blackboard.set(self.position_key, position);
                ExecuteResult::Success
            }
            None => ExecuteResult::Failure,
        }
    }
}

/// Copies the position of the flag whose id is stored under `flag_key`.
pub struct FlagPositionQueryNode {
    flag_key: &'static str,
    position_key: &'static str,
}

impl FlagPositionQueryNode {
    pub fn new(flag_key: &'static str, position_key: &'static str) -> Self {
        Self { flag_key, position_key }
    }
}

impl BehaviorNode for FlagPositionQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(id) = ctx.blackboard.get::<u16>(self.flag_key) else {
            return ExecuteResult::Failure;
        };

        match ctx.state.flags.iter().find(|flag| flag.id == id) {
            Some(flag) => {
                let position = flag.position;
                ctx.blackboard.set(self.position_key, position);
                ExecuteResult::Success
            }
            None => ExecuteResult::Failure,
        }
    }
}
