//! Direct input presses.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_game::InputAction;

/// Presses one input action for this tick (fire, warp, repel, …).
pub struct InputActionNode {
    action: InputAction,
}

impl InputActionNode {
    pub fn new(action: InputAction) -> Self {
        Self { action }
    }
}

impl BehaviorNode for InputActionNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        if ctx.self_player().is_none() {
            return ExecuteResult::Failure;
        }

        ctx.input.set_action(self.action, true);
        ExecuteResult::Success
    }
}
