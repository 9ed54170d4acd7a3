//! Tree debugging aids.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};

/// Logs a fixed message every time it executes.  Always succeeds.
pub struct DebugPrintNode {
    message: &'static str,
    level: log::Level,
}

impl DebugPrintNode {
    pub fn new(message: &'static str) -> Self {
        Self { message, level: log::Level::Debug }
    }

    pub fn with_level(level: log::Level, message: &'static str) -> Self {
        Self { message, level }
    }
}

impl BehaviorNode for DebugPrintNode {
    fn execute(&mut self, _ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        log::log!(self.level, "{}", self.message);
        ExecuteResult::Success
    }
}
