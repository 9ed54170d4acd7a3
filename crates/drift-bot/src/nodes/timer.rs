//! Blackboard-backed tick timers.
//!
//! Timers are just stored deadlines; all comparisons go through the
//! wrap-aware `Tick` operators, so they survive the 31-bit wrap.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::Tick;

/// Succeeds once the deadline under `key` has passed.  A missing key
/// counts as expired — a timer never set does not block anything.
pub struct TimerExpiredNode {
    key: &'static str,
}

impl TimerExpiredNode {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl BehaviorNode for TimerExpiredNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(deadline) = ctx.blackboard.get::<Tick>(self.key) else {
            return ExecuteResult::Success;
        };

        if ctx.state.tick.gte(deadline) { ExecuteResult::Success } else { ExecuteResult::Failure }
    }
}

/// Arms the timer under `timer_key` to fire `ticks` from now; the duration
/// can also come from a `u32` blackboard key.
pub struct TimerSetNode {
    timer_key: &'static str,
    ticks: u32,
    ticks_key: Option<&'static str>,
}

impl TimerSetNode {
    pub fn new(timer_key: &'static str, ticks: u32) -> Self {
        Self { timer_key, ticks, ticks_key: None }
    }

    pub fn from_key(timer_key: &'static str, ticks_key: &'static str) -> Self {
        Self { timer_key, ticks: 0, ticks_key: Some(ticks_key) }
    }
}

impl BehaviorNode for TimerSetNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let duration = match self.ticks_key {
            Some(key) => match ctx.blackboard.get::<u32>(key) {
                Some(ticks) => ticks,
                None => return ExecuteResult::Failure,
            },
            None => self.ticks,
        };

        ctx.blackboard.set(self.timer_key, ctx.state.tick + duration);
        ExecuteResult::Success
    }
}
