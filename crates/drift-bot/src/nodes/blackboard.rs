//! Generic blackboard predicates and mutations.

use std::any::Any;

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};

/// Succeeds when `key` is present, whatever its type.
pub struct BlackboardSetQueryNode {
    key: &'static str,
}

impl BlackboardSetQueryNode {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl BehaviorNode for BlackboardSetQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        if ctx.blackboard.has(self.key) { ExecuteResult::Success } else { ExecuteResult::Failure }
    }
}

/// Succeeds when `key` holds exactly `value` (same type, equal value).
pub struct ValueCompareQueryNode<T> {
    key: &'static str,
    value: T,
}

impl<T> ValueCompareQueryNode<T> {
    pub fn new(key: &'static str, value: T) -> Self {
        Self { key, value }
    }
}

impl<T: Any + Send + Clone + PartialEq> BehaviorNode for ValueCompareQueryNode<T> {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        match ctx.blackboard.get::<T>(self.key) {
            Some(current) if current == self.value => ExecuteResult::Success,
            _ => ExecuteResult::Failure,
        }
    }
}

/// Stores a literal value under `key`.  Always succeeds.
pub struct BlackboardSetNode<T> {
    key: &'static str,
    value: T,
}

impl<T> BlackboardSetNode<T> {
    pub fn new(key: &'static str, value: T) -> Self {
        Self { key, value }
    }
}

impl<T: Any + Send + Clone> BehaviorNode for BlackboardSetNode<T> {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        ctx.blackboard.set(self.key, self.value.clone());
        ExecuteResult::Success
    }
}

/// Removes `key`.  Succeeds whether or not it existed.
pub struct BlackboardEraseNode {
    key: &'static str,
}

impl BlackboardEraseNode {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl BehaviorNode for BlackboardEraseNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        ctx.blackboard.erase(self.key);
        ExecuteResult::Success
    }
}
