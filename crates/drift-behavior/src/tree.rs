//! Node trait and composite nodes.

use crate::context::ExecuteContext;

/// Tri-state outcome of executing a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExecuteResult {
    Success,
    Failure,
    /// Not done yet — the controller runs the same tree again next tick and
    /// enclosing sequences resume at this child.
    Running,
}

/// One node of a behavior tree.
///
/// `execute` takes `&mut self` because composites carry resume state and
/// leaves are free to keep small caches; trees are never shared between
/// controllers.
pub trait BehaviorNode: Send {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult;
}

// ── Composites ────────────────────────────────────────────────────────────────

/// Runs children in order until one fails.
///
/// `Running` is remembered: the next tick resumes at the running child
/// rather than child 0.  The resume index resets after a `Failure` or a
/// full pass of successes.
pub struct SequenceNode {
    children: Vec<Box<dyn BehaviorNode>>,
    running_index: usize,
}

impl SequenceNode {
    pub fn new(children: Vec<Box<dyn BehaviorNode>>) -> Self {
        Self { children, running_index: 0 }
    }
}

impl BehaviorNode for SequenceNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let start = if self.running_index < self.children.len() { self.running_index } else { 0 };

        for index in start..self.children.len() {
            match self.children[index].execute(ctx) {
                ExecuteResult::Failure => {
                    self.running_index = 0;
                    return ExecuteResult::Failure;
                }
                ExecuteResult::Running => {
                    self.running_index = index;
                    return ExecuteResult::Running;
                }
                ExecuteResult::Success => {}
            }
        }

        self.running_index = 0;
        ExecuteResult::Success
    }
}

/// Runs children in order, returning the first non-`Failure` result.
pub struct SelectorNode {
    children: Vec<Box<dyn BehaviorNode>>,
}

impl SelectorNode {
    pub fn new(children: Vec<Box<dyn BehaviorNode>>) -> Self {
        Self { children }
    }
}

impl BehaviorNode for SelectorNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        for child in &mut self.children {
            match child.execute(ctx) {
                ExecuteResult::Failure => {}
                other => return other,
            }
        }
        ExecuteResult::Failure
    }
}

/// Runs *every* child each tick, regardless of individual results.
///
/// Result policy: `Success` whenever the child list is non-empty, `Failure`
/// when it is empty.  Call sites lean on this — a parallel
/// chase-and-shoot keeps chasing when the shoot gate fails, so an
/// "all must succeed" policy would be wrong here.  Children must therefore
/// be safe to run even when a sibling fails.
pub struct ParallelNode {
    children: Vec<Box<dyn BehaviorNode>>,
}

impl ParallelNode {
    pub fn new(children: Vec<Box<dyn BehaviorNode>>) -> Self {
        Self { children }
    }
}

impl BehaviorNode for ParallelNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        if self.children.is_empty() {
            return ExecuteResult::Failure;
        }
        for child in &mut self.children {
            child.execute(ctx);
        }
        ExecuteResult::Success
    }
}

// ── Decorators ────────────────────────────────────────────────────────────────

/// Swaps Success and Failure; `Running` passes through.
pub struct InvertNode {
    child: Box<dyn BehaviorNode>,
}

impl InvertNode {
    pub fn new(child: Box<dyn BehaviorNode>) -> Self {
        Self { child }
    }
}

impl BehaviorNode for InvertNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        match self.child.execute(ctx) {
            ExecuteResult::Success => ExecuteResult::Failure,
            ExecuteResult::Failure => ExecuteResult::Success,
            ExecuteResult::Running => ExecuteResult::Running,
        }
    }
}

/// Runs the child for effect and reports Success regardless of its result.
pub struct SuccessNode {
    child: Box<dyn BehaviorNode>,
}

impl SuccessNode {
    pub fn new(child: Box<dyn BehaviorNode>) -> Self {
        Self { child }
    }
}

impl BehaviorNode for SuccessNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        self.child.execute(ctx);
        ExecuteResult::Success
    }
}

// ── Closure leaf ──────────────────────────────────────────────────────────────

/// A leaf backed by a closure — for one-off zone logic not worth a named
/// node type.
pub struct ExecuteNode {
    func: Box<dyn FnMut(&mut ExecuteContext<'_>) -> ExecuteResult + Send>,
}

impl ExecuteNode {
    pub fn new(func: impl FnMut(&mut ExecuteContext<'_>) -> ExecuteResult + Send + 'static) -> Self {
        Self { func: Box::new(func) }
    }
}

impl BehaviorNode for ExecuteNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        (self.func)(ctx)
    }
}
