//! Named behavior factories.
//!
//! A [`Behavior`] packages the blackboard seeding and tree construction for
//! one play style; the repository maps behavior names (from zone config or
//! chat commands) to these factories.  Each controller owns its repository —
//! there is no global registry.

use rustc_hash::FxHashMap;

use crate::context::ExecuteContext;
use crate::tree::BehaviorNode;

/// Factory for one named play style.
pub trait Behavior: Send {
    /// Seed blackboard keys this behavior expects.  Called once when the
    /// behavior is selected, before the first tree execution.
    fn on_initialize(&mut self, ctx: &mut ExecuteContext<'_>);

    /// Produce a fresh tree instance.
    fn create_tree(&mut self, ctx: &mut ExecuteContext<'_>) -> Box<dyn BehaviorNode>;
}

#[derive(Default)]
pub struct BehaviorRepository {
    behaviors: FxHashMap<String, Box<dyn Behavior>>,
}

impl BehaviorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `behavior` under `name`, replacing any previous entry.
    pub fn add(&mut self, name: impl Into<String>, behavior: Box<dyn Behavior>) {
        self.behaviors.insert(name.into(), behavior);
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Box<dyn Behavior>> {
        self.behaviors.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.behaviors.contains_key(name)
    }

    pub fn clear(&mut self) {
        self.behaviors.clear();
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}
