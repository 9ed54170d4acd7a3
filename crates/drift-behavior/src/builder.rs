//! Fluent tree construction.
//!
//! ```ignore
//! let tree = TreeBuilder::new()
//!     .selector()
//!         .sequence()
//!             .invert_child(ShipQueryNode::new(0))
//!             .child(ShipRequestNode::new(0))
//!         .end()
//!         .child(WarpNode)
//!     .end()
//!     .build();
//! ```
//!
//! Composites open with `sequence()`/`selector()`/`parallel()` and close
//! with `end()`; `build()` closes anything left open and returns the root.
//! The builder is consumed at every step so a finished tree cannot be
//! accidentally extended.

use crate::tree::{BehaviorNode, InvertNode, ParallelNode, SelectorNode, SequenceNode, SuccessNode};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CompositeKind {
    Sequence,
    Selector,
    Parallel,
}

/// Wrapper applied to a composite when it closes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Decorator {
    #[default]
    None,
    /// Wrap in [`SuccessNode`] — run for effect, never fail the parent.
    Success,
    /// Wrap in [`InvertNode`].
    Invert,
}

struct Frame {
    kind: CompositeKind,
    decorator: Decorator,
    children: Vec<Box<dyn BehaviorNode>>,
}

#[derive(Default)]
pub struct TreeBuilder {
    stack: Vec<Frame>,
    root: Option<Box<dyn BehaviorNode>>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Opening composites ────────────────────────────────────────────────

    pub fn sequence(self) -> Self {
        self.open(CompositeKind::Sequence, Decorator::None)
    }

    pub fn selector(self) -> Self {
        self.open(CompositeKind::Selector, Decorator::None)
    }

    pub fn parallel(self) -> Self {
        self.open(CompositeKind::Parallel, Decorator::None)
    }

    /// A sequence that closes wrapped in the given decorator.
    pub fn sequence_decorated(self, decorator: Decorator) -> Self {
        self.open(CompositeKind::Sequence, decorator)
    }

    /// A selector that closes wrapped in the given decorator.
    pub fn selector_decorated(self, decorator: Decorator) -> Self {
        self.open(CompositeKind::Selector, decorator)
    }

    fn open(mut self, kind: CompositeKind, decorator: Decorator) -> Self {
        self.stack.push(Frame { kind, decorator, children: Vec::new() });
        self
    }

    // ── Adding children ───────────────────────────────────────────────────

    pub fn child(self, node: impl BehaviorNode + 'static) -> Self {
        self.attach(Box::new(node))
    }

    /// Add the child wrapped in [`InvertNode`].
    pub fn invert_child(self, node: impl BehaviorNode + 'static) -> Self {
        self.attach(Box::new(InvertNode::new(Box::new(node))))
    }

    /// Add the child wrapped in [`SuccessNode`].
    pub fn success_child(self, node: impl BehaviorNode + 'static) -> Self {
        self.attach(Box::new(SuccessNode::new(Box::new(node))))
    }

    fn attach(mut self, node: Box<dyn BehaviorNode>) -> Self {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            // A bare child outside any composite becomes the root.
            None => self.root = Some(node),
        }
        self
    }

    // ── Closing ───────────────────────────────────────────────────────────

    /// Close the innermost open composite.
    ///
    /// # Panics
    /// Panics when no composite is open — that is a structural bug in the
    /// calling tree description, not a runtime condition.
    pub fn end(mut self) -> Self {
        let frame = self.stack.pop().expect("end() without an open composite");

        let composite: Box<dyn BehaviorNode> = match frame.kind {
            CompositeKind::Sequence => Box::new(SequenceNode::new(frame.children)),
            CompositeKind::Selector => Box::new(SelectorNode::new(frame.children)),
            CompositeKind::Parallel => Box::new(ParallelNode::new(frame.children)),
        };

        let decorated: Box<dyn BehaviorNode> = match frame.decorator {
            Decorator::None => composite,
            Decorator::Success => Box::new(SuccessNode::new(composite)),
            Decorator::Invert => Box::new(InvertNode::new(composite)),
        };

        self.attach(decorated)
    }

    /// Close any composites left open and return the finished tree.
    ///
    /// # Panics
    /// Panics when nothing was added at all.
    pub fn build(mut self) -> Box<dyn BehaviorNode> {
        while !self.stack.is_empty() {
            self = self.end();
        }
        self.root.expect("build() on an empty tree")
    }
}
