//! `drift-behavior` — the behavior-tree runtime.
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`tree`]       | `ExecuteResult`, `BehaviorNode`, composite nodes     |
//! | [`blackboard`] | Typed key/value store shared by a tree across ticks  |
//! | [`context`]    | `ExecuteContext` — everything a node may touch       |
//! | [`builder`]    | Fluent stack-based tree construction                 |
//! | [`repository`] | Named `Behavior` factories                           |
//!
//! # Execution model
//!
//! A tree executes to completion within one controller tick — `Running` is
//! not a suspension, it is a status telling the controller to call the same
//! tree again next tick (sequences remember where to resume).  Leaves never
//! error: anything that contractually may not succeed returns
//! [`ExecuteResult::Failure`] and the nearest selector falls through.  No
//! node allocates on the hot path; trees are built once and then only
//! walked.

pub mod blackboard;
pub mod builder;
pub mod context;
pub mod repository;
pub mod tree;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use blackboard::Blackboard;
pub use builder::TreeBuilder;
pub use context::ExecuteContext;
pub use repository::{Behavior, BehaviorRepository};
pub use tree::{
    BehaviorNode, ExecuteNode, ExecuteResult, InvertNode, ParallelNode, SelectorNode, SequenceNode, SuccessNode,
};
