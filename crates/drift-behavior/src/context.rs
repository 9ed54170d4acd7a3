//! The per-tick bundle handed to every node.

use drift_game::{ChatQueue, CommandQueue, GameState, InputFrame, Player};
use drift_path::{Path, Pathfinder, RegionRegistry};
use drift_sense::{InfluenceMap, KdTree};
use drift_steer::Steering;

use crate::blackboard::Blackboard;

/// Everything a behavior node may read or write during one tick.
///
/// The controller assembles this from its own fields before executing the
/// root node and tears it apart afterwards; only the blackboard and the
/// current path outlive the tick.  Exactly one tree executes against a
/// given blackboard at a time.
pub struct ExecuteContext<'a> {
    /// Read-only world snapshot for this tick.
    pub state: &'a GameState,
    /// Seconds since the previous tick, capped by the run loop.
    pub dt: f32,

    pub blackboard: &'a mut Blackboard,

    /// Movement intent accumulator; reset by the controller each tick.
    pub steering: &'a mut Steering,
    /// The input frame the actuator and action nodes write into.
    pub input: &'a mut InputFrame,

    pub chat: &'a mut ChatQueue,
    pub commands: &'a mut CommandQueue,

    pub pathfinder: &'a mut Pathfinder,
    pub regions: &'a RegionRegistry,
    pub kd: &'a KdTree,
    pub influence: &'a mut InfluenceMap,

    /// The path currently being followed; persists across ticks so the
    /// follower can resume instead of re-planning.
    pub path: &'a mut Path,
}

impl<'a> ExecuteContext<'a> {
    /// Our own player record, if the snapshot has one yet.
    ///
    /// The borrow is tied to the snapshot, not to the context, so callers
    /// can keep the player while mutating steering or the blackboard.
    pub fn self_player(&self) -> Option<&'a Player> {
        self.state.self_player()
    }
}
