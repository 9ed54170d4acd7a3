//! The reusable behavior-node library.
//!
//! Every leaf conforms to `BehaviorNode::execute(ctx) -> ExecuteResult` and
//! follows the same failure discipline: anything that contractually may not
//! succeed (no target, missing blackboard key, no path) is a plain
//! `Failure` — never an error, never a log line.  Blackboard keys are
//! `&'static str`; player-valued keys hold `PlayerId` and are re-resolved
//! against the snapshot each tick.

pub mod aim;
pub mod attach;
pub mod blackboard;
pub mod chat;
pub mod debug;
pub mod flag;
pub mod green;
pub mod influence;
pub mod input;
pub mod map;
pub mod math;
pub mod movement;
pub mod player;
pub mod region;
pub mod ship;
pub mod target;
pub mod territory;
pub mod timer;
pub mod waypoint;

pub use aim::{AimNode, Weapon};
pub use attach::{AttachNode, AttachedQueryNode, DetachNode};
pub use blackboard::{BlackboardEraseNode, BlackboardSetNode, BlackboardSetQueryNode, ValueCompareQueryNode};
pub use chat::ChatMessageNode;
pub use debug::DebugPrintNode;
pub use flag::{FlagPositionQueryNode, NearestFlagNode};
pub use green::NearestGreenNode;
pub use influence::InfluenceQueryNode;
pub use input::InputActionNode;
pub use map::{TileQueryNode, VisibilityQueryNode};
pub use math::{DistanceQueryNode, NormalizeNode, RayNode, RayRectInterceptNode, VectorSubtractNode};
pub use movement::{ArriveNode, FaceNode, GoToNode, PursueNode, SeekNode};
pub use player::{PlayerEnergyQueryNode, PlayerPositionQueryNode, PlayerStatusQueryNode};
pub use region::{InRegionNode, SameRegionNode};
pub use ship::{ShipQueryNode, ShipRequestNode};
pub use target::NearestTargetNode;
pub use territory::TerritoryPositionNode;
pub use timer::{TimerExpiredNode, TimerSetNode};
pub use waypoint::WaypointNode;
