//! Tile and line-of-sight queries.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::Vec2;
use drift_map::{FREQUENCY_ANY, TileId};

/// Succeeds when the tile under our ship has the given id.
pub struct TileQueryNode {
    id: TileId,
}

impl TileQueryNode {
    pub fn new(id: TileId) -> Self {
        Self { id }
    }
}

impl BehaviorNode for TileQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        if ctx.state.map.tile_id_at(player.position) == self.id {
            ExecuteResult::Success
        } else {
            ExecuteResult::Failure
        }
    }
}

/// Line-of-sight raycast.
///
/// With one key: from our ship to that position, resolved at our own
/// frequency.  With two keys: between the two positions, frequency-blind.
/// Succeeds when the segment is clear.
pub struct VisibilityQueryNode {
    a_key: &'static str,
    b_key: Option<&'static str>,
}

impl VisibilityQueryNode {
    pub fn new(position_key: &'static str) -> Self {
        Self { a_key: position_key, b_key: None }
    }

    pub fn between(a_key: &'static str, b_key: &'static str) -> Self {
        Self { a_key, b_key: Some(b_key) }
    }
}

impl BehaviorNode for VisibilityQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(a) = ctx.blackboard.get::<Vec2>(self.a_key) else {
            return ExecuteResult::Failure;
        };

        let hit = match self.b_key {
            Some(b_key) => {
                let Some(b) = ctx.blackboard.get::<Vec2>(b_key) else {
                    return ExecuteResult::Failure;
                };
                ctx.state.map.cast_to(a, b, FREQUENCY_ANY).hit
            }
            None => {
                let Some(player) = ctx.self_player() else {
                    return ExecuteResult::Failure;
                };
                ctx.state.map.cast_to(player.position, a, player.frequency).hit
            }
        };

        if hit { ExecuteResult::Failure } else { ExecuteResult::Success }
    }
}
