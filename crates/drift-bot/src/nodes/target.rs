//! Target selection.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::Vec2;
use drift_map::TileId;

/// Picks the closest enemy worth shooting and stores its `PlayerId`.
///
/// Skipped outright: spectators, teammates, players still in spawn grace,
/// players the network layer hasn't synchronized (or whose position is
/// still the zero origin), and anyone parked on a safe tile.
pub struct NearestTargetNode {
    player_key: &'static str,
}

impl NearestTargetNode {
    pub fn new(player_key: &'static str) -> Self {
        Self { player_key }
    }
}

impl BehaviorNode for NearestTargetNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(this) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        let mut best = None;
        let mut best_dist_sq = f32::MAX;

        for player in &ctx.state.players {
            if player.id == this.id {
                continue;
            }
            if player.is_spectator() {
                continue;
            }
            if player.frequency == this.frequency {
                continue;
            }
            if player.is_respawning() {
                continue;
            }
            if player.position == Vec2::ZERO {
                continue;
            }
            if !player.synchronized {
                continue;
            }
            if ctx.state.map.tile_id_at(player.position) == TileId::SAFE {
                continue;
            }

            let dist_sq = player.position.distance_sq(this.position);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best = Some(player.id);
            }
        }

        match best {
            Some(id) => {
                ctx.blackboard.set(self.player_key, id);
                ExecuteResult::Success
            }
            None => ExecuteResult::Failure,
        }
    }
}
