//! Turret attach/detach.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::PlayerId;
use drift_game::Command;

/// Succeeds when the player (self, or the one under `player_key`) is riding
/// another ship.
pub struct AttachedQueryNode {
    player_key: Option<&'static str>,
}

impl AttachedQueryNode {
    pub fn new() -> Self {
        Self { player_key: None }
    }

    pub fn for_player(player_key: &'static str) -> Self {
        Self { player_key: Some(player_key) }
    }
}

impl Default for AttachedQueryNode {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorNode for AttachedQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let player = match self.player_key {
            Some(key) => {
                let Some(id) = ctx.blackboard.get::<PlayerId>(key) else {
                    return ExecuteResult::Failure;
                };
                ctx.state.player(id)
            }
            None => ctx.self_player(),
        };
        let Some(player) = player else {
            return ExecuteResult::Failure;
        };

        if player.is_attached() { ExecuteResult::Success } else { ExecuteResult::Failure }
    }
}

/// Requests an attach to the player under `target_player_key`.
///
/// Enqueues the request and succeeds; confirmation shows up later as
/// `attach_parent` on our record.  Put a timer in front so it doesn't spam.
pub struct AttachNode {
    target_player_key: &'static str,
}

impl AttachNode {
    pub fn new(target_player_key: &'static str) -> Self {
        Self { target_player_key }
    }
}

impl BehaviorNode for AttachNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(this) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };
        let Some(target_id) = ctx.blackboard.get::<PlayerId>(self.target_player_key) else {
            return ExecuteResult::Failure;
        };
        let Some(target) = ctx.state.player(target_id) else {
            return ExecuteResult::Failure;
        };

        // Attaching to a spectator or a teammate-less target is refused by
        // the server anyway; don't bother asking.
        if target.is_spectator() || target.frequency != this.frequency || target.id == this.id {
            return ExecuteResult::Failure;
        }

        ctx.commands.push(Command::Attach(target.id));
        ExecuteResult::Success
    }
}

/// Detaches from the carrier.  Fails when not attached.
pub struct DetachNode;

impl BehaviorNode for DetachNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(this) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };
        if !this.is_attached() {
            return ExecuteResult::Failure;
        }

        ctx.commands.push(Command::Detach);
        ExecuteResult::Success
    }
}
