//! Player record queries.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::PlayerId;
use drift_game::Player;

fn resolve<'a>(ctx: &'a ExecuteContext<'_>, player_key: Option<&'static str>) -> Option<&'a Player> {
    match player_key {
        Some(key) => {
            let id = ctx.blackboard.get::<PlayerId>(key)?;
            ctx.state.player(id)
        }
        None => ctx.self_player(),
    }
}

/// Copies a player's position to `position_key`.
pub struct PlayerPositionQueryNode {
    player_key: Option<&'static str>,
    position_key: &'static str,
}

impl PlayerPositionQueryNode {
    pub fn of_self(position_key: &'static str) -> Self {
        Self { player_key: None, position_key }
    }

    pub fn new(player_key: &'static str, position_key: &'static str) -> Self {
        Self { player_key: Some(player_key), position_key }
    }
}

impl BehaviorNode for PlayerPositionQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(player) = resolve(ctx, self.player_key) else {
            return ExecuteResult::Failure;
        };

        let position = player.position;
        ctx.blackboard.set(self.position_key, position);
        ExecuteResult::Success
    }
}

/// Succeeds when a player has a togglable status bit set (cloak, stealth…).
pub struct PlayerStatusQueryNode {
    player_key: Option<&'static str>,
    status: u8,
}

impl PlayerStatusQueryNode {
    pub fn of_self(status: u8) -> Self {
        Self { player_key: None, status }
    }

    pub fn new(player_key: &'static str, status: u8) -> Self {
        Self { player_key: Some(player_key), status }
    }
}

impl BehaviorNode for PlayerStatusQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(player) = resolve(ctx, self.player_key) else {
            return ExecuteResult::Failure;
        };

        if player.has_status(self.status) { ExecuteResult::Success } else { ExecuteResult::Failure }
    }
}

/// Copies a player's current energy to `energy_key` as `f32`.
pub struct PlayerEnergyQueryNode {
    player_key: Option<&'static str>,
    energy_key: &'static str,
}

impl PlayerEnergyQueryNode {
    pub fn of_self(energy_key: &'static str) -> Self {
        Self { player_key: None, energy_key }
    }

    pub fn new(player_key: &'static str, energy_key: &'static str) -> Self {
        Self { player_key: Some(player_key), energy_key }
    }
}

impl BehaviorNode for PlayerEnergyQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(player) = resolve(ctx, self.player_key) else {
            return ExecuteResult::Failure;
        };

        let energy = player.energy;
        ctx.blackboard.set(self.energy_key, energy);
        ExecuteResult::Success
    }
}
