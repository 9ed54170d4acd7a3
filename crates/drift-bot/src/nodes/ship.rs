//! Ship class queries and requests.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::{PlayerId, Tick};
use drift_game::Command;

/// Succeeds when the player's ship matches.
///
/// The ship to check comes from a literal or a blackboard key (`i32`), the
/// player from the snapshot self or a `PlayerId` key.
pub struct ShipQueryNode {
    ship: i32,
    ship_key: Option<&'static str>,
    player_key: Option<&'static str>,
}

impl ShipQueryNode {
    pub fn new(ship: u8) -> Self {
        Self { ship: ship as i32, ship_key: None, player_key: None }
    }

    pub fn from_key(ship_key: &'static str) -> Self {
        Self { ship: 0, ship_key: Some(ship_key), player_key: None }
    }

    pub fn for_player(player_key: &'static str, ship: u8) -> Self {
        Self { ship: ship as i32, ship_key: None, player_key: Some(player_key) }
    }
}

impl BehaviorNode for ShipQueryNode {
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

        let check = match self.ship_key {
            Some(key) => match ctx.blackboard.get::<i32>(key) {
                Some(ship) => ship,
                None => return ExecuteResult::Failure,
            },
            None => self.ship,
        };

        if !(0..=8).contains(&check) {
            return ExecuteResult::Failure;
        }

        if player.ship as i32 == check { ExecuteResult::Success } else { ExecuteResult::Failure }
    }
}

/// Requests a ship change, rate-limited so a stubborn server is not
/// spammed.
///
/// Succeeds once the snapshot shows the requested ship; returns `Running`
/// right after sending (the server has yet to confirm) and `Failure` while
/// inside the cooldown window.
pub struct ShipRequestNode {
    ship: i32,
    ship_key: Option<&'static str>,
}

/// Cooldown between requests, in ticks (~3 seconds).
const REQUEST_INTERVAL: u32 = 300;
const LAST_REQUEST_KEY: &str = "last_ship_request_tick";

impl ShipRequestNode {
    pub fn new(ship: u8) -> Self {
        Self { ship: ship as i32, ship_key: None }
    }

    pub fn from_key(ship_key: &'static str) -> Self {
        Self { ship: 0, ship_key: Some(ship_key) }
    }
}

impl BehaviorNode for ShipRequestNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(player) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };

        let requested = match self.ship_key {
            Some(key) => match ctx.blackboard.get::<i32>(key) {
                Some(ship) => ship,
                None => return ExecuteResult::Failure,
            },
            None => self.ship,
        };

        if !(0..=7).contains(&requested) {
            return ExecuteResult::Failure;
        }
        if player.ship as i32 == requested {
            return ExecuteResult::Success;
        }

        let now = ctx.state.tick;
        let allowed = match ctx.blackboard.get::<Tick>(LAST_REQUEST_KEY) {
            Some(last) => now.gte(last + REQUEST_INTERVAL),
            None => true,
        };

        if allowed {
            log::info!("requesting ship {requested}");
            ctx.commands.push(Command::ShipRequest(requested as u8));
            ctx.blackboard.set(LAST_REQUEST_KEY, now);
            return ExecuteResult::Running;
        }

        ExecuteResult::Failure
    }
}
