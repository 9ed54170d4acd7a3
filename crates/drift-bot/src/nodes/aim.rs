//! Weapon lead computation.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::PlayerId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Weapon {
    Bullet,
    Bomb,
}

/// Longest lead worth taking; beyond this the projection is noise.
const MAX_LEAD_SECS: f32 = 5.0;

/// Computes where to shoot so the projectile and the target meet, and
/// stores that point as a `Vec2`.
///
/// Lead time is `distance / (weapon_speed + receding_speed)`, clamped to
/// `[0, MAX_LEAD_SECS]`; a projection that lands behind us collapses back
/// to the target's actual position.
pub struct AimNode {
    weapon: Weapon,
    target_key: &'static str,
    out_key: &'static str,
}

impl AimNode {
    pub fn new(weapon: Weapon, target_key: &'static str, out_key: &'static str) -> Self {
        Self { weapon, target_key, out_key }
    }
}

impl BehaviorNode for AimNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(this) = ctx.self_player() else {
            return ExecuteResult::Failure;
        };
        let Some(target_id) = ctx.blackboard.get::<PlayerId>(self.target_key) else {
            return ExecuteResult::Failure;
        };
        let Some(target) = ctx.state.player(target_id) else {
            return ExecuteResult::Failure;
        };

        let ship = ctx.state.settings.ship(this.ship);
        let weapon_speed = match self.weapon {
            Weapon::Bullet => ship.bullet_speed,
            Weapon::Bomb => ship.bomb_speed,
        };

        let to_target = target.position - this.position;
        let distance = to_target.length();
        let receding = target.velocity.dot(to_target.normalized());

        let combined = weapon_speed + receding;
        let mut time = if combined.abs() > f32::EPSILON { distance / combined } else { 0.0 };
        if !(0.0..=MAX_LEAD_SECS).contains(&time) {
            time = 0.0;
        }

        let mut aim = target.position + target.velocity * time;

        // A lead that swings behind us is worse than no lead.
        let to_aim = (aim - this.position).normalized();
        if to_aim.dot(to_target.normalized()) < 0.0 {
            aim = target.position;
        }

        ctx.blackboard.set(self.out_key, aim);
        ExecuteResult::Success
    }
}
