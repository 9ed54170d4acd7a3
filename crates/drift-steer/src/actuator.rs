//! Conversion of accumulated steering into discrete input actions.

use drift_core::Vec2;
use drift_game::{ArenaSettings, InputAction, InputFrame, Player};

/// Default band for reconciling a force direction with a rotation target.
/// Call sites that need the nose locked (aiming while strafing) pass a
/// tighter value such as 0.996.
pub const DEFAULT_ROTATION_THRESHOLD: f32 = 0.75;

/// Dot-product dead-band under which no turn key is pressed.  Narrow on
/// purpose: at 100 ticks/second a wider band makes the nose dither around
/// the target heading.
const TURN_DEADBAND: f32 = 0.996;

/// Nudge applied when blending the steering direction back toward the
/// rotate target, radians.
const BLEND_STEP: f32 = 0.1;

#[derive(Copy, Clone, Debug, Default)]
pub struct Actuator;

impl Actuator {
    /// Translate `(force, rotation)` into at most one of Forward/Backward
    /// and one of Left/Right on `input`.
    ///
    /// Spectators and players still inside the respawn grace period produce
    /// no input at all.
    pub fn update(
        &self,
        player: &Player,
        settings: &ArenaSettings,
        input: &mut InputFrame,
        force: Vec2,
        rotation: f32,
        rotation_threshold: f32,
    ) {
        if player.is_spectator() {
            return;
        }
        let enter_delay = settings.enter_delay_secs();
        if player.enter_delay > 0.0 && player.enter_delay < enter_delay {
            return;
        }

        let heading = player.heading();

        // With no force the ship only rotates in place, so the current
        // heading is the default steering direction.
        let has_force = force.length_sq() > 0.0;
        let mut steering_direction = if has_force { force.normalized() } else { heading };

        // A rotation request overrides where the nose should point.
        let rotate_target = if rotation != 0.0 { heading.rotated(-rotation) } else { steering_direction };

        if !has_force {
            steering_direction = rotate_target;
        }

        let perp = heading.perpendicular();
        let behind = steering_direction.dot(heading) < 0.0;
        let mut leftside = steering_direction.dot(perp) < 0.0;

        // Force and rotation can disagree.  Keep the nose within the
        // threshold band around the rotate target, leaving wiggle room to
        // also drift toward the force direction; the sign flips when the
        // force is behind us so the ship reverses into it.
        if steering_direction.dot(rotate_target) < rotation_threshold {
            let mut sign = if leftside { 1.0 } else { -1.0 };
            if behind {
                sign = -sign;
            }

            steering_direction = rotate_target.rotated(BLEND_STEP * sign);
            leftside = steering_direction.dot(perp) < 0.0;
        }

        let clockwise = !leftside;

        if has_force {
            if behind {
                input.set_action(InputAction::Backward, true);
            } else {
                input.set_action(InputAction::Forward, true);
            }
        }

        if heading.dot(steering_direction) < TURN_DEADBAND {
            input.set_action(InputAction::Right, clockwise);
            input.set_action(InputAction::Left, !clockwise);
        }
    }
}
