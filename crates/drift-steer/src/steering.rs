//! The per-tick steering accumulator.

use drift_core::{Vec2, math::wrap_to_pi};
use drift_game::Player;

/// Accumulated movement intent for one tick.
///
/// The controller resets this before the tree runs; leaves then stack any
/// number of seek/face/pursue contributions onto it.  `force` is a desired
/// world-space push, `rotation` a desired heading change in radians wrapped
/// to `[-π, π]`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Steering {
    pub force: Vec2,
    pub rotation: f32,
}

impl Steering {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.force = Vec2::ZERO;
        self.rotation = 0.0;
    }

    /// Rotate toward `target`, compounding with rotation already requested
    /// this tick.
    pub fn face(&mut self, player: &Player, target: Vec2) {
        let to_target = target - player.position;
        let heading = player.heading().rotated(self.rotation);

        let delta = heading.angle() - to_target.angle();
        self.rotation += wrap_to_pi(delta);
    }

    /// Push straight at `target`.
    pub fn seek(&mut self, player: &Player, target: Vec2) {
        self.force += target - player.position;
    }

    /// Push toward `target` but hold `distance` short of it; inside that
    /// ring the push aims at the ring, not the target.
    pub fn seek_within(&mut self, player: &Player, target: Vec2, distance: f32) {
        let to_target = target - player.position;

        if to_target.length_sq() <= distance * distance {
            self.seek(player, target - to_target.normalized() * distance);
            return;
        }

        self.force += to_target;
    }

    /// Chase `target`, leading its velocity by the estimated intercept time
    /// `|to_target| / (max_speed + target_speed)`.
    ///
    /// Two clamps keep the lead sane: within `distance` this degrades to
    /// [`seek_within`](Self::seek_within) so the bot orbits instead of
    /// ramming, and a head-on approach (closing while headings oppose)
    /// drops the lead entirely — leading a jouster only makes you miss.
    pub fn pursue(&mut self, player: &Player, target: &Player, target_position: Vec2, distance: f32, max_speed: f32) {
        let to_target = target_position - player.position;
        let time = to_target.length() / (max_speed + target.velocity.length());

        if to_target.length_sq() <= distance * distance {
            self.seek(player, target_position - to_target.normalized() * distance);
            return;
        }

        let alignment = player.heading().dot(target.heading());
        if to_target.dot(player.heading()) > 0.0 && alignment < -0.95 {
            self.seek(player, target_position);
            return;
        }

        self.seek(player, target_position + target.velocity * time);
    }
}
