//! Vector and geometry helpers for wiring computed values between nodes.

use drift_behavior::{BehaviorNode, ExecuteContext, ExecuteResult};
use drift_core::{Ray, Rect, Vec2, math::ray_rect_intersect};

/// `out = a - b`, optionally normalized.
pub struct VectorSubtractNode {
    a_key: &'static str,
    b_key: &'static str,
    out_key: &'static str,
    normalize: bool,
}

impl VectorSubtractNode {
    pub fn new(a_key: &'static str, b_key: &'static str, out_key: &'static str) -> Self {
        Self { a_key, b_key, out_key, normalize: false }
    }

    pub fn normalized(a_key: &'static str, b_key: &'static str, out_key: &'static str) -> Self {
        Self { a_key, b_key, out_key, normalize: true }
    }
}

impl BehaviorNode for VectorSubtractNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let (Some(a), Some(b)) = (ctx.blackboard.get::<Vec2>(self.a_key), ctx.blackboard.get::<Vec2>(self.b_key))
        else {
            return ExecuteResult::Failure;
        };

        let mut result = a - b;
        if self.normalize {
            result = result.normalized();
        }

        ctx.blackboard.set(self.out_key, result);
        ExecuteResult::Success
    }
}

/// `out = normalize(in)`.
pub struct NormalizeNode {
    in_key: &'static str,
    out_key: &'static str,
}

impl NormalizeNode {
    pub fn new(in_key: &'static str, out_key: &'static str) -> Self {
        Self { in_key, out_key }
    }
}

impl BehaviorNode for NormalizeNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let Some(vector) = ctx.blackboard.get::<Vec2>(self.in_key) else {
            return ExecuteResult::Failure;
        };

        ctx.blackboard.set(self.out_key, vector.normalized());
        ExecuteResult::Success
    }
}

/// `out = |a - b|` as `f32`.
pub struct DistanceQueryNode {
    a_key: &'static str,
    b_key: &'static str,
    out_key: &'static str,
}

impl DistanceQueryNode {
    pub fn new(a_key: &'static str, b_key: &'static str, out_key: &'static str) -> Self {
        Self { a_key, b_key, out_key }
    }
}

impl BehaviorNode for DistanceQueryNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let (Some(a), Some(b)) = (ctx.blackboard.get::<Vec2>(self.a_key), ctx.blackboard.get::<Vec2>(self.b_key))
        else {
            return ExecuteResult::Failure;
        };

        ctx.blackboard.set(self.out_key, a.distance(b));
        ExecuteResult::Success
    }
}

/// Builds a `Ray` from an origin and direction key.
pub struct RayNode {
    origin_key: &'static str,
    direction_key: &'static str,
    out_key: &'static str,
}

impl RayNode {
    pub fn new(origin_key: &'static str, direction_key: &'static str, out_key: &'static str) -> Self {
        Self { origin_key, direction_key, out_key }
    }
}

impl BehaviorNode for RayNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let (Some(origin), Some(direction)) =
            (ctx.blackboard.get::<Vec2>(self.origin_key), ctx.blackboard.get::<Vec2>(self.direction_key))
        else {
            return ExecuteResult::Failure;
        };

        ctx.blackboard.set(self.out_key, Ray::new(origin, direction));
        ExecuteResult::Success
    }
}

/// Succeeds when the stored ray intersects the stored rect.
pub struct RayRectInterceptNode {
    ray_key: &'static str,
    rect_key: &'static str,
}

impl RayRectInterceptNode {
    pub fn new(ray_key: &'static str, rect_key: &'static str) -> Self {
        Self { ray_key, rect_key }
    }
}

impl BehaviorNode for RayRectInterceptNode {
    fn execute(&mut self, ctx: &mut ExecuteContext<'_>) -> ExecuteResult {
        let (Some(ray), Some(rect)) =
            (ctx.blackboard.get::<Ray>(self.ray_key), ctx.blackboard.get::<Rect>(self.rect_key))
        else {
            return ExecuteResult::Failure;
        };

        if ray_rect_intersect(ray, rect).is_some() { ExecuteResult::Success } else { ExecuteResult::Failure }
    }
}
