//! Planar vector math used throughout the framework.
//!
//! Positions and velocities are in tile units (`f32`), matching the wire
//! protocol's 16-pixels-per-tile convention after the network layer divides
//! raw coordinates down.  Single precision is deliberate: the playfield is
//! 1024×1024 tiles, so f32 keeps sub-pixel accuracy while halving the size
//! of the hot per-player arrays.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2D vector / point in tile coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f32 {
        (other - self).length_sq()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction; `Vec2::ZERO` stays zero.
    pub fn normalized(self) -> Vec2 {
        let len_sq = self.length_sq();
        if len_sq <= f32::EPSILON {
            return Vec2::ZERO;
        }
        self * (1.0 / len_sq.sqrt())
    }

    /// Counter-clockwise perpendicular: `(-y, x)`.
    #[inline]
    pub fn perpendicular(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Rotate counter-clockwise by `angle` radians.
    pub fn rotated(self, angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Angle of this vector in radians, in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Truncate both components toward zero — the tile containing this point.
    #[inline]
    pub fn tile(self) -> (u16, u16) {
        (self.x as u16, self.y as u16)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Wrap an angle into `[-π, π]`.
pub fn wrap_to_pi(angle: f32) -> f32 {
    use std::f32::consts::PI;

    let mut a = angle;
    while a > PI {
        a -= 2.0 * PI;
    }
    while a < -PI {
        a += 2.0 * PI;
    }
    a
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, inclusive of its min corner and exclusive of max
/// only when callers choose to treat it that way — containment here is
/// closed on both ends, matching tile-footprint checks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

// ── Ray ───────────────────────────────────────────────────────────────────────

/// A ray with unit direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction: direction.normalized() }
    }
}

/// Slab test of `ray` against `rect`.  Returns the entry distance along the
/// ray, or `None` when the ray misses or the box is entirely behind it.
pub fn ray_rect_intersect(ray: Ray, rect: Rect) -> Option<f32> {
    let inv_x = 1.0 / ray.direction.x;
    let inv_y = 1.0 / ray.direction.y;

    let (mut t_min, mut t_max) = {
        let t1 = (rect.min.x - ray.origin.x) * inv_x;
        let t2 = (rect.max.x - ray.origin.x) * inv_x;
        (t1.min(t2), t1.max(t2))
    };

    let (ty_min, ty_max) = {
        let t1 = (rect.min.y - ray.origin.y) * inv_y;
        let t2 = (rect.max.y - ray.origin.y) * inv_y;
        (t1.min(t2), t1.max(t2))
    };

    t_min = t_min.max(ty_min);
    t_max = t_max.min(ty_max);

    if t_max < t_min || t_max < 0.0 {
        return None;
    }

    Some(t_min.max(0.0))
}
