//! A finished path: an immutable point sequence plus an advancing cursor.

use drift_core::Vec2;

/// Tile-centered waypoints from start to goal.
///
/// Once built the points never change; only the cursor moves.  Queries on an
/// empty path return `Vec2::ZERO` rather than panicking — callers check
/// [`Path::is_empty`] first, and the degenerate value steers nowhere.
#[derive(Clone, Debug, Default)]
pub struct Path {
    points: Vec<Vec2>,
    index: usize,
}

impl Path {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points, index: 0 }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.index = 0;
    }

    /// Move the cursor one waypoint forward and return the new current
    /// point.  Advancing past the end is idempotent: the cursor parks on
    /// the goal.
    pub fn advance(&mut self) -> Vec2 {
        if self.is_empty() {
            return Vec2::ZERO;
        }
        if self.index < self.points.len() {
            self.index += 1;
        }
        self.current()
    }

    pub fn is_done(&self) -> bool {
        self.points.is_empty() || self.index > self.points.len() - 1
    }

    /// Cursor sits on the final waypoint.
    pub fn is_on_goal(&self) -> bool {
        !self.points.is_empty() && self.index >= self.points.len() - 1
    }

    pub fn current(&self) -> Vec2 {
        if self.is_empty() {
            return Vec2::ZERO;
        }
        if self.index >= self.points.len() - 1 {
            return self.goal();
        }
        self.points[self.index]
    }

    pub fn next_point(&self) -> Vec2 {
        if self.is_empty() {
            return Vec2::ZERO;
        }
        if self.index >= self.points.len() - 1 {
            return self.goal();
        }
        self.points[self.index + 1]
    }

    pub fn start(&self) -> Vec2 {
        self.points.first().copied().unwrap_or(Vec2::ZERO)
    }

    pub fn goal(&self) -> Vec2 {
        self.points.last().copied().unwrap_or(Vec2::ZERO)
    }

    /// Does the current waypoint sit on the same tile as `pos`?
    pub fn is_current_tile(&self, pos: Vec2) -> bool {
        if self.is_empty() {
            return false;
        }
        self.current().tile() == pos.tile()
    }

    /// Sum of segment lengths from the cursor to the goal.
    pub fn remaining_distance(&self) -> f32 {
        if self.points.is_empty() || self.index >= self.points.len() - 1 {
            return 0.0;
        }

        let mut distance = 0.0;
        for window in self.points[self.index..].windows(2) {
            distance += window[0].distance(window[1]);
        }
        distance
    }

    /// Does any waypoint from the cursor onward cross tile `(x, y)`?
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.points.is_empty() || self.index >= self.points.len() - 1 {
            return false;
        }
        self.points[self.index..]
            .iter()
            .any(|p| p.x as i32 == x && p.y as i32 == y)
    }

    /// Copy with collinear runs collapsed to their endpoints.  The raw path
    /// keeps every tile (several consumers want per-tile resolution); this
    /// is the opt-in smoothing pass for waypoint following.
    pub fn simplified(&self) -> Path {
        if self.points.len() <= 2 {
            return self.clone();
        }

        let mut points = vec![self.points[0]];
        for i in 1..self.points.len() - 1 {
            let prev = self.points[i - 1];
            let here = self.points[i];
            let next = self.points[i + 1];

            let a = here - prev;
            let b = next - here;
            let collinear = (a.x * b.y - a.y * b.x).abs() < 1e-6 && a.dot(b) > 0.0;
            if !collinear {
                points.push(here);
            }
        }
        points.push(*self.points.last().expect("len checked above"));

        Path::new(points)
    }
}
