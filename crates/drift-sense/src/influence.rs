//! A dense decaying scalar field over the playfield.
//!
//! The map is a leaky accumulator: events deposit value, `update(dt)`
//! bleeds every cell toward zero at one unit per second.  Callers scale
//! deposits against that implicit decay rate.

use drift_core::Vec2;

const DIM: usize = 1024;

pub struct InfluenceMap {
    cells: Vec<f32>,
}

impl Default for InfluenceMap {
    fn default() -> Self {
        Self::new()
    }
}

impl InfluenceMap {
    pub fn new() -> Self {
        Self { cells: vec![0.0; DIM * DIM] }
    }

    #[inline]
    fn index(x: u16, y: u16) -> usize {
        y as usize * DIM + x as usize
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> f32 {
        self.cells[Self::index(x, y)]
    }

    #[inline]
    pub fn get_at(&self, pos: Vec2) -> f32 {
        let (x, y) = pos.tile();
        self.get(x, y)
    }

    #[inline]
    pub fn set(&mut self, x: u16, y: u16, value: f32) {
        self.cells[Self::index(x, y)] = value;
    }

    #[inline]
    pub fn add(&mut self, x: u16, y: u16, value: f32) {
        self.cells[Self::index(x, y)] += value;
    }

    #[inline]
    pub fn add_at(&mut self, pos: Vec2, value: f32) {
        let (x, y) = pos.tile();
        self.add(x, y, value);
    }

    pub fn clear(&mut self) {
        self.cells.fill(0.0);
    }

    /// Decay every cell by `dt`, clamped at zero.
    pub fn update(&mut self, dt: f32) {
        for cell in &mut self.cells {
            *cell = (*cell - dt).max(0.0);
        }
    }
}
