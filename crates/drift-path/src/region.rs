//! Connectivity regions.
//!
//! A *region* is a maximal set of tiles mutually reachable by a ship of a
//! given radius using 4-neighbor steps that pass `Map::can_traverse`.  The
//! registry assigns one `RegionId` per tile (or `INVALID` for tiles no
//! footprint can cover) so reachability between any two points is a single
//! comparison.
//!
//! Building walks the map in row-major order and flood-fills every
//! unregistered coverable tile.  The fill runs on an explicit LIFO stack —
//! maps are routinely corridor-shaped and deep enough to overflow the call
//! stack if done recursively.

use drift_core::{EventBus, RegionId, Vec2};
use drift_map::{FREQUENCY_ANY, MAP_DIM, Map};

/// Dispatched once when a rebuild starts, before any tile events.
pub struct RegionBuildEvent;

/// Dispatched for every tile the builder attributes to a region: empty
/// tiles during the main fill, and enclosing boundary tiles ("base
/// interiors") during the solid sweep.
pub struct RegionTileAddEvent {
    pub x: u16,
    pub y: u16,
    pub region: RegionId,
}

const TILE_COUNT: usize = MAP_DIM as usize * MAP_DIM as usize;

#[inline]
fn tile_index(x: u16, y: u16) -> usize {
    y as usize * MAP_DIM as usize + x as usize
}

#[inline]
fn tile_center(x: u16, y: u16) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

// ── RegionRegistry ────────────────────────────────────────────────────────────

/// Flat per-tile region membership.  Immutable between rebuilds; rebuild on
/// map load and on ship-radius change.
pub struct RegionRegistry {
    regions: Vec<RegionId>,
    tile_counts: Vec<u32>,
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self {
            regions: vec![RegionId::INVALID; TILE_COUNT],
            tile_counts: Vec::new(),
        }
    }

    /// Partition the whole map for ships of `radius`.
    ///
    /// Synchronous; readers must not race with it (the controller calls it
    /// from the tick thread before any queries).
    pub fn create_all(&mut self, map: &Map, radius: f32, bus: &EventBus) {
        bus.dispatch(&RegionBuildEvent);

        self.regions.fill(RegionId::INVALID);
        self.tile_counts.clear();

        let mut filler = RegionFiller::new(map, radius);

        for y in 0..MAP_DIM {
            for x in 0..MAP_DIM {
                if self.regions[tile_index(x, y)].is_valid() {
                    continue;
                }
                if !map.can_overlap_tile(tile_center(x, y), radius, FREQUENCY_ANY) {
                    continue;
                }

                let region = RegionId(self.tile_counts.len() as u32);
                self.tile_counts.push(0);
                filler.fill(region, (x, y), &mut self.regions, &mut self.tile_counts, bus);
            }
        }

        log::info!("region build complete: {} regions at radius {radius:.3}", self.tile_counts.len());
    }

    pub fn region_count(&self) -> usize {
        self.tile_counts.len()
    }

    /// Region under a world position; `INVALID` off-grid or on uncoverable
    /// tiles.
    pub fn get_region(&self, pos: Vec2) -> RegionId {
        let (x, y) = pos.tile();
        if !Map::in_bounds(x, y) {
            return RegionId::INVALID;
        }
        self.regions[tile_index(x, y)]
    }

    /// Number of empty tiles attributed to the region under `pos`.
    pub fn tile_count(&self, pos: Vec2) -> u32 {
        let region = self.get_region(pos);
        if !region.is_valid() {
            return 0;
        }
        self.tile_counts[region.index()]
    }

    /// O(1) reachability: both positions valid and in the same region.
    pub fn is_connected(&self, a: Vec2, b: Vec2) -> bool {
        let region_a = self.get_region(a);
        if !region_a.is_valid() {
            return false;
        }
        region_a == self.get_region(b)
    }
}

// ── RegionFiller ──────────────────────────────────────────────────────────────

/// Scratch state for one `create_all` run.
struct RegionFiller<'a> {
    map: &'a Map,
    radius: f32,

    /// Per-tile mark: boundary tiles seen while filling this region.
    potential_edges: Vec<RegionId>,
    /// Northernmost boundary tile — the seed for the solid sweep.
    highest: Option<(u16, u16)>,

    stack: Vec<(u16, u16)>,
}

impl<'a> RegionFiller<'a> {
    fn new(map: &'a Map, radius: f32) -> Self {
        Self {
            map,
            radius,
            potential_edges: vec![RegionId::INVALID; TILE_COUNT],
            highest: None,
            stack: Vec::new(),
        }
    }

    fn fill(
        &mut self,
        region: RegionId,
        seed: (u16, u16),
        regions: &mut [RegionId],
        counts: &mut [u32],
        bus: &EventBus,
    ) {
        self.highest = None;
        self.fill_empty(region, seed, regions, counts, bus);
        self.fill_solid(region, regions, bus);
    }

    /// 4-neighbor flood over tiles the ship can step between.
    fn fill_empty(
        &mut self,
        region: RegionId,
        seed: (u16, u16),
        regions: &mut [RegionId],
        counts: &mut [u32],
        bus: &EventBus,
    ) {
        let (sx, sy) = seed;
        regions[tile_index(sx, sy)] = region;
        counts[region.index()] += 1;
        bus.dispatch(&RegionTileAddEvent { x: sx, y: sy, region });

        self.stack.clear();
        self.stack.push(seed);

        while let Some((x, y)) = self.stack.pop() {
            let from = tile_center(x, y);

            let neighbors =
                [(x as i32 - 1, y as i32), (x as i32 + 1, y as i32), (x as i32, y as i32 - 1), (x as i32, y as i32 + 1)];
            for (nx, ny) in neighbors {
                self.traverse_empty(region, from, nx, ny, regions, counts, bus);
            }
        }
    }

    fn traverse_empty(
        &mut self,
        region: RegionId,
        from: Vec2,
        to_x: i32,
        to_y: i32,
        regions: &mut [RegionId],
        counts: &mut [u32],
        bus: &EventBus,
    ) {
        if to_x < 0 || to_y < 0 || to_x >= MAP_DIM as i32 || to_y >= MAP_DIM as i32 {
            return;
        }
        let (tx, ty) = (to_x as u16, to_y as u16);
        let index = tile_index(tx, ty);
        let center = tile_center(tx, ty);

        // Tiles the ship cannot stand on form the region's boundary; remember
        // them for the solid sweep, keeping the northernmost as its seed.
        if !self.map.can_occupy_radius(center, self.radius, FREQUENCY_ANY) {
            self.potential_edges[index] = region;
            if self.highest.is_none_or(|(_, hy)| ty < hy) {
                self.highest = Some((tx, ty));
            }
        }

        if regions[index] == RegionId::INVALID && self.map.can_traverse(from, center, self.radius, FREQUENCY_ANY) {
            regions[index] = region;
            counts[region.index()] += 1;
            bus.dispatch(&RegionTileAddEvent { x: tx, y: ty, region });
            self.stack.push((tx, ty));
        }
    }

    /// 8-neighbor sweep over this region's boundary marks, starting from the
    /// northernmost one.  Finds wall tiles enclosing base interiors that the
    /// empty fill can never reach; membership is untouched, but each visited
    /// boundary tile is published so consumers can track base perimeters.
    fn fill_solid(&mut self, region: RegionId, regions: &[RegionId], bus: &EventBus) {
        let Some(seed) = self.highest else {
            return;
        };

        self.stack.clear();
        self.stack.push(seed);

        while let Some((x, y)) = self.stack.pop() {
            if self.is_empty_base_tile(tile_center(x, y), region, regions) {
                continue;
            }

            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    self.traverse_solid(x as i32 + dx, y as i32 + dy, region, bus);
                }
            }
        }
    }

    fn traverse_solid(&mut self, to_x: i32, to_y: i32, region: RegionId, bus: &EventBus) {
        if to_x < 0 || to_y < 0 || to_x >= MAP_DIM as i32 || to_y >= MAP_DIM as i32 {
            return;
        }
        let (tx, ty) = (to_x as u16, to_y as u16);
        let index = tile_index(tx, ty);

        if self.potential_edges[index] == region {
            self.potential_edges[index] = RegionId::INVALID;
            self.stack.push((tx, ty));
            bus.dispatch(&RegionTileAddEvent { x: tx, y: ty, region });
        }
    }

    /// An open tile inside the base whose footprint rect touches this
    /// region — the sweep must not walk through these.
    fn is_empty_base_tile(&self, pos: Vec2, region: RegionId, regions: &[RegionId]) -> bool {
        let (x, y) = pos.tile();
        if self.map.is_solid(x, y, FREQUENCY_ANY) {
            return false;
        }

        if let Some(rect) = self.map.get_possible_occupy_rect(pos, self.radius, FREQUENCY_ANY) {
            let top = tile_index(rect.start_x, rect.start_y);
            let bottom = tile_index(rect.end_x, rect.end_y);
            if regions[top] == region || regions[bottom] == region {
                return true;
            }
        }

        false
    }
}
