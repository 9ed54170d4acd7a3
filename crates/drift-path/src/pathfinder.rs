//! The A* driver and the static map-weight build.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use drift_core::Vec2;
use drift_map::{MAP_DIM, Map, TileId};

use crate::node::{NO_NODE, NodeFlags, NodeProcessor};
use crate::path::Path;
use crate::region::RegionRegistry;

const SQRT_2: f32 = std::f32::consts::SQRT_2;

/// Chebyshev window searched for the nearest wall during the weight build.
const WEIGHT_WINDOW: i32 = 5;

/// Weight applied to safe tiles so searches avoid planning into
/// safety stalemates.
const SAFE_WEIGHT: f32 = 10.0;

// ── Heap entry ────────────────────────────────────────────────────────────────

/// Open-set entry.  Ordered by `f`, then by insertion sequence so that of
/// two equally good nodes the one pushed earlier pops first — keeping path
/// shapes deterministic.
#[derive(Copy, Clone, Debug)]
struct HeapEntry {
    f: f32,
    seq: u32,
    node: u32,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f.total_cmp(&other.f).then(self.seq.cmp(&other.seq))
    }
}

/// Octile distance between tiles — admissible for 8-way movement with √2
/// diagonals.
#[inline]
fn heuristic(from: (u16, u16), to: (u16, u16)) -> f32 {
    let dx = (from.0 as i32 - to.0 as i32).unsigned_abs() as f32;
    let dy = (from.1 as i32 - to.1 as i32).unsigned_abs() as f32;
    dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy)
}

// ── Pathfinder ────────────────────────────────────────────────────────────────

/// A* over the node grid.
///
/// Owns the [`NodeProcessor`] and the open-set heap so repeated searches
/// reuse their allocations.  Searches are atomic with respect to ticks: a
/// caller either gets a complete path or an empty one.
pub struct Pathfinder {
    processor: NodeProcessor,
    open: BinaryHeap<Reverse<HeapEntry>>,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder {
    pub fn new() -> Self {
        Self { processor: NodeProcessor::new(), open: BinaryHeap::new() }
    }

    pub fn processor(&self) -> &NodeProcessor {
        &self.processor
    }

    // ── Static weights ────────────────────────────────────────────────────

    /// Rebuild the per-tile weight field and traversability flags for ships
    /// of `radius`.  Runs once per map load / radius change.
    ///
    /// Empty tiles near walls are weighted up (linearly, within a
    /// [`WEIGHT_WINDOW`]-tile window) so paths prefer open corridors; safe
    /// tiles get [`SAFE_WEIGHT`].
    pub fn create_map_weights(&mut self, map: &Map, radius: f32) {
        let rows: Vec<Vec<(f32, bool)>> = {
            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;
                (0..MAP_DIM).into_par_iter().map(|y| weight_row(map, radius, y)).collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                (0..MAP_DIM).map(|y| weight_row(map, radius, y)).collect()
            }
        };

        let mut traversable = 0usize;
        for (y, row) in rows.into_iter().enumerate() {
            for (x, (weight, passable)) in row.into_iter().enumerate() {
                self.processor.set_base(x as u16, y as u16, weight, passable);
                traversable += passable as usize;
            }
        }

        log::info!("map weights built: {traversable} traversable tiles at radius {radius:.3}");
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Find a path from `from` to `to` for a ship of `radius` on team
    /// `frequency`.
    ///
    /// Returns an empty path when either endpoint is off-grid, the two lie
    /// in different regions, or the search exhausts the open set.
    pub fn find_path(
        &mut self,
        map: &Map,
        regions: &RegionRegistry,
        from: Vec2,
        to: Vec2,
        radius: f32,
        frequency: u16,
    ) -> Path {
        let from_tile = from.tile();
        let to_tile = to.tile();
        if !Map::in_bounds(from_tile.0, from_tile.1) || !Map::in_bounds(to_tile.0, to_tile.1) {
            return Path::empty();
        }

        // Different regions can never connect; skip the whole search.
        if !regions.is_connected(from, to) {
            return Path::empty();
        }

        self.processor.reset_touched();
        self.open.clear();
        let mut seq = 0u32;

        let Some(start) = self.processor.get_node(from_tile.0, from_tile.1) else {
            return Path::empty();
        };
        let Some(goal) = self.processor.get_node(to_tile.0, to_tile.1) else {
            return Path::empty();
        };

        {
            let node = self.processor.node_mut(start);
            node.g = 0.0;
            node.f = heuristic(from_tile, to_tile);
            node.flags |= NodeFlags::OPENSET;
            self.open.push(Reverse(HeapEntry { f: node.f, seq, node: start }));
            seq += 1;
        }

        while let Some(Reverse(entry)) = self.open.pop() {
            let current = entry.node;

            if current == goal {
                return self.reconstruct(goal);
            }

            // Skip entries made stale by a cheaper re-push.
            if self.processor.node(current).flags & NodeFlags::CLOSED != 0 {
                continue;
            }
            {
                let node = self.processor.node_mut(current);
                node.flags = (node.flags | NodeFlags::CLOSED) & !NodeFlags::OPENSET;
            }

            let g = self.processor.node(current).g;
            let edges = self.processor.find_edges(map, current, radius, frequency);

            for i in 0..edges.count {
                let neighbor = edges.neighbors[i];
                let neighbor_node = *self.processor.node(neighbor);

                if neighbor_node.flags & NodeFlags::CLOSED != 0 {
                    continue;
                }

                let (nx, ny) = NodeProcessor::point_of(neighbor);
                let (cx, cy) = NodeProcessor::point_of(current);
                let diagonal = nx != cx && ny != cy;
                let step = if diagonal { SQRT_2 } else { 1.0 };

                let tentative_g = g + step * neighbor_node.weight;
                let in_open = neighbor_node.flags & NodeFlags::OPENSET != 0;

                if !in_open || tentative_g < neighbor_node.g {
                    let f = tentative_g + heuristic((nx, ny), to_tile);
                    let node = self.processor.node_mut(neighbor);
                    node.parent = current;
                    node.g = tentative_g;
                    node.f = f;
                    node.flags |= NodeFlags::OPENSET;
                    self.open.push(Reverse(HeapEntry { f, seq, node: neighbor }));
                    seq += 1;
                }
            }
        }

        Path::empty()
    }

    /// Walk parent links back from the goal and emit tile centers in
    /// start-to-goal order.
    fn reconstruct(&self, goal: u32) -> Path {
        let mut points = Vec::new();
        let mut current = goal;

        loop {
            let (x, y) = NodeProcessor::point_of(current);
            points.push(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));

            let parent = self.processor.node(current).parent;
            if parent == NO_NODE {
                break;
            }
            current = parent;
        }

        points.reverse();
        Path::new(points)
    }
}

/// Weight and traversability for one row of tiles.
fn weight_row(map: &Map, radius: f32, y: u16) -> Vec<(f32, bool)> {
    (0..MAP_DIM)
        .map(|x| {
            let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

            if map.is_solid(x, y, drift_map::FREQUENCY_ANY) {
                return (1.0, false);
            }

            let passable = map.get_possible_occupy_rect(center, radius, drift_map::FREQUENCY_ANY).is_some();

            let weight = if map.tile_id(x, y) == TileId::SAFE {
                SAFE_WEIGHT
            } else {
                match wall_distance(map, x, y) {
                    Some(d) if d < WEIGHT_WINDOW => 1.0 + (WEIGHT_WINDOW - d) as f32 * 0.5,
                    _ => 1.0,
                }
            };

            (weight, passable)
        })
        .collect()
}

/// Chebyshev distance to the nearest solid tile within [`WEIGHT_WINDOW`],
/// or `None` when the window is clear.
fn wall_distance(map: &Map, x: u16, y: u16) -> Option<i32> {
    for d in 1..=WEIGHT_WINDOW {
        let (min_x, max_x) = (x as i32 - d, x as i32 + d);
        let (min_y, max_y) = (y as i32 - d, y as i32 + d);

        let mut ring_solid = false;
        for cx in min_x..=max_x {
            ring_solid |= is_solid_signed(map, cx, min_y) || is_solid_signed(map, cx, max_y);
        }
        for cy in min_y + 1..max_y {
            ring_solid |= is_solid_signed(map, min_x, cy) || is_solid_signed(map, max_x, cy);
        }

        if ring_solid {
            return Some(d);
        }
    }
    None
}

#[inline]
fn is_solid_signed(map: &Map, x: i32, y: i32) -> bool {
    if x < 0 || y < 0 || x >= MAP_DIM as i32 || y >= MAP_DIM as i32 {
        // The playfield boundary is its own wall, but tiles outside the grid
        // should not inflate weights across the whole border band.
        return false;
    }
    map.is_solid(x as u16, y as u16, drift_map::FREQUENCY_ANY)
}
