//! Per-tile search nodes and edge enumeration.

use drift_core::Vec2;
use drift_map::{MAP_DIM, Map, OccupyRect, TileId};

/// Flag bits on [`Node::flags`].
#[derive(Copy, Clone, Debug)]
pub struct NodeFlags;

impl NodeFlags {
    /// Node state is valid for the current search.
    pub const INITIALIZED: u8 = 1 << 0;
    pub const OPENSET: u8 = 1 << 1;
    pub const CLOSED: u8 = 1 << 2;
    /// Some footprint placement covers this tile.  Set once per
    /// weight build and preserved across searches.
    pub const TRAVERSABLE: u8 = 1 << 3;
}

/// Sentinel for "no parent node".
pub const NO_NODE: u32 = u32::MAX;

/// One A* record.  Position is not stored — it is recovered from the node's
/// index in the flat array, which keeps the struct at 20 bytes and the grid
/// cache-friendly.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    pub parent: u32,
    pub g: f32,
    pub f: f32,
    pub weight: f32,
    pub flags: u8,
}

impl Default for Node {
    fn default() -> Self {
        Self { parent: NO_NODE, g: 0.0, f: 0.0, weight: 1.0, flags: 0 }
    }
}

/// Up to 8 reachable neighbors of one node.
#[derive(Copy, Clone, Debug)]
pub struct NodeEdges {
    pub neighbors: [u32; 8],
    pub count: usize,
}

// ── Occupancy-rect step checks ────────────────────────────────────────────────
//
// When a node has a parent we know which footprint rect the ship holds while
// sitting on it.  Steps are validated by sliding that rect: a cardinal step
// checks the whole shifted rect, a diagonal step checks each axis's leading
// edge separately so the ship cannot cut a corner that both cardinal
// components individually clip.

fn can_occupy(map: &Map, rect: &OccupyRect, dx: i32, dy: i32, frequency: u16) -> bool {
    let min_x = rect.start_x as i32 + dx;
    let min_y = rect.start_y as i32 + dy;
    let max_x = rect.end_x as i32 + dx;
    let max_y = rect.end_y as i32 + dy;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if x < 0 || y < 0 || map.is_solid(x as u16, y as u16, frequency) {
                return false;
            }
        }
    }
    true
}

fn can_occupy_axis(map: &Map, rect: &OccupyRect, dx: i32, dy: i32, frequency: u16) -> bool {
    let solid = |x: i32, y: i32| x < 0 || y < 0 || map.is_solid(x as u16, y as u16, frequency);

    if dx < 0 {
        // Moving west: check the western edge of the shifted rect.
        let x = rect.start_x as i32 + dx;
        (rect.start_y as i32..=rect.end_y as i32).all(|y| !solid(x, y))
    } else if dx > 0 {
        let x = rect.end_x as i32 + dx;
        (rect.start_y as i32..=rect.end_y as i32).all(|y| !solid(x, y))
    } else if dy < 0 {
        let y = rect.start_y as i32 + dy;
        (rect.start_x as i32..=rect.end_x as i32).all(|x| !solid(x, y))
    } else if dy > 0 {
        let y = rect.end_y as i32 + dy;
        (rect.start_x as i32..=rect.end_x as i32).all(|x| !solid(x, y))
    } else {
        true
    }
}

// ── NodeProcessor ─────────────────────────────────────────────────────────────

/// Owner of the flat 1024×1024 node grid.
///
/// Nodes are *lazy*: they are reset on first access per search (tracked in a
/// touched list) rather than by sweeping the whole array, so a short path in
/// a huge map costs what the search actually explored.
pub struct NodeProcessor {
    nodes: Vec<Node>,
    /// Static per-tile weight from the last `create_map_weights` build.
    base_weights: Vec<f32>,
    touched: Vec<u32>,
}

impl Default for NodeProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeProcessor {
    pub fn new() -> Self {
        let count = MAP_DIM as usize * MAP_DIM as usize;
        Self {
            nodes: vec![Node::default(); count],
            base_weights: vec![1.0; count],
            touched: Vec::new(),
        }
    }

    #[inline]
    pub fn index_of(x: u16, y: u16) -> u32 {
        y as u32 * MAP_DIM as u32 + x as u32
    }

    /// Recover the tile coordinate from a node index.
    #[inline]
    pub fn point_of(index: u32) -> (u16, u16) {
        ((index % MAP_DIM as u32) as u16, (index / MAP_DIM as u32) as u16)
    }

    #[inline]
    pub fn node(&self, index: u32) -> &Node {
        &self.nodes[index as usize]
    }

    #[inline]
    pub fn node_mut(&mut self, index: u32) -> &mut Node {
        &mut self.nodes[index as usize]
    }

    /// Record the static weight and traversability for a tile (weight
    /// build only).
    pub fn set_base(&mut self, x: u16, y: u16, weight: f32, traversable: bool) {
        let index = NodeProcessor::index_of(x, y) as usize;
        self.base_weights[index] = weight;
        if traversable {
            self.nodes[index].flags |= NodeFlags::TRAVERSABLE;
        } else {
            self.nodes[index].flags &= !NodeFlags::TRAVERSABLE;
        }
    }

    /// Fetch the node for a tile, initializing it for the current search on
    /// first touch.  Only the `TRAVERSABLE` flag survives initialization.
    pub fn get_node(&mut self, x: u16, y: u16) -> Option<u32> {
        if !Map::in_bounds(x, y) {
            return None;
        }

        let index = NodeProcessor::index_of(x, y);
        let node = &mut self.nodes[index as usize];

        if node.flags & NodeFlags::INITIALIZED == 0 {
            node.parent = NO_NODE;
            node.g = 0.0;
            node.f = 0.0;
            node.weight = self.base_weights[index as usize];
            node.flags = NodeFlags::INITIALIZED | (node.flags & NodeFlags::TRAVERSABLE);
            self.touched.push(index);
        }

        Some(index)
    }

    /// Strip search state from every node touched since the last call.
    pub fn reset_touched(&mut self) {
        let touched = std::mem::take(&mut self.touched);
        for index in &touched {
            let node = &mut self.nodes[*index as usize];
            node.flags &= NodeFlags::TRAVERSABLE;
        }
        // Hand the emptied allocation back for reuse.
        self.touched = touched;
        self.touched.clear();
    }

    /// Enumerate the neighbors a ship of `radius` can step to from `node`.
    ///
    /// Rules, in order:
    /// - the parent tile is skipped (we came from there);
    /// - with a parent, the ship's occupancy rect (anchored toward the
    ///   parent) must slide legally: whole-rect for cardinals, per-axis
    ///   leading edges for diagonals;
    /// - the neighbor must carry `TRAVERSABLE`;
    /// - safe-tile neighbors get their weight raised to 10 so searches only
    ///   plan through safety when nothing else exists.
    pub fn find_edges(&mut self, map: &Map, node: u32, radius: f32, frequency: u16) -> NodeEdges {
        let mut edges = NodeEdges { neighbors: [NO_NODE; 8], count: 0 };

        let (base_x, base_y) = NodeProcessor::point_of(node);
        let parent = self.nodes[node as usize].parent;

        let mut skip: Option<(u16, u16)> = None;
        let mut rect: Option<OccupyRect> = None;

        if parent != NO_NODE {
            let (px, py) = NodeProcessor::point_of(parent);
            skip = Some((px, py));

            let base_pos = Vec2::new(base_x as f32 + 0.5, base_y as f32 + 0.5);
            let parent_pos = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            rect = map.closest_occupy_rect(base_pos, radius, parent_pos, frequency);
        }

        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let world_x = base_x as i32 + dx;
                let world_y = base_y as i32 + dy;
                if world_x < 0 || world_y < 0 {
                    continue;
                }
                let (world_x, world_y) = (world_x as u16, world_y as u16);

                if skip == Some((world_x, world_y)) {
                    continue;
                }

                let diagonal = dx != 0 && dy != 0;

                if let Some(rect) = &rect {
                    // Steps inside the current occupancy rect need no slide check.
                    if !rect.contains(world_x, world_y) {
                        if diagonal {
                            if !can_occupy_axis(map, rect, dx, 0, frequency) {
                                continue;
                            }
                            if !can_occupy_axis(map, rect, 0, dy, frequency) {
                                continue;
                            }
                        } else if !can_occupy(map, rect, dx, dy, frequency) {
                            continue;
                        }
                    }
                }

                let Some(neighbor) = self.get_node(world_x, world_y) else {
                    continue;
                };

                if self.nodes[neighbor as usize].flags & NodeFlags::TRAVERSABLE == 0 {
                    continue;
                }

                if map.tile_id(world_x, world_y) == TileId::SAFE {
                    self.nodes[neighbor as usize].weight = 10.0;
                }

                edges.neighbors[edges.count] = neighbor;
                edges.count += 1;
                if edges.count >= 8 {
                    return edges;
                }
            }
        }

        edges
    }
}
