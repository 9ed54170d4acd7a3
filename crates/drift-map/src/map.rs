//! The static map and its occupancy queries.

use drift_core::{Tick, Vec2};

use crate::brick::{Brick, BrickMap};
use crate::tile::TileId;

/// Playfield dimension in tiles.  Fixed by the wire protocol.
pub const MAP_DIM: u16 = 1024;

/// Sentinel frequency that matches no team.
///
/// Region building and pathfinding pass this so that every brick counts as
/// solid, keeping their output valid for all frequencies.
pub const FREQUENCY_ANY: u16 = 0xFFFF;

// ── OccupyRect ────────────────────────────────────────────────────────────────

/// Inclusive tile bounds that a ship footprint may cover.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OccupyRect {
    pub start_x: u16,
    pub start_y: u16,
    pub end_x: u16,
    pub end_y: u16,
}

impl OccupyRect {
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.start_x && x <= self.end_x && y >= self.start_y && y <= self.end_y
    }
}

// ── CastResult ────────────────────────────────────────────────────────────────

/// Outcome of a line-of-sight cast.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CastResult {
    pub hit: bool,
    /// Entry point into the blocking tile, or the cast target when clear.
    pub position: Vec2,
}

// ── Map ───────────────────────────────────────────────────────────────────────

/// The immutable tile grid plus the dynamic brick overlay.
///
/// All queries take the caller's team `frequency`: doors resolve against the
/// map-wide door state, and bricks block every frequency except the one that
/// laid them.  Queries outside the grid answer "solid".
pub struct Map {
    tiles: Vec<u8>,
    doors_open: bool,
    bricks: BrickMap,
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl Map {
    /// An all-empty map.  The network collaborator fills tiles after
    /// download via [`Map::set_tile`].
    pub fn new() -> Self {
        Self {
            tiles: vec![TileId::EMPTY.0; MAP_DIM as usize * MAP_DIM as usize],
            doors_open: false,
            bricks: BrickMap::new(),
        }
    }

    #[inline]
    fn tile_index(x: u16, y: u16) -> usize {
        y as usize * MAP_DIM as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(x: u16, y: u16) -> bool {
        x < MAP_DIM && y < MAP_DIM
    }

    pub fn set_tile(&mut self, x: u16, y: u16, id: TileId) {
        if Map::in_bounds(x, y) {
            self.tiles[Map::tile_index(x, y)] = id.0;
        }
    }

    /// Door state is map-wide and maintained by the network collaborator.
    pub fn set_doors_open(&mut self, open: bool) {
        self.doors_open = open;
    }

    pub fn bricks(&self) -> &BrickMap {
        &self.bricks
    }

    pub fn bricks_mut(&mut self) -> &mut BrickMap {
        &mut self.bricks
    }

    /// Expire bricks whose lifetime has passed.  Returns the cleared bricks
    /// so the caller can publish removal events.
    pub fn expire_bricks(&mut self, now: Tick) -> Vec<Brick> {
        self.bricks.expire(now)
    }

    // ── Tile classification ───────────────────────────────────────────────

    /// Content id at `(x, y)`, with the brick overlay winning over the
    /// static grid.  Out-of-bounds reads as `SOLID`.
    pub fn tile_id(&self, x: u16, y: u16) -> TileId {
        if !Map::in_bounds(x, y) {
            return TileId::SOLID;
        }
        if !self.bricks.is_empty() && self.bricks.get(x, y).is_some() {
            return TileId::BRICK;
        }
        TileId(self.tiles[Map::tile_index(x, y)])
    }

    /// Content id under a world position.
    #[inline]
    pub fn tile_id_at(&self, pos: Vec2) -> TileId {
        let (x, y) = pos.tile();
        self.tile_id(x, y)
    }

    /// May a ship of team `frequency` not pass through `(x, y)`?
    pub fn is_solid(&self, x: u16, y: u16, frequency: u16) -> bool {
        if !Map::in_bounds(x, y) {
            return true;
        }

        // The hash lookup is skipped entirely on brick-free maps; this
        // sits inside every occupancy and pathfinding loop.
        if !self.bricks.is_empty() {
            if let Some(brick) = self.bricks.get(x, y) {
                if brick.team != frequency {
                    return true;
                }
            }
        }

        match TileId(self.tiles[Map::tile_index(x, y)]) {
            TileId::SOLID => true,
            TileId::DOOR => !self.doors_open,
            _ => false,
        }
    }

    // ── Footprint occupancy ───────────────────────────────────────────────
    //
    // A ship of radius `r` covers a `d×d` tile block, `d = ceil(2r)`.  A
    // block is *valid* when every tile in it is non-solid.  The queries
    // below are all phrased in terms of valid blocks so that region data,
    // path edges, and steering agree on exactly one collision model.

    /// Footprint edge length in tiles for `radius`.
    #[inline]
    pub fn footprint_span(radius: f32) -> u16 {
        ((radius * 2.0).ceil() as u16).max(1)
    }

    /// Is the `d×d` block with top-left tile `(left, top)` fully passable?
    fn block_valid(&self, left: i32, top: i32, span: u16, frequency: u16) -> bool {
        if left < 0 || top < 0 {
            return false;
        }
        for y in top..top + span as i32 {
            for x in left..left + span as i32 {
                if self.is_solid(x as u16, y as u16, frequency) {
                    return false;
                }
            }
        }
        true
    }

    /// Call `visit` with the top-left corner of every valid block containing
    /// the tile under `pos`; stop early when `visit` returns `true`.
    fn any_block_containing(
        &self,
        pos: Vec2,
        radius: f32,
        frequency: u16,
        mut visit: impl FnMut(i32, i32, u16) -> bool,
    ) -> bool {
        let (tx, ty) = pos.tile();
        if !Map::in_bounds(tx, ty) {
            return false;
        }
        let span = Map::footprint_span(radius);
        let d = span as i32;

        for top in (ty as i32 - d + 1)..=(ty as i32) {
            for left in (tx as i32 - d + 1)..=(tx as i32) {
                if self.block_valid(left, top, span, frequency) && visit(left, top, span) {
                    return true;
                }
            }
        }
        false
    }

    /// May the ship's footprint include the tile under `pos` at all?
    pub fn can_overlap_tile(&self, pos: Vec2, radius: f32, frequency: u16) -> bool {
        self.any_block_containing(pos, radius, frequency, |_, _, _| true)
    }

    /// May the ship stand centered on `pos`?
    pub fn can_occupy_radius(&self, pos: Vec2, radius: f32, frequency: u16) -> bool {
        let (tx, ty) = pos.tile();
        if !Map::in_bounds(tx, ty) {
            return false;
        }
        let span = Map::footprint_span(radius);
        let left = tx as i32 - (span as i32 - 1) / 2;
        let top = ty as i32 - (span as i32 - 1) / 2;
        self.block_valid(left, top, span, frequency)
    }

    /// Swept step check: can a ship overlapping the tile under `from` move
    /// one cardinal tile to overlap the tile under `to`?
    ///
    /// True when some valid block containing `from`'s tile either already
    /// contains `to`'s tile or stays valid after shifting by the step.
    pub fn can_traverse(&self, from: Vec2, to: Vec2, radius: f32, frequency: u16) -> bool {
        let (fx, fy) = (from.x as i32, from.y as i32);
        let (tx, ty) = (to.x as i32, to.y as i32);
        let (dx, dy) = (tx - fx, ty - fy);

        self.any_block_containing(from, radius, frequency, |left, top, span| {
            let d = span as i32;
            let contains_to = tx >= left && tx < left + d && ty >= top && ty < top + d;
            contains_to || self.block_valid(left + dx, top + dy, span, frequency)
        })
    }

    /// Tight tile bounds over every valid footprint block containing the
    /// tile under `pos`, or `None` when no placement exists.
    pub fn get_possible_occupy_rect(&self, pos: Vec2, radius: f32, frequency: u16) -> Option<OccupyRect> {
        let mut bounds: Option<OccupyRect> = None;

        self.any_block_containing(pos, radius, frequency, |left, top, span| {
            let d = span as i32;
            let rect = OccupyRect {
                start_x: left as u16,
                start_y: top as u16,
                end_x: (left + d - 1) as u16,
                end_y: (top + d - 1) as u16,
            };
            bounds = Some(match bounds {
                None => rect,
                Some(b) => OccupyRect {
                    start_x: b.start_x.min(rect.start_x),
                    start_y: b.start_y.min(rect.start_y),
                    end_x: b.end_x.max(rect.end_x),
                    end_y: b.end_y.max(rect.end_y),
                },
            });
            false // keep scanning; we want the union
        });

        bounds
    }

    /// The valid footprint block containing the tile under `pos` whose
    /// center lies nearest `reference`.  Anchors corner-cut checks during
    /// edge enumeration.
    pub fn closest_occupy_rect(&self, pos: Vec2, radius: f32, reference: Vec2, frequency: u16) -> Option<OccupyRect> {
        let mut best: Option<(f32, OccupyRect)> = None;

        self.any_block_containing(pos, radius, frequency, |left, top, span| {
            let d = span as i32;
            let center = Vec2::new(left as f32 + d as f32 * 0.5, top as f32 + d as f32 * 0.5);
            let dist_sq = center.distance_sq(reference);
            let rect = OccupyRect {
                start_x: left as u16,
                start_y: top as u16,
                end_x: (left + d - 1) as u16,
                end_y: (top + d - 1) as u16,
            };
            if best.is_none_or(|(best_dist, _)| dist_sq < best_dist) {
                best = Some((dist_sq, rect));
            }
            false
        });

        best.map(|(_, rect)| rect)
    }

    // ── Raycast ───────────────────────────────────────────────────────────

    /// Walk the grid from `from` toward `to`; report the first solid tile.
    ///
    /// Uses standard voxel traversal so no tile along the segment is
    /// skipped, including at exact corner crossings.
    pub fn cast_to(&self, from: Vec2, to: Vec2, frequency: u16) -> CastResult {
        let diff = to - from;
        let dist = diff.length();
        if dist <= f32::EPSILON {
            return CastResult { hit: self.is_solid(from.x as u16, from.y as u16, frequency), position: from };
        }

        let dir = diff * (1.0 / dist);

        let mut tile_x = from.x.floor() as i32;
        let mut tile_y = from.y.floor() as i32;
        let target_x = to.x.floor() as i32;
        let target_y = to.y.floor() as i32;

        let step_x: i32 = if dir.x > 0.0 { 1 } else { -1 };
        let step_y: i32 = if dir.y > 0.0 { 1 } else { -1 };

        let t_delta_x = if dir.x != 0.0 { (1.0 / dir.x).abs() } else { f32::INFINITY };
        let t_delta_y = if dir.y != 0.0 { (1.0 / dir.y).abs() } else { f32::INFINITY };

        let mut t_max_x = if dir.x > 0.0 {
            (tile_x as f32 + 1.0 - from.x) * t_delta_x
        } else if dir.x < 0.0 {
            (from.x - tile_x as f32) * t_delta_x
        } else {
            f32::INFINITY
        };
        let mut t_max_y = if dir.y > 0.0 {
            (tile_y as f32 + 1.0 - from.y) * t_delta_y
        } else if dir.y < 0.0 {
            (from.y - tile_y as f32) * t_delta_y
        } else {
            f32::INFINITY
        };

        let mut t = 0.0f32;

        loop {
            if tile_x >= 0 && tile_y >= 0 && self.is_solid(tile_x as u16, tile_y as u16, frequency) {
                return CastResult { hit: true, position: from + dir * t };
            }
            if tile_x == target_x && tile_y == target_y {
                return CastResult { hit: false, position: to };
            }

            if t_max_x < t_max_y {
                t = t_max_x;
                t_max_x += t_delta_x;
                tile_x += step_x;
            } else {
                t = t_max_y;
                t_max_y += t_delta_y;
                tile_y += step_y;
            }

            if t > dist {
                return CastResult { hit: false, position: to };
            }
        }
    }
}
