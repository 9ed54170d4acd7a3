//! Unit tests for drift-map.
//!
//! All tests use hand-built maps; no map file parsing is involved.

#[cfg(test)]
mod helpers {
    use crate::{Map, TileId};

    /// Map with a solid border and an open interior.
    pub fn walled_map() -> Map {
        let mut map = Map::new();
        for i in 0..1024u16 {
            map.set_tile(i, 0, TileId::SOLID);
            map.set_tile(i, 1023, TileId::SOLID);
            map.set_tile(0, i, TileId::SOLID);
            map.set_tile(1023, i, TileId::SOLID);
        }
        map
    }
}

#[cfg(test)]
mod solidity {
    use drift_core::Vec2;

    use crate::{FREQUENCY_ANY, Map, TileId};

    #[test]
    fn empty_and_solid() {
        let mut map = Map::new();
        map.set_tile(10, 10, TileId::SOLID);
        assert!(map.is_solid(10, 10, 0));
        assert!(!map.is_solid(11, 10, 0));
    }

    #[test]
    fn out_of_bounds_is_solid() {
        let map = Map::new();
        assert!(map.is_solid(1024, 0, 0));
        assert_eq!(map.tile_id(5000, 5000), TileId::SOLID);
    }

    #[test]
    fn doors_follow_map_state() {
        let mut map = Map::new();
        map.set_tile(5, 5, TileId::DOOR);
        assert!(map.is_solid(5, 5, 0), "doors start closed");
        map.set_doors_open(true);
        assert!(!map.is_solid(5, 5, 0));
    }

    #[test]
    fn safe_and_goal_are_passable() {
        let mut map = Map::new();
        map.set_tile(4, 4, TileId::SAFE);
        map.set_tile(5, 4, TileId::GOAL);
        assert!(!map.is_solid(4, 4, 0));
        assert!(!map.is_solid(5, 4, 0));
        assert_eq!(map.tile_id_at(Vec2::new(4.5, 4.5)), TileId::SAFE);
    }

    #[test]
    fn bricks_block_other_frequencies_only() {
        use drift_core::Tick;

        let mut map = Map::new();
        map.bricks_mut().insert(crate::Brick { x: 7, y: 7, team: 2, end_tick: Tick(1000) });

        assert!(!map.is_solid(7, 7, 2), "own team passes");
        assert!(map.is_solid(7, 7, 3), "enemy team blocked");
        assert!(map.is_solid(7, 7, FREQUENCY_ANY), "sentinel frequency blocked");
        assert_eq!(map.tile_id(7, 7), TileId::BRICK);
    }
}

#[cfg(test)]
mod occupancy {
    use drift_core::Vec2;

    use crate::{Map, TileId};

    const R: f32 = 14.0 / 16.0; // standard ship radius → 2×2 footprint

    #[test]
    fn footprint_span() {
        assert_eq!(Map::footprint_span(0.4), 1);
        assert_eq!(Map::footprint_span(14.0 / 16.0), 2);
        assert_eq!(Map::footprint_span(1.2), 3);
    }

    /// A 3×3 hole admits a 2×2 ship everywhere, including corners.
    #[test]
    fn overlap_in_three_by_three_hole() {
        let mut map = Map::new();
        for y in 0..1024u16 {
            for x in 0..1024u16 {
                map.set_tile(x, y, TileId::SOLID);
            }
        }
        for y in 10..=12u16 {
            for x in 10..=12u16 {
                map.set_tile(x, y, TileId::EMPTY);
            }
        }

        for y in 10..=12u16 {
            for x in 10..=12u16 {
                let pos = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                assert!(map.can_overlap_tile(pos, R, 0xFFFF), "({x},{y})");
            }
        }
        assert!(!map.can_overlap_tile(Vec2::new(13.5, 11.5), R, 0xFFFF));
    }

    /// A 1×1 hole is too small for a 2×2 footprint.
    #[test]
    fn single_tile_hole_rejects_wide_ship() {
        let mut map = Map::new();
        for y in 19..=21u16 {
            for x in 19..=21u16 {
                map.set_tile(x, y, TileId::SOLID);
            }
        }
        map.set_tile(20, 20, TileId::EMPTY);

        let pos = Vec2::new(20.5, 20.5);
        assert!(!map.can_overlap_tile(pos, R, 0xFFFF));
        assert!(map.can_overlap_tile(pos, 0.4, 0xFFFF), "1×1 footprint still fits");
    }

    #[test]
    fn traverse_within_open_space() {
        let map = super::helpers::walled_map();
        let from = Vec2::new(100.5, 100.5);
        let to = Vec2::new(101.5, 100.5);
        assert!(map.can_traverse(from, to, R, 0xFFFF));
    }

    #[test]
    fn traverse_into_wall_fails() {
        let map = super::helpers::walled_map();
        let from = Vec2::new(1.5, 100.5);
        let to = Vec2::new(0.5, 100.5);
        assert!(!map.can_traverse(from, to, R, 0xFFFF));
    }

    #[test]
    fn possible_occupy_rect_bounds() {
        let map = super::helpers::walled_map();
        let rect = map.get_possible_occupy_rect(Vec2::new(100.5, 100.5), R, 0xFFFF).unwrap();
        // 2×2 blocks containing (100,100) anchor from (99,99) to (100,100).
        assert_eq!((rect.start_x, rect.start_y), (99, 99));
        assert_eq!((rect.end_x, rect.end_y), (101, 101));

        assert!(map.get_possible_occupy_rect(Vec2::new(0.5, 0.5), R, 0xFFFF).is_none());
    }

    #[test]
    fn closest_occupy_rect_leans_toward_reference() {
        let map = super::helpers::walled_map();
        let rect = map
            .closest_occupy_rect(Vec2::new(100.5, 100.5), R, Vec2::new(99.0, 99.0), 0xFFFF)
            .unwrap();
        assert_eq!((rect.start_x, rect.start_y), (99, 99));
    }
}

#[cfg(test)]
mod raycast {
    use drift_core::Vec2;

    use crate::{Map, TileId};

    #[test]
    fn clear_path_reaches_target() {
        let map = Map::new();
        let result = map.cast_to(Vec2::new(5.5, 5.5), Vec2::new(40.5, 20.5), 0);
        assert!(!result.hit);
        assert_eq!(result.position, Vec2::new(40.5, 20.5));
    }

    #[test]
    fn wall_blocks_cast() {
        let mut map = Map::new();
        for y in 0..1024u16 {
            map.set_tile(20, y, TileId::SOLID);
        }
        let result = map.cast_to(Vec2::new(5.5, 10.5), Vec2::new(35.5, 10.5), 0);
        assert!(result.hit);
        assert!((result.position.x - 20.0).abs() < 1e-4, "entry at wall face, got {}", result.position);
    }

    #[test]
    fn vertical_cast() {
        let mut map = Map::new();
        map.set_tile(8, 30, TileId::SOLID);
        let result = map.cast_to(Vec2::new(8.5, 5.5), Vec2::new(8.5, 60.5), 0);
        assert!(result.hit);
        assert!((result.position.y - 30.0).abs() < 1e-4);
    }

    #[test]
    fn brick_blocks_enemy_cast_only() {
        use drift_core::Tick;

        let mut map = Map::new();
        map.bricks_mut().insert(crate::Brick { x: 10, y: 10, team: 1, end_tick: Tick(100) });

        let from = Vec2::new(5.5, 10.5);
        let to = Vec2::new(15.5, 10.5);
        assert!(map.cast_to(from, to, 2).hit);
        assert!(!map.cast_to(from, to, 1).hit);
    }
}

#[cfg(test)]
mod bricks {
    use drift_core::Tick;

    use crate::{Brick, BrickMap};

    #[test]
    fn insert_get_remove() {
        let mut bricks = BrickMap::new();
        bricks.insert(Brick { x: 1, y: 2, team: 0, end_tick: Tick(50) });

        assert_eq!(bricks.len(), 1);
        assert_eq!(bricks.get(1, 2).unwrap().team, 0);
        let removed = bricks.remove(1, 2).unwrap();
        assert_eq!(removed.end_tick, Tick(50));
        assert!(bricks.is_empty());
    }

    #[test]
    fn reinsert_replaces() {
        let mut bricks = BrickMap::new();
        bricks.insert(Brick { x: 1, y: 2, team: 0, end_tick: Tick(50) });
        bricks.insert(Brick { x: 1, y: 2, team: 0, end_tick: Tick(90) });
        assert_eq!(bricks.len(), 1);
        assert_eq!(bricks.get(1, 2).unwrap().end_tick, Tick(90));
    }

    #[test]
    fn expiry_is_wrap_aware() {
        let mut bricks = BrickMap::new();
        bricks.insert(Brick { x: 1, y: 1, team: 0, end_tick: Tick(100) });
        bricks.insert(Brick { x: 2, y: 1, team: 0, end_tick: Tick(200) });

        let cleared = bricks.expire(Tick(150));
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared[0].x, 1);
        assert_eq!(bricks.len(), 1);

        // Freelist reuse: a new brick lands in the freed slot.
        bricks.insert(Brick { x: 3, y: 1, team: 0, end_tick: Tick(300) });
        assert_eq!(bricks.len(), 2);
    }
}
