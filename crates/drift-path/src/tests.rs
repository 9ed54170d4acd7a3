//! Unit tests for drift-path.
//!
//! Region and pathfinding tests build small hand-made maps; the standard
//! ship radius 14/16 (a 2×2 tile footprint) is used throughout unless a
//! test needs otherwise.

#[cfg(test)]
mod helpers {
    use drift_core::EventBus;
    use drift_map::{Map, TileId};

    use crate::{Pathfinder, RegionRegistry};

    pub const R: f32 = 14.0 / 16.0;

    pub fn all_solid_map() -> Map {
        let mut map = Map::new();
        for y in 0..1024u16 {
            for x in 0..1024u16 {
                map.set_tile(x, y, TileId::SOLID);
            }
        }
        map
    }

    pub fn carve(map: &mut Map, x0: u16, y0: u16, x1: u16, y1: u16) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                map.set_tile(x, y, TileId::EMPTY);
            }
        }
    }

    /// Region registry + pathfinder prepared for `map` at radius `R`.
    pub fn build(map: &Map) -> (RegionRegistry, Pathfinder) {
        let bus = EventBus::new();
        let mut regions = RegionRegistry::new();
        regions.create_all(map, R, &bus);
        let mut pathfinder = Pathfinder::new();
        pathfinder.create_map_weights(map, R);
        (regions, pathfinder)
    }
}

#[cfg(test)]
mod region {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use drift_core::{EventBus, Vec2};

    use super::helpers::{R, all_solid_map, carve};
    use crate::RegionRegistry;

    /// Two isolated 3×3 pockets form exactly two regions of nine tiles.
    #[test]
    fn isolated_pockets() {
        let mut map = all_solid_map();
        carve(&mut map, 10, 10, 12, 12);
        carve(&mut map, 100, 100, 102, 102);

        let bus = EventBus::new();
        let mut regions = RegionRegistry::new();
        regions.create_all(&map, R, &bus);

        let a = Vec2::new(11.5, 11.5);
        let b = Vec2::new(101.5, 101.5);

        assert_eq!(regions.region_count(), 2);
        assert!(regions.is_connected(a, a));
        assert!(!regions.is_connected(a, b));
        assert_eq!(regions.tile_count(a), 9);
        assert_eq!(regions.tile_count(b), 9);
    }

    #[test]
    fn corridor_joins_pockets() {
        let mut map = all_solid_map();
        carve(&mut map, 10, 10, 12, 12);
        carve(&mut map, 30, 10, 32, 12);
        carve(&mut map, 12, 10, 30, 11); // 2-tile-tall corridor fits the footprint

        let bus = EventBus::new();
        let mut regions = RegionRegistry::new();
        regions.create_all(&map, R, &bus);

        assert!(regions.is_connected(Vec2::new(11.5, 11.5), Vec2::new(31.5, 11.5)));
        assert_eq!(regions.region_count(), 1);
    }

    #[test]
    fn narrow_gap_separates_wide_ship() {
        let mut map = all_solid_map();
        carve(&mut map, 10, 10, 12, 12);
        carve(&mut map, 30, 10, 32, 12);
        carve(&mut map, 12, 11, 30, 11); // 1-tile corridor: too narrow for 2×2

        let bus = EventBus::new();
        let mut regions = RegionRegistry::new();
        regions.create_all(&map, R, &bus);

        assert!(!regions.is_connected(Vec2::new(11.5, 11.5), Vec2::new(31.5, 11.5)));
    }

    #[test]
    fn invalid_positions_are_never_connected() {
        let mut map = all_solid_map();
        carve(&mut map, 10, 10, 12, 12);

        let bus = EventBus::new();
        let mut regions = RegionRegistry::new();
        regions.create_all(&map, R, &bus);

        let inside = Vec2::new(11.5, 11.5);
        let wall = Vec2::new(50.5, 50.5);
        assert!(!regions.is_connected(inside, wall));
        assert!(!regions.is_connected(wall, wall));
        assert!(!regions.get_region(wall).is_valid());
    }

    #[test]
    fn build_publishes_tile_events() {
        let mut map = all_solid_map();
        carve(&mut map, 10, 10, 12, 12);

        let bus = EventBus::new();
        let adds = Arc::new(AtomicUsize::new(0));
        let adds_clone = Arc::clone(&adds);
        let _sub = bus.subscribe::<crate::RegionTileAddEvent, _>(move |_| {
            adds_clone.fetch_add(1, Ordering::SeqCst);
        });

        let mut regions = RegionRegistry::new();
        regions.create_all(&map, R, &bus);

        // At least the nine empty tiles; boundary tiles may add more.
        assert!(adds.load(Ordering::SeqCst) >= 9);
    }
}

#[cfg(test)]
mod path_type {
    use drift_core::Vec2;

    use crate::Path;

    fn straight() -> Path {
        Path::new(vec![
            Vec2::new(0.5, 0.5),
            Vec2::new(1.5, 0.5),
            Vec2::new(2.5, 0.5),
            Vec2::new(3.5, 0.5),
        ])
    }

    #[test]
    fn advance_past_end_is_idempotent() {
        let mut path = straight();
        for _ in 0..10 {
            path.advance();
        }
        assert_eq!(path.current(), path.goal());
        assert!(path.is_on_goal());
        let again = path.advance();
        assert_eq!(again, path.goal());
    }

    #[test]
    fn empty_path_is_inert() {
        let mut path = Path::empty();
        assert!(path.is_empty());
        assert!(path.is_done());
        assert_eq!(path.advance(), Vec2::ZERO);
        assert_eq!(path.remaining_distance(), 0.0);
    }

    #[test]
    fn remaining_distance_shrinks() {
        let mut path = straight();
        let full = path.remaining_distance();
        assert!((full - 3.0).abs() < 1e-5);
        path.advance();
        assert!(path.remaining_distance() < full);
    }

    #[test]
    fn contains_checks_tiles_ahead_of_cursor() {
        let mut path = straight();
        assert!(path.contains(2, 0));
        path.advance();
        path.advance();
        assert!(!path.contains(1, 0), "tiles behind the cursor don't count");
    }

    #[test]
    fn simplified_collapses_collinear_runs() {
        let path = Path::new(vec![
            Vec2::new(0.5, 0.5),
            Vec2::new(1.5, 0.5),
            Vec2::new(2.5, 0.5),
            Vec2::new(2.5, 1.5),
            Vec2::new(2.5, 2.5),
        ]);
        let simple = path.simplified();
        assert_eq!(simple.points().len(), 3);
        assert_eq!(simple.start(), path.start());
        assert_eq!(simple.goal(), path.goal());
    }
}

#[cfg(test)]
mod search {
    use drift_core::Vec2;
    use drift_map::{FREQUENCY_ANY, Map, TileId};

    use super::helpers::{R, build};

    /// An open field yields the tile-by-tile straight line.
    #[test]
    fn straight_line_path() {
        let map = Map::new();
        let (regions, mut pathfinder) = build(&map);

        let path = pathfinder.find_path(&map, &regions, Vec2::new(5.5, 5.5), Vec2::new(5.5, 20.5), R, FREQUENCY_ANY);

        assert!(!path.is_empty());
        let tiles: Vec<(u16, u16)> = path.points().iter().map(|p| p.tile()).collect();
        let expected: Vec<(u16, u16)> = (5..=20).map(|y| (5u16, y as u16)).collect();
        assert_eq!(tiles, expected);
    }

    /// A wall forces the path around; no waypoint crosses the wall column.
    #[test]
    fn cornered_path_routes_around_wall() {
        let mut map = Map::new();
        for y in 0..=15u16 {
            map.set_tile(10, y, TileId::SOLID);
        }
        let (regions, mut pathfinder) = build(&map);

        let path = pathfinder.find_path(&map, &regions, Vec2::new(5.5, 5.5), Vec2::new(15.5, 5.5), R, FREQUENCY_ANY);

        assert!(!path.is_empty());
        assert!(path.points().len() > 10);
        for p in path.points() {
            let (x, y) = p.tile();
            assert!(!(x == 10 && y <= 15), "path crossed the wall at ({x},{y})");
        }
    }

    #[test]
    fn endpoints_are_tile_centers_and_steps_are_adjacent() {
        let map = Map::new();
        let (regions, mut pathfinder) = build(&map);

        let from = Vec2::new(40.2, 40.9);
        let to = Vec2::new(52.7, 44.1);
        let path = pathfinder.find_path(&map, &regions, from, to, R, FREQUENCY_ANY);

        assert_eq!(path.start().tile(), from.tile());
        assert_eq!(path.goal().tile(), to.tile());

        // Every consecutive pair is one 8-neighbor step.
        for window in path.points().windows(2) {
            let (ax, ay) = window[0].tile();
            let (bx, by) = window[1].tile();
            let dx = (ax as i32 - bx as i32).abs();
            let dy = (ay as i32 - by as i32).abs();
            assert!(dx <= 1 && dy <= 1 && dx + dy > 0, "non-adjacent step ({ax},{ay})→({bx},{by})");
        }
    }

    #[test]
    fn disconnected_regions_yield_empty_path() {
        let mut map = super::helpers::all_solid_map();
        super::helpers::carve(&mut map, 10, 10, 12, 12);
        super::helpers::carve(&mut map, 100, 100, 102, 102);
        let (regions, mut pathfinder) = build(&map);

        let path =
            pathfinder.find_path(&map, &regions, Vec2::new(11.5, 11.5), Vec2::new(101.5, 101.5), R, FREQUENCY_ANY);
        assert!(path.is_empty());
    }

    #[test]
    fn out_of_bounds_query_yields_empty_path() {
        let map = Map::new();
        let (regions, mut pathfinder) = build(&map);

        let path =
            pathfinder.find_path(&map, &regions, Vec2::new(5.5, 5.5), Vec2::new(2000.0, 5.5), R, FREQUENCY_ANY);
        assert!(path.is_empty());
    }

    /// Back-to-back searches must not leak state through the lazy nodes.
    #[test]
    fn repeated_searches_are_independent() {
        let map = Map::new();
        let (regions, mut pathfinder) = build(&map);

        let a = pathfinder.find_path(&map, &regions, Vec2::new(5.5, 5.5), Vec2::new(5.5, 20.5), R, FREQUENCY_ANY);
        let b = pathfinder.find_path(&map, &regions, Vec2::new(5.5, 20.5), Vec2::new(5.5, 5.5), R, FREQUENCY_ANY);
        let c = pathfinder.find_path(&map, &regions, Vec2::new(5.5, 5.5), Vec2::new(5.5, 20.5), R, FREQUENCY_ANY);

        assert_eq!(a.points().len(), 16);
        assert_eq!(b.points().len(), 16);
        assert_eq!(a.points(), c.points());
        assert_eq!(b.start().tile(), (5, 20));
    }

    /// Safe tiles repel the search: a safe shortcut loses to a clear detour.
    #[test]
    fn safe_tiles_are_avoided() {
        let mut map = Map::new();
        // Safe band across the direct route, with open space around it.
        for y in 40..=60u16 {
            for x in 48..=52u16 {
                map.set_tile(x, y, TileId::SAFE);
            }
        }
        let (regions, mut pathfinder) = build(&map);

        let path = pathfinder.find_path(&map, &regions, Vec2::new(40.5, 50.5), Vec2::new(60.5, 50.5), R, FREQUENCY_ANY);

        assert!(!path.is_empty());
        let crosses_safe = path.points().iter().any(|p| {
            let (x, y) = p.tile();
            map.tile_id(x, y) == TileId::SAFE
        });
        assert!(!crosses_safe, "path should loop around the safe band");
    }
}

#[cfg(test)]
mod edges {
    use drift_core::Vec2;
    use drift_map::{FREQUENCY_ANY, Map, TileId};

    use super::helpers::{R, build};
    use crate::node::NodeProcessor;

    /// A diagonal step whose two cardinal components are blocked must not
    /// be offered as an edge.
    #[test]
    fn no_corner_cutting() {
        let mut map = Map::new();
        // Wall along x=20 with a doorway; path from the west seeking
        // south-east must not slip diagonally past the wall corner at
        // (20, 30).
        for y in 0..=30u16 {
            map.set_tile(20, y, TileId::SOLID);
        }
        let (regions, mut pathfinder) = build(&map);

        let path = pathfinder.find_path(&map, &regions, Vec2::new(18.5, 29.5), Vec2::new(22.5, 29.5), R, FREQUENCY_ANY);

        assert!(!path.is_empty());
        // Every consecutive pair must be a legal swept move: the footprint
        // never overlaps the wall column above the corner.
        for p in path.points() {
            let (x, y) = p.tile();
            assert!(!(x == 20 && y <= 30), "footprint clipped the wall at ({x},{y})");
        }
    }

    #[test]
    fn point_index_round_trip() {
        let index = NodeProcessor::index_of(513, 700);
        assert_eq!(NodeProcessor::point_of(index), (513, 700));
    }
}
