//! Tile identifiers.

/// Content id of one map cell.
///
/// The wire format packs many decorative variants into its id space; the
/// bot only distinguishes the classes below, so the map loader collapses
/// everything else to `EMPTY` or `SOLID` before handing the grid over.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct TileId(pub u8);

impl TileId {
    pub const EMPTY: TileId = TileId(0);
    pub const SOLID: TileId = TileId(1);
    /// Solid or passable depending on the map-wide door state.
    pub const DOOR: TileId = TileId(2);
    /// Spawn-protection tile; never solid, heavily penalized by pathfinding.
    pub const SAFE: TileId = TileId(3);
    pub const GOAL: TileId = TileId(4);
    pub const FLAG: TileId = TileId(5);
    /// Reserved id for the dynamic brick overlay.
    pub const BRICK: TileId = TileId(250);

    #[inline]
    pub fn is_door(self) -> bool {
        self == TileId::DOOR
    }

    #[inline]
    pub fn is_safe(self) -> bool {
        self == TileId::SAFE
    }
}
