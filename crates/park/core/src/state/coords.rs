use std::fmt;

/// World units per tile along x and y.
pub const COORDS_XY_STEP: i32 = 32;
/// World units per height unit along z.
pub const COORDS_Z_STEP: i32 = 8;
/// World units per land level (two height units).
pub const LAND_HEIGHT_STEP: i32 = 2 * COORDS_Z_STEP;

/// Horizontal position in world units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordsXY {
    pub x: i32,
    pub y: i32,
}

impl CoordsXY {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn with_z(self, z: i32) -> CoordsXYZ {
        CoordsXYZ::new(self.x, self.y, z)
    }

    pub const fn to_tile(self) -> TileCoords {
        TileCoords::new(
            self.x.div_euclid(COORDS_XY_STEP),
            self.y.div_euclid(COORDS_XY_STEP),
        )
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance in world units.
    pub const fn manhattan(self, other: CoordsXY) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for CoordsXY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position in world units, z included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordsXYZ {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CoordsXYZ {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn xy(self) -> CoordsXY {
        CoordsXY::new(self.x, self.y)
    }

    pub const fn to_tile(self) -> TileCoords {
        self.xy().to_tile()
    }
}

impl fmt::Display for CoordsXYZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Position of a tile in the map grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoords {
    pub x: i32,
    pub y: i32,
}

impl TileCoords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// World coordinates of the tile's origin corner.
    pub const fn to_coords(self) -> CoordsXY {
        CoordsXY::new(self.x * COORDS_XY_STEP, self.y * COORDS_XY_STEP)
    }
}

impl fmt::Display for TileCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Orthogonal direction, also used to name the edge of a tile.
///
/// Discriminants match the packed encoding stored in tile elements.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    /// Towards negative x.
    West = 0,
    /// Towards positive y.
    North = 1,
    /// Towards positive x.
    East = 2,
    /// Towards negative y.
    South = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::South,
    ];

    /// Converts a raw edge index, rejecting anything outside `0..=3`.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::West),
            1 => Some(Direction::North),
            2 => Some(Direction::East),
            3 => Some(Direction::South),
            _ => None,
        }
    }

    /// Converts a raw value, keeping only the two low bits.
    pub const fn from_masked(raw: u8) -> Self {
        match raw & 3 {
            0 => Direction::West,
            1 => Direction::North,
            2 => Direction::East,
            _ => Direction::South,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Bit for this direction in a four-bit edge mask.
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self.index()
    }

    pub const fn reverse(self) -> Self {
        Self::from_masked(self.index() + 2)
    }

    /// Rotates clockwise by `steps` quarter turns.
    pub const fn rotate(self, steps: u8) -> Self {
        Self::from_masked(self.index().wrapping_add(steps))
    }

    /// This direction expressed relative to `frame` (`(self - frame) & 3`).
    pub const fn relative_to(self, frame: Direction) -> Self {
        Self::from_masked(self.index().wrapping_sub(frame.index()))
    }

    /// The two corner indices bounding this edge of a tile.
    pub const fn corners(self) -> [u8; 2] {
        [(self.index() + 2) & 3, (self.index() + 3) & 3]
    }

    /// World-unit offset to the neighbouring tile across this edge.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::West => (-COORDS_XY_STEP, 0),
            Direction::North => (0, COORDS_XY_STEP),
            Direction::East => (COORDS_XY_STEP, 0),
            Direction::South => (0, -COORDS_XY_STEP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_index_validation() {
        assert_eq!(Direction::from_index(3), Some(Direction::South));
        assert_eq!(Direction::from_index(4), None);
        assert_eq!(Direction::from_masked(6), Direction::East);
    }

    #[test]
    fn relative_direction_wraps() {
        assert_eq!(
            Direction::West.relative_to(Direction::South),
            Direction::North
        );
        assert_eq!(Direction::East.relative_to(Direction::East), Direction::West);
        assert_eq!(Direction::North.reverse(), Direction::South);
        assert_eq!(Direction::South.rotate(2), Direction::North);
    }

    #[test]
    fn edges_share_corners_with_neighbours() {
        // Adjacent edges meet at exactly one corner.
        let [_, west_end] = Direction::West.corners();
        let [north_start, _] = Direction::North.corners();
        assert_eq!(west_end, north_start);
    }

    #[test]
    fn world_to_tile() {
        assert_eq!(CoordsXY::new(64, 95).to_tile(), TileCoords::new(2, 2));
        assert_eq!(TileCoords::new(3, 1).to_coords(), CoordsXY::new(96, 32));
    }
}
