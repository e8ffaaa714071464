//! Terrain slope encodings and the land-to-wall slope table.
//!
//! Surfaces store their shape as four corner bits plus a double-height bit.
//! Walls store a packed edge slope. Both packed forms only appear at the
//! storage boundary; validation works with [`WallSlope`] and corner levels.

use bitflags::bitflags;

use super::Direction;

bitflags! {
    /// Shape of a surface element: which corners are raised one land level.
    ///
    /// `DOUBLE_HEIGHT` with three raised corners describes a steep slope whose
    /// corner opposite the low one is raised two levels.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SurfaceSlope: u8 {
        const N_CORNER_UP   = 1 << 0;
        const E_CORNER_UP   = 1 << 1;
        const S_CORNER_UP   = 1 << 2;
        const W_CORNER_UP   = 1 << 3;
        const DOUBLE_HEIGHT = 1 << 4;
    }
}

bitflags! {
    /// Packed wall slope as stored in wall elements and the slope table.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct EdgeSlope: u8 {
        const ELEVATED  = 1 << 0;
        const UPWARDS   = 1 << 6;
        const DOWNWARDS = 1 << 7;
    }
}

impl SurfaceSlope {
    const CORNER_MASK: u8 = 0b1111;

    pub const FLAT: Self = Self::empty();

    /// Returns true if corner `corner` (0..=3) is raised.
    #[inline]
    pub const fn corner_raised(self, corner: u8) -> bool {
        self.bits() & (1 << (corner & 3)) != 0
    }

    /// True for a valid steep slope (double height with three raised corners).
    pub const fn is_steep(self) -> bool {
        self.contains(Self::DOUBLE_HEIGHT) && (self.bits() & Self::CORNER_MASK).count_ones() == 3
    }

    /// Height of `corner` above the surface base, in land levels (0, 1 or 2).
    pub const fn corner_level(self, corner: u8) -> u8 {
        let corner = corner & 3;
        if !self.corner_raised(corner) {
            return 0;
        }
        if self.is_steep() {
            // The peak sits opposite the only lowered corner.
            let lowered = (!self.bits() & Self::CORNER_MASK).trailing_zeros() as u8;
            if corner == (lowered + 2) & 3 {
                return 2;
            }
        }
        1
    }
}

/// Wall slope along its edge, after the elevation flag has been consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WallSlope {
    #[default]
    Flat,
    Upwards,
    Downwards,
}

impl WallSlope {
    /// Decodes the packed form, ignoring the elevation flag.
    pub const fn from_edge_slope(packed: EdgeSlope) -> Self {
        if packed.contains(EdgeSlope::UPWARDS) {
            WallSlope::Upwards
        } else if packed.contains(EdgeSlope::DOWNWARDS) {
            WallSlope::Downwards
        } else {
            WallSlope::Flat
        }
    }

    pub const fn to_edge_slope(self) -> EdgeSlope {
        match self {
            WallSlope::Flat => EdgeSlope::empty(),
            WallSlope::Upwards => EdgeSlope::UPWARDS,
            WallSlope::Downwards => EdgeSlope::DOWNWARDS,
        }
    }

    #[inline]
    pub const fn is_sloped(self) -> bool {
        !matches!(self, WallSlope::Flat)
    }
}

/// Wall slope for every surface slope encoding and edge.
pub const SLOPE_TABLE: [[EdgeSlope; 4]; 32] = build_slope_table();

const fn build_slope_table() -> [[EdgeSlope; 4]; 32] {
    let mut table = [[EdgeSlope::empty(); 4]; 32];
    let mut slope = 0;
    while slope < 32 {
        let surface = SurfaceSlope::from_bits_retain(slope as u8);
        let mut edge = 0;
        while edge < 4 {
            table[slope][edge] = edge_slope(surface, Direction::from_masked(edge as u8));
            edge += 1;
        }
        slope += 1;
    }
    table
}

/// Derives the packed wall slope of `edge` from the levels of its two corners.
const fn edge_slope(surface: SurfaceSlope, edge: Direction) -> EdgeSlope {
    let [start, end] = edge.corners();
    let start = surface.corner_level(start);
    let end = surface.corner_level(end);
    let low = if start < end { start } else { end };

    let mut bits = 0u8;
    if low >= 1 {
        bits |= EdgeSlope::ELEVATED.bits();
    }
    if end > start {
        bits |= EdgeSlope::UPWARDS.bits();
    } else if start > end {
        bits |= EdgeSlope::DOWNWARDS.bits();
    }
    EdgeSlope::from_bits_retain(bits)
}

/// Looks up the packed wall slope for a surface and edge.
#[inline]
pub fn wall_slope_for(surface: SurfaceSlope, edge: Direction) -> EdgeSlope {
    SLOPE_TABLE[(surface.bits() & 0b1_1111) as usize][edge.index() as usize]
}
