//! Tile elements stacked on a map tile.
//!
//! Every element shares a vertical extent, a ghost flag and an occupancy mask;
//! type-specific data lives in [`ElementKind`].

use std::fmt;

use bitflags::bitflags;

use super::coords::COORDS_Z_STEP;
use super::{Direction, SurfaceSlope, WallSlope};

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident($inner:ty), $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

id_newtype!(
    /// Index of a loaded scenery object (wall, small or large scenery).
    ObjectEntryIndex(u16),
    "object"
);
id_newtype!(
    /// Identifier of a ride instance in the park.
    RideId(u16),
    "ride"
);
id_newtype!(
    /// Slot index in the banner registry.
    BannerIndex(u16),
    "banner"
);
id_newtype!(
    /// Ride type (coaster model, shop, ...), keys ride type descriptors.
    RideType(u8),
    "ride_type"
);
id_newtype!(
    /// Track piece type, keys track element descriptors.
    TrackType(u16),
    "track"
);

/// Palette colour index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour(pub u8);

impl Colour {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(2);
}

bitflags! {
    /// Land ownership recorded on surface elements.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct LandOwnership: u8 {
        const CONSTRUCTION_RIGHTS_OWNED = 1 << 4;
        const OWNED                     = 1 << 5;
        const CONSTRUCTION_RIGHTS_AVAILABLE = 1 << 6;
        const AVAILABLE                 = 1 << 7;
    }
}

/// A single element stacked on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileElement {
    /// Bottom of the element, in height units.
    pub base_height: u8,
    /// Top of the element (exclusive), in height units.
    pub clearance_height: u8,
    /// Preview-only element, invisible to collision checks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_ghost: bool,
    /// Four-bit mask of occupied quadrants.
    #[cfg_attr(feature = "serde", serde(default))]
    pub occupied_quadrants: u8,
    pub kind: ElementKind,
}

impl TileElement {
    pub fn new(base_height: u8, clearance_height: u8, kind: ElementKind) -> Self {
        Self {
            base_height,
            clearance_height,
            is_ghost: false,
            occupied_quadrants: 0b1111,
            kind,
        }
    }

    #[must_use]
    pub fn with_quadrants(mut self, occupied_quadrants: u8) -> Self {
        self.occupied_quadrants = occupied_quadrants & 0b1111;
        self
    }

    #[must_use]
    pub fn ghost(mut self) -> Self {
        self.is_ghost = true;
        self
    }

    /// Bottom of the element in world units.
    pub fn base_z(&self) -> i32 {
        i32::from(self.base_height) * COORDS_Z_STEP
    }

    /// Top of the element in world units.
    pub fn clearance_z(&self) -> i32 {
        i32::from(self.clearance_height) * COORDS_Z_STEP
    }

    /// True when `[z0, z1)` (height units) overlaps this element.
    pub fn overlaps(&self, z0: u8, z1: u8) -> bool {
        z0 < self.clearance_height && z1 > self.base_height
    }

    pub fn as_surface(&self) -> Option<&SurfaceElement> {
        match &self.kind {
            ElementKind::Surface(surface) => Some(surface),
            _ => None,
        }
    }

    pub fn as_wall(&self) -> Option<&WallElement> {
        match &self.kind {
            ElementKind::Wall(wall) => Some(wall),
            _ => None,
        }
    }

    pub fn as_wall_mut(&mut self) -> Option<&mut WallElement> {
        match &mut self.kind {
            ElementKind::Wall(wall) => Some(wall),
            _ => None,
        }
    }

    pub fn as_track(&self) -> Option<&TrackElement> {
        match &self.kind {
            ElementKind::Track(track) => Some(track),
            _ => None,
        }
    }
}

/// Type-specific payload of a tile element.
#[derive(Clone, Debug, PartialEq, Eq, strum::EnumDiscriminants)]
#[strum_discriminants(name(ElementType), derive(Hash, strum::AsRefStr))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Surface(SurfaceElement),
    Wall(WallElement),
    Path(PathElement),
    Track(TrackElement),
    Entrance(EntranceElement),
    SmallScenery(SmallSceneryElement),
    LargeScenery(LargeSceneryElement),
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        ElementType::from(self)
    }
}

/// Terrain at the bottom of every tile stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurfaceElement {
    pub slope: SurfaceSlope,
    /// Water surface in world units; zero when the tile is dry.
    pub water_height: i32,
    pub ownership: LandOwnership,
}

impl SurfaceElement {
    pub fn new(slope: SurfaceSlope) -> Self {
        Self {
            slope,
            water_height: 0,
            ownership: LandOwnership::OWNED,
        }
    }

    #[must_use]
    pub fn with_water(mut self, water_height: i32) -> Self {
        self.water_height = water_height;
        self
    }

    #[must_use]
    pub fn with_ownership(mut self, ownership: LandOwnership) -> Self {
        self.ownership = ownership;
        self
    }

    pub fn has_water(&self) -> bool {
        self.water_height > 0
    }
}

/// A wall, fence or door mounted on one edge of the tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallElement {
    pub entry: ObjectEntryIndex,
    pub direction: Direction,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slope: WallSlope,
    #[cfg_attr(feature = "serde", serde(default))]
    pub colours: [Colour; 3],
    #[cfg_attr(feature = "serde", serde(default))]
    pub across_track: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub banner: Option<BannerIndex>,
}

impl WallElement {
    pub fn new(entry: ObjectEntryIndex, direction: Direction) -> Self {
        Self {
            entry,
            direction,
            slope: WallSlope::Flat,
            colours: [Colour::default(); 3],
            across_track: false,
            banner: None,
        }
    }

    pub fn primary_colour(&self) -> Colour {
        self.colours[0]
    }

    pub fn secondary_colour(&self) -> Colour {
        self.colours[1]
    }

    pub fn tertiary_colour(&self) -> Colour {
        self.colours[2]
    }
}

/// Footpath piece; `edges` marks connected edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathElement {
    pub edges: u8,
}

impl PathElement {
    pub fn connects(&self, edge: Direction) -> bool {
        self.edges & edge.bit() != 0
    }
}

/// One tile of a ride's track piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackElement {
    pub ride: RideId,
    pub track_type: TrackType,
    pub direction: Direction,
    /// Position of this tile within the multi-tile piece.
    pub sequence: u8,
}

/// Ride or park entrance/exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntranceElement {
    pub direction: Direction,
    /// Owning ride, `None` for park entrances.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ride: Option<RideId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmallSceneryElement {
    pub entry: ObjectEntryIndex,
    pub direction: Direction,
}

/// One tile of a multi-tile scenery object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LargeSceneryElement {
    pub entry: ObjectEntryIndex,
    pub direction: Direction,
    pub sequence: u8,
}
