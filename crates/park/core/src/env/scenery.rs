use bitflags::bitflags;

use crate::state::{Direction, ObjectEntryIndex};

/// Catalog of loaded small and large scenery objects.
pub trait SceneryOracle: Send + Sync {
    fn small_scenery(&self, id: ObjectEntryIndex) -> Option<SmallSceneryEntry>;

    fn large_scenery(&self, id: ObjectEntryIndex) -> Option<LargeSceneryEntry>;
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SmallSceneryFlags: u32 {
        const FULL_TILE = 1 << 0;
        /// Walls may not share the tile's occupied space.
        const NO_WALLS  = 1 << 1;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmallSceneryEntry {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: SmallSceneryFlags,
}

impl SmallSceneryEntry {
    pub fn blocks_walls(&self) -> bool {
        self.flags.contains(SmallSceneryFlags::NO_WALLS)
    }
}

/// One tile of a large scenery footprint.
///
/// Bits 8..=11 of `flags` mark, per edge relative to the object's direction,
/// whether a wall may be mounted on that edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LargeSceneryTile {
    pub x_offset: i16,
    pub y_offset: i16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: u16,
}

impl LargeSceneryTile {
    pub const WALLS_ALLOWED_SHIFT: u16 = 8;

    pub fn allows_wall(&self, relative_edge: Direction) -> bool {
        self.flags & (1 << (u16::from(relative_edge.index()) + Self::WALLS_ALLOWED_SHIFT)) != 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LargeSceneryEntry {
    pub name: String,
    pub tiles: Vec<LargeSceneryTile>,
}

impl LargeSceneryEntry {
    pub fn tile(&self, sequence: u8) -> Option<&LargeSceneryTile> {
        self.tiles.get(usize::from(sequence))
    }
}
