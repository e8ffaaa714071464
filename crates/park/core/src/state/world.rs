use std::collections::BTreeSet;

use crate::config::ParkConfig;

use super::{CoordsXY, CoordsXYZ, TileMap};

/// Animated map feature registered by construction actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MapAnimationKind {
    /// Doors and scrolling signs mounted on walls.
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapAnimation {
    pub kind: MapAnimationKind,
    pub location: CoordsXYZ,
}

/// Map animations keyed by kind and location; registering twice is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapAnimations {
    entries: BTreeSet<MapAnimation>,
}

impl MapAnimations {
    pub fn create(&mut self, kind: MapAnimationKind, location: CoordsXYZ) {
        self.entries.insert(MapAnimation { kind, location });
    }

    pub fn contains(&self, kind: MapAnimationKind, location: CoordsXYZ) -> bool {
        self.entries.contains(&MapAnimation { kind, location })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapAnimation> {
        self.entries.iter()
    }
}

/// Vertical span of a tile column that must be redrawn, in world units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvalidatedColumn {
    pub location: CoordsXY,
    pub z_low: i32,
    pub z_high: i32,
}

/// Mutable map data: tile stacks plus the side channels construction feeds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    pub tiles: TileMap,
    #[cfg_attr(feature = "serde", serde(default))]
    pub animations: MapAnimations,
    #[cfg_attr(feature = "serde", serde(skip))]
    invalidated: Vec<InvalidatedColumn>,
}

impl WorldState {
    pub fn new(tiles: TileMap) -> Self {
        Self {
            tiles,
            animations: MapAnimations::default(),
            invalidated: Vec::new(),
        }
    }

    pub fn from_config(config: &ParkConfig) -> Self {
        Self::new(TileMap::from_config(config))
    }

    /// Records that the column at `location` between `z_low` and `z_high`
    /// needs redrawing.
    pub fn invalidate_column(&mut self, location: CoordsXY, z_low: i32, z_high: i32) {
        self.invalidated.push(InvalidatedColumn {
            location,
            z_low,
            z_high,
        });
    }

    pub fn invalidated(&self) -> &[InvalidatedColumn] {
        &self.invalidated
    }

    /// Hands pending redraw regions to the caller and clears the queue.
    pub fn take_invalidated(&mut self) -> Vec<InvalidatedColumn> {
        std::mem::take(&mut self.invalidated)
    }
}
