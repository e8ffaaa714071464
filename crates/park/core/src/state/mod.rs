//! Authoritative park state representation.
//!
//! This module owns the tile element store, the banner registry and the map
//! side channels (animations, redraw regions). Validation reads this state
//! through shared references; only action execution mutates it.
mod banner;
mod coords;
mod element;
mod money;
mod slope;
mod tile_map;
mod world;

pub use banner::{Banner, BannerFlags, BannerRegistry};
pub use coords::{
    COORDS_XY_STEP, COORDS_Z_STEP, CoordsXY, CoordsXYZ, Direction, LAND_HEIGHT_STEP, TileCoords,
};
pub use element::{
    BannerIndex, Colour, ElementKind, ElementType, EntranceElement, LandOwnership,
    LargeSceneryElement, ObjectEntryIndex, PathElement, RideId, RideType, SmallSceneryElement,
    SurfaceElement, TileElement, TrackElement, TrackType, WallElement,
};
pub use money::Money;
pub use slope::{EdgeSlope, SLOPE_TABLE, SurfaceSlope, WallSlope, wall_slope_for};
pub use tile_map::{CONSTRUCTION_RIGHTS_CLEARANCE, ElementStack, TileMap, TileStorageError};
pub use world::{InvalidatedColumn, MapAnimation, MapAnimationKind, MapAnimations, WorldState};

use crate::config::ParkConfig;

/// Canonical snapshot of the mutable park.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkState {
    pub world: WorldState,
    pub banners: BannerRegistry,
}

impl ParkState {
    pub fn new(world: WorldState, banners: BannerRegistry) -> Self {
        Self { world, banners }
    }

    /// Creates an empty park sized from `config`.
    pub fn from_config(config: &ParkConfig) -> Self {
        Self::new(
            WorldState::from_config(config),
            BannerRegistry::new(config.max_banners),
        )
    }

    pub fn tiles(&self) -> &TileMap {
        &self.world.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut TileMap {
        &mut self.world.tiles
    }
}
