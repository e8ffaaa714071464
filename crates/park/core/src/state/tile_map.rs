use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::config::ParkConfig;

use super::coords::{COORDS_XY_STEP, COORDS_Z_STEP, LAND_HEIGHT_STEP};
use super::{
    CoordsXY, CoordsXYZ, ElementKind, LandOwnership, SurfaceElement, TileCoords, TileElement,
};

pub type ElementStack = ArrayVec<TileElement, { ParkConfig::MAX_ELEMENTS_PER_TILE }>;

/// Vertical band above the surface that construction rights do not cover,
/// in world units.
pub const CONSTRUCTION_RIGHTS_CLEARANCE: i32 = 3 * COORDS_Z_STEP;

/// Errors raised by the tile element store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileStorageError {
    #[error("tile {0} lies outside the map")]
    OutOfBounds(TileCoords),

    #[error("tile {0} has no room for another element")]
    TileFull(TileCoords),

    #[error("map element limit of {limit} reached")]
    MapFull { limit: usize },
}

/// Square map of tile element stacks.
///
/// Stacks are kept in storage order: the surface first, then elements sorted
/// by base height, ties in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    /// Edge length in tiles, border included.
    size: u32,
    max_elements: usize,
    element_count: usize,
    tiles: BTreeMap<TileCoords, ElementStack>,
}

impl TileMap {
    pub fn new(size: u32, max_elements: usize) -> Self {
        Self {
            size,
            max_elements,
            element_count: 0,
            tiles: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &ParkConfig) -> Self {
        Self::new(config.map_size, config.max_tile_elements)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Largest world coordinate inside the playable area.
    pub fn max_xy(&self) -> i32 {
        (self.size as i32 - 1) * COORDS_XY_STEP - 1
    }

    pub fn contains_tile(&self, tile: TileCoords) -> bool {
        tile.x >= 0 && tile.y >= 0 && tile.x < self.size as i32 && tile.y < self.size as i32
    }

    /// True for any world coordinate that maps onto a stored tile.
    pub fn is_location_valid(&self, coords: CoordsXY) -> bool {
        coords.x >= 0 && coords.y >= 0 && self.contains_tile(coords.to_tile())
    }

    /// True for coordinates on the one-tile border ring.
    pub fn is_at_edge(&self, coords: CoordsXY) -> bool {
        let limit = (self.size as i32 - 1) * COORDS_XY_STEP;
        coords.x < COORDS_XY_STEP
            || coords.y < COORDS_XY_STEP
            || coords.x >= limit
            || coords.y >= limit
    }

    pub fn elements_at(&self, tile: TileCoords) -> &[TileElement] {
        self.tiles.get(&tile).map(|stack| stack.as_slice()).unwrap_or(&[])
    }

    pub fn elements_at_mut(&mut self, tile: TileCoords) -> Option<&mut ElementStack> {
        self.tiles.get_mut(&tile)
    }

    /// The surface element of a tile together with its base height.
    pub fn surface_at(&self, tile: TileCoords) -> Option<(&TileElement, &SurfaceElement)> {
        self.elements_at(tile)
            .iter()
            .find_map(|element| element.as_surface().map(|surface| (element, surface)))
    }

    /// Height of the terrain at the centre of the tile, in world units.
    ///
    /// A lone raised corner or a valley leaves the centre at the base, a
    /// raised side lifts it half a land level, and three raised corners
    /// (steep or not) lift it a full level.
    pub fn surface_height_at(&self, coords: CoordsXY) -> Option<i32> {
        let (element, surface) = self.surface_at(coords.to_tile())?;
        let slope = surface.slope;
        let raised = (0..4).filter(|&corner| slope.corner_raised(corner)).count();
        let half_levels = match raised {
            0 | 1 => 0,
            2 if slope.corner_raised(0) == slope.corner_raised(2) => 0,
            2 => 1,
            _ => 2,
        };
        Some(element.base_z() + half_levels * LAND_HEIGHT_STEP / 2)
    }

    pub fn is_location_in_park(&self, coords: CoordsXY) -> bool {
        self.surface_at(coords.to_tile())
            .is_some_and(|(_, surface)| surface.ownership.contains(LandOwnership::OWNED))
    }

    /// Ownership at a height: construction rights cover everything except the
    /// band just above the surface.
    pub fn is_location_owned(&self, coords: CoordsXYZ) -> bool {
        let Some((element, surface)) = self.surface_at(coords.to_tile()) else {
            return false;
        };
        if surface.ownership.contains(LandOwnership::OWNED) {
            return true;
        }
        if surface
            .ownership
            .contains(LandOwnership::CONSTRUCTION_RIGHTS_OWNED)
        {
            let base = element.base_z();
            return coords.z < base || coords.z >= base + CONSTRUCTION_RIGHTS_CLEARANCE;
        }
        false
    }

    /// Whether one more element fits on `tile` and in the map budget.
    pub fn has_capacity(&self, tile: TileCoords) -> bool {
        self.element_count < self.max_elements
            && self.elements_at(tile).len() < ParkConfig::MAX_ELEMENTS_PER_TILE
    }

    /// Places a surface element at the bottom of an empty or surface-less stack.
    pub fn set_surface(
        &mut self,
        tile: TileCoords,
        base_height: u8,
        surface: SurfaceElement,
    ) -> Result<(), TileStorageError> {
        let element = TileElement::new(base_height, base_height, ElementKind::Surface(surface));
        if let Some(stack) = self.tiles.get_mut(&tile) {
            if let Some(existing) = stack.iter_mut().find(|element| element.as_surface().is_some()) {
                *existing = element;
                return Ok(());
            }
        }
        self.push_at(tile, 0, element).map(|_| ())
    }

    /// Inserts `element` in storage order and returns a handle to it.
    pub fn insert(
        &mut self,
        tile: TileCoords,
        element: TileElement,
    ) -> Result<&mut TileElement, TileStorageError> {
        let base_height = element.base_height;
        let index = self
            .elements_at(tile)
            .iter()
            .position(|existing| existing.as_surface().is_none() && existing.base_height > base_height)
            .unwrap_or(self.elements_at(tile).len());
        self.push_at(tile, index, element)
    }

    fn push_at(
        &mut self,
        tile: TileCoords,
        index: usize,
        element: TileElement,
    ) -> Result<&mut TileElement, TileStorageError> {
        if !self.contains_tile(tile) {
            return Err(TileStorageError::OutOfBounds(tile));
        }
        if self.element_count >= self.max_elements {
            return Err(TileStorageError::MapFull {
                limit: self.max_elements,
            });
        }
        let stack = self.tiles.entry(tile).or_default();
        stack
            .try_insert(index, element)
            .map_err(|_| TileStorageError::TileFull(tile))?;
        self.element_count += 1;
        Ok(&mut stack[index])
    }

    /// Removes the element at `index` of the stack, if present.
    pub fn remove(&mut self, tile: TileCoords, index: usize) -> Option<TileElement> {
        let stack = self.tiles.get_mut(&tile)?;
        if index >= stack.len() {
            return None;
        }
        let removed = stack.remove(index);
        self.element_count -= 1;
        if stack.is_empty() {
            self.tiles.remove(&tile);
        }
        Some(removed)
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self::from_config(&ParkConfig::default())
    }
}
