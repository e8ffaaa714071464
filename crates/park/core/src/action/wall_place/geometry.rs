//! Target height and slope resolution for a wall on a tile edge.

use crate::state::{
    COORDS_Z_STEP, CoordsXYZ, Direction, EdgeSlope, LAND_HEIGHT_STEP, SurfaceSlope, TileMap,
    WallSlope, wall_slope_for,
};

use super::WallPlaceError;

/// Copy of the surface fields geometry checks read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceInfo {
    pub base_height: u8,
    pub slope: SurfaceSlope,
    pub water_height: i32,
}

impl SurfaceInfo {
    pub fn base_z(&self) -> i32 {
        i32::from(self.base_height) * COORDS_Z_STEP
    }
}

/// Where the wall sits vertically and how it follows the terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedHeight {
    /// Base of the wall in world units.
    pub target_z: i32,
    pub slope: WallSlope,
}

pub fn surface_info(tiles: &TileMap, location: CoordsXYZ) -> Result<SurfaceInfo, WallPlaceError> {
    let tile = location.to_tile();
    let (element, surface) = tiles.surface_at(tile).ok_or_else(|| {
        tracing::error!(x = location.x, y = location.y, "surface element not found");
        WallPlaceError::SurfaceNotFound(tile)
    })?;
    Ok(SurfaceInfo {
        base_height: element.base_height,
        slope: surface.slope,
        water_height: surface.water_height,
    })
}

/// Resolves the wall's base height and slope.
///
/// An explicit `z` is used as is with a flat wall. `z == 0` places the wall on
/// the terrain: the edge's slope comes from the surface shape and an elevated
/// edge lifts the wall by one land level.
pub fn resolve_height(
    tiles: &TileMap,
    location: CoordsXYZ,
    edge: Direction,
) -> Result<ResolvedHeight, WallPlaceError> {
    if location.z != 0 {
        return Ok(ResolvedHeight {
            target_z: location.z,
            slope: WallSlope::Flat,
        });
    }

    let surface = surface_info(tiles, location)?;
    let packed = wall_slope_for(surface.slope, edge);
    let mut target_z = surface.base_z();
    if packed.contains(EdgeSlope::ELEVATED) {
        target_z += LAND_HEIGHT_STEP;
    }
    Ok(ResolvedHeight {
        target_z,
        slope: WallSlope::from_edge_slope(packed),
    })
}

/// A flat wall must clear both corners of its edge: one land level above the
/// base for a raised corner, two for the peak of a steep slope.
pub fn check_corner_clearance(
    surface: &SurfaceInfo,
    edge: Direction,
    target_z: i32,
) -> Result<(), WallPlaceError> {
    let target_height = target_z / COORDS_Z_STEP;
    for corner in edge.corners() {
        let level = i32::from(surface.slope.corner_level(corner));
        if level == 0 {
            continue;
        }
        let required = i32::from(surface.base_height) + 2 * level;
        if target_height < required {
            return Err(WallPlaceError::BelowGround {
                target_z,
                ground_z: required * COORDS_Z_STEP,
            });
        }
    }
    Ok(())
}
