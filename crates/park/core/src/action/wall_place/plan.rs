//! Validation shared by both phases of wall placement.

use crate::action::ActionFlags;
use crate::config::ValidationContext;
use crate::env::{ParkEnv, WallSceneryEntry, WallSceneryFlags};
use crate::state::{COORDS_Z_STEP, CoordsXYZ, Direction, ParkState, WallSlope};

use super::geometry::{self, ResolvedHeight};
use super::obstruction;
use super::{WallPlaceAction, WallPlaceError};

/// Which phase a plan is built for.
///
/// Execute repeats only the height, catalog, clearance and obstruction steps;
/// ownership, water, ground, slope and capacity checks are Query-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlanMode {
    Query,
    Execute,
}

/// Everything needed to commit a wall, derived from the request and the
/// current park.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallPlacementPlan {
    /// Tile position with the resolved base height as `z`.
    pub location: CoordsXYZ,
    pub edge: Direction,
    pub slope: WallSlope,
    /// Base of the wall in height units.
    pub base_height: u8,
    /// Top of the wall in height units.
    pub clearance_height: u8,
    pub across_track: bool,
    pub entry: WallSceneryEntry,
}

impl WallPlacementPlan {
    pub fn base_z(&self) -> i32 {
        i32::from(self.base_height) * COORDS_Z_STEP
    }

    pub(crate) fn build(
        action: &WallPlaceAction,
        state: &ParkState,
        env: &ParkEnv<'_>,
        ctx: &ValidationContext,
        mode: PlanMode,
    ) -> Result<Self, WallPlaceError> {
        let tiles = state.tiles();
        let location = action.location;
        let full = mode == PlanMode::Query;

        if full {
            action.check_location(tiles, ctx)?;
        }
        let edge =
            Direction::from_index(action.edge).ok_or(WallPlaceError::InvalidEdge(action.edge))?;

        let ResolvedHeight { target_z, slope } = geometry::resolve_height(tiles, location, edge)?;
        let base_height = height_units(target_z)?;

        if full {
            let surface = geometry::surface_info(tiles, location)?;
            if !ctx.disable_clearance_checks {
                if surface.water_height > 0 && target_z < surface.water_height {
                    return Err(WallPlaceError::Underwater {
                        target_z,
                        water_z: surface.water_height,
                    });
                }
                if target_z < surface.base_z() {
                    return Err(WallPlaceError::BelowGround {
                        target_z,
                        ground_z: surface.base_z(),
                    });
                }
            }
            if !slope.is_sloped() {
                geometry::check_corner_clearance(&surface, edge, target_z)?;
            }
        }

        let entry = env.walls()?.wall_entry(action.wall_type).ok_or_else(|| {
            tracing::error!(wall_type = %action.wall_type, "wall type not found");
            WallPlaceError::UnknownWallType(action.wall_type)
        })?;

        if full && entry.needs_banner() && state.banners.has_reached_limit() {
            tracing::error!("no free banners available");
            return Err(WallPlaceError::BannerLimitReached);
        }

        let mut clearance = i32::from(base_height);
        if slope.is_sloped() {
            if full && entry.flags.contains(WallSceneryFlags::CANT_BUILD_ON_SLOPE) {
                return Err(WallPlaceError::CannotBuildOnSlope);
            }
            clearance += 2;
        }
        clearance += i32::from(entry.height);
        let clearance_height = height_units(clearance * COORDS_Z_STEP)?;

        let mut across_track = false;
        if !action.flags.contains(ActionFlags::PATH_SCENERY) && !ctx.disable_clearance_checks {
            let outcome = obstruction::scan(
                tiles,
                env,
                &entry,
                location.to_tile(),
                edge,
                base_height,
                clearance_height,
            )?;
            across_track = outcome.across_track;
        }

        if full && !tiles.has_capacity(location.to_tile()) {
            return Err(WallPlaceError::TileElementLimitReached(location.to_tile()));
        }

        Ok(Self {
            location: location.xy().with_z(target_z),
            edge,
            slope,
            base_height,
            clearance_height,
            across_track,
            entry,
        })
    }
}

/// Converts a world height to stored height units.
fn height_units(z: i32) -> Result<u8, WallPlaceError> {
    if z < 0 {
        return Err(WallPlaceError::HeightOutOfRange(z));
    }
    u8::try_from(z / COORDS_Z_STEP).map_err(|_| WallPlaceError::HeightOutOfRange(z))
}
