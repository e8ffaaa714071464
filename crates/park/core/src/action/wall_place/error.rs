//! Wall placement errors.

use std::fmt;

use crate::env::OracleError;
use crate::error::{ActionStatus, ErrorSeverity, GameError, messages};
use crate::state::{CoordsXYZ, ElementType, ObjectEntryIndex, TileCoords, TileStorageError};

/// Element found in the space a wall needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Obstruction {
    pub kind: ElementType,
    /// Display name of the blocking object.
    pub name: String,
}

impl Obstruction {
    pub fn new(kind: ElementType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for Obstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in the way", self.name)
    }
}

/// Reasons a wall cannot be placed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WallPlaceError {
    #[error("location {0} is not on the map")]
    LocationInvalid(CoordsXYZ),

    #[error("location {0} is not owned by the park")]
    NotOwned(CoordsXYZ),

    #[error("location {0} lies beyond the playable area")]
    OutOfMapBounds(CoordsXYZ),

    #[error("edge {0} is not in 0..=3")]
    InvalidEdge(u8),

    #[error("height {0} cannot be stored in a tile element")]
    HeightOutOfRange(i32),

    #[error("no surface element at tile {0}")]
    SurfaceNotFound(TileCoords),

    #[error("target height {target_z} is below the water surface at {water_z}")]
    Underwater { target_z: i32, water_z: i32 },

    #[error("target height {target_z} is below the ground at {ground_z}")]
    BelowGround { target_z: i32, ground_z: i32 },

    #[error("wall type {0} is not loaded")]
    UnknownWallType(ObjectEntryIndex),

    #[error("banner registry is full")]
    BannerLimitReached,

    #[error("wall type cannot follow a sloped edge")]
    CannotBuildOnSlope,

    #[error("tile {0} is on the map border")]
    OffEdgeOfMap(TileCoords),

    #[error("{0}")]
    Obstructed(Obstruction),

    #[error("no room for another element at tile {0}")]
    TileElementLimitReached(TileCoords),

    #[error("inserting the wall failed: {0}")]
    InsertFailed(#[from] TileStorageError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for WallPlaceError {
    fn severity(&self) -> ErrorSeverity {
        use WallPlaceError::*;
        match self {
            NotOwned(_)
            | Underwater { .. }
            | BelowGround { .. }
            | BannerLimitReached
            | Obstructed(_)
            | TileElementLimitReached(_)
            | InsertFailed(_) => ErrorSeverity::Recoverable,

            LocationInvalid(_)
            | OutOfMapBounds(_)
            | InvalidEdge(_)
            | HeightOutOfRange(_)
            | UnknownWallType(_)
            | CannotBuildOnSlope
            | OffEdgeOfMap(_) => ErrorSeverity::Validation,

            SurfaceNotFound(_) => ErrorSeverity::Internal,

            Oracle(error) => error.severity(),
        }
    }

    fn status(&self) -> ActionStatus {
        use WallPlaceError::*;
        match self {
            LocationInvalid(_) | NotOwned(_) => ActionStatus::NotOwned,

            OutOfMapBounds(_)
            | InvalidEdge(_)
            | HeightOutOfRange(_)
            | SurfaceNotFound(_)
            | UnknownWallType(_)
            | BannerLimitReached
            | OffEdgeOfMap(_) => ActionStatus::InvalidParameters,

            Underwater { .. } | BelowGround { .. } | CannotBuildOnSlope => ActionStatus::Disallowed,

            Obstructed(_) => ActionStatus::NoClearance,

            TileElementLimitReached(_) | InsertFailed(_) => ActionStatus::NoFreeElements,

            Oracle(error) => error.status(),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            WallPlaceError::InsertFailed(_) => messages::CANT_POSITION_THIS_HERE,
            _ => messages::CANT_BUILD_THIS_HERE,
        }
    }

    fn detail(&self) -> Option<String> {
        use WallPlaceError::*;
        let message = match self {
            Underwater { .. } => messages::CANT_BUILD_THIS_UNDERWATER,
            BelowGround { .. } => messages::CAN_ONLY_BUILD_THIS_ABOVE_GROUND,
            BannerLimitReached => messages::TOO_MANY_BANNERS_IN_GAME,
            CannotBuildOnSlope => messages::UNABLE_TO_BUILD_THIS_ON_SLOPE,
            OffEdgeOfMap(_) => messages::OFF_EDGE_OF_MAP,
            TileElementLimitReached(_) | InsertFailed(_) => messages::TILE_ELEMENT_LIMIT_REACHED,
            Obstructed(obstruction) => return Some(obstruction.to_string()),
            _ => return None,
        };
        Some(message.to_owned())
    }

    fn error_code(&self) -> &'static str {
        use WallPlaceError::*;
        match self {
            LocationInvalid(_) => "WALL_PLACE_LOCATION_INVALID",
            NotOwned(_) => "WALL_PLACE_NOT_OWNED",
            OutOfMapBounds(_) => "WALL_PLACE_OUT_OF_MAP_BOUNDS",
            InvalidEdge(_) => "WALL_PLACE_INVALID_EDGE",
            HeightOutOfRange(_) => "WALL_PLACE_HEIGHT_OUT_OF_RANGE",
            SurfaceNotFound(_) => "WALL_PLACE_SURFACE_NOT_FOUND",
            Underwater { .. } => "WALL_PLACE_UNDERWATER",
            BelowGround { .. } => "WALL_PLACE_BELOW_GROUND",
            UnknownWallType(_) => "WALL_PLACE_UNKNOWN_WALL_TYPE",
            BannerLimitReached => "WALL_PLACE_BANNER_LIMIT_REACHED",
            CannotBuildOnSlope => "WALL_PLACE_CANNOT_BUILD_ON_SLOPE",
            OffEdgeOfMap(_) => "WALL_PLACE_OFF_EDGE_OF_MAP",
            Obstructed(_) => "WALL_PLACE_OBSTRUCTED",
            TileElementLimitReached(_) => "WALL_PLACE_TILE_ELEMENT_LIMIT_REACHED",
            InsertFailed(_) => "WALL_PLACE_INSERT_FAILED",
            Oracle(error) => error.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underwater_reports_disallowed_with_detail() {
        let error = WallPlaceError::Underwater {
            target_z: 0,
            water_z: 32,
        };
        assert_eq!(error.status(), ActionStatus::Disallowed);
        assert_eq!(error.title(), messages::CANT_BUILD_THIS_HERE);
        assert_eq!(
            error.detail().as_deref(),
            Some(messages::CANT_BUILD_THIS_UNDERWATER)
        );
    }

    #[test]
    fn obstruction_detail_names_the_blocker() {
        let error =
            WallPlaceError::Obstructed(Obstruction::new(ElementType::Path, "Footpath"));
        assert_eq!(error.status(), ActionStatus::NoClearance);
        assert_eq!(error.detail().as_deref(), Some("Footpath in the way"));
        assert!(error.severity().is_recoverable());
    }

    #[test]
    fn failed_insert_uses_position_title() {
        let error = WallPlaceError::from(TileStorageError::TileFull(TileCoords::new(1, 1)));
        assert_eq!(error.status(), ActionStatus::NoFreeElements);
        assert_eq!(error.title(), messages::CANT_POSITION_THIS_HERE);
    }

    #[test]
    fn oracle_errors_are_fatal() {
        let error = WallPlaceError::from(OracleError::WallsNotAvailable);
        assert_eq!(error.severity(), ErrorSeverity::Fatal);
        assert_eq!(error.error_code(), "ORACLE_WALLS_NOT_AVAILABLE");
    }
}
