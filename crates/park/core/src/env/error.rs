//! Oracle access errors.

use crate::error::{ActionStatus, ErrorSeverity, GameError};

/// Errors that occur when a required oracle is missing from the environment.
///
/// Validation cannot proceed without the catalogs, so these are fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("WallOracle not available")]
    WallsNotAvailable,

    #[error("SceneryOracle not available")]
    SceneryNotAvailable,

    #[error("TrackOracle not available")]
    TrackNotAvailable,

    #[error("RideOracle not available")]
    RidesNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn status(&self) -> ActionStatus {
        ActionStatus::InvalidParameters
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            WallsNotAvailable => "ORACLE_WALLS_NOT_AVAILABLE",
            SceneryNotAvailable => "ORACLE_SCENERY_NOT_AVAILABLE",
            TrackNotAvailable => "ORACLE_TRACK_NOT_AVAILABLE",
            RidesNotAvailable => "ORACLE_RIDES_NOT_AVAILABLE",
        }
    }
}
