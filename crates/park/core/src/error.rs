//! Common error infrastructure for park-core.
//!
//! This module provides shared types and traits used across all error types in park-core.
//! Domain-specific errors (e.g., `WallPlaceError`) are defined in their
//! respective modules alongside the actions they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each action has its own error type with specific variants
//! - **Player Feedback**: Errors expose a status code plus a title/detail message pair
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The world may change so that the same command succeeds later
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: A required collaborator is missing, nothing can proceed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry once the world changes.
    ///
    /// Examples: tile obstructed, element storage full
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: edge out of range, unknown wall type
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: tile without a surface element
    Internal,

    /// Fatal error - a required oracle is missing.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Outcome category reported back to the command pipeline.
///
/// Success is expressed by `Ok(..)`, so only failure categories appear here.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionStatus {
    /// Malformed input or corrupted collaborator data.
    InvalidParameters,
    /// The player lacks ownership or construction rights.
    NotOwned,
    /// Terrain, slope, water or track rules forbid the placement.
    Disallowed,
    /// Another element occupies the required space.
    NoClearance,
    /// Tile storage or the banner registry is exhausted.
    NoFreeElements,
}

/// Player-facing message strings.
pub mod messages {
    pub const CANT_BUILD_THIS_HERE: &str = "Can't build this here";
    pub const CANT_POSITION_THIS_HERE: &str = "Can't position this here";
    pub const CANT_BUILD_THIS_UNDERWATER: &str = "Can't build this underwater";
    pub const CAN_ONLY_BUILD_THIS_ABOVE_GROUND: &str = "Can only build this above ground";
    pub const UNABLE_TO_BUILD_THIS_ON_SLOPE: &str = "Unable to build this on slope";
    pub const TOO_MANY_BANNERS_IN_GAME: &str = "Too many banners in game";
    pub const OFF_EDGE_OF_MAP: &str = "Off edge of map";
    pub const TILE_ELEMENT_LIMIT_REACHED: &str = "Tile element limit reached";
}

/// Common trait for all park-core errors.
///
/// This trait provides a uniform interface for error classification and
/// player feedback across all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the status code surfaced to the command pipeline.
    fn status(&self) -> ActionStatus;

    /// Returns the error title shown to the player.
    fn title(&self) -> &'static str {
        messages::CANT_BUILD_THIS_HERE
    }

    /// Returns the optional detail line shown under the title.
    fn detail(&self) -> Option<String> {
        None
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
