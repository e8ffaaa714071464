//! Construction actions and the two-phase transaction contract.
//!
//! Every action is validated by [`ActionTransition::query`] against a shared
//! view of the park and committed by [`ActionTransition::execute`]. Query
//! never mutates; Execute re-derives what it needs from the current state
//! before changing it, so the two may be separated by other commands.
//!
//! # Module Structure
//!
//! - `wall_place`: placing walls, fences and doors on tile edges

pub mod wall_place;

use bitflags::bitflags;

pub use wall_place::{
    Obstruction, TrackEdgeVerdict, WallPlaceAction, WallPlaceError, WallPlaceResult,
    WallPlacementPlan,
};

use crate::config::ValidationContext;
use crate::env::ParkEnv;
use crate::error::GameError;
use crate::state::{CoordsXYZ, Money, ParkState};

bitflags! {
    /// Command flags carried with an action.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ActionFlags: u32 {
        /// Preview placement: the element is marked ghost and ignored by collisions.
        const GHOST        = 1 << 6;
        /// Issued while placing path additions; skips ownership and obstruction checks.
        const PATH_SCENERY = 1 << 7;
    }
}

/// Successful result of either phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome<T> {
    pub cost: Money,
    /// Where the UI anchors cost popups and sounds.
    pub position: CoordsXYZ,
    pub data: T,
}

/// Defines how a construction action validates and mutates the park.
pub trait ActionTransition {
    type Error: GameError;
    type Output;

    /// Validates the action against `state` without mutating it.
    fn query(
        &self,
        state: &ParkState,
        env: &ParkEnv<'_>,
        ctx: &ValidationContext,
    ) -> Result<ActionOutcome<Self::Output>, Self::Error>;

    /// Commits the action. Implementations may skip checks that only Query
    /// performs; callers wanting both run Query first.
    fn execute(
        &self,
        state: &mut ParkState,
        env: &ParkEnv<'_>,
        ctx: &ValidationContext,
    ) -> Result<ActionOutcome<Self::Output>, Self::Error>;
}

/// Every action the command pipeline can carry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    WallPlace(WallPlaceAction),
}

impl From<WallPlaceAction> for Action {
    fn from(action: WallPlaceAction) -> Self {
        Action::WallPlace(action)
    }
}

/// Outcome payloads, one variant per [`Action`] variant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    WallPlace(WallPlaceResult),
}
