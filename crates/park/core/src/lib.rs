//! Deterministic construction rules for a tile-based park simulation.
//!
//! `park-core` defines the canonical wall placement rules (terrain slope
//! resolution, obstruction scanning, ride track compatibility) and the
//! two-phase query/execute contract they run under. Catalog data is read
//! through the oracle traits in [`env`]; all mutation of [`ParkState`] flows
//! through [`engine::ActionEngine`] or an action's `execute`.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionFlags, ActionOutcome, ActionResult, ActionTransition, Obstruction,
    TrackEdgeVerdict, WallPlaceAction, WallPlaceError, WallPlaceResult, WallPlacementPlan,
};
pub use config::{ParkConfig, ValidationContext};
pub use engine::{ActionEngine, ExecuteError, TransitionPhase, TransitionPhaseError};
pub use env::{ContentSnapshot, Env, OracleError, ParkEnv};
pub use error::{ActionStatus, ErrorSeverity, GameError};
pub use state::{
    BannerIndex, BannerRegistry, Colour, CoordsXY, CoordsXYZ, Direction, Money, ObjectEntryIndex,
    ParkState, TileCoords, TileElement, TileMap, WorldState,
};
