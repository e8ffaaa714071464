//! Traits describing read-only catalog data.
//!
//! Oracles expose wall, scenery, track and ride definitions. The [`Env`]
//! aggregate bundles them so actions can look up everything they need without
//! hard coupling to concrete implementations.
mod error;
mod rides;
mod scenery;
mod snapshot;
mod track;
mod walls;

pub use error::OracleError;
pub use rides::{RideInfo, RideOracle};
pub use scenery::{
    LargeSceneryEntry, LargeSceneryTile, SceneryOracle, SmallSceneryEntry, SmallSceneryFlags,
};
pub use snapshot::ContentSnapshot;
pub use track::{
    RideTypeDescriptor, RideTypeFlags, TrackBank, TrackBlock, TrackElementDescriptor,
    TrackEndpoint, TrackOracle, TrackSequenceFlags,
};
pub use walls::{ScrollingMode, WallOracle, WallSceneryEntry, WallSceneryFlags};

/// Aggregates read-only oracles required by the action pipeline.
pub struct Env<'a, W, S, T, R>
where
    W: WallOracle + ?Sized,
    S: SceneryOracle + ?Sized,
    T: TrackOracle + ?Sized,
    R: RideOracle + ?Sized,
{
    walls: Option<&'a W>,
    scenery: Option<&'a S>,
    track: Option<&'a T>,
    rides: Option<&'a R>,
}

pub type ParkEnv<'a> = Env<
    'a,
    dyn WallOracle + 'a,
    dyn SceneryOracle + 'a,
    dyn TrackOracle + 'a,
    dyn RideOracle + 'a,
>;

// Only the references are copied; trait objects are not `Clone`.
impl<W, S, T, R> Clone for Env<'_, W, S, T, R>
where
    W: WallOracle + ?Sized,
    S: SceneryOracle + ?Sized,
    T: TrackOracle + ?Sized,
    R: RideOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, S, T, R> Copy for Env<'_, W, S, T, R>
where
    W: WallOracle + ?Sized,
    S: SceneryOracle + ?Sized,
    T: TrackOracle + ?Sized,
    R: RideOracle + ?Sized,
{
}

impl<'a, W, S, T, R> Env<'a, W, S, T, R>
where
    W: WallOracle + ?Sized,
    S: SceneryOracle + ?Sized,
    T: TrackOracle + ?Sized,
    R: RideOracle + ?Sized,
{
    pub fn new(
        walls: Option<&'a W>,
        scenery: Option<&'a S>,
        track: Option<&'a T>,
        rides: Option<&'a R>,
    ) -> Self {
        Self {
            walls,
            scenery,
            track,
            rides,
        }
    }

    pub fn with_all(walls: &'a W, scenery: &'a S, track: &'a T, rides: &'a R) -> Self {
        Self::new(Some(walls), Some(scenery), Some(track), Some(rides))
    }

    pub fn empty() -> Self {
        Self {
            walls: None,
            scenery: None,
            track: None,
            rides: None,
        }
    }

    /// Returns the WallOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::WallsNotAvailable` if no wall oracle was provided.
    pub fn walls(&self) -> Result<&'a W, OracleError> {
        self.walls.ok_or(OracleError::WallsNotAvailable)
    }

    /// Returns the SceneryOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SceneryNotAvailable` if no scenery oracle was provided.
    pub fn scenery(&self) -> Result<&'a S, OracleError> {
        self.scenery.ok_or(OracleError::SceneryNotAvailable)
    }

    /// Returns the TrackOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TrackNotAvailable` if no track oracle was provided.
    pub fn track(&self) -> Result<&'a T, OracleError> {
        self.track.ok_or(OracleError::TrackNotAvailable)
    }

    /// Returns the RideOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RidesNotAvailable` if no ride oracle was provided.
    pub fn rides(&self) -> Result<&'a R, OracleError> {
        self.rides.ok_or(OracleError::RidesNotAvailable)
    }
}

impl<'a, W, S, T, R> Env<'a, W, S, T, R>
where
    W: WallOracle + 'a,
    S: SceneryOracle + 'a,
    T: TrackOracle + 'a,
    R: RideOracle + 'a,
{
    /// Converts this environment into a trait-object based `ParkEnv`.
    pub fn as_park_env(&self) -> ParkEnv<'a> {
        let walls: Option<&'a dyn WallOracle> = self.walls.map(|walls| walls as _);
        let scenery: Option<&'a dyn SceneryOracle> = self.scenery.map(|scenery| scenery as _);
        let track: Option<&'a dyn TrackOracle> = self.track.map(|track| track as _);
        let rides: Option<&'a dyn RideOracle> = self.rides.map(|rides| rides as _);
        Env::new(walls, scenery, track, rides)
    }
}
