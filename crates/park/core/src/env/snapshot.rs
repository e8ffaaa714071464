//! In-memory oracle implementations backed by plain maps.
//!
//! Content loaders build a [`ContentSnapshot`] once; validation then borrows
//! it through [`ContentSnapshot::env`].

use std::collections::BTreeMap;

use super::{
    LargeSceneryEntry, ParkEnv, RideInfo, RideOracle, RideTypeDescriptor, SceneryOracle,
    SmallSceneryEntry, TrackElementDescriptor, TrackOracle, WallOracle, WallSceneryEntry,
};
use crate::state::{ObjectEntryIndex, RideId, RideType, TrackType};

/// Every catalog the wall placement pipeline consults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContentSnapshot {
    pub walls: BTreeMap<ObjectEntryIndex, WallSceneryEntry>,
    pub small_scenery: BTreeMap<ObjectEntryIndex, SmallSceneryEntry>,
    pub large_scenery: BTreeMap<ObjectEntryIndex, LargeSceneryEntry>,
    pub ride_types: BTreeMap<RideType, RideTypeDescriptor>,
    pub track_elements: BTreeMap<TrackType, TrackElementDescriptor>,
    pub rides: BTreeMap<RideId, RideInfo>,
}

impl ContentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_wall(mut self, id: ObjectEntryIndex, entry: WallSceneryEntry) -> Self {
        self.walls.insert(id, entry);
        self
    }

    #[must_use]
    pub fn with_small_scenery(mut self, id: ObjectEntryIndex, entry: SmallSceneryEntry) -> Self {
        self.small_scenery.insert(id, entry);
        self
    }

    #[must_use]
    pub fn with_large_scenery(mut self, id: ObjectEntryIndex, entry: LargeSceneryEntry) -> Self {
        self.large_scenery.insert(id, entry);
        self
    }

    #[must_use]
    pub fn with_ride_type(mut self, ride_type: RideType, descriptor: RideTypeDescriptor) -> Self {
        self.ride_types.insert(ride_type, descriptor);
        self
    }

    #[must_use]
    pub fn with_track_element(
        mut self,
        track_type: TrackType,
        descriptor: TrackElementDescriptor,
    ) -> Self {
        self.track_elements.insert(track_type, descriptor);
        self
    }

    #[must_use]
    pub fn with_ride(mut self, ride: RideInfo) -> Self {
        self.rides.insert(ride.id, ride);
        self
    }

    /// Environment with every oracle served by this snapshot.
    pub fn env(&self) -> ParkEnv<'_> {
        ParkEnv::with_all(self, self, self, self)
    }
}

impl WallOracle for ContentSnapshot {
    fn wall_entry(&self, id: ObjectEntryIndex) -> Option<WallSceneryEntry> {
        self.walls.get(&id).cloned()
    }
}

impl SceneryOracle for ContentSnapshot {
    fn small_scenery(&self, id: ObjectEntryIndex) -> Option<SmallSceneryEntry> {
        self.small_scenery.get(&id).cloned()
    }

    fn large_scenery(&self, id: ObjectEntryIndex) -> Option<LargeSceneryEntry> {
        self.large_scenery.get(&id).cloned()
    }
}

impl TrackOracle for ContentSnapshot {
    fn ride_type(&self, ride_type: RideType) -> Option<RideTypeDescriptor> {
        self.ride_types.get(&ride_type).cloned()
    }

    fn track_element(&self, track_type: TrackType) -> Option<TrackElementDescriptor> {
        self.track_elements.get(&track_type).cloned()
    }
}

impl RideOracle for ContentSnapshot {
    fn ride(&self, id: RideId) -> Option<RideInfo> {
        self.rides.get(&id).cloned()
    }

    fn rides(&self) -> Vec<RideInfo> {
        self.rides.values().cloned().collect()
    }
}
