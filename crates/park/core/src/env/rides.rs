use crate::state::{CoordsXY, RideId, RideType};

/// Rides currently built in the park.
pub trait RideOracle: Send + Sync {
    fn ride(&self, id: RideId) -> Option<RideInfo>;

    /// Every ride, in id order.
    fn rides(&self) -> Vec<RideInfo>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideInfo {
    pub id: RideId,
    pub name: String,
    pub ride_type: RideType,
    /// Point the camera centres on when showing the ride.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overall_view: Option<CoordsXY>,
}

impl RideInfo {
    pub fn new(id: RideId, name: impl Into<String>, ride_type: RideType) -> Self {
        Self {
            id,
            name: name.into(),
            ride_type,
            overall_view: None,
        }
    }

    #[must_use]
    pub fn with_overall_view(mut self, view: CoordsXY) -> Self {
        self.overall_view = Some(view);
        self
    }
}
