//! Banner registry: signs attached to walls and free-standing banners.

use bitflags::bitflags;

use crate::env::{RideOracle, TrackOracle};

use super::coords::{COORDS_XY_STEP, COORDS_Z_STEP};
use super::{BannerIndex, Colour, CoordsXY, CoordsXYZ, RideId, TileCoords, TileMap};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct BannerFlags: u8 {
        const IS_WALL        = 1 << 0;
        const LINKED_TO_RIDE = 1 << 1;
    }
}

/// A sign owned by the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Banner {
    pub id: BannerIndex,
    pub text: String,
    pub colour: Colour,
    pub text_colour: Colour,
    pub flags: BannerFlags,
    pub position: TileCoords,
    pub ride: Option<RideId>,
}

impl Banner {
    fn blank(id: BannerIndex) -> Self {
        Self {
            id,
            text: String::new(),
            colour: Colour::WHITE,
            text_colour: Colour::WHITE,
            flags: BannerFlags::empty(),
            position: TileCoords::default(),
            ride: None,
        }
    }

    /// Links the banner to `ride` so that it displays the ride's name.
    pub fn link_to_ride(&mut self, ride: RideId) {
        self.ride = Some(ride);
        self.flags.insert(BannerFlags::LINKED_TO_RIDE);
    }
}

/// Fixed-capacity pool of banners addressed by slot index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BannerRegistry {
    capacity: usize,
    slots: Vec<Option<Banner>>,
}

impl BannerRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of banners currently allocated.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_reached_limit(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Reserves the lowest free slot and returns a blank banner in it.
    ///
    /// Returns `None` when every slot is taken.
    pub fn allocate(&mut self) -> Option<&mut Banner> {
        let index = match self.slots.iter().position(Option::is_none) {
            Some(index) => index,
            None if self.slots.len() < self.capacity => {
                self.slots.push(None);
                self.slots.len() - 1
            }
            None => return None,
        };
        let id = BannerIndex(u16::try_from(index).ok()?);
        let slot = &mut self.slots[index];
        *slot = Some(Banner::blank(id));
        slot.as_mut()
    }

    /// Frees the slot held by `id`, returning the banner it contained.
    pub fn release(&mut self, id: BannerIndex) -> Option<Banner> {
        self.slots.get_mut(usize::from(id.0))?.take()
    }

    pub fn get(&self, id: BannerIndex) -> Option<&Banner> {
        self.slots.get(usize::from(id.0))?.as_ref()
    }

    pub fn get_mut(&mut self, id: BannerIndex) -> Option<&mut Banner> {
        self.slots.get_mut(usize::from(id.0))?.as_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Banner> {
        self.slots.iter().flatten()
    }

    /// Ride a sign placed at `location` should name, if any.
    ///
    /// Scans the tile, then its orthogonal and diagonal neighbours, for
    /// non-ghost track of a non-shop ride whose top is no more than four
    /// height units below `location`. The first tile with a match decides;
    /// within that tile the last match wins. Falls back to the non-shop ride
    /// whose overall view is closest to `location`.
    pub fn closest_ride(
        tiles: &TileMap,
        location: CoordsXYZ,
        rides: &dyn RideOracle,
        tracks: &dyn TrackOracle,
    ) -> Option<RideId> {
        let is_shop = |ride: RideId| {
            rides
                .ride(ride)
                .and_then(|info| tracks.ride_type(info.ride_type))
                .is_none_or(|descriptor| descriptor.is_shop())
        };

        const NEIGHBOURS: [(i32, i32); 9] = [
            (0, 0),
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (-1, -1),
            (1, 1),
            (-1, 1),
            (1, -1),
        ];

        for (dx, dy) in NEIGHBOURS {
            let coords = location
                .xy()
                .offset(dx * COORDS_XY_STEP, dy * COORDS_XY_STEP);
            if !tiles.is_location_valid(coords) {
                continue;
            }
            let found = tiles
                .elements_at(coords.to_tile())
                .iter()
                .filter(|element| !element.is_ghost)
                .filter(|element| element.clearance_z() + 4 * COORDS_Z_STEP > location.z)
                .filter_map(|element| element.as_track().map(|track| track.ride))
                .filter(|&ride| !is_shop(ride))
                .last();
            if found.is_some() {
                return found;
            }
        }

        let origin: CoordsXY = location.xy();
        rides
            .rides()
            .into_iter()
            .filter(|info| !is_shop(info.id))
            .filter_map(|info| info.overall_view.map(|view| (view.manhattan(origin), info.id)))
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, id)| id)
    }
}

impl Default for BannerRegistry {
    fn default() -> Self {
        Self::new(crate::config::ParkConfig::DEFAULT_MAX_BANNERS)
    }
}
