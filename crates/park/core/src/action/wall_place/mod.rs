//! Placing walls, fences and doors on tile edges.
//!
//! A wall occupies one edge of a tile. Its height and slope follow the terrain
//! unless an explicit height is requested, it must not collide with anything
//! on the same edge, and doors may cross the ends of some ride track pieces.
//! Signs on walls allocate a banner that is linked to the nearest ride.

mod error;
mod geometry;
mod obstruction;
mod plan;
mod track;

pub use error::{Obstruction, WallPlaceError};
pub use geometry::{ResolvedHeight, SurfaceInfo, check_corner_clearance, resolve_height};
pub use obstruction::{ScanOutcome, scan};
pub use plan::WallPlacementPlan;
pub use track::{TrackEdgeVerdict, check_track_edge};

use crate::config::ValidationContext;
use crate::env::{ParkEnv, WallSceneryFlags};
use crate::state::{
    BannerFlags, BannerIndex, BannerRegistry, Colour, CoordsXYZ, ElementKind, MapAnimationKind,
    ObjectEntryIndex, ParkState, TileElement, TileMap, WallElement,
};

use super::{ActionFlags, ActionOutcome, ActionTransition};
use plan::PlanMode;

/// Height of the column redrawn above a freshly placed wall, in world units.
const INVALIDATE_HEIGHT: i32 = 72;

/// Request to place a wall on one edge of a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallPlaceAction {
    pub wall_type: ObjectEntryIndex,
    /// World position; `z == 0` places the wall on the terrain.
    pub location: CoordsXYZ,
    /// Raw edge index, validated against `0..=3`.
    pub edge: u8,
    /// Primary, secondary and tertiary colours.
    pub colours: [Colour; 3],
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: ActionFlags,
}

/// Payload of a successful placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallPlaceResult {
    /// Base of the placed wall in world units; zero for queries.
    pub base_height: i32,
    pub banner: Option<BannerIndex>,
}

impl WallPlaceAction {
    pub fn new(wall_type: ObjectEntryIndex, location: CoordsXYZ, edge: u8) -> Self {
        Self {
            wall_type,
            location,
            edge,
            colours: [Colour::default(); 3],
            flags: ActionFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_colours(mut self, primary: Colour, secondary: Colour, tertiary: Colour) -> Self {
        self.colours = [primary, secondary, tertiary];
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ActionFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Where cost popups appear: the tile centre, at the terrain when no
    /// explicit height was given.
    pub fn anchor_position(&self, tiles: &TileMap) -> CoordsXYZ {
        let centre = self.location.xy().offset(16, 16);
        let z = if self.location.z == 0 {
            tiles.surface_height_at(centre).unwrap_or(0)
        } else {
            self.location.z
        };
        centre.with_z(z)
    }

    /// Ownership and map bounds, skipped in editor, sandbox and path-scenery
    /// placement except for the playable area limit.
    fn check_location(
        &self,
        tiles: &TileMap,
        ctx: &ValidationContext,
    ) -> Result<(), WallPlaceError> {
        let location = self.location;
        if !tiles.is_location_valid(location.xy()) {
            return Err(WallPlaceError::LocationInvalid(location));
        }

        if !ctx.bypasses_ownership() && !self.flags.contains(ActionFlags::PATH_SCENERY) {
            let owned = if location.z == 0 {
                tiles.is_location_in_park(location.xy())
            } else {
                tiles.is_location_owned(location)
            };
            if !owned {
                return Err(WallPlaceError::NotOwned(location));
            }
        } else if !ctx.track_design_preview
            && (location.x > tiles.max_xy() || location.y > tiles.max_xy())
        {
            tracing::error!(x = location.x, y = location.y, "invalid x/y coordinates");
            return Err(WallPlaceError::OutOfMapBounds(location));
        }
        Ok(())
    }

    /// Validates and plans the placement without touching `state`.
    pub fn plan(
        &self,
        state: &ParkState,
        env: &ParkEnv<'_>,
        ctx: &ValidationContext,
    ) -> Result<WallPlacementPlan, WallPlaceError> {
        WallPlacementPlan::build(self, state, env, ctx, PlanMode::Query)
    }

    /// Allocates and initialises the banner for a sign-carrying wall.
    fn create_banner(
        &self,
        state: &mut ParkState,
        env: &ParkEnv<'_>,
        plan: &WallPlacementPlan,
    ) -> Result<BannerIndex, WallPlaceError> {
        let ride =
            BannerRegistry::closest_ride(state.tiles(), plan.location, env.rides()?, env.track()?);
        let Some(banner) = state.banners.allocate() else {
            tracing::error!("no free banners available");
            return Err(WallPlaceError::BannerLimitReached);
        };
        banner.text.clear();
        banner.colour = Colour::WHITE;
        banner.text_colour = Colour::WHITE;
        banner.flags = BannerFlags::IS_WALL;
        banner.position = self.location.to_tile();
        if let Some(ride) = ride {
            banner.link_to_ride(ride);
        }
        Ok(banner.id)
    }

    fn wall_element(&self, plan: &WallPlacementPlan, banner: Option<BannerIndex>) -> TileElement {
        let [primary, secondary, tertiary] = self.colours;
        let tertiary = if plan.entry.flags.contains(WallSceneryFlags::HAS_TERTIARY_COLOUR) {
            tertiary
        } else {
            Colour::default()
        };
        let wall = WallElement {
            entry: self.wall_type,
            direction: plan.edge,
            slope: plan.slope,
            colours: [primary, secondary, tertiary],
            across_track: plan.across_track,
            banner,
        };
        let mut element = TileElement::new(
            plan.base_height,
            plan.clearance_height,
            ElementKind::Wall(wall),
        )
        .with_quadrants(0);
        element.is_ghost = self.flags.contains(ActionFlags::GHOST);
        element
    }
}

impl ActionTransition for WallPlaceAction {
    type Error = WallPlaceError;
    type Output = WallPlaceResult;

    fn query(
        &self,
        state: &ParkState,
        env: &ParkEnv<'_>,
        ctx: &ValidationContext,
    ) -> Result<ActionOutcome<WallPlaceResult>, WallPlaceError> {
        let plan = self.plan(state, env, ctx)?;
        Ok(ActionOutcome {
            cost: plan.entry.price,
            position: self.anchor_position(state.tiles()),
            data: WallPlaceResult::default(),
        })
    }

    fn execute(
        &self,
        state: &mut ParkState,
        env: &ParkEnv<'_>,
        ctx: &ValidationContext,
    ) -> Result<ActionOutcome<WallPlaceResult>, WallPlaceError> {
        let plan = WallPlacementPlan::build(self, state, env, ctx, PlanMode::Execute)?;
        let position = self.anchor_position(state.tiles());

        let banner = if plan.entry.needs_banner() {
            Some(self.create_banner(state, env, &plan)?)
        } else {
            None
        };

        let element = self.wall_element(&plan, banner);
        let inserted = state
            .tiles_mut()
            .insert(plan.location.to_tile(), element)
            .map(|_| ());
        if let Err(error) = inserted {
            if let Some(id) = banner {
                state.banners.release(id);
            }
            tracing::warn!(%error, location = %plan.location, "wall insertion failed");
            return Err(error.into());
        }

        state
            .world
            .animations
            .create(MapAnimationKind::Wall, plan.location);
        let base_z = plan.base_z();
        state
            .world
            .invalidate_column(self.location.xy(), base_z, base_z + INVALIDATE_HEIGHT);

        tracing::debug!(
            location = %plan.location,
            edge = %plan.edge,
            wall = %plan.entry.name,
            "placed wall"
        );
        Ok(ActionOutcome {
            cost: plan.entry.price,
            position,
            data: WallPlaceResult {
                base_height: base_z,
                banner,
            },
        })
    }
}

#[cfg(feature = "serde")]
impl WallPlaceAction {
    /// Encodes the action for the command pipeline.
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ContentSnapshot, WallSceneryEntry};
    use crate::state::{Money, SurfaceElement, SurfaceSlope, TileCoords};

    fn park() -> ParkState {
        let mut state = ParkState::from_config(&crate::config::ParkConfig::with_map_size(8));
        state
            .tiles_mut()
            .set_surface(TileCoords::new(1, 1), 2, SurfaceElement::new(SurfaceSlope::FLAT))
            .unwrap();
        state
    }

    fn content() -> ContentSnapshot {
        ContentSnapshot::new().with_wall(
            ObjectEntryIndex(5),
            WallSceneryEntry::new("Brick wall", Money(40), 6)
                .with_flags(WallSceneryFlags::HAS_TERTIARY_COLOUR),
        )
    }

    #[test]
    fn anchor_uses_terrain_height_for_auto_placement() {
        let state = park();
        let action = WallPlaceAction::new(ObjectEntryIndex(5), CoordsXYZ::new(32, 32, 0), 0);
        assert_eq!(
            action.anchor_position(state.tiles()),
            CoordsXYZ::new(48, 48, 16)
        );
        let explicit = WallPlaceAction::new(ObjectEntryIndex(5), CoordsXYZ::new(32, 32, 40), 0);
        assert_eq!(
            explicit.anchor_position(state.tiles()),
            CoordsXYZ::new(48, 48, 40)
        );
    }

    #[test]
    fn plan_carries_clearance_and_entry() {
        let state = park();
        let content = content();
        let action = WallPlaceAction::new(ObjectEntryIndex(5), CoordsXYZ::new(32, 32, 0), 1);
        let plan = action
            .plan(&state, &content.env(), &ValidationContext::standard())
            .unwrap();
        assert_eq!(plan.base_height, 2);
        assert_eq!(plan.clearance_height, 8);
        assert_eq!(plan.edge, crate::state::Direction::North);
        assert_eq!(plan.entry.price, Money(40));
    }

    #[test]
    fn execute_sets_colours_and_ghost_flag() {
        let mut state = park();
        let content = content();
        let action = WallPlaceAction::new(ObjectEntryIndex(5), CoordsXYZ::new(32, 32, 0), 2)
            .with_colours(Colour(4), Colour(5), Colour(6))
            .with_flags(ActionFlags::GHOST);
        let outcome = action
            .execute(&mut state, &content.env(), &ValidationContext::standard())
            .unwrap();
        assert_eq!(outcome.data.base_height, 16);

        let element = &state.tiles().elements_at(TileCoords::new(1, 1))[1];
        assert!(element.is_ghost);
        assert_eq!(element.occupied_quadrants, 0);
        let wall = element.as_wall().unwrap();
        assert_eq!(wall.colours, [Colour(4), Colour(5), Colour(6)]);
        assert_eq!(state.world.invalidated()[0].z_high, 16 + 72);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn command_encoding_is_lossless() {
        let action = WallPlaceAction::new(ObjectEntryIndex(5), CoordsXYZ::new(64, 96, 24), 3)
            .with_colours(Colour(1), Colour(2), Colour(3))
            .with_flags(ActionFlags::PATH_SCENERY);
        let bytes = action.encode().unwrap();
        assert_eq!(WallPlaceAction::decode(&bytes).unwrap(), action);
    }
}
