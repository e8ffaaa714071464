//! Shared park fixture for integration tests.
#![allow(dead_code)]

use park_core::env::{
    ContentSnapshot, RideInfo, RideTypeDescriptor, RideTypeFlags, ScrollingMode, TrackBlock,
    TrackElementDescriptor, TrackSequenceFlags, WallSceneryEntry, WallSceneryFlags,
};
use park_core::state::{
    Direction, ElementKind, RideId, RideType, SurfaceElement, SurfaceSlope, TileCoords,
    TileElement, TrackElement, TrackType,
};
use park_core::{
    ActionOutcome, ActionTransition, CoordsXYZ, Money, ObjectEntryIndex, ParkConfig, ParkState,
    ValidationContext, WallPlaceAction, WallPlaceError, WallPlaceResult,
};

pub const MAP_SIZE: u32 = 16;

pub const FENCE: ObjectEntryIndex = ObjectEntryIndex(5);
pub const SIGN: ObjectEntryIndex = ObjectEntryIndex(6);
pub const DOOR: ObjectEntryIndex = ObjectEntryIndex(7);
pub const RAILING: ObjectEntryIndex = ObjectEntryIndex(8);

pub const FENCE_PRICE: Money = Money(30);

pub const GHOST_TRAIN: RideId = RideId(0);
pub const HAUNTED_HOUSE: RideId = RideId(1);
pub const DARK_RIDE: RideType = RideType(10);
pub const STATION: TrackType = TrackType(1);

pub fn content() -> ContentSnapshot {
    ContentSnapshot::new()
        .with_wall(FENCE, WallSceneryEntry::new("Wooden fence", FENCE_PRICE, 4))
        .with_wall(
            SIGN,
            WallSceneryEntry::new("Scrolling sign", Money(60), 4)
                .with_scrolling_mode(ScrollingMode::Banner),
        )
        .with_wall(
            DOOR,
            WallSceneryEntry::new("Wooden door", Money(40), 4)
                .with_flags(WallSceneryFlags::IS_DOOR),
        )
        .with_wall(
            RAILING,
            WallSceneryEntry::new("Glass railing", Money(50), 3)
                .with_flags(WallSceneryFlags::CANT_BUILD_ON_SLOPE),
        )
        .with_ride_type(
            DARK_RIDE,
            RideTypeDescriptor {
                name: "Dark ride".into(),
                flags: RideTypeFlags::ALLOW_DOORS_ON_TRACK,
            },
        )
        .with_track_element(
            STATION,
            TrackElementDescriptor {
                blocks: vec![TrackBlock::default()],
                allowed_wall_edges: vec![0b1010],
                sequence_flags: vec![TrackSequenceFlags::empty()],
                ..TrackElementDescriptor::default()
            },
        )
        .with_ride(RideInfo::new(GHOST_TRAIN, "Ghost Train", DARK_RIDE))
        .with_ride(RideInfo::new(HAUNTED_HOUSE, "Haunted House", DARK_RIDE))
}

/// A park with a flat, owned surface at height 0 on every tile.
pub struct Fixture {
    pub state: ParkState,
    pub content: ContentSnapshot,
    pub ctx: ValidationContext,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(ParkConfig::with_map_size(MAP_SIZE))
    }

    pub fn with_config(config: ParkConfig) -> Self {
        let mut state = ParkState::from_config(&config);
        for x in 0..config.map_size as i32 {
            for y in 0..config.map_size as i32 {
                state
                    .tiles_mut()
                    .set_surface(TileCoords::new(x, y), 0, SurfaceElement::new(SurfaceSlope::FLAT))
                    .expect("surface fits an empty tile");
            }
        }
        Self {
            state,
            content: content(),
            ctx: ValidationContext::standard(),
        }
    }

    pub fn set_surface(&mut self, tile: TileCoords, base_height: u8, surface: SurfaceElement) {
        self.state
            .tiles_mut()
            .set_surface(tile, base_height, surface)
            .expect("tile is on the map");
    }

    pub fn insert(&mut self, tile: TileCoords, element: TileElement) {
        self.state
            .tiles_mut()
            .insert(tile, element)
            .expect("tile has room");
    }

    /// Lays a one-tile station of the ghost train on `tile`.
    pub fn lay_station(&mut self, tile: TileCoords, direction: Direction, base_height: u8) {
        self.lay_ride_station(GHOST_TRAIN, tile, direction, base_height);
    }

    pub fn lay_ride_station(
        &mut self,
        ride: RideId,
        tile: TileCoords,
        direction: Direction,
        base_height: u8,
    ) {
        let track = TrackElement {
            ride,
            track_type: STATION,
            direction,
            sequence: 0,
        };
        self.insert(
            tile,
            TileElement::new(base_height, base_height + 6, ElementKind::Track(track)),
        );
    }

    pub fn query(
        &self,
        action: &WallPlaceAction,
    ) -> Result<ActionOutcome<WallPlaceResult>, WallPlaceError> {
        action.query(&self.state, &self.content.env(), &self.ctx)
    }

    pub fn execute(
        &mut self,
        action: &WallPlaceAction,
    ) -> Result<ActionOutcome<WallPlaceResult>, WallPlaceError> {
        action.execute(&mut self.state, &self.content.env(), &self.ctx)
    }

    /// Query followed by Execute, as the command pipeline runs them.
    pub fn place(
        &mut self,
        action: &WallPlaceAction,
    ) -> Result<ActionOutcome<WallPlaceResult>, WallPlaceError> {
        self.query(action)?;
        self.execute(action)
    }

    pub fn elements(&self, tile: TileCoords) -> &[TileElement] {
        self.state.tiles().elements_at(tile)
    }
}

pub fn wall(wall_type: ObjectEntryIndex, x: i32, y: i32, z: i32, edge: u8) -> WallPlaceAction {
    WallPlaceAction::new(wall_type, CoordsXYZ::new(x, y, z), edge)
}
