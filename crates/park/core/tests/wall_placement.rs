mod common;

use common::{
    DOOR, FENCE, FENCE_PRICE, Fixture, GHOST_TRAIN, HAUNTED_HOUSE, MAP_SIZE, RAILING, SIGN, wall,
};
use park_core::error::messages;
use park_core::state::{
    BannerFlags, Direction, ElementKind, EntranceElement, LandOwnership, MapAnimationKind,
    SurfaceElement, SurfaceSlope, TileCoords, TileElement, WallSlope,
};
use park_core::{
    ActionFlags, ActionStatus, BannerIndex, CoordsXYZ, GameError, ParkConfig, WallPlaceError,
};

// ============================================================================
// Basic placement
// ============================================================================

#[test]
fn fence_on_flat_ground() {
    let mut fixture = Fixture::new();
    let action = wall(FENCE, 32, 32, 0, 0);

    let query = fixture.query(&action).expect("query should pass");
    assert_eq!(query.cost, FENCE_PRICE);
    assert_eq!(query.position, CoordsXYZ::new(48, 48, 0));
    assert_eq!(query.data.base_height, 0);
    assert_eq!(query.data.banner, None);

    let outcome = fixture.execute(&action).expect("execute should pass");
    assert_eq!(outcome.cost, FENCE_PRICE);
    assert_eq!(outcome.data.base_height, 0);
    assert_eq!(outcome.data.banner, None);

    let elements = fixture.elements(TileCoords::new(1, 1));
    assert_eq!(elements.len(), 2);
    let placed = &elements[1];
    assert_eq!(placed.base_height, 0);
    assert_eq!(placed.clearance_height, 4);
    let placed_wall = placed.as_wall().expect("second element is the wall");
    assert_eq!(placed_wall.direction, Direction::West);
    assert_eq!(placed_wall.entry, FENCE);
    assert_eq!(placed_wall.banner, None);
    assert!(!placed_wall.across_track);
}

#[test]
fn side_effects_are_recorded() {
    let mut fixture = Fixture::new();
    fixture
        .place(&wall(FENCE, 64, 96, 0, 3))
        .expect("placement should pass");

    let location = CoordsXYZ::new(64, 96, 0);
    assert!(
        fixture
            .state
            .world
            .animations
            .contains(MapAnimationKind::Wall, location)
    );
    let invalidated = fixture.state.world.invalidated();
    assert_eq!(invalidated.len(), 1);
    assert_eq!((invalidated[0].z_low, invalidated[0].z_high), (0, 72));
}

#[test]
fn query_leaves_the_park_untouched() {
    let fixture = Fixture::new();
    let before = fixture.state.clone();
    fixture
        .query(&wall(SIGN, 64, 64, 0, 1))
        .expect("query should pass");
    assert_eq!(fixture.state, before);
}

// ============================================================================
// Edges
// ============================================================================

#[test]
fn walls_on_different_edges_coexist() {
    let mut fixture = Fixture::new();
    fixture.place(&wall(FENCE, 64, 64, 0, 0)).expect("edge 0");
    fixture.place(&wall(FENCE, 64, 64, 0, 2)).expect("edge 2");
    fixture.place(&wall(FENCE, 64, 64, 0, 1)).expect("edge 1");
    assert_eq!(fixture.elements(TileCoords::new(2, 2)).len(), 4);
}

#[test]
fn same_edge_twice_has_no_clearance() {
    let mut fixture = Fixture::new();
    fixture.place(&wall(FENCE, 64, 64, 0, 0)).expect("first wall");

    let error = fixture
        .query(&wall(FENCE, 64, 64, 0, 0))
        .expect_err("edge is taken");
    assert_eq!(error.status(), ActionStatus::NoClearance);
    assert_eq!(error.detail().as_deref(), Some("Wooden fence in the way"));

    fixture
        .query(&wall(FENCE, 64, 64, 0, 1))
        .expect("neighbouring edge is free");
}

#[test]
fn stacked_walls_on_one_edge_do_not_overlap() {
    let mut fixture = Fixture::new();
    fixture.place(&wall(FENCE, 64, 64, 0, 0)).expect("ground wall");
    // The fence is four height units tall; the next one starts at its top.
    fixture
        .place(&wall(FENCE, 64, 64, 32, 0))
        .expect("wall above the first");
}

#[test]
fn edge_out_of_range_is_invalid() {
    let fixture = Fixture::new();
    let error = fixture
        .query(&wall(FENCE, 64, 64, 0, 4))
        .expect_err("edge 4 does not exist");
    assert_eq!(error, WallPlaceError::InvalidEdge(4));
    assert_eq!(error.status(), ActionStatus::InvalidParameters);
}

#[test]
fn border_tiles_are_off_the_map() {
    let fixture = Fixture::new();
    let error = fixture
        .query(&wall(FENCE, 0, 64, 0, 1))
        .expect_err("border ring is not buildable");
    assert_eq!(error.status(), ActionStatus::InvalidParameters);
    assert_eq!(error.detail().as_deref(), Some(messages::OFF_EDGE_OF_MAP));
}

// ============================================================================
// Terrain
// ============================================================================

#[test]
fn underwater_placement_is_disallowed() {
    let mut fixture = Fixture::new();
    let tile = TileCoords::new(3, 3);
    fixture.set_surface(
        tile,
        0,
        SurfaceElement::new(SurfaceSlope::FLAT).with_water(32),
    );

    let error = fixture
        .query(&wall(FENCE, 96, 96, 0, 0))
        .expect_err("target is below the water");
    assert_eq!(error.status(), ActionStatus::Disallowed);
    assert_eq!(error.title(), messages::CANT_BUILD_THIS_HERE);
    assert_eq!(
        error.detail().as_deref(),
        Some(messages::CANT_BUILD_THIS_UNDERWATER)
    );

    fixture
        .query(&wall(FENCE, 96, 96, 32, 0))
        .expect("at the water surface");

    fixture.ctx.disable_clearance_checks = true;
    fixture
        .query(&wall(FENCE, 96, 96, 0, 0))
        .expect("clearance cheat ignores water");
}

#[test]
fn explicit_height_below_ground_is_disallowed() {
    let mut fixture = Fixture::new();
    fixture.set_surface(
        TileCoords::new(3, 3),
        4,
        SurfaceElement::new(SurfaceSlope::FLAT),
    );
    let error = fixture
        .query(&wall(FENCE, 96, 96, 16, 0))
        .expect_err("ground is at 32");
    assert_eq!(
        error.detail().as_deref(),
        Some(messages::CAN_ONLY_BUILD_THIS_ABOVE_GROUND)
    );
}

#[test]
fn raised_corner_needs_a_level_of_clearance() {
    let mut fixture = Fixture::new();
    // Corner 2 raised: the west edge joins corners 2 and 3.
    fixture.set_surface(
        TileCoords::new(3, 3),
        0,
        SurfaceElement::new(SurfaceSlope::S_CORNER_UP),
    );
    let error = fixture
        .query(&wall(FENCE, 96, 96, 8, 0))
        .expect_err("flat wall would cut into the corner");
    assert_eq!(error.status(), ActionStatus::Disallowed);
    fixture
        .query(&wall(FENCE, 96, 96, 16, 0))
        .expect("one land level up clears the corner");
}

#[test]
fn walls_follow_sloped_terrain() {
    let mut fixture = Fixture::new();
    let tile = TileCoords::new(3, 3);
    fixture.set_surface(
        tile,
        2,
        SurfaceElement::new(SurfaceSlope::S_CORNER_UP | SurfaceSlope::W_CORNER_UP),
    );

    // West edge: both corners raised, wall is lifted one level and flat.
    let west = fixture
        .place(&wall(FENCE, 96, 96, 0, 0))
        .expect("elevated edge");
    assert_eq!(west.data.base_height, 32);

    // South edge rises from corner 1 to corner 2.
    let south = fixture
        .place(&wall(FENCE, 96, 96, 0, 3))
        .expect("sloped edge");
    assert_eq!(south.data.base_height, 16);

    let on_edge = |edge: Direction| {
        fixture
            .elements(tile)
            .iter()
            .find_map(|element| {
                element
                    .as_wall()
                    .filter(|wall| wall.direction == edge)
                    .map(|wall| (element, wall))
            })
            .expect("wall on edge")
    };
    let (west_element, west_wall) = on_edge(Direction::West);
    assert_eq!(west_element.base_height, 4);
    assert_eq!(west_wall.slope, WallSlope::Flat);
    let (south_element, south_wall) = on_edge(Direction::South);
    // Lower walls are stored first.
    assert_eq!(south_element.base_height, 2);
    assert_eq!(south_wall.slope, WallSlope::Upwards);
    // Sloped walls reserve an extra land level.
    assert_eq!(south_element.clearance_height, 2 + 2 + 4);
}

#[test]
fn slope_restricted_walls_stay_flat() {
    let mut fixture = Fixture::new();
    fixture.set_surface(
        TileCoords::new(3, 3),
        0,
        SurfaceElement::new(SurfaceSlope::S_CORNER_UP | SurfaceSlope::W_CORNER_UP),
    );
    let error = fixture
        .query(&wall(RAILING, 96, 96, 0, 3))
        .expect_err("railing cannot slope");
    assert_eq!(
        error.detail().as_deref(),
        Some(messages::UNABLE_TO_BUILD_THIS_ON_SLOPE)
    );
    fixture
        .query(&wall(RAILING, 96, 96, 0, 0))
        .expect("elevated edge is flat");
}

#[test]
fn query_and_execute_agree_on_height() {
    let mut fixture = Fixture::new();
    fixture.set_surface(
        TileCoords::new(5, 5),
        6,
        SurfaceElement::new(SurfaceSlope::N_CORNER_UP | SurfaceSlope::E_CORNER_UP),
    );
    for edge in 0..4 {
        let action = wall(FENCE, 160, 160, 0, edge);
        let plan = action
            .plan(&fixture.state, &fixture.content.env(), &fixture.ctx)
            .expect("plan");
        let outcome = fixture.place(&action).expect("placement");
        assert_eq!(outcome.data.base_height, plan.location.z);
    }
}

// ============================================================================
// Ownership and modes
// ============================================================================

#[test]
fn unowned_land_is_rejected() {
    let mut fixture = Fixture::new();
    fixture.set_surface(
        TileCoords::new(4, 4),
        0,
        SurfaceElement::new(SurfaceSlope::FLAT).with_ownership(LandOwnership::AVAILABLE),
    );
    let action = wall(FENCE, 128, 128, 0, 0);
    let error = fixture.query(&action).expect_err("land is for sale");
    assert_eq!(error.status(), ActionStatus::NotOwned);

    fixture.ctx.sandbox_mode = true;
    fixture.query(&action).expect("sandbox ignores ownership");
}

#[test]
fn construction_rights_cover_raised_walls() {
    let mut fixture = Fixture::new();
    fixture.set_surface(
        TileCoords::new(4, 4),
        0,
        SurfaceElement::new(SurfaceSlope::FLAT)
            .with_ownership(LandOwnership::CONSTRUCTION_RIGHTS_OWNED),
    );
    fixture
        .query(&wall(FENCE, 128, 128, 0, 0))
        .expect_err("ground level needs the land itself");
    fixture
        .query(&wall(FENCE, 128, 128, 32, 0))
        .expect("above the surface band");
}

#[test]
fn coordinates_off_the_map_are_not_owned() {
    let fixture = Fixture::new();
    let beyond = MAP_SIZE as i32 * 32;
    let error = fixture
        .query(&wall(FENCE, beyond, 64, 0, 0))
        .expect_err("outside the map");
    assert_eq!(error.status(), ActionStatus::NotOwned);
}

#[test]
fn path_scenery_skips_ownership_and_obstructions() {
    let mut fixture = Fixture::new();
    fixture.place(&wall(FENCE, 64, 64, 0, 0)).expect("first wall");
    fixture.set_surface(
        TileCoords::new(2, 2),
        0,
        SurfaceElement::new(SurfaceSlope::FLAT).with_ownership(LandOwnership::empty()),
    );
    fixture
        .place(&wall(FENCE, 64, 64, 0, 0).with_flags(ActionFlags::PATH_SCENERY))
        .expect("path additions bypass both checks");
}

// ============================================================================
// Obstructions
// ============================================================================

#[test]
fn ghost_elements_do_not_block() {
    let mut fixture = Fixture::new();
    fixture
        .place(&wall(FENCE, 64, 64, 0, 0).with_flags(ActionFlags::GHOST))
        .expect("ghost preview");
    let ghost = &fixture.elements(TileCoords::new(2, 2))[1];
    assert!(ghost.is_ghost);

    fixture
        .place(&wall(FENCE, 64, 64, 0, 0))
        .expect("real wall ignores the preview");
}

#[test]
fn entrances_block_every_edge() {
    let mut fixture = Fixture::new();
    fixture.insert(
        TileCoords::new(2, 2),
        TileElement::new(
            0,
            6,
            ElementKind::Entrance(EntranceElement {
                direction: Direction::North,
                ride: None,
            }),
        ),
    );
    let error = fixture
        .query(&wall(FENCE, 64, 64, 0, 2))
        .expect_err("entrance occupies the tile");
    assert_eq!(error.detail().as_deref(), Some("Park entrance in the way"));
}

// ============================================================================
// Track
// ============================================================================

#[test]
fn fences_cross_open_track_edges_only() {
    let mut fixture = Fixture::new();
    fixture.lay_station(TileCoords::new(4, 4), Direction::West, 0);

    fixture
        .place(&wall(FENCE, 128, 128, 0, 1))
        .expect("station side is open");
    let error = fixture
        .query(&wall(FENCE, 128, 128, 0, 2))
        .expect_err("track end is not open to fences");
    assert_eq!(error.status(), ActionStatus::NoClearance);
    assert_eq!(error.detail().as_deref(), Some("Ghost Train in the way"));
}

#[test]
fn door_at_the_track_boundary_is_across_track() {
    let mut fixture = Fixture::new();
    let tile = TileCoords::new(4, 4);
    fixture.lay_station(tile, Direction::West, 0);

    fixture
        .place(&wall(DOOR, 128, 128, 0, 2))
        .expect("door over the station entry");
    let door = fixture
        .elements(tile)
        .iter()
        .find_map(TileElement::as_wall)
        .expect("door placed");
    assert!(door.across_track);
}

#[test]
fn door_above_the_track_boundary_is_blocked() {
    let mut fixture = Fixture::new();
    fixture.lay_station(TileCoords::new(4, 4), Direction::West, 0);

    let error = fixture
        .query(&wall(DOOR, 128, 128, 16, 2))
        .expect_err("boundary is at ground level");
    assert_eq!(error.status(), ActionStatus::NoClearance);
}

// ============================================================================
// Banners
// ============================================================================

#[test]
fn signs_link_to_the_nearest_ride() {
    let mut fixture = Fixture::new();
    fixture.lay_station(TileCoords::new(4, 4), Direction::West, 0);

    let outcome = fixture
        .place(&wall(SIGN, 128, 160, 0, 0))
        .expect("sign next to the station");
    let id = outcome.data.banner.expect("sign allocates a banner");
    assert_eq!(id, BannerIndex(0));

    let banner = fixture.state.banners.get(id).expect("banner registered");
    assert!(banner.flags.contains(BannerFlags::IS_WALL | BannerFlags::LINKED_TO_RIDE));
    assert_eq!(banner.ride, Some(GHOST_TRAIN));
    assert_eq!(banner.position, TileCoords::new(4, 5));

    let sign = fixture
        .elements(TileCoords::new(4, 5))
        .iter()
        .find_map(TileElement::as_wall)
        .expect("sign placed");
    assert_eq!(sign.banner, Some(id));
}

#[test]
fn signs_prefer_a_ride_on_their_own_tile() {
    let mut fixture = Fixture::new();
    fixture.lay_ride_station(HAUNTED_HOUSE, TileCoords::new(4, 5), Direction::West, 0);
    fixture.lay_station(TileCoords::new(5, 4), Direction::West, 0);

    let outcome = fixture
        .place(&wall(SIGN, 128, 160, 0, 1))
        .expect("sign beside the haunted house");
    let id = outcome.data.banner.expect("sign allocates a banner");
    let banner = fixture.state.banners.get(id).expect("banner registered");
    assert_eq!(banner.ride, Some(HAUNTED_HOUSE));
}

#[test]
fn signs_prefer_orthogonal_neighbours_over_diagonals() {
    let mut fixture = Fixture::new();
    fixture.lay_ride_station(HAUNTED_HOUSE, TileCoords::new(4, 4), Direction::West, 0);
    fixture.lay_station(TileCoords::new(5, 6), Direction::West, 0);

    let outcome = fixture
        .place(&wall(SIGN, 128, 160, 0, 0))
        .expect("sign between two rides");
    let id = outcome.data.banner.expect("sign allocates a banner");
    assert_eq!(fixture.state.banners.get(id).and_then(|b| b.ride), Some(HAUNTED_HOUSE));
}

#[test]
fn exhausted_banners_reject_signs() {
    let mut fixture = Fixture::with_config(ParkConfig {
        max_banners: 0,
        ..ParkConfig::with_map_size(MAP_SIZE)
    });
    let action = wall(SIGN, 64, 64, 0, 0);

    let error = fixture.query(&action).expect_err("no banner left");
    assert_eq!(error.status(), ActionStatus::InvalidParameters);
    assert_eq!(
        error.detail().as_deref(),
        Some(messages::TOO_MANY_BANNERS_IN_GAME)
    );

    let error = fixture.execute(&action).expect_err("allocation fails");
    assert_eq!(error, WallPlaceError::BannerLimitReached);
    assert!(fixture.state.banners.is_empty());
    assert_eq!(fixture.elements(TileCoords::new(2, 2)).len(), 1);

    fixture
        .place(&wall(FENCE, 64, 64, 0, 0))
        .expect("plain walls need no banner");
}

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn full_map_has_no_free_elements() {
    let surfaces = (MAP_SIZE * MAP_SIZE) as usize;
    let mut fixture = Fixture::with_config(ParkConfig {
        max_tile_elements: surfaces,
        ..ParkConfig::with_map_size(MAP_SIZE)
    });

    let error = fixture
        .query(&wall(FENCE, 64, 64, 0, 0))
        .expect_err("element budget used up");
    assert_eq!(error.status(), ActionStatus::NoFreeElements);
    assert_eq!(
        error.detail().as_deref(),
        Some(messages::TILE_ELEMENT_LIMIT_REACHED)
    );

    // Execute skips the capacity pre-check and fails on insertion instead,
    // handing the sign's banner back.
    let error = fixture
        .execute(&wall(SIGN, 64, 64, 0, 0))
        .expect_err("insertion fails");
    assert_eq!(error.status(), ActionStatus::NoFreeElements);
    assert_eq!(error.title(), messages::CANT_POSITION_THIS_HERE);
    assert!(fixture.state.banners.is_empty());
}
