//! Scans a tile's element stack for anything occupying a wall's space.

use crate::env::{ParkEnv, WallSceneryEntry};
use crate::state::{Direction, ElementKind, RideId, TileCoords, TileElement, TileMap};

use super::track::{TrackEdgeVerdict, check_track_edge};
use super::{Obstruction, WallPlaceError};

/// Result of a clear scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// The wall crosses a track piece boundary as a door.
    pub across_track: bool,
}

/// Checks `[z0, z1)` (height units) on `edge` of `tile` for obstructions.
///
/// Elements are visited in storage order and the first conflict is reported.
pub fn scan(
    tiles: &TileMap,
    env: &ParkEnv<'_>,
    wall: &WallSceneryEntry,
    tile: TileCoords,
    edge: Direction,
    z0: u8,
    z1: u8,
) -> Result<ScanOutcome, WallPlaceError> {
    if tiles.is_at_edge(tile.to_coords()) {
        return Err(WallPlaceError::OffEdgeOfMap(tile));
    }

    let mut outcome = ScanOutcome::default();
    for element in tiles.elements_at(tile) {
        if element.as_surface().is_some() || element.is_ghost || !element.overlaps(z0, z1) {
            continue;
        }
        if let ElementKind::Wall(existing) = &element.kind {
            if existing.direction == edge {
                return Err(obstructed(env, element));
            }
            continue;
        }
        if element.occupied_quadrants == 0 {
            continue;
        }

        let blocked = match &element.kind {
            ElementKind::Entrance(_) => true,
            ElementKind::Path(path) => path.connects(edge),
            ElementKind::LargeScenery(scenery) => {
                // Without an entry the object is assumed not to be in the way.
                env.scenery()?
                    .large_scenery(scenery.entry)
                    .and_then(|entry| entry.tile(scenery.sequence).copied())
                    .is_some_and(|part| !part.allows_wall(edge.relative_to(scenery.direction)))
            }
            ElementKind::SmallScenery(scenery) => env
                .scenery()?
                .small_scenery(scenery.entry)
                .is_some_and(|entry| entry.blocks_walls()),
            ElementKind::Track(track) => {
                match check_track_edge(env, wall, edge, z0, element, track)? {
                    TrackEdgeVerdict::Allowed => false,
                    TrackEdgeVerdict::AllowedAcrossTrack => {
                        outcome.across_track = true;
                        false
                    }
                    TrackEdgeVerdict::Blocked => true,
                }
            }
            ElementKind::Surface(_) | ElementKind::Wall(_) => false,
        };
        if blocked {
            return Err(obstructed(env, element));
        }
    }
    Ok(outcome)
}

fn obstructed(env: &ParkEnv<'_>, element: &TileElement) -> WallPlaceError {
    let obstruction = describe(env, element);
    tracing::debug!(kind = element.kind.element_type().as_ref(), "{obstruction}");
    WallPlaceError::Obstructed(obstruction)
}

/// Names the blocking element the way the player knows it.
fn describe(env: &ParkEnv<'_>, element: &TileElement) -> Obstruction {
    let kind = element.kind.element_type();
    let ride_name = |ride: RideId| {
        env.rides()
            .ok()
            .and_then(|rides| rides.ride(ride))
            .map(|info| info.name)
    };
    let name = match &element.kind {
        ElementKind::Wall(wall) => env
            .walls()
            .ok()
            .and_then(|walls| walls.wall_entry(wall.entry))
            .map(|entry| entry.name),
        ElementKind::Path(_) => Some("Footpath".to_owned()),
        ElementKind::Entrance(entrance) => match entrance.ride {
            Some(ride) => ride_name(ride),
            None => Some("Park entrance".to_owned()),
        },
        ElementKind::SmallScenery(scenery) => env
            .scenery()
            .ok()
            .and_then(|catalog| catalog.small_scenery(scenery.entry))
            .map(|entry| entry.name),
        ElementKind::LargeScenery(scenery) => env
            .scenery()
            .ok()
            .and_then(|catalog| catalog.large_scenery(scenery.entry))
            .map(|entry| entry.name),
        ElementKind::Track(track) => ride_name(track.ride),
        ElementKind::Surface(_) => Some("Land".to_owned()),
    };
    let fallback = match &element.kind {
        ElementKind::Wall(_) => "Wall",
        ElementKind::SmallScenery(_) | ElementKind::LargeScenery(_) => "Scenery",
        _ => "Ride or attraction",
    };
    Obstruction::new(kind, name.unwrap_or_else(|| fallback.to_owned()))
}
