//! Whether a wall may cross a specific edge of a track piece.

use crate::env::{
    OracleError, ParkEnv, RideTypeDescriptor, RideTypeFlags, TrackElementDescriptor,
    TrackSequenceFlags, WallSceneryEntry,
};
use crate::state::{COORDS_Z_STEP, Direction, TileElement, TrackElement};

/// Outcome of checking a wall against one track element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TrackEdgeVerdict {
    /// The piece leaves this edge open for walls.
    Allowed,
    /// A door may sit across the end of the piece.
    AllowedAcrossTrack,
    Blocked,
}

impl TrackEdgeVerdict {
    pub fn is_blocked(self) -> bool {
        matches!(self, TrackEdgeVerdict::Blocked)
    }
}

/// Checks a wall with base `z0` (height units) on `edge` against the track
/// piece stored in `element`.
pub fn check_track_edge(
    env: &ParkEnv<'_>,
    wall: &WallSceneryEntry,
    edge: Direction,
    z0: u8,
    element: &TileElement,
    track: &TrackElement,
) -> Result<TrackEdgeVerdict, OracleError> {
    let Some(ride) = env.rides()?.ride(track.ride) else {
        return Ok(TrackEdgeVerdict::Blocked);
    };
    let ride_type = env.track()?.ride_type(ride.ride_type).unwrap_or_default();
    let descriptor = env.track()?.track_element(track.track_type);
    let relative = edge.relative_to(track.direction);

    if is_allowed_wall_edge(&ride_type, descriptor.as_ref(), track.sequence, relative) {
        return Ok(TrackEdgeVerdict::Allowed);
    }

    if !wall.is_door() || !ride_type.has_flag(RideTypeFlags::ALLOW_DOORS_ON_TRACK) {
        return Ok(TrackEdgeVerdict::Blocked);
    }
    let Some(descriptor) = descriptor else {
        return Ok(TrackEdgeVerdict::Blocked);
    };
    Ok(check_door(&descriptor, edge, z0, element, track))
}

fn is_allowed_wall_edge(
    ride_type: &RideTypeDescriptor,
    descriptor: Option<&TrackElementDescriptor>,
    sequence: u8,
    relative: Direction,
) -> bool {
    !ride_type.has_flag(RideTypeFlags::TRACK_NO_WALLS)
        && descriptor.is_some_and(|descriptor| descriptor.allows_wall_edge(sequence, relative))
}

/// Doors only fit across a plain piece boundary at exactly the boundary height.
fn check_door(
    descriptor: &TrackElementDescriptor,
    edge: Direction,
    z0: u8,
    element: &TileElement,
    track: &TrackElement,
) -> TrackEdgeVerdict {
    // Doors sit on whole land levels.
    if z0 & 1 != 0 {
        return TrackEdgeVerdict::Blocked;
    }
    let Some(block) = descriptor.block(track.sequence) else {
        return TrackEdgeVerdict::Blocked;
    };
    let wall_z = i32::from(z0) * COORDS_Z_STEP;
    // Endpoint and block heights are world units, compared without scaling.
    let boundary_z =
        |endpoint_z: i16| element.base_z() + (i32::from(endpoint_z) - i32::from(block.z));

    if track.sequence == 0 {
        if descriptor
            .sequence_flags(0)
            .contains(TrackSequenceFlags::DISALLOW_DOORS)
        {
            return TrackEdgeVerdict::Blocked;
        }
        if descriptor.begin.is_plain()
            && edge == track.direction.reverse()
            && boundary_z(descriptor.begin.z) == wall_z
        {
            return TrackEdgeVerdict::AllowedAcrossTrack;
        }
    }

    if !descriptor.is_last_block(track.sequence) || !descriptor.end.is_plain() {
        return TrackEdgeVerdict::Blocked;
    }
    if track.direction.rotate(descriptor.end.rotation) != edge {
        return TrackEdgeVerdict::Blocked;
    }
    if boundary_z(descriptor.end.z) == wall_z {
        TrackEdgeVerdict::AllowedAcrossTrack
    } else {
        TrackEdgeVerdict::Blocked
    }
}
