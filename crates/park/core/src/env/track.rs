use bitflags::bitflags;

use crate::state::{Direction, RideType, TrackType};

/// Ride type and track piece metadata.
pub trait TrackOracle: Send + Sync {
    fn ride_type(&self, ride_type: RideType) -> Option<RideTypeDescriptor>;

    fn track_element(&self, track_type: TrackType) -> Option<TrackElementDescriptor>;
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct RideTypeFlags: u32 {
        /// No wall may cross this ride's track, whatever the piece allows.
        const TRACK_NO_WALLS       = 1 << 0;
        /// Doors may be mounted across the ends of flat track pieces.
        const ALLOW_DOORS_ON_TRACK = 1 << 1;
        const IS_SHOP              = 1 << 2;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TrackSequenceFlags: u8 {
        const DISALLOW_DOORS = 1 << 0;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideTypeDescriptor {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: RideTypeFlags,
}

impl RideTypeDescriptor {
    pub fn has_flag(&self, flag: RideTypeFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_shop(&self) -> bool {
        self.has_flag(RideTypeFlags::IS_SHOP)
    }
}

/// Banking at one end of a track piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TrackBank {
    #[default]
    None,
    Left,
    Right,
    UpsideDown,
}

/// Where a track piece begins or ends relative to its first tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackEndpoint {
    /// Quarter turns relative to the piece's direction.
    pub rotation: u8,
    /// The endpoint leaves the tile at 45 degrees.
    pub diagonal: bool,
    /// Height of the endpoint in world units.
    pub z: i16,
    pub bank: TrackBank,
}

impl TrackEndpoint {
    /// True when the endpoint is an unbanked orthogonal connection.
    pub fn is_plain(&self) -> bool {
        self.bank == TrackBank::None && !self.diagonal
    }
}

/// One tile of a track piece's footprint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackBlock {
    pub x: i16,
    pub y: i16,
    /// Height of the block relative to the piece origin, in world units.
    pub z: i16,
}

/// Per-piece wall and door rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackElementDescriptor {
    pub blocks: Vec<TrackBlock>,
    /// Per sequence, a mask of relative edges walls may cross.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_wall_edges: Vec<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sequence_flags: Vec<TrackSequenceFlags>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub begin: TrackEndpoint,
    #[cfg_attr(feature = "serde", serde(default))]
    pub end: TrackEndpoint,
}

impl TrackElementDescriptor {
    pub fn allows_wall_edge(&self, sequence: u8, relative_edge: Direction) -> bool {
        self.allowed_wall_edges
            .get(usize::from(sequence))
            .is_some_and(|mask| mask & relative_edge.bit() != 0)
    }

    pub fn sequence_flags(&self, sequence: u8) -> TrackSequenceFlags {
        self.sequence_flags
            .get(usize::from(sequence))
            .copied()
            .unwrap_or_default()
    }

    pub fn block(&self, sequence: u8) -> Option<&TrackBlock> {
        self.blocks.get(usize::from(sequence))
    }

    pub fn is_last_block(&self, sequence: u8) -> bool {
        usize::from(sequence) + 1 == self.blocks.len()
    }
}
