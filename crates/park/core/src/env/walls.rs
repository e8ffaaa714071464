use bitflags::bitflags;

use crate::state::{Money, ObjectEntryIndex};

/// Catalog of loaded wall scenery objects.
pub trait WallOracle: Send + Sync {
    fn wall_entry(&self, id: ObjectEntryIndex) -> Option<WallSceneryEntry>;
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct WallSceneryFlags: u8 {
        const HAS_PRIMARY_COLOUR   = 1 << 0;
        const HAS_SECONDARY_COLOUR = 1 << 1;
        const CANT_BUILD_ON_SLOPE  = 1 << 2;
        const IS_DOOR              = 1 << 3;
        const HAS_TERTIARY_COLOUR  = 1 << 4;
    }
}

/// How a wall displays text, if at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ScrollingMode {
    #[default]
    None,
    /// Scrolling sign backed by a banner.
    Banner,
}

/// Static definition of a wall, fence or door object.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSceneryEntry {
    pub name: String,
    pub price: Money,
    /// Height of the wall in height units.
    pub height: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: WallSceneryFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scrolling_mode: ScrollingMode,
}

impl WallSceneryEntry {
    pub fn new(name: impl Into<String>, price: Money, height: u8) -> Self {
        Self {
            name: name.into(),
            price,
            height,
            flags: WallSceneryFlags::empty(),
            scrolling_mode: ScrollingMode::None,
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: WallSceneryFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_scrolling_mode(mut self, scrolling_mode: ScrollingMode) -> Self {
        self.scrolling_mode = scrolling_mode;
        self
    }

    pub fn is_door(&self) -> bool {
        self.flags.contains(WallSceneryFlags::IS_DOOR)
    }

    /// True when placing this wall allocates a banner for its sign.
    pub fn needs_banner(&self) -> bool {
        self.scrolling_mode == ScrollingMode::Banner
    }
}
