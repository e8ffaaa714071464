/// Park configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParkConfig {
    /// Map edge length in tiles, including the one-tile border on each side.
    pub map_size: u32,
    /// Number of banners that may exist at once.
    pub max_banners: usize,
    /// Number of tile elements the whole map may hold.
    pub max_tile_elements: usize,
}

impl ParkConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of elements stacked on a single tile.
    pub const MAX_ELEMENTS_PER_TILE: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAP_SIZE: u32 = 150;
    pub const DEFAULT_MAX_BANNERS: usize = 250;
    pub const DEFAULT_MAX_TILE_ELEMENTS: usize = 196_096;

    pub fn new() -> Self {
        Self {
            map_size: Self::DEFAULT_MAP_SIZE,
            max_banners: Self::DEFAULT_MAX_BANNERS,
            max_tile_elements: Self::DEFAULT_MAX_TILE_ELEMENTS,
        }
    }

    pub fn with_map_size(map_size: u32) -> Self {
        Self {
            map_size,
            ..Self::new()
        }
    }
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Mode switches consulted while validating a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationContext {
    /// Scenario editor is active; ownership does not apply.
    pub editor_mode: bool,
    /// Sandbox cheat: ownership does not apply.
    pub sandbox_mode: bool,
    /// Cheat: skip water, ground and obstruction checks.
    pub disable_clearance_checks: bool,
    /// Command comes from drawing a track design preview; coordinates may
    /// lie outside the playable area.
    pub track_design_preview: bool,
}

impl ValidationContext {
    /// Context for regular play with every rule enforced.
    pub const fn standard() -> Self {
        Self {
            editor_mode: false,
            sandbox_mode: false,
            disable_clearance_checks: false,
            track_design_preview: false,
        }
    }

    /// Returns true if ownership rules are bypassed by the current mode.
    pub const fn bypasses_ownership(&self) -> bool {
        self.editor_mode || self.sandbox_mode
    }
}
