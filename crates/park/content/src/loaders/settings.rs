//! Park settings loader.

use std::path::Path;

use park_core::{ParkConfig, ValidationContext};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Contents of `settings.toml`.
///
/// ```toml
/// [park]
/// map_size = 64
/// max_banners = 250
///
/// [validation]
/// sandbox_mode = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkSettings {
    pub park: ParkConfig,
    pub validation: ValidationContext,
}

/// Loader for park settings from TOML files.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a TOML file. Missing tables fall back to defaults.
    pub fn load(path: &Path) -> LoadResult<ParkSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ParkSettings> {
        let settings: ParkSettings = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        if settings.park.map_size < 3 {
            anyhow::bail!(
                "map_size must leave room inside the border, got {}",
                settings.park.map_size
            );
        }
        Ok(settings)
    }
}
