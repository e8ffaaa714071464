//! Content factory for building a park from data files.

use std::path::{Path, PathBuf};

use park_core::{ContentSnapshot, ParkConfig, ParkState};

use crate::loaders::{CatalogLoader, LoadResult, ParkSettings, ScenarioLoader, SettingsLoader};

/// Content factory that loads all park content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── settings.toml
/// ├── catalog.ron
/// └── scenarios/
///     ├── meadow.ron
///     └── harbour.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load park settings from `settings.toml`, or defaults when it is absent.
    pub fn load_settings(&self) -> LoadResult<ParkSettings> {
        let path = self.data_dir.join("settings.toml");
        if !path.exists() {
            return Ok(ParkSettings::default());
        }
        SettingsLoader::load(&path)
    }

    /// Load the object catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<ContentSnapshot> {
        let path = self.data_dir.join("catalog.ron");
        CatalogLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the scenario file (without `.ron` extension)
    /// * `config` - Map size and limits the park is created with
    pub fn load_scenario(&self, name: &str, config: &ParkConfig) -> LoadResult<ParkState> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path, config)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
