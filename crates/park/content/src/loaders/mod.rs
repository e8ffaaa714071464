//! Content loaders for reading park data from files.
//!
//! Each loader turns one RON/TOML file into park-core types.

pub mod catalog;
pub mod factory;
pub mod scenario;
pub mod settings;

pub use catalog::CatalogLoader;
pub use factory::ContentFactory;
pub use scenario::ScenarioLoader;
pub use settings::{ParkSettings, SettingsLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
