//! Data-driven park content and loaders.
//!
//! This crate reads the files a park is built from:
//! - Object catalogs (walls, scenery, ride types, track pieces, rides) from RON
//! - Scenario tile maps from RON
//! - Park settings and validation modes from TOML
//!
//! Catalogs become a [`park_core::ContentSnapshot`] that serves every oracle;
//! scenarios become the initial [`park_core::ParkState`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ContentFactory, LoadResult, ParkSettings, ScenarioLoader, SettingsLoader,
};
