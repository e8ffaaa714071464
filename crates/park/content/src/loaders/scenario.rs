//! Scenario loader.
//!
//! A scenario describes the terrain and the elements already standing on it.
//! Every tile starts with the default surface; listed tiles override it and
//! stack extra elements on top.

use std::path::Path;

use park_core::state::{ElementKind, LandOwnership, SurfaceElement, SurfaceSlope, TileCoords};
use park_core::{ParkConfig, ParkState, TileElement};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Scenario structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ScenarioRon {
    default_surface: SurfaceSpec,
    tiles: Vec<TileSpec>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
struct SurfaceSpec {
    base_height: u8,
    slope: SurfaceSlope,
    water_height: i32,
    ownership: LandOwnership,
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self {
            base_height: 0,
            slope: SurfaceSlope::FLAT,
            water_height: 0,
            ownership: LandOwnership::OWNED,
        }
    }
}

impl SurfaceSpec {
    fn element(&self) -> SurfaceElement {
        SurfaceElement::new(self.slope)
            .with_water(self.water_height)
            .with_ownership(self.ownership)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TileSpec {
    x: i32,
    y: i32,
    #[serde(default)]
    surface: Option<SurfaceSpec>,
    #[serde(default)]
    elements: Vec<ElementSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ElementSpec {
    base_height: u8,
    clearance_height: u8,
    #[serde(default)]
    ghost: bool,
    #[serde(default = "all_quadrants")]
    quadrants: u8,
    kind: ElementKind,
}

fn all_quadrants() -> u8 {
    0b1111
}

/// Loader for scenario tile maps from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file into a park sized by `config`.
    pub fn load(path: &Path, config: &ParkConfig) -> LoadResult<ParkState> {
        let content = read_file(path)?;
        Self::parse(&content, config)
    }

    pub fn parse(content: &str, config: &ParkConfig) -> LoadResult<ParkState> {
        let scenario: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let mut state = ParkState::from_config(config);
        let tiles = state.tiles_mut();

        // Fill entire map with the default surface first
        let size = config.map_size as i32;
        for y in 0..size {
            for x in 0..size {
                let surface = scenario.default_surface;
                tiles
                    .set_surface(TileCoords::new(x, y), surface.base_height, surface.element())
                    .map_err(|e| anyhow::anyhow!("Failed to lay terrain: {}", e))?;
            }
        }

        // Then override with explicitly defined tiles
        for spec in scenario.tiles {
            let tile = TileCoords::new(spec.x, spec.y);
            if !tiles.contains_tile(tile) {
                anyhow::bail!("tile {} lies outside a {}x{} map", tile, size, size);
            }
            if let Some(surface) = spec.surface {
                tiles
                    .set_surface(tile, surface.base_height, surface.element())
                    .map_err(|e| anyhow::anyhow!("Failed to set surface at {}: {}", tile, e))?;
            }
            for element in spec.elements {
                if matches!(element.kind, ElementKind::Surface(_)) {
                    anyhow::bail!("tile {} lists a surface among its elements", tile);
                }
                if element.clearance_height < element.base_height {
                    anyhow::bail!(
                        "element at {} has clearance {} below its base {}",
                        tile,
                        element.clearance_height,
                        element.base_height
                    );
                }
                let mut placed =
                    TileElement::new(element.base_height, element.clearance_height, element.kind)
                        .with_quadrants(element.quadrants);
                placed.is_ghost = element.ghost;
                tiles
                    .insert(tile, placed)
                    .map_err(|e| anyhow::anyhow!("Failed to place element at {}: {}", tile, e))?;
            }
        }

        Ok(state)
    }
}
