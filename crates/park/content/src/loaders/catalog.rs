//! Object catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use park_core::env::{
    LargeSceneryEntry, RideInfo, RideTypeDescriptor, ScrollingMode, SmallSceneryEntry,
    TrackElementDescriptor, WallSceneryEntry, WallSceneryFlags,
};
use park_core::state::{CoordsXY, RideId, RideType, TrackType};
use park_core::{ContentSnapshot, Money, ObjectEntryIndex};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct CatalogRon {
    walls: Vec<WallRecord>,
    small_scenery: Vec<Keyed<u16, SmallSceneryEntry>>,
    large_scenery: Vec<Keyed<u16, LargeSceneryEntry>>,
    ride_types: Vec<Keyed<u8, RideTypeDescriptor>>,
    track_elements: Vec<Keyed<u16, TrackElementDescriptor>>,
    rides: Vec<RideRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Keyed<K, T> {
    id: K,
    entry: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WallRecord {
    id: u16,
    name: String,
    /// Price in tenths of the currency unit.
    price: i64,
    /// Height in height units.
    height: u8,
    #[serde(default)]
    flags: WallSceneryFlags,
    #[serde(default)]
    scrolling_mode: ScrollingMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RideRecord {
    id: u16,
    name: String,
    ride_type: u8,
    #[serde(default)]
    overall_view: Option<(i32, i32)>,
}

/// Loader for object catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    ///
    /// # Returns
    ///
    /// Returns a [`ContentSnapshot`] serving every oracle.
    pub fn load(path: &Path) -> LoadResult<ContentSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ContentSnapshot> {
        let catalog: CatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let mut snapshot = ContentSnapshot::new();
        for record in catalog.walls {
            let entry = WallSceneryEntry::new(record.name, Money(record.price), record.height)
                .with_flags(record.flags)
                .with_scrolling_mode(record.scrolling_mode);
            insert_unique(&mut snapshot.walls, ObjectEntryIndex(record.id), entry, "wall")?;
        }
        for Keyed { id, entry } in catalog.small_scenery {
            insert_unique(
                &mut snapshot.small_scenery,
                ObjectEntryIndex(id),
                entry,
                "small scenery",
            )?;
        }
        for Keyed { id, entry } in catalog.large_scenery {
            if entry.tiles.is_empty() {
                anyhow::bail!("large scenery {} has no tiles", id);
            }
            insert_unique(
                &mut snapshot.large_scenery,
                ObjectEntryIndex(id),
                entry,
                "large scenery",
            )?;
        }
        for Keyed { id, entry } in catalog.ride_types {
            insert_unique(&mut snapshot.ride_types, RideType(id), entry, "ride type")?;
        }
        for Keyed { id, entry } in catalog.track_elements {
            if entry.blocks.is_empty() {
                anyhow::bail!("track element {} has no blocks", id);
            }
            insert_unique(&mut snapshot.track_elements, TrackType(id), entry, "track element")?;
        }
        for record in catalog.rides {
            let ride_type = RideType(record.ride_type);
            if !snapshot.ride_types.contains_key(&ride_type) {
                anyhow::bail!(
                    "ride {} uses unknown ride type {}",
                    record.id,
                    record.ride_type
                );
            }
            let mut ride = RideInfo::new(RideId(record.id), record.name, ride_type);
            if let Some((x, y)) = record.overall_view {
                ride = ride.with_overall_view(CoordsXY::new(x, y));
            }
            insert_unique(&mut snapshot.rides, ride.id, ride, "ride")?;
        }

        Ok(snapshot)
    }
}

fn insert_unique<K, V>(map: &mut BTreeMap<K, V>, key: K, value: V, what: &str) -> LoadResult<()>
where
    K: Ord + std::fmt::Display,
{
    if map.contains_key(&key) {
        anyhow::bail!("duplicate {} id {}", what, key);
    }
    map.insert(key, value);
    Ok(())
}
