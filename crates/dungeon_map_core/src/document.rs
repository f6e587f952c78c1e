//! Persisted map documents
//!
//! A `MapDocument` is the load/save payload exchanged with storage adapters:
//! the tile grid as nested rows plus theme and tile size, with an
//! adapter-added timestamp. Loading validates the document structurally
//! before any grid is built, so a malformed payload never replaces a live
//! map.

use crate::{MapError, Tile, TileGrid, TileKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A self-contained saved map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Tile rows, top to bottom; must be rectangular
    pub map: Vec<Vec<Tile>>,
    pub theme: String,
    pub tile_size: u32,
    /// Set by the persistence adapter at save time; opaque here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl MapDocument {
    /// Snapshot a live grid into the persisted form
    pub fn from_grid(grid: &TileGrid) -> Self {
        let mut map: Vec<Vec<Tile>> =
            vec![Vec::with_capacity(grid.width() as usize); grid.height() as usize];
        for (_, y, tile) in grid.iter() {
            map[y as usize].push(tile.clone());
        }
        Self {
            id: grid.id,
            map,
            theme: grid.theme.clone(),
            tile_size: grid.tile_size,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Validate the document and build a grid from it
    ///
    /// Rejects with `InvalidDocument` when the tile rows are empty or
    /// ragged, or when a blocked cell's back-reference does not resolve to
    /// an asset anchor whose footprint covers that cell.
    pub fn into_grid(self) -> Result<TileGrid, MapError> {
        let height = self.map.len() as u32;
        let width = self.map.first().map(|row| row.len() as u32).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MapError::InvalidDocument(
                "map has no tiles".to_string(),
            ));
        }
        for (y, row) in self.map.iter().enumerate() {
            if row.len() as u32 != width {
                return Err(MapError::InvalidDocument(format!(
                    "row {y} has {} tiles, expected {width}",
                    row.len()
                )));
            }
        }
        validate_blocked_references(&self.map, width, height)?;

        let mut grid = TileGrid::new(width, height, self.tile_size, self.theme)?;
        grid.id = self.id;
        for (y, row) in self.map.into_iter().enumerate() {
            for (x, tile) in row.into_iter().enumerate() {
                grid.set(x as u32, y as u32, tile)?;
            }
        }
        Ok(grid)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, MapError> {
        serde_json::from_str(json)
            .map_err(|e| MapError::InvalidDocument(format!("not a map document: {e}")))
    }
}

fn validate_blocked_references(
    map: &[Vec<Tile>],
    width: u32,
    height: u32,
) -> Result<(), MapError> {
    for (y, row) in map.iter().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            if tile.kind != TileKind::Blocked {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            let Some((ax, ay)) = tile.blocked_by else {
                return Err(MapError::InvalidDocument(format!(
                    "blocked tile ({x}, {y}) has no anchor reference"
                )));
            };
            if ax >= width || ay >= height {
                return Err(MapError::InvalidDocument(format!(
                    "blocked tile ({x}, {y}) references out-of-bounds anchor ({ax}, {ay})"
                )));
            }
            let anchor = &map[ay as usize][ax as usize];
            let covers = anchor.kind == TileKind::Asset
                && anchor.footprint.map_or(false, |f| {
                    x >= ax && y >= ay && x < ax + f.width && y < ay + f.height
                });
            if !covers {
                return Err(MapError::InvalidDocument(format!(
                    "blocked tile ({x}, {y}) references ({ax}, {ay}), \
                     which is not an anchor covering it"
                )));
            }
        }
    }
    Ok(())
}

/// Named saved maps, the shape kept under the browser-storage key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedMapStore {
    maps: HashMap<String, MapDocument>,
}

impl SavedMapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a named save
    pub fn insert(&mut self, name: impl Into<String>, document: MapDocument) {
        self.maps.insert(name.into(), document);
    }

    pub fn get(&self, name: &str) -> Option<&MapDocument> {
        self.maps.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<MapDocument> {
        self.maps.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }
}

/// Download-file stem for a user-entered map name: lowercase, with every
/// non-alphanumeric run replaced character-for-character by underscores
pub fn sanitize_map_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Footprint, Rotation};

    fn grid_with_asset() -> TileGrid {
        let mut grid = TileGrid::new(4, 3, 32, "Classic Dungeon".to_string()).unwrap();
        {
            let anchor = grid.get_mut(1, 1).unwrap();
            anchor.kind = TileKind::Asset;
            anchor.asset = Some("TableLong2x1".to_string());
            anchor.rotation = Rotation::R0;
            anchor.native_size = Some(Footprint::new(2, 1));
            anchor.footprint = Some(Footprint::new(2, 1));
        }
        {
            let blocked = grid.get_mut(2, 1).unwrap();
            blocked.kind = TileKind::Blocked;
            blocked.blocked_by = Some((1, 1));
        }
        grid
    }

    #[test]
    fn document_round_trips_through_json() {
        let grid = grid_with_asset();
        let doc = MapDocument::from_grid(&grid).with_timestamp("2025-06-01T12:00:00Z");
        let json = doc.to_json().unwrap();
        let restored = MapDocument::from_json(&json).unwrap().into_grid().unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn ragged_map_is_rejected() {
        let mut doc = MapDocument::from_grid(&grid_with_asset());
        doc.map[2].pop();
        let err = doc.into_grid().unwrap_err();
        assert!(matches!(err, MapError::InvalidDocument(_)));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn empty_map_is_rejected() {
        let doc = MapDocument {
            id: Uuid::new_v4(),
            map: Vec::new(),
            theme: String::new(),
            tile_size: 32,
            timestamp: None,
        };
        assert!(matches!(
            doc.into_grid(),
            Err(MapError::InvalidDocument(_))
        ));
    }

    #[test]
    fn dangling_blocked_reference_is_rejected() {
        let mut doc = MapDocument::from_grid(&grid_with_asset());
        doc.map[1][2].blocked_by = Some((9, 9));
        assert!(matches!(
            doc.into_grid(),
            Err(MapError::InvalidDocument(_))
        ));
    }

    #[test]
    fn blocked_reference_outside_anchor_footprint_is_rejected() {
        let mut doc = MapDocument::from_grid(&grid_with_asset());
        // Points at an empty tile rather than the anchor
        doc.map[1][2].blocked_by = Some((0, 0));
        assert!(matches!(
            doc.into_grid(),
            Err(MapError::InvalidDocument(_))
        ));
    }

    #[test]
    fn not_json_is_rejected() {
        assert!(matches!(
            MapDocument::from_json("not a document"),
            Err(MapError::InvalidDocument(_))
        ));
    }

    #[test]
    fn store_keeps_named_saves() {
        let mut store = SavedMapStore::new();
        assert!(store.is_empty());
        let doc = MapDocument::from_grid(&grid_with_asset());
        store.insert("Dungeon Map", doc.clone());
        store.insert("Dungeon Map", doc.clone());
        assert_eq!(store.names().count(), 1);
        assert_eq!(store.get("Dungeon Map"), Some(&doc));
        assert!(store.remove("Dungeon Map").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn sanitize_map_name_matches_download_rules() {
        assert_eq!(sanitize_map_name("Dungeon Map"), "dungeon_map");
        assert_eq!(sanitize_map_name("Crypt #2 (v1)"), "crypt__2__v1_");
    }
}
