//! Renderer-facing read model
//!
//! Flattens the grid into per-tile draw data so a renderer never reaches
//! back into engine internals. Blocked cells are omitted: their pixels
//! belong to the multi-tile asset drawn from its anchor. Image loading is
//! the renderer's own side channel and never gates grid mutation.

use dungeon_map_core::{
    theme_color, AssetCatalog, EdgeSet, Footprint, Rotation, TileGrid, TileKind,
};

/// What to draw for one tile
#[derive(Debug, Clone, PartialEq)]
pub enum TileContent {
    Empty,
    Fill {
        /// Theme color as a hex string
        color: &'static str,
    },
    Asset {
        /// Image path from the catalog
        path: String,
        /// Unrotated size in tiles; the renderer applies the rotation
        native_size: Footprint,
        rotation: Rotation,
    },
}

/// One drawable tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub x: u32,
    pub y: u32,
    pub content: TileContent,
    pub edges: EdgeSet,
}

/// Draw data for every non-blocked tile, row by row
///
/// An anchor whose asset is missing from the catalog renders as empty; the
/// grid itself stays untouched and the miss is logged.
pub fn tile_views(grid: &TileGrid, catalog: &AssetCatalog) -> Vec<TileView> {
    let mut views = Vec::new();
    for (x, y, tile) in grid.iter() {
        let content = match tile.kind {
            TileKind::Blocked => continue,
            TileKind::Empty => TileContent::Empty,
            TileKind::Fill => TileContent::Fill {
                color: theme_color(&grid.theme),
            },
            TileKind::Asset => {
                let def = tile
                    .asset
                    .as_deref()
                    .and_then(|name| catalog.lookup(&grid.theme, name));
                match def {
                    Some(def) => TileContent::Asset {
                        path: def.path.clone(),
                        native_size: tile.native_size.unwrap_or_else(|| def.native_size()),
                        rotation: tile.rotation,
                    },
                    None => {
                        log::warn!(
                            "tile ({x}, {y}) references asset {:?} missing from theme '{}'",
                            tile.asset,
                            grid.theme
                        );
                        TileContent::Empty
                    }
                }
            }
        };
        views.push(TileView {
            x,
            y,
            content,
            edges: tile.edges,
        });
    }
    views
}
