//! Core data structures for the dungeon map editor
//!
//! This crate provides the fundamental types for representing grid-based
//! dungeon maps:
//! - `TileGrid` - The authoritative 2D tile model
//! - `Tile` - A single grid cell (empty, fill, asset anchor, or blocked)
//! - `EdgeSet` - Wall/door/window markers on the four sides of a tile
//! - `AssetCatalog` - Per-theme decorative asset definitions
//! - `MapDocument` - Self-contained save format with structural validation
//! - `MapError` - Every engine error kind

mod catalog;
mod document;
mod error;
mod grid;
mod tile;

pub use catalog::{
    theme_color, AssetCatalog, AssetDef, ThemeIndex, ThemeIndexEntry, CLASSIC_DUNGEON,
    OLD_SCHOOL_BLUE,
};
pub use document::{sanitize_map_name, MapDocument, SavedMapStore};
pub use error::MapError;
pub use grid::TileGrid;
pub use tile::{EdgeKind, EdgeSet, EdgeSide, Footprint, Rotation, Tile, TileKind};
