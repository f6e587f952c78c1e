//! The authoritative tile grid

use crate::{MapError, Tile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangular map of tiles, row-major with (0, 0) at the top-left
///
/// All mutation is tile-granular through the bounds-checked accessors; no
/// other component reaches into the storage directly. The grid is replaced
/// wholesale on new-map and load-map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    pub id: Uuid,
    width: u32,
    height: u32,
    /// Tile edge length in pixels; opaque to the engine, carried for adapters
    pub tile_size: u32,
    /// Key into the external asset catalog
    pub theme: String,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid of empty tiles
    pub fn new(width: u32, height: u32, tile_size: u32, theme: String) -> Result<Self, MapError> {
        if width < 1 || height < 1 {
            return Err(MapError::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self {
            id: Uuid::new_v4(),
            width,
            height,
            tile_size,
            theme,
            tiles: vec![Tile::default(); size],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, MapError> {
        if !self.in_bounds(x, y) {
            return Err(MapError::OutOfBounds { x, y });
        }
        Ok((y * self.width + x) as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Result<&Tile, MapError> {
        let idx = self.index(x, y)?;
        Ok(&self.tiles[idx])
    }

    pub fn get_mut(&mut self, x: u32, y: u32) -> Result<&mut Tile, MapError> {
        let idx = self.index(x, y)?;
        Ok(&mut self.tiles[idx])
    }

    pub fn set(&mut self, x: u32, y: u32, tile: Tile) -> Result<(), MapError> {
        let idx = self.index(x, y)?;
        self.tiles[idx] = tile;
        Ok(())
    }

    /// Iterate all tiles with their coordinates, row by row
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &Tile)> {
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let i = i as u32;
            (i % self.width, i / self.width, tile)
        })
    }
}
