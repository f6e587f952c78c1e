//! Edge synchronization between adjacent tiles
//!
//! An edge marker sits on the border between two tiles, so both tiles store
//! it: the primary side and the neighbor's mirrored side. `toggle_edge` is
//! the only mutation path and keeps the two sides identical (or both absent)
//! at all times - set and clear are both mirrored.

use dungeon_map_core::{EdgeKind, EdgeSide, MapError, TileGrid};

/// Toggle an edge marker on one side of a tile
///
/// If the side already carries `kind` the marker is removed, otherwise it is
/// set (replacing any other kind). The neighbor across the border, when one
/// exists, receives the same outcome on its mirrored side. Applying the same
/// toggle twice restores both tiles.
pub fn toggle_edge(
    grid: &mut TileGrid,
    x: u32,
    y: u32,
    side: EdgeSide,
    kind: EdgeKind,
) -> Result<(), MapError> {
    let tile = grid.get_mut(x, y)?;
    let new_edge = if tile.edges.get(side) == Some(kind) {
        None
    } else {
        Some(kind)
    };
    tile.edges.set(side, new_edge);

    if let Some((nx, ny)) = side.neighbor(x, y, grid.width(), grid.height()) {
        grid.get_mut(nx, ny)?.edges.set(side.opposite(), new_edge);
    }
    Ok(())
}

/// Resolve a pointer position inside a tile to the edge band it hits
///
/// The tile is split along its diagonals into four triangles; a click counts
/// as an edge hit only within the outer quarter band of its triangle, so the
/// center of the tile resolves to no edge at all. Positions are in pixels
/// relative to the tile's top-left corner.
pub fn edge_at(tile_size: u32, rel_x: f32, rel_y: f32) -> Option<EdgeSide> {
    let size = tile_size as f32;
    if rel_y < rel_x && rel_y < size - rel_x {
        (rel_y < size / 4.0).then_some(EdgeSide::Top)
    } else if rel_y > rel_x && rel_y > size - rel_x {
        (rel_y > size * 3.0 / 4.0).then_some(EdgeSide::Bottom)
    } else if rel_y < rel_x && rel_y > size - rel_x {
        (rel_x > size * 3.0 / 4.0).then_some(EdgeSide::Right)
    } else if rel_y > rel_x && rel_y < size - rel_x {
        (rel_x < size / 4.0).then_some(EdgeSide::Left)
    } else {
        None
    }
}
