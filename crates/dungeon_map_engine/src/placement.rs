//! Placement rules for fills and single- or multi-tile assets
//!
//! A placed asset owns one anchor cell holding the asset data; every other
//! cell in its footprint is marked `Blocked` with a back-reference to the
//! anchor. All operations here validate fully before mutating, so a rejected
//! command leaves the grid untouched, and none of them ever modify a cell's
//! edges.

use dungeon_map_core::{
    AssetCatalog, Footprint, MapError, Rotation, Tile, TileGrid, TileKind,
};

/// Cells covered by a footprint anchored at (x, y), row by row
fn footprint_cells(x: u32, y: u32, footprint: Footprint) -> impl Iterator<Item = (u32, u32)> {
    (0..footprint.height).flat_map(move |dy| (0..footprint.width).map(move |dx| (x + dx, y + dy)))
}

/// Place an asset with its anchor at (x, y)
///
/// The asset is looked up in the catalog under the grid's theme, and the
/// occupancy footprint is the asset's native size with axes swapped for
/// 90/270 degree rotations. Every covered cell is cleared first so remnants
/// of an overlapped asset cannot survive underneath the new one.
pub fn place_asset(
    grid: &mut TileGrid,
    catalog: &AssetCatalog,
    x: u32,
    y: u32,
    name: &str,
    rotation: Rotation,
) -> Result<(), MapError> {
    let asset = catalog
        .lookup(&grid.theme, name)
        .ok_or_else(|| MapError::AssetNotFound {
            theme: grid.theme.clone(),
            name: name.to_string(),
        })?;
    let native = asset.native_size();
    let footprint = native.rotated(rotation);
    if x + footprint.width > grid.width() || y + footprint.height > grid.height() {
        return Err(MapError::PlacementOutOfBounds { x, y, footprint });
    }

    let name = asset.name.clone();
    for (cx, cy) in footprint_cells(x, y, footprint) {
        clear_tile(grid, cx, cy)?;
    }

    let anchor = grid.get_mut(x, y)?;
    anchor.kind = TileKind::Asset;
    anchor.asset = Some(name);
    anchor.rotation = rotation;
    anchor.native_size = Some(native);
    anchor.footprint = Some(footprint);

    for (cx, cy) in footprint_cells(x, y, footprint) {
        if (cx, cy) == (x, y) {
            continue;
        }
        let cell = grid.get_mut(cx, cy)?;
        cell.kind = TileKind::Blocked;
        cell.blocked_by = Some((x, y));
    }
    Ok(())
}

/// Paint a tile with the theme fill
///
/// Any prior content is cleared footprint-aware first, so filling over part
/// of a multi-tile asset removes the whole asset instead of orphaning its
/// blocked cells.
pub fn place_fill(grid: &mut TileGrid, x: u32, y: u32) -> Result<(), MapError> {
    clear_tile(grid, x, y)?;
    grid.get_mut(x, y)?.kind = TileKind::Fill;
    Ok(())
}

/// Clear a tile back to empty, keeping its edges
///
/// Clearing any cell of a multi-tile asset clears the entire footprint: an
/// anchor clears all of its covered cells, and a blocked cell resolves its
/// back-reference and clears the anchor. A blocked cell whose reference does
/// not lead to a covering anchor is cleared alone.
pub fn clear_tile(grid: &mut TileGrid, x: u32, y: u32) -> Result<(), MapError> {
    let tile = grid.get(x, y)?;
    match tile.kind {
        TileKind::Asset => {
            let footprint = tile.footprint.unwrap_or(Footprint::new(1, 1));
            for (cx, cy) in footprint_cells(x, y, footprint) {
                if !grid.in_bounds(cx, cy) {
                    continue;
                }
                let cell = grid.get_mut(cx, cy)?;
                *cell = Tile::empty_with_edges(cell.edges);
            }
        }
        TileKind::Blocked => {
            if let Some((ax, ay)) = anchor_of(grid, x, y) {
                clear_tile(grid, ax, ay)?;
            } else {
                log::warn!(
                    "blocked tile ({x}, {y}) has no covering anchor; clearing it alone"
                );
                let cell = grid.get_mut(x, y)?;
                *cell = Tile::empty_with_edges(cell.edges);
            }
        }
        TileKind::Empty | TileKind::Fill => {
            let cell = grid.get_mut(x, y)?;
            *cell = Tile::empty_with_edges(cell.edges);
        }
    }
    Ok(())
}

/// Resolve a blocked cell's back-reference, validating that it points at an
/// asset anchor whose footprint covers the cell
fn anchor_of(grid: &TileGrid, x: u32, y: u32) -> Option<(u32, u32)> {
    let (ax, ay) = grid.get(x, y).ok()?.blocked_by?;
    let anchor = grid.get(ax, ay).ok()?;
    let covers = anchor.kind == TileKind::Asset
        && anchor
            .footprint
            .map_or(false, |f| x >= ax && y >= ay && x < ax + f.width && y < ay + f.height);
    covers.then_some((ax, ay))
}

/// Rotate a placed asset a quarter turn clockwise around its anchor
///
/// Blocked cells redirect to their anchor; non-asset tiles are a no-op.
/// Returns whether the grid changed. The new footprint is recomputed from
/// the stored native size, and the rotation is rejected without mutation
/// when it would push the footprint past the grid edge.
pub fn rotate_in_place(grid: &mut TileGrid, x: u32, y: u32) -> Result<bool, MapError> {
    let tile = grid.get(x, y)?;
    if tile.kind == TileKind::Blocked {
        return match anchor_of(grid, x, y) {
            Some((ax, ay)) => rotate_in_place(grid, ax, ay),
            None => Ok(false),
        };
    }
    if tile.kind != TileKind::Asset {
        return Ok(false);
    }

    let native = tile.native_size.unwrap_or(Footprint::new(1, 1));
    let rotation = tile.rotation;
    let new_rotation = rotation.next();

    // A 1x1 asset never changes occupancy; only its drawn orientation moves.
    if native.is_single() {
        grid.get_mut(x, y)?.rotation = new_rotation;
        return Ok(true);
    }

    let current = native.rotated(rotation);
    let new_footprint = native.rotated(new_rotation);
    if x + new_footprint.width > grid.width() || y + new_footprint.height > grid.height() {
        return Err(MapError::RotationOutOfBounds {
            x,
            y,
            footprint: new_footprint,
        });
    }

    // Release only the blocked cells that actually belong to this anchor.
    for (cx, cy) in footprint_cells(x, y, current) {
        if (cx, cy) == (x, y) || !grid.in_bounds(cx, cy) {
            continue;
        }
        let cell = grid.get_mut(cx, cy)?;
        if cell.kind == TileKind::Blocked && cell.blocked_by == Some((x, y)) {
            *cell = Tile::empty_with_edges(cell.edges);
        }
    }

    // Cells the rotated footprint newly covers may hold other content;
    // clear them footprint-aware before stamping.
    for (cx, cy) in footprint_cells(x, y, new_footprint) {
        if (cx, cy) == (x, y) {
            continue;
        }
        if grid.get(cx, cy)?.kind != TileKind::Empty {
            clear_tile(grid, cx, cy)?;
        }
    }

    let anchor = grid.get_mut(x, y)?;
    anchor.rotation = new_rotation;
    anchor.footprint = Some(new_footprint);

    for (cx, cy) in footprint_cells(x, y, new_footprint) {
        if (cx, cy) == (x, y) {
            continue;
        }
        let cell = grid.get_mut(cx, cy)?;
        cell.kind = TileKind::Blocked;
        cell.blocked_by = Some((x, y));
    }
    Ok(true)
}
