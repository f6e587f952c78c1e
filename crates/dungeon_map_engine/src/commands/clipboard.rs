//! Rectangular selection and the tile clipboard
//!
//! Copy, cut, paste, and delete are anchor-aware: an asset is carried or
//! removed as a whole, never split across a region boundary. Blocked cells
//! inside a clipboard store their anchor reference relative to the clipboard
//! origin, so pasting anywhere rebinds them correctly.

use crate::placement::clear_tile;
use dungeon_map_core::{Footprint, MapError, Tile, TileGrid, TileKind};

/// A normalized inclusive tile rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl SelectionRect {
    /// Build from two corners in any order
    pub fn from_corners(a: (u32, u32), b: (u32, u32)) -> Self {
        Self {
            min_x: a.0.min(b.0),
            min_y: a.1.min(b.1),
            max_x: a.0.max(b.0),
            max_y: a.1.max(b.1),
        }
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Whether an entire footprint anchored at (x, y) lies inside this rect
    fn contains_footprint(&self, x: u32, y: u32, footprint: Footprint) -> bool {
        self.contains(x, y) && self.contains(x + footprint.width - 1, y + footprint.height - 1)
    }

    pub fn is_single_tile(&self) -> bool {
        self.min_x == self.max_x && self.min_y == self.max_y
    }
}

/// The marquee selection: two corner coordinates plus an active flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileSelection {
    active: bool,
    dragging: bool,
    start: (u32, u32),
    end: (u32, u32),
}

impl TileSelection {
    /// Start a new selection at a corner tile
    pub fn begin(&mut self, x: u32, y: u32) {
        self.active = true;
        self.dragging = true;
        self.start = (x, y);
        self.end = (x, y);
    }

    /// Move the opposite corner while the drag is in progress
    pub fn drag_to(&mut self, x: u32, y: u32) {
        if self.dragging {
            self.end = (x, y);
        }
    }

    /// Finish the drag; the selection stays active
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Replace the selection with an explicit rectangle
    pub fn set_rect(&mut self, rect: SelectionRect) {
        self.active = true;
        self.dragging = false;
        self.start = (rect.min_x, rect.min_y);
        self.end = (rect.max_x, rect.max_y);
    }

    pub fn clear(&mut self) {
        self.active = false;
        self.dragging = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The normalized rectangle, when a selection is active
    pub fn rect(&self) -> Option<SelectionRect> {
        self.active
            .then(|| SelectionRect::from_corners(self.start, self.end))
    }
}

/// A detached rectangular snapshot of tiles
#[derive(Debug, Clone, PartialEq)]
pub struct TileClipboard {
    pub width: u32,
    pub height: u32,
    cells: Vec<Vec<Tile>>,
}

impl TileClipboard {
    /// Deep-copy a region of the grid
    ///
    /// Assets whose footprint lies entirely inside the region are captured
    /// with clipboard-relative anchor references; assets that straddle the
    /// boundary are left out, their cells captured as empty tiles that keep
    /// their edges.
    pub fn copy(grid: &TileGrid, rect: SelectionRect) -> Result<Self, MapError> {
        let mut cells = Vec::with_capacity(rect.height() as usize);
        for y in rect.min_y..=rect.max_y {
            let mut row = Vec::with_capacity(rect.width() as usize);
            for x in rect.min_x..=rect.max_x {
                let tile = grid.get(x, y)?;
                row.push(capture_cell(grid, rect, x, y, tile));
            }
            cells.push(row);
        }
        Ok(Self {
            width: rect.width(),
            height: rect.height(),
            cells,
        })
    }

    /// Paste onto the grid with the clipboard origin at (x, y)
    ///
    /// Cells landing outside the grid are dropped. Every landing cell is
    /// cleared footprint-aware first, so pasting over part of an existing
    /// asset removes that asset whole. Assets from the clipboard are
    /// re-stamped only when their entire footprint lands in bounds; a
    /// clipped asset is dropped, its landing cells left empty with the
    /// clipboard edges. Returns the pasted region clipped to the grid, or
    /// None when nothing landed.
    pub fn paste(
        &self,
        grid: &mut TileGrid,
        x: u32,
        y: u32,
    ) -> Result<Option<SelectionRect>, MapError> {
        if x >= grid.width() || y >= grid.height() {
            return Ok(None);
        }

        for (cx, cy, _) in self.iter() {
            let (dx, dy) = (x + cx, y + cy);
            if grid.in_bounds(dx, dy) {
                clear_tile(grid, dx, dy)?;
            }
        }

        for (cx, cy, cell) in self.iter() {
            let (dx, dy) = (x + cx, y + cy);
            if !grid.in_bounds(dx, dy) {
                continue;
            }
            match cell.kind {
                TileKind::Empty | TileKind::Fill => {
                    grid.set(dx, dy, cell.clone())?;
                }
                TileKind::Asset => {
                    if self.anchor_fits(grid, x, y, cx, cy) {
                        grid.set(dx, dy, cell.clone())?;
                    } else {
                        grid.set(dx, dy, Tile::empty_with_edges(cell.edges))?;
                    }
                }
                TileKind::Blocked => {
                    let anchored = cell
                        .blocked_by
                        .map_or(false, |(ax, ay)| self.anchor_fits(grid, x, y, ax, ay));
                    if anchored {
                        let mut blocked = cell.clone();
                        // Rebind the clipboard-relative reference to the grid
                        blocked.blocked_by = cell.blocked_by.map(|(ax, ay)| (x + ax, y + ay));
                        grid.set(dx, dy, blocked)?;
                    } else {
                        grid.set(dx, dy, Tile::empty_with_edges(cell.edges))?;
                    }
                }
            }
        }

        Ok(Some(SelectionRect {
            min_x: x,
            min_y: y,
            max_x: (x + self.width - 1).min(grid.width() - 1),
            max_y: (y + self.height - 1).min(grid.height() - 1),
        }))
    }

    /// Whether the clipboard anchor at relative (ax, ay) lands fully inside
    /// the grid when pasted at (x, y)
    fn anchor_fits(&self, grid: &TileGrid, x: u32, y: u32, ax: u32, ay: u32) -> bool {
        let Some(anchor) = self.get(ax, ay) else {
            return false;
        };
        if anchor.kind != TileKind::Asset {
            return false;
        }
        let footprint = anchor.footprint.unwrap_or(Footprint::new(1, 1));
        x + ax + footprint.width <= grid.width() && y + ay + footprint.height <= grid.height()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&Tile> {
        self.cells.get(y as usize)?.get(x as usize)
    }

    fn iter(&self) -> impl Iterator<Item = (u32, u32, &Tile)> {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (x as u32, y as u32, tile))
        })
    }
}

fn capture_cell(grid: &TileGrid, rect: SelectionRect, x: u32, y: u32, tile: &Tile) -> Tile {
    match tile.kind {
        TileKind::Asset => {
            let footprint = tile.footprint.unwrap_or(Footprint::new(1, 1));
            if rect.contains_footprint(x, y, footprint) {
                tile.clone()
            } else {
                Tile::empty_with_edges(tile.edges)
            }
        }
        TileKind::Blocked => {
            let kept = tile.blocked_by.and_then(|(ax, ay)| {
                let anchor = grid.get(ax, ay).ok()?;
                let footprint = anchor.footprint?;
                (anchor.kind == TileKind::Asset
                    && rect.contains_footprint(ax, ay, footprint))
                .then(|| {
                    let mut blocked = tile.clone();
                    blocked.blocked_by = Some((ax - rect.min_x, ay - rect.min_y));
                    blocked
                })
            });
            kept.unwrap_or_else(|| Tile::empty_with_edges(tile.edges))
        }
        TileKind::Empty | TileKind::Fill => tile.clone(),
    }
}

/// Clear every tile in the rectangle, footprint-aware
///
/// Any asset intersecting the region is removed whole, including cells of
/// its footprint outside the rectangle, so no dangling blocked cells remain.
pub fn delete_region(grid: &mut TileGrid, rect: SelectionRect) -> Result<(), MapError> {
    for y in rect.min_y..=rect.max_y {
        for x in rect.min_x..=rect.max_x {
            clear_tile(grid, x, y)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{place_asset, place_fill};
    use dungeon_map_core::{AssetCatalog, AssetDef, EdgeKind, EdgeSide, Rotation, CLASSIC_DUNGEON};

    fn catalog() -> AssetCatalog {
        let mut catalog = AssetCatalog::new();
        catalog.insert_theme(
            CLASSIC_DUNGEON,
            vec![
                AssetDef {
                    name: "Chair1x1".to_string(),
                    path: "assets/Chair1x1.png".to_string(),
                    width: 1,
                    height: 1,
                },
                AssetDef {
                    name: "StairSpiralCircleBig2x2".to_string(),
                    path: "assets/StairSpiralCircleBig2x2.png".to_string(),
                    width: 2,
                    height: 2,
                },
            ],
        );
        catalog
    }

    fn grid() -> TileGrid {
        TileGrid::new(6, 6, 32, CLASSIC_DUNGEON.to_string()).unwrap()
    }

    #[test]
    fn selection_normalizes_corner_order() {
        let mut selection = TileSelection::default();
        assert_eq!(selection.rect(), None);

        selection.begin(4, 1);
        selection.drag_to(2, 3);
        let rect = selection.rect().unwrap();
        assert_eq!(rect, SelectionRect::from_corners((2, 1), (4, 3)));
        assert_eq!(rect.width(), 3);
        assert_eq!(rect.height(), 3);

        selection.clear();
        assert_eq!(selection.rect(), None);
    }

    #[test]
    fn copy_and_paste_relocates_a_multi_tile_asset() {
        let mut grid = grid();
        place_asset(&mut grid, &catalog(), 1, 1, "StairSpiralCircleBig2x2", Rotation::R0)
            .unwrap();

        let rect = SelectionRect::from_corners((1, 1), (2, 2));
        let clip = TileClipboard::copy(&grid, rect).unwrap();
        let pasted = clip.paste(&mut grid, 3, 3).unwrap().unwrap();
        assert_eq!(pasted, SelectionRect::from_corners((3, 3), (4, 4)));

        let anchor = grid.get(3, 3).unwrap();
        assert_eq!(anchor.kind, TileKind::Asset);
        assert_eq!(anchor.asset.as_deref(), Some("StairSpiralCircleBig2x2"));
        for (x, y) in [(4, 3), (3, 4), (4, 4)] {
            assert_eq!(grid.get(x, y).unwrap().blocked_by, Some((3, 3)));
        }
        // Source asset is untouched by the copy
        assert_eq!(grid.get(1, 1).unwrap().kind, TileKind::Asset);
    }

    #[test]
    fn copy_excludes_assets_straddling_the_selection() {
        let mut grid = grid();
        place_asset(&mut grid, &catalog(), 1, 1, "StairSpiralCircleBig2x2", Rotation::R0)
            .unwrap();
        grid.get_mut(2, 1).unwrap().edges.set(EdgeSide::Top, Some(EdgeKind::Wall));

        // Cuts the asset in half vertically
        let rect = SelectionRect::from_corners((2, 0), (3, 3));
        let clip = TileClipboard::copy(&grid, rect).unwrap();

        for (x, y, tile) in (0..clip.width)
            .flat_map(|x| (0..clip.height).map(move |y| (x, y)))
            .map(|(x, y)| (x, y, clip.get(x, y).unwrap()))
        {
            assert_eq!(tile.kind, TileKind::Empty, "cell ({x}, {y}) should be empty");
        }
        // The straddling cells keep their edges
        assert_eq!(
            clip.get(0, 1).unwrap().edges.get(EdgeSide::Top),
            Some(EdgeKind::Wall)
        );
    }

    #[test]
    fn paste_clips_to_the_grid_and_drops_clipped_assets() {
        let mut grid = grid();
        place_asset(&mut grid, &catalog(), 0, 0, "StairSpiralCircleBig2x2", Rotation::R0)
            .unwrap();
        place_fill(&mut grid, 2, 0).unwrap();

        let rect = SelectionRect::from_corners((0, 0), (2, 1));
        let clip = TileClipboard::copy(&grid, rect).unwrap();

        // Anchor would land at (5, 3) with a 2x2 footprint: clipped off
        let pasted = clip.paste(&mut grid, 5, 3).unwrap().unwrap();
        assert_eq!(pasted, SelectionRect::from_corners((5, 3), (5, 4)));
        assert_eq!(grid.get(5, 3).unwrap().kind, TileKind::Empty);
        assert_eq!(grid.get(5, 4).unwrap().kind, TileKind::Empty);

        // No dangling blocked references anywhere
        for (_, _, tile) in grid.iter() {
            if tile.kind == TileKind::Blocked {
                assert_eq!(tile.blocked_by, Some((0, 0)));
            }
        }
    }

    #[test]
    fn paste_over_an_existing_asset_removes_it_whole() {
        let mut grid = grid();
        place_asset(&mut grid, &catalog(), 3, 3, "StairSpiralCircleBig2x2", Rotation::R0)
            .unwrap();
        place_fill(&mut grid, 0, 0).unwrap();

        let clip = TileClipboard::copy(&grid, SelectionRect::from_corners((0, 0), (0, 0))).unwrap();
        // Lands on the blocked cell (4, 4); the whole 2x2 asset must go
        clip.paste(&mut grid, 4, 4).unwrap();

        assert_eq!(grid.get(4, 4).unwrap().kind, TileKind::Fill);
        assert_eq!(grid.get(3, 3).unwrap().kind, TileKind::Empty);
        assert_eq!(grid.get(4, 3).unwrap().kind, TileKind::Empty);
        assert_eq!(grid.get(3, 4).unwrap().kind, TileKind::Empty);
    }

    #[test]
    fn paste_entirely_outside_the_grid_is_a_no_op() {
        let mut grid = grid();
        place_fill(&mut grid, 0, 0).unwrap();
        let clip = TileClipboard::copy(&grid, SelectionRect::from_corners((0, 0), (1, 1))).unwrap();
        assert_eq!(clip.paste(&mut grid, 6, 0).unwrap(), None);
    }

    #[test]
    fn delete_removes_intersecting_assets_whole() {
        let mut grid = grid();
        place_asset(&mut grid, &catalog(), 1, 1, "StairSpiralCircleBig2x2", Rotation::R0)
            .unwrap();
        place_asset(&mut grid, &catalog(), 4, 4, "Chair1x1", Rotation::R0).unwrap();
        grid.get_mut(1, 1).unwrap().edges.set(EdgeSide::Left, Some(EdgeKind::Door));

        // Only touches the asset's top-left cell
        delete_region(&mut grid, SelectionRect::from_corners((0, 0), (1, 1))).unwrap();

        assert!(grid
            .iter()
            .filter(|(x, y, _)| (*x, *y) != (4, 4))
            .all(|(_, _, t)| t.kind == TileKind::Empty));
        assert_eq!(grid.get(4, 4).unwrap().kind, TileKind::Asset);
        // Edges survive deletion
        assert_eq!(
            grid.get(1, 1).unwrap().edges.get(EdgeSide::Left),
            Some(EdgeKind::Door)
        );
    }
}
