//! The editing session and its command surface
//!
//! `MapEditor` owns the live grid together with selection, clipboard,
//! history, and the application state, and exposes one method per UI
//! command. Every command is a single atomic grid transition: it either
//! completes and records at most one history snapshot, or it fails with a
//! `MapError` and leaves the grid exactly as it was.

use crate::commands::{delete_region, CommandHistory, SelectionRect, TileClipboard, TileSelection};
use crate::edges::toggle_edge;
use crate::placement::{clear_tile, place_asset, place_fill, rotate_in_place};
use crate::state::EditorState;
use dungeon_map_core::{AssetCatalog, EdgeSide, MapDocument, MapError, Rotation, TileGrid};

/// One editing session over a single map
#[derive(Debug)]
pub struct MapEditor {
    grid: TileGrid,
    pub catalog: AssetCatalog,
    pub state: EditorState,
    selection: TileSelection,
    clipboard: Option<TileClipboard>,
    history: CommandHistory,
}

impl MapEditor {
    /// Start a session on a fresh map
    pub fn new(
        width: u32,
        height: u32,
        tile_size: u32,
        theme: impl Into<String>,
        catalog: AssetCatalog,
    ) -> Result<Self, MapError> {
        let grid = TileGrid::new(width, height, tile_size, theme.into())?;
        let mut history = CommandHistory::new();
        history.reset(&grid);
        Ok(Self {
            grid,
            catalog,
            state: EditorState::default(),
            selection: TileSelection::default(),
            clipboard: None,
            history,
        })
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn selection(&self) -> &TileSelection {
        &self.selection
    }

    pub fn clipboard(&self) -> Option<&TileClipboard> {
        self.clipboard.as_ref()
    }

    // --- map lifecycle ---

    /// Replace the map wholesale, as from the new-map dialog
    pub fn new_map(
        &mut self,
        width: u32,
        height: u32,
        tile_size: u32,
        theme: impl Into<String>,
    ) -> Result<(), MapError> {
        let theme = theme.into();
        self.grid = TileGrid::new(width, height, tile_size, theme)?;
        self.history.reset(&self.grid);
        self.selection.clear();
        log::info!(
            "created {}x{} map (theme '{}')",
            self.grid.width(),
            self.grid.height(),
            self.grid.theme
        );
        Ok(())
    }

    /// Replace the map from a persisted document
    ///
    /// A document that fails validation is rejected and the current map is
    /// retained untouched.
    pub fn load_document(&mut self, document: MapDocument) -> Result<(), MapError> {
        let grid = document.into_grid()?;
        log::info!(
            "loaded {}x{} map (theme '{}')",
            grid.width(),
            grid.height(),
            grid.theme
        );
        self.grid = grid;
        self.history.reset(&self.grid);
        self.selection.clear();
        Ok(())
    }

    /// Snapshot the map for the persistence adapter; the adapter adds the
    /// timestamp
    pub fn to_document(&self) -> MapDocument {
        MapDocument::from_grid(&self.grid)
    }

    // --- tile commands ---

    /// Place a named asset with its anchor at (x, y)
    pub fn place_asset(
        &mut self,
        x: u32,
        y: u32,
        name: &str,
        rotation: Rotation,
    ) -> Result<(), MapError> {
        place_asset(&mut self.grid, &self.catalog, x, y, name, rotation)?;
        self.history.record(&self.grid);
        Ok(())
    }

    /// Paint the theme fill at (x, y)
    pub fn place_fill(&mut self, x: u32, y: u32) -> Result<(), MapError> {
        place_fill(&mut self.grid, x, y)?;
        self.history.record(&self.grid);
        Ok(())
    }

    /// Apply the Fill-tool brush: the selected asset at its pending
    /// rotation, or plain fill when no asset is chosen
    pub fn place_selected(&mut self, x: u32, y: u32) -> Result<(), MapError> {
        match self.state.selected_asset.clone() {
            Some(name) => self.place_asset(x, y, &name, self.state.brush_rotation),
            None => self.place_fill(x, y),
        }
    }

    /// Clear the tile at (x, y); any multi-tile asset covering it is
    /// removed whole
    pub fn clear_tile(&mut self, x: u32, y: u32) -> Result<(), MapError> {
        clear_tile(&mut self.grid, x, y)?;
        self.history.record(&self.grid);
        Ok(())
    }

    /// Toggle the selected edge kind on one side of a tile, mirroring the
    /// neighbor across the border
    pub fn set_edge(&mut self, x: u32, y: u32, side: EdgeSide) -> Result<(), MapError> {
        toggle_edge(&mut self.grid, x, y, side, self.state.selected_edge)?;
        self.history.record(&self.grid);
        Ok(())
    }

    /// Rotate the placed asset at (x, y) a quarter turn
    pub fn rotate_asset_at(&mut self, x: u32, y: u32) -> Result<(), MapError> {
        if rotate_in_place(&mut self.grid, x, y)? {
            self.history.record(&self.grid);
        }
        Ok(())
    }

    /// The rotate key: a single-tile selection rotates that asset in
    /// place, anything else advances the brush rotation for the next
    /// placement
    pub fn rotate(&mut self) -> Result<(), MapError> {
        if let Some(rect) = self.selection.rect() {
            if rect.is_single_tile() {
                return self.rotate_asset_at(rect.min_x, rect.min_y);
            }
        }
        if self.state.selected_asset.is_some() {
            self.state.rotate_brush();
        }
        Ok(())
    }

    // --- selection and clipboard ---

    /// Start a marquee selection; ignored outside the grid
    pub fn begin_selection(&mut self, x: u32, y: u32) {
        if self.grid.in_bounds(x, y) {
            self.selection.begin(x, y);
        }
    }

    /// Extend the marquee while dragging; ignored outside the grid
    pub fn update_selection(&mut self, x: u32, y: u32) {
        if self.grid.in_bounds(x, y) {
            self.selection.drag_to(x, y);
        }
    }

    /// Finish the marquee drag; the selection stays active
    pub fn end_selection(&mut self) {
        self.selection.end_drag();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Copy the selected region to the clipboard; no history is recorded
    pub fn copy(&mut self) -> Result<(), MapError> {
        if let Some(rect) = self.selection.rect() {
            self.clipboard = Some(TileClipboard::copy(&self.grid, rect)?);
        }
        Ok(())
    }

    /// Copy the selected region, then delete it
    pub fn cut(&mut self) -> Result<(), MapError> {
        let Some(rect) = self.selection.rect() else {
            return Ok(());
        };
        self.clipboard = Some(TileClipboard::copy(&self.grid, rect)?);
        delete_region(&mut self.grid, rect)?;
        self.history.record(&self.grid);
        Ok(())
    }

    /// Paste the clipboard with its origin at (x, y), clipped to the grid;
    /// the selection moves to the pasted region
    pub fn paste_at(&mut self, x: u32, y: u32) -> Result<(), MapError> {
        let Some(clipboard) = self.clipboard.clone() else {
            return Ok(());
        };
        if let Some(rect) = clipboard.paste(&mut self.grid, x, y)? {
            self.selection.set_rect(rect);
            self.history.record(&self.grid);
        }
        Ok(())
    }

    /// Paste at the selection's top-left corner, or the map origin when
    /// nothing is selected
    pub fn paste(&mut self) -> Result<(), MapError> {
        let (x, y) = self
            .selection
            .rect()
            .map(|r| (r.min_x, r.min_y))
            .unwrap_or((0, 0));
        self.paste_at(x, y)
    }

    /// Clear every tile in the selected region, footprint-aware
    pub fn delete_selection(&mut self) -> Result<(), MapError> {
        if let Some(rect) = self.selection.rect() {
            delete_region(&mut self.grid, rect)?;
            self.history.record(&self.grid);
        }
        Ok(())
    }

    // --- history ---

    /// Step back one recorded mutation; false at the start of history
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.grid)
    }

    /// Step forward one undone mutation; false at the end of history
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.grid)
    }

    pub fn selection_rect(&self) -> Option<SelectionRect> {
        self.selection.rect()
    }
}
