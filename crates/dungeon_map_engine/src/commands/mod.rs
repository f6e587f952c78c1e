//! Undo/redo history and clipboard commands

pub mod clipboard;

pub use clipboard::{delete_region, SelectionRect, TileClipboard, TileSelection};

use dungeon_map_core::TileGrid;

/// Maximum retained grid snapshots
pub const MAX_HISTORY: usize = 50;

/// Linear undo/redo over whole-grid snapshots
///
/// Every committed mutation appends a deep copy of the grid; undo and redo
/// move a cursor through the sequence and hand back copies. Mutating after
/// an undo truncates the discarded future. The sequence is bounded: past
/// the cap the oldest snapshot is evicted and the cursor shifts so the
/// current entry stays addressable.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    snapshots: Vec<TileGrid>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything and seed history with the given grid, as on new-map
    /// and load-map
    pub fn reset(&mut self, grid: &TileGrid) {
        self.snapshots.clear();
        self.snapshots.push(grid.clone());
        self.cursor = 0;
    }

    /// Record a committed mutation
    pub fn record(&mut self, grid: &TileGrid) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(grid.clone());
        self.cursor = self.snapshots.len() - 1;
        if self.snapshots.len() > MAX_HISTORY {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step back one snapshot, replacing the live grid; no-op at the start
    pub fn undo(&mut self, grid: &mut TileGrid) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        *grid = self.snapshots[self.cursor].clone();
        true
    }

    /// Step forward one snapshot, replacing the live grid; no-op at the end
    pub fn redo(&mut self, grid: &mut TileGrid) -> bool {
        if self.cursor + 1 >= self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        *grid = self.snapshots[self.cursor].clone();
        true
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }
}
