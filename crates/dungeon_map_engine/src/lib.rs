//! Tile grid editing engine for the dungeon map editor
//!
//! Everything here operates on the `dungeon_map_core` model and is
//! renderer-agnostic: hosts feed pointer/key input in as commands on
//! [`MapEditor`] and redraw from the [`render`] read model afterwards.
//!
//! - `placement` - Asset/fill/clear/rotate rules, including multi-tile
//!   footprints and blocked-cell bookkeeping
//! - `edges` - Wall/door/window synchronization across shared tile borders
//! - `commands` - Undo/redo history, selection, and clipboard
//! - `state` - Explicit application state (tool, brush, zoom) owned by the
//!   host shell
//! - `session` - The command surface tying it all together

pub mod commands;
pub mod edges;
pub mod placement;
pub mod render;
pub mod session;
pub mod state;

pub use commands::{CommandHistory, SelectionRect, TileClipboard, TileSelection, MAX_HISTORY};
pub use render::{tile_views, TileContent, TileView};
pub use session::MapEditor;
pub use state::{EditorState, EditorTool, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
