//! Explicit application state owned by the host shell
//!
//! The original editor kept tool and brush state in module-level globals;
//! here it is a plain struct the host passes around, so the engine itself
//! holds no references to presentation state.

use dungeon_map_core::{EdgeKind, Rotation};
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.1;

/// Available editor tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorTool {
    #[default]
    Select,
    /// Paints the theme fill, or places the selected asset when one is chosen
    Fill,
    Erase,
    Edge,
}

/// Tool, brush, and view state for one editing session
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub current_tool: EditorTool,
    /// Asset used by the Fill tool; None paints plain fill
    pub selected_asset: Option<String>,
    /// Edge kind applied by the Edge tool
    pub selected_edge: EdgeKind,
    /// Pending rotation applied to the next placement
    pub brush_rotation: Rotation,
    pub show_grid: bool,
    pub zoom: f32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            current_tool: EditorTool::Select,
            selected_asset: None,
            selected_edge: EdgeKind::Wall,
            brush_rotation: Rotation::R0,
            show_grid: true,
            zoom: 1.0,
        }
    }
}

impl EditorState {
    /// Choose the asset brush; resets the pending rotation and switches to
    /// the Fill tool
    pub fn select_asset(&mut self, name: impl Into<String>) {
        self.selected_asset = Some(name.into());
        self.brush_rotation = Rotation::R0;
        self.current_tool = EditorTool::Fill;
    }

    pub fn clear_selected_asset(&mut self) {
        self.selected_asset = None;
    }

    /// Choose the edge kind and switch to the Edge tool
    pub fn select_edge_kind(&mut self, kind: EdgeKind) {
        self.selected_edge = kind;
        self.current_tool = EditorTool::Edge;
    }

    /// Advance the pending rotation a quarter turn; never touches the grid
    pub fn rotate_brush(&mut self) {
        self.brush_rotation = self.brush_rotation.next();
    }

    /// Nudge the zoom by a delta, clamped to the supported range
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-ZOOM_STEP);
    }

    pub fn zoom_reset(&mut self) {
        self.zoom = 1.0;
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_an_asset_switches_tool_and_resets_rotation() {
        let mut state = EditorState::default();
        state.rotate_brush();
        state.select_asset("Chair1x1");
        assert_eq!(state.current_tool, EditorTool::Fill);
        assert_eq!(state.brush_rotation, Rotation::R0);
        assert_eq!(state.selected_asset.as_deref(), Some("Chair1x1"));
    }

    #[test]
    fn selecting_an_edge_kind_switches_to_the_edge_tool() {
        let mut state = EditorState::default();
        state.select_edge_kind(EdgeKind::Door);
        assert_eq!(state.current_tool, EditorTool::Edge);
        assert_eq!(state.selected_edge, EdgeKind::Door);
    }

    #[test]
    fn brush_rotation_cycles_without_a_grid() {
        let mut state = EditorState::default();
        for _ in 0..4 {
            state.rotate_brush();
        }
        assert_eq!(state.brush_rotation, Rotation::R0);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut state = EditorState::default();
        for _ in 0..40 {
            state.zoom_in();
        }
        assert_eq!(state.zoom, MAX_ZOOM);
        for _ in 0..60 {
            state.zoom_out();
        }
        assert_eq!(state.zoom, MIN_ZOOM);
        state.zoom_reset();
        assert_eq!(state.zoom, 1.0);
    }
}
