//! Tile cells and the edge/rotation vocabulary they carry

use serde::{Deserialize, Serialize};

/// What a grid cell currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    #[default]
    Empty,
    /// Painted with the theme color, no asset
    Fill,
    /// Anchor cell of a placed asset
    Asset,
    /// Covered by a multi-tile asset anchored elsewhere
    Blocked,
}

/// Edge marker kinds drawn on tile borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Wall,
    Cracked,
    Door,
    Window,
    Secret,
    Trap,
    Lever,
}

/// One of the four sides of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl EdgeSide {
    /// The side a neighboring tile shares with this one
    pub fn opposite(self) -> EdgeSide {
        match self {
            EdgeSide::Top => EdgeSide::Bottom,
            EdgeSide::Right => EdgeSide::Left,
            EdgeSide::Bottom => EdgeSide::Top,
            EdgeSide::Left => EdgeSide::Right,
        }
    }

    /// Offset of the neighbor across this side; None at a grid boundary
    pub fn neighbor(self, x: u32, y: u32, width: u32, height: u32) -> Option<(u32, u32)> {
        match self {
            EdgeSide::Top => (y > 0).then(|| (x, y - 1)),
            EdgeSide::Right => (x + 1 < width).then(|| (x + 1, y)),
            EdgeSide::Bottom => (y + 1 < height).then(|| (x, y + 1)),
            EdgeSide::Left => (x > 0).then(|| (x - 1, y)),
        }
    }
}

/// Edge markers on the four sides of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<EdgeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<EdgeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<EdgeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<EdgeKind>,
}

impl EdgeSet {
    pub fn get(&self, side: EdgeSide) -> Option<EdgeKind> {
        match side {
            EdgeSide::Top => self.top,
            EdgeSide::Right => self.right,
            EdgeSide::Bottom => self.bottom,
            EdgeSide::Left => self.left,
        }
    }

    pub fn set(&mut self, side: EdgeSide, kind: Option<EdgeKind>) {
        match side {
            EdgeSide::Top => self.top = kind,
            EdgeSide::Right => self.right = kind,
            EdgeSide::Bottom => self.bottom = kind,
            EdgeSide::Left => self.left = kind,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// Iterate the sides that carry a marker
    pub fn iter(&self) -> impl Iterator<Item = (EdgeSide, EdgeKind)> + '_ {
        [
            (EdgeSide::Top, self.top),
            (EdgeSide::Right, self.right),
            (EdgeSide::Bottom, self.bottom),
            (EdgeSide::Left, self.left),
        ]
        .into_iter()
        .filter_map(|(side, kind)| kind.map(|k| (side, k)))
    }
}

/// Asset rotation in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    #[serde(rename = "0")]
    R0,
    #[serde(rename = "90")]
    R90,
    #[serde(rename = "180")]
    R180,
    #[serde(rename = "270")]
    R270,
}

impl Rotation {
    /// The next quarter turn clockwise, wrapping 270 back to 0
    pub fn next(self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Whether this rotation swaps an asset's width and height on the grid
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }
}

/// A width/height pair in whole tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The occupancy rectangle after applying a rotation to this native size
    pub fn rotated(self, rotation: Rotation) -> Footprint {
        if rotation.swaps_axes() {
            Footprint {
                width: self.height,
                height: self.width,
            }
        } else {
            self
        }
    }

    pub fn is_single(self) -> bool {
        self.width == 1 && self.height == 1
    }
}

/// One grid cell
///
/// Only anchor cells (`kind == Asset`) carry `asset`, `rotation`,
/// `native_size` and `footprint`; only `Blocked` cells carry `blocked_by`.
/// Edges belong to the cell itself and survive placement and clearing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tile {
    #[serde(default)]
    pub kind: TileKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(default)]
    pub rotation: Rotation,
    /// Unrotated intrinsic size, kept so later rotations avoid a catalog lookup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_size: Option<Footprint>,
    /// Post-rotation occupancy size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint: Option<Footprint>,
    /// Anchor coordinate for Blocked cells
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_by: Option<(u32, u32)>,
    #[serde(default, skip_serializing_if = "EdgeSet::is_empty")]
    pub edges: EdgeSet,
}

impl Tile {
    /// An empty cell that keeps the given edges
    pub fn empty_with_edges(edges: EdgeSet) -> Self {
        Self {
            edges,
            ..Self::default()
        }
    }

    /// A fill cell that keeps the given edges
    pub fn fill_with_edges(edges: EdgeSet) -> Self {
        Self {
            kind: TileKind::Fill,
            edges,
            ..Self::default()
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.kind == TileKind::Asset
    }

    /// Anchor footprint larger than a single cell
    pub fn is_multi_tile_anchor(&self) -> bool {
        self.is_anchor() && self.footprint.map_or(false, |f| !f.is_single())
    }
}
