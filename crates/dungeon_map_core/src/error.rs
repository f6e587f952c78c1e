//! Engine error kinds

use crate::Footprint;
use thiserror::Error;

/// Every failure the editing engine can report
///
/// All failures are rejected commands: the grid is unchanged whenever one of
/// these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid map dimensions {width}x{height} (both must be at least 1)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("tile ({x}, {y}) is outside the grid")]
    OutOfBounds { x: u32, y: u32 },

    #[error(
        "this asset needs {}x{} tiles of space after rotation, \
         which exceeds the map boundaries at ({x}, {y})",
        footprint.width,
        footprint.height
    )]
    PlacementOutOfBounds { x: u32, y: u32, footprint: Footprint },

    #[error(
        "rotating this asset to {}x{} tiles would exceed the map boundaries at ({x}, {y})",
        footprint.width,
        footprint.height
    )]
    RotationOutOfBounds { x: u32, y: u32, footprint: Footprint },

    #[error("invalid map document: {0}")]
    InvalidDocument(String),

    #[error("asset '{name}' not found in theme '{theme}'")]
    AssetNotFound { theme: String, name: String },
}
