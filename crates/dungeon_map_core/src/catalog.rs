//! Per-theme decorative asset definitions
//!
//! The catalog is read-only to the engine: placement looks assets up by
//! theme and name, everything else about them (image loading, previews)
//! belongs to the host shell.

use crate::Footprint;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The two stock themes
pub const CLASSIC_DUNGEON: &str = "Classic Dungeon";
pub const OLD_SCHOOL_BLUE: &str = "Old School Blue Dungeon";

/// Fill/edge draw color for a theme
pub fn theme_color(theme: &str) -> &'static str {
    match theme {
        OLD_SCHOOL_BLUE => "#5692ba",
        _ => "#000000",
    }
}

/// One placeable asset: intrinsic footprint in tiles before rotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDef {
    pub name: String,
    /// Image path for the renderer; opaque to the engine
    pub path: String,
    #[serde(default = "one")]
    pub width: u32,
    #[serde(default = "one")]
    pub height: u32,
}

fn one() -> u32 {
    1
}

impl AssetDef {
    pub fn native_size(&self) -> Footprint {
        Footprint::new(self.width, self.height)
    }

    /// Human-readable label: strips the trailing size suffix and splits
    /// camel case, so "StairSpiralCircleBig2x2" reads "Stair Spiral Circle Big"
    pub fn display_name(&self) -> String {
        let mut base = self.name.as_str();
        if let Some(pos) = base.rfind(|c: char| !c.is_ascii_digit() && c != 'x') {
            let tail = &base[pos + 1..];
            if tail.contains('x') && tail.chars().all(|c| c.is_ascii_digit() || c == 'x') {
                base = &base[..pos + 1];
            }
        }
        let mut label = String::with_capacity(base.len() + 4);
        for (i, c) in base.chars().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                label.push(' ');
            }
            label.push(c);
        }
        label.trim().to_string()
    }
}

/// A theme's asset index file: `{ "files": [{name, filename, width, height}] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeIndex {
    pub files: Vec<ThemeIndexEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeIndexEntry {
    pub name: String,
    pub filename: String,
    #[serde(default = "one")]
    pub width: u32,
    #[serde(default = "one")]
    pub height: u32,
}

/// All known assets, grouped by theme
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    themes: HashMap<String, Vec<AssetDef>>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theme's assets, replacing any previous list
    pub fn insert_theme(&mut self, theme: impl Into<String>, assets: Vec<AssetDef>) {
        self.themes.insert(theme.into(), assets);
    }

    /// Register a theme from its index file, building paths as
    /// `<base>/<theme>/<filename>`
    pub fn insert_theme_index(&mut self, base: &str, theme: &str, index: ThemeIndex) {
        let assets = index
            .files
            .into_iter()
            .map(|file| AssetDef {
                path: format!("{base}/{theme}/{}", file.filename),
                name: file.name,
                width: file.width,
                height: file.height,
            })
            .collect();
        self.insert_theme(theme, assets);
    }

    pub fn lookup(&self, theme: &str, name: &str) -> Option<&AssetDef> {
        self.themes.get(theme)?.iter().find(|a| a.name == name)
    }

    pub fn assets_for(&self, theme: &str) -> &[AssetDef] {
        self.themes.get(theme).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str, width: u32, height: u32) -> AssetDef {
        AssetDef {
            name: name.to_string(),
            path: format!("assets/{name}.png"),
            width,
            height,
        }
    }

    #[test]
    fn lookup_finds_assets_by_theme_and_name() {
        let mut catalog = AssetCatalog::new();
        catalog.insert_theme(
            CLASSIC_DUNGEON,
            vec![asset("Chair1x1", 1, 1), asset("TableLong2x1", 2, 1)],
        );

        let table = catalog.lookup(CLASSIC_DUNGEON, "TableLong2x1").unwrap();
        assert_eq!(table.native_size(), Footprint::new(2, 1));
        assert!(catalog.lookup(CLASSIC_DUNGEON, "Throne1x1").is_none());
        assert!(catalog.lookup(OLD_SCHOOL_BLUE, "Chair1x1").is_none());
    }

    #[test]
    fn theme_index_deserializes_with_size_defaults() {
        let json = r#"{
            "files": [
                {"name": "Altar1x1", "filename": "Altar1x1.png"},
                {"name": "StairSpiralCircleBig2x2", "filename": "StairSpiralCircleBig2x2.png",
                 "width": 2, "height": 2}
            ]
        }"#;
        let index: ThemeIndex = serde_json::from_str(json).unwrap();

        let mut catalog = AssetCatalog::new();
        catalog.insert_theme_index("/src/assets", CLASSIC_DUNGEON, index);

        let altar = catalog.lookup(CLASSIC_DUNGEON, "Altar1x1").unwrap();
        assert_eq!(altar.native_size(), Footprint::new(1, 1));
        assert_eq!(altar.path, "/src/assets/Classic Dungeon/Altar1x1.png");

        let stairs = catalog
            .lookup(CLASSIC_DUNGEON, "StairSpiralCircleBig2x2")
            .unwrap();
        assert_eq!(stairs.native_size(), Footprint::new(2, 2));
    }

    #[test]
    fn display_name_strips_suffix_and_splits_camel_case() {
        assert_eq!(
            asset("StairSpiralCircleBig2x2", 2, 2).display_name(),
            "Stair Spiral Circle Big"
        );
        assert_eq!(asset("Chair1x1", 1, 1).display_name(), "Chair");
        assert_eq!(asset("TableSetTwo3x1", 3, 1).display_name(), "Table Set Two");
        assert_eq!(asset("Stairs1x1_01", 1, 1).display_name(), "Stairs1x1_01");
    }

    #[test]
    fn theme_colors() {
        assert_eq!(theme_color(CLASSIC_DUNGEON), "#000000");
        assert_eq!(theme_color(OLD_SCHOOL_BLUE), "#5692ba");
        assert_eq!(theme_color("Unknown"), "#000000");
    }
}
