//! Layout file I/O service.
//!
//! This module centralizes room layout file operations, providing a
//! consistent interface for loading and saving layout records.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::RoomLayout;

/// Service for managing room layout file I/O operations.
///
/// Layout records are stored as pretty-printed JSON, the same shape the
/// persistence backend exchanges.
pub struct LayoutService;

impl LayoutService {
    /// Loads a room layout from a JSON file.
    pub fn load(path: &Path) -> Result<RoomLayout> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse layout record {}", path.display()))
    }

    /// Saves a room layout to a JSON file.
    ///
    /// Performs an atomic write using a temp file + rename so the file
    /// is never left in a corrupted state.
    pub fn save(layout: &RoomLayout, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(layout).context("Failed to serialize layout")?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to move layout into place at {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetKind, FloorLayer, GridAsset};

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("room.json");

        let mut layout = RoomLayout::new("Room B").unwrap();
        layout.floor_plan.add(GridAsset::new(
            "rack-a",
            AssetKind::Rack,
            1,
            1,
            2.0,
            2.0,
            FloorLayer::Floor,
        ));

        LayoutService::save(&layout, &path).unwrap();
        let loaded = LayoutService::load(&path).unwrap();
        assert_eq!(loaded, layout);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = LayoutService::load(Path::new("/nonexistent/room.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read layout"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("room.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(LayoutService::load(&path).is_err());
    }
}
