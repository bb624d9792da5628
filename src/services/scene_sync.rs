//! 2D overlay / 3D scene synchronization boundary.
//!
//! The 3D scene addresses the room with 0-based raw grid coordinates
//! and radian rotations; the 2D overlay uses the padded, vertically
//! flipped grid and whole degrees. Conversion is one-directional per
//! view refresh and must be bit-exact on the integer grid coordinates.

use serde::{Deserialize, Serialize};

use crate::services::geometry::{
    degrees_to_radians, overlay_to_scene_cell, radians_to_degrees_rounded, scene_to_overlay_cell,
};

/// Raw placement record as the 3D scene stores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// Raw 0-based grid column
    pub grid_x: i64,
    /// Raw 0-based grid row (bottom-up)
    pub grid_y: i64,
    /// Vertical level (0 = floor)
    pub grid_z: i64,
    /// Orientation in radians
    pub rotation_radians: f64,
}

/// Placement record as the 2D overlay renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayRecord {
    /// Padded overlay column
    pub grid_x: i64,
    /// Padded overlay row (top-down)
    pub grid_y: i64,
    /// Orientation, nearest whole degree
    pub rotation_degrees: i32,
}

/// Converts a 3D scene record into its 2D overlay record.
#[must_use]
pub fn scene_to_overlay(record: &SceneRecord, rows: u32) -> OverlayRecord {
    let (grid_x, grid_y) = scene_to_overlay_cell(record.grid_x, record.grid_y, rows);
    OverlayRecord {
        grid_x,
        grid_y,
        rotation_degrees: radians_to_degrees_rounded(record.rotation_radians),
    }
}

/// Converts a 2D overlay record back into a 3D scene record.
///
/// The overlay is flat, so the caller supplies the vertical level.
#[must_use]
pub fn overlay_to_scene(record: &OverlayRecord, rows: u32, grid_z: i64) -> SceneRecord {
    let (grid_x, grid_y) = overlay_to_scene_cell(record.grid_x, record.grid_y, rows);
    SceneRecord {
        grid_x,
        grid_y,
        grid_z,
        rotation_radians: degrees_to_radians(f64::from(record.rotation_degrees)),
    }
}
