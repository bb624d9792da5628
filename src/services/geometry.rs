//! Pure coordinate transforms between the spaces the editor works in.
//!
//! Four spaces meet here: pixel space (pointer events, top-down Y),
//! floor-plan grid cells, rack units (numbered bottom-up), and the 3D
//! scene's raw grid. Every conversion is a pure function so the
//! off-by-one-prone ones (Y inversion, overlay padding) can be pinned
//! down by unit tests in one place.

// Allow intentional casts between pixel floats and cell/unit integers
#![allow(clippy::cast_possible_truncation)]

use crate::constants::OVERLAY_PAD_CELLS;

/// Pixel geometry of one rack's elevation view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RackFrame {
    /// Pixel Y of the top of the unit area (inside the frame)
    pub base_y: f64,
    /// Pixel height of one rack unit
    pub unit_height: f64,
    /// Total unit count
    pub unit_count: u32,
}

impl RackFrame {
    /// Creates a new rack frame.
    #[must_use]
    pub const fn new(base_y: f64, unit_height: f64, unit_count: u32) -> Self {
        Self {
            base_y,
            unit_height,
            unit_count,
        }
    }

    /// Pixel height of the whole unit area.
    #[must_use]
    pub fn height_px(&self) -> f64 {
        f64::from(self.unit_count) * self.unit_height
    }
}

/// Converts a pixel position to the grid cell containing it.
///
/// `header_padding` is the pixel offset of cell (0, 0) from the canvas
/// origin (same on both axes). Positions left/above the padded origin
/// map to negative cells; bounds checks happen later, at placement.
#[must_use]
pub fn pixel_to_grid(px: f64, py: f64, header_padding: f64, cell_size: f64) -> (i32, i32) {
    (
        ((px - header_padding) / cell_size).floor() as i32,
        ((py - header_padding) / cell_size).floor() as i32,
    )
}

/// Converts a grid cell to the pixel position of its top-left corner.
///
/// Exact inverse of [`pixel_to_grid`] for any pixel inside the cell.
#[must_use]
pub fn grid_to_pixel(grid_x: i32, grid_y: i32, header_padding: f64, cell_size: f64) -> (f64, f64) {
    (
        header_padding + f64::from(grid_x) * cell_size,
        header_padding + f64::from(grid_y) * cell_size,
    )
}

/// Converts a pointer Y in the elevation view to a rack unit position.
///
/// Units are numbered bottom-up while pixels grow top-down, so the raw
/// unit index is subtracted from the unit count. The result is clamped
/// to `[1, unit_count]`: a pointer above the rack snaps to the top
/// unit, below the rack to unit 1.
#[must_use]
pub fn world_to_rack_unit(pointer_y: f64, frame: &RackFrame) -> u32 {
    let units_from_top = ((pointer_y - frame.base_y) / frame.unit_height).floor() as i64;
    let position = i64::from(frame.unit_count) - units_from_top;
    position.clamp(1, i64::from(frame.unit_count)) as u32
}

/// Converts a rack unit position to the pixel Y of the device's top edge.
///
/// `height_units` is the device height: a taller device's top edge sits
/// higher (smaller Y) for the same `position`. Strictly decreasing in
/// `position`.
#[must_use]
pub fn rack_unit_to_pixel_y(position: u32, height_units: u32, frame: &RackFrame) -> f64 {
    frame.height_px() - f64::from(position - 1) * frame.unit_height
        - f64::from(height_units) * frame.unit_height
        + frame.base_y
}

/// Converts degrees to radians.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to the nearest whole degree.
///
/// Applied at every boundary that hands a rotation to a consumer
/// expecting integer degrees.
#[must_use]
pub fn radians_to_degrees_rounded(radians: f64) -> i32 {
    radians.to_degrees().round() as i32
}

/// Maps a raw 3D scene cell to the padded 2D overlay cell.
///
/// The overlay surrounds the raw grid with one pad cell on every side
/// and numbers rows top-down while the scene numbers them bottom-up.
/// With `padded_rows = rows + 2`, the flip is
/// `padded_y = (padded_rows - 1) - (raw_y + 1)`. Both the +1 pad and
/// the flip are asymmetric on purpose; changing either shifts every
/// asset by one cell or mirrors the room.
#[must_use]
pub fn scene_to_overlay_cell(raw_x: i64, raw_y: i64, rows: u32) -> (i64, i64) {
    let padded_rows = i64::from(rows) + 2 * OVERLAY_PAD_CELLS;
    (
        raw_x + OVERLAY_PAD_CELLS,
        (padded_rows - 1) - (raw_y + OVERLAY_PAD_CELLS),
    )
}

/// Maps a padded 2D overlay cell back to the raw 3D scene cell.
///
/// Exact inverse of [`scene_to_overlay_cell`].
#[must_use]
pub fn overlay_to_scene_cell(padded_x: i64, padded_y: i64, rows: u32) -> (i64, i64) {
    let padded_rows = i64::from(rows) + 2 * OVERLAY_PAD_CELLS;
    (
        padded_x - OVERLAY_PAD_CELLS,
        (padded_rows - 1) - padded_y - OVERLAY_PAD_CELLS,
    )
}
