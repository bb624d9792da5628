//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default rack/floor geometry.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Rack Planner";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "rackplan";

/// Default number of units in a rack (standard full-height rack, numbered 1 bottom to 42 top).
pub const DEFAULT_UNIT_COUNT: u32 = 42;

/// Default pixel height of one rack unit in the elevation view.
pub const DEFAULT_UNIT_HEIGHT_PX: f64 = 20.0;

/// Default pixel thickness of the rack frame above/below the unit area.
pub const DEFAULT_FRAME_PX: f64 = 8.0;

/// Default floor-plan grid width in cells.
pub const DEFAULT_GRID_COLS: u32 = 40;

/// Default floor-plan grid height in cells.
pub const DEFAULT_GRID_ROWS: u32 = 30;

/// Default pixel size of one floor-plan grid cell.
pub const DEFAULT_CELL_SIZE_PX: f64 = 32.0;

/// Number of pad cells the 2D overlay adds on every side of the raw 3D grid.
///
/// The 3D scene addresses cells 0-based with no border; the 2D overlay
/// surrounds the same grid with one extra cell on each edge. All
/// 2D-to-3D conversions must account for this pad.
pub const OVERLAY_PAD_CELLS: i64 = 1;
