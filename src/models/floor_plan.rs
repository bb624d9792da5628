//! Floor plan data structures.
//!
//! The floor plan is a fixed grid of cells holding assets on three
//! independent layers. Assets sit at integer cell positions but may
//! have fractional footprints (a wall-mounted cable tray can be a
//! quarter cell deep). Placement rules live in
//! `services::floor_allocator`; these types only carry the data.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Rotation;

/// Collision layer of a floor-plan asset.
///
/// Layers are independent namespaces: an overhead cable tray may cross
/// directly above a floor-standing rack without conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorLayer {
    /// Floor-standing equipment (racks, CRAC units, UPS cabinets)
    Floor,
    /// Wall-mounted items (panels, trays, cameras)
    Wall,
    /// Overhead items (cable trays, busbars)
    Overhead,
}

impl FloorLayer {
    /// All layers, in rendering order bottom to top.
    pub const ALL: [Self; 3] = [Self::Floor, Self::Wall, Self::Overhead];

    /// Lowercase label used in CLI output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Wall => "wall",
            Self::Overhead => "overhead",
        }
    }
}

/// Kind of floor-plan asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Equipment rack (links to a `Rack` elevation)
    Rack,
    /// Computer-room air conditioner
    CracUnit,
    /// UPS cabinet
    Ups,
    /// Door (wall layer)
    Door,
    /// Wall segment
    WallSegment,
    /// Security camera
    Camera,
    /// Environment sensor
    Sensor,
    /// Overhead cable tray
    CableTray,
}

/// An asset placed on the floor plan.
///
/// `grid_x`/`grid_y` address the asset's top-left cell. The footprint
/// extends right and down by `width_cells` x `height_cells`; fractional
/// sizes are allowed for thin wall-mounted items.
///
/// # Validation
///
/// - footprint must lie inside `[0, cols) x [0, rows)`
/// - footprint must not overlap any other asset on the same layer
/// - `width_cells` and `height_cells` must be > 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridAsset {
    /// Stable identifier, referenced by placement intents and groups
    pub id: Uuid,
    /// Display name (e.g., "CRAC-2")
    pub name: String,
    /// Asset kind
    pub kind: AssetKind,
    /// Top-left cell column (0-based)
    pub grid_x: i32,
    /// Top-left cell row (0-based)
    pub grid_y: i32,
    /// Footprint width in cells (may be fractional, e.g. 0.25)
    pub width_cells: f64,
    /// Footprint height in cells (may be fractional)
    pub height_cells: f64,
    /// Collision layer
    pub layer: FloorLayer,
    /// Orientation (stored in radians, serialized as degrees)
    #[serde(default)]
    pub rotation: Rotation,
    /// Group membership, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
}

impl GridAsset {
    /// Creates a new asset with a fresh id and no rotation or group.
    pub fn new(
        name: impl Into<String>,
        kind: AssetKind,
        grid_x: i32,
        grid_y: i32,
        width_cells: f64,
        height_cells: f64,
        layer: FloorLayer,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            grid_x,
            grid_y,
            width_cells,
            height_cells,
            layer,
            rotation: Rotation::ZERO,
            group_id: None,
        }
    }

    /// Sets the rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the group id.
    #[must_use]
    pub fn with_group(mut self, group_id: Uuid) -> Self {
        self.group_id = Some(group_id);
        self
    }
}

/// The floor plan: grid dimensions plus the canonical asset collection.
///
/// Grid dimensions come from the server-confirmed layout record; the
/// engine never resizes the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Grid width in cells
    pub cols: u32,
    /// Grid height in cells
    pub rows: u32,
    /// Pixel size of one cell in the 2D view
    pub cell_size_px: f64,
    /// All placed assets, across all layers
    pub assets: Vec<GridAsset>,
}

impl FloorPlan {
    /// Creates an empty floor plan.
    #[must_use]
    pub const fn new(cols: u32, rows: u32, cell_size_px: f64) -> Self {
        Self {
            cols,
            rows,
            cell_size_px,
            assets: Vec::new(),
        }
    }

    /// Gets an asset by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&GridAsset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Gets a mutable asset by id.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut GridAsset> {
        self.assets.iter_mut().find(|a| a.id == id)
    }

    /// Iterates over the assets on one layer.
    pub fn assets_on_layer(&self, layer: FloorLayer) -> impl Iterator<Item = &GridAsset> {
        self.assets.iter().filter(move |a| a.layer == layer)
    }

    /// Iterates over the members of a group.
    pub fn group_members(&self, group_id: Uuid) -> impl Iterator<Item = &GridAsset> {
        self.assets
            .iter()
            .filter(move |a| a.group_id == Some(group_id))
    }

    /// Adds an asset without placement checks.
    ///
    /// Interactive paths must go through
    /// `FloorPlanGridAllocator::place_asset`; this method exists for
    /// loading already-validated layout records.
    pub fn add(&mut self, asset: GridAsset) {
        self.assets.push(asset);
    }

    /// Removes an asset by id, returning it if present.
    pub fn remove(&mut self, id: Uuid) -> Option<GridAsset> {
        let idx = self.assets.iter().position(|a| a.id == id)?;
        Some(self.assets.remove(idx))
    }
}
