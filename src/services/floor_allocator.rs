//! 2-D grid allocation for the floor plan.
//!
//! Horizontal placement rules: layer-gated AABB overlap, grid bounds,
//! and the commit paths for placing, moving, and rotating a single
//! asset. Group motion builds on these checks in
//! `services::group_motion`.

use uuid::Uuid;

use crate::models::{FloorPlan, GridAsset, PlacementIntent};
use crate::services::collision::{CellBox, Footprint};
use crate::services::PlacementError;

/// Placement rules for the floor-plan grid.
pub struct FloorPlanGridAllocator;

impl FloorPlanGridAllocator {
    /// Returns true if two assets overlap.
    ///
    /// Assets on different layers never collide, whatever their boxes.
    #[must_use]
    pub fn overlaps(a: &GridAsset, b: &GridAsset) -> bool {
        a.layer == b.layer && CellBox::from(a).intersects(&CellBox::from(b))
    }

    /// Returns true if the footprint lies fully inside the grid.
    #[must_use]
    pub fn in_bounds(footprint: &CellBox, cols: u32, rows: u32) -> bool {
        footprint.within(&CellBox::grid(cols, rows))
    }

    /// Finds the first asset blocking `candidate` on the given layer.
    #[must_use]
    pub fn find_collision<'a>(
        plan: &'a FloorPlan,
        candidate: &CellBox,
        layer: crate::models::FloorLayer,
        exclude: &[Uuid],
    ) -> Option<&'a GridAsset> {
        plan.assets_on_layer(layer)
            .filter(|a| !exclude.contains(&a.id))
            .find(|a| candidate.intersects(&CellBox::from(*a)))
    }

    /// Validates a candidate footprint: bounds first, then collision.
    pub fn validate(
        plan: &FloorPlan,
        candidate: &CellBox,
        layer: crate::models::FloorLayer,
        exclude: &[Uuid],
    ) -> Result<(), PlacementError> {
        if !Self::in_bounds(candidate, plan.cols, plan.rows) {
            return Err(PlacementError::OutOfBounds);
        }
        if let Some(blocking) = Self::find_collision(plan, candidate, layer, exclude) {
            return Err(PlacementError::Collision {
                blocking: blocking.name.clone(),
            });
        }
        Ok(())
    }

    /// Places a new asset, committing only if bounds and overlap pass.
    ///
    /// On `Err` the plan is untouched and the asset is handed back
    /// inside the error path by simply not being added.
    pub fn place_asset(
        plan: &mut FloorPlan,
        asset: GridAsset,
    ) -> Result<PlacementIntent, PlacementError> {
        Self::validate(plan, &CellBox::from(&asset), asset.layer, &[])?;

        let intent = PlacementIntent::FloorMove {
            asset_id: asset.id,
            grid_x: asset.grid_x,
            grid_y: asset.grid_y,
            rotation_degrees: asset.rotation.as_degrees_rounded(),
        };
        plan.add(asset);
        Ok(intent)
    }

    /// Moves an asset by a cell delta, committing only if the shifted
    /// footprint passes bounds and overlap against all other same-layer
    /// assets.
    pub fn move_asset(
        plan: &mut FloorPlan,
        id: Uuid,
        dx: i32,
        dy: i32,
    ) -> Result<PlacementIntent, PlacementError> {
        let asset = plan.get(id).ok_or_else(|| PlacementError::unknown(id))?;
        let preview = CellBox::from(asset).shifted(f64::from(dx), f64::from(dy));
        let layer = asset.layer;

        Self::validate(plan, &preview, layer, &[id])?;

        let asset = plan.get_mut(id).ok_or_else(|| PlacementError::unknown(id))?;
        asset.grid_x += dx;
        asset.grid_y += dy;
        Ok(PlacementIntent::FloorMove {
            asset_id: asset.id,
            grid_x: asset.grid_x,
            grid_y: asset.grid_y,
            rotation_degrees: asset.rotation.as_degrees_rounded(),
        })
    }

    /// Rotates an asset by a degree delta, normalizing the stored angle.
    ///
    /// Rotation does not re-validate footprint overlap: the stored
    /// footprint stays the unrotated width x height box. Whether a
    /// rotated non-square asset should re-check its neighbours is an
    /// open product question; until it is answered the behaviour of the
    /// original system is kept.
    pub fn rotate_asset(
        plan: &mut FloorPlan,
        id: Uuid,
        delta_degrees: f64,
    ) -> Result<PlacementIntent, PlacementError> {
        let asset = plan.get_mut(id).ok_or_else(|| PlacementError::unknown(id))?;
        asset.rotation = asset.rotation.plus_degrees(delta_degrees);
        Ok(PlacementIntent::FloorMove {
            asset_id: asset.id,
            grid_x: asset.grid_x,
            grid_y: asset.grid_y,
            rotation_degrees: asset.rotation.as_degrees_rounded(),
        })
    }
}
