//! Atomic multi-asset motion on the floor plan.
//!
//! A group moves as one unit: every member's shifted footprint is
//! validated against all non-member same-layer assets and the grid
//! bounds, and only if every member passes is any member mutated.
//! The atomicity is purely algorithmic (validate all, then commit
//! all inside one synchronous call), not a transactional guarantee.

use uuid::Uuid;

use crate::models::{FloorPlan, PlacementIntent};
use crate::services::collision::CellBox;
use crate::services::floor_allocator::FloorPlanGridAllocator;
use crate::services::PlacementError;

/// Group/ungroup and all-or-nothing group motion.
pub struct GroupMotionResolver;

impl GroupMotionResolver {
    /// Assigns a fresh shared group id to the selected assets.
    ///
    /// Requires at least two assets; each selected id must resolve.
    /// Assets already in another group are moved into the new one.
    pub fn group(plan: &mut FloorPlan, selection: &[Uuid]) -> Result<Uuid, PlacementError> {
        if selection.len() < 2 {
            return Err(PlacementError::InvalidGroupOperation {
                reason: format!("grouping needs at least 2 assets, got {}", selection.len()),
            });
        }
        for &id in selection {
            if plan.get(id).is_none() {
                return Err(PlacementError::unknown(id));
            }
        }

        let group_id = Uuid::new_v4();
        for &id in selection {
            if let Some(asset) = plan.get_mut(id) {
                asset.group_id = Some(group_id);
            }
        }
        Ok(group_id)
    }

    /// Dissolves every group touched by the selection.
    ///
    /// Clears `group_id` on all assets sharing any group id present in
    /// the selection, not just the selected assets themselves. Returns
    /// how many assets were ungrouped.
    pub fn ungroup(plan: &mut FloorPlan, selection: &[Uuid]) -> Result<usize, PlacementError> {
        let touched: Vec<Uuid> = selection
            .iter()
            .filter_map(|&id| plan.get(id).and_then(|a| a.group_id))
            .collect();

        if touched.is_empty() {
            return Err(PlacementError::InvalidGroupOperation {
                reason: "selection has no grouped assets".to_string(),
            });
        }

        let mut cleared = 0;
        for asset in &mut plan.assets {
            if asset.group_id.is_some_and(|gid| touched.contains(&gid)) {
                asset.group_id = None;
                cleared += 1;
            }
        }
        Ok(cleared)
    }

    /// Moves every member of a group by the same cell delta.
    ///
    /// If any member's shifted footprint fails bounds or collides with
    /// a non-member on its layer, no member moves.
    pub fn move_group(
        plan: &mut FloorPlan,
        group_id: Uuid,
        dx: i32,
        dy: i32,
    ) -> Result<Vec<PlacementIntent>, PlacementError> {
        let member_ids: Vec<Uuid> = plan.group_members(group_id).map(|a| a.id).collect();
        if member_ids.is_empty() {
            return Err(PlacementError::InvalidGroupOperation {
                reason: format!("no assets share group {group_id}"),
            });
        }

        // Validate every member before touching any. Members are
        // excluded from the collision scan so the group can slide
        // across its own current footprint.
        for &id in &member_ids {
            let asset = plan.get(id).ok_or_else(|| PlacementError::unknown(id))?;
            let preview = CellBox::from(asset).shifted(f64::from(dx), f64::from(dy));
            FloorPlanGridAllocator::validate(plan, &preview, asset.layer, &member_ids)?;
        }

        let mut intents = Vec::with_capacity(member_ids.len());
        for &id in &member_ids {
            if let Some(asset) = plan.get_mut(id) {
                asset.grid_x += dx;
                asset.grid_y += dy;
                intents.push(PlacementIntent::FloorMove {
                    asset_id: asset.id,
                    grid_x: asset.grid_x,
                    grid_y: asset.grid_y,
                    rotation_degrees: asset.rotation.as_degrees_rounded(),
                });
            }
        }
        Ok(intents)
    }

    /// Rotates every member of a group by the same degree delta.
    ///
    /// Same caveat as single-asset rotation: stored footprints are not
    /// re-validated against the rotated shape.
    pub fn rotate_group(
        plan: &mut FloorPlan,
        group_id: Uuid,
        delta_degrees: f64,
    ) -> Result<Vec<PlacementIntent>, PlacementError> {
        let member_ids: Vec<Uuid> = plan.group_members(group_id).map(|a| a.id).collect();
        if member_ids.is_empty() {
            return Err(PlacementError::InvalidGroupOperation {
                reason: format!("no assets share group {group_id}"),
            });
        }

        let mut intents = Vec::with_capacity(member_ids.len());
        for &id in &member_ids {
            if let Some(asset) = plan.get_mut(id) {
                asset.rotation = asset.rotation.plus_degrees(delta_degrees);
                intents.push(PlacementIntent::FloorMove {
                    asset_id: asset.id,
                    grid_x: asset.grid_x,
                    grid_y: asset.grid_y,
                    rotation_degrees: asset.rotation.as_degrees_rounded(),
                });
            }
        }
        Ok(intents)
    }
}
