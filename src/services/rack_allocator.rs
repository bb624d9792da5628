//! 1-D slot allocation for rack elevations.
//!
//! All vertical placement rules live here: overlap against mounted
//! equipment, clamping to the unit range, pixel snapping during drags,
//! and the final accept/reject decision for a drop.

use uuid::Uuid;

use crate::models::{RackEquipment, RackSlotRange};
use crate::services::collision::{Footprint, UnitSpan};
use crate::services::geometry::RackFrame;
use crate::services::PlacementError;

/// Placement rules for the 1-D rack unit axis.
pub struct RackUnitAllocator;

impl RackUnitAllocator {
    /// Returns true if two slot ranges share any unit.
    #[must_use]
    pub fn overlaps(a: RackSlotRange, b: RackSlotRange) -> bool {
        UnitSpan::from(a).intersects(&UnitSpan::from(b))
    }

    /// Finds the first mounted equipment blocking `candidate`.
    ///
    /// `exclude` skips the equipment being re-dragged so it never
    /// collides with its own committed position.
    #[must_use]
    pub fn find_collision(
        candidate: RackSlotRange,
        existing: &[RackEquipment],
        exclude: Option<Uuid>,
    ) -> Option<&RackEquipment> {
        existing
            .iter()
            .filter(|e| Some(e.id) != exclude)
            .find(|e| Self::overlaps(candidate, e.slot))
    }

    /// Returns true if `candidate` collides with any non-excluded equipment.
    #[must_use]
    pub fn has_collision(
        candidate: RackSlotRange,
        existing: &[RackEquipment],
        exclude: Option<Uuid>,
    ) -> bool {
        Self::find_collision(candidate, existing, exclude).is_some()
    }

    /// Shifts a range (size fixed) so it fits `[1, unit_count]`.
    ///
    /// A range taller than the rack cannot fit; it is pinned to start 1
    /// and left for the bounds check to reject.
    #[must_use]
    pub fn clamp_to_rack(range: RackSlotRange, unit_count: u32) -> RackSlotRange {
        let max_start = unit_count.saturating_sub(range.size).saturating_add(1);
        RackSlotRange {
            start: range.start.clamp(1, max_start.max(1)),
            size: range.size,
        }
    }

    /// Snaps a dragged device's top-edge pixel Y onto a unit boundary.
    ///
    /// The Y is first clamped so the device stays fully inside the unit
    /// area, then rounded to the nearest `unit_height` multiple, so the
    /// preview always sits on a whole-U boundary while dragging.
    #[must_use]
    pub fn drag_snap(pointer_y: f64, dragged_height_px: f64, frame: &RackFrame) -> f64 {
        let min_y = frame.base_y;
        let max_y = frame.base_y + frame.height_px() - dragged_height_px;
        let clamped = pointer_y.clamp(min_y, max_y.max(min_y));
        let steps = ((clamped - frame.base_y) / frame.unit_height).round();
        frame.base_y + steps * frame.unit_height
    }

    /// Decides a drop: bounds first, then collision.
    ///
    /// On `Err` the caller restores the device to its last committed
    /// position; no partial state survives a rejected drop.
    pub fn resolve_drop(
        candidate: RackSlotRange,
        existing: &[RackEquipment],
        exclude: Option<Uuid>,
        unit_count: u32,
    ) -> Result<RackSlotRange, PlacementError> {
        if !candidate.fits(unit_count) {
            return Err(PlacementError::OutOfBounds);
        }
        if let Some(blocking) = Self::find_collision(candidate, existing, exclude) {
            return Err(PlacementError::Collision {
                blocking: blocking.name.clone(),
            });
        }
        Ok(candidate)
    }
}
