//! Drag/placement state machine.
//!
//! Turns palette picks and pointer movement into validated, committed
//! placements. The floating candidate is an explicit value inside
//! [`DragState`], threaded through the controller, so cancellation and
//! tests are deterministic; there is no module-level "current preview"
//! anywhere.
//!
//! Every transition runs synchronously inside the event callback that
//! triggered it: a pointer move recomputes the candidate before the
//! call returns, and a commit either fully mutates the canonical model
//! or leaves it untouched.

use uuid::Uuid;

use crate::models::{
    EquipmentKind, GridAsset, PlacementIntent, Rack, RackEquipment, RackSlotRange,
};
use crate::services::floor_allocator::FloorPlanGridAllocator;
use crate::services::geometry::{pixel_to_grid, world_to_rack_unit, RackFrame};
use crate::services::rack_allocator::RackUnitAllocator;
use crate::services::PlacementError;

/// The uncommitted, pointer-tracked candidate placement.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatingPreview {
    /// A device floating over a rack elevation.
    Rack {
        /// Existing equipment id when re-dragging, `None` when placing
        /// fresh from the palette
        equipment_id: Option<Uuid>,
        /// Display name for the (new) device
        name: String,
        /// Equipment kind
        kind: EquipmentKind,
        /// Device height in units
        size_units: u32,
        /// Candidate bottom unit under the pointer, clamped in-rack
        position: u32,
    },
    /// An existing asset being dragged across the floor plan.
    Floor {
        /// Asset being dragged
        asset_id: Uuid,
        /// Last committed top-left cell, restored on cancel/reject
        origin: (i32, i32),
        /// Candidate top-left cell under the pointer
        candidate: (i32, i32),
    },
}

/// Controller state: idle, or tracking one floating candidate.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// Nothing selected, pointer moves are ignored
    #[default]
    Idle,
    /// A candidate tracks the pointer until commit or cancel
    Floating(FloatingPreview),
}

/// State machine turning pointer input into validated placements.
///
/// Holds the pixel geometry of the active views; the canonical model
/// is passed in at commit time so the controller never owns it.
#[derive(Debug, Clone)]
pub struct DragPlacementController {
    frame: RackFrame,
    header_padding: f64,
    cell_size: f64,
    state: DragState,
}

impl DragPlacementController {
    /// Creates an idle controller for the given view geometry.
    #[must_use]
    pub const fn new(frame: RackFrame, header_padding: f64, cell_size: f64) -> Self {
        Self {
            frame,
            header_padding,
            cell_size,
            state: DragState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Current floating candidate, if any.
    #[must_use]
    pub const fn floating(&self) -> Option<&FloatingPreview> {
        match &self.state {
            DragState::Idle => None,
            DragState::Floating(preview) => Some(preview),
        }
    }

    /// Enters `Floating` with a fresh palette device over the rack.
    ///
    /// The candidate starts at unit 1 and follows the pointer from the
    /// first move on.
    pub fn begin_rack_placement(
        &mut self,
        name: impl Into<String>,
        kind: EquipmentKind,
        size_units: u32,
    ) {
        self.state = DragState::Floating(FloatingPreview::Rack {
            equipment_id: None,
            name: name.into(),
            kind,
            size_units,
            position: 1,
        });
    }

    /// Enters `Floating` re-dragging already-mounted equipment.
    pub fn begin_rack_redrag(&mut self, equipment: &RackEquipment) {
        self.state = DragState::Floating(FloatingPreview::Rack {
            equipment_id: Some(equipment.id),
            name: equipment.name.clone(),
            kind: equipment.kind,
            size_units: equipment.slot.size,
            position: equipment.slot.start,
        });
    }

    /// Enters `Floating` dragging an existing floor-plan asset.
    pub fn begin_floor_drag(&mut self, asset: &GridAsset) {
        self.state = DragState::Floating(FloatingPreview::Floor {
            asset_id: asset.id,
            origin: (asset.grid_x, asset.grid_y),
            candidate: (asset.grid_x, asset.grid_y),
        });
    }

    /// Recomputes the candidate from the latest pointer sample.
    ///
    /// Synchronous and unbuffered: the preview always reflects the last
    /// sample when this returns. Ignored while idle.
    pub fn pointer_moved(&mut self, px: f64, py: f64) {
        match &mut self.state {
            DragState::Idle => {}
            DragState::Floating(FloatingPreview::Rack {
                size_units,
                position,
                ..
            }) => {
                let unit = world_to_rack_unit(py, &self.frame);
                let clamped = RackUnitAllocator::clamp_to_rack(
                    RackSlotRange {
                        start: unit,
                        size: *size_units,
                    },
                    self.frame.unit_count,
                );
                *position = clamped.start;
            }
            DragState::Floating(FloatingPreview::Floor { candidate, .. }) => {
                *candidate = pixel_to_grid(px, py, self.header_padding, self.cell_size);
            }
        }
    }

    /// Discards the candidate and returns to `Idle`.
    ///
    /// Covers pointer-release outside a valid target and external
    /// navigation-away events; the canonical model was never touched,
    /// so there is nothing else to restore.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Attempts to commit a rack candidate into `rack`.
    ///
    /// Returns `None` when no rack candidate is floating. On success
    /// the equipment is inserted (or its slot updated), the controller
    /// goes `Idle`, and the emitted intent is returned. On rejection
    /// the controller **stays `Floating`** with the same candidate so
    /// the user can keep repositioning.
    pub fn commit_rack(
        &mut self,
        rack: &mut Rack,
    ) -> Option<Result<PlacementIntent, PlacementError>> {
        let DragState::Floating(FloatingPreview::Rack {
            equipment_id,
            name,
            kind,
            size_units,
            position,
        }) = &self.state
        else {
            return None;
        };

        let candidate = RackSlotRange {
            start: *position,
            size: *size_units,
        };
        let resolved = RackUnitAllocator::resolve_drop(
            candidate,
            &rack.equipment,
            *equipment_id,
            rack.unit_count,
        );

        match resolved {
            Ok(slot) => {
                let intent = if let Some(id) = equipment_id {
                    // Re-drag: replace the committed slot
                    let Some(existing) = rack.get_mut(*id) else {
                        return Some(Err(PlacementError::unknown(*id)));
                    };
                    existing.slot = slot;
                    PlacementIntent::RackMove {
                        equipment_id: *id,
                        new_slot: slot,
                    }
                } else {
                    let equipment = RackEquipment::new(name.clone(), *kind, slot);
                    let id = equipment.id;
                    rack.add(equipment);
                    PlacementIntent::RackMove {
                        equipment_id: id,
                        new_slot: slot,
                    }
                };
                self.state = DragState::Idle;
                Some(Ok(intent))
            }
            // Stay floating: the user keeps repositioning the same candidate
            Err(err) => Some(Err(err)),
        }
    }

    /// Attempts to commit a floor candidate into `plan`.
    ///
    /// Returns `None` when no floor candidate is floating. Success
    /// commits the move and goes `Idle`. Rejection also goes `Idle`,
    /// discarding the candidate: the asset stays at its last committed
    /// position and the error is reported once.
    pub fn commit_floor(
        &mut self,
        plan: &mut crate::models::FloorPlan,
    ) -> Option<Result<PlacementIntent, PlacementError>> {
        let DragState::Floating(FloatingPreview::Floor {
            asset_id,
            origin,
            candidate,
        }) = &self.state
        else {
            return None;
        };

        let (dx, dy) = (candidate.0 - origin.0, candidate.1 - origin.1);
        let result = FloorPlanGridAllocator::move_asset(plan, *asset_id, dx, dy);
        self.state = DragState::Idle;
        Some(result)
    }
}
