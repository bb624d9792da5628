//! Rack elevation data structures.
//!
//! A rack is a 1-D column of equal-height units, numbered 1 at the
//! bottom to `unit_count` at the top. Equipment occupies a contiguous
//! span of whole units; the placement rules live in
//! `services::rack_allocator`, these types only carry the data.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_UNIT_COUNT;

/// Contiguous span of rack units occupied by one piece of equipment.
///
/// A range with `start = 3, size = 2` occupies units 3 and 4.
///
/// # Validation
///
/// - `start` must be >= 1 (unit numbering is 1-based)
/// - `size` must be >= 1
/// - `start + size - 1` must be <= the owning rack's `unit_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RackSlotRange {
    /// Lowest occupied unit (1-based, bottom of the device)
    pub start: u32,
    /// Number of units occupied (device height in U)
    pub size: u32,
}

impl RackSlotRange {
    /// Creates a new slot range after checking the 1-based/non-empty rules.
    ///
    /// Fit against a specific rack height is checked at placement time,
    /// not here, because the same range value may be tested against
    /// racks of different heights.
    pub fn new(start: u32, size: u32) -> Result<Self> {
        if start < 1 {
            anyhow::bail!("Slot range start must be >= 1 (got {start})");
        }
        if size < 1 {
            anyhow::bail!("Slot range size must be >= 1 (got {size})");
        }
        Ok(Self { start, size })
    }

    /// Lowest occupied unit (same as `start`).
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.start
    }

    /// Highest occupied unit.
    #[must_use]
    pub const fn top(&self) -> u32 {
        self.start + self.size - 1
    }

    /// Returns true if the given unit falls inside this range.
    #[must_use]
    pub const fn contains_unit(&self, unit: u32) -> bool {
        unit >= self.bottom() && unit <= self.top()
    }

    /// Returns true if this range lies fully within `[1, unit_count]`.
    #[must_use]
    pub const fn fits(&self, unit_count: u32) -> bool {
        self.start >= 1 && self.top() <= unit_count
    }
}

/// Kind of rack-mounted equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    /// General-purpose server
    Server,
    /// Network switch
    Switch,
    /// Patch panel
    PatchPanel,
    /// Power distribution unit
    Pdu,
    /// Storage array
    Storage,
    /// Blanking panel (occupies units, no function)
    Blank,
}

/// A device mounted in a rack.
///
/// Created when a drag/click placement commits; its `slot` is replaced
/// on every committed re-drag. The no-overlap and in-bounds invariants
/// are enforced by the allocator before any mutation lands here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RackEquipment {
    /// Stable identifier, referenced by placement intents
    pub id: Uuid,
    /// Display name (e.g., "db-primary-01")
    pub name: String,
    /// Equipment kind
    pub kind: EquipmentKind,
    /// Occupied unit span
    pub slot: RackSlotRange,
}

impl RackEquipment {
    /// Creates a new piece of equipment with a fresh id.
    pub fn new(name: impl Into<String>, kind: EquipmentKind, slot: RackSlotRange) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            slot,
        }
    }
}

/// A rack and its mounted equipment.
///
/// This is the canonical collection for one rack: commits mutate it
/// directly, rejected placements leave it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rack {
    /// Stable identifier
    pub id: Uuid,
    /// Display name (e.g., "Row A / Rack 3")
    pub name: String,
    /// Total unit count (default 42)
    pub unit_count: u32,
    /// Mounted equipment
    pub equipment: Vec<RackEquipment>,
}

impl Rack {
    /// Creates an empty rack with the default 42-unit height.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_unit_count(name, DEFAULT_UNIT_COUNT)
    }

    /// Creates an empty rack with an explicit unit count.
    pub fn with_unit_count(name: impl Into<String>, unit_count: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit_count,
            equipment: Vec::new(),
        }
    }

    /// Gets a piece of equipment by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&RackEquipment> {
        self.equipment.iter().find(|e| e.id == id)
    }

    /// Gets a mutable piece of equipment by id.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut RackEquipment> {
        self.equipment.iter_mut().find(|e| e.id == id)
    }

    /// Gets the equipment occupying the given unit, if any.
    #[must_use]
    pub fn equipment_at(&self, unit: u32) -> Option<&RackEquipment> {
        self.equipment.iter().find(|e| e.slot.contains_unit(unit))
    }

    /// Adds equipment without placement checks.
    ///
    /// Callers that react to user input must go through
    /// `RackUnitAllocator::resolve_drop` first; this method exists for
    /// loading already-validated layout records.
    pub fn add(&mut self, equipment: RackEquipment) {
        self.equipment.push(equipment);
    }

    /// Removes equipment by id, returning it if present.
    pub fn remove(&mut self, id: Uuid) -> Option<RackEquipment> {
        let idx = self.equipment.iter().position(|e| e.id == id)?;
        Some(self.equipment.remove(idx))
    }

    /// Number of units currently occupied.
    #[must_use]
    pub fn occupied_units(&self) -> u32 {
        self.equipment.iter().map(|e| e.slot.size).sum()
    }

    /// Number of units currently free.
    #[must_use]
    pub fn free_units(&self) -> u32 {
        self.unit_count.saturating_sub(self.occupied_units())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_range_bounds() {
        let range = RackSlotRange::new(3, 2).unwrap();
        assert_eq!(range.bottom(), 3);
        assert_eq!(range.top(), 4);
        assert!(range.contains_unit(3));
        assert!(range.contains_unit(4));
        assert!(!range.contains_unit(5));
    }

    #[test]
    fn test_slot_range_rejects_zero_start() {
        assert!(RackSlotRange::new(0, 1).is_err());
        assert!(RackSlotRange::new(1, 0).is_err());
    }

    #[test]
    fn test_slot_range_fits() {
        let range = RackSlotRange::new(41, 2).unwrap();
        assert!(range.fits(42));
        assert!(!range.fits(41));
    }

    #[test]
    fn test_rack_equipment_lookup() {
        let mut rack = Rack::new("Row A / Rack 1");
        let eq = RackEquipment::new(
            "sw-core-01",
            EquipmentKind::Switch,
            RackSlotRange::new(40, 1).unwrap(),
        );
        let id = eq.id;
        rack.add(eq);

        assert!(rack.get(id).is_some());
        assert!(rack.equipment_at(40).is_some());
        assert!(rack.equipment_at(39).is_none());
        assert_eq!(rack.occupied_units(), 1);
        assert_eq!(rack.free_units(), 41);
    }

    #[test]
    fn test_rack_remove() {
        let mut rack = Rack::new("Rack");
        let eq = RackEquipment::new(
            "srv",
            EquipmentKind::Server,
            RackSlotRange::new(1, 2).unwrap(),
        );
        let id = eq.id;
        rack.add(eq);

        assert!(rack.remove(id).is_some());
        assert!(rack.remove(id).is_none());
        assert!(rack.equipment.is_empty());
    }
}
