//! Whole-layout invariant validation.
//!
//! The allocators keep invariants true for every interactive mutation;
//! this validator re-checks a complete `RoomLayout` record, which may
//! come from disk or from a backend and cannot be trusted to have gone
//! through the allocators. Used by the `validate` CLI command.

use std::fmt;

use crate::models::RoomLayout;
use crate::services::collision::{CellBox, Footprint};
use crate::services::floor_allocator::FloorPlanGridAllocator;
use crate::services::rack_allocator::RackUnitAllocator;

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Invariant violations
    pub errors: Vec<ValidationError>,
    /// Non-critical findings
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Which invariant a validation error violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two devices on one rack share units
    RackOverlap,
    /// A slot range exceeds its rack's unit range
    RackOutOfBounds,
    /// Two same-layer assets share cells
    FloorOverlap,
    /// An asset's footprint leaves the grid
    FloorOutOfBounds,
    /// An asset has a non-positive footprint
    DegenerateFootprint,
}

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Violated invariant
    pub kind: ValidationErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Rack or asset the error refers to
    pub entity: Option<String>,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            entity: None,
        }
    }

    #[must_use]
    fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity {
            Some(entity) => write!(f, "[{entity}] {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Non-critical finding.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Human-readable warning message
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates a room layout against the spatial invariants.
pub struct LayoutValidator<'a> {
    layout: &'a RoomLayout,
}

impl<'a> LayoutValidator<'a> {
    /// Creates a validator for the given layout.
    #[must_use]
    pub const fn new(layout: &'a RoomLayout) -> Self {
        Self { layout }
    }

    /// Runs every check and collects the findings.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        self.check_racks(&mut report);
        self.check_floor_plan(&mut report);
        self.check_groups(&mut report);
        report
    }

    fn check_racks(&self, report: &mut ValidationReport) {
        for rack in &self.layout.racks {
            for (i, eq) in rack.equipment.iter().enumerate() {
                if !eq.slot.fits(rack.unit_count) {
                    report.errors.push(
                        ValidationError::new(
                            ValidationErrorKind::RackOutOfBounds,
                            format!(
                                "'{}' occupies U{}-U{} outside 1-{}",
                                eq.name,
                                eq.slot.bottom(),
                                eq.slot.top(),
                                rack.unit_count
                            ),
                        )
                        .with_entity(&rack.name),
                    );
                }
                for other in &rack.equipment[i + 1..] {
                    if RackUnitAllocator::overlaps(eq.slot, other.slot) {
                        report.errors.push(
                            ValidationError::new(
                                ValidationErrorKind::RackOverlap,
                                format!("'{}' overlaps '{}'", eq.name, other.name),
                            )
                            .with_entity(&rack.name),
                        );
                    }
                }
            }
        }
    }

    fn check_floor_plan(&self, report: &mut ValidationReport) {
        let plan = &self.layout.floor_plan;
        for (i, asset) in plan.assets.iter().enumerate() {
            if asset.width_cells <= 0.0 || asset.height_cells <= 0.0 {
                report.errors.push(
                    ValidationError::new(
                        ValidationErrorKind::DegenerateFootprint,
                        format!(
                            "'{}' has footprint {}x{}",
                            asset.name, asset.width_cells, asset.height_cells
                        ),
                    )
                    .with_entity(asset.layer.label()),
                );
                continue;
            }
            if !FloorPlanGridAllocator::in_bounds(&CellBox::from(asset), plan.cols, plan.rows) {
                report.errors.push(
                    ValidationError::new(
                        ValidationErrorKind::FloorOutOfBounds,
                        format!(
                            "'{}' at ({}, {}) leaves the {}x{} grid",
                            asset.name, asset.grid_x, asset.grid_y, plan.cols, plan.rows
                        ),
                    )
                    .with_entity(asset.layer.label()),
                );
            }
            for other in &plan.assets[i + 1..] {
                if other.layer == asset.layer
                    && CellBox::from(asset).intersects(&CellBox::from(other))
                {
                    report.errors.push(
                        ValidationError::new(
                            ValidationErrorKind::FloorOverlap,
                            format!("'{}' overlaps '{}'", asset.name, other.name),
                        )
                        .with_entity(asset.layer.label()),
                    );
                }
            }
        }
    }

    fn check_groups(&self, report: &mut ValidationReport) {
        let plan = &self.layout.floor_plan;
        let mut group_ids: Vec<uuid::Uuid> = plan.assets.iter().filter_map(|a| a.group_id).collect();
        group_ids.sort_unstable();
        group_ids.dedup();

        for gid in group_ids {
            let count = plan.group_members(gid).count();
            if count < 2 {
                report.warnings.push(ValidationWarning {
                    message: format!("Group {gid} has only {count} member"),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AssetKind, EquipmentKind, FloorLayer, GridAsset, Rack, RackEquipment, RackSlotRange,
        RoomLayout,
    };

    fn layout() -> RoomLayout {
        RoomLayout::new("Room").unwrap()
    }

    fn equipment(name: &str, start: u32, size: u32) -> RackEquipment {
        RackEquipment::new(
            name,
            EquipmentKind::Server,
            RackSlotRange::new(start, size).unwrap(),
        )
    }

    #[test]
    fn test_valid_layout_passes() {
        let mut layout = layout();
        let mut rack = Rack::new("Rack 1");
        rack.add(equipment("a", 1, 1));
        rack.add(equipment("b", 3, 3));
        layout.racks.push(rack);
        layout.floor_plan.add(GridAsset::new(
            "rack-a",
            AssetKind::Rack,
            1,
            1,
            2.0,
            2.0,
            FloorLayer::Floor,
        ));

        let report = LayoutValidator::new(&layout).validate();
        assert!(report.is_valid(), "{:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_detects_rack_overlap() {
        let mut layout = layout();
        let mut rack = Rack::new("Rack 1");
        rack.add(equipment("a", 1, 3));
        rack.add(equipment("b", 3, 2));
        layout.racks.push(rack);

        let report = LayoutValidator::new(&layout).validate();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ValidationErrorKind::RackOverlap);
    }

    #[test]
    fn test_detects_rack_out_of_bounds() {
        let mut layout = layout();
        let mut rack = Rack::new("Rack 1");
        rack.add(equipment("a", 42, 2));
        layout.racks.push(rack);

        let report = LayoutValidator::new(&layout).validate();
        assert_eq!(report.errors[0].kind, ValidationErrorKind::RackOutOfBounds);
    }

    #[test]
    fn test_detects_floor_overlap_same_layer_only() {
        let mut layout = layout();
        layout.floor_plan.add(GridAsset::new(
            "a",
            AssetKind::Rack,
            1,
            1,
            2.0,
            2.0,
            FloorLayer::Floor,
        ));
        layout.floor_plan.add(GridAsset::new(
            "b",
            AssetKind::CableTray,
            1,
            1,
            2.0,
            2.0,
            FloorLayer::Overhead,
        ));

        let report = LayoutValidator::new(&layout).validate();
        assert!(report.is_valid());

        layout.floor_plan.add(GridAsset::new(
            "c",
            AssetKind::CracUnit,
            2,
            2,
            2.0,
            2.0,
            FloorLayer::Floor,
        ));
        let report = LayoutValidator::new(&layout).validate();
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ValidationErrorKind::FloorOverlap);
    }

    #[test]
    fn test_warns_on_single_member_group() {
        let mut layout = layout();
        let asset = GridAsset::new("a", AssetKind::Rack, 1, 1, 1.0, 1.0, FloorLayer::Floor)
            .with_group(uuid::Uuid::new_v4());
        layout.floor_plan.add(asset);

        let report = LayoutValidator::new(&layout).validate();
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
