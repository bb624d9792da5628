//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

use rackplan::models::{
    AssetKind, EquipmentKind, FloorLayer, GridAsset, Rack, RackEquipment, RackSlotRange,
    RoomLayout,
};
use rackplan::services::scene_sync::SceneRecord;
use rackplan::services::LayoutService;

/// A valid layout: one rack with two devices, a floor rack and an
/// overhead tray crossing above it.
pub fn room_layout_basic() -> RoomLayout {
    let mut layout = RoomLayout::new("Server Room B").unwrap();

    let mut rack = Rack::new("Row A / Rack 1");
    rack.add(RackEquipment::new(
        "pdu-1",
        EquipmentKind::Pdu,
        RackSlotRange::new(1, 1).unwrap(),
    ));
    rack.add(RackEquipment::new(
        "db-01",
        EquipmentKind::Server,
        RackSlotRange::new(3, 3).unwrap(),
    ));
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
    layout.floor_plan.add(GridAsset::new(
        "tray-1",
        AssetKind::CableTray,
        1,
        1,
        6.0,
        0.25,
        FloorLayer::Overhead,
    ));

    layout
}

/// A layout violating the rack no-overlap invariant.
pub fn room_layout_with_rack_overlap() -> RoomLayout {
    let mut layout = RoomLayout::new("Broken Room").unwrap();
    let mut rack = Rack::new("Rack 1");
    rack.add(RackEquipment::new(
        "a",
        EquipmentKind::Server,
        RackSlotRange::new(1, 3).unwrap(),
    ));
    rack.add(RackEquipment::new(
        "b",
        EquipmentKind::Server,
        RackSlotRange::new(3, 2).unwrap(),
    ));
    layout.racks.push(rack);
    layout
}

/// A layout violating the floor in-bounds invariant.
pub fn room_layout_with_floor_out_of_bounds() -> RoomLayout {
    let mut layout = RoomLayout::new("Broken Room").unwrap();
    let cols = layout.floor_plan.cols;
    layout.floor_plan.add(GridAsset::new(
        "crac-far",
        AssetKind::CracUnit,
        cols as i32 - 1,
        0,
        2.0,
        2.0,
        FloorLayer::Floor,
    ));
    layout
}

/// Writes a layout to a temp JSON file; keep the `TempDir` alive while
/// the path is in use.
pub fn create_temp_layout_file(layout: &RoomLayout) -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("layout.json");
    LayoutService::save(layout, &path).expect("Failed to write layout fixture");
    (path, dir)
}

/// Writes scene records to a temp JSON file.
pub fn create_temp_scene_file(records: &[SceneRecord]) -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scene.json");
    let json = serde_json::to_string_pretty(records).expect("Failed to serialize scene records");
    std::fs::write(&path, json).expect("Failed to write scene fixture");
    (path, dir)
}
