//! End-to-end tests for `rackplan sync`.

use std::process::Command;

mod fixtures;
use fixtures::*;

use rackplan::services::scene_sync::SceneRecord;

fn rackplan_bin() -> &'static str {
    env!("CARGO_BIN_EXE_rackplan")
}

#[test]
fn test_sync_converts_records() {
    let records = vec![
        SceneRecord {
            grid_x: 0,
            grid_y: 0,
            grid_z: 0,
            rotation_radians: 0.0,
        },
        SceneRecord {
            grid_x: 3,
            grid_y: 5,
            grid_z: 0,
            rotation_radians: std::f64::consts::FRAC_PI_2,
        },
    ];
    let (scene_path, _temp_dir) = create_temp_scene_file(&records);

    let output = Command::new(rackplan_bin())
        .args([
            "sync",
            "--scene",
            scene_path.to_str().unwrap(),
            "--rows",
            "6",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    let overlays = result.as_array().unwrap();
    assert_eq!(overlays.len(), 2);

    // rows = 6: padded grid is 8 rows; (0,0) bottom-left -> (1,6)
    assert_eq!(overlays[0]["grid_x"], 1);
    assert_eq!(overlays[0]["grid_y"], 6);
    assert_eq!(overlays[0]["rotation_degrees"], 0);

    // (3,5) top area -> (4,1), π/2 -> 90°
    assert_eq!(overlays[1]["grid_x"], 4);
    assert_eq!(overlays[1]["grid_y"], 1);
    assert_eq!(overlays[1]["rotation_degrees"], 90);
}

#[test]
fn test_sync_rejects_zero_rows() {
    let (scene_path, _temp_dir) = create_temp_scene_file(&[]);

    let output = Command::new(rackplan_bin())
        .args([
            "sync",
            "--scene",
            scene_path.to_str().unwrap(),
            "--rows",
            "0",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3), "Usage error should exit 3");
}

#[test]
fn test_sync_rejects_malformed_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    std::fs::write(&path, "{ not an array").unwrap();

    let output = Command::new(rackplan_bin())
        .args(["sync", "--scene", path.to_str().unwrap(), "--rows", "6"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
}
