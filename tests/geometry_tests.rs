//! Coordinate transform properties across the public API.

use rackplan::models::Rotation;
use rackplan::services::geometry::{
    grid_to_pixel, pixel_to_grid, rack_unit_to_pixel_y, scene_to_overlay_cell, world_to_rack_unit,
    RackFrame,
};
use rackplan::services::scene_sync::{overlay_to_scene, scene_to_overlay, SceneRecord};

fn frame() -> RackFrame {
    RackFrame::new(8.0, 20.0, 42)
}

#[test]
fn pixel_grid_round_trip_recovers_cell_for_interior_points() {
    let (pad, cell) = (8.0, 32.0);
    for gx in 0..20 {
        for gy in 0..20 {
            let (px, py) = grid_to_pixel(gx, gy, pad, cell);
            for (ox, oy) in [(0.0, 0.0), (0.5, 0.5), (31.9, 31.9), (15.0, 0.1)] {
                assert_eq!(
                    pixel_to_grid(px + ox, py + oy, pad, cell),
                    (gx, gy),
                    "offset ({ox}, {oy}) left cell ({gx}, {gy})"
                );
            }
        }
    }
}

#[test]
fn rack_unit_to_pixel_y_is_strictly_decreasing() {
    let f = frame();
    for height in [1_u32, 2, 4] {
        let mut last = f64::INFINITY;
        for position in 1..=f.unit_count {
            let y = rack_unit_to_pixel_y(position, height, &f);
            assert!(y < last, "height {height}, position {position}");
            last = y;
        }
    }
}

#[test]
fn world_to_rack_unit_clamps_raw_zero_to_one() {
    let f = frame();
    // One pixel below the last unit row: raw position would be 0
    let below = f.base_y + f.height_px() + 1.0;
    assert_eq!(world_to_rack_unit(below, &f), 1);
}

#[test]
fn overlay_mapping_pads_by_one_and_flips() {
    let rows = 30;
    // Scene origin (bottom-left) lands at the overlay's bottom-left,
    // inside the pad ring
    assert_eq!(scene_to_overlay_cell(0, 0, rows), (1, 30));
    // Scene top row lands at overlay row 1
    assert_eq!(scene_to_overlay_cell(0, 29, rows), (1, 1));
}

#[test]
fn scene_overlay_round_trip_is_exact() {
    let rows = 30;
    for x in 0..40_i64 {
        for y in 0..30_i64 {
            let record = SceneRecord {
                grid_x: x,
                grid_y: y,
                grid_z: 0,
                rotation_radians: 0.0,
            };
            let back = overlay_to_scene(&scene_to_overlay(&record, rows), rows, 0);
            assert_eq!((back.grid_x, back.grid_y), (x, y));
        }
    }
}

#[test]
fn scene_rotation_crosses_boundary_as_nearest_degree() {
    let record = SceneRecord {
        grid_x: 0,
        grid_y: 0,
        grid_z: 0,
        rotation_radians: std::f64::consts::PI,
    };
    assert_eq!(scene_to_overlay(&record, 10).rotation_degrees, 180);
}

#[test]
fn four_quarter_turns_restore_rotation() {
    let original = Rotation::from_degrees(0.0);
    let mut r = original;
    for _ in 0..4 {
        r = r.plus_degrees(90.0);
    }
    assert_eq!(r.as_degrees_rounded(), original.as_degrees_rounded());
}

#[test]
fn eight_forty_five_degree_turns_restore_rotation() {
    let mut r = Rotation::from_degrees(90.0);
    for _ in 0..8 {
        r = r.plus_degrees(45.0);
    }
    assert_eq!(r.as_degrees_rounded(), 90);
}
