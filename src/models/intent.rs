//! Placement intents handed to the persistence collaborator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::RackSlotRange;

/// A committed placement, ready to be shipped to the backend.
///
/// The engine emits one intent per successful commit; network
/// transport, retries, and rollback on remote failure belong to the
/// collaborator. Rotations cross this boundary as whole degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacementIntent {
    /// Equipment moved (or first placed) within a rack.
    RackMove {
        /// Equipment identifier
        equipment_id: Uuid,
        /// New committed unit span
        new_slot: RackSlotRange,
    },
    /// Asset moved or rotated on the floor plan.
    FloorMove {
        /// Asset identifier
        asset_id: Uuid,
        /// New top-left cell column
        grid_x: i32,
        /// New top-left cell row
        grid_y: i32,
        /// New orientation, nearest whole degree in `[0, 360)`
        rotation_degrees: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serialization_shape() {
        let intent = PlacementIntent::FloorMove {
            asset_id: Uuid::nil(),
            grid_x: 3,
            grid_y: 5,
            rotation_degrees: 90,
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["kind"], "floor_move");
        assert_eq!(json["grid_x"], 3);
        assert_eq!(json["rotation_degrees"], 90);
    }
}
