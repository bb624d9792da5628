//! Data structures for racks, floor plans, and layout records.

pub mod floor_plan;
pub mod intent;
pub mod layout;
pub mod rack;
pub mod rotation;

pub use floor_plan::{AssetKind, FloorLayer, FloorPlan, GridAsset};
pub use intent::PlacementIntent;
pub use layout::{LayoutMetadata, RoomLayout};
pub use rack::{EquipmentKind, Rack, RackEquipment, RackSlotRange};
pub use rotation::Rotation;
