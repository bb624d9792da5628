//! Service layer: the spatial engine and its supporting services.
//!
//! Everything here is synchronous and single-threaded: a placement
//! attempt runs to completion inside one call, either mutating the
//! canonical model or leaving it untouched.

pub mod collision;
pub mod drag;
pub mod floor_allocator;
pub mod geometry;
pub mod group_motion;
pub mod layouts;
pub mod rack_allocator;
pub mod scene_sync;
pub mod validator;

pub use drag::{DragPlacementController, DragState, FloatingPreview};
pub use floor_allocator::FloorPlanGridAllocator;
pub use group_motion::GroupMotionResolver;
pub use layouts::LayoutService;
pub use rack_allocator::RackUnitAllocator;
pub use validator::{LayoutValidator, ValidationReport};

use std::fmt;

/// Why a placement attempt was rejected.
///
/// Every variant is recovered locally: the engine leaves the canonical
/// model at its last committed state and the caller decides whether to
/// keep the floating candidate (rack drags) or drop it (floor drags).
/// Nothing here is fatal and nothing propagates past the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Candidate overlaps an existing entity on the same rack or layer.
    Collision {
        /// Display name of the first blocking entity found
        blocking: String,
    },
    /// Candidate exceeds the rack's unit range or the floor-plan grid.
    OutOfBounds,
    /// Group operation on fewer than two assets, or with no shared group.
    InvalidGroupOperation {
        /// Human-readable reason
        reason: String,
    },
    /// Referenced equipment or asset is not in the canonical model.
    ///
    /// Happens when a persistence rollback removed the entity between
    /// the pointer event and the commit; recovered like any rejection.
    UnknownEntity {
        /// The id that failed to resolve
        id: uuid::Uuid,
    },
}

impl PlacementError {
    /// Shorthand for [`PlacementError::UnknownEntity`].
    #[must_use]
    pub const fn unknown(id: uuid::Uuid) -> Self {
        Self::UnknownEntity { id }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collision { blocking } => {
                write!(f, "Placement collides with '{blocking}'")
            }
            Self::OutOfBounds => write!(f, "Placement is out of bounds"),
            Self::InvalidGroupOperation { reason } => {
                write!(f, "Invalid group operation: {reason}")
            }
            Self::UnknownEntity { id } => write!(f, "No entity with id {id}"),
        }
    }
}

impl std::error::Error for PlacementError {}
