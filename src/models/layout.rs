//! Room layout record and metadata data structures.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
use crate::models::{FloorPlan, Rack};

/// Metadata embedded in a room layout record.
///
/// # Validation
///
/// - name must be non-empty, max 100 characters
/// - version must match supported versions (currently "1.0")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    /// Layout name (e.g., "Server Room B, 2nd floor")
    pub name: String,
    /// Long description
    pub description: String,
    /// Creator name
    pub author: String,
    /// Creation timestamp (ISO 8601)
    pub created: DateTime<Utc>,
    /// Last modification timestamp (ISO 8601)
    pub modified: DateTime<Utc>,
    /// Schema version (e.g., "1.0")
    pub version: String,
}

impl LayoutMetadata {
    /// Creates new metadata with default values.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            name,
            description: String::new(),
            author: String::new(),
            created: now,
            modified: now,
            version: "1.0".to_string(),
        })
    }

    /// Validates a metadata name.
    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("Layout name must not be empty");
        }
        if name.len() > 100 {
            anyhow::bail!("Layout name must be at most 100 characters (got {})", name.len());
        }
        Ok(())
    }

    /// Updates the modified timestamp to now.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

/// The server-confirmed layout record for one room.
///
/// This is the single source of truth the engine mutates on commit. A
/// persistence collaborator serializes it, ships it, and may roll a
/// commit back if the remote write fails; the engine only guarantees
/// that every mutation was geometrically valid when it was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomLayout {
    /// Layout metadata
    pub metadata: LayoutMetadata,
    /// Racks in the room (elevation views)
    pub racks: Vec<Rack>,
    /// The floor plan (top-down view)
    pub floor_plan: FloorPlan,
}

impl RoomLayout {
    /// Creates an empty room layout with default grid dimensions.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            metadata: LayoutMetadata::new(name)?,
            racks: Vec::new(),
            floor_plan: FloorPlan::new(DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_CELL_SIZE_PX),
        })
    }

    /// Gets a rack by id.
    #[must_use]
    pub fn rack(&self, id: uuid::Uuid) -> Option<&Rack> {
        self.racks.iter().find(|r| r.id == id)
    }

    /// Gets a mutable rack by id.
    pub fn rack_mut(&mut self, id: uuid::Uuid) -> Option<&mut Rack> {
        self.racks.iter_mut().find(|r| r.id == id)
    }
}
