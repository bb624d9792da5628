//! Conversion command between 3D scene records and 2D overlay records.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::services::scene_sync::{scene_to_overlay, SceneRecord};

/// Convert 3D scene placement records to 2D overlay records
#[derive(Debug, Clone, Args)]
pub struct SyncArgs {
    /// Path to a JSON array of scene records
    #[arg(short, long, value_name = "FILE")]
    pub scene: PathBuf,

    /// Raw grid row count of the scene (before overlay padding)
    #[arg(long, value_name = "N")]
    pub rows: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
    /// Execute the sync command
    pub fn execute(&self) -> CliResult<()> {
        if self.rows == 0 {
            return Err(CliError::usage("--rows must be >= 1"));
        }

        let contents = std::fs::read_to_string(&self.scene)
            .map_err(|e| CliError::io(format!("Failed to read {}: {e}", self.scene.display())))?;
        let records: Vec<SceneRecord> = serde_json::from_str(&contents)
            .map_err(|e| CliError::usage(format!("Malformed scene records: {e}")))?;

        let overlays: Vec<_> = records
            .iter()
            .map(|r| scene_to_overlay(r, self.rows))
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&overlays)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Converted {} records ({} scene rows):", overlays.len(), self.rows);
            for (scene, overlay) in records.iter().zip(&overlays) {
                println!(
                    "  ({}, {}, z{}) -> ({}, {}) @ {}°",
                    scene.grid_x,
                    scene.grid_y,
                    scene.grid_z,
                    overlay.grid_x,
                    overlay.grid_y,
                    overlay.rotation_degrees
                );
            }
        }

        Ok(())
    }
}
