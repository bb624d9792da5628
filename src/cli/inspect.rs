//! Inspection command summarizing a room layout file.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::models::{FloorLayer, RoomLayout};
use crate::services::LayoutService;

/// Summarize the racks and floor plan of a room layout file
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to a room layout JSON file
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RackSummary {
    name: String,
    unit_count: u32,
    equipment: usize,
    occupied_units: u32,
    free_units: u32,
}

#[derive(Debug, Serialize)]
struct LayerSummary {
    layer: String,
    assets: usize,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    name: String,
    racks: Vec<RackSummary>,
    grid: String,
    layers: Vec<LayerSummary>,
    groups: usize,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let layout = LayoutService::load(&self.layout)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e}")))?;

        let response = build_response(&layout);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Layout: {}", response.name);
            println!("\nRacks ({}):", response.racks.len());
            for rack in &response.racks {
                println!(
                    "  {} - {}U, {} devices, {}U used / {}U free",
                    rack.name, rack.unit_count, rack.equipment, rack.occupied_units, rack.free_units
                );
            }
            println!("\nFloor plan: {} grid", response.grid);
            for layer in &response.layers {
                println!("  {}: {} assets", layer.layer, layer.assets);
            }
            println!("\nGroups: {}", response.groups);
        }

        Ok(())
    }
}

fn build_response(layout: &RoomLayout) -> InspectResponse {
    let racks = layout
        .racks
        .iter()
        .map(|rack| RackSummary {
            name: rack.name.clone(),
            unit_count: rack.unit_count,
            equipment: rack.equipment.len(),
            occupied_units: rack.occupied_units(),
            free_units: rack.free_units(),
        })
        .collect();

    let layers = FloorLayer::ALL
        .iter()
        .map(|&layer| LayerSummary {
            layer: layer.label().to_string(),
            assets: layout.floor_plan.assets_on_layer(layer).count(),
        })
        .collect();

    let mut group_ids: Vec<_> = layout
        .floor_plan
        .assets
        .iter()
        .filter_map(|a| a.group_id)
        .collect();
    group_ids.sort_unstable();
    group_ids.dedup();

    InspectResponse {
        name: layout.metadata.name.clone(),
        racks,
        grid: format!("{}x{}", layout.floor_plan.cols, layout.floor_plan.rows),
        layers,
        groups: group_ids.len(),
    }
}
