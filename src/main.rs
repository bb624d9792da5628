//! Rack Planner - Datacenter layout engine CLI
//!
//! Headless access to the layout engine: validate room layout records,
//! summarize occupancy, and convert 3D scene records for the 2D
//! overlay.

use clap::{Parser, Subcommand};

use rackplan::cli::{InspectArgs, SyncArgs, ValidateArgs};
use rackplan::constants::APP_NAME;

/// Rack Planner - datacenter rack and floor plan layout engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a room layout file against the spatial invariants
    Validate(ValidateArgs),
    /// Summarize the racks and floor plan of a room layout file
    Inspect(InspectArgs),
    /// Convert 3D scene placement records to 2D overlay records
    Sync(SyncArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Validate(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
        Commands::Sync(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("{APP_NAME}: {err}");
        std::process::exit(err.exit_code());
    }
}
