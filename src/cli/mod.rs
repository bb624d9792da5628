//! CLI command handlers for Rack Planner.
//!
//! This module provides headless, scriptable access to the layout
//! engine for automation, testing, and CI integration.

pub mod common;
pub mod inspect;
pub mod sync;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use inspect::InspectArgs;
pub use sync::SyncArgs;
pub use validate::ValidateArgs;
