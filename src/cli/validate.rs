//! Validation command for room layout files.

use clap::Args;
use std::path::PathBuf;

use crate::cli::common::{
    CliError, CliResult, ValidationChecks, ValidationMessage, ValidationResponse,
};
use crate::services::validator::{LayoutValidator, ValidationErrorKind};
use crate::services::LayoutService;

/// Validate a room layout file against the spatial invariants
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to a room layout JSON file
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let layout = LayoutService::load(&self.layout)
            .map_err(|e| CliError::io(format!("Failed to load layout: {e}")))?;

        let report = LayoutValidator::new(&layout).validate();

        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();

        for error in &report.errors {
            match error.kind {
                ValidationErrorKind::RackOverlap | ValidationErrorKind::RackOutOfBounds => {
                    checks.racks = "failed".to_string();
                }
                ValidationErrorKind::FloorOverlap
                | ValidationErrorKind::FloorOutOfBounds
                | ValidationErrorKind::DegenerateFootprint => {
                    checks.floor = "failed".to_string();
                }
            }
            messages.push(ValidationMessage {
                severity: "error".to_string(),
                message: error.message.clone(),
                entity: error.entity.clone(),
            });
        }

        for warning in &report.warnings {
            checks.groups = "warning".to_string();
            messages.push(ValidationMessage {
                severity: "warning".to_string(),
                message: warning.message.clone(),
                entity: None,
            });
        }

        let response = ValidationResponse {
            valid: report.is_valid(),
            errors: messages,
            checks,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            println!("\nChecks:");
            println!("  Racks:  {}", response.checks.racks);
            println!("  Floor:  {}", response.checks.floor);
            println!("  Groups: {}", response.checks.groups);

            if !response.errors.is_empty() {
                println!("\nIssues:");
                for msg in &response.errors {
                    let prefix = if msg.severity == "error" { "  ✗" } else { "  ⚠" };
                    if let Some(entity) = &msg.entity {
                        println!("{prefix} [{entity}] {}", msg.message);
                    } else {
                        println!("{prefix} {}", msg.message);
                    }
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict {
            let has_warnings = response.errors.iter().any(|m| m.severity == "warning");
            if has_warnings {
                return Err(CliError::validation("Warnings found in strict mode"));
            }
        }

        Ok(())
    }
}
