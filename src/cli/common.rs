//! Shared CLI error handling and JSON response types.

use serde::Serialize;
use std::fmt;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Error from a CLI command, mapped to a process exit code.
#[derive(Debug, Clone)]
pub enum CliError {
    /// File or config I/O failure
    Io(String),
    /// Layout failed validation (or strict mode tripped on warnings)
    Validation(String),
    /// Bad arguments or unusable input data
    Usage(String),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1,
            Self::Io(_) => 2,
            Self::Usage(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) | Self::Validation(msg) | Self::Usage(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Per-check status in the validate JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationChecks {
    /// Rack slot invariants (overlap, bounds)
    pub racks: String,
    /// Floor-plan invariants (overlap, bounds, footprints)
    pub floor: String,
    /// Group consistency
    pub groups: String,
}

impl ValidationChecks {
    /// All checks passing.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            racks: "passed".to_string(),
            floor: "passed".to_string(),
            groups: "passed".to_string(),
        }
    }
}

/// One finding in the validate JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Human-readable message
    pub message: String,
    /// Rack or layer the finding refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

/// Top-level validate JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// True when no errors were found
    pub valid: bool,
    /// All findings, errors first
    pub errors: Vec<ValidationMessage>,
    /// Per-check status
    pub checks: ValidationChecks,
}
