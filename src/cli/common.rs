//! Shared CLI error and exit-code types.
//!
//! Command handlers return [`CliResult`]; the binary maps the error kind
//! to a process exit code so scripts can distinguish bad input data
//! (exit 1) from I/O and environment failures (exit 2).

use std::fmt;

use crate::models::BeadColor;

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// A command failure with its exit-code class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Invalid arguments or pattern data (exit code 1).
    Validation(String),
    /// File system or environment failure (exit code 2).
    Io(String),
}

impl CliError {
    /// Creates a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// The exit code class for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationFailure,
            Self::Io(_) => ExitCode::IoFailure,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success,
    /// Arguments or pattern data failed validation.
    ValidationFailure,
    /// A file system or environment operation failed.
    IoFailure,
}

impl ExitCode {
    /// The numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::ValidationFailure => 1,
            Self::IoFailure => 2,
        }
    }
}

/// Parses a `#RRGGBB` CLI argument into a bead color.
///
/// # Errors
///
/// Returns a validation error describing the expected format.
pub fn parse_color_arg(hex: &str) -> CliResult<BeadColor> {
    BeadColor::from_hex(hex)
        .map_err(|e| CliError::validation(format!("Invalid color argument: {e}")))
}
