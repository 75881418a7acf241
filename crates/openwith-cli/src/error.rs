//! CLI-specific error type and exit-code mapping.

use thiserror::Error;

use openwith_core::{AssignError, ProbeError, ScanError};

/// CLI-level error.
///
/// Domain errors are wrapped transparently so their messages reach the
/// user unchanged; the mapping below decides the process exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("invalid arguments: {0}")]
    Arguments(String),

    /// The selected display name is absent from the application index.
    /// Recoverable: nothing has been assigned yet.
    #[error("application `{0}` is not in the scanned index")]
    NameNotFound(String),

    /// The scan produced an empty index, so there is nothing to select.
    #[error("no applications discovered in the configured directories")]
    NoApplications,

    /// Required external tools are missing (reported by `check-deps`).
    #[error("missing required external tools")]
    MissingDependencies,

    /// Index construction failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Handler assignment failed.
    #[error(transparent)]
    Assign(#[from] AssignError),

    /// Terminal/stdin IO failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map the error to an exit code, following sysexits conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::NameNotFound(_) | CliError::NoApplications => 1,
            CliError::MissingDependencies
            | CliError::Scan(ScanError::Probe(ProbeError::ToolMissing { .. }))
            | CliError::Assign(AssignError::ToolMissing { .. }) => 69, // EX_UNAVAILABLE
            CliError::Scan(ScanError::ReadDir { .. }) | CliError::Io(_) => 74, // EX_IOERR
            CliError::Scan(_) | CliError::Assign(_) => 71, // EX_OSERR
            CliError::Json(_) => 70, // EX_SOFTWARE
        }
    }
}
