//! Metadata probe port.
//!
//! Abstracts the per-file metadata query (one external process per call)
//! so the scanner and resolver can be tested without spawning anything.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from a metadata query.
///
/// "Attribute absent" is not an error: the probe returns `Ok(None)` for
/// files that carry no value for the requested attribute.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The metadata tool is not on the search path at all. Distinct from
    /// a failed query so callers can report something actionable.
    #[error("metadata tool `{tool}` not found on the search path")]
    ToolMissing { tool: String },

    /// The tool ran but exited with an error for this file.
    #[error("metadata query for {} failed: {detail}", .path.display())]
    QueryFailed { path: PathBuf, detail: String },
}

/// Port for querying one named metadata attribute of one file.
///
/// Implementations spawn a short-lived external process per call and
/// extract the attribute value from its textual output.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProbe: Send + Sync {
    /// Query `attribute` of the file at `target`.
    ///
    /// Returns `Ok(None)` when the attribute is absent (unsupported file
    /// type, no associated value), which is the expected outcome for many
    /// inputs and never an error.
    async fn probe(&self, target: &Path, attribute: &str)
    -> Result<Option<String>, ProbeError>;
}
