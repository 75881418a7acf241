//! `duti`-backed default-handler assigner.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use openwith_core::{AssignError, HandlerAssigner};

/// Binds a bundle identifier to a suffix via `duti -s <id> <suffix> all`.
///
/// The trailing `all` applies the binding to every role (viewer, editor,
/// shell, …), not just one.
pub struct DutiAssigner {
    tool: PathBuf,
}

impl DutiAssigner {
    /// Assign using `duti` from the search path.
    pub fn new() -> Self {
        Self::with_tool("duti")
    }

    /// Assign using an explicit tool path (used by tests).
    pub fn with_tool(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }
}

impl Default for DutiAssigner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HandlerAssigner for DutiAssigner {
    async fn assign(&self, bundle_id: &str, suffix: &str) -> Result<(), AssignError> {
        let output = Command::new(&self.tool)
            .arg("-s")
            .arg(bundle_id)
            .arg(suffix)
            .arg("all")
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => AssignError::ToolMissing {
                    tool: self.tool.display().to_string(),
                },
                _ => AssignError::CommandFailed {
                    bundle_id: bundle_id.to_string(),
                    suffix: suffix.to_string(),
                    detail: err.to_string(),
                },
            })?;

        if output.status.success() {
            debug!(bundle_id, suffix, "default handler assigned");
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AssignError::CommandFailed {
                bundle_id: bundle_id.to_string(),
                suffix: suffix.to_string(),
                detail: format!("{} ({})", stderr.trim(), output.status),
            })
        }
    }
}
