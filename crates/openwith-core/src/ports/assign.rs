//! Default-handler assignment port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a handler assignment.
#[derive(Debug, Error)]
pub enum AssignError {
    /// The assignment tool is not on the search path.
    #[error("assignment tool `{tool}` not found on the search path")]
    ToolMissing { tool: String },

    /// The tool ran but refused the assignment.
    #[error("assigning `{bundle_id}` to `{suffix}` failed: {detail}")]
    CommandFailed {
        bundle_id: String,
        suffix: String,
        detail: String,
    },
}

/// Port for binding a bundle identifier as the default handler of a
/// file suffix, across every role.
///
/// The operation is idempotent (re-assigning an existing mapping is
/// harmless) and implementations perform no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HandlerAssigner: Send + Sync {
    /// Bind `bundle_id` as the default handler for `suffix` (with its
    /// leading dot) in every role.
    async fn assign(&self, bundle_id: &str, suffix: &str) -> Result<(), AssignError>;
}
