//! Role-handler registry query port.
//!
//! The production adapter runs an embedded script through the platform's
//! scripting runtime; this trait narrows that to "content type in,
//! application URLs out" so the resolver can be tested with a fake.

use async_trait::async_trait;

/// Port for querying the OS role-handler registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleHandlerQuery: Send + Sync {
    /// Applications registered for `content_type` across every role,
    /// one raw application URL per element, registry order.
    ///
    /// This query is best-effort by contract: a missing runtime, a script
    /// failure, or an empty registry all yield an empty list.
    async fn handlers_for(&self, content_type: &str) -> Vec<String>;
}
