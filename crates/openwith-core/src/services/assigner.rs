//! Default-handler assignment service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::SuffixGroup;
use crate::ports::{AssignError, HandlerAssigner};

/// Outcome of one suffix within a group assignment.
#[derive(Debug)]
pub struct GroupAssignment {
    pub suffix: String,
    pub result: Result<(), AssignError>,
}

/// Assigns a bundle identifier as the default handler of suffixes.
///
/// Thin orchestration over the [`HandlerAssigner`] port; the port call is
/// a single atomic external command per suffix.
pub struct DefaultHandlerService {
    assigner: Arc<dyn HandlerAssigner>,
}

impl DefaultHandlerService {
    /// Create the service over an assigner port.
    pub fn new(assigner: Arc<dyn HandlerAssigner>) -> Self {
        Self { assigner }
    }

    /// Assign `bundle_id` as the default handler for one dotted suffix.
    pub async fn assign(&self, bundle_id: &str, suffix: &str) -> Result<(), AssignError> {
        debug!(bundle_id, suffix, "assigning default handler");
        self.assigner.assign(bundle_id, suffix).await
    }

    /// Assign `bundle_id` to every suffix of a group.
    ///
    /// One failing suffix does not stop the rest; the caller gets the
    /// per-suffix outcomes in group order.
    pub async fn assign_group(&self, bundle_id: &str, group: &SuffixGroup) -> Vec<GroupAssignment> {
        let mut outcomes = Vec::with_capacity(group.suffixes.len());
        for suffix in group.suffixes {
            let result = self.assigner.assign(bundle_id, suffix).await;
            outcomes.push(GroupAssignment {
                suffix: (*suffix).to_string(),
                result,
            });
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suffix_group;
    use crate::ports::MockHandlerAssigner;

    #[tokio::test]
    async fn assign_delegates_to_the_port() {
        let mut assigner = MockHandlerAssigner::new();
        assigner
            .expect_assign()
            .times(1)
            .withf(|bundle_id, suffix| bundle_id == "com.apple.Safari" && suffix == ".html")
            .returning(|_, _| Ok(()));

        let service = DefaultHandlerService::new(Arc::new(assigner));
        service
            .assign("com.apple.Safari", ".html")
            .await
            .expect("assignment");
    }

    #[tokio::test]
    async fn reassigning_the_same_pair_succeeds_both_times() {
        let mut assigner = MockHandlerAssigner::new();
        assigner.expect_assign().times(2).returning(|_, _| Ok(()));

        let service = DefaultHandlerService::new(Arc::new(assigner));
        service.assign("com.apple.TextEdit", ".txt").await.expect("first");
        service.assign("com.apple.TextEdit", ".txt").await.expect("second");
    }

    #[tokio::test]
    async fn group_assignment_continues_past_failures() {
        let group = suffix_group("text").expect("text group");
        let mut assigner = MockHandlerAssigner::new();
        assigner.expect_assign().returning(|bundle_id, suffix| {
            if suffix == ".rtf" {
                Err(AssignError::CommandFailed {
                    bundle_id: bundle_id.to_string(),
                    suffix: suffix.to_string(),
                    detail: "registry refused".to_string(),
                })
            } else {
                Ok(())
            }
        });

        let service = DefaultHandlerService::new(Arc::new(assigner));
        let outcomes = service.assign_group("com.example.Editor", group).await;
        assert_eq!(outcomes.len(), group.suffixes.len());

        let failed: Vec<&str> = outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.suffix.as_str())
            .collect();
        assert_eq!(failed, [".rtf"]);
    }
}
