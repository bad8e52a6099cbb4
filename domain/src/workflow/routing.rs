//! Hand-off rules between roles

use super::topology::Topology;
use crate::conversation::entities::AiMessage;
use crate::role::RoleKind;

/// Decides who takes over once a role finishes its turn.
///
/// Called only with a terminal message (one without tool calls). Returning
/// `None` ends the run.
pub trait RoutingPolicy: Send + Sync + std::fmt::Debug {
    fn next_role(&self, role: RoleKind, terminal: &AiMessage) -> Option<RoleKind>;

    /// Every role `next_role` can ever return
    fn targets(&self) -> Vec<RoleKind>;
}

/// Fixed forward order; the last role ends the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardPipeline {
    order: Vec<RoleKind>,
}

impl ForwardPipeline {
    pub fn new(order: impl IntoIterator<Item = RoleKind>) -> Self {
        Self {
            order: order.into_iter().collect(),
        }
    }

    pub fn for_topology(topology: Topology) -> Self {
        Self::new(topology.roles().iter().copied())
    }

    pub fn order(&self) -> &[RoleKind] {
        &self.order
    }
}

impl RoutingPolicy for ForwardPipeline {
    fn next_role(&self, role: RoleKind, _terminal: &AiMessage) -> Option<RoleKind> {
        let pos = self.order.iter().position(|r| *r == role)?;
        self.order.get(pos + 1).copied()
    }

    fn targets(&self) -> Vec<RoleKind> {
        self.order.iter().skip(1).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_pipeline() {
        let policy = ForwardPipeline::for_topology(Topology::PlannerWorkerReviewer);
        let msg = AiMessage::new("done");

        assert_eq!(policy.next_role(RoleKind::Planner, &msg), Some(RoleKind::Worker));
        assert_eq!(policy.next_role(RoleKind::Worker, &msg), Some(RoleKind::Reviewer));
        assert_eq!(policy.next_role(RoleKind::Reviewer, &msg), None);
        assert_eq!(policy.targets(), vec![RoleKind::Worker, RoleKind::Reviewer]);
    }

    #[test]
    fn test_reviewer_disapproval_still_ends_run() {
        let policy = ForwardPipeline::for_topology(Topology::PlannerWorkerReviewer);
        let msg = AiMessage::new("This is wrong, please redo the work.");

        assert_eq!(policy.next_role(RoleKind::Reviewer, &msg), None);
    }

    #[test]
    fn test_single_agent_and_unknown_role() {
        let policy = ForwardPipeline::for_topology(Topology::SingleAgent);
        let msg = AiMessage::new("");

        assert_eq!(policy.next_role(RoleKind::Agent, &msg), None);
        assert_eq!(policy.next_role(RoleKind::Worker, &msg), None);
    }
}
