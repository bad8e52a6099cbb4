//! Transition function of the workflow machine

use super::node::WorkflowNode;
use super::routing::{ForwardPipeline, RoutingPolicy};
use super::topology::Topology;
use crate::conversation::entities::AiMessage;
use crate::role::RoleKind;
use std::sync::Arc;

/// Entry role plus routing policy. Pure: no I/O, no roles, no tools.
///
/// ```text
/// Agent(r) ──tool calls──▶ Tools(r) ──▶ Agent(r)
///    │
///    └─no tool calls──▶ Agent(policy.next_role(r)) | Done
/// ```
#[derive(Debug, Clone)]
pub struct WorkflowGraphSpec {
    entry: RoleKind,
    policy: Arc<dyn RoutingPolicy>,
}

impl WorkflowGraphSpec {
    pub fn new(entry: RoleKind, policy: Arc<dyn RoutingPolicy>) -> Self {
        Self { entry, policy }
    }

    /// Forward-only wiring for the given topology
    pub fn for_topology(topology: Topology) -> Self {
        Self::new(
            topology.entry(),
            Arc::new(ForwardPipeline::for_topology(topology)),
        )
    }

    pub fn with_policy(mut self, policy: Arc<dyn RoutingPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn entry(&self) -> RoleKind {
        self.entry
    }

    pub fn initial(&self) -> WorkflowNode {
        WorkflowNode::Agent(self.entry)
    }

    /// Next node after `node` completed, given the latest AI message.
    pub fn next(&self, node: WorkflowNode, last_ai: &AiMessage) -> WorkflowNode {
        match node {
            WorkflowNode::Agent(role) if last_ai.has_tool_calls() => WorkflowNode::Tools(role),
            WorkflowNode::Agent(role) => self
                .policy
                .next_role(role, last_ai)
                .map_or(WorkflowNode::Done, WorkflowNode::Agent),
            WorkflowNode::Tools(role) => WorkflowNode::Agent(role),
            WorkflowNode::Done => WorkflowNode::Done,
        }
    }
}
