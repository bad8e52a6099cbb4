//! States of the workflow machine

use crate::role::RoleKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "node", content = "role", rename_all = "snake_case")]
pub enum WorkflowNode {
    /// Model turn of a role
    Agent(RoleKind),
    /// Tool dispatch for the role's latest turn
    Tools(RoleKind),
    Done,
}

impl WorkflowNode {
    pub fn role(&self) -> Option<RoleKind> {
        match self {
            WorkflowNode::Agent(role) | WorkflowNode::Tools(role) => Some(*role),
            WorkflowNode::Done => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowNode::Done)
    }
}

impl std::fmt::Display for WorkflowNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowNode::Agent(role) => write!(f, "{}", role),
            WorkflowNode::Tools(role) => write!(f, "{}_tools", role),
            WorkflowNode::Done => write!(f, "done"),
        }
    }
}
