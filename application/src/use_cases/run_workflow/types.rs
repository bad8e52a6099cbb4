//! Type definitions for the RunWorkflow use case.

use crate::ports::llm_gateway::GatewayError;
use pecko_domain::{ConversationLog, DomainError, Message, RoleKind, WorkflowNode};
use thiserror::Error;

/// Errors that end a workflow run
#[derive(Error, Debug)]
pub enum RunWorkflowError {
    /// Raised before any agent turn
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Model backend failed during {role} turn: {source}")]
    Gateway {
        role: RoleKind,
        #[source]
        source: GatewayError,
        /// Log as it stood when the call failed
        partial: ConversationLog,
    },

    #[error("Step limit of {limit} exceeded")]
    StepLimitExceeded {
        limit: usize,
        partial: ConversationLog,
    },
}

impl RunWorkflowError {
    /// Conversation captured up to the failure, if the run had started
    pub fn partial(&self) -> Option<&ConversationLog> {
        match self {
            RunWorkflowError::Gateway { partial, .. }
            | RunWorkflowError::StepLimitExceeded { partial, .. } => Some(partial),
            _ => None,
        }
    }

    /// Check if this error was raised before the first agent turn
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RunWorkflowError::InvalidConfig(_) | RunWorkflowError::Domain(_)
        )
    }
}

/// State of the run after one completed step.
///
/// `log` is a snapshot: later steps never alter it.
#[derive(Debug, Clone)]
pub struct StepSnapshot {
    /// 1-based step counter
    pub step: usize,
    /// Node that just ran
    pub node: WorkflowNode,
    /// Node the run moves to
    pub next: WorkflowNode,
    pub log: ConversationLog,
    /// Number of messages this step appended
    pub appended: usize,
}

impl StepSnapshot {
    /// Messages appended by this step
    pub fn new_messages(&self) -> &[Message] {
        let messages = self.log.messages();
        &messages[messages.len().saturating_sub(self.appended)..]
    }

    pub fn is_final(&self) -> bool {
        self.next.is_terminal()
    }
}

/// Output from the RunWorkflow use case
#[derive(Debug, Clone)]
pub struct RunWorkflowOutput {
    pub log: ConversationLog,
    pub steps: usize,
    /// Text of the last AI message
    pub final_response: Option<String>,
}

impl From<StepSnapshot> for RunWorkflowOutput {
    fn from(snapshot: StepSnapshot) -> Self {
        let final_response = snapshot.log.last_ai().map(|ai| ai.content.clone());
        Self {
            log: snapshot.log,
            steps: snapshot.step,
            final_response,
        }
    }
}
