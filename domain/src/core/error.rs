//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown topology: {0} (expected 'single' or 'pipeline')")]
    UnknownTopology(String),

    #[error("Conversation invariant violated: {0}")]
    ConversationInvariant(String),
}

impl DomainError {
    /// Check if this error comes from parsing a user-supplied name
    pub fn is_unknown_name(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownTool(_) | DomainError::UnknownRole(_) | DomainError::UnknownTopology(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_topology_display() {
        let error = DomainError::UnknownTopology("triangle".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown topology: triangle (expected 'single' or 'pipeline')"
        );
    }

    #[test]
    fn test_is_unknown_name() {
        assert!(DomainError::UnknownTool("grep".to_string()).is_unknown_name());
        assert!(DomainError::UnknownRole("boss".to_string()).is_unknown_name());
        assert!(!DomainError::InvalidPrompt("empty".to_string()).is_unknown_name());
        assert!(!DomainError::ConversationInvariant("x".to_string()).is_unknown_name());
    }
}
