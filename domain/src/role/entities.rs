//! Role entities

use super::prompts::RolePrompts;
use crate::core::{error::DomainError, model::Model};
use crate::tool::entities::ToolSet;
use serde::{Deserialize, Serialize};

/// The fixed personas a run can be made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    /// Generalist used by the single-agent topology
    Agent,
    Planner,
    Worker,
    Reviewer,
}

impl RoleKind {
    pub const ALL: [RoleKind; 4] = [
        RoleKind::Agent,
        RoleKind::Planner,
        RoleKind::Worker,
        RoleKind::Reviewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Agent => "agent",
            RoleKind::Planner => "planner",
            RoleKind::Worker => "worker",
            RoleKind::Reviewer => "reviewer",
        }
    }

    /// Tools this role is bound to.
    ///
    /// Planner and reviewer never mutate the tree.
    pub fn default_tools(&self) -> ToolSet {
        match self {
            RoleKind::Agent | RoleKind::Worker => ToolSet::full(),
            RoleKind::Planner | RoleKind::Reviewer => ToolSet::read_only(),
        }
    }

    pub fn default_system_prompt(&self) -> &'static str {
        match self {
            RoleKind::Agent => RolePrompts::AGENT,
            RoleKind::Planner => RolePrompts::PLANNER,
            RoleKind::Worker => RolePrompts::WORKER,
            RoleKind::Reviewer => RolePrompts::REVIEWER,
        }
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoleKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        RoleKind::ALL
            .into_iter()
            .find(|r| r.as_str() == lower)
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

/// Immutable description of one role taking part in a run.
///
/// Built once before the graph is constructed. The model binding is passed
/// in by the caller, never looked up while the run is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDefinition {
    kind: RoleKind,
    system_prompt: String,
    allowed_tools: ToolSet,
    model: Model,
}

impl RoleDefinition {
    /// Role with its default prompt and tool subset
    pub fn new(kind: RoleKind, model: Model) -> Self {
        Self {
            kind,
            system_prompt: kind.default_system_prompt().to_string(),
            allowed_tools: kind.default_tools(),
            model,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_allowed_tools(mut self, tools: ToolSet) -> Self {
        self.allowed_tools = tools;
        self
    }

    pub fn kind(&self) -> RoleKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn allowed_tools(&self) -> &ToolSet {
        &self.allowed_tools
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolName;

    #[test]
    fn test_role_parse() {
        assert_eq!("Planner".parse::<RoleKind>().unwrap(), RoleKind::Planner);
        assert_eq!(" reviewer ".parse::<RoleKind>().unwrap(), RoleKind::Reviewer);
        assert!("boss".parse::<RoleKind>().is_err());
    }

    #[test]
    fn test_default_tool_scoping() {
        assert!(RoleKind::Agent.default_tools().contains(ToolName::WriteFile));
        assert!(RoleKind::Worker.default_tools().contains(ToolName::WriteFile));
        assert!(!RoleKind::Planner.default_tools().contains(ToolName::WriteFile));
        assert!(!RoleKind::Reviewer.default_tools().contains(ToolName::WriteFile));
        assert!(RoleKind::Reviewer.default_tools().contains(ToolName::ReadFile));
    }

    #[test]
    fn test_role_definition() {
        let role = RoleDefinition::new(RoleKind::Planner, Model::new("gpt-4o-mini"));

        assert_eq!(role.name(), "planner");
        assert_eq!(role.model().as_str(), "gpt-4o-mini");
        assert!(role.system_prompt().contains("Planner"));
        assert_eq!(role.allowed_tools(), &ToolSet::read_only());
    }

    #[test]
    fn test_role_definition_overrides() {
        let role = RoleDefinition::new(RoleKind::Worker, Model::default())
            .with_system_prompt("Only touch docs/.")
            .with_allowed_tools(ToolSet::new([ToolName::WriteFile]));

        assert_eq!(role.system_prompt(), "Only touch docs/.");
        assert!(!role.allowed_tools().contains(ToolName::ReadFile));
    }
}
