//! Wiring of roles, tools and routing for one topology.

use super::types::RunWorkflowError;
use pecko_domain::{
    RoleDefinition, RoleKind, RoutingPolicy, ToolDefinition, ToolSpec, Topology, WorkflowGraphSpec,
    WorkflowNode,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

struct BoundRole {
    definition: RoleDefinition,
    /// Definitions of the role's allowed tools, the only ones shown to the model
    tools: Vec<ToolDefinition>,
}

/// Immutable, validated graph a run executes.
///
/// Built once before the run; every configuration problem (missing role,
/// tool not registered) surfaces here and never mid-run.
pub struct WorkflowGraph {
    topology: Topology,
    spec: WorkflowGraphSpec,
    roles: BTreeMap<RoleKind, BoundRole>,
}

impl WorkflowGraph {
    pub fn build(
        topology: Topology,
        roles: impl IntoIterator<Item = RoleDefinition>,
        tool_spec: &ToolSpec,
    ) -> Result<Self, RunWorkflowError> {
        let mut bound = BTreeMap::new();

        for definition in roles {
            let kind = definition.kind();
            for tool in definition.allowed_tools().iter() {
                if tool_spec.get(tool).is_none() {
                    return Err(RunWorkflowError::InvalidConfig(format!(
                        "role '{}' allows '{}' but no such tool is registered",
                        kind, tool
                    )));
                }
            }
            let tools = tool_spec.filtered(definition.allowed_tools());
            if bound.insert(kind, BoundRole { definition, tools }).is_some() {
                return Err(RunWorkflowError::InvalidConfig(format!(
                    "role '{}' is defined more than once",
                    kind
                )));
            }
        }

        for role in topology.roles() {
            if !bound.contains_key(role) {
                return Err(RunWorkflowError::InvalidConfig(format!(
                    "topology '{}' requires role '{}'",
                    topology, role
                )));
            }
        }

        debug!(
            "Built {} graph with roles: {:?}",
            topology,
            bound.keys().map(|k| k.as_str()).collect::<Vec<_>>()
        );

        Ok(Self {
            topology,
            spec: WorkflowGraphSpec::for_topology(topology),
            roles: bound,
        })
    }

    /// Replace the forward-only routing.
    ///
    /// Every role the policy can route to must have been passed to
    /// [`build`](Self::build).
    pub fn with_policy(
        mut self,
        policy: Arc<dyn RoutingPolicy>,
    ) -> Result<Self, RunWorkflowError> {
        if let Some(missing) = policy
            .targets()
            .into_iter()
            .find(|role| !self.roles.contains_key(role))
        {
            return Err(RunWorkflowError::InvalidConfig(format!(
                "routing policy hands off to role '{}' which is not bound",
                missing
            )));
        }
        self.spec = self.spec.with_policy(policy);
        Ok(self)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn spec(&self) -> &WorkflowGraphSpec {
        &self.spec
    }

    pub fn initial(&self) -> WorkflowNode {
        self.spec.initial()
    }

    pub fn role(&self, kind: RoleKind) -> Option<&RoleDefinition> {
        self.roles.get(&kind).map(|r| &r.definition)
    }

    /// Tools exposed to the model for this role
    pub fn exposed_tools(&self, kind: RoleKind) -> &[ToolDefinition] {
        self.roles.get(&kind).map_or(&[], |r| r.tools.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pecko_domain::{AiMessage, Model, ToolName, ToolSet};

    fn spec() -> ToolSpec {
        ToolSpec::new()
            .register(ToolDefinition::new(ToolName::ListFiles, "list"))
            .register(ToolDefinition::new(ToolName::ReadFile, "read"))
            .register(ToolDefinition::new(ToolName::WriteFile, "write"))
    }

    fn pipeline_roles() -> Vec<RoleDefinition> {
        [RoleKind::Planner, RoleKind::Worker, RoleKind::Reviewer]
            .into_iter()
            .map(|k| RoleDefinition::new(k, Model::default()))
            .collect()
    }

    #[test]
    fn test_build_pipeline() {
        let graph =
            WorkflowGraph::build(Topology::PlannerWorkerReviewer, pipeline_roles(), &spec())
                .unwrap();

        assert_eq!(graph.initial(), WorkflowNode::Agent(RoleKind::Planner));
        let planner_tools: Vec<_> = graph
            .exposed_tools(RoleKind::Planner)
            .iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(planner_tools, vec![ToolName::ListFiles, ToolName::ReadFile]);
        assert_eq!(graph.exposed_tools(RoleKind::Worker).len(), 3);
    }

    #[test]
    fn test_missing_role_is_config_error() {
        let roles = vec![RoleDefinition::new(RoleKind::Planner, Model::default())];
        let err = WorkflowGraph::build(Topology::PlannerWorkerReviewer, roles, &spec())
            .err()
            .unwrap();

        assert!(err.is_config_error());
        assert!(err.to_string().contains("requires role 'worker'"));
    }

    #[test]
    fn test_unregistered_tool_is_config_error() {
        let read_only = ToolSpec::new().register(ToolDefinition::new(ToolName::ReadFile, "read"));
        let roles = vec![
            RoleDefinition::new(RoleKind::Agent, Model::default())
                .with_allowed_tools(ToolSet::new([ToolName::WriteFile])),
        ];

        let err = WorkflowGraph::build(Topology::SingleAgent, roles, &read_only)
            .err()
            .unwrap();
        assert!(matches!(err, RunWorkflowError::InvalidConfig(_)));
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let roles = vec![
            RoleDefinition::new(RoleKind::Agent, Model::default()),
            RoleDefinition::new(RoleKind::Agent, Model::new("gpt-4o-mini")),
        ];
        assert!(WorkflowGraph::build(Topology::SingleAgent, roles, &spec()).is_err());
    }

    #[derive(Debug)]
    struct HandOffTo(RoleKind);

    impl RoutingPolicy for HandOffTo {
        fn next_role(&self, _role: RoleKind, _terminal: &AiMessage) -> Option<RoleKind> {
            Some(self.0)
        }

        fn targets(&self) -> Vec<RoleKind> {
            vec![self.0]
        }
    }

    #[test]
    fn test_policy_to_unbound_role_rejected_before_run() {
        let roles = [RoleDefinition::new(RoleKind::Agent, Model::default())];
        let graph = WorkflowGraph::build(Topology::SingleAgent, roles, &spec()).unwrap();

        let err = graph
            .with_policy(Arc::new(HandOffTo(RoleKind::Reviewer)))
            .err()
            .unwrap();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("role 'reviewer'"));
    }

    #[test]
    fn test_policy_to_bound_role_accepted() {
        let graph =
            WorkflowGraph::build(Topology::PlannerWorkerReviewer, pipeline_roles(), &spec())
                .unwrap()
                .with_policy(Arc::new(HandOffTo(RoleKind::Worker)))
                .unwrap();

        let reviewer = WorkflowNode::Agent(RoleKind::Reviewer);
        assert_eq!(
            graph.spec().next(reviewer, &AiMessage::new("again")),
            WorkflowNode::Agent(RoleKind::Worker)
        );
    }
}
