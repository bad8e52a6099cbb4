//! Graph wiring selected before a run starts

use crate::core::error::DomainError;
use crate::role::RoleKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Topology {
    /// One generalist `agent` looping on its own tools
    #[default]
    #[serde(rename = "single", alias = "single-agent", alias = "agent")]
    SingleAgent,
    /// `planner` → `worker` → `reviewer`
    #[serde(rename = "pipeline", alias = "planner-worker-reviewer", alias = "multi")]
    PlannerWorkerReviewer,
}

impl Topology {
    /// Roles taking part, in pipeline order
    pub fn roles(&self) -> &'static [RoleKind] {
        match self {
            Topology::SingleAgent => &[RoleKind::Agent],
            Topology::PlannerWorkerReviewer => {
                &[RoleKind::Planner, RoleKind::Worker, RoleKind::Reviewer]
            }
        }
    }

    pub fn entry(&self) -> RoleKind {
        self.roles()[0]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::SingleAgent => "single",
            Topology::PlannerWorkerReviewer => "pipeline",
        }
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Topology {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "single-agent" | "agent" => Ok(Topology::SingleAgent),
            "pipeline" | "planner-worker-reviewer" | "multi" => {
                Ok(Topology::PlannerWorkerReviewer)
            }
            _ => Err(DomainError::UnknownTopology(s.to_string())),
        }
    }
}
