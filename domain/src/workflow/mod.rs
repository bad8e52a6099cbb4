//! Workflow state machine
//!
//! States are [`node::WorkflowNode`]s: one agent state and one tools state
//! per role, plus `Done`. [`graph::WorkflowGraphSpec`] is the pure
//! transition function; the application layer drives it.

pub mod graph;
pub mod node;
pub mod routing;
pub mod topology;

pub use graph::WorkflowGraphSpec;
pub use node::WorkflowNode;
pub use routing::{ForwardPipeline, RoutingPolicy};
pub use topology::Topology;
