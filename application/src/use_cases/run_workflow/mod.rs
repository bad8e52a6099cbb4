//! Run Workflow use case
//!
//! Drives the workflow state machine over one conversation:
//!
//! ```text
//! Human prompt ─▶ Agent(entry) ─┬─ tool calls ─▶ Tools(role) ─▶ Agent(role)
//!                               └─ no calls ───▶ Agent(next role) | Done
//! ```
//!
//! Steps run strictly one after another, and tool calls of one batch run in
//! the order the model issued them. Each completed step is yielded as a
//! [`StepSnapshot`] holding an immutable copy of the log.

mod agent_node;
mod graph;
mod tool_node;
mod types;

pub use graph::WorkflowGraph;
pub use types::{RunWorkflowError, RunWorkflowOutput, StepSnapshot};

use crate::config::ExecutionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, WorkflowProgressNotifier};
use crate::ports::tool_executor::ToolExecutorPort;
use futures::{Stream, StreamExt};
use pecko_domain::{ConversationLog, DomainError, RoleDefinition, Topology, WorkflowNode};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Use case for running a workflow to completion
pub struct RunWorkflowUseCase<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> {
    gateway: Arc<G>,
    tool_executor: Arc<T>,
    progress: Arc<dyn WorkflowProgressNotifier>,
    conversation_logger: Arc<dyn ConversationLogger>,
    params: ExecutionParams,
}

impl<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> Clone for RunWorkflowUseCase<G, T> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            tool_executor: self.tool_executor.clone(),
            progress: self.progress.clone(),
            conversation_logger: self.conversation_logger.clone(),
            params: self.params.clone(),
        }
    }
}

impl<G: LlmGateway + 'static, T: ToolExecutorPort + 'static> RunWorkflowUseCase<G, T> {
    pub fn new(gateway: Arc<G>, tool_executor: Arc<T>) -> Self {
        Self {
            gateway,
            tool_executor,
            progress: Arc::new(NoProgress),
            conversation_logger: Arc::new(NoConversationLogger),
            params: ExecutionParams::default(),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn WorkflowProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn with_execution_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    /// Build a graph against this executor's tool registry
    pub fn build_graph(
        &self,
        topology: Topology,
        roles: impl IntoIterator<Item = RoleDefinition>,
    ) -> Result<WorkflowGraph, RunWorkflowError> {
        WorkflowGraph::build(topology, roles, self.tool_executor.tool_spec())
    }

    /// Run `graph` lazily from `prompt`.
    ///
    /// Yields one snapshot per completed step. The stream ends after the
    /// snapshot whose `next` is [`WorkflowNode::Done`], or right after the
    /// first error.
    pub fn stream<'a>(
        &'a self,
        graph: &'a WorkflowGraph,
        prompt: &str,
    ) -> impl Stream<Item = Result<StepSnapshot, RunWorkflowError>> + 'a {
        let prompt = prompt.trim().to_string();

        async_stream::stream! {
            if prompt.is_empty() {
                yield Err(RunWorkflowError::from(DomainError::InvalidPrompt(
                    "prompt is empty".to_string(),
                )));
                return;
            }

            info!("Starting {} workflow", graph.topology());
            self.progress.on_run_start(graph.topology(), &prompt);

            let mut log = ConversationLog::seeded(prompt);
            let mut node = graph.initial();
            let mut steps = 0usize;

            while let Some(role_kind) = node.role() {
                if self.params.limit_reached(steps) {
                    let err = RunWorkflowError::StepLimitExceeded {
                        limit: steps,
                        partial: log.snapshot(),
                    };
                    self.fail(&err, &log);
                    yield Err(err);
                    return;
                }

                let Some(role) = graph.role(role_kind) else {
                    let err = RunWorkflowError::InvalidConfig(format!(
                        "no definition for role '{}'",
                        role_kind
                    ));
                    self.fail(&err, &log);
                    yield Err(err);
                    return;
                };

                let before = log.len();

                match node {
                    WorkflowNode::Agent(_) => {
                        self.progress.on_agent_start(role_kind, role.model());
                        let tools = graph.exposed_tools(role_kind);

                        match agent_node::invoke(self.gateway.as_ref(), role, tools, &log).await {
                            Ok(response) => {
                                debug!(
                                    "{} responded with {} tool call(s)",
                                    role_kind,
                                    response.tool_calls.len()
                                );
                                self.progress.on_agent_response(role_kind, &response);
                                self.conversation_logger
                                    .log(ConversationEvent::agent_response(role_kind, &response));
                                log.append(response);
                            }
                            Err(source) => {
                                error!("Model call failed for {}: {}", role_kind, source);
                                let err = RunWorkflowError::Gateway {
                                    role: role_kind,
                                    source,
                                    partial: log.snapshot(),
                                };
                                self.fail(&err, &log);
                                yield Err(err);
                                return;
                            }
                        }
                    }
                    WorkflowNode::Tools(_) => {
                        let calls = log
                            .last_ai()
                            .map(|ai| ai.tool_calls.clone())
                            .unwrap_or_default();

                        for call in &calls {
                            self.progress.on_tool_call(role_kind, call);
                            self.conversation_logger
                                .log(ConversationEvent::tool_call(role_kind, call));

                            let result =
                                tool_node::dispatch(self.tool_executor.as_ref(), role, call).await;

                            self.progress.on_tool_result(role_kind, call, &result);
                            self.conversation_logger
                                .log(ConversationEvent::tool_result(role_kind, call, &result));
                            log.append(tool_node::result_message(call, &result));
                        }
                    }
                    WorkflowNode::Done => break,
                }

                steps += 1;
                let completed = node;
                let next = match log.last_ai() {
                    Some(last_ai) => graph.spec().next(completed, last_ai),
                    None => WorkflowNode::Done,
                };

                if let (WorkflowNode::Agent(from), WorkflowNode::Agent(to)) = (completed, next) {
                    if from != to {
                        info!("Handing off from {} to {}", from, to);
                        self.progress.on_handoff(from, to);
                        self.conversation_logger
                            .log(ConversationEvent::role_handoff(from, to));
                    }
                }

                node = next;
                yield Ok(StepSnapshot {
                    step: steps,
                    node: completed,
                    next,
                    appended: log.len() - before,
                    log: log.snapshot(),
                });
            }

            info!("Workflow finished after {} steps ({} messages)", steps, log.len());
            self.progress.on_run_complete(steps);
            self.conversation_logger
                .log(ConversationEvent::run_complete(steps, log.len()));
        }
    }

    /// Run `graph` to completion and return the final state
    pub async fn execute(
        &self,
        graph: &WorkflowGraph,
        prompt: &str,
    ) -> Result<RunWorkflowOutput, RunWorkflowError> {
        let mut stream = std::pin::pin!(self.stream(graph, prompt));
        let mut last = None;

        while let Some(snapshot) = stream.next().await {
            last = Some(snapshot?);
        }

        last.map(RunWorkflowOutput::from).ok_or_else(|| {
            RunWorkflowError::InvalidConfig("workflow finished without running a step".to_string())
        })
    }

    fn fail(&self, err: &RunWorkflowError, log: &ConversationLog) {
        let message = err.to_string();
        self.progress.on_run_failed(&message);
        self.conversation_logger
            .log(ConversationEvent::run_failed(&message, log.len()));
    }
}
