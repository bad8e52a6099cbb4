//! Execution parameters: use case loop control.
//!
//! [`ExecutionParams`] groups the static parameters that bound the step loop
//! of [`RunWorkflowUseCase`](crate::use_cases::run_workflow::RunWorkflowUseCase).

use serde::{Deserialize, Serialize};

/// Execution loop control parameters.
///
/// A step is one agent turn or one tool dispatch batch. `max_steps` is an
/// optional guard against a role that never stops calling tools; unbounded
/// when `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    pub max_steps: Option<usize>,
}

impl ExecutionParams {
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = Some(max);
        self
    }

    /// True once `steps` completed steps reach the limit
    pub fn limit_reached(&self, steps: usize) -> bool {
        self.max_steps.is_some_and(|max| steps >= max)
    }
}
