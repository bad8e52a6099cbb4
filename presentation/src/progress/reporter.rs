//! Progress reporting for workflow runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pecko_application::WorkflowProgressNotifier;
use pecko_domain::{AiMessage, Model, RoleKind, ToolCall, ToolResult, Topology};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while a role waits on the model or a tool runs
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, prefix: String, message: String) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(previous) = slot.take() {
            previous.finish_and_clear();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix);
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        *slot = Some(pb);
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    /// Print a line above the spinner without tearing it
    fn println(&self, line: String) {
        match self.spinner.lock().ok().and_then(|slot| slot.clone()) {
            Some(pb) => pb.println(line),
            None => eprintln!("{}", line),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowProgressNotifier for ProgressReporter {
    fn on_run_start(&self, topology: Topology, _prompt: &str) {
        let roles = topology
            .roles()
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        self.println(format!("{} {} ({})", "=>".cyan(), topology.to_string().bold(), roles));
    }

    fn on_agent_start(&self, role: RoleKind, model: &Model) {
        self.start(role.to_string(), format!("thinking ({})", model));
    }

    fn on_agent_response(&self, _role: RoleKind, _message: &AiMessage) {
        self.clear();
    }

    fn on_tool_call(&self, role: RoleKind, call: &ToolCall) {
        self.start(role.to_string(), format!("running {}", call.name));
    }

    fn on_tool_result(&self, _role: RoleKind, _call: &ToolCall, _result: &ToolResult) {
        self.clear();
    }

    fn on_handoff(&self, from: RoleKind, to: RoleKind) {
        self.println(format!("{} {} -> {}", "=>".cyan(), from, to.to_string().bold()));
    }

    fn on_run_complete(&self, _steps: usize) {
        self.clear();
    }

    fn on_run_failed(&self, _error: &str) {
        self.clear();
    }
}
