//! CLI entrypoint for pecko
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use futures::StreamExt;
use pecko_application::{
    ConversationLogger, NoProgress, RunWorkflowOutput, RunWorkflowUseCase,
    WorkflowProgressNotifier,
};
use pecko_domain::Message;
use pecko_infrastructure::{
    ConfigLoader, JsonlConversationLogger, LocalToolExecutor, OpenAiGateway, Severity,
    WorkspaceStatus, workspace,
};
use pecko_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter, RunArgs};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Init { path, force } => {
            let outcome = workspace::init_workspace(&path, force)?;
            print!("{}", ConsoleFormatter::format_init(outcome.created, &outcome.message));
            Ok(ExitCode::SUCCESS)
        }
        Command::Status { path } => match workspace::status(&path) {
            WorkspaceStatus::Initialized { root, meta } => {
                print!("{}", ConsoleFormatter::format_status(Some((root.as_path(), meta.as_path()))));
                Ok(ExitCode::SUCCESS)
            }
            WorkspaceStatus::NotInitialized => {
                print!("{}", ConsoleFormatter::format_status(None));
                Ok(ExitCode::FAILURE)
            }
        },
        Command::Run(args) => run(args, cli.quiet).await,
    }
}

/// Workspace root for a run: explicit flag, else the enclosing workspace,
/// else the current directory.
fn workspace_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("could not read the current directory")?;
    Ok(match explicit {
        Some(path) => cwd.join(path),
        None => workspace::find_workspace_root(&cwd).unwrap_or(cwd),
    })
}

async fn run(args: RunArgs, quiet: bool) -> Result<ExitCode> {
    let root = workspace_root(args.workspace.as_deref())?;
    info!("Workspace root: {}", root.display());

    // === Configuration (resolved once, before any model call) ===
    let config = ConfigLoader::load(args.config.as_deref(), Some(root.as_path()))?;

    let mut errors = Vec::new();
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("{}: {}", issue.field, issue.message),
            Severity::Error => errors.push(format!("{}: {}", issue.field, issue.message)),
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    let topology = match args.topology {
        Some(topology) => topology,
        None => config.topology()?,
    };
    let profile = config.resolve_profile(args.profile.as_deref())?;
    let roles = config.role_definitions(topology, &profile.model);

    let mut params = config.execution_params();
    if let Some(max) = args.max_steps {
        if max == 0 {
            bail!("--max-steps must be at least 1");
        }
        params = params.with_max_steps(max);
    }
    info!(
        "Profile '{}' ({} via {}), topology {}",
        profile.name, profile.model, profile.base_url, topology
    );

    // === Dependency Injection ===
    let executor = Arc::new(
        LocalToolExecutor::new(&root)
            .with_context(|| format!("workspace root {} is not usable", root.display()))?,
    );
    let gateway = Arc::new(OpenAiGateway::from_profile(&profile));

    let progress: Arc<dyn WorkflowProgressNotifier> = if quiet {
        Arc::new(NoProgress)
    } else {
        Arc::new(ProgressReporter::new())
    };

    let mut use_case = RunWorkflowUseCase::new(gateway, executor)
        .with_progress(progress)
        .with_execution_params(params);

    if config.logging.conversation_log && !args.no_log {
        match workspace::transcript_dir(&root) {
            Some(dir) => {
                if let Some(logger) = JsonlConversationLogger::for_run(dir) {
                    info!("Conversation log: {}", logger.path().display());
                    let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                    use_case = use_case.with_conversation_logger(logger);
                }
            }
            None => warn!(
                "{} is not a pecko workspace, skipping the conversation log (run `pecko init`)",
                root.display()
            ),
        }
    }

    let graph = use_case.build_graph(topology, roles)?;

    // === Run ===
    print!("{}", ConsoleFormatter::format_message(&Message::human(args.prompt.trim())));

    let mut stream = std::pin::pin!(use_case.stream(&graph, &args.prompt));
    let mut last = None;
    while let Some(item) = stream.next().await {
        match item {
            Ok(snapshot) => {
                print!("{}", ConsoleFormatter::format_messages(snapshot.new_messages()));
                last = Some(snapshot);
            }
            Err(e) => {
                eprint!("{}", ConsoleFormatter::format_failure(&e));
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    match last {
        Some(snapshot) => {
            print!("{}", ConsoleFormatter::format_summary(&RunWorkflowOutput::from(snapshot)));
            Ok(ExitCode::SUCCESS)
        }
        None => bail!("workflow finished without running a step"),
    }
}
