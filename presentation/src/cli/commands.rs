//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use pecko_domain::Topology;
use std::path::PathBuf;

/// CLI arguments for pecko
#[derive(Parser, Debug)]
#[command(name = "pecko")]
#[command(author, version, about = "pecko: local multi-agent workspace assistant")]
#[command(long_about = r#"
pecko runs one or more LLM roles against a local workspace. Roles share one
conversation and may list, read and write files under the workspace root.

Topologies:
  single     One general agent that loops on tools until it answers
  pipeline   Planner -> Worker -> Reviewer, each with its own tool loop

Configuration files are loaded from (in priority order):
1. PECKO_* environment variables
2. --config <path>                 Explicit config file
3. <workspace>/.pecko/config.toml  Workspace config
4. ~/.config/pecko/config.toml     Global config

Example:
  pecko init
  pecko run "Create notes.txt containing hello"
  pecko run --topology pipeline "Add a README describing src/"
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a pecko workspace by creating .pecko/ and its config
    Init {
        /// Directory to initialize
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Re-initialize if already initialized
        #[arg(long)]
        force: bool,
    },

    /// Show whether PATH is inside a pecko workspace
    Status {
        /// Directory to check
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Run a prompt through the workflow
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// The task for the agents
    pub prompt: String,

    /// Graph wiring: "single" or "pipeline" (overrides the config)
    #[arg(short, long, value_name = "TOPOLOGY")]
    pub topology: Option<Topology>,

    /// Config profile to use instead of `active_profile`
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Workspace root (default: nearest directory with .pecko/, else the
    /// current directory)
    #[arg(short, long, value_name = "PATH")]
    pub workspace: Option<PathBuf>,

    /// Stop after this many steps (overrides the config)
    #[arg(long, value_name = "N")]
    pub max_steps: Option<usize>,

    /// Do not write a conversation transcript
    #[arg(long)]
    pub no_log: bool,
}
