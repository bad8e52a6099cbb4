//! Presentation layer for pecko
//!
//! This crate contains the CLI definitions, the console formatter for
//! conversation messages and the progress reporter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, RunArgs};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
