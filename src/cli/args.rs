//! Argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Calentar: optimizer and learning-rate schedule construction
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "calentar")]
#[command(version)]
#[command(about = "Build optimizers and learning-rate schedules from YAML experiment files")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate an experiment file and build its optimizer and schedule
    Validate(ValidateArgs),

    /// Print the learning rate the schedule produces at each iteration
    Preview(PreviewArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML experiment file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Number of training examples, used to derive iterations per epoch
    #[arg(long)]
    pub dataset_len: usize,
}

/// Arguments for the preview command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PreviewArgs {
    /// Path to YAML experiment file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Number of training examples, used to derive iterations per epoch
    #[arg(long)]
    pub dataset_len: usize,

    /// Print every N-th iteration
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub every: u64,
}

/// Parse command-line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
