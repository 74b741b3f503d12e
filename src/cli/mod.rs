//! Command-line interface for calentar
//!
//! The binary exercises the full construction path: load a YAML experiment,
//! resolve iteration counts for a dataset size, build the optimizer and
//! schedule, and report what was built.

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, PreviewArgs, ValidateArgs};
pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};
