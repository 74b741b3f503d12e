//! CLI command implementations

mod preview;
mod validate;

use super::args::{Cli, Command};
use super::logging::{init_tracing, LogLevel};
use crate::config::{build_optimizer, build_schedule, load_experiment, ExperimentConfig};
use crate::optim::{LrSchedule, Optimizer};
use crate::{Result, Tensor};
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let level = LogLevel::from_flags(cli.quiet, cli.verbose);
    init_tracing(level);

    match cli.command {
        Command::Validate(args) => validate::run_validate(&args, level),
        Command::Preview(args) => preview::run_preview(&args, level),
    }
}

/// An optimizer and schedule built from a resolved experiment
struct Built {
    config: ExperimentConfig,
    optimizer: Box<dyn Optimizer>,
    schedule: LrSchedule,
}

/// Load, resolve and build everything an experiment file describes
///
/// The optimizer is built over a single placeholder parameter; the
/// commands only look at its learning rate.
fn build_from_file(path: &Path, dataset_len: usize) -> Result<Built> {
    let config = load_experiment(path)?.resolve(dataset_len)?;
    let params = [Tensor::zeros(1, true)];
    let mut optimizer = build_optimizer(&params, &config.optimizer)?;
    let schedule = build_schedule(optimizer.as_mut(), &config.scheduler)?;

    Ok(Built {
        config,
        optimizer,
        schedule,
    })
}
