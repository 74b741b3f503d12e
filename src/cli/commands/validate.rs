//! Validate command implementation

use super::{build_from_file, Built};
use crate::cli::args::ValidateArgs;
use crate::cli::LogLevel;
use crate::Result;

/// Describe the schedule that was built
fn format_schedule_info(built: &Built) -> String {
    let scheduler = &built.config.scheduler;
    let mut lines = vec![
        format!("  Schedule: {}", scheduler.kind),
        format!("  Iterations per epoch: {}", scheduler.iters_per_train_epoch),
        format!("  Total iterations: {}", scheduler.total_train_iters),
    ];
    match scheduler.warmup_iters() {
        Some(iters) => lines.push(format!("  Warmup iterations: {iters}")),
        None => lines.push("  Warmup: disabled".to_string()),
    }
    let policy = built.schedule.scheduler().map_or("constant", |s| s.name());
    lines.push(format!("  Policy: {policy}"));
    lines.join("\n")
}

pub fn run_validate(args: &ValidateArgs, level: LogLevel) -> Result<()> {
    let built = build_from_file(&args.config, args.dataset_len)?;

    if level != LogLevel::Quiet {
        println!("Configuration is valid: {}", args.config.display());
        println!("  Optimizer: {}", built.optimizer.kind());
        println!("  Learning rate: {}", built.optimizer.lr());
        println!("{}", format_schedule_info(&built));
    }

    Ok(())
}
