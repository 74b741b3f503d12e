//! Preview command implementation

use super::build_from_file;
use crate::cli::args::PreviewArgs;
use crate::cli::LogLevel;
use crate::optim::{LrSchedule, Optimizer};
use crate::Result;

/// Sample the learning rate the optimizer sees at each iteration
///
/// Returns `(iteration, lr)` for iteration 0 and every `every`-th iteration
/// up to and including `total_iters`. The final iteration is always present.
pub fn learning_rate_curve<O: Optimizer + ?Sized>(
    schedule: &mut LrSchedule,
    optimizer: &mut O,
    total_iters: usize,
    every: usize,
) -> Vec<(usize, f32)> {
    let every = every.max(1);
    let mut curve = vec![(0, optimizer.lr())];
    for iteration in 1..=total_iters {
        schedule.step(optimizer);
        if iteration % every == 0 || iteration == total_iters {
            curve.push((iteration, optimizer.lr()));
        }
    }
    curve
}

pub fn run_preview(args: &PreviewArgs, level: LogLevel) -> Result<()> {
    let mut built = build_from_file(&args.config, args.dataset_len)?;
    let total_iters = built.config.scheduler.total_train_iters;
    let every = usize::try_from(args.every).unwrap_or(usize::MAX);

    let curve = learning_rate_curve(
        &mut built.schedule,
        built.optimizer.as_mut(),
        total_iters,
        every,
    );

    if level != LogLevel::Quiet {
        println!("iteration,lr");
    }
    for (iteration, lr) in curve {
        println!("{iteration},{lr:.6e}");
    }

    Ok(())
}
