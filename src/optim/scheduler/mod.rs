//! Learning rate schedulers
//!
//! Every scheduler produces a *multiplier* on the optimizer's base learning
//! rate and is advanced once per completed optimizer step:
//! - `LinearWarmupLR` - Linear ramp from ~0 to 1.0
//! - `MultiStepLR` - Decay by a factor at fixed milestones
//! - `ReduceLROnPlateau` - Decay when a reported metric stops improving
//! - `ExponentialLR` - Decay by a factor every step
//! - `CosineAnnealingLR` - Half-cosine from 1.0 to 0.0
//! - `ScheduleChain` - Warmup followed by one of the decay policies
//!
//! [`LrSchedule`] pairs a scheduler with the base learning rate and writes the
//! result into an [`crate::optim::Optimizer`].

mod chain;
mod cosine_annealing;
mod exponential;
mod linear_warmup;
mod multi_step;
mod plateau;
mod schedule;

#[cfg(test)]
mod proptests;

pub use chain::{ChainPhase, ScheduleChain};
pub use cosine_annealing::CosineAnnealingLR;
pub use exponential::ExponentialLR;
pub use linear_warmup::{LinearWarmupLR, WARMUP_START_FACTOR};
pub use multi_step::MultiStepLR;
pub use plateau::{PlateauMode, ReduceLROnPlateau};
pub use schedule::LrSchedule;

use std::fmt;

/// Learning rate scheduler trait
pub trait LRScheduler: fmt::Debug + Send {
    /// Factor applied to the base learning rate at the current step
    fn multiplier(&self) -> f64;

    /// Consume one completed training iteration
    fn step(&mut self);

    /// Consume one completed training iteration and report a metric
    ///
    /// Only metric-driven schedulers look at the value.
    fn step_with_metric(&mut self, metric: f64) {
        let _ = metric;
        self.step();
    }

    /// Iterations consumed so far
    fn steps(&self) -> usize;

    /// True once further steps can no longer change the multiplier
    fn is_exhausted(&self) -> bool {
        false
    }

    /// Short policy name, as used in configuration
    fn name(&self) -> &'static str;
}
