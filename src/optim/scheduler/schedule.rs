//! Caller-facing learning rate schedule

use super::LRScheduler;
use crate::optim::Optimizer;

/// A base learning rate paired with an optional scheduler
///
/// Without a scheduler the learning rate stays at `base_lr`. The schedule
/// never holds on to the optimizer; the training loop lends it for each
/// [`LrSchedule::apply`].
#[derive(Debug)]
pub struct LrSchedule {
    base_lr: f64,
    scheduler: Option<Box<dyn LRScheduler>>,
}

impl LrSchedule {
    pub fn new(base_lr: f64, scheduler: Option<Box<dyn LRScheduler>>) -> Self {
        Self { base_lr, scheduler }
    }

    /// A schedule that never changes the learning rate
    pub fn constant(base_lr: f64) -> Self {
        Self::new(base_lr, None)
    }

    pub fn base_lr(&self) -> f64 {
        self.base_lr
    }

    pub fn scheduler(&self) -> Option<&dyn LRScheduler> {
        self.scheduler.as_deref()
    }

    pub fn is_constant(&self) -> bool {
        self.scheduler.is_none()
    }

    pub fn multiplier(&self) -> f64 {
        self.scheduler.as_ref().map_or(1.0, |s| s.multiplier())
    }

    pub fn current_learning_rate(&self) -> f64 {
        self.base_lr * self.multiplier()
    }

    /// Consume one completed training iteration
    pub fn advance(&mut self) {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.step();
        }
    }

    /// Consume one completed training iteration and report a metric
    pub fn advance_with_metric(&mut self, metric: f64) {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.step_with_metric(metric);
        }
    }

    /// Write the current learning rate into the optimizer
    pub fn apply<O: Optimizer + ?Sized>(&self, optimizer: &mut O) {
        optimizer.set_lr(self.current_learning_rate() as f32);
    }

    /// [`LrSchedule::advance`] followed by [`LrSchedule::apply`]
    pub fn step<O: Optimizer + ?Sized>(&mut self, optimizer: &mut O) {
        self.advance();
        self.apply(optimizer);
    }

    /// [`LrSchedule::advance_with_metric`] followed by [`LrSchedule::apply`]
    pub fn step_with_metric<O: Optimizer + ?Sized>(&mut self, optimizer: &mut O, metric: f64) {
        self.advance_with_metric(metric);
        self.apply(optimizer);
    }
}
