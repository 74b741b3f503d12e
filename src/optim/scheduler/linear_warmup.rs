//! Linear warmup learning rate scheduler

use super::LRScheduler;

/// Multiplier a warmup starts from: practically zero, but never exactly zero
pub const WARMUP_START_FACTOR: f64 = 1e-8;

/// Linear Warmup Learning Rate Scheduler
///
/// Linearly increases the multiplier from `start_factor` to 1.0 over
/// `warmup_steps`, then holds 1.0.
///
/// Formula: m_t = start + (1 - start) * min(1, t / warmup_steps)
#[derive(Debug, Clone)]
pub struct LinearWarmupLR {
    start_factor: f64,
    warmup_steps: usize,
    current_step: usize,
}

impl LinearWarmupLR {
    /// Create a warmup starting at [`WARMUP_START_FACTOR`]
    pub fn new(warmup_steps: usize) -> Self {
        Self::with_start_factor(WARMUP_START_FACTOR, warmup_steps)
    }

    /// Create a warmup with an explicit starting multiplier
    pub fn with_start_factor(start_factor: f64, warmup_steps: usize) -> Self {
        Self { start_factor, warmup_steps, current_step: 0 }
    }

    pub fn warmup_steps(&self) -> usize {
        self.warmup_steps
    }
}

impl LRScheduler for LinearWarmupLR {
    fn multiplier(&self) -> f64 {
        if self.current_step >= self.warmup_steps {
            return 1.0;
        }

        let progress = self.current_step as f64 / self.warmup_steps as f64;
        self.start_factor + (1.0 - self.start_factor) * progress
    }

    fn step(&mut self) {
        self.current_step += 1;
    }

    fn steps(&self) -> usize {
        self.current_step
    }

    fn is_exhausted(&self) -> bool {
        self.current_step >= self.warmup_steps
    }

    fn name(&self) -> &'static str {
        "warmup"
    }
}
