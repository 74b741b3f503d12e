//! Exponential decay learning rate scheduler

use super::LRScheduler;

/// Exponential Learning Rate Scheduler
///
/// Formula: m_t = gamma^t
#[derive(Debug, Clone)]
pub struct ExponentialLR {
    gamma: f64,
    current_step: usize,
}

impl ExponentialLR {
    pub fn new(gamma: f64) -> Self {
        Self { gamma, current_step: 0 }
    }
}

impl LRScheduler for ExponentialLR {
    fn multiplier(&self) -> f64 {
        self.gamma.powf(self.current_step as f64)
    }

    fn step(&mut self) {
        self.current_step += 1;
    }

    fn steps(&self) -> usize {
        self.current_step
    }

    fn name(&self) -> &'static str {
        "exponential"
    }
}
