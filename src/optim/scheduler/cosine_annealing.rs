//! Cosine annealing learning rate scheduler

use super::LRScheduler;
use std::f64::consts::PI;

/// Cosine Annealing Learning Rate Scheduler
///
/// Decreases the multiplier along a half cosine from 1.0 to 0.0 over `t_max`
/// steps and holds 0.0 afterwards.
///
/// Formula: m_t = 0.5 * (1 + cos(pi * t / T))
///
/// A `t_max` of zero leaves no room to decay and keeps the multiplier at 1.0.
#[derive(Debug, Clone)]
pub struct CosineAnnealingLR {
    t_max: usize,
    current_step: usize,
}

impl CosineAnnealingLR {
    /// Create a new cosine annealing scheduler
    ///
    /// # Arguments
    /// * `t_max` - Number of steps from 1.0 down to 0.0
    pub fn new(t_max: usize) -> Self {
        Self { t_max, current_step: 0 }
    }

    pub fn t_max(&self) -> usize {
        self.t_max
    }
}

impl LRScheduler for CosineAnnealingLR {
    fn multiplier(&self) -> f64 {
        if self.t_max == 0 {
            return 1.0;
        }
        if self.current_step >= self.t_max {
            return 0.0;
        }

        let progress = self.current_step as f64 / self.t_max as f64;
        0.5 * (1.0 + (PI * progress).cos())
    }

    fn step(&mut self) {
        self.current_step += 1;
    }

    fn steps(&self) -> usize {
        self.current_step
    }

    fn is_exhausted(&self) -> bool {
        self.current_step >= self.t_max
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}
