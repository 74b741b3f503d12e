//! Multi-step decay learning rate scheduler

use super::LRScheduler;

/// Multi-Step Learning Rate Scheduler
///
/// Multiplies the multiplier by `gamma` each time a milestone is reached.
/// Milestones are iteration counts measured from the step this scheduler
/// starts receiving, not from the start of training.
///
/// Formula: m_t = gamma^|{ m in milestones : m <= t }|
#[derive(Debug, Clone)]
pub struct MultiStepLR {
    milestones: Vec<usize>,
    gamma: f64,
    current_step: usize,
}

impl MultiStepLR {
    /// Create a new multi-step scheduler from iteration milestones
    pub fn new(mut milestones: Vec<usize>, gamma: f64) -> Self {
        milestones.sort_unstable();
        Self { milestones, gamma, current_step: 0 }
    }

    /// Create from epoch milestones, converting each to an iteration count
    pub fn from_epochs(epoch_milestones: &[usize], iters_per_epoch: usize, gamma: f64) -> Self {
        let milestones =
            epoch_milestones.iter().map(|epoch| epoch.saturating_mul(iters_per_epoch)).collect();
        Self::new(milestones, gamma)
    }

    pub fn milestones(&self) -> &[usize] {
        &self.milestones
    }

    fn decays_applied(&self) -> usize {
        self.milestones.partition_point(|&milestone| milestone <= self.current_step)
    }
}

impl LRScheduler for MultiStepLR {
    fn multiplier(&self) -> f64 {
        self.gamma.powi(self.decays_applied() as i32)
    }

    fn step(&mut self) {
        self.current_step += 1;
    }

    fn steps(&self) -> usize {
        self.current_step
    }

    fn is_exhausted(&self) -> bool {
        self.decays_applied() == self.milestones.len()
    }

    fn name(&self) -> &'static str {
        "multistep"
    }
}
