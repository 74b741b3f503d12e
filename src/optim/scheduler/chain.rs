//! Sequential warmup → decay composition

use super::{LRScheduler, LinearWarmupLR};

/// Which sub-scheduler of a [`ScheduleChain`] is currently in control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainPhase {
    Warmup,
    Main,
}

/// A warmup scheduler followed by a decay scheduler
///
/// The chain owns the only global iteration counter. The first
/// `switch_point` steps go to the warmup, every later step goes to the
/// decay scheduler, so the decay scheduler's own step count is always
/// `elapsed - switch_point` once it is active. Neither sub-scheduler is
/// rewound or fast-forwarded.
///
/// At `elapsed == switch_point` the warmup has reached 1.0 and the decay
/// scheduler reports its step-zero multiplier (1.0), so the handover is
/// continuous.
#[derive(Debug)]
pub struct ScheduleChain {
    warmup: LinearWarmupLR,
    main: Box<dyn LRScheduler>,
    switch_point: usize,
    elapsed: usize,
}

impl ScheduleChain {
    /// Run `warmup` to completion, then hand every later step to `main`
    ///
    /// The switch point is the warmup length. Both schedulers must be fresh
    /// (zero steps taken).
    pub fn new(warmup: LinearWarmupLR, main: Box<dyn LRScheduler>) -> Self {
        debug_assert_eq!(warmup.steps(), 0, "warmup scheduler already advanced");
        debug_assert_eq!(main.steps(), 0, "main scheduler already advanced");
        let switch_point = warmup.warmup_steps();
        Self { warmup, main, switch_point, elapsed: 0 }
    }

    pub fn phase(&self) -> ChainPhase {
        if self.elapsed < self.switch_point {
            ChainPhase::Warmup
        } else {
            ChainPhase::Main
        }
    }

    /// Global iterations consumed so far
    pub fn elapsed(&self) -> usize {
        self.elapsed
    }

    pub fn switch_point(&self) -> usize {
        self.switch_point
    }

    pub fn warmup(&self) -> &LinearWarmupLR {
        &self.warmup
    }

    pub fn main(&self) -> &dyn LRScheduler {
        self.main.as_ref()
    }

    fn advance(&mut self, metric: Option<f64>) {
        let phase = self.phase();
        self.elapsed += 1;

        match phase {
            ChainPhase::Warmup => {
                self.warmup.step();
                if self.elapsed == self.switch_point {
                    tracing::debug!(
                        iteration = self.elapsed,
                        next = self.main.name(),
                        "warmup complete"
                    );
                }
            }
            ChainPhase::Main => match metric {
                Some(value) => self.main.step_with_metric(value),
                None => self.main.step(),
            },
        }

        debug_assert_eq!(self.main.steps(), self.elapsed.saturating_sub(self.switch_point));
    }
}

impl LRScheduler for ScheduleChain {
    fn multiplier(&self) -> f64 {
        match self.phase() {
            ChainPhase::Warmup => self.warmup.multiplier(),
            ChainPhase::Main => self.main.multiplier(),
        }
    }

    fn step(&mut self) {
        self.advance(None);
    }

    /// Metrics reported during warmup are dropped
    fn step_with_metric(&mut self, metric: f64) {
        self.advance(Some(metric));
    }

    fn steps(&self) -> usize {
        self.elapsed
    }

    fn is_exhausted(&self) -> bool {
        self.phase() == ChainPhase::Main && self.main.is_exhausted()
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}
