//! Reduce-on-plateau learning rate scheduler

use super::LRScheduler;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a lower or a higher metric counts as an improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateauMode {
    /// Lower is better (losses)
    Min,
    /// Higher is better (accuracies)
    Max,
}

impl fmt::Display for PlateauMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("min"),
            Self::Max => f.write_str("max"),
        }
    }
}

/// Reduces the multiplier when a reported metric has stopped improving
///
/// A metric improves when it beats the best value seen by more than the
/// relative `threshold`. After more than `patience` consecutive
/// non-improving evaluations the multiplier is scaled by `factor`, the
/// counter resets and the next `cooldown` evaluations are ignored.
///
/// Plain [`LRScheduler::step`] calls only count iterations; they never
/// evaluate anything.
#[derive(Debug, Clone)]
pub struct ReduceLROnPlateau {
    mode: PlateauMode,
    factor: f64,
    patience: usize,
    threshold: f64,
    cooldown: usize,
    best: f64,
    num_bad_evaluations: usize,
    cooldown_counter: usize,
    multiplier: f64,
    reductions: usize,
    current_step: usize,
}

impl ReduceLROnPlateau {
    /// Relative improvement threshold used by [`ReduceLROnPlateau::new`]
    pub const DEFAULT_THRESHOLD: f64 = 1e-4;

    /// Create a scheduler with the default threshold and no cooldown
    pub fn new(mode: PlateauMode, factor: f64, patience: usize) -> Self {
        Self::with_options(mode, factor, patience, Self::DEFAULT_THRESHOLD, 0)
    }

    pub fn with_options(
        mode: PlateauMode,
        factor: f64,
        patience: usize,
        threshold: f64,
        cooldown: usize,
    ) -> Self {
        let best = match mode {
            PlateauMode::Min => f64::INFINITY,
            PlateauMode::Max => f64::NEG_INFINITY,
        };
        Self {
            mode,
            factor,
            patience,
            threshold,
            cooldown,
            best,
            num_bad_evaluations: 0,
            cooldown_counter: 0,
            multiplier: 1.0,
            reductions: 0,
            current_step: 0,
        }
    }

    /// Best metric reported so far
    pub fn best(&self) -> f64 {
        self.best
    }

    /// Number of times the multiplier has been reduced
    pub fn reductions(&self) -> usize {
        self.reductions
    }

    pub fn mode(&self) -> PlateauMode {
        self.mode
    }

    /// Smallest change over `best` that counts as an improvement
    ///
    /// Scaled by `|best|` so negative metrics (log-likelihoods, rewards)
    /// compare the same way as positive ones.
    fn margin(&self) -> f64 {
        if self.best.is_finite() {
            self.best.abs() * self.threshold
        } else {
            0.0
        }
    }

    fn is_improvement(&self, metric: f64) -> bool {
        match self.mode {
            PlateauMode::Min => metric < self.best - self.margin(),
            PlateauMode::Max => metric > self.best + self.margin(),
        }
    }
}

impl LRScheduler for ReduceLROnPlateau {
    fn multiplier(&self) -> f64 {
        self.multiplier
    }

    fn step(&mut self) {
        self.current_step += 1;
    }

    fn step_with_metric(&mut self, metric: f64) {
        self.current_step += 1;

        if self.is_improvement(metric) {
            self.best = metric;
            self.num_bad_evaluations = 0;
        } else {
            self.num_bad_evaluations += 1;
        }

        if self.cooldown_counter > 0 {
            self.cooldown_counter -= 1;
            self.num_bad_evaluations = 0;
        }

        if self.num_bad_evaluations > self.patience {
            self.multiplier *= self.factor;
            self.reductions += 1;
            self.cooldown_counter = self.cooldown;
            self.num_bad_evaluations = 0;
            tracing::debug!(
                metric,
                best = self.best,
                multiplier = self.multiplier,
                "plateau detected, reducing learning rate"
            );
        }
    }

    fn steps(&self) -> usize {
        self.current_step
    }

    fn name(&self) -> &'static str {
        "plateau"
    }
}
