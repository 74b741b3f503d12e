//! Validation error types

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid learning rate: {0} (must be > 0.0)")]
    InvalidLearningRate(f64),

    #[error("Invalid weight decay: {0} (must be >= 0.0)")]
    InvalidWeightDecay(f64),

    #[error("Unknown optimizer kind '{kind}' (supported: {supported})")]
    UnknownOptimizer { kind: String, supported: String },

    #[error("Optimizer {kind} requires '{field}'")]
    MissingOptimizerField { kind: String, field: &'static str },

    #[error("Invalid momentum: {0} (must be >= 0.0)")]
    InvalidMomentum(f64),

    #[error("Nesterov momentum requires momentum > 0.0")]
    NesterovWithoutMomentum,

    #[error("missing decay factor for {0}")]
    MissingDecayFactor(String),

    #[error("Invalid decay factor: {0} (must be in (0.0, 1.0))")]
    InvalidDecayFactor(f64),

    #[error("Schedule {kind} requires '{field}'")]
    MissingScheduleField { kind: String, field: &'static str },

    #[error("Multistep milestones must be strictly increasing: {0:?}")]
    UnorderedMilestones(Vec<usize>),

    #[error("Invalid plateau threshold: {0} (must be >= 0.0)")]
    InvalidThreshold(f64),

    #[error("Invalid warmup epochs: {0} (must be >= 0, or -1 to disable)")]
    InvalidWarmupEpochs(i64),

    #[error("Invalid iterations per epoch: {0} (must be > 0)")]
    InvalidItersPerEpoch(usize),

    #[error("Invalid total iterations: {0} (must be > 0)")]
    InvalidTotalIters(usize),

    #[error("Warmup of {warmup_epochs} epochs exceeds the {total_iters} total training iterations")]
    WarmupExceedsTotal { warmup_epochs: i64, total_iters: usize },
}
