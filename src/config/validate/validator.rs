//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::{OptimizerConfig, ScheduleConfig, ScheduleKind};
use crate::optim::OptimizerKind;

/// Validate an optimizer specification and resolve its kind
///
/// Checks:
/// - The kind is in the registry
/// - Learning rate and weight decay are in range
/// - SGD carries `momentum` and `nesterov`
pub fn validate_optimizer(spec: &OptimizerConfig) -> Result<OptimizerKind, ValidationError> {
    let kind = OptimizerKind::from_name(&spec.kind).ok_or_else(|| {
        ValidationError::UnknownOptimizer {
            kind: spec.kind.clone(),
            supported: OptimizerKind::supported(),
        }
    })?;

    if spec.lr.is_nan() || spec.lr <= 0.0 {
        return Err(ValidationError::InvalidLearningRate(spec.lr));
    }

    if spec.weight_decay.is_nan() || spec.weight_decay < 0.0 {
        return Err(ValidationError::InvalidWeightDecay(spec.weight_decay));
    }

    if kind.requires_momentum() {
        let missing = |field| ValidationError::MissingOptimizerField {
            kind: kind.name().to_string(),
            field,
        };
        let momentum = spec.momentum.ok_or_else(|| missing("momentum"))?;
        let nesterov = spec.nesterov.ok_or_else(|| missing("nesterov"))?;

        if momentum.is_nan() || momentum < 0.0 {
            return Err(ValidationError::InvalidMomentum(momentum));
        }
        if nesterov && momentum <= 0.0 {
            return Err(ValidationError::NesterovWithoutMomentum);
        }
    }

    Ok(kind)
}

/// Validate a schedule specification
///
/// The decay-factor consistency rule is checked first. Unrecognized and
/// `none` kinds pass; the builder turns them into a constant schedule.
pub fn validate_schedule(spec: &ScheduleConfig) -> Result<(), ValidationError> {
    let kind = spec.schedule_kind();

    if kind.requires_factor() && spec.factor.is_none() {
        return Err(ValidationError::MissingDecayFactor(spec.kind.clone()));
    }

    if let Some(factor) = spec.factor {
        if factor.is_nan() || factor <= 0.0 || factor >= 1.0 {
            return Err(ValidationError::InvalidDecayFactor(factor));
        }
    }

    if spec.iters_per_train_epoch == 0 {
        return Err(ValidationError::InvalidItersPerEpoch(spec.iters_per_train_epoch));
    }

    if spec.total_train_iters == 0 {
        return Err(ValidationError::InvalidTotalIters(spec.total_train_iters));
    }

    if spec.warmup_enabled() {
        if spec.warmup_epochs < 0 {
            return Err(ValidationError::InvalidWarmupEpochs(spec.warmup_epochs));
        }
        // Overflow counts as exceeding
        let fits = spec.warmup_iters().is_some_and(|iters| iters <= spec.total_train_iters);
        if !fits {
            return Err(ValidationError::WarmupExceedsTotal {
                warmup_epochs: spec.warmup_epochs,
                total_iters: spec.total_train_iters,
            });
        }
    }

    match kind {
        ScheduleKind::MultiStep => {
            if spec.decay_steps.is_empty() {
                return Err(ValidationError::MissingScheduleField {
                    kind: spec.kind.clone(),
                    field: "decay_steps",
                });
            }
            if spec.decay_steps.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(ValidationError::UnorderedMilestones(spec.decay_steps.clone()));
            }
        }
        ScheduleKind::Plateau => {
            if spec.patience.is_none() {
                return Err(ValidationError::MissingScheduleField {
                    kind: spec.kind.clone(),
                    field: "patience",
                });
            }
            if spec.mode.is_none() {
                return Err(ValidationError::MissingScheduleField {
                    kind: spec.kind.clone(),
                    field: "mode",
                });
            }
            if spec.threshold.is_nan() || spec.threshold < 0.0 {
                return Err(ValidationError::InvalidThreshold(spec.threshold));
            }
        }
        ScheduleKind::Exponential
        | ScheduleKind::Cosine
        | ScheduleKind::Constant
        | ScheduleKind::Unrecognized => {}
    }

    Ok(())
}
