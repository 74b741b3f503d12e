//! Build training components from configuration

use super::schema::{OptimizerConfig, ScheduleConfig, ScheduleKind};
use super::validate::{validate_optimizer, validate_schedule, ValidationError};
use crate::error::{Error, Result};
use crate::optim::{
    Adagrad, Adam, AdamW, CosineAnnealingLR, ExponentialLR, LRScheduler, LinearWarmupLR,
    LrSchedule, MultiStepLR, Optimizer, OptimizerKind, RMSProp, ReduceLROnPlateau,
    ScheduleChain, SGD,
};
use crate::Tensor;
use tracing::{info, warn};

/// Build optimizer from configuration
///
/// SGD takes its momentum and Nesterov flag from the config; every other kind
/// gets the learning rate and weight decay, with library defaults for the rest.
/// `params` is only inspected.
pub fn build_optimizer(params: &[Tensor], spec: &OptimizerConfig) -> Result<Box<dyn Optimizer>> {
    let kind = validate_optimizer(spec)?;

    if params.is_empty() {
        return Err(Error::ConfigError(format!("{kind} optimizer got an empty parameter list")));
    }

    let lr = spec.lr as f32;
    let weight_decay = spec.weight_decay as f32;

    let optimizer: Box<dyn Optimizer> = match kind {
        OptimizerKind::Sgd => {
            // validate_optimizer guarantees both fields for SGD
            let momentum = spec.momentum.unwrap_or_default() as f32;
            let nesterov = spec.nesterov.unwrap_or_default();
            Box::new(SGD::with_options(lr, momentum, nesterov, weight_decay))
        }
        OptimizerKind::Adam => Box::new(Adam::default_params(lr).with_weight_decay(weight_decay)),
        OptimizerKind::AdamW => Box::new(AdamW::new(lr, 0.9, 0.999, 1e-8, weight_decay)),
        OptimizerKind::RmsProp => {
            Box::new(RMSProp::default_params(lr).with_weight_decay(weight_decay))
        }
        OptimizerKind::Adagrad => {
            Box::new(Adagrad::default_params(lr).with_weight_decay(weight_decay))
        }
    };

    info!(%kind, lr, weight_decay, params = params.len(), "built optimizer");
    Ok(optimizer)
}

/// Build the warmup scheduler, or `None` when `warmup_epochs` is -1
pub fn build_warmup_policy(spec: &ScheduleConfig) -> Result<Option<LinearWarmupLR>> {
    if !spec.warmup_enabled() {
        return Ok(None);
    }
    validate_schedule(spec)?;
    Ok(spec.warmup_iters().map(LinearWarmupLR::new))
}

/// Build the decay scheduler named by the config
///
/// Returns `Ok(None)` with a warning for `none` and unrecognized kinds; the
/// learning rate then stays constant after warmup.
pub fn build_decay_policy(spec: &ScheduleConfig) -> Result<Option<Box<dyn LRScheduler>>> {
    validate_schedule(spec)?;
    decay_policy(spec)
}

/// Build the full learning-rate schedule for `optimizer`
///
/// Validates first, so a bad config leaves the optimizer untouched. On
/// success the optimizer's learning rate is set to the schedule's
/// step-zero value.
///
/// The optimizer's current learning rate is taken as the base rate, so the
/// optimizer must still carry its configured rate. To rebuild a schedule
/// for an optimizer that has already been scheduled, restore the base first
/// with `optimizer.set_lr(schedule.base_lr() as f32)`.
///
/// - warmup and decay: [`ScheduleChain`] switching at the warmup length
/// - only one of them: that scheduler on its own
/// - neither: a constant schedule
pub fn build_schedule<O: Optimizer + ?Sized>(
    optimizer: &mut O,
    spec: &ScheduleConfig,
) -> Result<LrSchedule> {
    validate_schedule(spec)?;

    let decay = decay_policy(spec)?;
    let warmup = spec.warmup_iters().map(LinearWarmupLR::new);

    let scheduler: Option<Box<dyn LRScheduler>> = match (warmup, decay) {
        (Some(warmup), Some(decay)) => {
            Some(Box::new(ScheduleChain::new(warmup, decay)))
        }
        (Some(warmup), None) => Some(Box::new(warmup)),
        (None, decay) => decay,
    };

    let schedule = LrSchedule::new(f64::from(optimizer.lr()), scheduler);
    schedule.apply(optimizer);

    info!(
        kind = %spec.schedule_kind(),
        scheduler = schedule.scheduler().map_or("constant", |s| s.name()),
        warmup_iters = spec.warmup_iters().unwrap_or(0),
        total_iters = spec.total_train_iters,
        "built learning-rate schedule"
    );
    Ok(schedule)
}

/// Construct the decay scheduler for an already validated config
fn decay_policy(spec: &ScheduleConfig) -> Result<Option<Box<dyn LRScheduler>>> {
    let kind = spec.schedule_kind();
    let factor = || spec.factor.ok_or_else(|| ValidationError::MissingDecayFactor(spec.kind.clone()));
    let warmup_iters = spec.warmup_iters().unwrap_or(0);

    let scheduler: Box<dyn LRScheduler> = match kind {
        ScheduleKind::MultiStep => Box::new(MultiStepLR::from_epochs(
            &spec.decay_steps,
            spec.iters_per_train_epoch,
            factor()?,
        )),
        ScheduleKind::Plateau => {
            let missing = |field| ValidationError::MissingScheduleField {
                kind: spec.kind.clone(),
                field,
            };
            Box::new(ReduceLROnPlateau::with_options(
                spec.mode.ok_or_else(|| missing("mode"))?,
                factor()?,
                spec.patience.ok_or_else(|| missing("patience"))?,
                spec.threshold,
                spec.cooldown,
            ))
        }
        ScheduleKind::Exponential => Box::new(ExponentialLR::new(factor()?)),
        ScheduleKind::Cosine => {
            Box::new(CosineAnnealingLR::new(spec.total_train_iters.saturating_sub(warmup_iters)))
        }
        ScheduleKind::Constant | ScheduleKind::Unrecognized => {
            warn!(
                scheduler = %spec.kind,
                "no learning-rate decay will be used; the learning rate stays constant after warmup"
            );
            return Ok(None);
        }
    };

    Ok(Some(scheduler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optim::PlateauMode;
    use approx::assert_abs_diff_eq;

    fn params() -> Vec<Tensor> {
        vec![Tensor::from_vec(vec![0.1, 0.2, 0.3], true)]
    }

    #[test]
    fn test_build_optimizer_registry() {
        for kind in OptimizerKind::ALL {
            let mut spec = OptimizerConfig::new(kind.name(), 0.01);
            if kind.requires_momentum() {
                spec = spec.with_momentum(0.9, false);
            }
            let optimizer = build_optimizer(&params(), &spec).expect("registered kind");
            assert_eq!(optimizer.kind(), kind);
            assert_abs_diff_eq!(optimizer.lr(), 0.01, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_build_optimizer_unknown_kind() {
        let spec = OptimizerConfig::new("Lion", 0.01);
        let err = build_optimizer(&params(), &spec).err().expect("unknown kind must fail");
        assert!(matches!(err.validation(), Some(ValidationError::UnknownOptimizer { .. })));
        assert!(err.to_string().contains("Lion"));
    }

    #[test]
    fn test_build_optimizer_sgd_requires_nesterov() {
        let mut spec = OptimizerConfig::new("SGD", 0.01);
        spec.momentum = Some(0.9);
        let err = build_optimizer(&params(), &spec).err().expect("missing nesterov");
        assert!(matches!(
            err.validation(),
            Some(ValidationError::MissingOptimizerField { field: "nesterov", .. })
        ));
    }

    #[test]
    fn test_build_optimizer_empty_params() {
        let spec = OptimizerConfig::new("Adam", 0.01);
        let err = build_optimizer(&[], &spec).err().expect("empty params");
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_build_optimizer_does_not_touch_params() {
        let mut params = params();
        params[0].set_grad(ndarray::arr1(&[1.0, 1.0, 1.0]));
        let before = params.clone();
        let spec = OptimizerConfig::new("SGD", 0.01).with_momentum(0.9, true);
        build_optimizer(&params, &spec).expect("valid sgd");
        assert_eq!(params, before);
    }

    #[test]
    fn test_build_decay_policy_kinds() {
        let base = ScheduleConfig::new("", 10, 100)
            .with_factor(0.5)
            .with_decay_steps(vec![2])
            .with_plateau(1, PlateauMode::Max);

        for (kind, name) in [
            ("multistep", "multistep"),
            ("plateau", "plateau"),
            ("exponential", "exponential"),
            ("cosine", "cosine"),
        ] {
            let mut spec = base.clone();
            spec.kind = kind.to_string();
            let policy = build_decay_policy(&spec).expect("valid").expect("some policy");
            assert_eq!(policy.name(), name);
        }
    }

    #[test]
    fn test_build_decay_policy_none_and_unrecognized() {
        for kind in ["none", "warmup_only", "polynomial"] {
            let spec = ScheduleConfig::new(kind, 10, 100);
            assert!(build_decay_policy(&spec).expect("not fatal").is_none());
        }
    }

    #[test]
    fn test_build_warmup_policy() {
        let spec = ScheduleConfig::new("cosine", 10, 100);
        assert!(build_warmup_policy(&spec).expect("valid").is_none());

        let spec = spec.with_warmup_epochs(3);
        let warmup = build_warmup_policy(&spec).expect("valid").expect("warmup");
        assert_eq!(warmup.warmup_steps(), 30);
    }

    #[test]
    fn test_build_schedule_without_warmup_is_bare_policy() {
        let mut optimizer = SGD::new(0.1, 0.0);
        let spec = ScheduleConfig::new("exponential", 10, 100).with_factor(0.5);
        let schedule = build_schedule(&mut optimizer, &spec).expect("valid");
        assert_eq!(schedule.scheduler().map(|s| s.name()), Some("exponential"));
    }

    #[test]
    fn test_build_schedule_chains_warmup_and_decay() {
        let mut optimizer = SGD::new(0.1, 0.0);
        let spec = ScheduleConfig::new("cosine", 10, 100).with_warmup_epochs(2);
        let mut schedule = build_schedule(&mut optimizer, &spec).expect("valid");
        assert_eq!(schedule.scheduler().map(|s| s.name()), Some("chain"));

        // Optimizer starts at the warmup floor
        assert!(optimizer.lr() < 1e-8);

        for _ in 0..20 {
            schedule.step(&mut optimizer);
        }
        assert_abs_diff_eq!(optimizer.lr(), 0.1, epsilon = 1e-7);
    }

    #[test]
    fn test_build_schedule_warmup_only() {
        let mut optimizer = SGD::new(0.1, 0.0);
        let spec = ScheduleConfig::new("none", 10, 100).with_warmup_epochs(1);
        let schedule = build_schedule(&mut optimizer, &spec).expect("valid");
        assert_eq!(schedule.scheduler().map(|s| s.name()), Some("warmup"));
    }

    #[test]
    fn test_build_schedule_constant() {
        let mut optimizer = SGD::new(0.1, 0.0);
        let spec = ScheduleConfig::new("none", 10, 100);
        let schedule = build_schedule(&mut optimizer, &spec).expect("valid");
        assert!(schedule.is_constant());
        assert_abs_diff_eq!(optimizer.lr(), 0.1, epsilon = 1e-9);
    }

    #[test]
    fn test_build_schedule_error_leaves_optimizer_untouched() {
        let mut optimizer = SGD::new(0.1, 0.0);
        let spec = ScheduleConfig::new("multistep", 10, 100)
            .with_decay_steps(vec![1])
            .with_warmup_epochs(1);
        let err = build_schedule(&mut optimizer, &spec).err().expect("missing factor");
        assert!(matches!(err.validation(), Some(ValidationError::MissingDecayFactor(_))));
        assert_eq!(optimizer.lr(), 0.1);
    }

    #[test]
    fn test_build_schedule_cosine_horizon_excludes_warmup() {
        let mut optimizer = SGD::new(0.1, 0.0);
        let spec = ScheduleConfig::new("cosine", 5, 50).with_warmup_epochs(1);
        let mut schedule = build_schedule(&mut optimizer, &spec).expect("valid");
        for _ in 0..5 {
            schedule.advance();
        }
        assert_eq!(schedule.multiplier(), 1.0);
        for _ in 0..45 {
            schedule.advance();
        }
        assert_eq!(schedule.multiplier(), 0.0);
    }

    #[test]
    fn test_build_schedule_rebuild_after_restoring_base() {
        let mut optimizer = SGD::new(0.1, 0.0);
        let spec = ScheduleConfig::new("exponential", 10, 100)
            .with_factor(0.5)
            .with_warmup_epochs(1);

        let first = build_schedule(&mut optimizer, &spec).expect("valid");
        assert!(optimizer.lr() < 1e-8);

        optimizer.set_lr(first.base_lr() as f32);
        let second = build_schedule(&mut optimizer, &spec).expect("valid");
        assert_abs_diff_eq!(second.base_lr(), first.base_lr(), epsilon = 1e-12);
        assert_abs_diff_eq!(second.base_lr(), 0.1, epsilon = 1e-7);
        assert_eq!(optimizer.lr(), first.current_learning_rate() as f32);
    }
}
