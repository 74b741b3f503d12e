//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_schedule;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_cosine() -> impl Strategy<Value = ScheduleConfig> {
    (1usize..500, 1usize..50, 0i64..50).prop_map(|(iters_per_epoch, extra_epochs, warmup)| {
        let epochs = warmup as usize + extra_epochs;
        ScheduleConfig::new("cosine", iters_per_epoch, epochs * iters_per_epoch)
            .with_warmup_epochs(warmup)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_cosine_passes(spec in arb_valid_cosine()) {
        prop_assert!(validate_schedule(&spec).is_ok());
    }

    #[test]
    fn prop_warmup_past_total_fails(
        iters_per_epoch in 1usize..500,
        warmup in 1i64..50,
        shortfall in 1usize..500,
    ) {
        let warmup_iters = warmup as usize * iters_per_epoch;
        let total = warmup_iters.saturating_sub(shortfall).max(1);
        prop_assume!(total < warmup_iters);

        let spec = ScheduleConfig::new("cosine", iters_per_epoch, total).with_warmup_epochs(warmup);
        let rejected = matches!(
            validate_schedule(&spec),
            Err(ValidationError::WarmupExceedsTotal { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_missing_factor_always_fails_first(
        kind in prop::sample::select(vec!["multistep", "plateau", "exponential"]),
        iters in 0usize..100,
    ) {
        let spec = ScheduleConfig::new(kind, iters, iters);
        prop_assert_eq!(
            validate_schedule(&spec),
            Err(ValidationError::MissingDecayFactor(kind.to_string()))
        );
    }

    #[test]
    fn prop_factor_in_unit_interval_accepted(factor in 0.001f64..0.999) {
        let spec = ScheduleConfig::new("exponential", 10, 100).with_factor(factor);
        prop_assert!(validate_schedule(&spec).is_ok());
    }
}
