//! Property-based tests for scheduler composition

use super::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// `(warmup_iters, iters_per_epoch, total_iters)` with warmup on an epoch
/// boundary and at least one epoch of decay
fn arb_horizon() -> impl Strategy<Value = (usize, usize, usize)> {
    (0usize..30, 1usize..20, 1usize..20).prop_map(|(warmup_epochs, iters_per_epoch, decay_epochs)| {
        let warmup = warmup_epochs * iters_per_epoch;
        (warmup, iters_per_epoch, warmup + decay_epochs * iters_per_epoch)
    })
}

fn arb_milestones() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::btree_set(1usize..15, 1..4).prop_map(|set: BTreeSet<usize>| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_chain_main_progress_tracks_elapsed((warmup, _, total) in arb_horizon()) {
        let mut chain = ScheduleChain::new(
            LinearWarmupLR::new(warmup),
            Box::new(CosineAnnealingLR::new(total - warmup)),
        );
        prop_assert_eq!(chain.switch_point(), warmup);
        for _ in 0..total + 5 {
            chain.step();
            prop_assert_eq!(chain.main().steps(), chain.elapsed().saturating_sub(warmup));
            prop_assert_eq!(chain.warmup().steps(), chain.elapsed().min(warmup));
        }
    }

    #[test]
    fn prop_warmup_cosine_shape((warmup, _, total) in arb_horizon()) {
        let mut chain = ScheduleChain::new(
            LinearWarmupLR::new(warmup),
            Box::new(CosineAnnealingLR::new(total - warmup)),
        );
        let mut curve = vec![chain.multiplier()];
        for _ in 0..total {
            chain.step();
            curve.push(chain.multiplier());
        }

        for t in 0..warmup {
            prop_assert!(curve[t + 1] > curve[t], "warmup not increasing at {}", t);
        }
        prop_assert_eq!(curve[warmup], 1.0);
        for t in warmup..total {
            prop_assert!(curve[t + 1] < curve[t], "cosine not decreasing at {}", t);
        }
        prop_assert_eq!(curve[total], 0.0);
    }

    #[test]
    fn prop_multistep_constant_between_milestones(
        (warmup, iters_per_epoch, _) in arb_horizon(),
        milestones in arb_milestones(),
        gamma in 0.05f64..0.95,
    ) {
        let mut chain = ScheduleChain::new(
            LinearWarmupLR::new(warmup),
            Box::new(MultiStepLR::from_epochs(&milestones, iters_per_epoch, gamma)),
        );
        let horizon = warmup + (milestones[milestones.len() - 1] + 1) * iters_per_epoch;
        for _ in 0..warmup {
            chain.step();
        }

        for local in 0..horizon - warmup {
            let passed = milestones.iter().filter(|&&m| m * iters_per_epoch <= local).count();
            let expected = gamma.powi(passed as i32);
            prop_assert!(
                (chain.multiplier() - expected).abs() < 1e-12,
                "local step {}: {} != {}", local, chain.multiplier(), expected
            );
            chain.step();
        }
    }

    #[test]
    fn prop_plateau_constant_metric_decays_once_per_patience_window(
        metric in -1e3f64..1e3,
        patience in 0usize..6,
        max_mode in any::<bool>(),
    ) {
        let mode = if max_mode { PlateauMode::Max } else { PlateauMode::Min };
        let mut scheduler = ReduceLROnPlateau::new(mode, 0.5, patience);
        scheduler.step_with_metric(metric);

        let mut decayed_at = Vec::new();
        for call in 0..=patience {
            let before = scheduler.multiplier();
            scheduler.step_with_metric(metric);
            if scheduler.multiplier() < before {
                decayed_at.push(call);
            }
        }
        prop_assert_eq!(decayed_at, vec![patience]);
    }
}
