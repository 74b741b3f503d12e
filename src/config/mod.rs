//! Declarative configuration and the factories that turn it into live
//! optimizers and learning-rate schedules

mod builder;
mod loader;
mod schema;
mod validate;

pub use builder::{build_decay_policy, build_optimizer, build_schedule, build_warmup_policy};
pub use loader::load_experiment;
pub use schema::{ExperimentConfig, OptimizerConfig, ScheduleConfig, ScheduleKind, TrainConfig};
pub use validate::{validate_optimizer, validate_schedule, ValidationError};
