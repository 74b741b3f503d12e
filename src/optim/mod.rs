//! Optimizers and learning-rate schedules

mod adagrad;
mod adam;
mod adamw;
mod kind;
mod optimizer;
mod rmsprop;
pub mod scheduler;
mod sgd;

pub use adagrad::Adagrad;
pub use adam::Adam;
pub use adamw::AdamW;
pub use kind::OptimizerKind;
pub use optimizer::Optimizer;
pub use rmsprop::RMSProp;
pub use scheduler::{
    ChainPhase, CosineAnnealingLR, ExponentialLR, LRScheduler, LinearWarmupLR, LrSchedule,
    MultiStepLR, PlateauMode, ReduceLROnPlateau, ScheduleChain, WARMUP_START_FACTOR,
};
pub use sgd::SGD;
