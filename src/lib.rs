//! # Calentar
//!
//! Builds the two stateful collaborators a training loop needs from a
//! declarative hyperparameter description:
//!
//! * **[`optim::Optimizer`]**: SGD, Adam, AdamW, RMSProp or Adagrad, resolved
//!   through an explicit [`optim::OptimizerKind`] registry.
//! * **[`optim::LrSchedule`]**: an optional linear warmup fused with a decay
//!   policy (multistep, plateau, exponential, cosine) into one object that is
//!   advanced once per optimizer step.
//!
//! ```
//! use calentar::config::{build_optimizer, build_schedule, OptimizerConfig, ScheduleConfig};
//! use calentar::Tensor;
//!
//! let params = vec![Tensor::from_vec(vec![0.5, -0.5], true)];
//! let mut optimizer = build_optimizer(&params, &OptimizerConfig::new("AdamW", 1e-3))?;
//!
//! let cfg = ScheduleConfig::new("cosine", 100, 2_000).with_warmup_epochs(2);
//! let mut schedule = build_schedule(optimizer.as_mut(), &cfg)?;
//!
//! for _ in 0..200 {
//!     schedule.step(optimizer.as_mut());
//! }
//! assert!((schedule.current_learning_rate() - 1e-3).abs() < 1e-6);
//! # Ok::<(), calentar::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod optim;
mod tensor;

pub use error::{Error, Result};
pub use tensor::Tensor;
