//! YAML schema definitions for optimizer and schedule configuration

use crate::optim::PlateauMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserialize a decay factor, mapping negative sentinels such as the
/// legacy `-1` to `None`.
fn deserialize_factor<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.filter(|factor| !factor.is_sign_negative()))
}

/// Optimizer specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Optimizer name: "SGD" | "Adam" | "AdamW" | "RMSProp" | "Adagrad"
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,

    /// Base learning rate
    pub lr: f64,

    /// L2 regularization coefficient
    #[serde(default)]
    pub weight_decay: f64,

    /// Momentum (SGD only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub momentum: Option<f64>,

    /// Nesterov momentum (SGD only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nesterov: Option<bool>,
}

impl OptimizerConfig {
    pub fn new(kind: impl Into<String>, lr: f64) -> Self {
        Self { kind: kind.into(), lr, weight_decay: 0.0, momentum: None, nesterov: None }
    }

    #[must_use]
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    #[must_use]
    pub fn with_momentum(mut self, momentum: f64, nesterov: bool) -> Self {
        self.momentum = Some(momentum);
        self.nesterov = Some(nesterov);
        self
    }
}

/// Decay policy named by a schedule configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    MultiStep,
    Plateau,
    Exponential,
    Cosine,
    /// Explicitly no decay
    Constant,
    /// A tag no policy is registered for
    Unrecognized,
}

impl ScheduleKind {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "multistep" => Self::MultiStep,
            "plateau" => Self::Plateau,
            "exponential" => Self::Exponential,
            "cosine" => Self::Cosine,
            "none" | "" => Self::Constant,
            _ => Self::Unrecognized,
        }
    }

    /// Whether the policy needs a decay factor
    pub fn requires_factor(self) -> bool {
        matches!(self, Self::MultiStep | Self::Plateau | Self::Exponential)
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MultiStep => "multistep",
            Self::Plateau => "plateau",
            Self::Exponential => "exponential",
            Self::Cosine => "cosine",
            Self::Constant => "none",
            Self::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// Learning-rate schedule specification
///
/// `iters_per_train_epoch` and `total_train_iters` are derived from the
/// dataset; see [`ExperimentConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Schedule name: "multistep" | "plateau" | "exponential" | "cosine" | "none"
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,

    /// Multiplicative decay per decay event
    #[serde(default, deserialize_with = "deserialize_factor")]
    pub factor: Option<f64>,

    /// Multistep milestones, in epochs
    #[serde(default)]
    pub decay_steps: Vec<usize>,

    /// Plateau: non-improving evaluations tolerated before decaying
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patience: Option<usize>,

    /// Plateau: whether lower or higher metrics are better
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<PlateauMode>,

    /// Plateau: relative improvement threshold
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Plateau: evaluations ignored after each decay
    #[serde(default)]
    pub cooldown: usize,

    /// Warmup length in epochs, -1 disables warmup
    #[serde(default = "default_warmup_epochs")]
    pub warmup_epochs: i64,

    #[serde(default)]
    pub iters_per_train_epoch: usize,

    #[serde(default)]
    pub total_train_iters: usize,
}

fn default_threshold() -> f64 {
    1e-4
}

fn default_warmup_epochs() -> i64 {
    -1
}

impl ScheduleConfig {
    pub fn new(kind: impl Into<String>, iters_per_train_epoch: usize, total_train_iters: usize) -> Self {
        Self {
            kind: kind.into(),
            factor: None,
            decay_steps: Vec::new(),
            patience: None,
            mode: None,
            threshold: default_threshold(),
            cooldown: 0,
            warmup_epochs: default_warmup_epochs(),
            iters_per_train_epoch,
            total_train_iters,
        }
    }

    #[must_use]
    pub fn with_factor(mut self, factor: f64) -> Self {
        self.factor = Some(factor);
        self
    }

    #[must_use]
    pub fn with_decay_steps(mut self, decay_steps: Vec<usize>) -> Self {
        self.decay_steps = decay_steps;
        self
    }

    #[must_use]
    pub fn with_plateau(mut self, patience: usize, mode: PlateauMode) -> Self {
        self.patience = Some(patience);
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_warmup_epochs(mut self, warmup_epochs: i64) -> Self {
        self.warmup_epochs = warmup_epochs;
        self
    }

    /// Copy of this config with the dataset-derived iteration counts filled in
    #[must_use]
    pub fn with_iterations(mut self, iters_per_train_epoch: usize, total_train_iters: usize) -> Self {
        self.iters_per_train_epoch = iters_per_train_epoch;
        self.total_train_iters = total_train_iters;
        self
    }

    pub fn schedule_kind(&self) -> ScheduleKind {
        ScheduleKind::from_name(&self.kind)
    }

    pub fn warmup_enabled(&self) -> bool {
        self.warmup_epochs != -1
    }

    /// Warmup length in iterations; `None` when warmup is disabled or the
    /// epoch count is negative or overflows
    pub fn warmup_iters(&self) -> Option<usize> {
        if !self.warmup_enabled() {
            return None;
        }
        usize::try_from(self.warmup_epochs)
            .ok()
            .and_then(|epochs| epochs.checked_mul(self.iters_per_train_epoch))
    }
}

/// Training loop parameters the schedule's iteration counts derive from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Drop the last incomplete batch of every epoch
    #[serde(default)]
    pub drop_last: bool,
}

fn default_epochs() -> usize {
    1
}

fn default_batch_size() -> usize {
    8
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self { epochs: default_epochs(), batch_size: default_batch_size(), drop_last: false }
    }
}

/// Complete experiment specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub optimizer: OptimizerConfig,

    #[serde(alias = "schedule")]
    pub scheduler: ScheduleConfig,

    #[serde(default)]
    pub train: TrainConfig,
}
