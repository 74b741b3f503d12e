//! Loading experiment configuration from YAML

use super::schema::ExperimentConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load an experiment configuration file
///
/// The returned config still lacks the dataset-derived iteration counts;
/// call [`ExperimentConfig::resolve`] once the dataset size is known.
///
/// # Example
///
/// ```no_run
/// use calentar::config::load_experiment;
///
/// let config = load_experiment("experiment.yaml")?.resolve(50_000)?;
/// # Ok::<(), calentar::Error>(())
/// ```
pub fn load_experiment<P: AsRef<Path>>(config_path: P) -> Result<ExperimentConfig> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    ExperimentConfig::from_yaml_str(&yaml_content)
}

impl ExperimentConfig {
    /// Parse an experiment configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))
    }

    /// Fill in the schedule's iteration counts from the training set size
    ///
    /// One iteration is one batch; the last partial batch of an epoch counts
    /// unless `train.drop_last` is set.
    pub fn resolve(self, dataset_len: usize) -> Result<Self> {
        let batch_size = self.train.batch_size;
        if batch_size == 0 {
            return Err(Error::ConfigError("train.batch_size must be > 0".to_string()));
        }

        let iters_per_epoch = if self.train.drop_last {
            dataset_len / batch_size
        } else {
            dataset_len.div_ceil(batch_size)
        };
        let total_iters = iters_per_epoch.checked_mul(self.train.epochs).ok_or_else(|| {
            Error::ConfigError(format!(
                "{} epochs of {iters_per_epoch} iterations overflow the iteration counter",
                self.train.epochs
            ))
        })?;

        Ok(Self {
            scheduler: self.scheduler.with_iterations(iters_per_epoch, total_iters),
            ..self
        })
    }
}
