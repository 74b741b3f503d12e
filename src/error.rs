//! Crate-level error type

use crate::config::ValidationError;

/// Result type alias for calentar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading configuration or constructing training components
///
/// Every variant is a configuration error: nothing in this crate fails once an
/// optimizer and schedule have been built.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A configuration record is internally inconsistent
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ValidationError),
}

impl Error {
    /// The validation failure behind this error, if any
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::ConfigError(_) => None,
        }
    }
}
