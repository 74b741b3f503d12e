//! Configuration validation
//!
//! Checks optimizer and schedule configuration for internal consistency
//! before anything is constructed.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_optimizer, validate_schedule};
