//! Construction-time configuration errors
//!
//! All entity construction in this crate fails synchronously or not at
//! all: a configuration either produces an entity or one of these errors.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use thiserror::Error;

/// Error raised while building an entity from a configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A mandatory construction option was omitted
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// An option value lies outside its valid domain, or the
    /// configuration document itself could not be understood
    #[error("invalid value for '{field}': {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
}

impl ConfigError {
    /// Shorthand for a missing mandatory option
    pub const fn missing(field: &'static str) -> Self {
        ConfigError::MissingField { field }
    }
}
