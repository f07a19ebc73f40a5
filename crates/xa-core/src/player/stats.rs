//! Vital statistics for a player
//!
//! Pure data holder. Serde is the configuration surface: omitted options
//! take their defaults, unrecognized options are rejected.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{
    DEFAULT_ADDICTION_PROBABILITY, DEFAULT_HEALTH, DEFAULT_INTELLIGENCE, DEFAULT_STRENGTH,
};

/// A player's vital attributes
///
/// Mutated externally by combat/addiction logic; this crate only
/// constructs and reads it. Health has no enforced maximum and is not
/// clamped anywhere (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stats {
    pub health: i32,
    pub strength: i32,
    pub intelligence: i32,
    pub is_addicted: bool,
    pub is_immortal: bool,
    /// Chance in [0, 1] of becoming addicted when exposed
    pub addiction_probability: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            health: DEFAULT_HEALTH,
            strength: DEFAULT_STRENGTH,
            intelligence: DEFAULT_INTELLIGENCE,
            is_addicted: false,
            is_immortal: false,
            addiction_probability: DEFAULT_ADDICTION_PROBABILITY,
        }
    }
}

impl Stats {
    /// Check that every configured value lies in its valid domain
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.addiction_probability) {
            return Err(ConfigError::InvalidConfiguration {
                field: "addiction_probability",
                reason: format!("{} is not a probability", self.addiction_probability),
            });
        }
        Ok(())
    }
}
