//! Item durability
//!
//! Wear-tracking for repairable equipment. Damage subtracts without
//! clamping (the caller decides what a negative integrity means) and
//! repair restores to a fraction of full integrity, not by an increment.

use serde::{Deserialize, Serialize};

/// Integrity of a repairable item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Durability {
    pub max_integrity: f64,
    pub integrity: f64,
}

impl Durability {
    /// Create an undamaged item
    pub const fn new(max_integrity: f64) -> Self {
        Self {
            max_integrity,
            integrity: max_integrity,
        }
    }

    /// Take damage; returns the remaining integrity
    pub fn damage(&mut self, amount: f64) -> f64 {
        self.integrity -= amount;
        self.integrity
    }

    /// Restore to the given fraction of full integrity; returns the new
    /// integrity
    pub fn repair(&mut self, fraction: f64) -> f64 {
        self.integrity = self.max_integrity * fraction;
        self.integrity
    }

    /// Check if the item has no integrity left
    pub const fn is_broken(&self) -> bool {
        self.integrity <= 0.0
    }
}
