//! Core game constants
//!
//! Default attribute values and the fixed numbers the profession patches
//! and weapon tables are built from.

/// Default vital statistics for a freshly created player
pub const DEFAULT_HEALTH: i32 = 1;
pub const DEFAULT_STRENGTH: i32 = 1;
pub const DEFAULT_INTELLIGENCE: i32 = 1;

/// Baseline chance of becoming addicted when exposed
pub const DEFAULT_ADDICTION_PROBABILITY: f64 = 0.5;

/// Elevated addiction chance carried by the Caveman and Shaman professions
pub const RAISED_ADDICTION_PROBABILITY: f64 = 0.75;

/// Line-of-sight bonus granted to far-seeing professions
pub const WIDENED_LINE_OF_SIGHT: f64 = 2.0;

/// The Benefactor starts with this multiple of the configured gold
pub const BENEFACTOR_GOLD_MULTIPLIER: i32 = 5;

/// Integrity a newly made weapon starts with
pub const WEAPON_INTEGRITY: f64 = 100.0;
