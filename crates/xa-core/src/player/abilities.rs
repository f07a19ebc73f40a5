//! Player ability manifest
//!
//! A capability manifest consulted by other systems to gate actions such
//! as translating text, identifying poisoned items, repairing equipment,
//! or updating maps. Every field defaults to "no capability"; professions
//! overwrite a subset of them after base construction.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::ConfigError;

/// Named boolean capabilities a player may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Capability {
    TranslateModern,
    TranslateAncient,
    IdentifyPoison,
    Hunt,
    Fillet,
    SetupCamp,
    UpdateMaps,
    Smelt,
}

/// A player's capability flags and capacity values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Abilities {
    pub can_translate_modern: bool,
    pub can_translate_ancient: bool,
    pub can_identify_poison: bool,
    pub is_hunter: bool,
    pub can_fillet: bool,
    pub can_setup_camp: bool,
    pub can_update_maps: bool,
    pub can_smelt: bool,
    /// Fraction of an item's integrity this player restores when repairing
    pub repair_amount: f64,
    /// Fraction of another's health this player restores when healing
    pub heal_amount: f64,
    pub line_of_sight_diff: f64,
    /// Item tags this player can create via crafting
    pub craftables: Vec<String>,
    pub movement: Vec<String>,
}

impl Abilities {
    /// Check whether a capability flag is set
    pub const fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::TranslateModern => self.can_translate_modern,
            Capability::TranslateAncient => self.can_translate_ancient,
            Capability::IdentifyPoison => self.can_identify_poison,
            Capability::Hunt => self.is_hunter,
            Capability::Fillet => self.can_fillet,
            Capability::SetupCamp => self.can_setup_camp,
            Capability::UpdateMaps => self.can_update_maps,
            Capability::Smelt => self.can_smelt,
        }
    }

    /// Check whether this player can craft the given item tag
    pub fn can_craft(&self, tag: &str) -> bool {
        self.craftables.iter().any(|c| c == tag)
    }

    /// Check that every configured value lies in its valid domain
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.repair_amount) {
            return Err(ConfigError::InvalidConfiguration {
                field: "repair_amount",
                reason: format!("{} is not a fraction", self.repair_amount),
            });
        }
        if !(0.0..=1.0).contains(&self.heal_amount) {
            return Err(ConfigError::InvalidConfiguration {
                field: "heal_amount",
                reason: format!("{} is not a fraction", self.heal_amount),
            });
        }
        Ok(())
    }
}
