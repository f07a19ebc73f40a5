//! Player construction from a configuration mapping
//!
//! The builder doubles as the serde shape of a player configuration
//! document: every option is optional at the document layer, and
//! [`build`](PlayerBuilder::build) decides which omissions are fatal.
//! Unrecognized options are rejected when a document is parsed.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::{Abilities, Allegiance, Modifiers, Player, Position, Profession, Stats, init};
use crate::error::ConfigError;

/// Builder for creating players
///
/// `name`, `x`, `y`, `init_gold`, `modifiers`, and `allegiance` are
/// mandatory; `profession` selects the variant patch and may be omitted
/// for a bare base entity; `stats` and `abilities` override the embedded
/// record defaults before the profession patch is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerBuilder {
    name: Option<String>,
    x: Option<i32>,
    y: Option<i32>,
    init_gold: Option<i32>,
    modifiers: Option<Modifiers>,
    allegiance: Option<Allegiance>,
    profession: Option<Profession>,
    stats: Stats,
    abilities: Abilities,
}

impl PlayerBuilder {
    /// Create a new player builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player's name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the player's starting position
    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Set the player's starting gold
    pub fn init_gold(mut self, gold: i32) -> Self {
        self.init_gold = Some(gold);
        self
    }

    /// Set the player's behavioral modifiers
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    /// Set the player's allegiance
    pub fn allegiance(mut self, allegiance: Allegiance) -> Self {
        self.allegiance = Some(allegiance);
        self
    }

    /// Set the player's profession
    pub fn profession(mut self, profession: Profession) -> Self {
        self.profession = Some(profession);
        self
    }

    /// Override the default starting stats
    pub fn stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// Override the default ability manifest
    pub fn abilities(mut self, abilities: Abilities) -> Self {
        self.abilities = abilities;
        self
    }

    /// Build the player, failing on the first missing mandatory option or
    /// out-of-domain value
    ///
    /// Base construction runs first (configured stats and abilities,
    /// empty inventory, no party), then the profession patch.
    pub fn build(self) -> Result<Player, ConfigError> {
        let name = self.name.ok_or(ConfigError::missing("name"))?;
        let x = self.x.ok_or(ConfigError::missing("x"))?;
        let y = self.y.ok_or(ConfigError::missing("y"))?;
        let gold = self.init_gold.ok_or(ConfigError::missing("init_gold"))?;
        let modifiers = self.modifiers.ok_or(ConfigError::missing("modifiers"))?;
        let allegiance = self.allegiance.ok_or(ConfigError::missing("allegiance"))?;

        self.stats.validate()?;
        self.abilities.validate()?;

        let mut player = Player {
            name,
            profession: self.profession,
            allegiance,
            modifiers,
            pos: Position::new(x, y),
            gold,
            inventory: Vec::new(),
            party: None,
            stats: self.stats,
            abilities: self.abilities,
        };

        if let Some(profession) = self.profession {
            init::apply_profession(&mut player, profession);
        }

        Ok(player)
    }

    /// Parse a JSON configuration document into a builder
    ///
    /// Malformed documents and unrecognized keys surface as
    /// [`ConfigError::InvalidConfiguration`]; missing mandatory options
    /// are only reported later, by [`build`](Self::build).
    #[cfg(feature = "std")]
    pub fn from_json(config: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(config).map_err(|e| ConfigError::InvalidConfiguration {
            field: "config",
            reason: e.to_string(),
        })
    }
}
