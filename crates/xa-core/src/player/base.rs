//! Main player structure
//!
//! A player composes identity, location, inventory, party membership,
//! vital statistics, and the ability manifest. Construction happens once;
//! there is no further lifecycle here. Party membership is the only state
//! machine: a player is in at most one party at a time.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::{Abilities, Allegiance, Modifiers, Profession, Stats, init};
use crate::item::Durability;

/// Position on the map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Calculate distance squared to another position
    pub const fn distance_sq(&self, other: &Position) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

/// Handle to a party aggregate
///
/// The aggregate itself lives outside this crate; a player holds the
/// handle without owning the party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartyId(pub u32);

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    // Identity
    pub name: String,
    /// `None` for a bare base entity with no profession patch applied
    pub profession: Option<Profession>,
    pub allegiance: Allegiance,
    pub modifiers: Modifiers,

    // Position and holdings
    pub pos: Position,
    pub gold: i32,
    /// Ordered item tags; append-only in this crate
    pub inventory: Vec<String>,

    // Party membership (at most one at a time)
    pub party: Option<PartyId>,

    // Embedded records
    pub stats: Stats,
    pub abilities: Abilities,
}

impl Player {
    /// Create a player with default stats and abilities, then apply the
    /// profession patch if one is given
    pub fn new(
        name: String,
        profession: Option<Profession>,
        pos: Position,
        gold: i32,
        modifiers: Modifiers,
        allegiance: Allegiance,
    ) -> Self {
        let mut player = Self {
            name,
            profession,
            allegiance,
            modifiers,
            pos,
            gold,
            inventory: Vec::new(),
            party: None,
            stats: Stats::default(),
            abilities: Abilities::default(),
        };

        if let Some(profession) = profession {
            init::apply_profession(&mut player, profession);
        }

        player
    }

    /// Join a party, silently leaving any previous one
    pub fn join_party(&mut self, party: PartyId) {
        self.party = Some(party);
    }

    /// Leave the current party; a no-op when already partyless
    pub fn leave_party(&mut self) {
        self.party = None;
    }

    /// Leave the current party and join another
    ///
    /// Observably identical to [`join_party`](Self::join_party), since
    /// leaving only clears a field the join immediately overwrites. Kept
    /// for call sites that want the intent spelled out.
    pub fn swap_party(&mut self, party: PartyId) {
        self.leave_party();
        self.join_party(party);
    }

    /// Check if the player is alive (health strictly positive)
    pub const fn is_alive(&self) -> bool {
        self.stats.health > 0
    }

    /// Check if the player is dead
    pub const fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    /// Check if the inventory holds an item tag
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item == name)
    }

    /// Check whether two players can understand each other
    ///
    /// Players of the same allegiance always can; across factions at
    /// least one side must read the other's modern tongue.
    pub fn can_communicate(&self, other: &Player) -> bool {
        self.allegiance == other.allegiance
            || self.abilities.can_translate_modern
            || other.abilities.can_translate_modern
    }

    /// Repair an item with this player's repair skill, restoring it to
    /// that fraction of its full integrity
    pub fn repair(&self, item: &mut Durability) -> f64 {
        item.repair(self.abilities.repair_amount)
    }
}
