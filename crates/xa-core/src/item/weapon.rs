//! Firearms
//!
//! The weapon model is independent of the player composition core: a gun
//! is static per-kind data (damage, clip, range, ammunition type) plus a
//! per-instance round count and durability. Firing and combat resolution
//! belong to other crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Durability;
use crate::WEAPON_INTEGRITY;

/// Ammunition type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum BulletKind {
    Standard,
    Revolver,
    Rifle,
}

/// Gun variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum GunKind {
    Revolver,
    Rifle,
}

impl GunKind {
    /// Rounds the clip holds
    pub const fn clip_size(&self) -> u32 {
        match self {
            GunKind::Revolver => 6,
            GunKind::Rifle => 10,
        }
    }

    /// Reach of a fired bullet, in map cells
    pub const fn bullet_range(&self) -> u32 {
        match self {
            GunKind::Revolver => 10,
            GunKind::Rifle => 25,
        }
    }

    /// Rounds a newly issued gun comes with
    pub const fn starting_rounds(&self) -> u32 {
        match self {
            GunKind::Revolver => 6,
            GunKind::Rifle => 20,
        }
    }

    /// Damage dealt by a single hit
    pub const fn damage(&self) -> i32 {
        match self {
            GunKind::Revolver => 15,
            GunKind::Rifle => 20,
        }
    }

    /// Ammunition this gun fires
    pub const fn bullet(&self) -> BulletKind {
        match self {
            GunKind::Revolver => BulletKind::Revolver,
            GunKind::Rifle => BulletKind::Rifle,
        }
    }
}

/// A gun instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gun {
    pub kind: GunKind,
    /// Rounds carried, loaded or not
    pub rounds: u32,
    pub durability: Durability,
}

impl Gun {
    /// Create a newly issued gun with its standard ammunition allotment
    pub const fn new(kind: GunKind) -> Self {
        Self {
            kind,
            rounds: kind.starting_rounds(),
            durability: Durability::new(WEAPON_INTEGRITY),
        }
    }

    /// Check if any rounds remain
    pub const fn has_ammunition(&self) -> bool {
        self.rounds > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revolver_data() {
        let kind = GunKind::Revolver;
        assert_eq!(kind.clip_size(), 6);
        assert_eq!(kind.bullet_range(), 10);
        assert_eq!(kind.starting_rounds(), 6);
        assert_eq!(kind.damage(), 15);
        assert_eq!(kind.bullet(), BulletKind::Revolver);
    }

    #[test]
    fn test_rifle_data() {
        let kind = GunKind::Rifle;
        assert_eq!(kind.clip_size(), 10);
        assert_eq!(kind.bullet_range(), 25);
        assert_eq!(kind.starting_rounds(), 20);
        assert_eq!(kind.damage(), 20);
        assert_eq!(kind.bullet(), BulletKind::Rifle);
    }

    #[test]
    fn test_new_gun() {
        let gun = Gun::new(GunKind::Rifle);
        assert_eq!(gun.rounds, 20);
        assert!(gun.has_ammunition());
        assert_eq!(gun.durability.integrity, 100.0);
        assert!(!gun.durability.is_broken());
    }
}
