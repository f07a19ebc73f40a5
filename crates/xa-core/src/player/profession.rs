//! Player professions
//!
//! Professions form a closed set: each is a fixed, data-only patch of
//! starting inventory and ability overrides applied on top of base
//! player construction (see `init`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Player profession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Profession {
    Benefactor,
    Cartographer,
    Caveman,
    Chef,
    Doctor,
    Excavator,
    Gunslinger,
    Prof,
    Shaman,
    Smith,
}

impl Profession {
    /// All professions in declaration order
    pub const ALL: [Profession; 10] = [
        Profession::Benefactor,
        Profession::Cartographer,
        Profession::Caveman,
        Profession::Chef,
        Profession::Doctor,
        Profession::Excavator,
        Profession::Gunslinger,
        Profession::Prof,
        Profession::Shaman,
        Profession::Smith,
    ];

    /// Lowercase name used in configuration and messages
    pub const fn name(&self) -> &'static str {
        match self {
            Profession::Benefactor => "benefactor",
            Profession::Cartographer => "cartographer",
            Profession::Caveman => "caveman",
            Profession::Chef => "chef",
            Profession::Doctor => "doctor",
            Profession::Excavator => "excavator",
            Profession::Gunslinger => "gunslinger",
            Profession::Prof => "prof",
            Profession::Shaman => "shaman",
            Profession::Smith => "smith",
        }
    }
}
