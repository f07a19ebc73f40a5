//! Player allegiance
//!
//! Every player belongs to exactly one of the two opposing factions.
//! There is deliberately no `Default`: allegiance is a mandatory
//! construction option and a default would mask an omitted one.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The faction a player fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Allegiance {
    Western,
    Eastern,
}

impl Allegiance {
    /// Get the numeric value (1, 2)
    pub const fn value(&self) -> i8 {
        match self {
            Allegiance::Western => 1,
            Allegiance::Eastern => 2,
        }
    }

    /// Create from numeric value
    pub const fn from_value(v: i8) -> Option<Self> {
        match v {
            1 => Some(Allegiance::Western),
            2 => Some(Allegiance::Eastern),
            _ => None,
        }
    }

    /// Get the opposing faction
    pub const fn opposing(&self) -> Self {
        match self {
            Allegiance::Western => Allegiance::Eastern,
            Allegiance::Eastern => Allegiance::Western,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        assert_eq!(Allegiance::from_value(Allegiance::Western.value()), Some(Allegiance::Western));
        assert_eq!(Allegiance::from_value(Allegiance::Eastern.value()), Some(Allegiance::Eastern));
        assert_eq!(Allegiance::from_value(0), None);
    }

    #[test]
    fn test_opposing() {
        assert_eq!(Allegiance::Western.opposing(), Allegiance::Eastern);
        assert_eq!(Allegiance::Eastern.opposing(), Allegiance::Western);
    }

    #[test]
    fn test_display() {
        assert_eq!(Allegiance::Western.to_string(), "Western");
    }
}
