//! Behavioral modifiers
//!
//! Modifiers color how a player is treated by narrative and scoring
//! systems outside this crate. The entity model carries them as pure
//! data: nothing here reads them back.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flags for behavioral modifiers
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Modifiers: u16 {
        const KILLER = 0x0001;
        const IMMORTAL = 0x0002;
        const PSYCHO = 0x0004;
        const RACIST = 0x0008;
        const CANNIBAL = 0x0010;
        const FATALIST = 0x0020;
        const PACIFIST = 0x0040;
        const RUSKY = 0x0080;
        const ARSONIST = 0x0100;
        const ANGEL_OF_DEATH = 0x0200;
        const COLLECTOR = 0x0400;
        const SCALPER = 0x0800;
        const MISSIONARY = 0x1000;
    }
}

// Manual serde impl for Modifiers
impl Serialize for Modifiers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Modifiers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(Modifiers::from_bits_truncate(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Modifiers::default().is_empty());
    }

    #[test]
    fn test_combination() {
        let modifiers = Modifiers::KILLER | Modifiers::ARSONIST;
        assert!(modifiers.contains(Modifiers::KILLER));
        assert!(modifiers.contains(Modifiers::ARSONIST));
        assert!(!modifiers.contains(Modifiers::PACIFIST));
    }

    #[test]
    fn test_serde_round_trip() {
        let modifiers = Modifiers::COLLECTOR | Modifiers::MISSIONARY;
        let json = serde_json::to_string(&modifiers).unwrap();
        let back: Modifiers = serde_json::from_str(&json).unwrap();
        assert_eq!(modifiers, back);
    }

    #[test]
    fn test_deserialize_unknown_bits_truncated() {
        let back: Modifiers = serde_json::from_str("65535").unwrap();
        assert_eq!(back, Modifiers::all());
    }
}
