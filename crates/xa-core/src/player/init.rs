//! Player initialization
//!
//! Sets up a player's starting inventory and ability overrides based on
//! their profession. Runs once, after base construction; each patch is
//! pure data with no conditional logic and no dependency on runtime
//! state beyond the freshly constructed player.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use super::{Player, Profession};
use crate::{BENEFACTOR_GOLD_MULTIPLIER, RAISED_ADDICTION_PROBABILITY, WIDENED_LINE_OF_SIGHT};

// ─────────────────────────────────────────────────────────────────────────────
// Profession starting inventories
// ─────────────────────────────────────────────────────────────────────────────

/// Benefactor starting inventory
static BENEFACTOR_INV: &[&str] = &[
    "matches",
    "map to xanadu",
    "revolver",
    "ancient mongolian translation book",
];

/// Cartographer starting inventory
static CARTOGRAPHER_INV: &[&str] = &[
    "map to xanadu",
    "additional torches",
    "e-w translation book",
    "ancient mongolian translation book",
];

/// Caveman starting inventory
static CAVEMAN_INV: &[&str] = &["knife", "additional torches"];

/// Chef starting inventory
static CHEF_INV: &[&str] = &["knife", "matches", "food"];

/// Doctor starting inventory
static DOCTOR_INV: &[&str] = &[
    "morphine",
    "opium",
    "medical kits",
    "poison antidote",
    "e-w translation book",
    "matches",
];

/// Excavator starting inventory
static EXCAVATOR_INV: &[&str] = &["pickaxe", "dynamite", "rope ladder", "additional torches"];

/// Gunslinger starting inventory
static GUNSLINGER_INV: &[&str] = &["revolver", "rifle", "bullets", "knife"];

/// Prof starting inventory
static PROF_INV: &[&str] = &[
    "matches",
    "e-w translation book",
    "ancient mongolian translation book",
];

/// Shaman starting inventory
static SHAMAN_INV: &[&str] = &["map to xanadu"];

/// Smith starting inventory
static SMITH_INV: &[&str] = &["matches"];

/// Get the starting inventory table for a profession
pub fn starting_inventory(profession: Profession) -> &'static [&'static str] {
    match profession {
        Profession::Benefactor => BENEFACTOR_INV,
        Profession::Cartographer => CARTOGRAPHER_INV,
        Profession::Caveman => CAVEMAN_INV,
        Profession::Chef => CHEF_INV,
        Profession::Doctor => DOCTOR_INV,
        Profession::Excavator => EXCAVATOR_INV,
        Profession::Gunslinger => GUNSLINGER_INV,
        Profession::Prof => PROF_INV,
        Profession::Shaman => SHAMAN_INV,
        Profession::Smith => SMITH_INV,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Patch application
// ─────────────────────────────────────────────────────────────────────────────

/// Apply a profession's fixed patch to a freshly constructed player
///
/// Base construction must already have happened: the patch appends to the
/// inventory and overwrites a subset of ability and stat fields on top of
/// whatever the base configuration established.
pub fn apply_profession(player: &mut Player, profession: Profession) {
    for item in starting_inventory(profession) {
        player.inventory.push((*item).to_string());
    }

    match profession {
        Profession::Benefactor => {
            player.gold *= BENEFACTOR_GOLD_MULTIPLIER;
            player.abilities.can_translate_modern = true;
        }
        Profession::Cartographer => {
            player.abilities.line_of_sight_diff = WIDENED_LINE_OF_SIGHT;
            player.abilities.can_translate_modern = true;
            player.abilities.can_setup_camp = true;
            player.abilities.can_update_maps = true;
        }
        Profession::Caveman => {
            player.abilities.can_translate_ancient = true;
            player.abilities.is_hunter = true;
            player.abilities.line_of_sight_diff = WIDENED_LINE_OF_SIGHT;
            player.stats.addiction_probability = RAISED_ADDICTION_PROBABILITY;
        }
        Profession::Chef => {
            player.abilities.can_setup_camp = true;
            player.abilities.can_identify_poison = true;
            player.abilities.can_fillet = true;
        }
        Profession::Doctor => {
            player.abilities.can_translate_modern = true;
            player.abilities.can_fillet = true;
            player.abilities.craftables.push("poison".to_string());
            player.abilities.craftables.push("poison antidote".to_string());
        }
        Profession::Excavator => {
            player.abilities.repair_amount = 0.5;
        }
        Profession::Gunslinger => {
            player.abilities.is_hunter = true;
            player.abilities.can_fillet = true;
        }
        Profession::Prof => {
            player.abilities.can_identify_poison = true;
            player.abilities.can_translate_modern = true;
            player.abilities.can_translate_ancient = true;
            player.abilities.can_fillet = true;
            player.abilities.heal_amount = 0.5;
        }
        Profession::Shaman => {
            player.abilities.can_translate_ancient = true;
            player.abilities.can_identify_poison = true;
            player.abilities.heal_amount = 0.5;
            player.abilities.craftables.push("poison".to_string());
            player.stats.addiction_probability = RAISED_ADDICTION_PROBABILITY;
        }
        Profession::Smith => {
            player.abilities.can_setup_camp = true;
            player.abilities.can_smelt = true;
            player.abilities.repair_amount = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Allegiance, Capability, Modifiers, Position};
    use strum::IntoEnumIterator;

    fn make(profession: Profession) -> Player {
        Player::new(
            "Test".to_string(),
            Some(profession),
            Position::new(0, 0),
            100,
            Modifiers::default(),
            Allegiance::Eastern,
        )
    }

    /// Flags a profession's patch grants; everything else must stay off
    fn granted(profession: Profession) -> &'static [Capability] {
        match profession {
            Profession::Benefactor => &[Capability::TranslateModern],
            Profession::Cartographer => &[
                Capability::TranslateModern,
                Capability::SetupCamp,
                Capability::UpdateMaps,
            ],
            Profession::Caveman => &[Capability::TranslateAncient, Capability::Hunt],
            Profession::Chef => &[
                Capability::SetupCamp,
                Capability::IdentifyPoison,
                Capability::Fillet,
            ],
            Profession::Doctor => &[Capability::TranslateModern, Capability::Fillet],
            Profession::Excavator => &[],
            Profession::Gunslinger => &[Capability::Hunt, Capability::Fillet],
            Profession::Prof => &[
                Capability::IdentifyPoison,
                Capability::TranslateModern,
                Capability::TranslateAncient,
                Capability::Fillet,
            ],
            Profession::Shaman => &[Capability::TranslateAncient, Capability::IdentifyPoison],
            Profession::Smith => &[Capability::SetupCamp, Capability::Smelt],
        }
    }

    #[test]
    fn test_flags_match_table_exactly() {
        for profession in Profession::ALL {
            let player = make(profession);
            for capability in Capability::iter() {
                let expected = granted(profession).contains(&capability);
                assert_eq!(
                    player.abilities.has(capability),
                    expected,
                    "{profession}: {capability}"
                );
            }
        }
    }

    #[test]
    fn test_inventory_appended_in_order() {
        let player = make(Profession::Doctor);
        assert_eq!(
            player.inventory,
            vec![
                "morphine",
                "opium",
                "medical kits",
                "poison antidote",
                "e-w translation book",
                "matches",
            ]
        );
    }

    #[test]
    fn test_benefactor_gold_multiplied() {
        let player = make(Profession::Benefactor);
        assert_eq!(player.gold, 500);
        assert!(player.has_item("map to xanadu"));
    }

    #[test]
    fn test_cartographer_sight() {
        let player = make(Profession::Cartographer);
        assert_eq!(player.abilities.line_of_sight_diff, 2.0);
    }

    #[test]
    fn test_caveman_addiction_and_sight() {
        let player = make(Profession::Caveman);
        assert_eq!(player.stats.addiction_probability, 0.75);
        assert_eq!(player.abilities.line_of_sight_diff, 2.0);
        assert_eq!(player.inventory, vec!["knife", "additional torches"]);
    }

    #[test]
    fn test_chef_overrides_only_flags() {
        let player = make(Profession::Chef);
        assert_eq!(player.abilities.repair_amount, 0.0);
        assert_eq!(player.abilities.heal_amount, 0.0);
        assert!(player.abilities.craftables.is_empty());
    }

    #[test]
    fn test_doctor_craftables() {
        let player = make(Profession::Doctor);
        assert_eq!(player.abilities.craftables, vec!["poison", "poison antidote"]);
        assert!(player.abilities.can_craft("poison antidote"));
    }

    #[test]
    fn test_excavator_repairs_half() {
        let player = make(Profession::Excavator);
        assert_eq!(player.abilities.repair_amount, 0.5);
        assert!(player.has_item("pickaxe"));
        assert!(player.has_item("dynamite"));
    }

    #[test]
    fn test_gunslinger_loadout() {
        let player = make(Profession::Gunslinger);
        assert_eq!(player.inventory, vec!["revolver", "rifle", "bullets", "knife"]);
    }

    #[test]
    fn test_prof_heals_half() {
        let player = make(Profession::Prof);
        assert_eq!(player.abilities.heal_amount, 0.5);
    }

    #[test]
    fn test_shaman_patch() {
        let player = make(Profession::Shaman);
        assert_eq!(player.abilities.heal_amount, 0.5);
        assert_eq!(player.abilities.craftables, vec!["poison"]);
        assert_eq!(player.stats.addiction_probability, 0.75);
        assert_eq!(player.inventory, vec!["map to xanadu"]);
    }

    #[test]
    fn test_smith_repairs_full() {
        let player = make(Profession::Smith);
        assert_eq!(player.abilities.repair_amount, 1.0);
        assert_eq!(player.inventory, vec!["matches"]);
    }

    #[test]
    fn test_unpatched_stats_keep_defaults() {
        // Only Caveman and Shaman raise the addiction chance
        for profession in Profession::ALL {
            let player = make(profession);
            let expected = matches!(profession, Profession::Caveman | Profession::Shaman);
            assert_eq!(
                player.stats.addiction_probability == 0.75,
                expected,
                "{profession}"
            );
            assert_eq!(player.stats.health, 1);
            assert_eq!(player.stats.strength, 1);
        }
    }

    #[test]
    fn test_every_profession_has_an_inventory() {
        for profession in Profession::ALL {
            assert!(
                !starting_inventory(profession).is_empty(),
                "empty table for {profession}"
            );
        }
    }
}
