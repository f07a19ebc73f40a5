//! Player system
//!
//! The composed player entity and everything that goes into building
//! one: stats, the ability manifest, allegiance, behavioral modifiers,
//! professions and their initialization patches.

mod abilities;
mod allegiance;
mod base;
mod builder;
pub mod init;
mod modifier;
mod profession;
mod stats;

pub use abilities::{Abilities, Capability};
pub use allegiance::Allegiance;
pub use base::{PartyId, Player, Position};
pub use builder::PlayerBuilder;
pub use init::{apply_profession, starting_inventory};
pub use modifier::Modifiers;
pub use profession::Profession;
pub use stats::Stats;
