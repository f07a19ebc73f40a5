//! Item system
//!
//! Durable, repairable equipment. Kept independent of the player module;
//! players interact with items only through [`Durability`].

mod durability;
mod weapon;

pub use durability::Durability;
pub use weapon::{BulletKind, Gun, GunKind};
