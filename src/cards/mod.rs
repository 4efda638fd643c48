//! Card data model: elements, rarities, stats, and the card record.
//!
//! ## Key Types
//!
//! - `Element`: One of 7 elemental tags, with the fixed advantage table
//! - `Rarity`: One of 7 ordered tiers, each with a battle multiplier
//! - `CardStats`: Four integers in [0, 100]
//! - `Card`: The immutable generated collectible
//! - `CardId`: Opaque string identifier, unique per collection

pub mod card;
pub mod element;
pub mod rarity;
pub mod stats;

pub use card::{Card, CardId, SpecialMove};
pub use element::Element;
pub use rarity::Rarity;
pub use stats::{CardStats, StatOutOfRange, STAT_MAX};
