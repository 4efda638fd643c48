//! Rarity tiers and their battle multipliers.
//!
//! Seven ordered tiers, Common lowest. The wire names for the two middle
//! tiers contain a space ("Super Rare", "Ultra Rare") - serde renames keep
//! the on-disk and service formats byte-compatible with the original data.

use serde::{Deserialize, Serialize};

/// Rarity tier of a card.
///
/// Derives `Ord` so tiers compare in ascending power order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    #[serde(rename = "Super Rare")]
    SuperRare,
    #[serde(rename = "Ultra Rare")]
    UltraRare,
    Legendary,
    Mythic,
}

impl Rarity {
    /// All seven tiers, ascending.
    pub const ALL: [Rarity; 7] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::SuperRare,
        Rarity::UltraRare,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// Battle score multiplier for this tier.
    ///
    /// Common 1.0 through Legendary 1.5 in 0.1 steps, then Mythic jumps
    /// to 2.0.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.1,
            Rarity::Rare => 1.2,
            Rarity::SuperRare => 1.3,
            Rarity::UltraRare => 1.4,
            Rarity::Legendary => 1.5,
            Rarity::Mythic => 2.0,
        }
    }

    /// Wire/display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
