//! Elemental tags and the advantage table.
//!
//! Every card carries exactly one of seven elements. A fixed, asymmetric
//! relation grants a battle score bonus to the attacker:
//!
//! Fire > Nature, Nature > Water, Water > Fire,
//! Electric > Water, Frost > Nature, Chaos > Cosmic, Cosmic > Chaos.
//!
//! Note the Chaos/Cosmic pair beats each other - the relation is cyclic,
//! not a strict ordering.

use serde::{Deserialize, Serialize};

/// Elemental type of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Electric,
    Nature,
    Frost,
    Chaos,
    Cosmic,
}

impl Element {
    /// All seven elements, in wire-schema order.
    pub const ALL: [Element; 7] = [
        Element::Fire,
        Element::Water,
        Element::Electric,
        Element::Nature,
        Element::Frost,
        Element::Chaos,
        Element::Cosmic,
    ];

    /// Whether this element holds the battle advantage over `other`.
    ///
    /// The relation is not symmetric: Fire beats Nature but Nature does
    /// not beat Fire back.
    #[must_use]
    pub fn has_advantage_over(self, other: Element) -> bool {
        use Element::*;
        matches!(
            (self, other),
            (Fire, Nature)
                | (Nature, Water)
                | (Water, Fire)
                | (Electric, Water)
                | (Frost, Nature)
                | (Chaos, Cosmic)
                | (Cosmic, Chaos)
        )
    }

    /// Wire/display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Electric => "Electric",
            Element::Nature => "Nature",
            Element::Frost => "Frost",
            Element::Chaos => "Chaos",
            Element::Cosmic => "Cosmic",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
