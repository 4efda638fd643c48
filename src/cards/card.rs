//! The collectible card record.
//!
//! A `Card` is created only as the result of a successful generation call
//! and is immutable afterwards; the only way it leaves the system is an
//! explicit removal from the collection.
//!
//! Field wire names (`fid`, `imageUrl`, `created_at` as epoch milliseconds)
//! are kept byte-compatible with the original stored format so existing
//! exported collections still load.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::element::Element;
use super::rarity::Rarity;
use super::stats::CardStats;

/// Opaque card identifier, unique within a collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh id: `card_<epoch millis>_<7 random alphanumerics>`.
    ///
    /// The timestamp prefix keeps ids roughly sortable; the random suffix
    /// makes same-millisecond collisions vanishingly unlikely.
    #[must_use]
    pub fn mint() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix: String = rand::thread_rng()
            .sample_iter(rand::distributions::Alphanumeric)
            .take(7)
            .map(|b| (b as char).to_ascii_lowercase())
            .collect();
        Self(format!("card_{millis}_{suffix}"))
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A card's signature move: a short name plus a free-text effect line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialMove {
    pub name: String,
    pub effect: String,
}

/// A generated collectible card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Author handle of whoever submitted the source text.
    #[serde(rename = "fid", default = "anon_author")]
    pub author: String,

    pub title: String,
    pub element: Element,
    pub rarity: Rarity,
    pub stats: CardStats,
    pub special_move: SpecialMove,

    /// The text the card was generated from.
    pub original_text: String,

    /// Creation time, serialized as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

fn anon_author() -> String {
    "anon".to_string()
}

impl Card {
    /// Placeholder image for a card, seeded by its id so repeated renders
    /// fetch the same picture.
    #[must_use]
    pub fn image_url_for(id: &CardId) -> String {
        format!("https://picsum.photos/seed/{id}/400/300")
    }
}
