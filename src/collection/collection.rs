//! The card collection: an insertion-ordered, id-unique deck.
//!
//! Newest card sits at the front. Backed by `im::Vector` so snapshots of
//! the collection (for rendering or diffing against a save) are O(1)
//! clones, with an `FxHashSet` shadowing the ids for O(1) duplicate checks.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Attempted to add a card whose id is already present.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("card id '{0}' already exists in the collection")]
pub struct DuplicateCard(pub CardId);

/// Ordered set of a user's cards.
///
/// Serializes as a plain JSON array of cards - the same shape the original
/// data format uses - so the id index is rebuilt on load.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vector<Card>", into = "Vector<Card>")]
pub struct Collection {
    cards: Vector<Card>,
    ids: FxHashSet<CardId>,
}

impl Collection {
    /// Empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a raw card list, dropping later duplicates of an id.
    ///
    /// Duplicates only occur in hand-edited or corrupted save files; the
    /// first occurrence wins and the rest are logged and skipped.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut collection = Self::new();
        for card in cards {
            let id = card.id.clone();
            if collection.push_back(card).is_err() {
                tracing::warn!(id = %id, "dropping duplicate card id from loaded collection");
            }
        }
        collection
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether a card with this id exists.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.ids.contains(id)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    /// Add a freshly generated card to the front of the collection.
    pub fn add(&mut self, card: Card) -> Result<(), DuplicateCard> {
        if self.ids.contains(&card.id) {
            return Err(DuplicateCard(card.id));
        }
        self.ids.insert(card.id.clone());
        self.cards.push_front(card);
        Ok(())
    }

    /// Remove a card by id, preserving the relative order of the rest.
    ///
    /// Returns the removed card, or `None` if the id was not present.
    pub fn remove(&mut self, id: &CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| &card.id == id)?;
        self.ids.remove(id);
        Some(self.cards.remove(index))
    }

    /// Cards in collection order, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    fn push_back(&mut self, card: Card) -> Result<(), DuplicateCard> {
        if self.ids.contains(&card.id) {
            return Err(DuplicateCard(card.id));
        }
        self.ids.insert(card.id.clone());
        self.cards.push_back(card);
        Ok(())
    }
}

impl From<Vector<Card>> for Collection {
    fn from(cards: Vector<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl From<Collection> for Vector<Card> {
    fn from(collection: Collection) -> Self {
        collection.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardStats, Element, Rarity, SpecialMove};
    use chrono::DateTime;

    fn card(id: &str) -> Card {
        let id = CardId::new(id);
        Card {
            image_url: Card::image_url_for(&id),
            id,
            author: "anon".to_string(),
            title: "Test".to_string(),
            element: Element::Fire,
            rarity: Rarity::Common,
            stats: CardStats::new(10, 10, 10, 10).unwrap(),
            special_move: SpecialMove {
                name: "Poke".to_string(),
                effect: "Pokes.".to_string(),
            },
            original_text: "test".to_string(),
            created_at: DateTime::from_timestamp_millis(0).unwrap(),
        }
    }

    fn ids(collection: &Collection) -> Vec<&str> {
        collection.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_add_prepends() {
        let mut collection = Collection::new();
        collection.add(card("a")).unwrap();
        collection.add(card("b")).unwrap();
        collection.add(card("c")).unwrap();
        assert_eq!(ids(&collection), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut collection = Collection::new();
        collection.add(card("a")).unwrap();
        let err = collection.add(card("a")).unwrap_err();
        assert_eq!(err.0, CardId::new("a"));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut collection = Collection::new();
        for id in ["a", "b", "c", "d"] {
            collection.add(card(id)).unwrap();
        }
        let removed = collection.remove(&CardId::new("c")).unwrap();
        assert_eq!(removed.id.as_str(), "c");
        assert_eq!(ids(&collection), vec!["d", "b", "a"]);
        assert!(!collection.contains(&CardId::new("c")));
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut collection = Collection::new();
        collection.add(card("a")).unwrap();
        assert!(collection.remove(&CardId::new("zzz")).is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_from_cards_drops_duplicates_first_wins() {
        let mut first = card("a");
        first.title = "First".to_string();
        let mut second = card("a");
        second.title = "Second".to_string();

        let collection = Collection::from_cards([first, second, card("b")]);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(&CardId::new("a")).unwrap().title, "First");
    }

    #[test]
    fn test_serde_is_plain_array() {
        let mut collection = Collection::new();
        collection.add(card("a")).unwrap();
        collection.add(card("b")).unwrap();

        let value = serde_json::to_value(&collection).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 2);

        let back: Collection = serde_json::from_value(value).unwrap();
        assert_eq!(ids(&back), vec!["b", "a"]);
        assert!(back.contains(&CardId::new("a")));
    }
}
