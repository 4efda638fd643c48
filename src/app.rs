//! Application state.
//!
//! One object owns the collection and its store. Mutations go through
//! `add_card` / `remove_card` only, and every successful mutation is
//! followed by a full persistence write - there is no "dirty" state that
//! could be lost.

use crate::cards::{Card, CardId};
use crate::collection::{Collection, CollectionStore, DuplicateCard, SaveError};

/// State mutation failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateCard),

    #[error("no card with id '{0}' in the collection")]
    NotFound(CardId),

    #[error(transparent)]
    Save(#[from] SaveError),
}

/// The application's single mutable state object.
pub struct AppState<S> {
    collection: Collection,
    store: S,
}

impl<S: CollectionStore> AppState<S> {
    /// Load state from the store. Never fails: an unreadable store yields
    /// an empty collection.
    pub fn load(store: S) -> Self {
        let collection = store.load();
        tracing::debug!(cards = collection.len(), "collection loaded");
        Self { collection, store }
    }

    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Add a card and persist.
    pub fn add_card(&mut self, card: Card) -> Result<(), AppError> {
        self.collection.add(card)?;
        self.store.save(&self.collection)?;
        Ok(())
    }

    /// Remove a card by id and persist. Returns the removed card.
    pub fn remove_card(&mut self, id: &CardId) -> Result<Card, AppError> {
        let card = self
            .collection
            .remove(id)
            .ok_or_else(|| AppError::NotFound(id.clone()))?;
        self.store.save(&self.collection)?;
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardStats, Element, Rarity, SpecialMove};
    use crate::collection::MemoryStore;
    use chrono::DateTime;

    fn card(id: &str) -> Card {
        let id = CardId::new(id);
        Card {
            image_url: Card::image_url_for(&id),
            id,
            author: "anon".to_string(),
            title: "Test".to_string(),
            element: Element::Electric,
            rarity: Rarity::Uncommon,
            stats: CardStats::new(5, 5, 5, 5).unwrap(),
            special_move: SpecialMove {
                name: "Zap".to_string(),
                effect: "Zaps.".to_string(),
            },
            original_text: "zap".to_string(),
            created_at: DateTime::from_timestamp_millis(0).unwrap(),
        }
    }

    #[test]
    fn test_add_persists() {
        let mut state = AppState::load(MemoryStore::new());
        state.add_card(card("a")).unwrap();
        state.add_card(card("b")).unwrap();

        assert_eq!(state.collection().len(), 2);
        assert_eq!(state.store.saved_len(), Some(2));
    }

    #[test]
    fn test_remove_persists() {
        let mut state = AppState::load(MemoryStore::new());
        state.add_card(card("a")).unwrap();
        state.add_card(card("b")).unwrap();

        let removed = state.remove_card(&CardId::new("a")).unwrap();
        assert_eq!(removed.id, CardId::new("a"));
        assert_eq!(state.store.saved_len(), Some(1));
    }

    #[test]
    fn test_remove_missing_does_not_touch_store() {
        let mut state = AppState::load(MemoryStore::new());
        state.add_card(card("a")).unwrap();

        let err = state.remove_card(&CardId::new("nope")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(state.store.saved_len(), Some(1));
    }

    #[test]
    fn test_duplicate_add_fails_and_preserves_state() {
        let mut state = AppState::load(MemoryStore::new());
        state.add_card(card("a")).unwrap();

        assert!(matches!(
            state.add_card(card("a")),
            Err(AppError::Duplicate(_))
        ));
        assert_eq!(state.collection().len(), 1);
    }
}
