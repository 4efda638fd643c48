//! Collection system: the ordered deck and its persistence.
//!
//! ## Key Types
//!
//! - `Collection`: Insertion-ordered, id-unique list of cards
//! - `CollectionStore`: Storage backend trait
//! - `JsonFileStore`: Whole-file JSON persistence under the data dir
//! - `MemoryStore`: In-memory backend for tests

pub mod collection;
pub mod store;

pub use collection::{Collection, DuplicateCard};
pub use store::{CollectionStore, JsonFileStore, MemoryStore, SaveError};
