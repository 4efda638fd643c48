//! # cardforge
//!
//! Turn short posts into collectible battle cards via a generative-AI
//! service, and pit them against each other.
//!
//! ## Design Principles
//!
//! 1. **The service invents, we validate**: creative fields come from a
//!    schema-constrained model call; everything that *can* be checked
//!    locally (enums, stat bounds, winner ids) *is* checked locally.
//!
//! 2. **One state object**: the collection is mutated only through
//!    `AppState::add_card` / `remove_card`, each followed by a full
//!    persistence write.
//!
//! 3. **Failures collapse**: the user sees one generic failure per
//!    operation; the distinction between network, timeout, and malformed
//!    response lives in the log.
//!
//! ## Modules
//!
//! - `cards`: Elements, rarities, stats, and the card record
//! - `collection`: Ordered id-unique deck plus JSON persistence
//! - `gateway`: Generative service client, wire schemas, prompts
//! - `generate`: The card generation operation
//! - `battle`: Judgment trait, service judge, local deterministic scoring
//! - `app`: The application state object
//! - `config`: Environment-driven runtime configuration

pub mod app;
pub mod battle;
pub mod cards;
pub mod collection;
pub mod config;
pub mod gateway;
pub mod generate;

pub use crate::cards::{Card, CardId, CardStats, Element, Rarity, SpecialMove};

pub use crate::collection::{Collection, CollectionStore, JsonFileStore, MemoryStore};

pub use crate::gateway::{FakeLlmClient, HttpLlmClient, LlmClient, LlmError};

pub use crate::generate::{generate_card, GenerateError};

pub use crate::battle::{BattleResult, Judge, JudgeError, LlmJudge, LocalJudge};

pub use crate::app::{AppError, AppState};

pub use crate::config::LlmConfig;
