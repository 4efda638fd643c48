//! Battle system: judgment trait, service-backed judge, local scoring.
//!
//! ## Key Types
//!
//! - `BattleResult`: Winner, scores, reason, narrative log (transient)
//! - `Judge`: Who decides a battle
//! - `LlmJudge`: Delegates scoring to the generative service
//! - `LocalJudge`: Deterministic local computation of the same rules

pub mod judge;
pub mod result;
pub mod scoring;

pub use judge::{Judge, JudgeError, LlmJudge};
pub use result::{BattleLog, BattleResult};
pub use scoring::{final_score, LocalJudge, ADVANTAGE_BONUS};
