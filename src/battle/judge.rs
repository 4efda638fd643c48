//! Battle judgment.
//!
//! `Judge` is the seam between "who decides" and "what was decided":
//! `LlmJudge` delegates to the generative service, `LocalJudge` (in
//! `scoring`) computes the same rules deterministically.

use crate::cards::Card;
use crate::gateway::{prompts, schema, LlmClient, LlmError};

use super::result::BattleResult;

/// Sampling temperature for judgments. Lower than generation so the model
/// follows the scoring rules more consistently.
const JUDGMENT_TEMPERATURE: f64 = 0.5;

/// Judgment failure.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("service response is not a valid battle result: {0}")]
    InvalidResult(String),

    #[error("service declared winner '{0}' which is neither combatant")]
    UnknownWinner(String),
}

/// Decides battles between two cards.
pub trait Judge {
    fn judge(&self, card_a: &Card, card_b: &Card) -> Result<BattleResult, JudgeError>;
}

/// Judge that delegates scoring to the generative service.
pub struct LlmJudge<C> {
    client: C,
}

impl<C: LlmClient> LlmJudge<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: LlmClient> Judge for LlmJudge<C> {
    fn judge(&self, card_a: &Card, card_b: &Card) -> Result<BattleResult, JudgeError> {
        let prompt = prompts::battle_prompt(card_a, card_b)
            .map_err(|e| JudgeError::InvalidResult(format!("failed to encode cards: {e}")))?;

        let response =
            self.client
                .call_json(&prompt, &schema::battle_schema(), JUDGMENT_TEMPERATURE)?;

        let result: BattleResult = serde_json::from_value(response)
            .map_err(|e| JudgeError::InvalidResult(e.to_string()))?;

        // The schema can't express "one of these two strings", so the
        // winner check happens here.
        if result.winner_id != card_a.id && result.winner_id != card_b.id {
            return Err(JudgeError::UnknownWinner(result.winner_id.to_string()));
        }

        tracing::info!(
            winner = %result.winner_id,
            score_a = result.score_a,
            score_b = result.score_b,
            "battle judged"
        );
        Ok(result)
    }
}
