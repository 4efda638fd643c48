//! Deterministic battle scoring.
//!
//! The same rules the battle prompt hands to the generative service,
//! computed locally:
//!
//! 1. Base score: sum of the four stats.
//! 2. Multiply by the rarity multiplier (Common 1.0 .. Mythic 2.0).
//! 3. +15% if the card's element holds the advantage over the opponent's.
//! 4. Higher final score wins.
//!
//! The prose rules leave ties unspecified; `LocalJudge` breaks them by
//! higher raw stat total, then by lexicographically smaller id, so a local
//! battle always has a winner.

use smallvec::smallvec;

use crate::cards::Card;

use super::judge::{Judge, JudgeError};
use super::result::BattleResult;

/// Bonus factor for elemental advantage.
pub const ADVANTAGE_BONUS: f64 = 1.15;

/// Final battle score of `card` against `opponent`, rounded to the
/// nearest integer.
#[must_use]
pub fn final_score(card: &Card, opponent: &Card) -> i64 {
    let mut score = card.stats.total() as f64 * card.rarity.multiplier();
    if card.element.has_advantage_over(opponent.element) {
        score *= ADVANTAGE_BONUS;
    }
    score.round() as i64
}

/// Deterministic judge computing the scoring rules locally.
///
/// Opt-in alternative to the service-backed judge; produces the same
/// result shape with synthesized narration.
#[derive(Default)]
pub struct LocalJudge;

impl LocalJudge {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn narrate(winner: &Card, loser: &Card, winner_score: i64, loser_score: i64) -> BattleResult {
        let mut log = smallvec![
            format!(
                "{} ({}) squares off against {} ({}).",
                winner.title, winner.element, loser.title, loser.element
            ),
            format!(
                "{} unleashes {}: {}",
                winner.title, winner.special_move.name, winner.special_move.effect
            ),
        ];
        if winner.element.has_advantage_over(loser.element) {
            log.push(format!(
                "The {} advantage over {} tips the scales.",
                winner.element, loser.element
            ));
        }
        log.push(format!(
            "{} stands victorious, {} to {}.",
            winner.title, winner_score, loser_score
        ));

        BattleResult {
            winner_id: winner.id.clone(),
            score_a: 0, // caller fills in A/B orientation
            score_b: 0,
            reason: format!(
                "{} ({}, {}) outscored {} on raw numbers and multipliers.",
                winner.title, winner.rarity, winner.element, loser.title
            ),
            log,
        }
    }
}

impl Judge for LocalJudge {
    fn judge(&self, card_a: &Card, card_b: &Card) -> Result<BattleResult, JudgeError> {
        let score_a = final_score(card_a, card_b);
        let score_b = final_score(card_b, card_a);

        let a_wins = match score_a.cmp(&score_b) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => {
                // Tie-break: raw stat total, then smaller id.
                match card_a.stats.total().cmp(&card_b.stats.total()) {
                    std::cmp::Ordering::Greater => true,
                    std::cmp::Ordering::Less => false,
                    std::cmp::Ordering::Equal => card_a.id.as_str() <= card_b.id.as_str(),
                }
            }
        };

        let (winner, loser, winner_score, loser_score) = if a_wins {
            (card_a, card_b, score_a, score_b)
        } else {
            (card_b, card_a, score_b, score_a)
        };

        let mut result = Self::narrate(winner, loser, winner_score, loser_score);
        result.score_a = score_a;
        result.score_b = score_b;
        Ok(result)
    }
}
