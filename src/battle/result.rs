//! Battle outcome record.
//!
//! Transient by design: results are recomputed per battle and never
//! persisted. Wire names are camelCase to match the judgment schema.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;

/// Narrative log lines. The schema asks for 3-4, so they fit inline.
pub type BattleLog = SmallVec<[String; 4]>;

/// Outcome of a judged battle between two cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    /// Id of the winning card. Always one of the two combatants - the
    /// judge enforces this before a result is returned.
    #[serde(rename = "winnerId")]
    pub winner_id: CardId,

    #[serde(rename = "scoreA")]
    pub score_a: i64,

    #[serde(rename = "scoreB")]
    pub score_b: i64,

    /// Short dramatic justification.
    pub reason: String,

    /// Blow-by-blow narrative, 3-4 lines.
    pub log: BattleLog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_wire_names() {
        let result = BattleResult {
            winner_id: CardId::new("card_a"),
            score_a: 310,
            score_b: 220,
            reason: "Overwhelming vibe.".to_string(),
            log: smallvec!["Clash!".to_string(), "Dust settles.".to_string()],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["winnerId"], "card_a");
        assert_eq!(value["scoreA"], 310);
        assert_eq!(value["scoreB"], 220);
        assert!(value["log"].is_array());
    }

    #[test]
    fn test_parses_service_shape() {
        let json = serde_json::json!({
            "winnerId": "card_b",
            "scoreA": 100,
            "scoreB": 150,
            "reason": "Speed wins.",
            "log": ["a", "b", "c"]
        });

        let result: BattleResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.winner_id, CardId::new("card_b"));
        assert_eq!(result.log.len(), 3);
    }
}
