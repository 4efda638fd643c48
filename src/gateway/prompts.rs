//! Prompt construction for the two service operations.
//!
//! The battle prompt carries the full scoring rules as prose - the service
//! does the arithmetic, we only verify the winner id on the way back. The
//! same rules are implemented locally in `battle::scoring` for the
//! deterministic judge.

use crate::cards::Card;

/// Prompt asking for a collectible card distilled from user text.
///
/// The tone-to-element mapping is a soft heuristic for the model, not a
/// rule anything validates.
#[must_use]
pub fn generation_prompt(text: &str) -> String {
    format!(
        "Generate a collectible battle card based on this social media post:\n\
         \"{text}\"\n\
         \n\
         Be creative, funny, and thematic. Map the tone of the text to the stats and element.\n\
         If the text is aggressive, use Fire/Chaos. If chill, use Nature/Water.\n\
         The title should be catchy."
    )
}

/// Prompt asking for a judged battle between two cards.
///
/// Both cards are embedded as their full JSON payloads.
pub fn battle_prompt(card_a: &Card, card_b: &Card) -> Result<String, serde_json::Error> {
    let payload_a = serde_json::to_string(card_a)?;
    let payload_b = serde_json::to_string(card_b)?;

    Ok(format!(
        "Simulate a battle between two cards.\n\
         \n\
         CARD A:\n\
         {payload_a}\n\
         \n\
         CARD B:\n\
         {payload_b}\n\
         \n\
         Rules:\n\
         1. Calculate a base score: Sum of all stats (power+vibe+chaos+mystery).\n\
         2. Apply Multipliers:\n\
            - Rarity: Common (1x), Uncommon (1.1x), Rare (1.2x), Super Rare (1.3x), \
         Ultra Rare (1.4x), Legendary (1.5x), Mythic (2.0x).\n\
            - Element Advantage: Fire>Nature, Nature>Water, Water>Fire, Electric>Water, \
         Frost>Nature, Chaos>Cosmic, Cosmic>Chaos. (Add 15% bonus for advantage).\n\
         3. Determine winner based on final score.\n\
         4. Provide a dramatic battle log.\n\
         \n\
         Return the result JSON with winnerId being either \"{id_a}\" or \"{id_b}\".",
        id_a = card_a.id,
        id_b = card_b.id,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardStats, Element, Rarity, SpecialMove};
    use chrono::DateTime;

    fn card(id: &str) -> Card {
        let id = CardId::new(id);
        Card {
            image_url: Card::image_url_for(&id),
            id,
            author: "anon".to_string(),
            title: "Test".to_string(),
            element: Element::Frost,
            rarity: Rarity::Legendary,
            stats: CardStats::new(1, 2, 3, 4).unwrap(),
            special_move: SpecialMove {
                name: "Chill".to_string(),
                effect: "Freezes.".to_string(),
            },
            original_text: "brr".to_string(),
            created_at: DateTime::from_timestamp_millis(0).unwrap(),
        }
    }

    #[test]
    fn test_generation_prompt_embeds_text() {
        let prompt = generation_prompt("Coffee machine broke. Chaos reigns.");
        assert!(prompt.contains("\"Coffee machine broke. Chaos reigns.\""));
        assert!(prompt.contains("Fire/Chaos"));
    }

    #[test]
    fn test_battle_prompt_carries_both_ids_and_rules() {
        let a = card("card_a");
        let b = card("card_b");
        let prompt = battle_prompt(&a, &b).unwrap();

        assert!(prompt.contains("\"card_a\""));
        assert!(prompt.contains("\"card_b\""));
        assert!(prompt.contains("Mythic (2.0x)"));
        assert!(prompt.contains("Add 15% bonus"));
    }
}
