//! Card generation: text in, card out.
//!
//! The service invents the creative fields (title, element, rarity, stats,
//! special move); identity, timestamps, and the image reference are
//! assembled locally so a card is fully formed the moment it exists.

use chrono::Utc;
use serde::Deserialize;

use crate::cards::{Card, CardId, CardStats, Element, Rarity, SpecialMove};
use crate::gateway::{prompts, schema, LlmClient, LlmError};

/// Sampling temperature for generation. Creative but not unhinged.
const GENERATION_TEMPERATURE: f64 = 0.7;

/// Generation failure.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("input text is empty")]
    EmptyText,

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("service response is not a valid card: {0}")]
    InvalidCard(String),
}

/// The fields the service is responsible for producing.
#[derive(Debug, Deserialize)]
struct GeneratedFields {
    title: String,
    element: Element,
    rarity: Rarity,
    stats: CardStats,
    special_move: SpecialMove,
}

/// Generate a card from user text.
///
/// Rejects empty or whitespace-only input before touching the network.
/// Enum fields and stat bounds in the response are validated; anything
/// off-schema is a generation failure, indistinguishable to the user from
/// a network error.
pub fn generate_card(
    client: &dyn LlmClient,
    text: &str,
    author: Option<&str>,
) -> Result<Card, GenerateError> {
    if text.trim().is_empty() {
        return Err(GenerateError::EmptyText);
    }

    let prompt = prompts::generation_prompt(text);
    let response = client.call_json(&prompt, &schema::card_schema(), GENERATION_TEMPERATURE)?;

    // CardStats deserialization already enforces the [0, 100] bounds, so
    // one parse covers both shape and range.
    let fields: GeneratedFields = serde_json::from_value(response)
        .map_err(|e| GenerateError::InvalidCard(e.to_string()))?;

    let id = CardId::mint();
    let card = Card {
        image_url: Card::image_url_for(&id),
        id,
        author: author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or("anon")
            .to_string(),
        title: fields.title,
        element: fields.element,
        rarity: fields.rarity,
        stats: fields.stats,
        special_move: fields.special_move,
        original_text: text.to_string(),
        created_at: Utc::now(),
    };

    tracing::info!(
        id = %card.id,
        element = %card.element,
        rarity = %card.rarity,
        "card generated"
    );
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FakeLlmClient;
    use serde_json::json;

    fn valid_response() -> serde_json::Value {
        json!({
            "title": "Caffeine Golem",
            "element": "Chaos",
            "rarity": "Super Rare",
            "stats": { "power": 70, "vibe": 40, "chaos": 95, "mystery": 30 },
            "special_move": {
                "name": "Percolate",
                "effect": "Floods the arena with scalding espresso."
            }
        })
    }

    #[test]
    fn test_empty_text_rejected_without_calling_service() {
        let client = FakeLlmClient::always_valid(valid_response());

        assert!(matches!(
            generate_card(&client, "", None),
            Err(GenerateError::EmptyText)
        ));
        assert!(matches!(
            generate_card(&client, "   \n\t", None),
            Err(GenerateError::EmptyText)
        ));
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn test_successful_generation_assembles_card() {
        let client = FakeLlmClient::always_valid(valid_response());
        let card = generate_card(&client, "Coffee machine broke.", Some("12345")).unwrap();

        assert_eq!(card.title, "Caffeine Golem");
        assert_eq!(card.element, Element::Chaos);
        assert_eq!(card.rarity, Rarity::SuperRare);
        assert_eq!(card.stats.total(), 235);
        assert_eq!(card.author, "12345");
        assert_eq!(card.original_text, "Coffee machine broke.");
        assert!(card.id.as_str().starts_with("card_"));
        assert!(card.image_url.contains(card.id.as_str()));
    }

    #[test]
    fn test_blank_author_becomes_anon() {
        let client = FakeLlmClient::always_valid(valid_response());
        let card = generate_card(&client, "hello", Some("  ")).unwrap();
        assert_eq!(card.author, "anon");
    }

    #[test]
    fn test_unknown_element_is_invalid_card() {
        let mut response = valid_response();
        response["element"] = json!("Shadow");
        let client = FakeLlmClient::always_valid(response);

        assert!(matches!(
            generate_card(&client, "hello", None),
            Err(GenerateError::InvalidCard(_))
        ));
    }

    #[test]
    fn test_stat_out_of_range_is_invalid_card() {
        let mut response = valid_response();
        response["stats"]["power"] = json!(140);
        let client = FakeLlmClient::always_valid(response);

        assert!(matches!(
            generate_card(&client, "hello", None),
            Err(GenerateError::InvalidCard(_))
        ));
    }

    #[test]
    fn test_llm_error_passes_through() {
        let client = FakeLlmClient::always_error(LlmError::MissingApiKey);

        assert!(matches!(
            generate_card(&client, "hello", None),
            Err(GenerateError::Llm(LlmError::MissingApiKey))
        ));
    }
}
