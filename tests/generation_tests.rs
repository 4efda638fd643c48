//! Card generation integration tests.
//!
//! Everything runs against `FakeLlmClient` - these tests pin down how the
//! generation operation treats the service, not what the service says.

use serde_json::json;

use cardforge::cards::{Element, Rarity};
use cardforge::gateway::{FakeLlmClient, LlmError};
use cardforge::{generate_card, GenerateError};

fn valid_response() -> serde_json::Value {
    json!({
        "title": "Star Whisperer",
        "element": "Cosmic",
        "rarity": "Legendary",
        "stats": { "power": 45, "vibe": 92, "chaos": 20, "mystery": 99 },
        "special_move": {
            "name": "Alignment",
            "effect": "Rewrites the horoscope of everyone watching."
        }
    })
}

#[test]
fn test_generation_happy_path() {
    let client = FakeLlmClient::always_valid(valid_response());
    let card = generate_card(
        &client,
        "The stars aligned perfectly tonight. Cosmic energy flowing.",
        Some("stargazer"),
    )
    .unwrap();

    assert_eq!(card.title, "Star Whisperer");
    assert_eq!(card.element, Element::Cosmic);
    assert_eq!(card.rarity, Rarity::Legendary);
    assert_eq!(card.special_move.name, "Alignment");
    assert_eq!(card.author, "stargazer");
    assert_eq!(client.call_count(), 1);

    // Locally assembled identity.
    assert!(card.id.as_str().starts_with("card_"));
    assert_eq!(
        card.image_url,
        format!("https://picsum.photos/seed/{}/400/300", card.id)
    );
}

#[test]
fn test_generated_ids_are_unique() {
    let client = FakeLlmClient::always_valid(valid_response());
    let a = generate_card(&client, "post one", None).unwrap();
    let b = generate_card(&client, "post two", None).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_stats_always_in_range_on_success() {
    // Property from the contract: any card that comes back has each stat
    // in [0, 100]. 101 must be rejected even though it fits in the wire
    // integer type.
    let mut response = valid_response();
    response["stats"]["mystery"] = json!(101);
    let client = FakeLlmClient::always_valid(response);

    assert!(matches!(
        generate_card(&client, "post", None),
        Err(GenerateError::InvalidCard(_))
    ));
}

#[test]
fn test_negative_stat_rejected() {
    let mut response = valid_response();
    response["stats"]["power"] = json!(-5);
    let client = FakeLlmClient::always_valid(response);

    assert!(matches!(
        generate_card(&client, "post", None),
        Err(GenerateError::InvalidCard(_))
    ));
}

#[test]
fn test_missing_field_rejected() {
    let mut response = valid_response();
    response.as_object_mut().unwrap().remove("special_move");
    let client = FakeLlmClient::always_valid(response);

    assert!(matches!(
        generate_card(&client, "post", None),
        Err(GenerateError::InvalidCard(_))
    ));
}

#[test]
fn test_unknown_rarity_rejected() {
    let mut response = valid_response();
    response["rarity"] = json!("SuperRare"); // wire name is "Super Rare"
    let client = FakeLlmClient::always_valid(response);

    assert!(matches!(
        generate_card(&client, "post", None),
        Err(GenerateError::InvalidCard(_))
    ));
}

#[test]
fn test_network_and_parse_failures_surface_the_same_way() {
    // Both collapse into GenerateError and, at the CLI, into the same
    // user-visible message - callers cannot tell them apart.
    for error in [
        LlmError::Http("connection refused".to_string()),
        LlmError::Timeout(30),
        LlmError::EmptyResponse,
        LlmError::InvalidJson("garbage".to_string()),
    ] {
        let client = FakeLlmClient::always_error(error);
        assert!(generate_card(&client, "post", None).is_err());
    }
}

#[test]
fn test_missing_credential_is_hard_failure() {
    let client = FakeLlmClient::always_error(LlmError::MissingApiKey);
    assert!(matches!(
        generate_card(&client, "post", None),
        Err(GenerateError::Llm(LlmError::MissingApiKey))
    ));
}
