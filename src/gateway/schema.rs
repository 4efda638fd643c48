//! Response schemas handed to the generative service.
//!
//! These are the interoperability contract: the service is constrained to
//! emit JSON of exactly these shapes, and the parsing code on our side
//! assumes them. Field names and enum values must not drift.

use serde_json::{json, Value};

use crate::cards::{Element, Rarity};

fn enum_names<T: Copy>(all: &[T], name: fn(T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(|&v| name(v)).collect()
}

/// Schema for a generated card.
#[must_use]
pub fn card_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A creative name for the card based on the text. Max 25 chars."
            },
            "element": {
                "type": "STRING",
                "enum": enum_names(&Element::ALL, Element::as_str),
                "description": "The elemental type of the card."
            },
            "rarity": {
                "type": "STRING",
                "enum": enum_names(&Rarity::ALL, Rarity::as_str),
                "description": "Rarity based on the uniqueness or intensity of the text."
            },
            "stats": {
                "type": "OBJECT",
                "properties": {
                    "power": { "type": "INTEGER", "description": "Raw strength (0-100)" },
                    "vibe": { "type": "INTEGER", "description": "Coolness/Aura (0-100)" },
                    "chaos": { "type": "INTEGER", "description": "Unpredictability (0-100)" },
                    "mystery": { "type": "INTEGER", "description": "Enigma factor (0-100)" }
                },
                "required": ["power", "vibe", "chaos", "mystery"]
            },
            "special_move": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING", "description": "Name of the move" },
                    "effect": { "type": "STRING", "description": "Short description of what the move does" }
                },
                "required": ["name", "effect"]
            }
        },
        "required": ["title", "element", "rarity", "stats", "special_move"]
    })
}

/// Schema for a battle judgment.
#[must_use]
pub fn battle_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "winnerId": {
                "type": "STRING",
                "description": "The ID of the winning card (either cardA or cardB)"
            },
            "scoreA": { "type": "INTEGER", "description": "Calculated score for Card A" },
            "scoreB": { "type": "INTEGER", "description": "Calculated score for Card B" },
            "reason": {
                "type": "STRING",
                "description": "A dramatic, short explanation of why the winner won."
            },
            "log": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3-4 short sentences describing the flow of the battle."
            }
        },
        "required": ["winnerId", "scoreA", "scoreB", "reason", "log"]
    })
}
