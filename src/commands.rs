//! CLI command implementations.
//!
//! Failure policy per operation: exactly one generic user-facing message
//! ("Failed to conjure card." / "Battle simulation failed."), with the
//! underlying cause recorded in the log. The missing-credential case gets
//! its own actionable message since the user can fix that one.

use anyhow::{bail, Result};
use owo_colors::{AnsiColors, OwoColorize};
use rand::seq::SliceRandom;

use cardforge::battle::{Judge, JudgeError, LlmJudge, LocalJudge};
use cardforge::cards::{Card, CardId, Element};
use cardforge::collection::JsonFileStore;
use cardforge::config::LlmConfig;
use cardforge::gateway::{HttpLlmClient, LlmError};
use cardforge::{generate_card, AppState, BattleResult, GenerateError};

const GENERATION_FAILED: &str = "Failed to conjure card. The ether is cloudy.";
const BATTLE_FAILED: &str = "Battle simulation failed. The arbiter could not decide.";
const MISSING_KEY: &str = "No service credential configured. Set GEMINI_API_KEY and try again.";

/// Built-in sample posts for `--random`.
const SAMPLE_TEXTS: &[&str] = &[
    "Just minted my first NFT and it feels like the future.",
    "Why is everyone arguing about block size? Can't we just build cool stuff?",
    "Coffee machine broke. Chaos reigns. Send help.",
    "The stars aligned perfectly tonight. Cosmic energy flowing.",
];

fn load_state() -> AppState<JsonFileStore> {
    AppState::load(JsonFileStore::at_default_path())
}

fn build_client(failure_message: &str) -> Result<HttpLlmClient> {
    let config = LlmConfig::from_env();
    if !config.has_api_key() {
        bail!("{MISSING_KEY}");
    }
    HttpLlmClient::new(config).map_err(|err| {
        tracing::error!(error = %err, "failed to construct HTTP client");
        anyhow::anyhow!("{failure_message}")
    })
}

pub fn generate(text: Option<String>, author: Option<String>, random: bool) -> Result<()> {
    let text = if random {
        SAMPLE_TEXTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(SAMPLE_TEXTS[0])
            .to_string()
    } else {
        match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => bail!("Give me some text to work with (or pass --random)."),
        }
    };

    let client = build_client(GENERATION_FAILED)?;
    let card = match generate_card(&client, &text, author.as_deref()) {
        Ok(card) => card,
        Err(GenerateError::Llm(LlmError::MissingApiKey)) => bail!("{MISSING_KEY}"),
        Err(err) => {
            tracing::error!(error = %err, "generation failed");
            bail!("{GENERATION_FAILED}");
        }
    };

    let mut state = load_state();
    state.add_card(card.clone())?;

    println!("Forged from: \"{text}\"\n");
    print_card(&card);
    Ok(())
}

pub fn collection_list() -> Result<()> {
    let state = load_state();
    let collection = state.collection();

    if collection.is_empty() {
        println!("No cards in your deck yet. Try `cardforge generate`.");
        return Ok(());
    }

    println!("Card deck ({}):\n", collection.len());
    for card in collection.iter() {
        println!(
            "  {}  {:<25} {} {:<10} total {}",
            card.id,
            card.title,
            element_column(card.element),
            card.rarity,
            card.stats.total()
        );
    }
    Ok(())
}

pub fn collection_show(id: &str) -> Result<()> {
    let state = load_state();
    match state.collection().get(&CardId::new(id)) {
        Some(card) => {
            print_card(card);
            Ok(())
        }
        None => bail!("No card with id '{id}' in your deck."),
    }
}

pub fn collection_remove(id: &str) -> Result<()> {
    let mut state = load_state();
    match state.remove_card(&CardId::new(id)) {
        Ok(card) => {
            println!("Removed '{}' ({}).", card.title, card.id);
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "remove failed");
            bail!("No card with id '{id}' in your deck.");
        }
    }
}

pub fn battle(id_a: &str, id_b: &str, local: bool) -> Result<()> {
    if id_a == id_b {
        bail!("A card cannot battle itself. Pick two different cards.");
    }

    let state = load_state();
    let collection = state.collection();
    let Some(card_a) = collection.get(&CardId::new(id_a)) else {
        bail!("No card with id '{id_a}' in your deck.");
    };
    let Some(card_b) = collection.get(&CardId::new(id_b)) else {
        bail!("No card with id '{id_b}' in your deck.");
    };

    let result = if local {
        LocalJudge::new().judge(card_a, card_b)
    } else {
        let client = build_client(BATTLE_FAILED)?;
        LlmJudge::new(client).judge(card_a, card_b)
    };

    let result = match result {
        Ok(result) => result,
        Err(JudgeError::Llm(LlmError::MissingApiKey)) => bail!("{MISSING_KEY}"),
        Err(err) => {
            tracing::error!(error = %err, "battle judgment failed");
            bail!("{BATTLE_FAILED}");
        }
    };

    print_battle(card_a, card_b, &result);
    Ok(())
}

fn element_color(element: Element) -> AnsiColors {
    match element {
        Element::Fire => AnsiColors::Red,
        Element::Water => AnsiColors::Blue,
        Element::Electric => AnsiColors::Yellow,
        Element::Nature => AnsiColors::Green,
        Element::Frost => AnsiColors::Cyan,
        Element::Chaos => AnsiColors::Magenta,
        Element::Cosmic => AnsiColors::BrightMagenta,
    }
}

fn element_colored(element: Element) -> String {
    element
        .as_str()
        .color(element_color(element))
        .to_string()
}

/// Fixed-width colored element cell for the list view.
///
/// Pads the plain name first: width formatting counts ANSI escape bytes,
/// so coloring before padding would misalign every colored row.
fn element_column(element: Element) -> String {
    format!("{:<10}", element.as_str())
        .color(element_color(element))
        .to_string()
}

fn print_card(card: &Card) {
    println!(
        "{}  [{} / {}]",
        card.title.bold(),
        element_colored(card.element),
        card.rarity
    );
    println!("  id:      {}", card.id);
    println!("  author:  {}", card.author);
    for (name, value) in card.stats.named() {
        println!("  {:<8} {:>3}  {}", name, value, bar(value));
    }
    println!(
        "  move:    {} - {}",
        card.special_move.name.bold(),
        card.special_move.effect
    );
    println!("  from:    \"{}\"", card.original_text);
    println!("  image:   {}", card.image_url);
}

fn bar(value: u8) -> String {
    // Saturate: stats are bounded at 100, but the renderer must not be
    // the thing that panics if a bound ever slips.
    let filled = ((value as usize) / 5).min(20);
    format!("{}{}", "#".repeat(filled), "-".repeat(20 - filled))
}

fn print_battle(card_a: &Card, card_b: &Card, result: &BattleResult) {
    println!(
        "{}  vs  {}\n",
        card_a.title.bold(),
        card_b.title.bold()
    );
    for line in &result.log {
        println!("  {line}");
    }

    let winner = if result.winner_id == card_a.id {
        &card_a.title
    } else {
        &card_b.title
    };
    println!(
        "\n{} {}   ({} {} - {} {})",
        "Winner:".bold(),
        winner,
        card_a.title,
        result.score_a,
        card_b.title,
        result.score_b
    );
    println!("  {}", result.reason);
}
