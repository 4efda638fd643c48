//! cardforge CLI - generate, collect, and battle cards from the terminal.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardforge")]
#[command(about = "Turn your thoughts into battle cards", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a card from a short post
    Generate {
        /// Source text to forge into a card
        text: Option<String>,

        /// Author handle stamped on the card
        #[arg(long)]
        author: Option<String>,

        /// Use a random built-in sample text instead
        #[arg(long)]
        random: bool,
    },

    /// Browse the card deck
    Collection {
        #[command(subcommand)]
        command: CollectionCommands,
    },

    /// Battle two cards by id
    Battle {
        id_a: String,
        id_b: String,

        /// Use the deterministic local judge instead of the service
        #[arg(long)]
        local: bool,
    },
}

#[derive(Subcommand)]
enum CollectionCommands {
    /// List all cards, newest first
    List,

    /// Show one card in full
    Show { id: String },

    /// Remove a card from the deck
    Remove { id: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            text,
            author,
            random,
        } => commands::generate(text, author, random),
        Commands::Collection { command } => match command {
            CollectionCommands::List => commands::collection_list(),
            CollectionCommands::Show { id } => commands::collection_show(&id),
            CollectionCommands::Remove { id } => commands::collection_remove(&id),
        },
        Commands::Battle { id_a, id_b, local } => commands::battle(&id_a, &id_b, local),
    }
}
