//! Royale Catalog - command line front end
//!
//! Search the card catalog, get name suggestions and draw random decks

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use royale_catalog::{
    catalog::{Browse, Catalog},
    core::{CardId, CardView},
    deck::{Deck, RetryPolicy},
    loader::load_catalog,
    search::SearchError,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log verbosity (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Silent,
    Minimal,
    Normal,
    Verbose,
}

impl Verbosity {
    fn filter(self) -> &'static str {
        match self {
            Verbosity::Silent => "off",
            Verbosity::Minimal => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }
}

impl std::str::FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(Verbosity::Silent),
            "minimal" | "1" => Ok(Verbosity::Minimal),
            "normal" | "2" => Ok(Verbosity::Normal),
            "verbose" | "3" => Ok(Verbosity::Verbose),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "royale")]
#[command(about = "Royale Catalog - card search and deck builder", long_about = None)]
struct Cli {
    /// Card catalog (JSON array of cards)
    #[arg(long, global = true, env = "ROYALE_CATALOG", default_value = "database/cards.json")]
    catalog: PathBuf,

    /// Set random seed for reproducible decks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log verbosity (0=silent, 1=minimal, 2=normal, 3=verbose); RUST_LOG takes precedence
    #[arg(long, short = 'v', global = true, default_value = "minimal")]
    verbosity: Verbosity,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cards, or jump to the card a search query names
    Cards {
        /// Search query (up to 30 characters)
        #[arg(long, short = 'q')]
        query: Option<String>,
    },

    /// Show one card
    Card {
        #[arg(value_name = "ID")]
        id: CardId,
    },

    /// Show two cards side by side
    Compare {
        #[arg(value_name = "LEFT_ID")]
        left: CardId,
        #[arg(value_name = "RIGHT_ID")]
        right: CardId,
    },

    /// Suggest card names for a partial query (always JSON)
    Autocomplete {
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },

    /// Draw eight random cards from the whole catalog
    Deck {
        /// Redraw up to this many times if two cards share a name
        #[arg(long, default_value_t = 1)]
        retries: u32,
    },

    /// Draw a deck with a fixed number of troops, spells and buildings
    DeckPro {
        #[arg(long, default_value_t = 0)]
        troop: usize,
        #[arg(long, default_value_t = 0)]
        spell: usize,
        #[arg(long, default_value_t = 0)]
        building: usize,
    },
}

#[derive(Serialize)]
struct AutocompleteResponse<T> {
    results: T,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let (db, duration) = load_catalog(&cli.catalog)
        .await
        .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;
    debug!(cards = db.len(), ms = duration.as_secs_f64() * 1000.0, "catalog ready");

    let catalog = Catalog::new(db);
    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(Xoshiro256PlusPlus::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    match cli.command {
        Commands::Cards { query } => run_cards(&catalog, query.as_deref().unwrap_or(""), cli.json)?,
        Commands::Card { id } => {
            let card = catalog.card_details(id)?;
            if cli.json {
                print_json(&card)?;
            } else {
                print_card(&card);
            }
        }
        Commands::Compare { left, right } => match catalog.compare_cards(left, right)? {
            Some(comparison) if cli.json => print_json(&comparison)?,
            Some(comparison) => {
                print_card(&comparison.left);
                println!();
                print_card(&comparison.right);
                println!("\nElixir difference: {:+}", comparison.elixir_difference());
            }
            None => println!("Nothing to compare: both card ids must exist."),
        },
        Commands::Autocomplete { query } => {
            let results = catalog.autocomplete(&query)?;
            print_json(&AutocompleteResponse { results })?;
        }
        Commands::Deck { retries } => {
            let deck = catalog.build_plain_deck_with_retry(RetryPolicy::new(retries), &mut *rng)?;
            print_deck(&deck, cli.json)?;
        }
        Commands::DeckPro {
            troop,
            spell,
            building,
        } => {
            let deck = catalog.build_constrained_deck(troop, spell, building, &mut *rng)?;
            print_deck(&deck, cli.json)?;
        }
    }

    Ok(())
}

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_cards<R: royale_catalog::loader::CardRepository>(
    catalog: &Catalog<R>,
    query: &str,
    json: bool,
) -> Result<()> {
    match catalog.browse(query)? {
        Browse::Jump(id) => {
            let card = catalog.card_details(id)?;
            if json {
                print_json(&card)?;
            } else {
                print_card(&card);
            }
        }
        Browse::List { cards, notice } => {
            match notice {
                Some(e @ SearchError::InvalidQuery { .. }) => eprintln!("{e}"),
                Some(SearchError::NoMatch) => debug!(query, "no card matched, listing all"),
                None => {}
            }
            if json {
                print_json(&cards)?;
            } else {
                for card in &cards {
                    println!(
                        "{:>4}  {:<24} {:<9} {}",
                        card.id.as_u32(),
                        card.name,
                        card.category,
                        card.elixir_cost
                    );
                }
            }
        }
    }
    Ok(())
}

fn print_card(card: &CardView) {
    println!("{} (#{})", card.name, card.id);
    println!("  Type:    {}", card.category);
    println!("  Elixir:  {}", card.elixir_cost);
    println!("  Rarity:  {}", card.rarity);
    println!("  Arena:   {}", card.arena_unlocked);
    if !card.image.is_empty() {
        println!("  Image:   {}", card.image);
    }
}

fn print_deck(deck: &Deck, json: bool) -> Result<()> {
    let views = deck.views();
    if json {
        return print_json(&views);
    }

    let total: u32 = views.iter().map(|c| u32::from(c.elixir_cost)).sum();
    for card in &views {
        println!("  {:<24} {:<9} {}", card.name, card.category, card.elixir_cost);
    }
    println!("Average elixir: {:.1}", f64::from(total) / views.len().max(1) as f64);
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
