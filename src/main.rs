//! cider - Main Binary
//!
//! Loads a red deck and a green deck and prints one card from each

use anyhow::Context;
use cider_rs::{
    core::{Category, Deck, DeckColor},
    loader::{DeckLoader, LoadOptions, MalformedLinePolicy},
    logging::{self, VerbosityLevel},
    selector::CardSelector,
    CiderError,
};
use clap::{error::ErrorKind, Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Output format for drawn cards
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// `KEY: VALUE`, one card per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Verbosity level for diagnostics (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

/// Set name, slug or index
#[derive(Debug, Clone, Copy)]
struct CategoryArg(Category);

impl std::str::FromStr for CategoryArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<Category>()
            .map(CategoryArg)
            .map_err(|e| format!("{e} (run with --list-sets to see the known sets)"))
    }
}

#[derive(Parser)]
#[command(name = "cider", version)]
#[command(about = "Draw a red card and a green card from two deck files", long_about = None)]
struct Cli {
    /// Text file for the red (noun) deck
    #[arg(value_name = "RED_DECK", required_unless_present = "list_sets")]
    red_deck: Option<PathBuf>,

    /// Text file for the green (adjective) deck
    #[arg(value_name = "GREEN_DECK", required_unless_present = "list_sets")]
    green_deck: Option<PathBuf>,

    /// Only load cards from this set (repeatable; name, slug or index 0-8)
    #[arg(long = "set", short = 's', value_name = "SET")]
    sets: Vec<CategoryArg>,

    /// Look up this red card instead of drawing one
    #[arg(long, value_name = "KEY")]
    red: Option<String>,

    /// Look up this green card instead of drawing one
    #[arg(long, value_name = "KEY")]
    green: Option<String>,

    /// Set random seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    /// Fail on malformed lines instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbosity level for diagnostics on stderr (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, default_value = "normal", short = 'v')]
    verbosity: VerbosityArg,

    /// Print the known sets and exit
    #[arg(long)]
    list_sets: bool,
}

/// One line of output
#[derive(Serialize)]
struct PrintedCard<'a> {
    deck: DeckColor,
    key: &'a str,
    value: &'a str,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e.render());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            // Usage problems go to stdout with status 1
            print!("{}", e.render());
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.verbosity.into());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list_sets {
        list_sets();
        return Ok(());
    }

    let (Some(red_path), Some(green_path)) = (cli.red_deck, cli.green_deck) else {
        // clap enforces both paths unless --list-sets is given
        anyhow::bail!("expected exactly two deck files");
    };

    let malformed = if cli.strict {
        MalformedLinePolicy::Fail
    } else {
        MalformedLinePolicy::Skip
    };
    let options = LoadOptions::default()
        .with_categories(cli.sets.iter().map(|arg| arg.0))
        .with_malformed(malformed);

    let (red, _) = DeckLoader::load_from_file(&red_path, DeckColor::Red, &options)
        .context("failed to load the red deck")?;
    let (green, _) = DeckLoader::load_from_file(&green_path, DeckColor::Green, &options)
        .context("failed to load the green deck")?;

    let mut selector = CardSelector::from_seed(cli.seed);
    let red_card = pick(&red, cli.red.as_deref(), &mut selector)?;
    let green_card = pick(&green, cli.green.as_deref(), &mut selector)?;

    for card in [red_card, green_card] {
        print_card(&card, cli.format)?;
    }
    Ok(())
}

/// Look up `key` when given, otherwise draw at random
fn pick<'d>(
    deck: &'d Deck,
    key: Option<&'d str>,
    selector: &mut CardSelector,
) -> cider_rs::Result<PrintedCard<'d>> {
    let (key, value) = match key {
        Some(key) => (key, deck.lookup(key)?),
        None => {
            let card = selector.draw(deck)?;
            (card.key.as_str(), card.value.as_str())
        }
    };
    Ok(PrintedCard {
        deck: deck.color(),
        key,
        value,
    })
}

fn print_card(card: &PrintedCard<'_>, format: OutputFormat) -> cider_rs::Result<()> {
    match format {
        OutputFormat::Text => println!("{}: {}", card.key, card.value),
        OutputFormat::Json => {
            let line = serde_json::to_string(card)
                .map_err(|e| CiderError::SerializationError(e.to_string()))?;
            println!("{line}");
        }
    }
    Ok(())
}

fn list_sets() {
    for category in Category::ALL {
        println!("{}\t{}\t{}", category.index(), category.name(), category.slug());
    }
}
