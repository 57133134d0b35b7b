//! Renkei - Entry Point
//!
//! Command-line front end for the linkage calculator. Loads the catalog,
//! resolves the slot selection, and prints every valid chain. With no slot
//! tokens on the command line it drops into an interactive loop.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use renkei::catalog::{load_catalog, Catalog};
use renkei::chain::{self, ChainResult};
use renkei::core::config::CalculatorConfig;
use renkei::core::error::Result;
use renkei::core::types::Attribute;

/// Weapon-strike linkage calculator
#[derive(Parser, Debug)]
#[command(name = "renkei")]
#[command(about = "Find valid weapon-strike chains for a slot selection")]
struct Args {
    /// Directory holding the catalog JSON files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Optional calculator config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only report chains ending in this attribute (repeatable)
    #[arg(long = "attr")]
    attrs: Vec<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Slot tokens, e.g. "spear_a spear_b bow_c" (interactive mode if omitted)
    tokens: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "renkei=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CalculatorConfig::from_toml_file(path)?,
        None => CalculatorConfig::default(),
    };

    let catalog = load_catalog(&args.data_dir)?;
    tracing::info!(
        weapons = catalog.weapons.len(),
        strikes = catalog.attributes.len(),
        patterns = catalog.transitions.len(),
        "catalog loaded"
    );

    let wanted: Vec<Attribute> = args
        .attrs
        .iter()
        .map(|a| Attribute::from(a.as_str()))
        .collect();

    if args.tokens.is_empty() {
        run_interactive(&catalog, &config, wanted)
    } else {
        let results = run_pipeline(&args.tokens, &catalog, &config, &wanted);
        print_results(&results, &args.format)
    }
}

/// One full resolve → generate → filter pass.
fn run_pipeline(
    tokens: &[String],
    catalog: &Catalog,
    config: &CalculatorConfig,
    wanted: &[Attribute],
) -> Vec<ChainResult> {
    let tokens: Vec<Option<String>> = tokens.iter().cloned().map(Some).collect();
    let slots = chain::resolve(&tokens, &catalog.weapons, config.suffix_width);
    if slots.len() < 2 {
        tracing::warn!(
            resolved = slots.len(),
            "need at least two resolved slots for a chain"
        );
    }
    let results = chain::generate(&slots, &catalog.attributes, &catalog.transitions, config);
    chain::filter_by_attributes(results, wanted)
}

fn print_results(results: &[ChainResult], format: &str) -> Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("No valid chains.");
    }
    for result in results {
        println!("{}", chain::format_result(result));
    }
    Ok(())
}

fn run_interactive(
    catalog: &Catalog,
    config: &CalculatorConfig,
    mut wanted: Vec<Attribute>,
) -> Result<()> {
    println!("\n=== RENKEI CALCULATOR ===");
    println!("Slot tokens are weapon names with a two-character suffix, e.g. spear_a");
    println!();
    println!("Commands:");
    println!("  weapons              - list weapon types");
    println!("  attrs                - list filterable attributes");
    println!("  chain <tok> <tok>..  - evaluate a slot selection");
    println!("  filter [attr..]      - set the result filter (no args clears)");
    println!("  quit / q             - exit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        let mut words = input.split_whitespace();
        match words.next() {
            Some("weapons") => {
                for weapon in catalog.weapons.roster() {
                    println!("  {}", weapon);
                }
            }
            Some("attrs") => {
                for attr in &catalog.filterable_attrs {
                    println!("  {}", attr);
                }
            }
            Some("filter") => {
                wanted = words.map(Attribute::from).collect();
                if wanted.is_empty() {
                    println!("Filter cleared.");
                } else {
                    println!("Filtering on {} attribute(s).", wanted.len());
                }
            }
            Some("chain") => {
                let tokens: Vec<String> = words.map(str::to_string).collect();
                let results = run_pipeline(&tokens, catalog, config, &wanted);
                print_results(&results, "text")?;
            }
            _ => println!("Unknown command: {}", input),
        }
    }

    Ok(())
}
