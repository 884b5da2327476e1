use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::catalog::load_catalog;
use crate::filters::{AllergyProfile, AppliedFilterSet};
use crate::history::{HISTORY_CAPACITY, SearchHistory};
use crate::pipeline::{SearchRequest, submit_search};
use crate::storage::FileStore;

#[derive(Parser)]
#[command(name = "remedy-finder")]
#[command(version = "0.1.0")]
#[command(about = "Find natural remedies matching your symptoms", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the remedy catalog by symptoms
    Search {
        /// Symptoms to search for (1 to 5)
        #[arg(required = true, num_args = 1..=5)]
        symptoms: Vec<String>,
        /// Path to the remedy catalog JSON file
        #[arg(long, default_value = "remedies.json")]
        catalog: PathBuf,
        /// Allergen to filter unsafe remedies by (repeatable)
        #[arg(long = "allergen")]
        allergens: Vec<String>,
        /// Also list allergy-filtered remedies, tagged
        #[arg(long)]
        show_filtered: bool,
        /// Keep only remedies known safe during pregnancy
        #[arg(long)]
        pregnancy_safe: bool,
        /// Keep only remedies verified by a health professional
        #[arg(long)]
        verified_only: bool,
        /// Keep only remedies suitable for a child of this age
        #[arg(long)]
        child_age: Option<u8>,
    },
    /// Show or edit past searches
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Show statistics about the catalog
    Stats {
        /// Path to the remedy catalog JSON file
        #[arg(long, default_value = "remedies.json")]
        catalog: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List recent searches (default)
    List,
    /// Remove one search by id
    Remove { id: String },
    /// Remove all searches
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search {
            symptoms,
            catalog,
            allergens,
            show_filtered,
            pregnancy_safe,
            verified_only,
            child_age,
        }) => {
            let request = SearchRequest {
                symptoms,
                allergy: AllergyProfile { enabled: !allergens.is_empty(), allergens },
                filters: AppliedFilterSet {
                    pregnancy_safe_only: pregnancy_safe,
                    verified_only,
                    suitable_for_age: child_age,
                },
                show_filtered,
            };
            run_search_command(&catalog, &request)?;
        }
        Some(Commands::History { action }) => {
            run_history_command(action.unwrap_or(HistoryAction::List));
        }
        Some(Commands::Stats { catalog }) => {
            show_stats(&catalog)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn run_search_command(catalog_path: &PathBuf, request: &SearchRequest) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let store = FileStore::open_default();
    let outcome = submit_search(&catalog, request, &store);

    if outcome.results.is_empty() {
        println!("No remedies match your symptoms.");
        return Ok(());
    }

    for result in &outcome.results {
        let mut markers = String::new();
        if result.is_recommended {
            markers.push_str(" (recommended)");
        }
        if result.is_filtered {
            markers.push_str(" [contains your allergens]");
        }
        println!(
            "{}{} - matches {}: {}",
            result.remedy.name,
            markers,
            result.match_count,
            result.matched_symptoms.join(", ")
        );
    }
    println!();
    println!(
        "{} usable remedies, {} filtered by allergies",
        outcome.result_count, outcome.filtered_count
    );
    if let Some(navigation) = &outcome.navigation {
        println!("Route: ?{}", navigation.query);
    }

    Ok(())
}

fn run_history_command(action: HistoryAction) {
    let store = FileStore::open_default();
    let history = SearchHistory::new(&store);

    match action {
        HistoryAction::List => {
            let entries = history.entries();
            if entries.is_empty() {
                println!("No recent searches.");
                return;
            }
            println!("Recent searches (last {}):", HISTORY_CAPACITY);
            for entry in entries {
                println!(
                    "  {}  {}  ({} results, {} filtered)",
                    entry.id,
                    entry.symptoms.join(", "),
                    entry.result_count,
                    entry.filtered_count
                );
            }
        }
        HistoryAction::Remove { id } => {
            history.remove_search(&id);
            println!("Removed search {}", id);
        }
        HistoryAction::Clear => {
            history.clear_history();
            println!("Search history cleared");
        }
    }
}

fn show_stats(catalog_path: &PathBuf) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let verified = catalog.iter().filter(|r| r.verified_by_professional).count();
    let pregnancy_safe = catalog.iter().filter(|r| r.pregnancy_safe == Some(true)).count();
    let with_allergens = catalog.iter().filter(|r| !r.allergens.is_empty()).count();

    println!("Remedy Catalog Statistics");
    println!("=========================");
    println!("Total remedies: {}", catalog.len());
    println!("  Verified by a professional: {}", verified);
    println!("  Safe during pregnancy: {}", pregnancy_safe);
    println!("  Carrying allergens: {}", with_allergens);

    Ok(())
}
