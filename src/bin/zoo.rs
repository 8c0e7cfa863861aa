//! Zoo CLI
//!
//! Applies a roster file to a fresh registry and reports on the result.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zoo_registry::roster::count_failures;
use zoo_registry::{Roster, Species, ZooConfig, ZooManager};

#[derive(Parser)]
#[command(name = "zoo")]
#[command(about = "Register animals and enclosures from a roster and report on them")]
struct Cli {
    /// Config file layered over zoo.toml and ZOO__* variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Roster file (JSON)
    roster: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the roster and show every step and enclosure
    Apply,

    /// List animals of one species
    Species {
        /// mammal, bird or reptile
        species: Species,
    },

    /// List health records at or above a severity
    Medical {
        /// Defaults to the configured threshold
        #[arg(short, long)]
        min_severity: Option<u8>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ZooConfig::load_from(cli.config.as_deref()).context("loading configuration")?;
    let roster = Roster::load(&cli.roster)
        .with_context(|| format!("reading roster {}", cli.roster.display()))?;

    let mut zoo = ZooManager::with_config(config);
    let outcomes = roster.apply(&mut zoo);

    match cli.command {
        Commands::Apply => {
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(Some(event)) => println!("✅ {}", event),
                    Ok(None) => println!("✅ {}", outcome.step),
                    Err(e) => println!("❌ {}: {}", outcome.step, e),
                }
            }

            for enclosure in zoo.enclosures() {
                println!();
                println!("{}", enclosure.report_status());
            }

            let failed = count_failures(&outcomes);
            if failed > 0 {
                println!();
                println!("{} of {} steps failed", failed, outcomes.len());
                std::process::exit(1);
            }
        }

        Commands::Species { species } => {
            let names = zoo.report_by_species(species);
            println!("{} census: {}", species, names.len());
            for name in names {
                println!("  - {}", name);
            }
        }

        Commands::Medical { min_severity } => {
            let alerts = match min_severity {
                Some(level) => zoo.report_by_severity(level),
                None => zoo.medical_alerts(),
            };

            if alerts.is_empty() {
                println!("No active medical alerts");
            } else {
                println!("Active medical alerts:");
                for alert in alerts {
                    println!("  - {}", alert);
                }
            }
        }
    }

    Ok(())
}
