//! CLI frontend for the Koen text adventure.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "koen",
    about = "Koen: explore, fight monsters, and collect treasure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive adventure
    Play {
        /// Character name (prompted for if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// RNG seed for a reproducible adventure
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Let a simple bot fight a series of encounters
    Simulate {
        /// Number of encounters to fight
        #[arg(short, long, default_value = "10")]
        encounters: u32,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Show every encounter (not just the summary)
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the enemy archetypes
    Archetypes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { name, seed } => commands::play::run(name, seed),
        Commands::Simulate {
            encounters,
            seed,
            verbose,
        } => commands::simulate::run(encounters, seed, verbose),
        Commands::Archetypes { json } => commands::archetypes::run(json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
