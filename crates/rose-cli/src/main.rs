//! gilded-rose CLI - Run the shop's inventory day by day.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gilded-rose")]
#[command(author, version, about = "Gilded Rose inventory simulator")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    format: output::OutputFormat,

    /// Simulation config file (YAML)
    #[arg(long, short = 'c', global = true, env = "GILDED_ROSE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the inventory for each simulated day
    #[command(alias = "run")]
    Simulate {
        /// Number of days to simulate
        #[arg(long, short = 'd')]
        days: Option<u32>,

        /// Items as "name, sellIn, quality" (can be specified multiple times)
        #[arg(long, short = 'i')]
        item: Vec<String>,
    },

    /// Advance one day and show what changed
    Step {
        /// Items as "name, sellIn, quality" (can be specified multiple times)
        #[arg(long, short = 'i')]
        item: Vec<String>,
    },

    /// Show which category an item name falls into
    Classify {
        /// Item name
        name: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Simulate { days, item } => commands::simulate(config, days, &item, cli.format),
        Commands::Step { item } => commands::step(config, &item, cli.format),
        Commands::Classify { name } => commands::classify(&name, cli.format),
    }
}
