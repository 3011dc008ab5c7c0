//! CLI command implementations.

use crate::config::SimulationConfig;
use crate::output::{self, Classification, DaySnapshot, OutputFormat};
use anyhow::{Context, Result};
use rose_core::{Category, Inventory, Item};
use std::path::Path;
use tracing::info;

/// Parse `--item` arguments.
fn parse_items(raw: &[String]) -> Result<Vec<Item>> {
    raw.iter()
        .map(|s| s.parse::<Item>().with_context(|| format!("Failed to parse item '{s}'")))
        .collect()
}

/// Resolve the config file and flags into a checked starting inventory.
fn prepare(
    config_path: Option<&Path>,
    days: Option<u32>,
    items: &[String],
) -> Result<(SimulationConfig, Inventory)> {
    let config = SimulationConfig::load(config_path)?.with_overrides(days, parse_items(items)?);
    let inventory =
        Inventory::checked(config.items.clone()).context("Starting inventory is invalid")?;
    Ok((config, inventory))
}

/// Collect the shelf for day 0 through `days`.
fn run_days(inventory: &mut Inventory, days: u32) -> Vec<DaySnapshot> {
    let mut snapshots = vec![DaySnapshot {
        day: inventory.day(),
        items: inventory.items().to_vec(),
    }];
    for _ in 0..days {
        let report = inventory.advance();
        snapshots.push(DaySnapshot {
            day: report.day,
            items: inventory.items().to_vec(),
        });
    }
    snapshots
}

/// Print the inventory for every simulated day.
pub fn simulate(
    config_path: Option<&Path>,
    days: Option<u32>,
    items: &[String],
    format: OutputFormat,
) -> Result<()> {
    let (config, mut inventory) = prepare(config_path, days, items)?;

    info!(days = config.days, items = inventory.items().len(), "Starting simulation");

    let snapshots = run_days(&mut inventory, config.days);
    output::print_list(&snapshots, format)?;

    info!(day = inventory.day(), "Simulation finished");
    Ok(())
}

/// Advance one day and print what changed for each item.
pub fn step(config_path: Option<&Path>, items: &[String], format: OutputFormat) -> Result<()> {
    let (_, mut inventory) = prepare(config_path, None, items)?;

    let report = inventory.advance();
    output::print_list(&report.changes, format)
}

/// Print the category a name falls into.
pub fn classify(name: &str, format: OutputFormat) -> Result<()> {
    let classification = Classification {
        name: name.to_string(),
        category: Category::of(name),
    };
    output::print(&classification, format)
}
