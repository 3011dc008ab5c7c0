//! Output formatting for the CLI.

use anyhow::Result;
use console::style;
use rose_core::{Category, Item, ItemChange};
use serde::Serialize;
use std::fmt::Write;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Print a single value in the specified format.
pub fn print<T: Serialize + HumanDisplay>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", value.human_display()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

/// Print a list in the specified format.
pub fn print_list<T: Serialize + HumanDisplay>(values: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for value in values {
                println!("{}", value.human_display());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(values)?),
    }
    Ok(())
}

/// Trait for human-readable display.
pub trait HumanDisplay {
    fn human_display(&self) -> String;
}

impl HumanDisplay for Item {
    fn human_display(&self) -> String {
        self.to_string()
    }
}

/// The shelf as it stands on a given day.
#[derive(Debug, Serialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

impl HumanDisplay for DaySnapshot {
    fn human_display(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "-------- day {} --------", self.day);
        let _ = writeln!(out, "name, sellIn, quality");
        for item in &self.items {
            let _ = writeln!(out, "{item}");
        }
        out
    }
}

impl HumanDisplay for ItemChange {
    fn human_display(&self) -> String {
        let quality = format!("{} → {}", self.quality.from, self.quality.to);
        let quality = match self.quality.delta() {
            d if d > 0 => style(quality).green(),
            d if d < 0 => style(quality).red(),
            _ => style(quality).dim(),
        };

        let mut line = format!(
            "{:<45} {:<15} sellIn {} → {}  quality {}",
            self.name,
            self.category.to_string(),
            self.sell_in.from,
            self.sell_in.to,
            quality
        );
        if self.expired_today() {
            let _ = write!(line, "  {}", style("expired").yellow().bold());
        }
        line
    }
}

/// Result of classifying an item name.
#[derive(Debug, Serialize)]
pub struct Classification {
    pub name: String,
    pub category: Category,
}

impl HumanDisplay for Classification {
    fn human_display(&self) -> String {
        format!("{}: {}", self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rose_core::standard_items;

    #[test]
    fn test_snapshot_layout() {
        let snapshot = DaySnapshot {
            day: 0,
            items: standard_items().into_iter().take(2).collect(),
        };

        assert_eq!(
            snapshot.human_display(),
            "-------- day 0 --------\nname, sellIn, quality\n+5 Dexterity Vest, 10, 20\nAged Brie, 2, 0\n"
        );
    }

    #[test]
    fn test_change_mentions_expiry() {
        console::set_colors_enabled(false);
        let before = Item::new("Vest", 0, 10);
        let change = ItemChange::between(&before, &before.aged());

        let line = change.human_display();
        assert!(line.contains("sellIn 0 → -1"));
        assert!(line.contains("quality 10 → 8"));
        assert!(line.ends_with("expired"));
    }

    #[test]
    fn test_change_with_extreme_quality_renders() {
        console::set_colors_enabled(false);
        let before = Item::new("Vest", 3, i32::MIN);
        let change = ItemChange::between(&before, &before.aged());

        assert!(change.human_display().contains("quality -2147483648 → 0"));
    }

    #[test]
    fn test_classification_display() {
        let classification = Classification {
            name: "Aged Brie".to_string(),
            category: Category::of("Aged Brie"),
        };
        assert_eq!(classification.human_display(), "Aged Brie: aging_brie");
    }
}
