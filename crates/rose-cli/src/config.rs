//! Simulation configuration.

use anyhow::{Context, Result};
use rose_core::{standard_items, Item};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Simulation settings, optionally read from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Number of days to simulate.
    #[serde(default = "default_days")]
    pub days: u32,

    /// Starting inventory.
    #[serde(default = "standard_items")]
    pub items: Vec<Item>,
}

const fn default_version() -> u32 {
    1
}

const fn default_days() -> u32 {
    2
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            days: default_days(),
            items: standard_items(),
        }
    }
}

impl SimulationConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid YAML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        debug!(path = %path.display(), days = config.days, items = config.items.len(), "Loaded config");

        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, days: Option<u32>, items: Vec<Item>) -> Self {
        if let Some(days) = days {
            self.days = days;
        }
        if !items.is_empty() {
            self.items = items;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_path() {
        let config = SimulationConfig::load(None).unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.days, 2);
        assert_eq!(config.items, standard_items());
    }

    #[test]
    fn test_load_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rose.yml");
        fs::write(&path, "days: 5\n").unwrap();

        let config = SimulationConfig::load(Some(&path)).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.days, 5);
        assert_eq!(config.items, standard_items());
    }

    #[test]
    fn test_load_items() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rose.yml");
        fs::write(
            &path,
            "items:\n  - name: Aged Brie\n    sellIn: 2\n    quality: 0\n  - name: Vest\n    sell_in: 1\n    quality: 3\n",
        )
        .unwrap();

        let config = SimulationConfig::load(Some(&path)).unwrap();
        assert_eq!(
            config.items,
            vec![Item::new("Aged Brie", 2, 0), Item::new("Vest", 1, 3)]
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = SimulationConfig::load(Some(&tmp.path().join("absent.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let config = SimulationConfig::default()
            .with_overrides(Some(10), vec![Item::new("Vest", 1, 1)]);
        assert_eq!(config.days, 10);
        assert_eq!(config.items.len(), 1);

        let config = SimulationConfig::default().with_overrides(None, Vec::new());
        assert_eq!(config, SimulationConfig::default());
    }
}
