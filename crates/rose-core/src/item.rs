//! Inventory item model.

use crate::category::Category;
use crate::error::{CoreError, Result};
use crate::quality::Quality;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single item on the shelf.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Display name; also decides the item's [`Category`].
    pub name: String,

    /// Days left to sell the item. Negative once expired.
    #[serde(alias = "sellIn")]
    pub sell_in: i32,

    /// Value score, 0..=50 for everything but legendary items.
    pub quality: i32,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Category derived from the name.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::of(&self.name)
    }

    /// Whether the sell-by date has passed.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Return this item as it will be one day later.
    #[must_use]
    pub fn aged(&self) -> Self {
        let (sell_in, quality) = self.category().age(self.sell_in, Quality::new(self.quality));
        Self {
            name: self.name.clone(),
            sell_in,
            quality: quality.value(),
        }
    }

    /// Check the quality bounds.
    ///
    /// # Errors
    /// Returns `CoreError::QualityOutOfRange` if a non-legendary item's quality
    /// is outside 0..=50.
    pub fn validate(&self) -> Result<()> {
        if self.category().is_legendary() || Quality::new(self.quality).is_bounded() {
            return Ok(());
        }
        Err(CoreError::QualityOutOfRange {
            name: self.name.clone(),
            quality: self.quality,
            min: Quality::MIN,
            max: Quality::MAX,
        })
    }
}

/// Formats as `name, sell_in, quality`, the layout of the daily report.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

impl FromStr for Item {
    type Err = CoreError;

    /// Parse `name, sell_in, quality`.
    ///
    /// The two numbers are split off from the right so names containing
    /// commas (like the legendary item) survive intact.
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.rsplitn(3, ',');
        let (Some(quality), Some(sell_in), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CoreError::InvalidItem(input.to_string()));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidItem(input.to_string()));
        }

        Ok(Self::new(
            name,
            parse_number("sell_in", sell_in)?,
            parse_number("quality", quality)?,
        ))
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<i32> {
    let raw = raw.trim();
    raw.parse().map_err(|_| CoreError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
