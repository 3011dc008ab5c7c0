//! Item categories and their daily aging rules.
//!
//! Every rule decrements `sell_in` first (except [`Category::Legendary`]) and
//! then evaluates its thresholds against the decremented value. An item is
//! expired once that value is below zero. Backstage passes are worthless from
//! the day the decremented value reaches zero.

use crate::quality::Quality;
use serde::{Deserialize, Serialize};

/// Name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Name of the item that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";
/// Name of the concert pass.
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Name of the conjured item.
pub const CONJURED: &str = "Conjured";

/// Backstage passes gain +3 from this many days out.
const PASS_FINAL_STRETCH: i32 = 5;
/// Backstage passes gain +2 from this many days out.
const PASS_RUN_UP: i32 = 10;

/// Category an item falls into, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Never sold, never degrades.
    Legendary,
    /// Gains quality as it ages, twice as fast once expired.
    AgingBrie,
    /// Gains quality as the concert approaches, worthless afterwards.
    BackstagePass,
    /// Degrades twice as fast as a regular item.
    Conjured,
    /// Loses 1 quality a day, 2 once expired.
    Regular,
}

impl Category {
    /// Classify an item by its exact name. Unknown names are [`Category::Regular`].
    #[must_use]
    pub fn of(name: &str) -> Self {
        match name {
            SULFURAS => Self::Legendary,
            AGED_BRIE => Self::AgingBrie,
            BACKSTAGE_PASSES => Self::BackstagePass,
            CONJURED => Self::Conjured,
            _ => Self::Regular,
        }
    }

    /// Whether items of this category are exempt from the quality bounds.
    #[must_use]
    pub const fn is_legendary(self) -> bool {
        matches!(self, Self::Legendary)
    }

    /// Compute the next day's `(sell_in, quality)` for this category.
    #[must_use]
    pub fn age(self, sell_in: i32, quality: Quality) -> (i32, Quality) {
        if self.is_legendary() {
            return (sell_in, quality);
        }

        let sell_in = sell_in.saturating_sub(1);
        let expired = sell_in < 0;

        let quality = match self {
            Self::Legendary => quality,
            Self::AgingBrie => quality.increment_by(if expired { 2 } else { 1 }),
            Self::BackstagePass => {
                if sell_in <= 0 {
                    quality.zeroed()
                } else if sell_in <= PASS_FINAL_STRETCH {
                    quality.increment_by(3)
                } else if sell_in <= PASS_RUN_UP {
                    quality.increment_by(2)
                } else {
                    quality.increment_by(1)
                }
            }
            Self::Conjured => quality.decrement_by(if expired { 4 } else { 2 }),
            Self::Regular => quality.decrement_by(if expired { 2 } else { 1 }),
        };

        (sell_in, quality)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legendary => write!(f, "legendary"),
            Self::AgingBrie => write!(f, "aging_brie"),
            Self::BackstagePass => write!(f, "backstage_pass"),
            Self::Conjured => write!(f, "conjured"),
            Self::Regular => write!(f, "regular"),
        }
    }
}
