//! Per-day change records.

use crate::category::Category;
use crate::item::Item;
use serde::{Deserialize, Serialize};

/// Old and new value of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: i32,
    pub to: i32,
}

impl Transition {
    #[must_use]
    pub const fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Signed difference `to - from`, widened to `i64` so it cannot overflow.
    #[must_use]
    pub const fn delta(&self) -> i64 {
        self.to as i64 - self.from as i64
    }

    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.from == self.to
    }
}

/// What happened to one item over one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChange {
    pub name: String,
    pub category: Category,
    pub sell_in: Transition,
    pub quality: Transition,
}

impl ItemChange {
    /// Describe the step from `before` to `after`.
    ///
    /// Both sides are expected to be the same item; the name and category are
    /// taken from `after`.
    #[must_use]
    pub fn between(before: &Item, after: &Item) -> Self {
        Self {
            name: after.name.clone(),
            category: after.category(),
            sell_in: Transition::new(before.sell_in, after.sell_in),
            quality: Transition::new(before.quality, after.quality),
        }
    }

    /// Whether the item crossed its sell-by date during this step.
    #[must_use]
    pub const fn expired_today(&self) -> bool {
        self.sell_in.from >= 0 && self.sell_in.to < 0
    }
}

/// Everything that changed on one simulated day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// Day number reached after the step (first step yields day 1).
    pub day: u32,
    pub changes: Vec<ItemChange>,
}

impl DayReport {
    /// Changes whose quality actually moved.
    pub fn quality_changes(&self) -> impl Iterator<Item = &ItemChange> {
        self.changes.iter().filter(|c| !c.quality.is_unchanged())
    }
}
