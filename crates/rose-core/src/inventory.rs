//! Inventory holder that tracks the simulated day.

use crate::change::{DayReport, ItemChange};
use crate::error::Result;
use crate::item::Item;
use crate::update::advance_one_day;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The shop's shelf, advanced one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    /// Days simulated so far.
    day: u32,
}

impl Inventory {
    /// Stock the shelf on day 0.
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    /// Stock the shelf after checking every item's quality bounds.
    ///
    /// # Errors
    /// Returns the first `CoreError::QualityOutOfRange` encountered.
    pub fn checked(items: Vec<Item>) -> Result<Self> {
        items.iter().try_for_each(Item::validate)?;
        Ok(Self::new(items))
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Run one day and report what changed.
    pub fn advance(&mut self) -> DayReport {
        let before = self.items.clone();
        advance_one_day(&mut self.items);
        self.day += 1;

        let changes = before
            .iter()
            .zip(&self.items)
            .map(|(old, new)| ItemChange::between(old, new))
            .collect();

        debug!(day = self.day, items = self.items.len(), "Advanced inventory");

        DayReport {
            day: self.day,
            changes,
        }
    }

    /// Run `days` days in a row.
    pub fn advance_by(&mut self, days: u32) -> Vec<DayReport> {
        (0..days).map(|_| self.advance()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE, SULFURAS};
    use crate::error::CoreError;
    use crate::fixture::standard_items;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_inventory_starts_at_day_zero() {
        let inventory = Inventory::new(standard_items());
        assert_eq!(inventory.day(), 0);
        assert_eq!(inventory.items().len(), 9);
    }

    #[test]
    fn test_advance_reports_each_item() {
        let mut inventory = Inventory::new(vec![
            Item::new(AGED_BRIE, 2, 0),
            Item::new(SULFURAS, 0, 80),
        ]);

        let report = inventory.advance();

        assert_eq!(report.day, 1);
        assert_eq!(report.changes.len(), 2);
        assert_eq!(report.changes[0].quality.delta(), 1);
        assert!(report.changes[1].quality.is_unchanged());
        assert_eq!(inventory.items()[0], Item::new(AGED_BRIE, 1, 1));
    }

    #[test]
    fn test_advance_by() {
        let mut inventory = Inventory::new(vec![Item::new(AGED_BRIE, 2, 0)]);

        let reports = inventory.advance_by(3);

        assert_eq!(reports.iter().map(|r| r.day).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(inventory.day(), 3);
        // 1, 0 then expired: +1, +1, +2
        assert_eq!(inventory.into_items(), vec![Item::new(AGED_BRIE, -1, 4)]);
    }

    #[test]
    fn test_advance_by_zero_is_noop() {
        let mut inventory = Inventory::new(standard_items());
        assert!(inventory.advance_by(0).is_empty());
        assert_eq!(inventory.items(), standard_items().as_slice());
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        let result = Inventory::checked(vec![Item::new(SULFURAS, 0, 80), Item::new("Vest", 1, 60)]);
        assert!(matches!(
            result,
            Err(CoreError::QualityOutOfRange { quality: 60, .. })
        ));

        assert!(Inventory::checked(standard_items()).is_ok());
    }
}
