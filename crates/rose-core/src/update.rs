//! The daily inventory update.

use crate::item::Item;
use tracing::debug;

/// Advance every item by one day, in order, and hand the same slice back.
///
/// Legendary items are left as they are; everything else has its `sell_in`
/// decremented and its quality adjusted by its category's rule.
pub fn advance_one_day(items: &mut [Item]) -> &mut [Item] {
    for item in items.iter_mut() {
        let next = item.aged();
        debug!(
            name = %item.name,
            category = %item.category(),
            sell_in = next.sell_in,
            quality_from = item.quality,
            quality_to = next.quality,
            "Aged item"
        );
        *item = next;
    }
    items
}

/// Pure counterpart of [`advance_one_day`]: builds the next day's list and
/// leaves `items` untouched.
#[must_use]
pub fn next_day(items: &[Item]) -> Vec<Item> {
    items.iter().map(Item::aged).collect()
}
