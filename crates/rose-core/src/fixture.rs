//! The standard shelf used by the daily text report.

use crate::category::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, SULFURAS};
use crate::item::Item;
use crate::quality::LEGENDARY_QUALITY;

/// The nine items the daily report starts from.
#[must_use]
pub fn standard_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, LEGENDARY_QUALITY),
        Item::new(SULFURAS, -1, LEGENDARY_QUALITY),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new(CONJURED, 3, 6),
    ]
}
