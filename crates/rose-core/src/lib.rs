//! rose-core: Inventory model and daily update rules for the Gilded Rose.
//!
//! This crate provides:
//! - `Item`: A shelf item with `sell_in` and `quality`
//! - `Category`: The rule set an item follows, derived from its name
//! - `advance_one_day` / `next_day`: The daily update, in place or pure
//! - `Inventory`: A shelf that counts days and reports each day's changes

pub mod category;
pub mod change;
pub mod error;
pub mod fixture;
pub mod inventory;
pub mod item;
pub mod quality;
pub mod update;

pub use category::Category;
pub use change::{DayReport, ItemChange, Transition};
pub use error::{CoreError, Result};
pub use fixture::standard_items;
pub use inventory::Inventory;
pub use item::Item;
pub use quality::{Quality, LEGENDARY_QUALITY};
pub use update::{advance_one_day, next_day};
