//! Error types for rose-core.

use thiserror::Error;

/// Result type alias for rose-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while building or checking items.
///
/// The daily update itself never fails; these only surface when items are
/// parsed from text or validated before a simulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Input did not have the `name, sell_in, quality` shape.
    #[error("invalid item: expected 'name, sell_in, quality', got '{0}'")]
    InvalidItem(String),

    /// A numeric field could not be parsed.
    #[error("invalid {field} '{value}': not an integer")]
    InvalidNumber { field: &'static str, value: String },

    /// Quality outside 0..=50 on an item that is not legendary.
    #[error("quality {quality} of '{name}' is outside {min}..={max}")]
    QualityOutOfRange {
        name: String,
        quality: i32,
        min: i32,
        max: i32,
    },
}
