//! Bounded quality arithmetic.

use serde::{Deserialize, Serialize};

/// Quality carried by every legendary item. Never changes.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A quality score with saturating arithmetic.
///
/// Increments stop at [`Quality::MAX`] and decrements stop at [`Quality::MIN`].
/// Construction does not clamp, so a legendary quality can be carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    /// Lowest quality a non-legendary item can have.
    pub const MIN: i32 = 0;
    /// Highest quality a non-legendary item can have.
    pub const MAX: i32 = 50;

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Raise by `amount`, saturating at [`Quality::MAX`].
    #[must_use]
    pub fn increment_by(self, amount: i32) -> Self {
        Self(self.0.saturating_add(amount).min(Self::MAX))
    }

    /// Lower by `amount`, flooring at [`Quality::MIN`].
    #[must_use]
    pub fn decrement_by(self, amount: i32) -> Self {
        Self(self.0.saturating_sub(amount).max(Self::MIN))
    }

    /// Drop straight to zero.
    #[must_use]
    pub const fn zeroed(self) -> Self {
        Self(0)
    }

    /// Whether the value lies within `MIN..=MAX`.
    #[must_use]
    pub const fn is_bounded(self) -> bool {
        self.0 >= Self::MIN && self.0 <= Self::MAX
    }
}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Quality> for i32 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}
