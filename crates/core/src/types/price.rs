//! Type-safe price representation in minor currency units.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A non-negative price in minor currency units (cents).
///
/// Listings store prices as whole cents; fractional and negative inputs are
/// clamped on the way in, never rejected.
///
/// ## Examples
///
/// ```
/// use ecofinds_core::Price;
///
/// let price = Price::from_cents(1999);
/// assert_eq!(price.cents(), 1999);
/// assert_eq!(price.to_string(), "$19.99");
///
/// // Negative inputs clamp to zero
/// assert_eq!(Price::clamped(-500), Price::ZERO);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(0);

    /// Create a price from whole cents.
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    /// Create a price from a possibly-negative cent amount, clamping to zero.
    #[must_use]
    pub const fn clamped(cents: i64) -> Self {
        if cents <= 0 {
            Self::ZERO
        } else if cents > u32::MAX as i64 {
            Self(u32::MAX)
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self(cents as u32)
        }
    }

    /// Get the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u32 {
        self.0
    }

    /// Sum a sequence of prices, saturating at the maximum.
    #[must_use]
    pub fn total<I: IntoIterator<Item = Self>>(prices: I) -> Self {
        Self(
            prices
                .into_iter()
                .fold(0u32, |acc, p| acc.saturating_add(p.0)),
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl From<u32> for Price {
    fn from(cents: u32) -> Self {
        Self(cents)
    }
}

impl From<Price> for u32 {
    fn from(price: Price) -> Self {
        price.0
    }
}
