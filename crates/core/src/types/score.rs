//! Eco-score type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A user's eco-score, an integer in `0..=100`.
///
/// New accounts start from a friendly baseline drawn from `60..80`;
/// construction clamps into range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EcoScore(u8);

impl EcoScore {
    /// Maximum score.
    pub const MAX: u8 = 100;

    /// Lower bound of the starter range (inclusive).
    pub const STARTER_MIN: u8 = 60;

    /// Upper bound of the starter range (exclusive).
    pub const STARTER_MAX: u8 = 80;

    /// Create a score, clamping into `0..=100`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Get the raw score value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this score lies in the starter baseline range `60..80`.
    #[must_use]
    pub const fn is_starter(self) -> bool {
        self.0 >= Self::STARTER_MIN && self.0 < Self::STARTER_MAX
    }
}

impl fmt::Display for EcoScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
