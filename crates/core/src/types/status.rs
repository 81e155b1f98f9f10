//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Chat message sender for the rule-based advisor widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

/// Item condition, used by the selling coach's price suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    #[default]
    Good,
    Fair,
}

impl Condition {
    /// Multiplier applied to the category average when suggesting a price.
    #[must_use]
    pub const fn price_multiplier(self) -> f64 {
        match self {
            Self::New => 1.2,
            Self::Good => 1.0,
            Self::Fair => 0.8,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Good => write!(f, "good"),
            Self::Fair => write!(f, "fair"),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            _ => Err(format!("invalid condition: {s}")),
        }
    }
}
