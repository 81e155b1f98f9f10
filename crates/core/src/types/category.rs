//! Listing categories.
//!
//! The category vocabulary is a fixed 19-entry enumeration. It is part of the
//! application, not persisted state; stored products reference categories by
//! their display label.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown category label.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// A listing category.
///
/// Serialized using the human-readable labels the catalog stores
/// (e.g. `"Smart Devices"`), so persisted products stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Fashion,
    Beauty,
    Accessories,
    Electronics,
    #[serde(rename = "Smart Devices")]
    SmartDevices,
    Home,
    Furniture,
    Decor,
    Kitchen,
    Books,
    Media,
    Educational,
    Toys,
    Sports,
    #[serde(rename = "Sports Gear")]
    SportsGear,
    Outdoor,
    #[serde(rename = "Outdoor Equipment")]
    OutdoorEquipment,
    Fitness,
    #[default]
    Other,
}

impl Category {
    /// The full fixed vocabulary, in display order.
    pub const ALL: [Self; 19] = [
        Self::Fashion,
        Self::Beauty,
        Self::Accessories,
        Self::Electronics,
        Self::SmartDevices,
        Self::Home,
        Self::Furniture,
        Self::Decor,
        Self::Kitchen,
        Self::Books,
        Self::Media,
        Self::Educational,
        Self::Toys,
        Self::Sports,
        Self::SportsGear,
        Self::Outdoor,
        Self::OutdoorEquipment,
        Self::Fitness,
        Self::Other,
    ];

    /// The human-readable label, as persisted and displayed.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fashion => "Fashion",
            Self::Beauty => "Beauty",
            Self::Accessories => "Accessories",
            Self::Electronics => "Electronics",
            Self::SmartDevices => "Smart Devices",
            Self::Home => "Home",
            Self::Furniture => "Furniture",
            Self::Decor => "Decor",
            Self::Kitchen => "Kitchen",
            Self::Books => "Books",
            Self::Media => "Media",
            Self::Educational => "Educational",
            Self::Toys => "Toys",
            Self::Sports => "Sports",
            Self::SportsGear => "Sports Gear",
            Self::Outdoor => "Outdoor",
            Self::OutdoorEquipment => "Outdoor Equipment",
            Self::Fitness => "Fitness",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_has_19_entries() {
        assert_eq!(Category::ALL.len(), 19);
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::SmartDevices).unwrap();
        assert_eq!(json, "\"Smart Devices\"");

        let parsed: Category = serde_json::from_str("\"Outdoor Equipment\"").unwrap();
        assert_eq!(parsed, Category::OutdoorEquipment);
    }

    #[test]
    fn test_from_str_accepts_labels() {
        assert_eq!("Home".parse::<Category>().unwrap(), Category::Home);
        assert_eq!(
            "sports gear".parse::<Category>().unwrap(),
            Category::SportsGear
        );
        assert!("Vehicles".parse::<Category>().is_err());
    }

    #[test]
    fn test_label_roundtrip() {
        for category in Category::ALL {
            assert_eq!(
                category.label().parse::<Category>().unwrap(),
                category,
                "label should parse back to the same category"
            );
        }
    }
}
