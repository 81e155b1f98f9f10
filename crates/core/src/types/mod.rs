//! Core types for EcoFinds.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod price;
pub mod score;
pub mod status;
pub mod theme;

pub use category::{Category, CategoryError};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use score::EcoScore;
pub use status::{ChatRole, Condition};
pub use theme::Theme;
