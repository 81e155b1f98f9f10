//! Persisted domain records.
//!
//! These are the JSON shapes written to the key-value store. Field names are
//! camelCase on the wire (the layout predates this crate), so every record
//! carries an explicit serde rename policy. Timestamps are epoch
//! milliseconds.

pub mod cart;
pub mod chat;
pub mod product;
pub mod user;

pub use cart::{CartItem, PurchaseItem};
pub use chat::ChatMessage;
pub use product::{NewProduct, Product, ProductUpdate};
pub use user::{ProfileUpdate, UserProfile};

/// Current time as epoch milliseconds, the persisted timestamp format.
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
