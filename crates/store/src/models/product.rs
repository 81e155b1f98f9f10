//! Product listing records.

use serde::{Deserialize, Serialize};

use ecofinds_core::{Category, Price, ProductId, UserId};

/// A product listing.
///
/// `seller_id` references a user profile but is not enforced as a foreign
/// key; nothing removes profiles, so dangling references do not occur in
/// practice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique listing ID.
    pub id: ProductId,
    /// The listing user.
    pub seller_id: UserId,
    /// Listing title, trimmed at creation.
    pub title: String,
    /// Listing description, trimmed at creation.
    pub description: String,
    /// One of the fixed category vocabulary.
    pub category: Category,
    /// Asking price in cents, clamped non-negative at creation.
    pub price: Price,
    /// Optional embedded image as a `data:` URI; a placeholder image is
    /// rendered when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data_url: Option<String>,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
    /// Last update time, epoch milliseconds.
    pub updated_at: i64,
}

/// Input for creating a listing.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Title; surrounding whitespace is trimmed.
    pub title: String,
    /// Description; surrounding whitespace is trimmed.
    pub description: String,
    /// Listing category.
    pub category: Category,
    /// Asking price in cents, possibly negative; clamped to zero.
    pub price_cents: i64,
    /// Optional embedded image as a `data:` URI.
    pub image_data_url: Option<String>,
}

/// Partial listing update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<Category>,
    /// New price.
    pub price: Option<Price>,
    /// New embedded image. `Some(None)` clears the image.
    pub image_data_url: Option<Option<String>>,
}
