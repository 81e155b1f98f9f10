//! Cart line and purchase ledger records.

use serde::{Deserialize, Serialize};

use ecofinds_core::{CartItemId, Price, ProductId, PurchaseId};

/// A pending cart line.
///
/// `product_id` is not validated against the catalog; a line for a deleted
/// product simply resolves to whatever price the lookup supplies at
/// checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Unique line ID.
    pub id: CartItemId,
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Quantity, 1 unless the caller asks for more. Lines are never merged,
    /// so duplicates show up as separate lines.
    pub quantity: u32,
    /// When the line was added, epoch milliseconds.
    pub added_at: i64,
}

/// A purchase ledger line, created in bulk by checkout.
///
/// Never mutated or deleted; the ledger is most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    /// Unique ledger line ID.
    pub id: PurchaseId,
    /// The purchased product.
    pub product_id: ProductId,
    /// Checkout time, epoch milliseconds.
    pub purchased_at: i64,
    /// Price snapshot taken at checkout; does not track the live listing.
    pub price_at_purchase: Price,
}
