//! Cart and purchase-ledger store.
//!
//! State is scoped per session identity: each user (and the shared guest
//! scope) has an independent pending cart and purchase ledger under its own
//! storage keys. Switching scope rehydrates from the new scope's keys; state
//! is never merged across scopes.

use core::fmt;
use std::sync::Arc;

use tracing::info;

use ecofinds_core::{CartItemId, Price, ProductId, PurchaseId, UserId};

use crate::keys;
use crate::kv::{KvError, KvStore, KvStoreExt};
use crate::models::{CartItem, PurchaseItem, now_millis};

/// Whose cart and ledger the store currently operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartScope {
    /// A signed-in user's scope.
    User(UserId),
    /// The shared scope used while unauthenticated.
    Guest,
}

impl CartScope {
    /// Scope for an optional session pointer.
    #[must_use]
    pub fn from_session(user_id: Option<&UserId>) -> Self {
        user_id.map_or(Self::Guest, |id| Self::User(id.clone()))
    }
}

impl fmt::Display for CartScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "{id}"),
            Self::Guest => write!(f, "guest"),
        }
    }
}

/// The per-scope cart and purchase-ledger container.
pub struct CartStore {
    kv: Arc<dyn KvStore>,
    scope: CartScope,
    cart: Vec<CartItem>,
    purchases: Vec<PurchaseItem>,
}

impl CartStore {
    /// Build the store for `scope`, hydrating its cart and ledger.
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>, scope: CartScope) -> Self {
        let cart = kv.load(&keys::cart(&scope), Vec::new());
        let purchases = kv.load(&keys::purchases(&scope), Vec::new());
        Self {
            kv,
            scope,
            cart,
            purchases,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The active scope.
    #[must_use]
    pub const fn scope(&self) -> &CartScope {
        &self.scope
    }

    /// Pending cart lines, most recently added first.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// The purchase ledger, most recent first.
    #[must_use]
    pub fn purchases(&self) -> &[PurchaseItem] {
        &self.purchases
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Switch to a different scope, rehydrating cart and ledger from its
    /// keys. State is not merged across scopes.
    pub fn switch_scope(&mut self, scope: CartScope) {
        if scope == self.scope {
            return;
        }
        self.cart = self.kv.load(&keys::cart(&scope), Vec::new());
        self.purchases = self.kv.load(&keys::purchases(&scope), Vec::new());
        self.scope = scope;
    }

    /// Prepend a new cart line for `product_id`.
    ///
    /// Lines are never merged: adding the same product twice yields two
    /// lines. The product ID is not validated against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the cart fails.
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: u32) -> Result<CartItem, KvError> {
        let item = CartItem {
            id: CartItemId::generate(),
            product_id,
            quantity,
            added_at: now_millis(),
        };

        self.cart.insert(0, item.clone());
        self.persist_cart()?;
        Ok(item)
    }

    /// Remove the cart line with `cart_item_id`. Silent no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the cart fails.
    pub fn remove_from_cart(&mut self, cart_item_id: &CartItemId) -> Result<(), KvError> {
        let before = self.cart.len();
        self.cart.retain(|c| &c.id != cart_item_id);
        if self.cart.len() == before {
            return Ok(());
        }
        self.persist_cart()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the cart fails.
    pub fn clear_cart(&mut self) -> Result<(), KvError> {
        self.cart.clear();
        self.persist_cart()
    }

    /// Turn every cart line into a ledger line and empty the cart.
    ///
    /// Each line's price is resolved through `price_lookup` at this moment
    /// and recorded as-is - a stale or zero price for a deleted product is
    /// not rejected. The new ledger lines are prepended (most recent first)
    /// in cart order. One synchronous transition; not atomic across
    /// processes. The emptied cart is written before the ledger, so an
    /// interrupted checkout loses the purchase rather than leaving cart
    /// lines behind that a reopened store would check out again.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the cart or ledger fails.
    pub fn checkout<F>(&mut self, price_lookup: F) -> Result<Vec<PurchaseItem>, KvError>
    where
        F: Fn(&ProductId) -> Price,
    {
        let now = now_millis();
        let purchased: Vec<PurchaseItem> = self
            .cart
            .iter()
            .map(|line| PurchaseItem {
                id: PurchaseId::generate(),
                product_id: line.product_id.clone(),
                purchased_at: now,
                price_at_purchase: price_lookup(&line.product_id),
            })
            .collect();

        info!(scope = %self.scope, lines = purchased.len(), "checkout");
        self.purchases.splice(0..0, purchased.iter().cloned());
        self.cart.clear();
        self.persist_cart()?;
        self.persist_purchases()?;

        Ok(purchased)
    }

    fn persist_cart(&self) -> Result<(), KvError> {
        self.kv.save(&keys::cart(&self.scope), &self.cart)
    }

    fn persist_purchases(&self) -> Result<(), KvError> {
        self.kv.save(&keys::purchases(&self.scope), &self.purchases)
    }
}
