//! Catalog store.
//!
//! Owns the product listings (most recent first) and the fixed category
//! vocabulary. Derived views (category filter, title search, per-seller
//! grouping) are computed on demand; only `products` is persisted.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use ecofinds_core::{Category, Price, ProductId, UserId};

use crate::keys;
use crate::kv::{KvError, KvStore, KvStoreExt};
use crate::models::{NewProduct, Product, ProductUpdate, now_millis};

/// The product listing container.
pub struct CatalogStore {
    kv: Arc<dyn KvStore>,
    products: Vec<Product>,
}

impl CatalogStore {
    /// Build the store, hydrating listings from storage.
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        let products: Vec<Product> = kv.load(keys::PRODUCTS, Vec::new());
        Self { kv, products }
    }

    // =========================================================================
    // Reads & derived views
    // =========================================================================

    /// All listings, most recent first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The fixed category vocabulary.
    #[must_use]
    pub const fn categories() -> &'static [Category] {
        &Category::ALL
    }

    /// Look up a listing by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// A listing's current price, if it still exists.
    #[must_use]
    pub fn price_of(&self, id: &ProductId) -> Option<Price> {
        self.get(id).map(|p| p.price)
    }

    /// Listings in a category, newest first.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Listings whose title contains `query`, case-insensitively.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Listings by a single seller, newest first.
    #[must_use]
    pub fn by_seller(&self, seller_id: &UserId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.seller_id == seller_id)
            .collect()
    }

    /// All listings grouped by seller.
    #[must_use]
    pub fn listings_by_seller(&self) -> HashMap<&UserId, Vec<&Product>> {
        let mut groups: HashMap<&UserId, Vec<&Product>> = HashMap::new();
        for product in &self.products {
            groups.entry(&product.seller_id).or_default().push(product);
        }
        groups
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a listing for `seller_id` and prepend it to the catalog.
    ///
    /// Title and description are trimmed, the price is clamped non-negative,
    /// and `created_at == updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the catalog fails.
    pub fn create(&mut self, input: NewProduct, seller_id: UserId) -> Result<Product, KvError> {
        let now = now_millis();
        let product = Product {
            id: ProductId::generate(),
            seller_id,
            title: input.title.trim().to_owned(),
            description: input.description.trim().to_owned(),
            category: input.category,
            price: Price::clamped(input.price_cents),
            image_data_url: input.image_data_url,
            created_at: now,
            updated_at: now,
        };

        info!(product = %product.id, category = %product.category, "created listing");
        self.products.insert(0, product.clone());
        self.persist()?;

        Ok(product)
    }

    /// Merge `update` into the listing with `id` and refresh `updated_at`.
    ///
    /// A silent no-op when the ID is not in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the catalog fails.
    pub fn update(&mut self, id: &ProductId, update: ProductUpdate) -> Result<(), KvError> {
        let Some(product) = self.products.iter_mut().find(|p| &p.id == id) else {
            return Ok(());
        };

        if let Some(title) = update.title {
            product.title = title;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(image) = update.image_data_url {
            product.image_data_url = image;
        }
        product.updated_at = now_millis();

        self.persist()
    }

    /// Remove the listing with `id`. Hard delete, no tombstone.
    ///
    /// The store performs no ownership check; callers decide who may remove
    /// what. A silent no-op when the ID is not in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the catalog fails.
    pub fn remove(&mut self, id: &ProductId) -> Result<(), KvError> {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        if self.products.len() == before {
            return Ok(());
        }

        info!(product = %id, "removed listing");
        self.persist()
    }

    fn persist(&self) -> Result<(), KvError> {
        self.kv.save(keys::PRODUCTS, &self.products)
    }
}
