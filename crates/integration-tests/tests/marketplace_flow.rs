//! End-to-end marketplace flow: register, sell, browse, buy.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use ecofinds_core::{Category, Price};
use ecofinds_store::identity::Sha256Hasher;
use ecofinds_store::models::NewProduct;
use ecofinds_store::{
    CartScope, CartStore, CatalogStore, FileKv, IdentityStore, KvStore,
};

fn open_store(dir: &std::path::Path) -> Arc<dyn KvStore> {
    Arc::new(FileKv::open_default(dir).unwrap())
}

fn lamp() -> NewProduct {
    NewProduct {
        title: "Desk lamp".to_owned(),
        description: "Warm light, brass base".to_owned(),
        category: Category::Home,
        price_cents: 1_500,
        image_data_url: None,
    }
}

#[test]
fn test_register_sell_and_checkout() {
    let dir = tempfile::tempdir().unwrap();
    let kv = open_store(dir.path());

    let mut identity = IdentityStore::new(Arc::clone(&kv), Arc::new(Sha256Hasher));
    let mut catalog = CatalogStore::new(Arc::clone(&kv));

    // Seller lists two products.
    let seller = identity.register("seller@x.com", "pw-seller", "sam").unwrap();
    let lamp = catalog.create(lamp(), seller.id.clone()).unwrap();
    let chair = catalog
        .create(
            NewProduct {
                title: "Office chair".to_owned(),
                description: String::new(),
                category: Category::Furniture,
                price_cents: 4_000,
                image_data_url: None,
            },
            seller.id.clone(),
        )
        .unwrap();

    // Buyer signs up and finds the lamp.
    let buyer = identity.register("buyer@x.com", "pw-buyer", "bea").unwrap();
    let hits = catalog.search("lamp");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits.first().unwrap().id, lamp.id);

    // Buyer carts both and checks out.
    let mut cart = CartStore::new(Arc::clone(&kv), CartScope::User(buyer.id.clone()));
    cart.add_to_cart(lamp.id.clone(), 1).unwrap();
    cart.add_to_cart(chair.id.clone(), 1).unwrap();

    let purchased = cart
        .checkout(|id| catalog.price_of(id).unwrap_or(Price::ZERO))
        .unwrap();

    assert_eq!(purchased.len(), 2);
    assert!(cart.cart().is_empty());
    assert_eq!(
        Price::total(purchased.iter().map(|p| p.price_at_purchase)),
        Price::from_cents(5_500)
    );

    // Everything survives a full reopen of the store.
    drop((identity, catalog, cart));
    let kv = open_store(dir.path());
    let identity = IdentityStore::new(Arc::clone(&kv), Arc::new(Sha256Hasher));
    let catalog = CatalogStore::new(Arc::clone(&kv));
    let cart = CartStore::new(Arc::clone(&kv), CartScope::User(buyer.id.clone()));

    assert_eq!(identity.users().len(), 2);
    assert_eq!(identity.current_user().unwrap().id, buyer.id);
    assert_eq!(catalog.products().len(), 2);
    assert_eq!(cart.purchases().len(), 2);
    assert!(cart.cart().is_empty());
}

#[test]
fn test_checkout_after_listing_removed_records_zero() {
    let dir = tempfile::tempdir().unwrap();
    let kv = open_store(dir.path());

    let mut identity = IdentityStore::new(Arc::clone(&kv), Arc::new(Sha256Hasher));
    let mut catalog = CatalogStore::new(Arc::clone(&kv));

    let seller = identity.register("s@x.com", "pw", "sam").unwrap();
    let product = catalog.create(lamp(), seller.id).unwrap();

    let mut cart = CartStore::new(Arc::clone(&kv), CartScope::Guest);
    cart.add_to_cart(product.id.clone(), 1).unwrap();

    // Listing disappears between carting and checkout.
    catalog.remove(&product.id).unwrap();

    let purchased = cart
        .checkout(|id| catalog.price_of(id).unwrap_or(Price::ZERO))
        .unwrap();
    assert_eq!(purchased.first().unwrap().price_at_purchase, Price::ZERO);
}

#[test]
fn test_duplicate_registration_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let kv = open_store(dir.path());

    let mut identity = IdentityStore::new(Arc::clone(&kv), Arc::new(Sha256Hasher));
    identity.register("ana@x.com", "pw", "ana").unwrap();
    assert!(identity.register("ANA@x.com", "pw2", "copy").is_err());

    // The persisted profile list is also untouched.
    let kv = open_store(dir.path());
    let identity = IdentityStore::new(kv, Arc::new(Sha256Hasher));
    assert_eq!(identity.users().len(), 1);
    assert_eq!(identity.users().first().unwrap().username, "ana");
}
