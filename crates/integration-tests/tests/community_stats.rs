//! Community statistics across every scope's ledger.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use ecofinds_core::{Price, ProductId};
use ecofinds_store::identity::Sha256Hasher;
use ecofinds_store::{
    CartScope, CartStore, CommunityStats, IdentityStore, KvStore, MemoryKv,
};

fn product(id: &str) -> ProductId {
    ProductId::from_string(id.to_owned())
}

fn buy(kv: &Arc<dyn KvStore>, scope: CartScope, count: usize) {
    let mut cart = CartStore::new(Arc::clone(kv), scope);
    for i in 0..count {
        cart.add_to_cart(product(&format!("p-{i}")), 1).unwrap();
    }
    cart.checkout(|_| Price::from_cents(100)).unwrap();
}

#[test]
fn test_stats_sum_every_scope() {
    let kv: Arc<dyn KvStore> = Arc::new(MemoryKv::new());
    let mut identity = IdentityStore::new(Arc::clone(&kv), Arc::new(Sha256Hasher));

    let ana = identity.register("ana@x.com", "pw", "ana").unwrap();
    identity.logout().unwrap();
    let ben = identity.register("ben@x.com", "pw", "ben").unwrap();

    buy(&kv, CartScope::Guest, 2);
    buy(&kv, CartScope::User(ana.id), 3);
    buy(&kv, CartScope::User(ben.id), 1);

    let stats = CommunityStats::compute(kv.as_ref());
    assert_eq!(stats.items_rehomed, 6);
    assert_eq!(stats.kg_diverted, 2, "6 * 0.26 rounds to 2");
    assert_eq!(stats.trees_saved, 0);
    assert_eq!(stats.progress_toward_next_tree, 10);
    assert_eq!(stats.users_count, 2);
}

#[test]
fn test_pending_carts_do_not_count() {
    let kv: Arc<dyn KvStore> = Arc::new(MemoryKv::new());

    let mut cart = CartStore::new(Arc::clone(&kv), CartScope::Guest);
    cart.add_to_cart(product("pending"), 1).unwrap();

    let stats = CommunityStats::compute(kv.as_ref());
    assert_eq!(stats.items_rehomed, 0);
}

#[test]
fn test_malformed_ledger_does_not_poison_the_totals() {
    let kv: Arc<dyn KvStore> = Arc::new(MemoryKv::new());
    buy(&kv, CartScope::Guest, 2);
    kv.save_raw("purchases:mangled", "{oops".to_owned()).unwrap();

    let stats = CommunityStats::compute(kv.as_ref());
    assert_eq!(stats.items_rehomed, 2);
}
