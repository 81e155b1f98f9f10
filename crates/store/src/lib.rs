//! EcoFinds Store - Persisted state containers.
//!
//! This crate is the state layer of the EcoFinds marketplace prototype. All
//! persistence is a local JSON key-value store ([`kv`]); there is no backend,
//! no network, and no database. Each concern owns one explicitly constructed
//! container that hydrates from storage on creation and persists after every
//! mutation:
//!
//! - [`identity::IdentityStore`] - registered profiles and the active session
//! - [`catalog::CatalogStore`] - product listings and derived views
//! - [`cart::CartStore`] - per-scope pending cart and purchase ledger
//! - [`prefs::ThemeStore`] - theme preference
//! - [`chat`] - the two rule-table advisor widgets and their transcripts
//! - [`stats`] - read-only community statistics over the whole store
//!
//! Containers take their [`kv::KvStore`] (and, for identity, the
//! [`identity::CredentialHasher`]) as injected dependencies and are composed
//! at application start - there is no ambient global state.
//!
//! # Consistency
//!
//! Single writer, last write wins. Mutations are synchronous state
//! transitions; two processes sharing one store file can race and the last
//! persisted value wins, with no merge or conflict detection.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod identity;
pub mod keys;
pub mod kv;
pub mod models;
pub mod prefs;
pub mod stats;

pub use cart::{CartScope, CartStore};
pub use catalog::CatalogStore;
pub use chat::{EcoGuide, PriceSuggestion, SellingCoach, SuggestionRequest};
pub use identity::{AuthError, IdentityStore};
pub use kv::{FileKv, KvError, KvStore, KvStoreExt, MemoryKv};
pub use prefs::ThemeStore;
pub use stats::CommunityStats;
