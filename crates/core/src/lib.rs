//! EcoFinds Core - Shared types library.
//!
//! This crate provides common types used across all EcoFinds components:
//! - `store` - Persisted state containers (identity, catalog, cart)
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, categories,
//!   and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
