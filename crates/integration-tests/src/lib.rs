//! Integration tests for EcoFinds.
//!
//! The tests in `tests/` exercise full flows across the state containers
//! (register, sell, cart, checkout, stats) against both the in-memory and
//! file-backed key-value stores. No external services are involved; a
//! temporary directory stands in for the data directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ecofinds-integration-tests
//! ```
