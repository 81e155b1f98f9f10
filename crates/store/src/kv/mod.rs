//! Key-value persistence adapter.
//!
//! Wraps a local key-value store holding JSON-encoded values under short
//! string keys (`users`, `products`, `cart:<scope>`, ...). The adapter has
//! deliberately weak guarantees: no transactions, no versioning, no
//! migrations. A missing or malformed value is recovered by substituting the
//! caller's fallback and is never surfaced as an error.

mod file;
mod memory;

pub use file::FileKv;
pub use memory::MemoryKv;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when writing to the key-value store.
///
/// Reads never fail; [`KvStoreExt::load`] substitutes the fallback instead.
#[derive(Debug, Error)]
pub enum KvError {
    /// Underlying file I/O failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized to JSON.
    #[error("failed to serialize value for key {key}: {source}")]
    Serialize {
        /// The key being written.
        key: String,
        /// The serialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A local key-value store of JSON strings.
///
/// Object-safe so containers can share one backend behind `Arc<dyn KvStore>`.
/// Typed access goes through the [`KvStoreExt`] blanket extension.
pub trait KvStore: Send + Sync {
    /// Write a pre-serialized JSON string under `key`, replacing any
    /// previous value.
    fn save_raw(&self, key: &str, json: String) -> Result<(), KvError>;

    /// Read the raw JSON string stored under `key`, if any.
    fn load_raw(&self, key: &str) -> Option<String>;

    /// Delete `key`. Deleting an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), KvError>;

    /// All keys currently present, in no particular order.
    fn keys(&self) -> Vec<String>;
}

/// Typed serialization helpers over any [`KvStore`].
pub trait KvStoreExt: KvStore {
    /// Serialize `value` to JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if serialization or the underlying write fails.
    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), KvError> {
        let json = serde_json::to_string(value).map_err(|source| KvError::Serialize {
            key: key.to_owned(),
            source,
        })?;
        self.save_raw(key, json)
    }

    /// Load and deserialize the value under `key`.
    ///
    /// Returns `fallback` when the key is absent or the stored value fails to
    /// parse. Malformed data is logged and dropped, never surfaced.
    fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.load_raw(key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(key, error = %err, "malformed persisted value, using fallback");
                    fallback
                }
            },
            None => fallback,
        }
    }
}

impl<S: KvStore + ?Sized> KvStoreExt for S {}
