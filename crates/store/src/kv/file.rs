//! File-backed key-value backend.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use super::{KvError, KvStore};

/// Default namespace, also the store file's name.
pub const DEFAULT_NAMESPACE: &str = "ecofinds";

/// A [`KvStore`] persisted as a single JSON file.
///
/// The whole keyspace lives in `<dir>/<namespace>.json` as one JSON object
/// mapping keys to their JSON-encoded values, the local analog of a
/// namespaced browser storage area. The file is read once at open and
/// rewritten after every mutation; the last writer wins.
pub struct FileKv {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileKv {
    /// Open (or create) the store file `<dir>/<namespace>.json`.
    ///
    /// An unreadable or malformed store file starts the namespace empty
    /// rather than failing; prior contents are overwritten on the next write.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::Io`] if the directory cannot be created.
    pub fn open(dir: &Path, namespace: &str) -> Result<Self, KvError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{namespace}.json"));

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err,
                        "malformed store file, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Open the store with the default `ecofinds` namespace.
    ///
    /// # Errors
    ///
    /// Returns [`KvError::Io`] if the directory cannot be created.
    pub fn open_default(dir: &Path) -> Result<Self, KvError> {
        Self::open(dir, DEFAULT_NAMESPACE)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), KvError> {
        let json = serde_json::to_string(entries).map_err(|source| KvError::Serialize {
            key: "<store file>".to_owned(),
            source,
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KvStore for FileKv {
    fn save_raw(&self, key: &str, json: String) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), json);
        self.flush(&entries)
    }

    fn load_raw(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }

    fn keys(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}
