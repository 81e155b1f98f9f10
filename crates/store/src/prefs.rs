//! Presentation preferences.

use std::sync::Arc;

use ecofinds_core::Theme;

use crate::keys;
use crate::kv::{KvError, KvStore, KvStoreExt};

/// Persisted theme preference shared by every identity on the device.
pub struct ThemeStore {
    kv: Arc<dyn KvStore>,
    theme: Theme,
}

impl ThemeStore {
    /// Build the store, hydrating the saved theme (defaults to
    /// [`Theme::System`]).
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        let theme = kv.load(keys::THEME, Theme::default());
        Self { kv, theme }
    }

    /// The active theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Set and persist an explicit theme.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting fails.
    pub fn set(&mut self, theme: Theme) -> Result<(), KvError> {
        self.theme = theme;
        self.kv.save(keys::THEME, &self.theme)
    }

    /// Flip between light and dark and persist the result.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting fails.
    pub fn toggle(&mut self) -> Result<Theme, KvError> {
        self.set(self.theme.toggled())?;
        Ok(self.theme)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    #[test]
    fn test_defaults_to_system() {
        let store = ThemeStore::new(Arc::new(MemoryKv::new()));
        assert_eq!(store.theme(), Theme::System);
    }

    #[test]
    fn test_toggle_from_system_lands_on_dark() {
        let mut store = ThemeStore::new(Arc::new(MemoryKv::new()));
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_preference_survives_rehydration() {
        let kv: Arc<dyn KvStore> = Arc::new(MemoryKv::new());
        {
            let mut store = ThemeStore::new(Arc::clone(&kv));
            store.set(Theme::Light).unwrap();
        }
        let store = ThemeStore::new(kv);
        assert_eq!(store.theme(), Theme::Light);
    }
}
