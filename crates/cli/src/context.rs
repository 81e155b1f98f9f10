//! Application wiring.
//!
//! Every command runs against one [`AppContext`] composed at startup: the
//! shared key-value backend plus each state container constructed around it.
//! There is no global state; the context is passed down explicitly.

use std::env;
use std::path::Path;
use std::sync::Arc;

use ecofinds_store::identity::Argon2Hasher;
use ecofinds_store::{
    CartScope, CartStore, CatalogStore, FileKv, IdentityStore, KvStore, ThemeStore,
};

use crate::commands::CliError;

/// Environment variable naming the store directory.
const DATA_DIR_VAR: &str = "ECOFINDS_DATA_DIR";

/// Environment variable overriding the store namespace.
const NAMESPACE_VAR: &str = "ECOFINDS_NAMESPACE";

const DEFAULT_DATA_DIR: &str = ".ecofinds";

/// The composed state containers for one command invocation.
pub struct AppContext {
    pub kv: Arc<dyn KvStore>,
    pub identity: IdentityStore,
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub theme: ThemeStore,
}

impl AppContext {
    /// Open the store and hydrate every container.
    ///
    /// The cart scope follows the hydrated session: a signed-in user gets
    /// their own cart, everyone else shares the guest scope.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] if the store file cannot be opened.
    pub fn open() -> Result<Self, CliError> {
        let dir = env::var(DATA_DIR_VAR).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_owned());
        let dir = Path::new(&dir);

        let kv: Arc<dyn KvStore> = match env::var(NAMESPACE_VAR) {
            Ok(namespace) => Arc::new(FileKv::open(dir, &namespace)?),
            Err(_) => Arc::new(FileKv::open_default(dir)?),
        };

        let identity = IdentityStore::new(Arc::clone(&kv), Arc::new(Argon2Hasher));
        let catalog = CatalogStore::new(Arc::clone(&kv));
        let scope = CartScope::from_session(identity.current_user_id());
        let cart = CartStore::new(Arc::clone(&kv), scope);
        let theme = ThemeStore::new(Arc::clone(&kv));

        Ok(Self {
            kv,
            identity,
            catalog,
            cart,
            theme,
        })
    }

    /// Re-point the cart at the (possibly changed) session scope.
    pub fn sync_cart_scope(&mut self) {
        let scope = CartScope::from_session(self.identity.current_user_id());
        self.cart.switch_scope(scope);
    }
}
