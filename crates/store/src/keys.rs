//! Storage keys for persisted state.
//!
//! All persisted values live under these short keys inside the store's
//! namespace. The layout is part of the external interface: other tools (and
//! older data) read the same keys.

use crate::cart::CartScope;

/// Key for the registered user profiles.
pub const USERS: &str = "users";

/// Key for the active session pointer (a nullable user ID).
pub const SESSION: &str = "session";

/// Key for the product listings.
pub const PRODUCTS: &str = "products";

/// Key for the theme preference.
pub const THEME: &str = "theme";

/// Key for the `EcoGuide` widget's transcript.
pub const ECO_GUIDE_MESSAGES: &str = "chatbot:messages";

/// Key for the selling coach widget's transcript.
pub const SELLING_COACH_MESSAGES: &str = "aiadvice:messages";

/// Prefix shared by every purchase-ledger key, one per scope.
pub const PURCHASES_PREFIX: &str = "purchases:";

/// Key for a scope's pending cart.
#[must_use]
pub fn cart(scope: &CartScope) -> String {
    format!("cart:{scope}")
}

/// Key for a scope's purchase ledger.
#[must_use]
pub fn purchases(scope: &CartScope) -> String {
    format!("{PURCHASES_PREFIX}{scope}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecofinds_core::UserId;

    #[test]
    fn test_scoped_keys() {
        let user = CartScope::User(UserId::from_string("u-1".to_owned()));
        assert_eq!(cart(&user), "cart:u-1");
        assert_eq!(purchases(&user), "purchases:u-1");
        assert_eq!(cart(&CartScope::Guest), "cart:guest");
        assert_eq!(purchases(&CartScope::Guest), "purchases:guest");
    }

    #[test]
    fn test_purchases_keys_share_prefix() {
        assert!(purchases(&CartScope::Guest).starts_with(PURCHASES_PREFIX));
    }
}
