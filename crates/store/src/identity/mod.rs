//! Identity and session store.
//!
//! Owns the set of registered user profiles and the single active session
//! pointer. Construction hydrates both from the key-value store; every
//! mutator persists the full profile list and/or the session pointer before
//! returning.

mod error;
mod hash;
mod provider;

pub use error::AuthError;
pub use hash::{Argon2Hasher, CredentialHasher, HashError, Sha256Hasher};
pub use provider::{IdentityProvider, MockProvider, ProviderAssertion};

use std::sync::Arc;

use rand::Rng;
use tracing::info;

use ecofinds_core::{EcoScore, Email, UserId};

use crate::keys;
use crate::kv::{KvError, KvStore, KvStoreExt};
use crate::models::{ProfileUpdate, UserProfile, now_millis};

/// Domain used for synthesized social-login email addresses.
const SOCIAL_EMAIL_DOMAIN: &str = "social.ecofinds.test";

/// The identity and session container.
///
/// At most one session is active per store. Profiles are kept most recent
/// first and are never deleted.
pub struct IdentityStore {
    kv: Arc<dyn KvStore>,
    hasher: Arc<dyn CredentialHasher>,
    users: Vec<UserProfile>,
    current_user_id: Option<UserId>,
}

impl IdentityStore {
    /// Build the store, hydrating profiles and the session pointer.
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        let users: Vec<UserProfile> = kv.load(keys::USERS, Vec::new());
        let current_user_id: Option<UserId> = kv.load(keys::SESSION, None);

        Self {
            kv,
            hasher,
            users,
            current_user_id,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All registered profiles, most recent first.
    #[must_use]
    pub fn users(&self) -> &[UserProfile] {
        &self.users
    }

    /// The active session's user ID, if any.
    #[must_use]
    pub const fn current_user_id(&self) -> Option<&UserId> {
        self.current_user_id.as_ref()
    }

    /// The active session's profile, if any.
    ///
    /// Returns `None` when there is no session or the pointer is dangling
    /// (possible only through external edits to the store).
    #[must_use]
    pub fn current_user(&self) -> Option<&UserProfile> {
        let id = self.current_user_id.as_ref()?;
        self.users.iter().find(|u| &u.id == id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Register a new profile and start a session for it.
    ///
    /// The new profile gets an eco-score from the starter range, no badges,
    /// and no bio.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] if the email doesn't parse.
    /// Returns [`AuthError::DuplicateEmail`] if any profile already uses the
    /// email, compared case-insensitively; the profile set is untouched.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<UserProfile, AuthError> {
        let email = Email::parse(email)?;

        if self.find_by_email(email.as_str()).is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = self
            .hasher
            .hash(password)
            .map_err(|_| AuthError::PasswordHash)?;

        let profile = UserProfile {
            id: UserId::generate(),
            email,
            password_hash,
            username: username.to_owned(),
            bio: None,
            eco_score: starter_eco_score(),
            trust_badges: Vec::new(),
            created_at: now_millis(),
        };

        info!(user = %profile.id, "registered new profile");
        self.current_user_id = Some(profile.id.clone());
        self.users.insert(0, profile.clone());
        self.persist_users()?;
        self.persist_session()?;

        Ok(profile)
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] unless a profile's email
    /// matches case-insensitively and the stored hash verifies the password.
    pub fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let profile = self
            .find_by_email(email)
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &profile.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let profile = profile.clone();
        info!(user = %profile.id, "login");
        self.current_user_id = Some(profile.id.clone());
        self.persist_session()?;

        Ok(profile)
    }

    /// Log in via an external identity provider.
    ///
    /// The provider's assertion is mapped to a synthesized local email
    /// address; an existing profile with that address is reused, otherwise a
    /// profile is created carrying a "Verified via <provider>" badge. Either
    /// way the session is set.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if persisting fails.
    pub fn social_login(
        &mut self,
        provider: &dyn IdentityProvider,
    ) -> Result<UserProfile, AuthError> {
        let assertion = provider.authenticate();
        let address = format!(
            "{}.{}@{SOCIAL_EMAIL_DOMAIN}",
            assertion.provider, assertion.subject
        );

        if let Some(existing) = self.find_by_email(&address) {
            let existing = existing.clone();
            info!(user = %existing.id, provider = %assertion.provider, "social login (existing)");
            self.current_user_id = Some(existing.id.clone());
            self.persist_session()?;
            return Ok(existing);
        }

        let email = Email::parse(&address)?;
        let password_hash = self
            .hasher
            .hash(&assertion.subject)
            .map_err(|_| AuthError::PasswordHash)?;

        let profile = UserProfile {
            id: UserId::generate(),
            email,
            password_hash,
            username: format!(
                "{}User{}",
                capitalize(&assertion.provider),
                assertion.subject
            ),
            bio: None,
            eco_score: starter_eco_score(),
            trust_badges: vec![format!("Verified via {}", assertion.provider)],
            created_at: now_millis(),
        };

        info!(user = %profile.id, provider = %assertion.provider, "social login (new profile)");
        self.current_user_id = Some(profile.id.clone());
        self.users.insert(0, profile.clone());
        self.persist_users()?;
        self.persist_session()?;

        Ok(profile)
    }

    /// Clear the session pointer. Profiles are untouched; idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting the cleared pointer fails.
    pub fn logout(&mut self) -> Result<(), KvError> {
        self.current_user_id = None;
        self.persist_session()
    }

    /// Merge `username`/`bio` updates into the active profile.
    ///
    /// A silent no-op when no session is active.
    ///
    /// # Errors
    ///
    /// Returns [`KvError`] if persisting fails.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), KvError> {
        let Some(id) = self.current_user_id.clone() else {
            return Ok(());
        };

        if let Some(profile) = self.users.iter_mut().find(|u| u.id == id) {
            if let Some(username) = update.username {
                profile.username = username;
            }
            if let Some(bio) = update.bio {
                profile.bio = Some(bio);
            }
        }

        self.persist_users()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn find_by_email(&self, email: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.email.matches_ignore_case(email))
    }

    fn persist_users(&self) -> Result<(), KvError> {
        self.kv.save(keys::USERS, &self.users)
    }

    fn persist_session(&self) -> Result<(), KvError> {
        self.kv.save(keys::SESSION, &self.current_user_id)
    }
}

/// Draw a starter eco-score from `60..80`.
fn starter_eco_score() -> EcoScore {
    EcoScore::new(rand::rng().random_range(EcoScore::STARTER_MIN..EcoScore::STARTER_MAX))
}

/// Uppercase the first character ("google" -> "Google").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    fn store() -> IdentityStore {
        IdentityStore::new(Arc::new(MemoryKv::new()), Arc::new(Sha256Hasher))
    }

    #[test]
    fn test_register_sets_session_and_starter_score() {
        let mut identity = store();
        let profile = identity
            .register("a@x.com", "Abcdefg1234!", "ana")
            .unwrap();

        assert!(profile.eco_score.is_starter());
        assert!(profile.trust_badges.is_empty());
        assert_eq!(identity.current_user_id(), Some(&profile.id));
        assert_eq!(identity.current_user().unwrap().username, "ana");
    }

    #[test]
    fn test_register_duplicate_email_is_rejected() {
        let mut identity = store();
        identity.register("a@x.com", "pw-one", "ana").unwrap();

        let err = identity.register("A@X.COM", "pw-two", "copycat");
        assert!(matches!(err, Err(AuthError::DuplicateEmail)));
        assert_eq!(identity.users().len(), 1, "profile set must be untouched");
        assert_eq!(identity.users().first().unwrap().username, "ana");
    }

    #[test]
    fn test_login_case_insensitive_email() {
        let mut identity = store();
        identity.register("Ana@X.com", "secret", "ana").unwrap();
        identity.logout().unwrap();

        let profile = identity.login("ana@x.com", "secret").unwrap();
        assert_eq!(profile.username, "ana");
        assert_eq!(identity.current_user_id(), Some(&profile.id));
    }

    #[test]
    fn test_login_wrong_password() {
        let mut identity = store();
        identity.register("a@x.com", "secret", "ana").unwrap();
        identity.logout().unwrap();

        assert!(matches!(
            identity.login("a@x.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(identity.current_user().is_none());
    }

    #[test]
    fn test_login_unknown_email() {
        let mut identity = store();
        assert!(matches!(
            identity.login("nobody@x.com", "pw"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_social_login_creates_badged_profile() {
        let mut identity = store();
        let profile = identity.social_login(&MockProvider::google()).unwrap();

        assert!(profile.email.as_str().ends_with("@social.ecofinds.test"));
        assert!(profile.email.as_str().starts_with("google."));
        assert!(profile.username.starts_with("GoogleUser"));
        assert_eq!(profile.trust_badges, vec!["Verified via google"]);
        assert!(profile.eco_score.is_starter());
        assert_eq!(identity.current_user_id(), Some(&profile.id));
    }

    #[test]
    fn test_social_login_reuses_profile_on_subject_collision() {
        struct FixedProvider;
        impl IdentityProvider for FixedProvider {
            fn name(&self) -> &str {
                "google"
            }
            fn authenticate(&self) -> ProviderAssertion {
                ProviderAssertion {
                    provider: "google".to_owned(),
                    subject: "cafe0123".to_owned(),
                }
            }
        }

        let mut identity = store();
        let first = identity.social_login(&FixedProvider).unwrap();
        let second = identity.social_login(&FixedProvider).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(identity.users().len(), 1);
    }

    #[test]
    fn test_logout_is_idempotent_and_keeps_profiles() {
        let mut identity = store();
        identity.register("a@x.com", "pw", "ana").unwrap();

        identity.logout().unwrap();
        identity.logout().unwrap();

        assert!(identity.current_user().is_none());
        assert_eq!(identity.users().len(), 1);
    }

    #[test]
    fn test_update_profile_without_session_is_noop() {
        let mut identity = store();
        identity.register("a@x.com", "pw", "ana").unwrap();
        identity.logout().unwrap();

        identity
            .update_profile(ProfileUpdate {
                username: Some("ghost".to_owned()),
                bio: None,
            })
            .unwrap();

        assert_eq!(identity.users().first().unwrap().username, "ana");
    }

    #[test]
    fn test_update_profile_merges_fields() {
        let mut identity = store();
        identity.register("a@x.com", "pw", "ana").unwrap();

        identity
            .update_profile(ProfileUpdate {
                username: None,
                bio: Some("sells lamps".to_owned()),
            })
            .unwrap();

        let current = identity.current_user().unwrap();
        assert_eq!(current.username, "ana", "unset fields stay");
        assert_eq!(current.bio.as_deref(), Some("sells lamps"));
    }

    #[test]
    fn test_state_survives_rehydration() {
        let kv: Arc<dyn KvStore> = Arc::new(MemoryKv::new());
        let hasher: Arc<dyn CredentialHasher> = Arc::new(Sha256Hasher);

        let id = {
            let mut identity = IdentityStore::new(Arc::clone(&kv), Arc::clone(&hasher));
            identity.register("a@x.com", "pw", "ana").unwrap().id
        };

        let identity = IdentityStore::new(kv, hasher);
        assert_eq!(identity.current_user_id(), Some(&id));
        assert_eq!(identity.users().len(), 1);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("google"), "Google");
        assert_eq!(capitalize(""), "");
    }
}
