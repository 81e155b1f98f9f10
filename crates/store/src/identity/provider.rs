//! External identity providers for social login.
//!
//! A provider exchanges "the user authenticated with us" for a stable
//! external subject ID. The store never talks to a real provider; wiring
//! supplies an implementation per environment, and the prototype ships only
//! [`MockProvider`].

use rand::Rng;

/// The outcome of a provider authentication.
#[derive(Debug, Clone)]
pub struct ProviderAssertion {
    /// Provider name, lowercase (e.g. "google").
    pub provider: String,
    /// The provider-scoped subject ID for the authenticated user.
    pub subject: String,
}

/// An external identity provider.
pub trait IdentityProvider {
    /// Provider name, lowercase.
    fn name(&self) -> &str;

    /// Perform the provider's authentication flow and return the assertion.
    fn authenticate(&self) -> ProviderAssertion;
}

/// A mock provider that fabricates a fresh pseudo-random subject per call.
///
/// Because the subject is random, each authentication almost always creates
/// a new local profile; a repeat subject (vanishingly unlikely) reuses the
/// existing one.
#[derive(Debug, Clone)]
pub struct MockProvider {
    name: String,
}

impl MockProvider {
    /// Subject length in hex characters.
    const SUBJECT_LEN: usize = 8;

    /// Create a mock for the named provider.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The mock Google provider.
    #[must_use]
    pub fn google() -> Self {
        Self::new("google")
    }

    /// The mock Facebook provider.
    #[must_use]
    pub fn facebook() -> Self {
        Self::new("facebook")
    }
}

impl IdentityProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn authenticate(&self) -> ProviderAssertion {
        let mut rng = rand::rng();
        let subject: String = (0..Self::SUBJECT_LEN)
            .map(|_| {
                let nibble: u8 = rng.random_range(0..16);
                char::from_digit(u32::from(nibble), 16).unwrap_or('0')
            })
            .collect();

        ProviderAssertion {
            provider: self.name.clone(),
            subject,
        }
    }
}
