//! User profile records.

use serde::{Deserialize, Serialize};

use ecofinds_core::{EcoScore, Email, UserId};

/// A registered user profile.
///
/// Profiles are created by registration or social login and are never
/// deleted. Only `username` and `bio` are mutable afterwards, via
/// [`ProfileUpdate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user ID.
    pub id: UserId,
    /// Email address, unique case-insensitively across all profiles.
    pub email: Email,
    /// One-way hash of the password credential. Never the plaintext.
    pub password_hash: String,
    /// Display name.
    pub username: String,
    /// Optional free-form bio.
    #[serde(default)]
    pub bio: Option<String>,
    /// Eco-score in 0-100, assigned at creation from the starter range.
    pub eco_score: EcoScore,
    /// Ordered badge labels, e.g. "Verified via google".
    pub trust_badges: Vec<String>,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
}

/// Partial profile update: only the mutable fields.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New display name.
    pub username: Option<String>,
    /// New bio.
    pub bio: Option<String>,
}
