//! Author profile model and DTOs.

use patrika_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A profile row from the `profiles` table. The id equals the
/// authenticated user's id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub full_name: Option<String>,
    /// One of `user`, `editor`, `admin`.
    pub role: String,
    pub created_at: Timestamp,
}

/// The nested author projection carried by post listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRef {
    pub full_name: Option<String>,
}

impl AuthorRef {
    /// Display name, defaulting to `Admin` when unset.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Admin")
    }
}

/// DTO for updating the caller's own profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,
}
