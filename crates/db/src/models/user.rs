//! Account credential model.

use patrika_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// Holds sign-in credentials only; display data lives in the paired
/// `profiles` row with the same id. The password hash is a PHC-formatted
/// Argon2id string and is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
}

impl User {
    /// Default display name for a self-healed profile: the email local
    /// part, or `User` when the email has no `@`.
    pub fn default_display_name(&self) -> &str {
        match self.email.split_once('@') {
            Some((local, _)) if !local.is_empty() => local,
            _ => "User",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(email: &str) -> User {
        User {
            id: Uuid::from_u128(1),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn display_name_is_email_local_part() {
        assert_eq!(user("sita@example.com").default_display_name(), "sita");
    }

    #[test]
    fn display_name_falls_back_for_malformed_email() {
        assert_eq!(user("@example.com").default_display_name(), "User");
        assert_eq!(user("no-at-sign").default_display_name(), "User");
    }
}
