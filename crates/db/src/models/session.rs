//! Refresh-token session model.

use patrika_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table. Holds the SHA-256 hash of an
/// issued refresh token; the plaintext token never touches the database.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Input for creating a new session row.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
