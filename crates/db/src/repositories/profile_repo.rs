//! Repository for the `profiles` table.

use sqlx::PgPool;
use tracing::info;

use patrika_core::types::DbId;

use crate::models::profile::Profile;

const COLUMNS: &str = "id, full_name, role, created_at";

/// Provides read and write operations for author profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the caller's profile, creating it first if the row is
    /// missing. Accounts provisioned out of band have no profile row, so
    /// the first authenticated request heals it with the given default
    /// name and the `user` role.
    pub async fn ensure_exists(
        pool: &PgPool,
        id: DbId,
        default_name: &str,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, full_name, role)
             VALUES ($1, $2, 'user')
             ON CONFLICT (id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(default_name)
            .fetch_optional(pool)
            .await?;

        if let Some(profile) = inserted {
            info!(user_id = %id, "created missing profile");
            return Ok(profile);
        }

        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Update the caller's display name. Returns the refreshed row, or
    /// `None` when no profile exists for the id.
    pub async fn update_name(
        pool: &PgPool,
        id: DbId,
        full_name: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET full_name = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(full_name)
            .fetch_optional(pool)
            .await
    }
}
