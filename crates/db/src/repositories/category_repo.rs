//! Repository for the `categories` table.

use sqlx::PgPool;

use patrika_core::types::DbId;

use crate::models::category::Category;

const COLUMNS: &str = "id, slug, name_en, name_ne, created_at";

/// Provides read operations for categories. The set of categories is
/// seeded by migration and mirrors the route registry; there is no
/// runtime write path.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories, alphabetical by English name (the order the admin
    /// multi-select shows them in).
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name_en");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE slug = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
