//! Repository for the `posts` table and its `post_categories` junction.
//!
//! Public listing queries are always bounded and always filtered to
//! `published`; only the admin methods may see drafts. The category
//! filter is applied against the joined category's slug rather than the
//! post's own foreign key, matching the route registry's path-segment
//! model.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use patrika_core::types::DbId;

use crate::models::category::CategoryRef;
use crate::models::post::{Post, PostInput, PostStatus, PostWithRefs};
use crate::models::profile::AuthorRef;

/// Column list shared across single-table queries.
const COLUMNS: &str = "id, slug_en, slug_ne, title_en, title_ne, excerpt_en, excerpt_ne, \
     content_en, content_ne, status, category_id, author_id, featured_image, \
     published_at, created_at, updated_at";

/// The same columns qualified for joined queries.
const P_COLUMNS: &str = "p.id, p.slug_en, p.slug_ne, p.title_en, p.title_ne, p.excerpt_en, \
     p.excerpt_ne, p.content_en, p.content_ne, p.status, p.category_id, p.author_id, \
     p.featured_image, p.published_at, p.created_at, p.updated_at";

/// Joined category and author projection columns, aliased for
/// [`JoinedRow`].
const REF_COLUMNS: &str = "c.slug AS category_slug, c.name_en AS category_name_en, \
     c.name_ne AS category_name_ne, a.full_name AS author_full_name";

const JOINS: &str = "FROM posts p \
     LEFT JOIN categories c ON c.id = p.category_id \
     LEFT JOIN profiles a ON a.id = p.author_id";

/// Flat row for joined queries, folded into [`PostWithRefs`].
#[derive(Debug, FromRow)]
struct JoinedRow {
    #[sqlx(flatten)]
    post: Post,
    category_slug: Option<String>,
    category_name_en: Option<String>,
    category_name_ne: Option<String>,
    author_full_name: Option<String>,
}

impl From<JoinedRow> for PostWithRefs {
    fn from(row: JoinedRow) -> Self {
        let category = match (row.category_slug, row.category_name_en) {
            (Some(slug), Some(name_en)) => Some(CategoryRef {
                slug,
                name_en,
                name_ne: row.category_name_ne,
            }),
            _ => None,
        };
        PostWithRefs {
            post: row.post,
            category,
            author: Some(AuthorRef {
                full_name: row.author_full_name,
            }),
        }
    }
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PostStats {
    pub total: i64,
    pub published: i64,
    pub drafts: i64,
}

/// Provides read and write operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Published listing, newest first, optionally filtered by the joined
    /// category slug. Always bounded by `limit`.
    pub async fn list_published(
        pool: &PgPool,
        category_slug: Option<&str>,
        limit: i64,
    ) -> Result<Vec<PostWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, {REF_COLUMNS} {JOINS}
             WHERE p.status = 'published'
               AND ($1::TEXT IS NULL OR c.slug = $1)
             ORDER BY p.published_at DESC NULLS LAST
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, JoinedRow>(&query)
            .bind(category_slug)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Single published post matched on either language's slug. At most
    /// one row.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<PostWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, {REF_COLUMNS} {JOINS}
             WHERE (p.slug_en = $1 OR p.slug_ne = $1)
               AND p.status = 'published'
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, JoinedRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// Primary related pass: published posts sharing a category,
    /// excluding the source post, newest first.
    pub async fn related_in_category(
        pool: &PgPool,
        category_id: DbId,
        exclude_id: DbId,
        limit: i64,
    ) -> Result<Vec<PostWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, {REF_COLUMNS} {JOINS}
             WHERE p.status = 'published'
               AND p.category_id = $1
               AND p.id <> $2
             ORDER BY p.published_at DESC NULLS LAST
             LIMIT $3"
        );
        let rows = sqlx::query_as::<_, JoinedRow>(&query)
            .bind(category_id)
            .bind(exclude_id)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Backfill pass: newest published posts excluding an id set (the
    /// source post plus anything the primary pass already selected).
    pub async fn recent_published_excluding(
        pool: &PgPool,
        exclude_ids: &[DbId],
        limit: i64,
    ) -> Result<Vec<PostWithRefs>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, {REF_COLUMNS} {JOINS}
             WHERE p.status = 'published'
               AND p.id <> ALL($1)
             ORDER BY p.published_at DESC NULLS LAST
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, JoinedRow>(&query)
            .bind(exclude_ids)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Reader search over bilingual title and excerpt. `sanitized` must
    /// already have passed through `patrika_core::search::sanitize_query`;
    /// it is wrapped in `%` here and bound as an ILIKE pattern.
    pub async fn search_published(
        pool: &PgPool,
        sanitized: &str,
        limit: i64,
    ) -> Result<Vec<PostWithRefs>, sqlx::Error> {
        let pattern = format!("%{sanitized}%");
        let query = format!(
            "SELECT {P_COLUMNS}, {REF_COLUMNS} {JOINS}
             WHERE p.status = 'published'
               AND (p.title_en ILIKE $1 OR p.title_ne ILIKE $1
                    OR p.excerpt_en ILIKE $1 OR p.excerpt_ne ILIKE $1)
             ORDER BY p.published_at DESC NULLS LAST
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, JoinedRow>(&query)
            .bind(pattern)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    // -- admin ---------------------------------------------------------------

    /// Admin listing: all statuses unless filtered, newest created first.
    pub async fn list_admin(
        pool: &PgPool,
        status: Option<PostStatus>,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             WHERE ($1::post_status IS NULL OR status = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Find a post by id regardless of status (admin edit form).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new post and write its category associations.
    ///
    /// `published_at` is stamped when the post is created directly in
    /// `published`. The row insert and the junction insert share one
    /// transaction.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &PostInput,
    ) -> Result<Post, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO posts (slug_en, slug_ne, title_en, title_ne, excerpt_en, excerpt_ne,
                                content_en, content_ne, status, category_id, author_id,
                                featured_image, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                     CASE WHEN $9 = 'published'::post_status THEN NOW() END)
             RETURNING {COLUMNS}"
        );
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(&input.slug_en)
            .bind(&input.slug_ne)
            .bind(&input.title_en)
            .bind(&input.title_ne)
            .bind(&input.excerpt_en)
            .bind(&input.excerpt_ne)
            .bind(&input.content_en)
            .bind(&input.content_ne)
            .bind(input.status)
            .bind(input.primary_category_id())
            .bind(author_id)
            .bind(&input.featured_image)
            .fetch_one(&mut *tx)
            .await?;

        Self::replace_category_links(&mut tx, post.id, &input.category_ids).await?;
        tx.commit().await?;
        Ok(post)
    }

    /// Replace a post's fields and category associations wholesale.
    ///
    /// The editor form resubmits every field, so this is a full replace,
    /// not a patch. `published_at` is preserved once set and stamped on
    /// the first transition into `published`. Returns `None` when no row
    /// with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PostInput,
    ) -> Result<Option<Post>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE posts SET
                slug_en = $2, slug_ne = $3, title_en = $4, title_ne = $5,
                excerpt_en = $6, excerpt_ne = $7, content_en = $8, content_ne = $9,
                status = $10, category_id = $11, featured_image = $12,
                published_at = CASE
                    WHEN $10 = 'published'::post_status THEN COALESCE(published_at, NOW())
                    ELSE published_at
                END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let post = sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.slug_en)
            .bind(&input.slug_ne)
            .bind(&input.title_en)
            .bind(&input.title_ne)
            .bind(&input.excerpt_en)
            .bind(&input.excerpt_ne)
            .bind(&input.content_en)
            .bind(&input.content_ne)
            .bind(input.status)
            .bind(input.primary_category_id())
            .bind(&input.featured_image)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(post) = post else {
            tx.rollback().await?;
            return Ok(None);
        };

        Self::replace_category_links(&mut tx, post.id, &input.category_ids).await?;
        tx.commit().await?;
        Ok(Some(post))
    }

    /// Permanently delete a post. Junction rows go with it via cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Dashboard counters: total, published, and drafts (everything not
    /// yet published, matching the admin overview's arithmetic).
    pub async fn stats(pool: &PgPool) -> Result<PostStats, sqlx::Error> {
        let (total, published): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*),
                    COUNT(*) FILTER (WHERE status = 'published')
             FROM posts",
        )
        .fetch_one(pool)
        .await?;
        Ok(PostStats {
            total,
            published,
            drafts: total - published,
        })
    }

    /// The most recently created posts for the admin overview, any
    /// status.
    pub async fn recent_any_status(pool: &PgPool, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts ORDER BY created_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Delete-then-insert replacement of the junction rows, inside the
    /// caller's transaction so a crash between the two writes cannot
    /// leave the post with no associations.
    async fn replace_category_links(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        post_id: DbId,
        category_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM post_categories WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut **tx)
            .await?;

        if !category_ids.is_empty() {
            sqlx::query(
                "INSERT INTO post_categories (post_id, category_id)
                 SELECT $1, UNNEST($2::UUID[])",
            )
            .bind(post_id)
            .bind(category_ids)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    /// Category ids currently linked to a post (admin edit form).
    pub async fn category_links(pool: &PgPool, post_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> =
            sqlx::query_as("SELECT category_id FROM post_categories WHERE post_id = $1")
                .bind(post_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
