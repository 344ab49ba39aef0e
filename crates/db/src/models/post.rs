//! Post entity model and DTOs.

use patrika_core::locale::{localized, Lang};
use patrika_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::category::CategoryRef;
use crate::models::profile::AuthorRef;

/// Post lifecycle status. Public listings only ever see `Published`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "post_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

/// A post row from the `posts` table.
///
/// English title and slug are always present for a valid row; every
/// Nepali variant is optional and consumers fall back to English through
/// the localized accessors.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub slug_en: String,
    pub slug_ne: Option<String>,
    pub title_en: String,
    pub title_ne: Option<String>,
    pub excerpt_en: Option<String>,
    pub excerpt_ne: Option<String>,
    pub content_en: Option<String>,
    pub content_ne: Option<String>,
    pub status: PostStatus,
    /// Primary category. Additional associations live in `post_categories`.
    pub category_id: Option<DbId>,
    pub author_id: DbId,
    pub featured_image: Option<String>,
    /// Set on the first transition to `published`, NULL until then.
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Post {
    pub fn title(&self, lang: Lang) -> &str {
        localized(lang, Some(&self.title_en), self.title_ne.as_deref())
    }

    pub fn slug(&self, lang: Lang) -> &str {
        localized(lang, Some(&self.slug_en), self.slug_ne.as_deref())
    }

    pub fn excerpt(&self, lang: Lang) -> &str {
        localized(lang, self.excerpt_en.as_deref(), self.excerpt_ne.as_deref())
    }

    pub fn content(&self, lang: Lang) -> &str {
        localized(lang, self.content_en.as_deref(), self.content_ne.as_deref())
    }
}

/// A post together with its joined category and author projections, the
/// row shape every public listing and detail query returns.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithRefs {
    #[serde(flatten)]
    pub post: Post,
    pub category: Option<CategoryRef>,
    pub author: Option<AuthorRef>,
}

impl PostWithRefs {
    pub fn category_name(&self, lang: Lang) -> &str {
        self.category.as_ref().map(|c| c.name(lang)).unwrap_or("")
    }

    pub fn category_slug(&self) -> &str {
        self.category.as_ref().map(|c| c.slug.as_str()).unwrap_or("")
    }

    pub fn author_name(&self) -> &str {
        self.author.as_ref().map(|a| a.display_name()).unwrap_or("Admin")
    }
}

/// Admin write payload for creating or updating a post.
///
/// The editor form submits the full bilingual field set on both create
/// and update, so one DTO serves both operations. `category_ids` is the
/// ordered multi-select; the first entry becomes the primary category and
/// the full set is written to the junction table.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostInput {
    #[validate(length(min = 1, max = 300, message = "English title is required (max 300 characters)"))]
    pub title_en: String,
    #[validate(length(min = 1, max = 200, message = "English slug is required (max 200 characters)"))]
    pub slug_en: String,
    #[serde(default)]
    pub title_ne: Option<String>,
    #[serde(default)]
    pub slug_ne: Option<String>,
    #[serde(default)]
    pub excerpt_en: Option<String>,
    #[serde(default)]
    pub excerpt_ne: Option<String>,
    #[serde(default)]
    pub content_en: Option<String>,
    #[serde(default)]
    pub content_ne: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<DbId>,
}

impl PostInput {
    /// Normalize optional bilingual fields: trim, and store empty strings
    /// as NULL so the partial unique index on `slug_ne` is not violated
    /// by rows that simply have no Nepali variant.
    pub fn normalized(mut self) -> Self {
        let clean = |field: &mut Option<String>| {
            if let Some(value) = field.take() {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    *field = Some(trimmed.to_string());
                }
            }
        };
        clean(&mut self.title_ne);
        clean(&mut self.slug_ne);
        clean(&mut self.excerpt_ne);
        clean(&mut self.content_ne);
        self.title_en = self.title_en.trim().to_string();
        self.slug_en = self.slug_en.trim().to_string();
        self
    }

    /// The primary category: first entry of the multi-select, if any.
    pub fn primary_category_id(&self) -> Option<DbId> {
        self.category_ids.first().copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;
    use validator::Validate;

    fn input() -> PostInput {
        PostInput {
            title_en: "New Visa Rules".to_string(),
            slug_en: "new-visa-rules".to_string(),
            title_ne: Some("  नयाँ भिसा नियम  ".to_string()),
            slug_ne: Some("   ".to_string()),
            excerpt_en: None,
            excerpt_ne: Some(String::new()),
            content_en: Some("<p>Body</p>".to_string()),
            content_ne: None,
            status: PostStatus::Draft,
            featured_image: None,
            category_ids: vec![Uuid::from_u128(1), Uuid::from_u128(2)],
        }
    }

    fn post() -> Post {
        Post {
            id: Uuid::from_u128(9),
            slug_en: "new-visa-rules".to_string(),
            slug_ne: None,
            title_en: "New Visa Rules".to_string(),
            title_ne: Some("नयाँ भिसा नियम".to_string()),
            excerpt_en: Some("Summary".to_string()),
            excerpt_ne: None,
            content_en: Some("<p>Body</p>".to_string()),
            content_ne: None,
            status: PostStatus::Published,
            category_id: None,
            author_id: Uuid::from_u128(1),
            featured_image: None,
            published_at: Some(Utc::now()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // -- normalization -------------------------------------------------------

    #[test]
    fn normalized_trims_and_nulls_empty_nepali_fields() {
        let normalized = input().normalized();
        assert_eq!(normalized.title_ne.as_deref(), Some("नयाँ भिसा नियम"));
        assert_eq!(normalized.slug_ne, None);
        assert_eq!(normalized.excerpt_ne, None);
    }

    #[test]
    fn primary_category_is_first_selection() {
        assert_eq!(input().primary_category_id(), Some(Uuid::from_u128(1)));

        let mut none_selected = input();
        none_selected.category_ids.clear();
        assert_eq!(none_selected.primary_category_id(), None);
    }

    // -- validation ----------------------------------------------------------

    #[test]
    fn missing_english_title_is_rejected() {
        let mut bad = input();
        bad.title_en = String::new();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn oversized_slug_is_rejected() {
        let mut bad = input();
        bad.slug_en = "x".repeat(201);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    // -- localized accessors -------------------------------------------------

    #[test]
    fn accessors_fall_back_to_english() {
        let post = post();
        assert_eq!(post.title(Lang::Ne), "नयाँ भिसा नियम");
        assert_eq!(post.slug(Lang::Ne), "new-visa-rules");
        assert_eq!(post.excerpt(Lang::Ne), "Summary");
        assert_eq!(post.title(Lang::En), "New Visa Rules");
    }
}
