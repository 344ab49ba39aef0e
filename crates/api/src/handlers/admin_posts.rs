//! Handlers for admin post management (CRUD + category list).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use patrika_core::error::CoreError;
use patrika_core::slug::slugify;
use patrika_core::types::DbId;
use patrika_db::models::category::Category;
use patrika_db::models::post::{Post, PostInput, PostStatus};
use patrika_db::repositories::{CategoryRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/posts`.
#[derive(Debug, Deserialize)]
pub struct AdminListParams {
    pub status: Option<PostStatus>,
}

/// A post together with its full category association set, as the edit
/// form needs it.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub category_ids: Vec<DbId>,
}

/// GET /api/v1/admin/posts?status=
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<AdminListParams>,
) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let posts = PostRepo::list_admin(&state.pool, params.status).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/admin/posts/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<PostDetail>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "post",
            key: id.to_string(),
        }))?;
    let category_ids = PostRepo::category_links(&state.pool, id).await?;
    Ok(Json(PostDetail { post, category_ids }))
}

/// POST /api/v1/admin/posts
///
/// The authenticated editor becomes the author. A missing English slug
/// is derived from the English title before validation.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<PostInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Post>>)> {
    let input = prepare(input)?;
    let post = PostRepo::create(&state.pool, auth_user.user_id, &input).await?;
    tracing::info!(post_id = %post.id, author_id = %auth_user.user_id, "post created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/v1/admin/posts/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<PostInput>,
) -> AppResult<Json<DataResponse<Post>>> {
    let input = prepare(input)?;
    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "post",
            key: id.to_string(),
        }))?;
    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/admin/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PostRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "post",
            key: id.to_string(),
        }));
    }
    tracing::info!(post_id = %id, "post deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/categories
///
/// The selectable category set for the editor's multi-select.
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// Normalize, auto-slug, and validate a write payload.
fn prepare(input: PostInput) -> Result<PostInput, AppError> {
    let mut input = input.normalized();
    if input.slug_en.is_empty() {
        input.slug_en = slugify(&input.title_en);
    }
    input.validate()?;
    Ok(input)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn input(title: &str, slug: &str) -> PostInput {
        PostInput {
            title_en: title.to_string(),
            slug_en: slug.to_string(),
            title_ne: None,
            slug_ne: None,
            excerpt_en: None,
            excerpt_ne: None,
            content_en: None,
            content_ne: None,
            status: PostStatus::Draft,
            featured_image: None,
            category_ids: vec![],
        }
    }

    #[test]
    fn missing_slug_is_derived_from_title() {
        let prepared = prepare(input("Germany's Opportunity Card", "")).unwrap();
        assert_eq!(prepared.slug_en, "germanys-opportunity-card");
    }

    #[test]
    fn explicit_slug_is_kept() {
        let prepared = prepare(input("Some Title", "custom-slug")).unwrap();
        assert_eq!(prepared.slug_en, "custom-slug");
    }

    #[test]
    fn empty_title_is_rejected() {
        // An empty title also slugifies to an empty slug; validation
        // rejects both fields.
        let result = prepare(input("", ""));
        assert_matches!(result, Err(AppError::Validation(_)));
    }

    #[test]
    fn nepali_title_without_slug_is_rejected() {
        // Nepali text slugifies to the empty string, so an explicit slug
        // is required.
        let result = prepare(input("राजनीति", ""));
        assert_matches!(result, Err(AppError::Validation(_)));
    }
}
