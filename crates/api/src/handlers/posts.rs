//! Handlers for the public post listing and the article page.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use patrika_core::content::reading_minutes;
use patrika_core::error::CoreError;
use patrika_core::locale::Lang;
use patrika_core::related::{merge_related, RELATED_COUNT};
use patrika_db::models::post::PostWithRefs;
use patrika_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::query::{LangParam, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /posts`.
#[derive(Debug, Default, Deserialize)]
pub struct PostListParams {
    #[serde(default)]
    pub lang: Lang,
    pub category: Option<String>,
    pub limit: Option<i64>,
}

/// GET /api/v1/posts?category=&limit=
///
/// Published posts, newest first. The optional `category` filter matches
/// the joined category slug.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> AppResult<Json<DataResponse<Vec<PostWithRefs>>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let posts = PostRepo::list_published(&state.pool, params.category.as_deref(), limit).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// The article page payload: the post, its related articles, and the
/// localized reading-time estimate.
#[derive(Debug, Serialize)]
pub struct Article {
    #[serde(flatten)]
    pub post: PostWithRefs,
    pub related: Vec<PostWithRefs>,
    pub reading_minutes: u32,
}

/// GET /api/v1/posts/{slug}?lang=
///
/// Looks the slug up across both languages' slug columns, so a post is
/// reachable under either slug regardless of the requested language.
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LangParam>,
) -> AppResult<Json<Article>> {
    let post = PostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "post",
            key: slug,
        }))?;

    let related = load_related(&state, &post).await?;
    let minutes = reading_minutes(post.post.content(params.lang));

    Ok(Json(Article {
        post,
        related,
        reading_minutes: minutes,
    }))
}

/// Two-pass related selection: same-category posts first, then a backfill
/// over the newest published posts when the category under-fills. The
/// merge enforces the no-source / no-duplicate / count guarantees.
async fn load_related(
    state: &AppState,
    source: &PostWithRefs,
) -> Result<Vec<PostWithRefs>, sqlx::Error> {
    let source_id = source.post.id;

    let primary = match source.post.category_id {
        Some(category_id) => {
            PostRepo::related_in_category(
                &state.pool,
                category_id,
                source_id,
                RELATED_COUNT as i64,
            )
            .await?
        }
        None => Vec::new(),
    };

    let backfill = if primary.len() < RELATED_COUNT {
        let mut exclude: Vec<_> = primary.iter().map(|p| p.post.id).collect();
        exclude.push(source_id);
        PostRepo::recent_published_excluding(&state.pool, &exclude, backfill_limit(primary.len()))
            .await?
    } else {
        Vec::new()
    };

    Ok(merge_related(source_id, RELATED_COUNT, primary, backfill, |p| {
        p.post.id
    }))
}

/// Rows still needed from the backfill query after the same-category pass.
fn backfill_limit(selected: usize) -> i64 {
    RELATED_COUNT.saturating_sub(selected) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- backfill_limit ------------------------------------------------------

    #[test]
    fn backfill_requests_only_the_shortfall() {
        assert_eq!(backfill_limit(0), RELATED_COUNT as i64);
        assert_eq!(backfill_limit(2), 1);
    }

    #[test]
    fn backfill_limit_is_zero_once_the_quota_is_met() {
        assert_eq!(backfill_limit(RELATED_COUNT), 0);
        assert_eq!(backfill_limit(RELATED_COUNT + 1), 0);
    }
}
