//! Handlers for the homepage feed and the news ticker.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use patrika_core::fallback::FallbackPolicy;
use patrika_core::locale::Lang;
use patrika_db::models::post::PostWithRefs;
use patrika_db::repositories::PostRepo;
use patrika_db::sample::sample_posts;

use crate::error::AppResult;
use crate::query::LangParam;
use crate::response::ListResponse;
use crate::state::AppState;

/// Rows fetched for the homepage; sections below are sliced from this set.
const HOME_FETCH_LIMIT: i64 = 10;
/// Recent-stories strip length.
const RECENT_COUNT: usize = 6;
/// Per-section lengths for the Nepal and World columns.
const SECTION_COUNT: usize = 4;
/// Headlines shown in the ticker.
const TICKER_COUNT: i64 = 5;

/// Homepage feed: the lead story plus the recent / Nepal / World sections,
/// all sliced from a single bounded query.
#[derive(Debug, Serialize)]
pub struct HomeFeed {
    pub featured: Option<PostWithRefs>,
    pub recent: Vec<PostWithRefs>,
    pub nepal: Vec<PostWithRefs>,
    pub world: Vec<PostWithRefs>,
    pub used_fallback: bool,
}

/// GET /api/v1/home
///
/// Rows carry both language variants; the client picks per its locale.
/// Substitutes the sample set only when the query fails; an empty result
/// is a legitimate "no content yet" state and renders as such.
pub async fn home_feed(State(state): State<AppState>) -> AppResult<Json<HomeFeed>> {
    let live = PostRepo::list_published(&state.pool, None, HOME_FETCH_LIMIT).await;
    if let Err(err) = &live {
        tracing::warn!(error = %err, "homepage query failed, serving sample posts");
    }
    let resolved = FallbackPolicy::OnError.apply(live, sample_posts);

    Ok(Json(assemble_feed(resolved.rows, resolved.used_fallback)))
}

fn assemble_feed(posts: Vec<PostWithRefs>, used_fallback: bool) -> HomeFeed {
    let nepal = section(&posts, "nepal");
    let world = section(&posts, "world");

    let mut iter = posts.into_iter();
    let featured = iter.next();
    let recent: Vec<_> = iter.take(RECENT_COUNT).collect();

    HomeFeed {
        featured,
        recent,
        nepal,
        world,
        used_fallback,
    }
}

fn section(posts: &[PostWithRefs], slug: &str) -> Vec<PostWithRefs> {
    posts
        .iter()
        .filter(|p| p.category_slug() == slug)
        .take(SECTION_COUNT)
        .cloned()
        .collect()
}

/// One ticker headline.
#[derive(Debug, Serialize)]
pub struct TickerItem {
    pub title: String,
    pub slug: String,
}

/// GET /api/v1/ticker?lang=
///
/// Unlike the homepage, the ticker also substitutes the sample set on an
/// empty result: an empty marquee is visually broken.
pub async fn ticker(
    State(state): State<AppState>,
    Query(params): Query<LangParam>,
) -> AppResult<Json<ListResponse<TickerItem>>> {
    let live = PostRepo::list_published(&state.pool, None, TICKER_COUNT).await;
    if let Err(err) = &live {
        tracing::warn!(error = %err, "ticker query failed, serving sample posts");
    }
    let resolved = FallbackPolicy::OnErrorOrEmpty.apply(live, sample_posts);

    let items = resolved
        .rows
        .iter()
        .take(TICKER_COUNT as usize)
        .map(|p| ticker_item(p, params.lang))
        .collect();

    Ok(Json(ListResponse {
        data: items,
        used_fallback: resolved.used_fallback,
    }))
}

fn ticker_item(post: &PostWithRefs, lang: Lang) -> TickerItem {
    TickerItem {
        title: post.post.title(lang).to_string(),
        slug: post.post.slug(lang).to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_slices_featured_recent_and_sections() {
        let posts = sample_posts();
        let feed = assemble_feed(posts.clone(), false);

        assert_eq!(
            feed.featured.as_ref().map(|p| p.post.id),
            Some(posts[0].post.id)
        );
        // Remaining three sample posts all land in the recent strip.
        assert_eq!(feed.recent.len(), 3);
        assert!(!feed.recent.iter().any(|p| p.post.id == posts[0].post.id));
        // Sample categories carry no nepal/world posts.
        assert!(feed.nepal.is_empty());
        assert!(feed.world.is_empty());
        assert!(!feed.used_fallback);
    }

    #[test]
    fn empty_feed_has_no_featured_story() {
        let feed = assemble_feed(vec![], false);
        assert!(feed.featured.is_none());
        assert!(feed.recent.is_empty());
    }

    #[test]
    fn ticker_items_localize_titles() {
        let posts = sample_posts();
        let item = ticker_item(&posts[0], Lang::Ne);
        assert_eq!(
            item.title,
            "युरोपका अन्तर्राष्ट्रिय विद्यार्थीहरूका लागि नयाँ भिसा नियमहरू घोषणा"
        );
        assert_eq!(item.slug, "new-visa-rules-europe-students-ne");
    }
}
