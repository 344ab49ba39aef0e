//! Handler for category pages resolved through the route registry.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use patrika_core::categories::{Crumb, MediaPage, RouteKind};
use patrika_core::error::CoreError;
use patrika_db::models::post::PostWithRefs;
use patrika_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::state::AppState;

/// A resolved category page: route metadata, breadcrumb trail, and (for
/// listing pages) the posts filtered to the category.
#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub path: String,
    pub name: String,
    /// `listing` for data-backed pages, `media` for fixed media pages.
    pub kind: &'static str,
    /// Which fixed media page to render (index vs. coming soon) and its
    /// localized copy. Absent for listing pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaPage>,
    pub breadcrumb: Vec<Crumb>,
    pub posts: Vec<PostWithRefs>,
}

/// GET /api/v1/categories/{*path}?lang=&limit=
///
/// Resolution is an exact match on the full path: `nepal/politics`
/// resolves, `nepal/unknown` is a 404 even though `nepal` exists. Media
/// routes return the page descriptor with no listing query.
pub async fn category_page(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<CategoryPage>> {
    let route = state
        .registry
        .resolve_path(&path)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "category",
            key: path,
        }))?;

    let breadcrumb = state.registry.breadcrumb(route, params.lang);

    let posts = match route.kind {
        RouteKind::Listing => {
            PostRepo::list_published(&state.pool, Some(route.query_slug()), params.limit()).await?
        }
        RouteKind::Media => Vec::new(),
    };

    Ok(Json(CategoryPage {
        path: route.path.to_string(),
        name: route.name(params.lang).to_string(),
        kind: match route.kind {
            RouteKind::Listing => "listing",
            RouteKind::Media => "media",
        },
        media: route.media_page(params.lang),
        breadcrumb,
        posts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrika_core::categories::MediaPageKind;
    use patrika_core::locale::Lang;

    use crate::state::test_state;

    // -- media pages ---------------------------------------------------------

    #[tokio::test]
    async fn media_index_carries_its_descriptor() {
        let params = ListParams {
            lang: Lang::En,
            limit: None,
        };
        let Json(page) = category_page(State(test_state()), Path("media".into()), Query(params))
            .await
            .expect("media index resolves");

        assert_eq!(page.kind, "media");
        assert!(page.posts.is_empty());
        let media = page.media.expect("media descriptor");
        assert_eq!(media.kind, MediaPageKind::Index);
        assert_eq!(media.subtitle, "Video and audio content");
        assert_eq!(media.message, None);
    }

    #[tokio::test]
    async fn media_subsection_is_a_localized_coming_soon_page() {
        let params = ListParams {
            lang: Lang::Ne,
            limit: None,
        };
        let Json(page) = category_page(
            State(test_state()),
            Path("media/watch".into()),
            Query(params),
        )
        .await
        .expect("media/watch resolves");

        let media = page.media.expect("media descriptor");
        assert_eq!(media.kind, MediaPageKind::ComingSoon);
        assert_eq!(media.subtitle, "भिडियो समाचार र सामग्री");
        assert_eq!(
            media.message.as_deref(),
            Some("भिडियो सामग्री छिट्टै उपलब्ध हुनेछ।")
        );
    }
}
