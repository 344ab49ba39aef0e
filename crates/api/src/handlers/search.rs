//! Handler for reader search.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use patrika_core::search::{sanitize_query, DEFAULT_SEARCH_LIMIT};
use patrika_db::models::post::PostWithRefs;
use patrika_db::repositories::PostRepo;

use crate::error::AppResult;
use crate::query::MAX_LIST_LIMIT;
use crate::state::AppState;

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}

/// Search results plus the sanitized form of the query that was actually
/// executed, so the client can echo it back.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub data: Vec<PostWithRefs>,
}

/// GET /api/v1/search?q=&limit=
///
/// The raw query text is sanitized before it reaches the pattern filter;
/// a query that sanitizes to the empty string short-circuits to an empty
/// result set without touching the database.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResults>> {
    let sanitized = sanitize_query(&params.q);
    if sanitized.is_empty() {
        return Ok(Json(SearchResults {
            query: sanitized,
            data: Vec::new(),
        }));
    }

    let limit = params
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let posts = PostRepo::search_published(&state.pool, &sanitized, limit).await?;
    Ok(Json(SearchResults {
        query: sanitized,
        data: posts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    // -- empty-query short circuit -------------------------------------------

    #[tokio::test]
    async fn blank_query_returns_empty_results_without_a_query() {
        // The lazy test pool never connects, so reaching the repository
        // would fail the test rather than pass it.
        let params = SearchParams {
            q: "   ".into(),
            limit: None,
        };
        let Json(results) = search(State(test_state()), Query(params))
            .await
            .expect("blank query is not an error");
        assert_eq!(results.query, "");
        assert!(results.data.is_empty());
    }

    #[tokio::test]
    async fn structural_only_query_sanitizes_to_empty() {
        let params = SearchParams {
            q: "(),.".into(),
            limit: Some(10),
        };
        let Json(results) = search(State(test_state()), Query(params))
            .await
            .expect("structural-only query is not an error");
        assert_eq!(results.query, "");
        assert!(results.data.is_empty());
    }
}
