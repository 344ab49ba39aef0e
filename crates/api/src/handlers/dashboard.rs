//! Handler for the admin dashboard overview.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use patrika_db::models::post::Post;
use patrika_db::repositories::{PostRepo, PostStats};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Posts shown in the "recent activity" list.
const RECENT_COUNT: i64 = 5;

/// Dashboard payload: post counters plus the latest posts in any status.
#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub stats: PostStats,
    pub recent: Vec<Post>,
}

/// GET /api/v1/admin/dashboard
pub async fn overview(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DashboardOverview>> {
    let stats = PostRepo::stats(&state.pool).await?;
    let recent = PostRepo::recent_any_status(&state.pool, RECENT_COUNT).await?;
    Ok(Json(DashboardOverview { stats, recent }))
}
