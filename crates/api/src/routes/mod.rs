pub mod admin;
pub mod auth;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /home                          homepage feed (public)
/// /ticker                        news ticker headlines (public)
/// /posts                         published post listing (public)
/// /posts/{slug}                  article page with related posts (public)
/// /search                        reader search (public)
/// /categories/{*path}            category page via route registry (public)
///
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
/// /auth/me                       current user (requires auth)
/// /auth/change-password          change password (requires auth)
///
/// /profile                       get, update own profile (requires auth)
///
/// /admin/posts                   list, create (requires auth)
/// /admin/posts/{id}              get, update, delete
/// /admin/categories              selectable category list
/// /admin/dashboard               post counters + recent activity
/// /admin/uploads                 multipart image upload (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
