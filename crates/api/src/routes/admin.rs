//! Admin routes. Every handler here requires a valid Bearer token via
//! the `AuthUser` extractor.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::handlers::{admin_posts, dashboard, uploads};
use crate::state::AppState;

/// Body limit for multipart uploads: the file cap plus headroom for the
/// multipart framing.
const UPLOAD_BODY_LIMIT: usize = DEFAULT_MAX_UPLOAD_BYTES + 64 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(admin_posts::list).post(admin_posts::create),
        )
        .route(
            "/posts/{id}",
            get(admin_posts::get)
                .put(admin_posts::update)
                .delete(admin_posts::delete),
        )
        .route("/categories", get(admin_posts::list_categories))
        .route("/dashboard", get(dashboard::overview))
        .route(
            "/uploads",
            post(uploads::upload).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}
