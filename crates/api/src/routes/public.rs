//! Public reader routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, home, posts, search};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(home::home_feed))
        .route("/ticker", get(home::ticker))
        .route("/posts", get(posts::list_posts))
        .route("/posts/{slug}", get(posts::get_article))
        .route("/search", get(search::search))
        .route("/categories/{*path}", get(categories::category_page))
}
