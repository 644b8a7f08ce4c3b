pub mod health;
pub mod lists;

use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   redirect to /all-lists
/// /all-lists/...                      lists and todos (see routes::lists)
/// /javascripts/*                      static scripts
/// /stylesheets/*                      static stylesheets
/// (anything else)                     flash + redirect to /all-lists
/// ```
///
/// Wrong methods on known paths are redirected the same way; see
/// [`crate::router::build_app_router`].
pub fn app_routes(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .nest("/all-lists", lists::router())
        .nest_service(
            "/javascripts",
            ServeDir::new(static_dir.join("javascripts")),
        )
        .nest_service(
            "/stylesheets",
            ServeDir::new(static_dir.join("stylesheets")),
        )
        .fallback(handlers::not_found)
}
