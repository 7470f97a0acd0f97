pub mod build;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /build/{build_id}/{diff_id}/{revision_id}/{phid}   trigger a build (GET)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(build::router())
}
