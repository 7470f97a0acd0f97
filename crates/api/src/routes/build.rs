//! Route definitions for the build trigger.

use axum::routing::get;
use axum::Router;

use crate::handlers::build;
use crate::state::AppState;

/// Build trigger route.
///
/// The three ids are typed as `u64` by the handler's path extractor; any
/// segment that does not parse is rejected before a runner is launched.
/// An empty `phid` segment does not match at all.
///
/// ```text
/// GET /build/{build_id}/{diff_id}/{revision_id}/{phid}  -> trigger_build
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/build/{build_id}/{diff_id}/{revision_id}/{phid}",
        get(build::trigger_build),
    )
}
