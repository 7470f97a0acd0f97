//! Build trigger handler.
//!
//! Starts the external build runner and acknowledges immediately. The
//! handler never waits on the runner and keeps no record of the dispatch;
//! reporting build results is the runner's own job.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use buildhook_core::error::CoreError;
use buildhook_core::trigger::BuildTrigger;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /build/{build_id}/{diff_id}/{revision_id}/{phid}
///
/// Launch one detached runner process with the four values as positional
/// arguments and return a plain-text acknowledgement echoing them.
/// Concurrent requests for the same build each get their own runner.
pub async fn trigger_build(
    State(state): State<AppState>,
    trigger: Result<Path<BuildTrigger>, PathRejection>,
) -> AppResult<String> {
    let Path(trigger) = trigger?;
    trigger.validate()?;

    let invocation = state.runner.invocation_for(&trigger);
    let receipt = state.launcher.launch(&invocation).map_err(|e| {
        tracing::error!(
            error = %e,
            build_id = trigger.build_id,
            diff_id = trigger.diff_id,
            revision_id = trigger.revision_id,
            phid = %trigger.phid,
            runner = %invocation.script().display(),
            "Could not dispatch build",
        );
        CoreError::from(e)
    })?;

    tracing::info!(
        build_id = trigger.build_id,
        diff_id = trigger.diff_id,
        revision_id = trigger.revision_id,
        phid = %trigger.phid,
        runner = %invocation.script().display(),
        pid = ?receipt.pid,
        "Build dispatched",
    );

    Ok(trigger.acknowledgement())
}
