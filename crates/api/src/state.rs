use std::sync::Arc;

use buildhook_core::runner::invocation::RunnerCommand;
use buildhook_core::runner::launcher::BuildLauncher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Everything in here is immutable after startup, so requests share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Interpreter and script every trigger is dispatched to.
    pub runner: Arc<RunnerCommand>,
    /// Starts runner processes. Swapped for a recording double in tests.
    pub launcher: Arc<dyn BuildLauncher>,
}
