#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use buildhook_api::config::ServerConfig;
use buildhook_api::router::build_app_router;
use buildhook_api::state::AppState;
use buildhook_core::runner::invocation::{RunnerCommand, RunnerInvocation};
use buildhook_core::runner::launcher::{BuildLauncher, LaunchError, LaunchReceipt};
use buildhook_core::runner::location::RunnerLocation;

/// Runner script path used by apps built with [`build_test_app`].
pub const TEST_RUNNER: &str = "/opt/buildhook/builder.sh";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        request_timeout_secs: 30,
        builder_script: Some(TEST_RUNNER.into()),
        builder_interpreter: Some("bash".to_string()),
    }
}

/// Build the full application router around the given launcher.
///
/// Uses the production middleware stack so tests see the same request-id,
/// timeout and tracing behaviour as the binary.
pub fn build_test_app(launcher: Arc<dyn BuildLauncher>) -> Router {
    let runner = RunnerCommand::new(
        Some("bash".to_string()),
        RunnerLocation::at(TEST_RUNNER),
    );
    build_app_with_runner(runner, launcher)
}

/// Build the full application router with an explicit runner command.
pub fn build_app_with_runner(runner: RunnerCommand, launcher: Arc<dyn BuildLauncher>) -> Router {
    let state = AppState {
        runner: Arc::new(runner),
        launcher,
    };
    build_app_router(state, &test_config())
}

/// Launcher double that records every invocation instead of spawning.
#[derive(Default)]
pub struct RecordingLauncher {
    calls: Mutex<Vec<RunnerInvocation>>,
}

impl RecordingLauncher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<RunnerInvocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn launch_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl BuildLauncher for RecordingLauncher {
    fn launch(&self, invocation: &RunnerInvocation) -> Result<LaunchReceipt, LaunchError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(invocation.clone());
        Ok(LaunchReceipt {
            pid: Some(calls.len() as u32),
        })
    }
}

/// Launcher double whose runner is always missing.
pub struct MissingRunnerLauncher;

impl BuildLauncher for MissingRunnerLauncher {
    fn launch(&self, invocation: &RunnerInvocation) -> Result<LaunchReceipt, LaunchError> {
        Err(LaunchError::NotFound(
            invocation.script().display().to_string(),
        ))
    }
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

/// Send an arbitrary request.
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// Collect the response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
