use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use buildhook_api::config::ServerConfig;
use buildhook_api::router::build_app_router;
use buildhook_api::state::AppState;
use buildhook_core::runner::invocation::RunnerCommand;
use buildhook_core::runner::launcher::ProcessLauncher;
use buildhook_core::runner::location::RunnerLocation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "buildhook_api=debug,buildhook_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    // --- Build runner ---
    let location = RunnerLocation::resolve(config.builder_script.clone())
        .context("Failed to resolve build runner location")?;
    if !location.exists() {
        tracing::warn!(
            runner = %location.script().display(),
            "Build runner script not found; triggers will fail until it is installed",
        );
    }
    let runner = RunnerCommand::new(config.builder_interpreter.clone(), location);
    tracing::info!(
        runner = %runner.location().script().display(),
        interpreter = runner.interpreter().unwrap_or("<direct>"),
        "Build runner resolved",
    );

    // --- App state ---
    let state = AppState {
        runner: Arc::new(runner),
        launcher: Arc::new(ProcessLauncher),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = config.bind_addr();
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). Runner processes
/// live in their own process groups and keep running after shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
