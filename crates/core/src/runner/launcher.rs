//! Detached, fire-and-forget process launching.
//!
//! [`ProcessLauncher`] spawns the runner and immediately lets go of the
//! child handle. The caller learns only that the OS accepted the spawn; it
//! has no way to wait for, cancel, or observe the outcome of the build.

use std::io::ErrorKind;
use std::process::Stdio;

use super::invocation::RunnerInvocation;

/// Errors from asking the OS to start the runner.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The program to execute does not exist.
    #[error("Runner not found: {0}")]
    NotFound(String),

    /// The program exists but cannot be executed.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Any other spawn failure.
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

impl LaunchError {
    fn from_spawn(err: std::io::Error, program: &str) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(program.to_string()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(program.to_string()),
            _ => Self::Io(err),
        }
    }
}

/// Proof that a runner process was started.
///
/// Holds no handle to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchReceipt {
    /// OS process id, when the platform reports one.
    pub pid: Option<u32>,
}

/// Starts build runners.
///
/// Implementations must return as soon as the process has been requested
/// and must never wait for it to finish.
pub trait BuildLauncher: Send + Sync {
    fn launch(&self, invocation: &RunnerInvocation) -> Result<LaunchReceipt, LaunchError>;
}

/// Launches the runner as a real OS process.
///
/// The child gets a null stdin and inherits stdout/stderr so runner output
/// lands wherever the dispatcher's own output goes. On Unix it is placed in
/// its own process group, so a Ctrl-C or group signal aimed at the
/// dispatcher does not reach running builds. The handle is dropped right
/// after spawning; tokio reaps the exit status in the background.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl BuildLauncher for ProcessLauncher {
    fn launch(&self, invocation: &RunnerInvocation) -> Result<LaunchReceipt, LaunchError> {
        let mut cmd = tokio::process::Command::new(invocation.program());
        cmd.args(invocation.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(false);

        #[cfg(unix)]
        cmd.process_group(0);

        let child = cmd.spawn().map_err(|e| {
            LaunchError::from_spawn(e, &invocation.program().to_string_lossy())
        })?;

        let receipt = LaunchReceipt { pid: child.id() };
        drop(child);

        tracing::debug!(pid = ?receipt.pid, "Runner process detached");
        Ok(receipt)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
