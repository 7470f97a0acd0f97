//! Locating, describing, and starting the external build runner.
//!
//! The runner is a script installed next to the dispatcher binary. Each
//! trigger becomes a [`invocation::RunnerInvocation`], which a
//! [`launcher::BuildLauncher`] turns into a detached child process.

pub mod invocation;
pub mod launcher;
pub mod location;
