//! Turning a trigger into a concrete runner command line.

use std::ffi::OsStr;
use std::path::Path;

use super::location::RunnerLocation;
use crate::trigger::BuildTrigger;

/// How every build runner is started: an optional interpreter plus the
/// runner script. Built once at startup and shared by all requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerCommand {
    interpreter: Option<String>,
    location: RunnerLocation,
}

impl RunnerCommand {
    /// `interpreter` of `None` executes the script directly, relying on its
    /// shebang and execute bit.
    pub fn new(interpreter: Option<String>, location: RunnerLocation) -> Self {
        Self {
            interpreter,
            location,
        }
    }

    pub fn location(&self) -> &RunnerLocation {
        &self.location
    }

    pub fn interpreter(&self) -> Option<&str> {
        self.interpreter.as_deref()
    }

    /// The command line for one trigger.
    pub fn invocation_for(&self, trigger: &BuildTrigger) -> RunnerInvocation {
        RunnerInvocation {
            interpreter: self.interpreter.clone(),
            script: self.location.clone(),
            args: trigger.runner_args(),
        }
    }
}

/// A fully resolved runner command line.
///
/// Every argument stays a separate argv element. Nothing is ever joined into
/// a shell string, so a `phid` full of metacharacters reaches the runner as
/// one literal argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerInvocation {
    interpreter: Option<String>,
    script: RunnerLocation,
    args: [String; 4],
}

impl RunnerInvocation {
    /// The program handed to the OS: the interpreter, or the script itself.
    pub fn program(&self) -> &OsStr {
        match &self.interpreter {
            Some(interpreter) => OsStr::new(interpreter),
            None => self.script.script().as_os_str(),
        }
    }

    /// Arguments following [`program`](Self::program).
    pub fn argv(&self) -> Vec<&OsStr> {
        let mut argv = Vec::with_capacity(5);
        if self.interpreter.is_some() {
            argv.push(self.script.script().as_os_str());
        }
        argv.extend(self.args.iter().map(OsStr::new));
        argv
    }

    pub fn script(&self) -> &Path {
        self.script.script()
    }

    /// The trigger's positional arguments: build, diff, revision, phid.
    pub fn args(&self) -> &[String; 4] {
        &self.args
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
