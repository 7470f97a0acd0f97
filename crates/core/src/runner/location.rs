//! Where the build runner script lives.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// File name of the runner script, expected beside the dispatcher binary.
pub const RUNNER_SCRIPT_NAME: &str = "builder.sh";

/// Absolute (or operator-supplied) path of the build runner script.
///
/// Resolved once at startup. Callers of the HTTP route have no influence
/// over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerLocation {
    script: PathBuf,
}

impl RunnerLocation {
    /// Resolve the runner location.
    ///
    /// An explicit `override_path` wins. Otherwise the script is looked up in
    /// the directory of the running executable, with symlinks resolved so a
    /// linked binary still finds the script from its real install directory.
    pub fn resolve(override_path: Option<PathBuf>) -> Result<Self, CoreError> {
        if let Some(path) = override_path {
            return Ok(Self::at(path));
        }

        let exe = std::env::current_exe().map_err(|e| {
            CoreError::Internal(format!("Cannot determine executable path: {e}"))
        })?;
        let exe = exe.canonicalize().unwrap_or(exe);
        let dir = exe.parent().ok_or_else(|| {
            CoreError::Internal(format!(
                "Executable path {} has no parent directory",
                exe.display()
            ))
        })?;

        Ok(Self::in_dir(dir))
    }

    /// The runner script inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            script: dir.as_ref().join(RUNNER_SCRIPT_NAME),
        }
    }

    /// A runner script at an exact path.
    pub fn at(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Whether the script is currently present as a regular file.
    pub fn exists(&self) -> bool {
        self.script.is_file()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
