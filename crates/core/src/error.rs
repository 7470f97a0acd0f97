use crate::runner::launcher::LaunchError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Failed to launch build runner: {0}")]
    Launch(#[from] LaunchError),

    #[error("Internal error: {0}")]
    Internal(String),
}
