//! Error types for broom operations

use thiserror::Error;

use crate::interaction::InteractionError;

/// Core error type for broom operations
#[derive(Error, Debug)]
pub enum BroomError {
    /// Path is not a git repository clone
    #[error("not a git repository: {path}")]
    NotAGitRepository { path: String },

    /// The git backend could not be queried or mutated
    #[error("git command failed: {reason}")]
    GitCommand { reason: String },

    /// A highlighting or protection pattern failed to compile
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Configuration file could not be read or parsed
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Interactive prompt failed or was cancelled
    #[error("interaction failed: {0}")]
    Interaction(#[from] InteractionError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BroomError {
    /// Get the process exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            BroomError::NotAGitRepository { .. } | BroomError::GitCommand { .. } => 2,

            BroomError::InvalidPattern { .. } => 3,

            BroomError::Config { .. } => 4,

            BroomError::Interaction(InteractionError::Cancelled) => 5,

            BroomError::Interaction(_) => 1,

            BroomError::Io(_) => 2,
        }
    }
}
