//! Error types for git command execution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when running git commands.
///
/// `Spawn` and `CommandFailed` are the two faces of a failed process
/// execution. Neither is ever swallowed by [`crate::GitRepository`].
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be found or spawned.
    #[error("failed to execute {}: {source}", binary.display())]
    Spawn {
        /// The binary that was attempted.
        binary: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The git command exited with a non-zero status.
    #[error("git {subcommand} failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The subcommand that failed (e.g. `"checkout"`).
        subcommand: String,
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr.
        stderr: String,
    },

    /// The process started, but its output could not be collected or
    /// copied into the caller's sink.
    #[error("failed to collect git output: {0}")]
    Output(#[source] std::io::Error),

    /// The repository directory cannot be used for the requested operation.
    #[error("invalid repository directory: {}", path.display())]
    InvalidDirectory {
        /// The offending path.
        path: PathBuf,
    },
}

impl GitError {
    /// The exit code of a failed command, if there was one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}

/// A specialized `Result` type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;
