//! Error types and exit codes for gometalint-bridge

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for review-request processing.
///
/// Only conditions that are fatal for a whole request live here; per-file
/// and per-line failures are logged and skipped where they occur.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Cannot create workspace directory: {source}")]
    WorkspaceCreate {
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot run '{tool}': {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Change source failed: {message}")]
    ChangeSource { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: IO error
    /// - 2: Bad input (change source, configuration)
    /// - 3: Workspace creation failed
    /// - 4: Linter could not be spawned
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::from(1),
            Self::ChangeSource { .. } => ExitCode::from(2),
            Self::InvalidConfig { .. } => ExitCode::from(2),
            Self::WorkspaceCreate { .. } => ExitCode::from(3),
            Self::ToolSpawn { .. } => ExitCode::from(4),
        }
    }
}

/// Result type alias for gometalint-bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
