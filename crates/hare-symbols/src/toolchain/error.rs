//! Error types for toolchain operations.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while invoking `hare` or `haredoc`.
#[derive(Debug, Error)]
pub enum ToolchainError {
    /// Failed to spawn the tool process.
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        /// The command that failed to spawn.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Tool executable not found.
    #[error("{command} not found\n\n{install_hint}\n\nSet the executable path in .hare-symbols.yaml or pass it on the command line.")]
    NotFound {
        /// The command that was not found.
        command: String,
        /// Installation instructions for the missing command.
        install_hint: String,
    },

    /// The tool ran but reported failure.
    #[error("'{command}' failed ({status}): {stderr}")]
    CommandFailed {
        /// The command that failed.
        command: String,
        /// Exit status of the process.
        status: ExitStatus,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// Tool output was not valid UTF-8.
    #[error("'{command}' produced non-UTF-8 output: {source}")]
    InvalidOutput {
        /// The command whose output could not be decoded.
        command: String,
        /// The decoding error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Output that should have been `path:line` was not.
    #[error("invalid symbol location: {0}")]
    InvalidLocation(String),

    /// Task requested without a usable workspace directory.
    #[error("no workspace folder: {} is not a directory", .0.display())]
    NoWorkspace(PathBuf),
}

impl ToolchainError {
    /// Create a "not found" error with an install hint.
    #[must_use]
    pub fn not_found(command: &str, install_hint: &str) -> Self {
        Self::NotFound {
            command: command.to_string(),
            install_hint: install_hint.to_string(),
        }
    }

    /// Create a spawn failed error.
    #[must_use]
    pub fn spawn_failed(command: &str, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            command: command.to_string(),
            source,
        }
    }

    /// Map a spawn error, distinguishing a missing executable.
    #[must_use]
    pub fn from_spawn(command: &str, install_hint: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(command, install_hint)
        } else {
            Self::spawn_failed(command, source)
        }
    }
}
