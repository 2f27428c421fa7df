//! Error types for hare-symbols operations.
//!
//! Symbol extraction itself never fails: a line that matches no rule is just
//! not a declaration. Errors only come from the layers around it:
//!
//! - **Configuration**: reading, parsing or writing the config file
//! - **Toolchain**: spawning `hare` / `haredoc` and interpreting their output
//! - **I/O**: reading source files handed to the CLI
//! - **JSON**: rendering outlines for machine consumers

use thiserror::Error;

use crate::toolchain::ToolchainError;

/// Result type for hare-symbols operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for hare-symbols operations.
#[derive(Debug, Error)]
pub enum Error {
    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// External toolchain invocation failed
    #[error(transparent)]
    Toolchain(#[from] ToolchainError),
}
