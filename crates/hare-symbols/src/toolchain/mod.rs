//! Thin wrappers around the external Hare toolchain.
//!
//! Nothing here understands Hare. Each operation spawns a process, passes it
//! an identifier or task name, and hands back what the process printed:
//!
//! | Operation | Command |
//! |-----------|---------|
//! | [`Toolchain::locate`] | `haredoc -N <symbol>` |
//! | [`Toolchain::documentation`] | `haredoc -F html -t <identifier>` |
//! | [`Toolchain::run_task`] | `hare <build\|test\|run> [args...]` |
//!
//! ## Usage
//!
//! ```no_run
//! use hare_symbols::toolchain::{HareTask, Toolchain};
//! use std::path::Path;
//!
//! let toolchain = Toolchain::default();
//!
//! let location = toolchain.locate("fmt::println")?;
//! println!("defined at {location}");
//!
//! let status = toolchain.run_task(HareTask::Test, Path::new("."), &[])?;
//! assert!(status.success());
//! # Ok::<(), hare_symbols::toolchain::ToolchainError>(())
//! ```

mod error;
mod location;
mod task;

pub use error::ToolchainError;
pub use location::{Location, parse_location};
pub use task::HareTask;

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::config::HareConfig;

/// Result type for toolchain operations.
pub type Result<T> = std::result::Result<T, ToolchainError>;

const INSTALL_HINT: &str = "Install the Hare toolchain: https://harelang.org/installation/";

/// Executables used to reach the Hare toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    hare: String,
    haredoc: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::from_config(&HareConfig::default())
    }
}

impl Toolchain {
    /// Create a toolchain from explicit executable paths.
    #[must_use]
    pub fn new(hare: impl Into<String>, haredoc: impl Into<String>) -> Self {
        Self {
            hare: hare.into(),
            haredoc: haredoc.into(),
        }
    }

    /// Create a toolchain using the executables named in `config`.
    #[must_use]
    pub fn from_config(config: &HareConfig) -> Self {
        Self::new(&config.hare_executable, &config.haredoc_executable)
    }

    /// The `hare` executable.
    #[must_use]
    pub fn hare(&self) -> &str {
        &self.hare
    }

    /// The `haredoc` executable.
    #[must_use]
    pub fn haredoc(&self) -> &str {
        &self.haredoc
    }

    /// Find where `symbol` is defined.
    ///
    /// # Errors
    ///
    /// Returns an error if haredoc cannot be spawned, exits unsuccessfully,
    /// or prints something other than `path:line`.
    pub fn locate(&self, symbol: &str) -> Result<Location> {
        let stdout = self.capture(&self.haredoc, &["-N", symbol])?;
        parse_location(&stdout)
    }

    /// Render the documentation for `identifier` as HTML.
    ///
    /// The identifier may be a module (`bufio`), a declaration
    /// (`fmt::println`) or a path (`./sort.ha`).
    ///
    /// # Errors
    ///
    /// Returns an error if haredoc cannot be spawned, exits unsuccessfully,
    /// or prints non-UTF-8 output.
    pub fn documentation(&self, identifier: &str) -> Result<String> {
        self.capture(&self.haredoc, &["-F", "html", "-t", identifier])
    }

    /// Run `hare <task>` in `workspace`, inheriting stdio.
    ///
    /// Blocks until the task exits and returns its status; a failing build
    /// or test is reported through the status, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if `workspace` is not a directory or hare cannot be
    /// spawned.
    pub fn run_task(&self, task: HareTask, workspace: &Path, args: &[String]) -> Result<ExitStatus> {
        if !workspace.is_dir() {
            return Err(ToolchainError::NoWorkspace(workspace.to_path_buf()));
        }

        debug!(
            command = %self.hare,
            task = task.as_str(),
            args = ?args,
            workspace = %workspace.display(),
            "Running hare task"
        );

        let status = Command::new(&self.hare)
            .arg(task.as_str())
            .args(args)
            .current_dir(workspace)
            .status()
            .map_err(|e| ToolchainError::from_spawn(&self.hare, INSTALL_HINT, e))?;

        if !status.success() {
            warn!(task = task.as_str(), %status, "Hare task failed");
        }
        Ok(status)
    }

    /// Run a command to completion and return its standard output.
    fn capture(&self, command: &str, args: &[&str]) -> Result<String> {
        debug!(command, args = ?args, "Invoking toolchain");

        let output = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ToolchainError::from_spawn(command, INSTALL_HINT, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(command, status = %output.status, "Toolchain command failed");
            return Err(ToolchainError::CommandFailed {
                command: command.to_string(),
                status: output.status,
                stderr,
            });
        }

        String::from_utf8(output.stdout).map_err(|source| ToolchainError::InvalidOutput {
            command: command.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_plain_executable_names() {
        let toolchain = Toolchain::default();
        assert_eq!(toolchain.hare(), "hare");
        assert_eq!(toolchain.haredoc(), "haredoc");
    }

    #[test]
    fn from_config_uses_configured_paths() {
        let config = HareConfig {
            hare_executable: "/opt/hare/bin/hare".to_string(),
            haredoc_executable: "/opt/hare/bin/haredoc".to_string(),
        };
        let toolchain = Toolchain::from_config(&config);

        assert_eq!(toolchain.hare(), "/opt/hare/bin/hare");
        assert_eq!(toolchain.haredoc(), "/opt/hare/bin/haredoc");
    }

    #[test]
    fn run_task_requires_workspace_directory() {
        let toolchain = Toolchain::new("hare", "haredoc");
        let missing = Path::new("/definitely/not/a/workspace");

        let result = toolchain.run_task(HareTask::Build, missing, &[]);
        assert!(matches!(result, Err(ToolchainError::NoWorkspace(_))));
    }
}
