//! Configuration for the Hare toolchain glue.
//!
//! Settings live in a `.hare-symbols.yaml` file at the root of a Hare
//! workspace:
//!
//! ```yaml
//! hare-executable: hare
//! haredoc-executable: haredoc
//! ```
//!
//! The file is optional. When it is missing every setting takes its default,
//! and command-line flags override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = ".hare-symbols.yaml";

/// Default `hare` executable
pub const DEFAULT_HARE_EXECUTABLE: &str = "hare";

/// Default `haredoc` executable
pub const DEFAULT_HAREDOC_EXECUTABLE: &str = "haredoc";

/// Maximum directory depth to traverse when searching for a config file
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HareConfig {
    /// Executable used for `build`, `test` and `run` tasks
    #[serde(rename = "hare-executable")]
    pub hare_executable: String,

    /// Executable used for symbol lookup and documentation
    #[serde(rename = "haredoc-executable")]
    pub haredoc_executable: String,
}

impl Default for HareConfig {
    fn default() -> Self {
        Self {
            hare_executable: DEFAULT_HARE_EXECUTABLE.to_string(),
            haredoc_executable: DEFAULT_HAREDOC_EXECUTABLE.to_string(),
        }
    }
}

impl HareConfig {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the configuration that applies to `workspace`.
    ///
    /// Searches `workspace` and its ancestors for [`CONFIG_FILE_NAME`]. Falls
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is found but cannot be loaded.
    pub fn discover(workspace: &Path) -> Result<Self> {
        match find_config_file(workspace) {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration");
                Self::load(&path)
            }
            None => {
                debug!(workspace = %workspace.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides on top of this configuration.
    #[must_use]
    pub fn with_overrides(mut self, hare: Option<String>, haredoc: Option<String>) -> Self {
        if let Some(hare) = hare {
            self.hare_executable = hare;
        }
        if let Some(haredoc) = haredoc {
            self.haredoc_executable = haredoc;
        }
        self
    }
}

/// Write a default configuration file into `workspace`.
///
/// # Errors
///
/// Returns an error if the file already exists and `force` is not set, or if
/// the write fails.
pub fn init(workspace: &Path, force: bool) -> Result<PathBuf> {
    let path = workspace.join(CONFIG_FILE_NAME);

    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists. Use --force to overwrite",
            path.display()
        )));
    }

    HareConfig::default().save(&path)?;
    Ok(path)
}

/// Find the nearest config file at or above `start_dir`.
///
/// Stops after [`MAX_TRAVERSAL_DEPTH`] directories to guard against
/// pathological symlink loops.
#[must_use]
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .take(MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
