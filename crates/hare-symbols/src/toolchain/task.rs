//! Hare build tasks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A `hare` subcommand run as a workspace task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HareTask {
    /// `hare build`
    Build,
    /// `hare test`
    Test,
    /// `hare run`
    Run,
}

impl HareTask {
    /// The subcommand name passed to `hare`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Test => "test",
            Self::Run => "run",
        }
    }

    /// Human-readable task label, e.g. "Hare build".
    #[must_use]
    pub fn label(&self) -> String {
        format!("Hare {}", self.as_str())
    }
}

impl fmt::Display for HareTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HareTask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "build" => Ok(Self::Build),
            "test" => Ok(Self::Test),
            "run" => Ok(Self::Run),
            other => Err(format!("unknown hare task '{other}' (expected build, test or run)")),
        }
    }
}
