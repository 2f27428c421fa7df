//! Parsing of `haredoc -N` output.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Result;
use super::error::ToolchainError;

/// Where a symbol is defined, as reported by `haredoc -N`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Source file path, as printed by haredoc
    pub path: PathBuf,
    /// Line of the definition (0-indexed)
    pub line: usize,
}

impl fmt::Display for Location {
    /// Formats as `path:line` with a 1-indexed line, the form editors accept.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line + 1)
    }
}

/// Parse `path:line` output into a [`Location`].
///
/// Only the first non-empty line of output is considered. The line number
/// is 1-indexed in the output and converted to 0-indexed.
///
/// # Errors
///
/// Returns [`ToolchainError::InvalidLocation`] if the path is empty, the line
/// field is missing or not a positive integer.
pub fn parse_location(output: &str) -> Result<Location> {
    let first = output
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| ToolchainError::InvalidLocation("empty output".to_string()))?;

    let mut fields = first.split(':');
    let path = fields
        .next()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ToolchainError::InvalidLocation(format!("missing path in '{first}'")))?;
    let line_field = fields
        .next()
        .map(str::trim)
        .ok_or_else(|| ToolchainError::InvalidLocation(format!("missing line in '{first}'")))?;

    let line: usize = line_field.parse().map_err(|_| {
        ToolchainError::InvalidLocation(format!("line '{line_field}' is not a number"))
    })?;
    let line = line
        .checked_sub(1)
        .ok_or_else(|| ToolchainError::InvalidLocation("line numbers start at 1".to_string()))?;

    Ok(Location {
        path: PathBuf::from(path),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_path_and_converts_line() {
        let location = parse_location("/usr/src/hare/stdlib/fmt/print.ha:42\n").unwrap();
        assert_eq!(location.path, PathBuf::from("/usr/src/hare/stdlib/fmt/print.ha"));
        assert_eq!(location.line, 41);
    }

    #[test]
    fn ignores_trailing_fields_and_blank_lines() {
        let location = parse_location("\n  bufio/scanner.ha:7:3  \nextra:9\n").unwrap();
        assert_eq!(location.path, PathBuf::from("bufio/scanner.ha"));
        assert_eq!(location.line, 6);
    }

    #[test]
    fn display_is_one_indexed() {
        let location = Location {
            path: PathBuf::from("main.ha"),
            line: 0,
        };
        assert_eq!(location.to_string(), "main.ha:1");
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("  \n\t\n")]
    #[case::no_colon("fmt/print.ha")]
    #[case::empty_path(":12")]
    #[case::non_numeric("fmt/print.ha:twelve")]
    #[case::zero_line("fmt/print.ha:0")]
    #[case::negative("fmt/print.ha:-3")]
    fn rejects_malformed_output(#[case] output: &str) {
        let result = parse_location(output);
        assert!(
            matches!(result, Err(ToolchainError::InvalidLocation(_))),
            "expected InvalidLocation for {output:?}, got {result:?}"
        );
    }
}
