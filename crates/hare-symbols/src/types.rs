//! Domain types for Hare symbol outlines.
//!
//! These types represent the output of a single extraction pass:
//! - **`SymbolKind`**: the closed set of declaration shapes we recognise
//! - **`LineSpan`**: a single-line, end-exclusive column range
//! - **`Symbol`**: one declaration found on one line
//!
//! ## Design Decisions
//!
//! | Decision | Choice | Rationale |
//! |----------|--------|-----------|
//! | Kinds | Six variants | Unions fold into `Struct`, aliases into `TypeParameter` |
//! | Columns | Character offsets | Independent of how the line is encoded |
//! | Lines | 0-indexed | Matches editor document models |
//! | Spans | Single line only | Declarations are matched per line, never across lines |

use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Symbol kinds produced by the extractor.
///
/// The set is intentionally small. Several Hare constructs share a kind:
/// `union` types are reported as [`SymbolKind::Struct`], and both error-union
/// shorthands (`type e = !...`) and plain aliases are reported as
/// [`SymbolKind::TypeParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// `fn` declarations, including `@test`, `@init` and `@fini` hooks
    Function,
    /// `type x = struct {` and `type x = union {`
    Struct,
    /// `type x = enum ...`
    Enum,
    /// Type aliases and tagged error-union aliases
    TypeParameter,
    /// `def` and `const` bindings
    Constant,
    /// `let` bindings
    Variable,
}

impl SymbolKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Function,
        Self::Struct,
        Self::Enum,
        Self::TypeParameter,
        Self::Constant,
        Self::Variable,
    ];

    /// Convert to the serialized string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::TypeParameter => "type_parameter",
            Self::Constant => "constant",
            Self::Variable => "variable",
        }
    }

    /// Parse a kind from user input.
    ///
    /// Accepts the serialized names plus a few Hare keyword aliases
    /// (`fn`, `union`, `type`, `def`, `const`, `let`).
    ///
    /// # Returns
    ///
    /// `None` if the name is not recognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "function" | "fn" => Some(Self::Function),
            "struct" | "union" => Some(Self::Struct),
            "enum" => Some(Self::Enum),
            "type_parameter" | "type" | "alias" => Some(Self::TypeParameter),
            "constant" | "def" | "const" => Some(Self::Constant),
            "variable" | "let" => Some(Self::Variable),
            _ => None,
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Spans
// ============================================================================

/// A column range on a single line.
///
/// Lines and columns are 0-indexed; `end_column` is exclusive. Columns count
/// characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSpan {
    /// Line index (0-indexed)
    pub line: usize,
    /// Starting column (0-indexed, inclusive)
    pub start_column: usize,
    /// Ending column (0-indexed, exclusive)
    pub end_column: usize,
}

impl LineSpan {
    /// Create a new span with validation.
    ///
    /// Returns `None` if the end column is before the start column.
    #[must_use]
    pub fn new(line: usize, start_column: usize, end_column: usize) -> Option<Self> {
        if end_column < start_column {
            return None;
        }
        Some(Self {
            line,
            start_column,
            end_column,
        })
    }

    /// Span covering the whole of `text` on `line`.
    #[must_use]
    pub fn whole_line(line: usize, text: &str) -> Self {
        Self {
            line,
            start_column: 0,
            end_column: text.chars().count(),
        }
    }

    /// Number of columns covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end_column - self.start_column
    }

    /// Whether the span covers no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_column == self.end_column
    }

    /// Whether `other` lies on the same line and within this span.
    #[must_use]
    pub fn contains(&self, other: &LineSpan) -> bool {
        self.line == other.line
            && self.start_column <= other.start_column
            && other.end_column <= self.end_column
    }

    /// The text covered by this span within `line_text`.
    ///
    /// Returns `None` if the span falls outside the text.
    #[must_use]
    pub fn slice<'a>(&self, line_text: &'a str) -> Option<&'a str> {
        let start = byte_offset(line_text, self.start_column)?;
        let end = byte_offset(line_text, self.end_column)?;
        line_text.get(start..end)
    }
}

/// Byte offset of character `column` in `text`; the end of the text is a
/// valid column.
pub(crate) fn byte_offset(text: &str, column: usize) -> Option<usize> {
    text.char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(text.len()))
        .nth(column)
}

/// Character column of byte offset `index` in `text`.
pub(crate) fn char_column(text: &str, index: usize) -> usize {
    text.char_indices().take_while(|(i, _)| *i < index).count()
}

// ============================================================================
// Symbols
// ============================================================================

/// A declaration found by the extractor.
///
/// Each symbol comes from exactly one line. `full_range` covers the whole
/// line and `name_range` covers the identifier within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Declared identifier (e.g., "main")
    pub name: String,
    /// What kind of declaration this is
    pub kind: SymbolKind,
    /// The whole line the declaration sits on
    pub full_range: LineSpan,
    /// The identifier within the line
    pub name_range: LineSpan,
}

impl Symbol {
    /// Line index the symbol was found on (0-indexed).
    #[must_use]
    pub fn line(&self) -> usize {
        self.full_range.line
    }
}
