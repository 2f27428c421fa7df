//! Conversion of extracted symbols into LSP outline entries.
//!
//! Editors speaking the Language Server Protocol render a document outline
//! from `DocumentSymbol` values. Each symbol becomes one flat entry: `range`
//! is the whole line, `selection_range` the identifier.
//!
//! LSP positions count UTF-16 code units, while [`LineSpan`] columns count
//! characters, so conversion needs the text of the line.

use lsp_types::{DocumentSymbol, Position, Range};

use crate::extractor::extract_symbols;
use crate::types::{LineSpan, Symbol, SymbolKind};

/// The LSP symbol kind used to render `kind`.
#[must_use]
pub fn to_lsp_kind(kind: SymbolKind) -> lsp_types::SymbolKind {
    match kind {
        SymbolKind::Function => lsp_types::SymbolKind::FUNCTION,
        SymbolKind::Struct => lsp_types::SymbolKind::STRUCT,
        SymbolKind::Enum => lsp_types::SymbolKind::ENUM,
        SymbolKind::TypeParameter => lsp_types::SymbolKind::TYPE_PARAMETER,
        SymbolKind::Constant => lsp_types::SymbolKind::CONSTANT,
        SymbolKind::Variable => lsp_types::SymbolKind::VARIABLE,
    }
}

/// Convert a character column in `line_text` to a UTF-16 column.
///
/// Columns past the end clamp to the end of the line.
#[must_use]
pub fn utf16_column(line_text: &str, column: usize) -> u32 {
    let units: usize = line_text
        .chars()
        .take(column)
        .map(char::len_utf16)
        .sum();
    saturating_u32(units)
}

/// Convert a span on `line_text` to an LSP range.
#[must_use]
pub fn to_lsp_range(span: &LineSpan, line_text: &str) -> Range {
    let line = saturating_u32(span.line);
    Range::new(
        Position::new(line, utf16_column(line_text, span.start_column)),
        Position::new(line, utf16_column(line_text, span.end_column)),
    )
}

/// Convert one symbol, given the text of the line it was found on.
#[must_use]
#[allow(deprecated)] // `deprecated` field is required by the struct literal
pub fn to_document_symbol(symbol: &Symbol, line_text: &str) -> DocumentSymbol {
    DocumentSymbol {
        name: symbol.name.clone(),
        detail: None,
        kind: to_lsp_kind(symbol.kind),
        tags: None,
        deprecated: None,
        range: to_lsp_range(&symbol.full_range, line_text),
        selection_range: to_lsp_range(&symbol.name_range, line_text),
        children: None,
    }
}

/// Extract a flat LSP outline from the full text of a document.
#[must_use]
pub fn document_symbols(source: &str) -> Vec<DocumentSymbol> {
    let lines: Vec<&str> = source.lines().collect();

    extract_symbols(lines.iter().copied())
        .iter()
        .map(|symbol| to_document_symbol(symbol, lines[symbol.line()]))
        .collect()
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
