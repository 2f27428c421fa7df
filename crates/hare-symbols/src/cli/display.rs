//! Common display utilities for CLI commands.

use std::path::Path;

use colored::{ColoredString, Colorize};
use hare_symbols::{Symbol, SymbolKind};

/// Print the header line introducing a file's outline.
pub fn print_file_header(path: &Path, count: usize) {
    let noun = if count == 1 { "symbol" } else { "symbols" };
    println!(
        "{} {}",
        path.display().to_string().white().bold(),
        format!("({count} {noun})").dimmed()
    );
}

/// Print one symbol as `line:column  name  (kind)`.
///
/// Line and column are shown 1-indexed, like compiler diagnostics.
pub fn print_symbol(symbol: &Symbol) {
    let position = format!(
        "{}:{}",
        symbol.name_range.line + 1,
        symbol.name_range.start_column + 1
    );
    println!(
        "  {:>8}  {} {}",
        position.dimmed(),
        symbol.name.bold(),
        format!("({})", colorize_kind(symbol.kind)).dimmed()
    );
}

fn colorize_kind(kind: SymbolKind) -> ColoredString {
    let label = kind.as_str();
    match kind {
        SymbolKind::Function => label.cyan(),
        SymbolKind::Struct | SymbolKind::Enum => label.green(),
        SymbolKind::TypeParameter => label.magenta(),
        SymbolKind::Constant => label.yellow(),
        SymbolKind::Variable => label.blue(),
    }
}
