//! `hare-symbols symbols` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use colored::Colorize;
use hare_symbols::lsp::to_document_symbol;
use hare_symbols::{HARE_EXTENSION, Symbol, SymbolKind, extract_symbols};
use lsp_types::DocumentSymbol;
use serde::Serialize;

use super::display;

/// How outlines are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored listing
    Text,
    /// Extracted records as JSON
    Json,
    /// LSP `DocumentSymbol` values as JSON
    Lsp,
}

#[derive(Serialize)]
struct FileOutline<'a, T> {
    path: &'a Path,
    symbols: Vec<T>,
}

/// Run the symbols command.
pub fn run(
    files: &[PathBuf],
    format: OutputFormat,
    kind_filter: Option<&str>,
) -> Result<(), hare_symbols::Error> {
    let target_kind = kind_filter.map(parse_kind).transpose()?;

    let mut records = Vec::with_capacity(files.len());
    let mut lsp_records = Vec::new();

    for path in files {
        if path.extension().is_none_or(|ext| ext != HARE_EXTENSION) {
            tracing::warn!(path = %path.display(), "Not a .ha file, extracting anyway");
        }

        let source = fs::read_to_string(path)?;
        let lines: Vec<&str> = source.lines().collect();

        let mut symbols = extract_symbols(lines.iter().copied());
        if let Some(kind) = target_kind {
            symbols.retain(|s| s.kind == kind);
        }

        match format {
            OutputFormat::Text => print_text(path, &symbols),
            OutputFormat::Json => records.push(FileOutline {
                path: path.as_path(),
                symbols,
            }),
            OutputFormat::Lsp => {
                let converted: Vec<DocumentSymbol> = symbols
                    .iter()
                    .map(|s| to_document_symbol(s, lines[s.line()]))
                    .collect();
                lsp_records.push(FileOutline {
                    path: path.as_path(),
                    symbols: converted,
                });
            }
        }
    }

    match format {
        OutputFormat::Text => {}
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Lsp => println!("{}", serde_json::to_string_pretty(&lsp_records)?),
    }

    Ok(())
}

fn print_text(path: &Path, symbols: &[Symbol]) {
    display::print_file_header(path, symbols.len());

    if symbols.is_empty() {
        println!("  {}", "no declarations found".dimmed());
    }
    for symbol in symbols {
        display::print_symbol(symbol);
    }
    println!();
}

fn parse_kind(name: &str) -> Result<SymbolKind, hare_symbols::Error> {
    SymbolKind::from_name(name).ok_or_else(|| {
        hare_symbols::Error::Config(format!(
            "unknown symbol kind '{name}'. Valid kinds: function, struct, enum, type_parameter, constant, variable"
        ))
    })
}
