//! # hare-symbols: Lightweight Outlines for Hare Source
//!
//! hare-symbols finds the top-level declarations in a Hare source file
//! (functions, types, constants, variables, `@test`/`@init`/`@fini` hooks)
//! with one anchored regular expression per declaration shape, tried line by
//! line. There is no parser and no AST; precision is preferred over recall.
//!
//! ## Design Philosophy
//!
//! - **Heuristic, not parser** - One symbol per line, first matching rule wins
//! - **Pure core** - Extraction has no I/O, no state, and cannot fail
//! - **Thin host layer** - LSP conversion and `hare`/`haredoc` invocation sit
//!   on top of the core and never feed back into it
//!
//! ## Quick Start
//!
//! ```
//! use hare_symbols::{SymbolKind, extract_from_source};
//!
//! let source = "use fmt;\n\nexport fn main() void = {\n\tfmt::println(\"hi\")!;\n};\n";
//! let symbols = extract_from_source(source);
//!
//! assert_eq!(symbols.len(), 1);
//! assert_eq!(symbols[0].name, "main");
//! assert_eq!(symbols[0].kind, SymbolKind::Function);
//! assert_eq!(symbols[0].name_range.start_column, 10);
//! ```

pub mod config;
mod error;
pub mod extractor;
pub mod lsp;
pub mod toolchain;
mod types;

pub use config::HareConfig;
pub use error::{Error, Result};
pub use extractor::{
    PatternRule, RuleMatch, extract_from_source, extract_line, extract_symbols,
    extract_symbols_cancellable, pattern_table,
};
pub use toolchain::{HareTask, Location, Toolchain, ToolchainError};
pub use types::{LineSpan, Symbol, SymbolKind};

/// File extension of Hare source files.
pub const HARE_EXTENSION: &str = "ha";
