//! Line-oriented symbol extraction for Hare source.
//!
//! The extractor walks a document one line at a time and tries an ordered
//! table of anchored regular expressions against each line. The first rule
//! that matches decides the symbol for that line; later rules are skipped.
//! Lines that match nothing contribute nothing.
//!
//! ## Pattern Table
//!
//! | # | Shape | Kind |
//! |---|-------|------|
//! | 1 | `[export] fn name` | `Function` |
//! | 2 | `@test\|@init\|@fini fn name` (name of 2+ chars) | `Function` |
//! | 3 | `[export] type name = struct {` | `Struct` |
//! | 4 | `[export] type name = union {` | `Struct` |
//! | 5 | `[export] type name = enum ` | `Enum` |
//! | 6 | `[export] type name = !` | `TypeParameter` |
//! | 7 | `[export] type name =` | `TypeParameter` |
//! | 8 | `[export] def name` then `:` or `=` | `Constant` |
//! | 9 | `[export] const name` then `:` or `=` | `Constant` |
//! | 10 | `[export] let name` then `:` or `=` | `Variable` |
//!
//! Rule 7 is the catch-all for `type` declarations and must stay after
//! rules 3-6. Every pattern is anchored at column 0, so indented lines
//! never match.
//!
//! Rule 2 requires at least two identifier characters while rule 1 accepts
//! one. `@test fn t()` therefore yields nothing.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use regex::Regex;
use tracing::{debug, trace};

use crate::types::{LineSpan, Symbol, SymbolKind, char_column};

/// Pattern sources in evaluation order.
///
/// Each pattern captures the identifier as `name`. The optional `export`
/// marker is captured as `marker`.
const RULES: [(&str, SymbolKind); 10] = [
    (
        r"^(?P<marker>export\s+)?fn\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)",
        SymbolKind::Function,
    ),
    (
        r"^@(?P<attribute>test|init|fini)\s+fn\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]+)",
        SymbolKind::Function,
    ),
    (
        r"^(?P<marker>export\s+)?type\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*struct\s*\{",
        SymbolKind::Struct,
    ),
    (
        r"^(?P<marker>export\s+)?type\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*union\s*\{",
        SymbolKind::Struct,
    ),
    (
        r"^(?P<marker>export\s+)?type\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*enum\s+",
        SymbolKind::Enum,
    ),
    (
        r"^(?P<marker>export\s+)?type\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*!",
        SymbolKind::TypeParameter,
    ),
    (
        r"^(?P<marker>export\s+)?type\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=",
        SymbolKind::TypeParameter,
    ),
    (
        r"^(?P<marker>export\s+)?def\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*[:=]",
        SymbolKind::Constant,
    ),
    (
        r"^(?P<marker>export\s+)?const\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*[:=]",
        SymbolKind::Constant,
    ),
    (
        r"^(?P<marker>export\s+)?let\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*[:=]",
        SymbolKind::Variable,
    ),
];

static PATTERN_TABLE: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|&(pattern, kind)| PatternRule::new(pattern, kind))
        .collect()
});

/// One entry of the pattern table: an anchored matcher and the kind it
/// produces.
#[derive(Debug)]
pub struct PatternRule {
    regex: Regex,
    kind: SymbolKind,
}

/// The concrete offsets of a successful rule match on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    /// The identifier text
    pub name: &'a str,
    /// Byte offset where the identifier starts
    pub name_start: usize,
    /// Byte offset one past the identifier
    pub name_end: usize,
    /// Length of the `export` marker (including its trailing whitespace),
    /// zero when absent
    pub marker_len: usize,
}

impl PatternRule {
    fn new(pattern: &str, kind: SymbolKind) -> Self {
        Self {
            regex: Regex::new(pattern).expect("pattern table entries are valid regexes"),
            kind,
        }
    }

    /// The kind produced when this rule matches.
    #[must_use]
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// The regular expression source of this rule.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Try this rule against a single line.
    ///
    /// Returns `None` if the line does not match or the identifier capture
    /// is empty.
    #[must_use]
    pub fn matches<'a>(&self, line: &'a str) -> Option<RuleMatch<'a>> {
        let captures = self.regex.captures(line)?;
        let name = captures.name("name").filter(|m| !m.is_empty())?;
        let marker_len = captures.name("marker").map_or(0, |m| m.len());

        Some(RuleMatch {
            name: name.as_str(),
            name_start: name.start(),
            name_end: name.end(),
            marker_len,
        })
    }
}

/// The ordered pattern table used by the extractor.
#[must_use]
pub fn pattern_table() -> &'static [PatternRule] {
    &PATTERN_TABLE
}

/// Extract the symbol declared on a single line, if any.
///
/// Rules are tried in table order and the first match wins.
#[must_use]
pub fn extract_line(line_index: usize, text: &str) -> Option<Symbol> {
    pattern_table().iter().find_map(|rule| {
        let found = rule.matches(text)?;
        trace!(
            line = line_index,
            name = found.name,
            kind = %rule.kind,
            "Matched declaration"
        );
        Some(Symbol {
            name: found.name.to_string(),
            kind: rule.kind,
            full_range: LineSpan::whole_line(line_index, text),
            name_range: LineSpan {
                line: line_index,
                start_column: char_column(text, found.name_start),
                end_column: char_column(text, found.name_end),
            },
        })
    })
}

/// Extract symbols from a document given as an ordered sequence of lines.
///
/// Lines must not carry their trailing newline. The result is in line order
/// with at most one symbol per line. This never fails: lines that match no
/// rule are skipped.
pub fn extract_symbols<I, S>(lines: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let symbols: Vec<Symbol> = lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| extract_line(index, line.as_ref()))
        .collect();

    debug!(symbols = symbols.len(), "Extracted symbols");
    symbols
}

/// Extract symbols from the full text of a document.
///
/// Splits on `\n` and `\r\n` before extracting.
#[must_use]
pub fn extract_from_source(source: &str) -> Vec<Symbol> {
    extract_symbols(source.lines())
}

/// Like [`extract_symbols`], but checks `cancel` once per line.
///
/// Returns `None` as soon as the flag is observed set; partial results are
/// discarded.
pub fn extract_symbols_cancellable<I, S>(lines: I, cancel: &AtomicBool) -> Option<Vec<Symbol>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut symbols = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        if cancel.load(Ordering::Relaxed) {
            debug!(line = index, "Extraction cancelled");
            return None;
        }
        if let Some(symbol) = extract_line(index, line.as_ref()) {
            symbols.push(symbol);
        }
    }

    debug!(symbols = symbols.len(), "Extracted symbols");
    Some(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn single(line: &str) -> Option<Symbol> {
        let mut symbols = extract_symbols([line]);
        assert!(symbols.len() <= 1, "at most one symbol per line");
        symbols.pop()
    }

    #[test]
    fn table_has_ten_rules_in_priority_order() {
        let kinds: Vec<_> = pattern_table().iter().map(PatternRule::kind).collect();
        assert_eq!(
            kinds,
            vec![
                SymbolKind::Function,
                SymbolKind::Function,
                SymbolKind::Struct,
                SymbolKind::Struct,
                SymbolKind::Enum,
                SymbolKind::TypeParameter,
                SymbolKind::TypeParameter,
                SymbolKind::Constant,
                SymbolKind::Constant,
                SymbolKind::Variable,
            ]
        );
        assert!(pattern_table().iter().all(|r| r.pattern().starts_with('^')));
    }

    #[rstest]
    #[case::plain_fn("fn main() void = {", "main", SymbolKind::Function)]
    #[case::exported_fn("export fn start() void = {", "start", SymbolKind::Function)]
    #[case::single_char_fn("fn f() void", "f", SymbolKind::Function)]
    #[case::test_hook("@test fn parse_ok() void = {", "parse_ok", SymbolKind::Function)]
    #[case::init_hook("@init fn setup() void = {", "setup", SymbolKind::Function)]
    #[case::fini_hook("@fini fn teardown() void = {", "teardown", SymbolKind::Function)]
    #[case::struct_type("export type Point = struct {", "Point", SymbolKind::Struct)]
    #[case::union_type("type value = union {", "value", SymbolKind::Struct)]
    #[case::enum_type("export type Color = enum uint { RED = 0 };", "Color", SymbolKind::Enum)]
    #[case::error_alias("type Err = !fmt::error", "Err", SymbolKind::TypeParameter)]
    #[case::plain_alias("type Meters = int", "Meters", SymbolKind::TypeParameter)]
    #[case::tagged_union("export type error = (io::error | utf8::invalid);", "error", SymbolKind::TypeParameter)]
    #[case::def_const("def BUFSZ: size = 4096;", "BUFSZ", SymbolKind::Constant)]
    #[case::def_untyped("export def VERSION = \"1.0\";", "VERSION", SymbolKind::Constant)]
    #[case::const_binding("const MAX: int = 100;", "MAX", SymbolKind::Constant)]
    #[case::let_binding("let counter: int = 0;", "counter", SymbolKind::Variable)]
    #[case::exported_let("export let verbose = false;", "verbose", SymbolKind::Variable)]
    fn recognizes_declaration(#[case] line: &str, #[case] name: &str, #[case] kind: SymbolKind) {
        let symbol = single(line).expect("line should produce a symbol");
        assert_eq!(symbol.name, name);
        assert_eq!(symbol.kind, kind);
        assert_eq!(symbol.name_range.slice(line), Some(name));
    }

    #[rstest]
    #[case::blank("")]
    #[case::comment("// fn commented_out() void")]
    #[case::indented_fn("    fn nested() void")]
    #[case::indented_let("\tlet x = 1;")]
    #[case::call("fmt::println(\"fn main\")!;")]
    #[case::use_stmt("use fmt;")]
    #[case::fn_without_space("fnmain()")]
    #[case::export_glued("exportfn main()")]
    #[case::let_without_binding("let x")]
    #[case::const_without_binding("const LIMIT int")]
    #[case::type_without_equals("type foo")]
    #[case::digit_identifier("fn 9lives() void")]
    #[case::unknown_attribute("@symbol(\"x\") fn foo() void")]
    #[case::attribute_without_space("@testfn foo() void")]
    fn ignores_non_declaration(#[case] line: &str) {
        assert_eq!(single(line), None);
    }

    #[test]
    fn test_hook_rejects_single_character_name() {
        // The attribute rule needs two identifier characters; the plain
        // `fn` rule cannot match because of the leading `@`.
        assert_eq!(single("@test fn t() void = { abort(); };"), None);
        assert_eq!(single("@init fn i() void"), None);

        let two = single("@test fn tt() void").expect("two-char name matches");
        assert_eq!(two.name, "tt");
        assert_eq!(two.kind, SymbolKind::Function);
    }

    #[test]
    fn plain_fn_accepts_single_character_name() {
        let symbol = single("fn t() void").expect("one-char name matches");
        assert_eq!(symbol.name, "t");
        assert_eq!(symbol.name_range.start_column, 3);
        assert_eq!(symbol.name_range.end_column, 4);
    }

    #[test]
    fn name_range_skips_export_marker() {
        let line = "export   fn main() void";
        let symbol = single(line).unwrap();

        assert_eq!(symbol.name_range.start_column, 12);
        assert_eq!(symbol.name_range.end_column, 16);
        assert_eq!(symbol.full_range, LineSpan::whole_line(0, line));
    }

    #[test]
    fn rule_match_reports_marker_length() {
        let rule = &pattern_table()[0];

        let exported = rule.matches("export fn main").unwrap();
        assert_eq!(exported.marker_len, 7);
        assert_eq!(exported.name_start, 10);

        let plain = rule.matches("fn main").unwrap();
        assert_eq!(plain.marker_len, 0);
        assert_eq!(plain.name_start, 3);
    }

    #[rstest]
    #[case::struct_shape("type a = struct {", SymbolKind::Struct)]
    #[case::union_shape("type b = union {", SymbolKind::Struct)]
    #[case::enum_shape("type c = enum u8 {", SymbolKind::Enum)]
    fn specific_type_rules_win_over_alias_fallback(#[case] line: &str, #[case] kind: SymbolKind) {
        // Every specific shape also satisfies the generic `type x =` rule.
        let alias = &pattern_table()[6];
        assert!(alias.matches(line).is_some());
        assert_eq!(single(line).unwrap().kind, kind);
    }

    #[test]
    fn enum_without_trailing_space_falls_back_to_alias() {
        let symbol = single("type c = enum").unwrap();
        assert_eq!(symbol.kind, SymbolKind::TypeParameter);
    }

    #[test]
    fn struct_without_brace_falls_back_to_alias() {
        let symbol = single("type s = struct").unwrap();
        assert_eq!(symbol.kind, SymbolKind::TypeParameter);
    }

    #[test]
    fn one_symbol_per_line_and_line_order_preserved() {
        let source = "use fmt;\n\nexport fn main() void = {\n\tlet x = 1;\n};\nconst A: int = 1; let b = 2;\n";
        let symbols = extract_from_source(source);

        let summary: Vec<_> = symbols
            .iter()
            .map(|s| (s.line(), s.name.as_str(), s.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                (2, "main", SymbolKind::Function),
                (5, "A", SymbolKind::Constant),
            ]
        );
    }

    #[test]
    fn repeated_names_are_not_deduplicated() {
        let symbols = extract_symbols(["fn dup() void", "fn dup() void"]);
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].line(), 0);
        assert_eq!(symbols[1].line(), 1);
    }

    #[test]
    fn crlf_source_is_split_without_carriage_returns() {
        let symbols = extract_from_source("fn a() void\r\nlet b = 1;\r\n");
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].full_range.end_column, "fn a() void".len());
    }

    #[test]
    fn columns_are_characters_on_non_ascii_lines() {
        let line = "let s = \"日本\";";
        let symbol = single(line).unwrap();

        assert_eq!(symbol.full_range.end_column, line.chars().count());
        assert_eq!(symbol.full_range.end_column, 13);
        assert_eq!(symbol.name_range, LineSpan::new(0, 4, 5).unwrap());
    }

    #[test]
    fn unicode_whitespace_shifts_name_by_one_column() {
        let line = "fn\u{a0}main() void";
        let symbol = single(line).unwrap();

        assert_eq!(symbol.name, "main");
        assert_eq!(symbol.name_range.start_column, 3);
        assert_eq!(symbol.name_range.end_column, 7);
        assert_eq!(symbol.name_range.slice(line), Some("main"));
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(extract_symbols(Vec::<String>::new()).is_empty());
        assert!(extract_from_source("").is_empty());
    }

    #[test]
    fn cancellable_extraction_matches_plain_when_not_cancelled() {
        let lines = ["fn a() void", "type b = int", "noise"];
        let cancel = AtomicBool::new(false);

        let result = extract_symbols_cancellable(lines, &cancel);
        assert_eq!(result, Some(extract_symbols(lines)));
    }

    #[test]
    fn cancellable_extraction_stops_when_flag_set() {
        let cancel = AtomicBool::new(true);
        assert_eq!(extract_symbols_cancellable(["fn a() void"], &cancel), None);
    }
}
