//! `hare-symbols goto` and `hare-symbols doc` command implementations.

use std::fs;
use std::path::Path;

use colored::Colorize;
use hare_symbols::Toolchain;

/// Run the goto command.
///
/// Prints `path:line` (1-indexed) so the output can be fed straight to an
/// editor.
pub fn run_goto(toolchain: &Toolchain, symbol: &str) -> Result<(), hare_symbols::Error> {
    let location = toolchain.locate(symbol)?;
    tracing::info!(symbol, path = %location.path.display(), line = location.line, "Resolved symbol");

    println!("{location}");
    Ok(())
}

/// Run the doc command.
pub fn run_doc(
    toolchain: &Toolchain,
    identifier: &str,
    output: Option<&Path>,
) -> Result<(), hare_symbols::Error> {
    let html = toolchain.documentation(identifier)?;

    match output {
        Some(path) => {
            fs::write(path, &html)?;
            eprintln!(
                "Wrote documentation for {} to {}",
                identifier.cyan(),
                path.display().to_string().white().bold()
            );
        }
        None => print!("{html}"),
    }

    Ok(())
}
