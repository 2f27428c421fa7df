//! `hare-symbols build|test|run` command implementations.

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use hare_symbols::{HareTask, Toolchain};

/// Run a hare task and propagate its exit code.
pub fn run(
    toolchain: &Toolchain,
    task: HareTask,
    workspace: &Path,
    args: &[String],
) -> Result<ExitCode, hare_symbols::Error> {
    eprintln!(
        "{} {}",
        task.label().cyan().bold(),
        format!("({})", workspace.display()).dimmed()
    );

    let status = toolchain.run_task(task, workspace, args)?;

    // Killed by a signal: no code to propagate
    let code = status
        .code()
        .map_or(ExitCode::FAILURE, |c| ExitCode::from(u8::try_from(c).unwrap_or(1)));
    Ok(code)
}
