//! hare-symbols CLI - Hare outlines and toolchain shortcuts from the command line.
//!
//! Prints the declarations found in Hare source files and forwards symbol
//! lookup, documentation and build tasks to `haredoc` and `hare`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use hare_symbols::{HareConfig, HareTask, Toolchain};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::symbols::OutputFormat;

/// hare-symbols: Lightweight outlines for Hare source files.
#[derive(Parser)]
#[command(name = "hare-symbols")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Workspace root directory (defaults to current directory)
    #[arg(short, long, global = true)]
    workspace: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the `hare` executable (overrides config)
    #[arg(long, global = true)]
    hare: Option<String>,

    /// Path to the `haredoc` executable (overrides config)
    #[arg(long, global = true)]
    haredoc: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the declarations in Hare source files
    Symbols {
        /// Source files to outline
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Filter by symbol kind (function, struct, enum, type_parameter, constant, variable)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Print where a symbol is defined (e.g., "`fmt::println`")
    Goto {
        /// Fully qualified symbol name
        symbol: String,
    },

    /// Render haredoc HTML for a module, declaration or file
    Doc {
        /// Identifier to document (e.g., "bufio", "`fmt::println`", "./sort.ha")
        identifier: String,

        /// Write the HTML to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run `hare build` in the workspace
    Build {
        /// Extra arguments passed to hare
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run `hare test` in the workspace
    Test {
        /// Extra arguments passed to hare
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run `hare run` in the workspace
    Run {
        /// Extra arguments passed to hare
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Write a default .hare-symbols.yaml into the workspace
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Determine workspace root
    let workspace = match cli.workspace {
        Some(w) => w,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!(
                    "{}: failed to get current directory: {e}",
                    "error".red().bold()
                );
                return ExitCode::FAILURE;
            }
        },
    };

    // Init must work even when an existing config file is unreadable
    if let Commands::Init { force } = cli.command {
        return report(cli::settings::run_init(&workspace, force).map(|()| ExitCode::SUCCESS));
    }

    let result = HareConfig::discover(&workspace).and_then(|config| {
        let config = config.with_overrides(cli.hare, cli.haredoc);
        let toolchain = Toolchain::from_config(&config);

        match cli.command {
            Commands::Symbols {
                files,
                format,
                kind,
            } => cli::symbols::run(&files, format, kind.as_deref()).map(|()| ExitCode::SUCCESS),
            Commands::Goto { symbol } => {
                cli::lookup::run_goto(&toolchain, &symbol).map(|()| ExitCode::SUCCESS)
            }
            Commands::Doc { identifier, output } => {
                cli::lookup::run_doc(&toolchain, &identifier, output.as_deref())
                    .map(|()| ExitCode::SUCCESS)
            }
            Commands::Build { args } => cli::task::run(&toolchain, HareTask::Build, &workspace, &args),
            Commands::Test { args } => cli::task::run(&toolchain, HareTask::Test, &workspace, &args),
            Commands::Run { args } => cli::task::run(&toolchain, HareTask::Run, &workspace, &args),
            Commands::Init { .. } => unreachable!("handled before loading configuration"),
            Commands::Config => cli::settings::run_config(&config).map(|()| ExitCode::SUCCESS),
        }
    });

    report(result)
}

/// Print an error with its cause chain, or pass the exit code through.
fn report(result: hare_symbols::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
