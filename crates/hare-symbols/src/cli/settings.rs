//! `hare-symbols init` and `hare-symbols config` command implementations.

use std::path::Path;

use colored::Colorize;
use hare_symbols::{HareConfig, config};

/// Run the init command - create a default configuration file.
pub fn run_init(workspace: &Path, force: bool) -> Result<(), hare_symbols::Error> {
    let path = config::init(workspace, force)?;

    println!(
        "Created configuration at: {}",
        path.display().to_string().green()
    );
    println!("Edit this file to point at your hare and haredoc executables.");
    Ok(())
}

/// Run the config command - display the effective configuration.
pub fn run_config(config: &HareConfig) -> Result<(), hare_symbols::Error> {
    let yaml = serde_yaml::to_string(config)
        .map_err(|e| hare_symbols::Error::Config(format!("YAML error: {e}")))?;

    println!("{}", "Current Configuration:".bold());
    println!("{}", "=".repeat(50));
    print!("{yaml}");
    Ok(())
}
