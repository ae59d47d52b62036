//! vfs-index CLI Binary

use clap::Parser;
use std::io::Write;
use std::process;
use tracing::{error, info};
use vfs_index::cli::{Cli, CommandOutput, RunContext};
use vfs_index::config::ConfigLoader;
use vfs_index::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("vfs-index starting");

    let context = match RunContext::new(cli.root.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", vfs_index::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            if let Err(e) = write_output(&output) {
                error!("Failed to write output: {}", e);
                eprintln!("Failed to write output: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", vfs_index::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Text gets a trailing newline; file bytes are written untouched.
fn write_output(output: &CommandOutput) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match output {
        CommandOutput::Text(text) => writeln!(stdout, "{}", text)?,
        CommandOutput::Bytes(bytes) => stdout.write_all(bytes)?,
    }
    stdout.flush()
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(&cli.root),
    }
    .map(|c| c.logging)
    .unwrap_or_default();

    // Logs stay quiet unless asked for; command output goes to stdout.
    if !cli.verbose && cli.log_level.is_none() {
        config.level = "warn".to_string();
    }
    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
