//! Texbatch - staged batch compilation of LaTeX document folders.
//!
//! Scans a source root for document-unit subfolders, copies each into the
//! build output tree, and compiles the `{folder}.tex` document of every
//! staged folder with an external typesetting command.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod subprocess;

use clap::Parser;
use cli::{BuildArgs, Cli, Command, ConfigAction};
use config::{Config, config_file_path, load_config_file, save_config, validate_config};
use pipeline::{BuildOptions, run_build};
use std::time::Instant;
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for the texbatch CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.build.verbose, cli.build.quiet);

    // Kill the in-flight typesetting process instead of orphaning it when
    // the run is interrupted.
    if let Err(e) = ctrlc::set_handler(subprocess::request_cancel) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &cli.build);
    }

    // Default: run the documentation build
    build(&cli.build)
}

/// Execute a build run with the given options.
fn build(args: &BuildArgs) -> Result<()> {
    let start = Instant::now();

    info!("Running documentation build");

    let config = resolve_config(args)?;
    let options = BuildOptions::from(&config);
    let summary = run_build(&options)?;

    info!(
        "Complete: {} unit(s) staged, {} compiled in {:.2}s",
        summary.staged,
        summary.compiled,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Resolve the effective configuration: CLI flags override file values,
/// which override built-in defaults.
fn resolve_config(args: &BuildArgs) -> Result<Config> {
    let path = args.config.clone().unwrap_or_else(config_file_path);
    let mut config = load_config_file(&path)?;

    if let Some(source_dir) = &args.source_dir {
        config.source_dir = source_dir.clone();
    }
    if let Some(build_dir) = &args.build_dir {
        config.build_dir = build_dir.clone();
    }
    if let Some(output_name) = &args.output_name {
        config.output_name = output_name.clone();
    }
    if let Some(command) = &args.command {
        config.command = command.clone();
    }
    if let Some(extension) = &args.extension {
        config.extension = extension.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = Some(timeout);
    }
    if args.keep_going {
        config.keep_going = true;
    }

    validate_config(&config)?;
    Ok(config)
}

fn handle_command(command: Command, args: &BuildArgs) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, args),
    }
}

fn handle_config_command(action: ConfigAction, args: &BuildArgs) -> Result<()> {
    let path = args.config.clone().unwrap_or_else(config_file_path);

    match action {
        ConfigAction::Init => {
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = resolve_config(args)?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
