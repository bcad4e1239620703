//! Command-line interface entry point for the course manager

mod args;
mod commands;

use std::path::PathBuf;

use args::{Cli, Command};
use clap::Parser;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, verbose, Level};

use course_manager::config::Config;
use course_manager::core::{Registry, Store};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose_enabled = args.verbose || config.logging.verbose;
    if verbose_enabled {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose_enabled {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Type { subcommand } => {
            commands::course_types::run(subcommand, &mut open_registry(&config));
        }
        Command::Course { subcommand } => {
            commands::courses::run(subcommand, &mut open_registry(&config));
        }
        Command::Offering { subcommand } => {
            commands::offerings::run(subcommand, &mut open_registry(&config));
        }
        Command::Student { subcommand } => {
            commands::students::run(subcommand, &mut open_registry(&config));
        }
    }
}

/// Open the registry over the configured data directory, exiting on failure.
fn open_registry(config: &Config) -> Registry {
    let data_dir = if config.paths.data_dir.is_empty() {
        Config::get_courseman_dir().join("data")
    } else {
        PathBuf::from(&config.paths.data_dir)
    };
    verbose!("Using data directory: {}", data_dir.display());

    match Registry::open(Store::new(data_dir)) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("✗ Failed to load stored data: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
