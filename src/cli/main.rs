//! Command-line interface entry point for `coursegpa`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_gpa::config::Config;
use logger::{debug, enable_debug, enable_verbose, info, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fall back to warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    debug!(
        "coursegpa v{} using {} storage in {}",
        course_gpa::get_version(),
        config.backend(),
        config.storage.data_dir
    );

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Course { subcommand } => commands::course::run(subcommand, &config),
        Command::Gpa => commands::gpa::run(&config),
        Command::Trivia { subcommand } => commands::trivia::run(subcommand, &config),
    }
}
