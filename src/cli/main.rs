//! Command-line interface entry point for `Markify`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use markify::config::Config;
use markify::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use markify::{debug, info};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides for this run
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; unknown config values fall back to warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }
    set_level(level);

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    let config_log_path = Some(&config.logging.file)
        .filter(|f| !f.is_empty())
        .map(PathBuf::from);
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    debug!(
        "markify {} (assignment_default={}, program_length={})",
        markify::get_version(),
        config.assignment_default(),
        config.program_length()
    );

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Internal { paper } => commands::internal::run(&paper, &config),
        Command::Target { paper } => commands::target::run(&paper, &config),
        Command::Gpa { papers } => commands::gpa::run(&papers),
        Command::Cgpa { semesters } => commands::cgpa::run(&semesters),
        Command::Boost {
            target, completed, ..
        } => commands::boost::run(&target, &completed, &config),
    }
}
