//! Config command handler

use crate::args::ConfigSubcommand;
use markify::config::Config;
use markify::{error, info};
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => {
            update(config, &key, |c| c.set(&key, &value));
            println!("✓ Set {key} = {}", config.get(&key).unwrap_or_default());
        }
        Some(ConfigSubcommand::Unset { key }) => {
            update(config, &key, |c| c.unset(&key, defaults));
            println!(
                "✓ Reset {key} to default ({})",
                config.get(&key).unwrap_or_default()
            );
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    println!("File: {}\n", Config::get_config_file_path().display());
    print!("{config}");
}

fn show_key(config: &Config, key: &str) {
    if let Some(value) = config.get(key) {
        println!("{value}");
    } else {
        eprintln!("✗ Unknown config key: '{key}'");
        std::process::exit(1);
    }
}

/// Apply `change` and persist it; exits non-zero on failure
fn update(
    config: &mut Config,
    key: &str,
    change: impl FnOnce(&mut Config) -> Result<(), String>,
) {
    if let Err(e) = change(config) {
        eprintln!("✗ {e}");
        error!("config {key}: {e}");
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        eprintln!("✗ Failed to save config: {e}");
        error!("Failed to save {}: {e}", Config::get_config_file_path().display());
        std::process::exit(1);
    }
    info!("config {key} is now {:?}", config.get(key));
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    if !confirm("Are you sure you want to reset config to defaults? (y/n): ") {
        println!("✗ Reset cancelled");
        return;
    }

    if let Err(e) = Config::reset() {
        eprintln!("✗ Failed to remove config file: {e}");
        std::process::exit(1);
    }
    println!("✓ Config reset to defaults");
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut response = String::new();
    if io::stdin().lock().read_line(&mut response).is_err() {
        return false;
    }
    matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
