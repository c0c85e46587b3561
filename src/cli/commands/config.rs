//! Config command handler

use crate::args::ConfigSubcommand;
use course_gpa::config::Config;
use logger::info;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        }
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    info!("Config key '{key}' set");
    println!("✓ Set {key} = {value}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    println!("✓ Reset {key} to default");
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    if !confirmed(&mut io::stdin().lock()) {
        println!("✗ Reset cancelled");
        return;
    }
    if let Err(e) = Config::reset() {
        eprintln!("✗ Failed to remove config file: {e}");
        std::process::exit(1);
    }
    println!("✓ Config reset to defaults");
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Read one line and accept `y` or `yes` in any case
fn confirmed<R: BufRead>(input: &mut R) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
