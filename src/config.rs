//! Configuration module for `coursegpa`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in string values
const DIR_VARIABLE: &str = "$COURSE_GPA";

/// File names of the two tables inside `data_dir`
const COURSES_FILE: &str = "courses.toml";
const QUESTIONS_FILE: &str = "questions.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Storage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Engine: `file` or `memory`
    #[serde(default)]
    pub backend: String,
    /// Directory holding the course and question tables
    #[serde(default)]
    pub data_dir: String,
}

/// Storage engine selected by [`StorageConfig::backend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// TOML files under `data_dir`
    File,
    /// Nothing outlives the process
    Memory,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "toml" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(format!("Unknown storage backend: '{s}' (expected file or memory)")),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override storage backend
    pub backend: Option<String>,
    /// Override data directory
    pub data_dir: Option<String>,
}

impl Config {
    /// Get the `$COURSE_GPA` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursegpa`
    /// - macOS: `~/Library/Application Support/coursegpa`
    /// - Windows: `%APPDATA%\coursegpa`
    #[must_use]
    pub fn get_coursegpa_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursegpa")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled,
    /// so settings added in a newer release reach existing config files.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.storage.backend.is_empty() && !defaults.storage.backend.is_empty() {
            self.storage.backend.clone_from(&defaults.storage.backend);
            changed = true;
        }
        if self.storage.data_dir.is_empty() && !defaults.storage.data_dir.is_empty() {
            self.storage.data_dir.clone_from(&defaults.storage.data_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not touched.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(backend) = &overrides.backend {
            self.storage.backend.clone_from(backend);
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.storage.data_dir = Self::expand_variables(data_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_coursegpa_dir`](Self::get_coursegpa_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_coursegpa_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_GPA` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_coursegpa_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields take their serde defaults and `$COURSE_GPA` is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.storage.data_dir = Self::expand_variables(&config.storage.data_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the file exists: load it, merge fields missing from defaults, save if anything was added
    /// - First run: create the directory, save the defaults and return them
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `backend`, `data_dir` (or `data-dir`).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "backend" => Some(self.storage.backend.clone()),
            "data_dir" | "data-dir" => Some(self.storage.data_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse
    /// (`verbose` must be a boolean, `backend` must be `file` or `memory`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value.parse::<logger::Level>()?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "backend" => self.storage.backend = value.parse::<Backend>()?.to_string(),
            "data_dir" | "data-dir" => self.storage.data_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "backend" => self.storage.backend.clone_from(&defaults.storage.backend),
            "data_dir" | "data-dir" => self.storage.data_dir.clone_from(&defaults.storage.data_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Storage engine to use; an empty or unknown value falls back to `file`
    #[must_use]
    pub fn backend(&self) -> Backend {
        self.storage.backend.parse().unwrap_or(Backend::File)
    }

    /// Path of the course table
    #[must_use]
    pub fn courses_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir).join(COURSES_FILE)
    }

    /// Path of the trivia question table
    #[must_use]
    pub fn questions_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir).join(QUESTIONS_FILE)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[storage]")?;
        writeln!(f, "  backend = \"{}\"", self.storage.backend)?;
        writeln!(f, "  data_dir = \"{}\"", self.storage.data_dir)?;

        Ok(())
    }
}
