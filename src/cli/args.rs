//! CLI argument definitions for `coursegpa`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_gpa::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Storage engine argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum BackendArg {
    /// TOML files in the data directory
    File,
    /// Nothing is kept after the command exits; each run starts empty
    Memory,
}

impl std::fmt::Display for BackendArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `backend`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Record a course.
    Add {
        /// Course name (duplicates allowed for retakes)
        #[arg(value_name = "NAME")]
        name: String,
        /// Credit hours
        #[arg(value_name = "CREDITS", allow_negative_numbers = true)]
        credit_hour: i32,
        /// Letter grade: A, A-, B+, B, B-, C+, C, C-, D+, D, D-, F
        #[arg(value_name = "GRADE")]
        grade: String,
    },
    /// Search courses whose name contains QUERY (case-insensitive).
    Find {
        /// Text to look for; empty matches every course
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
    },
    /// Delete every course named exactly NAME.
    Delete {
        /// Exact course name (case-sensitive)
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// List all courses.
    List,
}

#[derive(Debug, Subcommand)]
pub enum TriviaSubcommand {
    /// Replace the question bank with the built-in questions.
    Load,
    /// List stored questions.
    List,
    /// Remove every stored question.
    Clear,
    /// Answer COUNT randomly drawn questions and get a score.
    Quiz {
        /// Number of questions to draw
        #[arg(value_name = "COUNT")]
        count: usize,
        /// Seed for a repeatable draw
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Add, search, delete and list course records.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Compute the cumulative GPA over all recorded courses.
    Gpa,
    /// Trivia question bank and quiz.
    Trivia {
        #[command(subcommand)]
        subcommand: TriviaSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "coursegpa",
    about = "Course GPA tracker command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the storage backend for this run. `memory` starts empty and
    /// discards every change when the command exits.
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Override the data directory for this run
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            backend: self.backend.map(|b| b.to_string()),
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
