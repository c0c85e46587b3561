//! Small leveled logger for the `coursegpa` CLI.
//!
//! Cargo features gate what can ever be emitted:
//! - `log-info` enables `info!`.
//! - `log-debug` enables `debug!` together with a runtime debug switch.
//! - `verbose` enables `verbose!`, an untagged console printer.
//! - `file-logging` allows redirecting tagged messages to a file.
//!
//! `warn!` and `error!` are always compiled in. Console output goes to
//! stdout for info/debug and stderr for warn/error.

use std::fmt::{self, Arguments};
use std::str::FromStr;
#[cfg(any(feature = "log-debug", feature = "verbose"))]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

/// Logging levels, ordered from most to least severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Always emitted.
    Error = 1,
    /// Always emitted.
    Warn = 2,
    /// Requires the `log-info` feature.
    Info = 3,
    /// Requires the `log-debug` feature and the runtime debug switch.
    Debug = 4,
}

impl Level {
    /// Tag printed in front of every message at this level.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("Unknown log level: '{s}'")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

const fn compiled_default() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(compiled_default());
#[cfg(feature = "log-debug")]
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(true);
#[cfg(feature = "verbose")]
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "file-logging")]
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Current global log level.
#[must_use]
pub fn level() -> Level {
    Level::from_u8(LOG_LEVEL.load(Ordering::SeqCst))
}

/// Parse `level` (case-insensitive) and apply it. Returns false if it was not recognised.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    level.parse::<Level>().map(set_level).is_ok()
}

/// Turn on `debug!` output at runtime.
pub fn enable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Turn off `debug!` output at runtime.
pub fn disable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `debug!` output is switched on. Always false without `log-debug`.
#[must_use]
pub fn is_debug_enabled() -> bool {
    #[cfg(feature = "log-debug")]
    {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "log-debug"))]
    {
        false
    }
}

/// Turn on `verbose!` output at runtime.
pub fn enable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}

/// Turn off `verbose!` output at runtime.
pub fn disable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `verbose!` output is switched on. Always false without `verbose`.
#[must_use]
pub fn is_verbose_enabled() -> bool {
    #[cfg(feature = "verbose")]
    {
        VERBOSE_ENABLED.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "verbose"))]
    {
        false
    }
}

/// Redirect tagged log lines to `path` (appending). Returns false if the file
/// could not be opened or the feature is disabled.
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    #[cfg(feature = "file-logging")]
    {
        let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
            return false;
        };
        match LOG_FILE.lock() {
            Ok(mut slot) => {
                *slot = Some(file);
                true
            }
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "file-logging"))]
    {
        let _ = path;
        false
    }
}

/// Stop writing to the log file and go back to the console.
pub fn close_file_logging() {
    #[cfg(feature = "file-logging")]
    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = None;
    }
}

/// Append `line` to the log file. Returns false when no file is active.
#[cfg(feature = "file-logging")]
fn write_to_file(line: &str) -> bool {
    let Ok(mut slot) = LOG_FILE.lock() else {
        return false;
    };
    let Some(file) = slot.as_mut() else {
        return false;
    };
    let _ = writeln!(file, "{line}");
    let _ = file.flush();
    true
}

#[cfg(not(feature = "file-logging"))]
const fn write_to_file(_line: &str) -> bool {
    false
}

fn enabled(level: Level) -> bool {
    let compiled = match level {
        Level::Info => cfg!(feature = "log-info"),
        Level::Debug => cfg!(feature = "log-debug") && is_debug_enabled(),
        Level::Error | Level::Warn => true,
    };
    compiled && level <= self::level()
}

/// Dispatch target of the logging macros.
pub fn log_impl(level: Level, args: Arguments) {
    if !enabled(level) {
        return;
    }
    let line = format!("{} {args}", level.tag());
    if write_to_file(&line) {
        return;
    }
    match level {
        Level::Error | Level::Warn => eprintln!("{line}"),
        Level::Info | Level::Debug => println!("{line}"),
    }
}

/// Log at error level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

/// Log at warn level.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

/// Log at info level.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

/// Log at debug level.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

/// Print an untagged console line when verbose output is on. Never written
/// to the log file. The calling crate must expose a `verbose` feature.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose")]
        {
            if $crate::is_verbose_enabled() {
                println!($($arg)*);
            }
        }
    };
}
