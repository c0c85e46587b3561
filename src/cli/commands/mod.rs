//! CLI command handlers for `coursegpa`.
//!
//! Each command group lives in its own submodule. This module is also the
//! composition root: it turns the loaded configuration into storage engines.

pub mod config;
pub mod course;
pub mod gpa;
pub mod trivia;

use course_gpa::config::{Backend, Config};
use course_gpa::core::store::{MemoryStorage, Record, Storage, StorageError, TomlFileStorage};
use logger::{debug, warn};
use std::path::Path;

/// Storage engine chosen at runtime
pub type DynStorage<T> = Box<dyn Storage<T>>;

/// Open the configured engine for one table
pub fn open_storage<T: Record + 'static>(
    config: &Config,
    path: &Path,
) -> Result<DynStorage<T>, StorageError> {
    match config.backend() {
        Backend::File => {
            debug!("Using file storage at {}", path.display());
            Ok(Box::new(TomlFileStorage::open(path)?))
        }
        Backend::Memory => {
            warn!("Using in-memory storage; changes are discarded when the command exits");
            Ok(Box::new(MemoryStorage::new()))
        }
    }
}

/// Print a storage failure and exit with status 1
pub fn exit_on_storage_error(context: &str, err: &StorageError) -> ! {
    logger::error!("{context}: {err}");
    eprintln!("✗ {context}: {err}");
    std::process::exit(1);
}
