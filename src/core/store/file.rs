//! TOML file storage engine
//!
//! The whole table lives in one TOML file. Every mutation rewrites the file
//! through a temporary sibling that is renamed into place, so a reader never
//! sees a half-written table.

use super::{retain_rows, Record, Storage, StorageError, Table};
use logger::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Durable engine backed by a TOML file
#[derive(Debug)]
pub struct TomlFileStorage<T> {
    path: PathBuf,
    table: Table<T>,
}

impl<T: Record> TomlFileStorage<T> {
    /// Open the table at `path`. A missing file is an empty table; it is
    /// created on the first write.
    ///
    /// # Errors
    /// Returns `Unavailable` if the file exists but cannot be read, and
    /// `Corrupt` if it does not decode.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let table = match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|source| StorageError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Table::default(),
            Err(source) => return Err(StorageError::Unavailable { path, source }),
        };
        debug!(
            "Opened {} ({} rows, next id {})",
            path.display(),
            table.rows.len(),
            table.next_id
        );
        Ok(Self { path, table })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, table: &Table<T>) -> Result<(), StorageError> {
        let encoded = toml::to_string_pretty(table)?;
        let unavailable = |source: io::Error| StorageError::Unavailable {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(unavailable)?;
        }
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, encoded).map_err(unavailable)?;
        fs::rename(&tmp, &self.path).map_err(unavailable)?;
        Ok(())
    }
}

impl<T: Record> Storage<T> for TomlFileStorage<T> {
    fn query_all(&self) -> Result<Table<T>, StorageError> {
        Ok(self.table.clone())
    }

    fn insert(&mut self, record: &T, next_id: u32) -> Result<(), StorageError> {
        let mut updated = self.table.clone();
        updated.rows.push(record.clone());
        updated.next_id = next_id;
        self.persist(&updated)?;
        self.table = updated;
        Ok(())
    }

    fn delete_where(&mut self, predicate: &dyn Fn(&T) -> bool) -> Result<usize, StorageError> {
        let mut updated = self.table.clone();
        let removed = retain_rows(&mut updated, predicate);
        if removed > 0 {
            self.persist(&updated)?;
            self.table = updated;
        }
        Ok(removed)
    }

    fn replace_all(&mut self, table: &Table<T>) -> Result<(), StorageError> {
        self.persist(table)?;
        self.table = table.clone();
        Ok(())
    }
}
