//! Record storage and the course store built on it
//!
//! A [`Storage`] engine is the durable collaborator: it only knows how to
//! append a record, delete records matching a predicate and return
//! everything it holds. [`CourseStore`] keeps the canonical in-memory view
//! on top of an engine and serves the course queries.

pub mod courses;
pub mod file;
pub mod memory;

pub use courses::{CourseStore, StoreEvent, SubscriptionId};
pub use file::TomlFileStorage;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A row that can be kept by a [`Storage`] engine
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Store-assigned identifier
    fn id(&self) -> u32;
}

/// All rows of one entity plus the id the next insert will receive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Table<T> {
    /// Next id to assign; only ever grows
    #[serde(default = "first_id")]
    pub next_id: u32,
    /// Rows in insertion order
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
}

const fn first_id() -> u32 {
    1
}

impl<T: Record> Table<T> {
    /// Id the next insert should receive, never at or below a stored row
    ///
    /// `None` once a row already holds `u32::MAX`.
    #[must_use]
    pub fn resume_id(&self) -> Option<u32> {
        match self.rows.iter().map(Record::id).max() {
            Some(highest) => highest.checked_add(1).map(|past| past.max(self.next_id)),
            None => Some(self.next_id),
        }
    }
}

/// Id after `id`, or `IdsExhausted` at the top of the range
///
/// # Errors
/// Returns `IdsExhausted` if `id` is `u32::MAX`
pub fn following_id(id: u32) -> Result<u32, StorageError> {
    id.checked_add(1).ok_or(StorageError::IdsExhausted)
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            rows: Vec::new(),
        }
    }
}

/// Failures at the persistence boundary
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("storage unavailable at {}: {source}", path.display())]
    Unavailable {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not decode as a table.
    #[error("corrupt store file {}: {source}", path.display())]
    Corrupt {
        /// File being decoded
        path: PathBuf,
        /// Decoder error
        #[source]
        source: toml::de::Error,
    },

    /// Every id has been handed out; ids are never reused.
    #[error("no ids left to assign")]
    IdsExhausted,

    /// The table could not be encoded.
    #[error("failed to encode store: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Persistence engine for one kind of record
pub trait Storage<T: Record> {
    /// Everything currently stored, in insertion order
    ///
    /// # Errors
    /// Returns an error if the engine cannot be read
    fn query_all(&self) -> Result<Table<T>, StorageError>;

    /// Append `record` and remember `next_id` as the id for the following insert
    ///
    /// # Errors
    /// Returns an error if the write is not durable
    fn insert(&mut self, record: &T, next_id: u32) -> Result<(), StorageError>;

    /// Remove every record for which `predicate` is true; returns how many went
    ///
    /// # Errors
    /// Returns an error if the write is not durable
    fn delete_where(&mut self, predicate: &dyn Fn(&T) -> bool) -> Result<usize, StorageError>;

    /// Swap the whole table for `table` in one write
    ///
    /// # Errors
    /// Returns an error if the write is not durable; the old table stays.
    fn replace_all(&mut self, table: &Table<T>) -> Result<(), StorageError>;
}

impl<T: Record, S: Storage<T> + ?Sized> Storage<T> for Box<S> {
    fn query_all(&self) -> Result<Table<T>, StorageError> {
        (**self).query_all()
    }

    fn insert(&mut self, record: &T, next_id: u32) -> Result<(), StorageError> {
        (**self).insert(record, next_id)
    }

    fn delete_where(&mut self, predicate: &dyn Fn(&T) -> bool) -> Result<usize, StorageError> {
        (**self).delete_where(predicate)
    }

    fn replace_all(&mut self, table: &Table<T>) -> Result<(), StorageError> {
        (**self).replace_all(table)
    }
}

/// Apply a delete to an in-memory table. Shared by the engines.
pub(crate) fn retain_rows<T>(table: &mut Table<T>, predicate: &dyn Fn(&T) -> bool) -> usize {
    let before = table.rows.len();
    table.rows.retain(|row| !predicate(row));
    before - table.rows.len()
}
