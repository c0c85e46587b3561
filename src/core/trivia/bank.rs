//! Question bank
//!
//! Plain CRUD over trivia questions, sharing the storage engines used for
//! courses.

use super::default_questions;
use crate::core::models::{QuestionId, TrivialQuestion};
use crate::core::store::{following_id, MemoryStorage, Storage, StorageError, Table};
use logger::info;

/// The stored set of trivia questions
pub struct QuestionBank<S: Storage<TrivialQuestion>> {
    storage: S,
    questions: Vec<TrivialQuestion>,
    next_id: Option<QuestionId>,
}

impl QuestionBank<MemoryStorage<TrivialQuestion>> {
    /// Empty bank that keeps nothing beyond the process
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            storage: MemoryStorage::new(),
            questions: Vec::new(),
            next_id: Some(1),
        }
    }
}

impl<S: Storage<TrivialQuestion>> QuestionBank<S> {
    /// Build the bank over `storage`, loading what it already holds
    ///
    /// # Errors
    /// Returns an error if the engine cannot be read
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let table = storage.query_all()?;
        Ok(Self {
            storage,
            next_id: table.resume_id(),
            questions: table.rows,
        })
    }

    /// Store `question` under a fresh id and return the stored copy
    ///
    /// # Errors
    /// Returns `IdsExhausted` once every id is taken, or an error if the
    /// engine rejects the write
    pub fn insert(&mut self, question: TrivialQuestion) -> Result<TrivialQuestion, StorageError> {
        let id = self.next_id.ok_or(StorageError::IdsExhausted)?;
        let following = following_id(id)?;
        let stored = TrivialQuestion { id, ..question };
        self.storage.insert(&stored, following)?;
        self.next_id = Some(following);
        self.questions.push(stored.clone());
        Ok(stored)
    }

    /// Remove every question; returns how many were removed
    ///
    /// # Errors
    /// Returns an error if the engine rejects the write
    pub fn delete_all(&mut self) -> Result<usize, StorageError> {
        let removed = self.storage.delete_where(&|_: &TrivialQuestion| true)?;
        self.questions.clear();
        Ok(removed)
    }

    /// Replace the bank's content with the built-in question set
    ///
    /// The new table is written in one go, so a failure leaves the bank as
    /// it was.
    ///
    /// # Errors
    /// Returns `IdsExhausted` if the set does not fit in the remaining ids,
    /// or an error if the engine rejects the write
    pub fn load_defaults(&mut self) -> Result<usize, StorageError> {
        let mut next_id = self.next_id.ok_or(StorageError::IdsExhausted)?;
        let mut rows = Vec::new();
        for question in default_questions() {
            rows.push(TrivialQuestion {
                id: next_id,
                ..question
            });
            next_id = following_id(next_id)?;
        }

        let table = Table { next_id, rows };
        self.storage.replace_all(&table)?;
        self.next_id = Some(table.next_id);
        self.questions = table.rows;
        info!("Loaded {} trivia questions", self.questions.len());
        Ok(self.questions.len())
    }

    /// Every question in insertion order, as an independent copy
    #[must_use]
    pub fn list_all(&self) -> Vec<TrivialQuestion> {
        self.questions.clone()
    }

    /// Borrow the current questions
    #[must_use]
    pub fn questions(&self) -> &[TrivialQuestion] {
        &self.questions
    }

    /// Number of stored questions
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
