//! Volatile storage engine

use super::{retain_rows, Record, Storage, StorageError, Table};

/// Keeps the table in memory only; never fails
#[derive(Debug, Clone)]
pub struct MemoryStorage<T> {
    table: Table<T>,
}

impl<T> MemoryStorage<T> {
    /// Create an empty engine
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Table::default(),
        }
    }

    /// Create an engine that already holds `table`
    #[must_use]
    pub const fn with_table(table: Table<T>) -> Self {
        Self { table }
    }
}

impl<T> Default for MemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Storage<T> for MemoryStorage<T> {
    fn query_all(&self) -> Result<Table<T>, StorageError> {
        Ok(self.table.clone())
    }

    fn insert(&mut self, record: &T, next_id: u32) -> Result<(), StorageError> {
        self.table.rows.push(record.clone());
        self.table.next_id = next_id;
        Ok(())
    }

    fn delete_where(&mut self, predicate: &dyn Fn(&T) -> bool) -> Result<usize, StorageError> {
        Ok(retain_rows(&mut self.table, predicate))
    }

    fn replace_all(&mut self, table: &Table<T>) -> Result<(), StorageError> {
        self.table = table.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;
    use crate::core::store::following_id;

    fn course(id: u32, name: &str) -> Course {
        Course::new(id, name.to_string(), 3, "A".to_string())
    }

    #[test]
    fn test_insert_and_query() {
        let mut storage = MemoryStorage::new();
        storage.insert(&course(1, "Art"), 2).unwrap();
        storage.insert(&course(2, "Music"), 3).unwrap();

        let table = storage.query_all().unwrap();
        assert_eq!(table.next_id, 3);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].course_name, "Art");
    }

    #[test]
    fn test_delete_where_counts() {
        let mut storage = MemoryStorage::new();
        storage.insert(&course(1, "Art"), 2).unwrap();
        storage.insert(&course(2, "Art"), 3).unwrap();
        storage.insert(&course(3, "Music"), 4).unwrap();

        let removed = storage
            .delete_where(&|c: &Course| c.course_name == "Art")
            .unwrap();
        assert_eq!(removed, 2);

        let table = storage.query_all().unwrap();
        assert_eq!(table.rows.len(), 1);
        // deleting never rewinds the id counter
        assert_eq!(table.next_id, 4);
    }

    #[test]
    fn test_replace_all_swaps_table() {
        let mut storage = MemoryStorage::with_table(Table {
            next_id: 3,
            rows: vec![course(1, "Art"), course(2, "Music")],
        });

        storage
            .replace_all(&Table {
                next_id: 8,
                rows: vec![course(7, "Drama")],
            })
            .unwrap();

        let table = storage.query_all().unwrap();
        assert_eq!(table.next_id, 8);
        assert_eq!(table.rows, vec![course(7, "Drama")]);
    }

    #[test]
    fn test_resume_id_skips_past_rows() {
        let stale = Table {
            next_id: 2,
            rows: vec![course(1, "Art"), course(6, "Music")],
        };
        assert_eq!(stale.resume_id(), Some(7));

        let ahead = Table {
            next_id: 10,
            rows: vec![course(6, "Music")],
        };
        assert_eq!(ahead.resume_id(), Some(10));

        assert_eq!(Table::<Course>::default().resume_id(), Some(1));
    }

    #[test]
    fn test_resume_id_at_top_of_range() {
        let full = Table {
            next_id: 1,
            rows: vec![course(u32::MAX, "Last")],
        };
        assert_eq!(full.resume_id(), None);
        assert!(matches!(
            following_id(u32::MAX),
            Err(StorageError::IdsExhausted)
        ));
        assert_eq!(following_id(41).unwrap(), 42);
    }
}
