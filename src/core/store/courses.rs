//! Course store
//!
//! Owns the canonical, insertion-ordered list of courses. Writes go to the
//! storage engine first and reach the in-memory view only once the engine
//! accepted them, so a read issued after a successful write always sees it.
//!
//! Matching rules:
//! - [`CourseStore::find_by_name`] is a case-insensitive substring match;
//!   an empty query matches every course.
//! - [`CourseStore::delete_by_name`] removes exact, case-sensitive matches only.

use super::{following_id, MemoryStorage, Storage, StorageError};
use crate::core::models::{Course, CourseId};
use logger::{debug, error, info};

/// Change notifications delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent<'a> {
    /// The full course list after an insert or delete
    CoursesChanged(&'a [Course]),
    /// The result of the latest search
    SearchResults(&'a [Course]),
}

/// Handle returned by [`CourseStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&StoreEvent<'_>)>;

/// The authoritative collection of course records
pub struct CourseStore<S: Storage<Course>> {
    storage: S,
    courses: Vec<Course>,
    // None once the id range is used up
    next_id: Option<CourseId>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl CourseStore<MemoryStorage<Course>> {
    /// Empty store that keeps nothing beyond the process
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            storage: MemoryStorage::new(),
            courses: Vec::new(),
            next_id: Some(1),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }
}

impl<S: Storage<Course>> CourseStore<S> {
    /// Build the store over `storage`, loading what it already holds
    ///
    /// # Errors
    /// Returns an error if the engine cannot be read
    pub fn open(storage: S) -> Result<Self, StorageError> {
        let table = storage.query_all()?;
        let next_id = table.resume_id();
        debug!(
            "Course store opened with {} courses (next id {next_id:?})",
            table.rows.len()
        );
        Ok(Self {
            storage,
            courses: table.rows,
            next_id,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Record a new course and return it with its assigned id
    ///
    /// Duplicate names are allowed (retakes). Credit hours and grade are
    /// stored as given.
    ///
    /// # Errors
    /// Returns `IdsExhausted` once every id is taken, or an error if the
    /// engine rejects the write; the store is unchanged either way.
    pub fn insert(
        &mut self,
        course_name: impl Into<String>,
        credit_hour: i32,
        letter_grade: impl Into<String>,
    ) -> Result<Course, StorageError> {
        let course_name = course_name.into();
        let Some(id) = self.next_id else {
            error!("No ids left for course '{course_name}'");
            return Err(StorageError::IdsExhausted);
        };
        let course = Course::new(id, course_name, credit_hour, letter_grade.into());
        let following = following_id(id).inspect_err(|e| {
            error!("Failed to insert course '{}': {e}", course.course_name);
        })?;

        if let Err(e) = self.storage.insert(&course, following) {
            error!("Failed to insert course '{}': {e}", course.course_name);
            return Err(e);
        }

        self.next_id = Some(following);
        self.courses.push(course.clone());
        info!(
            "Inserted course #{} '{}' ({} credits, grade {})",
            course.id, course.course_name, course.credit_hour, course.letter_grade
        );
        self.notify(&StoreEvent::CoursesChanged(&self.courses));
        Ok(course)
    }

    /// Courses whose name contains `query`, ignoring case, in insertion order
    ///
    /// The result is an independent copy. Subscribers receive it as
    /// [`StoreEvent::SearchResults`].
    pub fn find_by_name(&self, query: &str) -> Vec<Course> {
        let results: Vec<Course> = self
            .courses
            .iter()
            .filter(|c| c.name_contains(query))
            .cloned()
            .collect();
        debug!("Search '{query}' matched {} courses", results.len());
        self.notify(&StoreEvent::SearchResults(&results));
        results
    }

    /// Remove every course named exactly `name`; returns how many were removed
    ///
    /// Remaining courses keep their ids.
    ///
    /// # Errors
    /// Returns an error if the engine rejects the write; the store is unchanged.
    pub fn delete_by_name(&mut self, name: &str) -> Result<usize, StorageError> {
        let removed = match self.storage.delete_where(&|c: &Course| c.course_name == name) {
            Ok(removed) => removed,
            Err(e) => {
                error!("Failed to delete courses named '{name}': {e}");
                return Err(e);
            }
        };

        self.courses.retain(|c| c.course_name != name);
        if removed > 0 {
            info!("Deleted {removed} course(s) named '{name}'");
            self.notify(&StoreEvent::CoursesChanged(&self.courses));
        } else {
            debug!("No course named '{name}' to delete");
        }
        Ok(removed)
    }

    /// Every course in insertion order, as an independent copy
    #[must_use]
    pub fn list_all(&self) -> Vec<Course> {
        self.courses.clone()
    }

    /// Borrow the current snapshot without copying
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the store holds no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Register `observer` for change notifications
    pub fn subscribe(&mut self, observer: impl Fn(&StoreEvent<'_>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self, event: &StoreEvent<'_>) {
        for (_, observer) in &self.observers {
            observer(event);
        }
    }
}

impl Default for CourseStore<MemoryStorage<Course>> {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::Table;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn seeded() -> CourseStore<MemoryStorage<Course>> {
        let mut store = CourseStore::in_memory();
        store.insert("Calculus I", 4, "B+").unwrap();
        store.insert("Linear Algebra", 3, "A").unwrap();
        store.insert("Calculus II", 4, "C").unwrap();
        store
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let store = seeded();
        let ids: Vec<CourseId> = store.courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_returns_stored_record() {
        let mut store = CourseStore::in_memory();
        let course = store.insert("Ethics", 3, "A-").unwrap();

        assert_eq!(course, Course::new(1, "Ethics".to_string(), 3, "A-".to_string()));
        assert_eq!(store.list_all(), vec![course]);
    }

    #[test]
    fn test_insert_accepts_unvalidated_values() {
        let mut store = CourseStore::in_memory();
        store.insert("Seminar", 0, "P").unwrap();
        store.insert("Audit", -2, "").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_substring_ignores_case() {
        let store = seeded();
        let names: Vec<String> = store
            .find_by_name("calc")
            .into_iter()
            .map(|c| c.course_name)
            .collect();
        assert_eq!(names, vec!["Calculus I", "Calculus II"]);
    }

    #[test]
    fn test_find_empty_query_returns_all() {
        let store = seeded();
        assert_eq!(store.find_by_name(""), store.list_all());
    }

    #[test]
    fn test_find_no_match_is_empty() {
        assert!(seeded().find_by_name("History").is_empty());
    }

    #[test]
    fn test_delete_is_exact_match() {
        let mut store = seeded();

        assert_eq!(store.delete_by_name("Calculus").unwrap(), 0);
        assert_eq!(store.delete_by_name("calculus i").unwrap(), 0);
        assert_eq!(store.delete_by_name("Calculus I").unwrap(), 1);

        let names: Vec<&str> = store
            .courses()
            .iter()
            .map(|c| c.course_name.as_str())
            .collect();
        assert_eq!(names, vec!["Linear Algebra", "Calculus II"]);
    }

    #[test]
    fn test_delete_keeps_ids_and_never_reuses() {
        let mut store = seeded();
        store.delete_by_name("Calculus II").unwrap();
        let next = store.insert("Topology", 3, "B").unwrap();

        let ids: Vec<CourseId> = store.courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert_eq!(next.id, 4);
    }

    #[test]
    fn test_delete_removes_duplicates() {
        let mut store = CourseStore::in_memory();
        store.insert("Algebra", 3, "F").unwrap();
        store.insert("Algebra", 3, "B").unwrap();

        assert_eq!(store.delete_by_name("Algebra").unwrap(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_subscribers_see_changes_and_searches() {
        let mut store = CourseStore::in_memory();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let log = Rc::clone(&seen);
        let sub = store.subscribe(move |event| {
            let entry = match event {
                StoreEvent::CoursesChanged(all) => format!("all:{}", all.len()),
                StoreEvent::SearchResults(found) => format!("found:{}", found.len()),
            };
            log.borrow_mut().push(entry);
        });

        store.insert("Art", 3, "A").unwrap();
        store.insert("Art History", 3, "B").unwrap();
        store.find_by_name("art");
        store.delete_by_name("Nothing").unwrap();
        store.delete_by_name("Art").unwrap();

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.insert("Music", 3, "A").unwrap();

        assert_eq!(
            *seen.borrow(),
            vec!["all:1", "all:2", "found:2", "all:1"]
        );
    }

    #[test]
    fn test_open_resumes_ids_from_storage() {
        let mut storage = MemoryStorage::new();
        storage
            .insert(&Course::new(5, "Old".to_string(), 3, "A".to_string()), 6)
            .unwrap();

        let mut store = CourseStore::open(storage).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.insert("New", 3, "B").unwrap().id, 6);
    }

    #[test]
    fn test_insert_grows_by_one_matching_record() {
        let mut store = seeded();
        let before = store.list_all();

        let inserted = store.insert("Linear Algebra", 3, "A").unwrap();
        let after = store.list_all();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        let wanted = Course::new(0, "Linear Algebra".to_string(), 3, "A".to_string());
        assert!(after.iter().any(|c| c.same_record(&wanted) && c.id == inserted.id));
        // the earlier course of the same name is still there under its own id
        assert_eq!(after.iter().filter(|c| c.same_record(&wanted)).count(), 2);
    }

    #[test]
    fn test_open_with_highest_id_taken() {
        let storage = MemoryStorage::with_table(Table {
            next_id: 1,
            rows: vec![Course::new(u32::MAX, "Last".to_string(), 3, "A".to_string())],
        });

        let mut store = CourseStore::open(storage).unwrap();
        assert_eq!(store.len(), 1);

        let err = store.insert("New", 3, "A").unwrap_err();
        assert!(matches!(err, StorageError::IdsExhausted));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_with_last_id_is_rejected() {
        let storage = MemoryStorage::with_table(Table {
            next_id: u32::MAX,
            rows: Vec::new(),
        });

        let mut store = CourseStore::open(storage).unwrap();
        let err = store.insert("New", 3, "A").unwrap_err();

        assert!(matches!(err, StorageError::IdsExhausted));
        assert!(store.is_empty());
        assert!(store.find_by_name("New").is_empty());
    }
}
