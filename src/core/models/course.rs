//! Course model

use crate::core::store::Record;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a course record
pub type CourseId = u32;

/// A course the student has taken, as recorded in the store
///
/// Serialized as `{id, courseName, creditHour, letterGrade}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Identifier assigned by the store on insert; never reused
    pub id: CourseId,

    /// Display name (e.g., "Calculus I"). Several records may share a name.
    pub course_name: String,

    /// Credit hours, the weight of this course in the GPA.
    /// Taken as given; zero or negative values are not rejected here.
    pub credit_hour: i32,

    /// Letter grade as entered (e.g., "B+"). Not checked against the grade scale.
    pub letter_grade: String,
}

impl Course {
    /// Create a course record
    ///
    /// # Arguments
    /// * `id` - Store-assigned identifier
    /// * `course_name` - Course display name
    /// * `credit_hour` - Credit hours
    /// * `letter_grade` - Letter grade symbol
    #[must_use]
    pub const fn new(
        id: CourseId,
        course_name: String,
        credit_hour: i32,
        letter_grade: String,
    ) -> Self {
        Self {
            id,
            course_name,
            credit_hour,
            letter_grade,
        }
    }

    /// Whether the course name contains `query`, ignoring case.
    ///
    /// An empty query matches every course.
    #[must_use]
    pub fn name_contains(&self, query: &str) -> bool {
        self.course_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }

    /// Compare everything except the store-assigned id
    #[must_use]
    pub fn same_record(&self, other: &Self) -> bool {
        self.course_name == other.course_name
            && self.credit_hour == other.credit_hour
            && self.letter_grade == other.letter_grade
    }
}

impl Record for Course {
    fn id(&self) -> u32 {
        self.id
    }
}
