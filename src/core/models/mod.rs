//! Data models for `course_gpa`

pub mod course;
pub mod question;

pub use course::{Course, CourseId};
pub use question::{Choice, QuestionId, TrivialQuestion};
