//! Course records, GPA computation and the trivia quiz

pub mod gpa;
pub mod grades;
pub mod models;
pub mod store;
pub mod trivia;

pub use gpa::{compute_gpa, format_gpa, weighted_gpa, GpaSummary};
pub use grades::{grade_points, LetterGrade};
