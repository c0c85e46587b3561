//! Shared library for `coursegpa`
//! Course records, GPA computation, storage and configuration used by the CLI

pub mod config;
pub mod core;

/// Returns the current version of the `course-gpa` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
