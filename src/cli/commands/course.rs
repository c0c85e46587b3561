//! Course command handler

use super::{exit_on_storage_error, open_storage, DynStorage};
use crate::args::CourseSubcommand;
use course_gpa::config::Config;
use course_gpa::core::models::Course;
use course_gpa::core::store::CourseStore;
use course_gpa::core::LetterGrade;
use logger::{info, verbose};
use std::fmt::Write;

/// Course store over the configured engine
pub type Courses = CourseStore<DynStorage<Course>>;

/// Open the configured course store, exiting on failure
pub fn open_store(config: &Config) -> Courses {
    let path = config.courses_path();
    open_storage::<Course>(config, &path)
        .and_then(CourseStore::open)
        .unwrap_or_else(|e| exit_on_storage_error("Failed to open course store", &e))
}

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, config: &Config) {
    let mut store = open_store(config);
    match subcommand {
        CourseSubcommand::Add {
            name,
            credit_hour,
            grade,
        } => handle_add(&mut store, &name, credit_hour, &grade),
        CourseSubcommand::Find { query } => handle_find(&store, &query),
        CourseSubcommand::Delete { name } => handle_delete(&mut store, &name),
        CourseSubcommand::List => print_courses(&store.list_all()),
    }
}

/// Check user input before it reaches the store
///
/// The grade is trimmed and upper-cased, then checked against the scale.
///
/// # Errors
/// Returns a message if the name is blank or the grade is not recognised
pub fn validate_input(name: &str, grade: &str) -> Result<LetterGrade, String> {
    if name.trim().is_empty() {
        return Err("Course name must not be empty".to_string());
    }
    grade.parse::<LetterGrade>()
}

fn handle_add(store: &mut Courses, name: &str, credit_hour: i32, grade: &str) {
    let grade = match validate_input(name, grade) {
        Ok(grade) => grade,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    match store.insert(name, credit_hour, grade.symbol()) {
        Ok(course) => {
            println!(
                "✓ Added #{} {} ({} credits, {})",
                course.id, course.course_name, course.credit_hour, course.letter_grade
            );
            verbose!("{} course(s) on record", store.len());
        }
        Err(e) => exit_on_storage_error("Failed to add course", &e),
    }
}

fn handle_find(store: &Courses, query: &str) {
    let results = store.find_by_name(query);
    if results.is_empty() {
        println!("No courses match '{query}'");
        return;
    }
    print_courses(&results);
}

fn handle_delete(store: &mut Courses, name: &str) {
    match store.delete_by_name(name) {
        Ok(0) => println!("No course named '{name}'"),
        Ok(removed) => {
            println!("✓ Deleted {removed} course(s) named '{name}'");
            info!("{} course(s) remain", store.len());
        }
        Err(e) => exit_on_storage_error("Failed to delete course", &e),
    }
}

/// Render courses as an aligned table
#[must_use]
pub fn render_table(courses: &[Course]) -> String {
    let width = courses
        .iter()
        .map(|c| c.course_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Course".len());

    let mut out = format!("{:<5} {:<width$} {:>6} {:>5}\n", "ID", "Course", "Credit", "Grade");
    for course in courses {
        let _ = writeln!(
            out,
            "{:<5} {:<width$} {:>6} {:>5}",
            course.id, course.course_name, course.credit_hour, course.letter_grade
        );
    }
    out
}

fn print_courses(courses: &[Course]) {
    if courses.is_empty() {
        println!("No courses recorded");
        return;
    }
    print!("{}", render_table(courses));
}
