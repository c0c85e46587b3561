//! GPA command handler

use super::course::open_store;
use course_gpa::config::Config;
use course_gpa::core::{format_gpa, GpaSummary};
use logger::{debug, verbose};

/// Compute and print the cumulative GPA over every recorded course
pub fn run(config: &Config) {
    let store = open_store(config);
    let summary = GpaSummary::from_courses(store.courses());
    debug!(
        "GPA over {} courses: {} quality points / {} credit hours",
        store.len(),
        summary.quality_points,
        summary.total_credit_hours
    );

    println!("Current GPA: {}", display_value(store.is_empty(), &summary));
    verbose!("Courses: {}", store.len());
    verbose!("Credit hours: {}", summary.total_credit_hours);
    verbose!("Quality points: {:.2}", summary.quality_points);
}

/// `--` until at least one course is recorded
fn display_value(no_courses: bool, summary: &GpaSummary) -> String {
    format_gpa((!no_courses).then_some(summary.gpa))
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_gpa::core::models::Course;

    #[test]
    fn test_display_without_courses() {
        let summary = GpaSummary::from_courses(&[]);
        assert_eq!(display_value(true, &summary), "--");
    }

    #[test]
    fn test_display_with_courses() {
        let courses = vec![
            Course::new(1, "Art".to_string(), 3, "A".to_string()),
            Course::new(2, "Law".to_string(), 3, "B".to_string()),
        ];
        let summary = GpaSummary::from_courses(&courses);
        assert_eq!(display_value(false, &summary), "3.50");
    }
}
