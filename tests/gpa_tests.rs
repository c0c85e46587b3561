//! Integration tests for GPA computation

use course_gpa::core::models::Course;
use course_gpa::core::{compute_gpa, format_gpa, grade_points, GpaSummary, LetterGrade};

const GRADES: [&str; 12] = [
    "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "D-", "F",
];

fn course(credit_hour: i32, grade: &str) -> Course {
    Course::new(0, "Course".to_string(), credit_hour, grade.to_string())
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A deterministic mix of credits and grades
fn transcript() -> Vec<Course> {
    (0_usize..24)
        .map(|i| {
            let credits = i32::try_from(1 + i % 5).expect("small credit value");
            course(credits, GRADES[(i * 7) % GRADES.len()])
        })
        .collect()
}

#[test]
fn gpa_stays_in_range_for_valid_grades() {
    let courses = transcript();
    for end in 1..=courses.len() {
        let gpa = compute_gpa(&courses[..end]);
        assert!((0.0..=4.0).contains(&gpa), "gpa {gpa} out of range");
    }
}

#[test]
fn gpa_ignores_course_order() {
    let courses = transcript();
    let mut reversed = courses.clone();
    reversed.reverse();
    let mut rotated = courses.clone();
    rotated.rotate_left(5);

    let gpa = compute_gpa(&courses);
    assert!(approx(gpa, compute_gpa(&reversed)));
    assert!(approx(gpa, compute_gpa(&rotated)));
}

#[test]
fn single_course_gpa_is_its_grade() {
    for symbol in GRADES {
        let expected = grade_points(symbol).expect("known grade");
        assert!(approx(compute_gpa(&[course(3, symbol)]), expected));
    }
}

#[test]
fn documented_examples() {
    assert!(approx(compute_gpa(&[]), 0.0));
    assert!(approx(compute_gpa(&[course(3, "A")]), 4.0));
    assert!(approx(compute_gpa(&[course(3, "A"), course(3, "B")]), 3.5));
    assert!(approx(compute_gpa(&[course(4, "A"), course(2, "C")]), 10.0 / 3.0));
    assert!(approx(compute_gpa(&[course(3, "Z")]), 0.0));
    assert!(approx(compute_gpa(&[course(3, "b+")]), 3.33));
}

#[test]
fn summary_matches_gpa() {
    let courses = transcript();
    let summary = GpaSummary::from_courses(&courses);

    let hours: i64 = courses.iter().map(|c| i64::from(c.credit_hour)).sum();
    assert_eq!(summary.total_credit_hours, hours);
    assert!(approx(summary.gpa, compute_gpa(&courses)));
}

#[test]
fn letter_grades_cover_the_table() {
    assert_eq!(LetterGrade::ALL.len(), GRADES.len());
    for (grade, symbol) in LetterGrade::ALL.iter().zip(GRADES) {
        assert_eq!(grade.symbol(), symbol);
        assert_eq!(symbol.parse::<LetterGrade>(), Ok(*grade));
    }
    assert!("E".parse::<LetterGrade>().is_err());
}

#[test]
fn formatting_for_display() {
    assert_eq!(format_gpa(None), "--");
    assert_eq!(format_gpa(Some(compute_gpa(&[course(4, "A"), course(2, "C")]))), "3.33");
}
