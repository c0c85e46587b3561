//! Credit-weighted GPA computation
//!
//! `gpa = Σ(credit_hour × points) / Σ(credit_hour)` over all supplied courses.
//! Grades that are not on the scale count as 0.0 points for their credit
//! hours, and a zero credit-hour total yields 0.0. No rounding is applied;
//! see [`format_gpa`] for display.

use crate::core::grades::grade_points;
use crate::core::models::Course;

/// Totals behind a GPA value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaSummary {
    /// Sum of credit hours over all courses
    pub total_credit_hours: i64,
    /// Sum of `credit_hour × points`
    pub quality_points: f64,
    /// `quality_points / total_credit_hours`, or 0.0 when the total is zero
    pub gpa: f64,
}

impl GpaSummary {
    /// Summarize `(credit_hour, letter_grade)` pairs
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i32, &'a str)>,
    {
        let (total_credit_hours, quality_points) =
            pairs
                .into_iter()
                .fold((0_i64, 0.0_f64), |(hours, points), (credit, grade)| {
                    let weight = grade_points(grade).unwrap_or(0.0);
                    (
                        hours + i64::from(credit),
                        weight.mul_add(f64::from(credit), points),
                    )
                });

        let gpa = if total_credit_hours == 0 {
            0.0
        } else {
            quality_points / total_credit_hours as f64
        };

        Self {
            total_credit_hours,
            quality_points,
            gpa,
        }
    }

    /// Summarize a list of courses
    #[must_use]
    pub fn from_courses(courses: &[Course]) -> Self {
        Self::from_pairs(
            courses
                .iter()
                .map(|c| (c.credit_hour, c.letter_grade.as_str())),
        )
    }
}

/// GPA over `(credit_hour, letter_grade)` pairs
#[must_use]
pub fn weighted_gpa<'a, I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (i32, &'a str)>,
{
    GpaSummary::from_pairs(pairs).gpa
}

/// GPA over a list of courses. Pure; never fails.
#[must_use]
pub fn compute_gpa(courses: &[Course]) -> f64 {
    GpaSummary::from_courses(courses).gpa
}

/// Display form: `"--"` when there is no GPA yet, otherwise two decimals.
#[must_use]
pub fn format_gpa(gpa: Option<f64>) -> String {
    gpa.map_or_else(|| "--".to_string(), |value| format!("{value:.2}"))
}
