use crate::grading::manager::GradeManager;
use crate::grading::utility::mean;

/// Maps percentages onto letter grades and 4.0-scale GPA points.
///
/// Each tier starts at an inclusive lower bound; fractional percentages fall
/// into the tier whose bound they have reached (92.5 is `A-`).
///
/// | Percentage | Letter | Points |
/// |------------|--------|--------|
/// | >= 93      | A      | 4.0    |
/// | >= 90      | A-     | 3.7    |
/// | >= 87      | B+     | 3.3    |
/// | >= 83      | B      | 3.0    |
/// | >= 80      | B-     | 2.7    |
/// | >= 77      | C+     | 2.3    |
/// | >= 73      | C      | 2.0    |
/// | >= 70      | C-     | 1.7    |
/// | >= 67      | D+     | 1.3    |
/// | >= 60      | D      | 1.0    |
/// | < 60       | F      | 0.0    |
#[derive(Debug, Default, Clone, Copy)]
pub struct GpaCalculator;

fn tier(pct: f64) -> (&'static str, f64) {
    match pct {
        p if p >= 93.0 => ("A", 4.0),
        p if p >= 90.0 => ("A-", 3.7),
        p if p >= 87.0 => ("B+", 3.3),
        p if p >= 83.0 => ("B", 3.0),
        p if p >= 80.0 => ("B-", 2.7),
        p if p >= 77.0 => ("C+", 2.3),
        p if p >= 73.0 => ("C", 2.0),
        p if p >= 70.0 => ("C-", 1.7),
        p if p >= 67.0 => ("D+", 1.3),
        p if p >= 60.0 => ("D", 1.0),
        _ => ("F", 0.0),
    }
}

impl GpaCalculator {
    pub fn new() -> Self {
        GpaCalculator
    }

    pub fn letter_grade(pct: f64) -> &'static str {
        tier(pct).0
    }

    pub fn percentage_to_gpa(pct: f64) -> f64 {
        tier(pct).1
    }

    /// GPA points of the student's overall average.
    pub fn student_gpa(manager: &GradeManager, student_id: &str) -> f64 {
        Self::percentage_to_gpa(manager.calculate_overall_average(student_id))
    }

    /// Mean of the GPA points earned on each individual grade. 0.0 with no grades.
    pub fn cumulative_gpa(manager: &GradeManager, student_id: &str) -> f64 {
        let points: Vec<f64> = manager
            .grades_for(student_id)
            .map(|g| Self::percentage_to_gpa(g.score()))
            .collect();
        mean(&points)
    }
}
