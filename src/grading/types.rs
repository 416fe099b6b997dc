//! Serializable results of the aggregation queries.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-student aggregate, exported as a JSON document or a CSV row.
#[derive(Debug, Default, Clone, Serialize)]
pub struct StudentSummary {
    pub generated_at: DateTime<Utc>,
    pub student_id: String,
    pub total_grades: usize,
    pub core_grades: usize,
    pub elective_grades: usize,

    // averages
    pub core_average: f64,
    pub elective_average: f64,
    pub overall_average: f64,
    pub score_stddev: f64,

    // derived from overall_average
    pub letter_grade: String,
    pub gpa: f64,
    pub cumulative_gpa: f64,
}
