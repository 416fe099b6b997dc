//! Error type for grade validation.

use thiserror::Error;

/// Raised whenever a score falls outside the accepted `0..=100` range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    #[error("Invalid grade: {score}. Grade must be between 0 and 100")]
    InvalidGrade { score: f64 },
}
