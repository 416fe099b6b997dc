use std::sync::{Arc, OnceLock};

use uuid::Uuid;

use crate::error::GradeError;
use crate::model::subject::Subject;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Checks that `score` lies within `0..=100`.
///
/// # Errors
///
/// Returns [`GradeError::InvalidGrade`] carrying the offending value, including
/// for `NaN`.
pub fn validate_grade(score: f64) -> Result<(), GradeError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(GradeError::InvalidGrade { score })
    }
}

/// A single scored assessment of one student in one subject.
///
/// Clones are the same grade: cloning assigns the id first if needed, so the
/// original and the clone always report the same `grade_id`.
#[derive(Debug)]
pub struct Grade {
    student_id: String,
    subject: Arc<Subject>,
    score: f64,
    grade_id: OnceLock<String>,
}

impl Grade {
    /// Creates a grade, rejecting out-of-range scores before the value exists.
    pub fn new(student_id: &str, subject: Arc<Subject>, score: f64) -> Result<Self, GradeError> {
        validate_grade(score)?;
        Ok(Grade {
            student_id: student_id.to_string(),
            subject,
            score,
            grade_id: OnceLock::new(),
        })
    }

    /// Replaces the score after re-applying the bounds check.
    ///
    /// On error the previously stored score is kept.
    pub fn record_grade(&mut self, score: f64) -> Result<(), GradeError> {
        validate_grade(score)?;
        self.score = score;
        Ok(())
    }

    /// Returns the grade id, assigning one on first call.
    pub fn grade_id(&self) -> &str {
        self.grade_id
            .get_or_init(|| format!("GRD-{}", Uuid::new_v4().simple()))
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl Clone for Grade {
    fn clone(&self) -> Self {
        Grade {
            student_id: self.student_id.clone(),
            subject: Arc::clone(&self.subject),
            score: self.score,
            grade_id: OnceLock::from(self.grade_id().to_string()),
        }
    }
}
