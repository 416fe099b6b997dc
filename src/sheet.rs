//! CSV grade-sheet import.
//!
//! A sheet has the header `student_id,subject_code,subject_name,category,score`.
//! Rows sharing a `subject_code` share one [`Subject`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::grading::manager::GradeManager;
use crate::model::{Grade, Subject, SubjectCategory};

#[derive(Debug, Deserialize)]
struct SheetRow {
    student_id: String,
    subject_code: String,
    subject_name: String,
    category: SubjectCategory,
    score: f64,
}

/// Builds a [`GradeManager`] from CSV data, preserving row order.
///
/// # Errors
///
/// Fails on malformed CSV, an unknown category, or a score outside `0..=100`.
/// The error names the offending line.
pub fn parse_sheet<R: Read>(reader: R) -> Result<GradeManager> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut subjects: HashMap<String, Arc<Subject>> = HashMap::new();
    let mut manager = GradeManager::new();

    for (i, row) in rdr.deserialize::<SheetRow>().enumerate() {
        let line = i + 2;
        let row = row.with_context(|| format!("malformed grade sheet row at line {line}"))?;

        let subject = subjects
            .entry(row.subject_code.clone())
            .or_insert_with(|| {
                Arc::new(Subject::new(&row.subject_name, &row.subject_code, row.category))
            })
            .clone();

        if subject.category() != row.category || subject.name() != row.subject_name {
            warn!(
                line,
                subject_code = %row.subject_code,
                "Subject redefined with different name or category, keeping first definition"
            );
        }

        let grade = Grade::new(&row.student_id, subject, row.score)
            .with_context(|| format!("rejected grade at line {line}"))?;
        manager.add_grade(grade);
    }

    debug!(subjects = subjects.len(), "Grade sheet parsed");
    Ok(manager)
}

/// Reads and parses the grade sheet at `path`.
pub fn load_sheet(path: &str) -> Result<GradeManager> {
    let file =
        std::fs::File::open(path).with_context(|| format!("failed to open grade sheet {path}"))?;
    let manager = parse_sheet(file)?;
    info!(path, grades = manager.grade_count(), "Loaded grade sheet");
    Ok(manager)
}
