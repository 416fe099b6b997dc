//! Rendering and export of per-student summaries.
//!
//! [`SummaryTable`] is the human-readable class overview printed by the CLI.
//! [`to_json`] and [`write_csv`] are the machine-readable exports.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fmt;
use std::fs::OpenOptions;
use tracing::debug;

use crate::grading::types::StudentSummary;

const HEADINGS: [&str; 9] = [
    "STUDENT", "GRADES", "CORE", "ELECTIVE", "CORE AVG", "ELEC AVG", "OVERALL", "LETTER", "GPA",
];

/// Class overview: one line per student with counts, averages, letter and GPA.
pub struct SummaryTable<'a> {
    summaries: &'a [StudentSummary],
}

impl<'a> SummaryTable<'a> {
    pub fn new(summaries: &'a [StudentSummary]) -> Self {
        SummaryTable { summaries }
    }
}

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.summaries.is_empty() {
            return writeln!(f, "No students graded");
        }

        let [id, n, core, elective, core_avg, elec_avg, overall, letter, gpa] = HEADINGS;
        writeln!(
            f,
            "{id:<10}{n:>7}{core:>6}{elective:>10}{core_avg:>10}{elec_avg:>10}{overall:>9}{letter:>8}{gpa:>6}"
        )?;

        for s in self.summaries {
            writeln!(
                f,
                "{:<10}{:>7}{:>6}{:>10}{:>10.2}{:>10.2}{:>9.2}{:>8}{:>6.1}",
                s.student_id,
                s.total_grades,
                s.core_grades,
                s.elective_grades,
                s.core_average,
                s.elective_average,
                s.overall_average,
                s.letter_grade,
                s.gpa
            )?;
        }

        writeln!(f, "Students: {}", self.summaries.len())
    }
}

/// Pretty-printed JSON array of summaries.
pub fn to_json(summaries: &[StudentSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

/// Appends summaries as CSV rows to `path`, returning the number of rows written.
///
/// The header row is only emitted when the file is new or empty, so repeated
/// exports accumulate under a single header.
pub fn write_csv(path: &str, summaries: &[StudentSummary]) -> Result<usize> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open summary export {path}"))?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    for summary in summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;

    debug!(path, rows = summaries.len(), needs_header, "Exported summaries");
    Ok(summaries.len())
}
