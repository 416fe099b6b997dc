//! Text rendering of a student's grade history.

use std::fmt;

use crate::grading::manager::GradeManager;

const RULE_WIDTH: usize = 78;

/// Grade history of one student, rendered through [`fmt::Display`].
///
/// Lists every grade with its subject and score, followed by the total
/// and the core, elective and overall averages. A student without grades
/// gets a single "No grades recorded" line and a zero total.
pub struct GradeHistory<'a> {
    manager: &'a GradeManager,
    student_id: &'a str,
}

impl<'a> GradeHistory<'a> {
    pub fn new(manager: &'a GradeManager, student_id: &'a str) -> Self {
        GradeHistory {
            manager,
            student_id,
        }
    }
}

impl fmt::Display for GradeHistory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.manager.enrolled_subjects_count(self.student_id);

        if total == 0 {
            writeln!(f, "No grades recorded for this student")?;
            return writeln!(f, "Total Grades: 0");
        }

        writeln!(f, "GRADE HISTORY - {}", self.student_id)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "{:<38}{:<20}{:<10}{:>10}", "GRADE ID", "SUBJECT", "TYPE", "SCORE")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for grade in self.manager.grades_for(self.student_id) {
            writeln!(
                f,
                "{:<38}{:<20}{:<10}{:>9.1}%",
                grade.grade_id(),
                grade.subject().name(),
                grade.subject().category(),
                grade.score()
            )?;
        }

        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "Total Grades: {}", total)?;
        writeln!(
            f,
            "Core Subjects Average: {:.2}%",
            self.manager.calculate_core_average(self.student_id)
        )?;
        writeln!(
            f,
            "Elective Subjects Average: {:.2}%",
            self.manager.calculate_elective_average(self.student_id)
        )?;
        writeln!(
            f,
            "Overall Average: {:.2}%",
            self.manager.calculate_overall_average(self.student_id)
        )
    }
}
