use chrono::Utc;
use tracing::debug;

use crate::grading::gpa::GpaCalculator;
use crate::grading::report::GradeHistory;
use crate::grading::types::StudentSummary;
use crate::grading::utility::{mean, stddev};
use crate::model::{Grade, SubjectCategory};

/// Owns every recorded [`Grade`] in insertion order.
///
/// The list is append-only: [`GradeManager::add_grade`] is the only mutation.
/// Unknown student ids are not an error; they produce empty selections, so
/// averages come back as 0.0 and counts as 0.
#[derive(Debug, Default, Clone)]
pub struct GradeManager {
    grades: Vec<Grade>,
}

impl GradeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_grade(&mut self, grade: Grade) {
        debug!(
            student_id = grade.student_id(),
            subject = grade.subject().code(),
            score = grade.score(),
            "Recording grade"
        );
        self.grades.push(grade);
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Read-only view of all grades, oldest first.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Grades recorded for `student_id`, in insertion order.
    pub fn grades_for<'a>(&'a self, student_id: &'a str) -> impl Iterator<Item = &'a Grade> + 'a {
        self.grades
            .iter()
            .filter(move |g| g.student_id() == student_id)
    }

    fn scores(&self, student_id: &str, category: Option<SubjectCategory>) -> Vec<f64> {
        self.grades_for(student_id)
            .filter(|g| category.is_none_or(|c| g.subject().category() == c))
            .map(Grade::score)
            .collect()
    }

    pub fn calculate_core_average(&self, student_id: &str) -> f64 {
        mean(&self.scores(student_id, Some(SubjectCategory::Core)))
    }

    pub fn calculate_elective_average(&self, student_id: &str) -> f64 {
        mean(&self.scores(student_id, Some(SubjectCategory::Elective)))
    }

    /// Flat mean over every grade of the student, whatever the category.
    pub fn calculate_overall_average(&self, student_id: &str) -> f64 {
        mean(&self.scores(student_id, None))
    }

    /// Number of grade records for the student. A subject graded twice counts twice.
    pub fn enrolled_subjects_count(&self, student_id: &str) -> usize {
        self.grades_for(student_id).count()
    }

    /// Renders the student's grade history with category and overall averages.
    pub fn view_grades_by_student(&self, student_id: &str) -> String {
        GradeHistory::new(self, student_id).to_string()
    }

    /// Distinct student ids, in the order they were first graded.
    pub fn student_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for grade in &self.grades {
            if !ids.contains(&grade.student_id()) {
                ids.push(grade.student_id());
            }
        }
        ids
    }

    pub fn student_summary(&self, student_id: &str) -> StudentSummary {
        let all = self.scores(student_id, None);
        let core = self.scores(student_id, Some(SubjectCategory::Core));
        let elective = self.scores(student_id, Some(SubjectCategory::Elective));

        let overall_average = mean(&all);

        StudentSummary {
            generated_at: Utc::now(),
            student_id: student_id.to_string(),
            total_grades: all.len(),
            core_grades: core.len(),
            elective_grades: elective.len(),
            core_average: mean(&core),
            elective_average: mean(&elective),
            overall_average,
            score_stddev: stddev(&all),
            letter_grade: GpaCalculator::letter_grade(overall_average).to_string(),
            gpa: GpaCalculator::percentage_to_gpa(overall_average),
            cumulative_gpa: GpaCalculator::cumulative_gpa(self, student_id),
        }
    }

    pub fn summaries(&self) -> Vec<StudentSummary> {
        self.student_ids()
            .into_iter()
            .map(|id| self.student_summary(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Subject;
    use std::sync::Arc;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_manager() -> GradeManager {
        let maths = Arc::new(Subject::core("Mathematics", "MAT101"));
        let english = Arc::new(Subject::core("English", "ENG101"));
        let science = Arc::new(Subject::core("Science", "SCI101"));
        let music = Arc::new(Subject::elective("Music", "MUS101"));
        let art = Arc::new(Subject::elective("Art", "ART101"));

        let mut manager = GradeManager::new();
        for (subject, score) in [(maths, 80.0), (english, 90.0), (science, 70.0)] {
            manager.add_grade(Grade::new("STU001", subject, score).unwrap());
        }
        for (subject, score) in [(music, 85.0), (art, 95.0)] {
            manager.add_grade(Grade::new("STU001", subject, score).unwrap());
        }
        manager
    }

    #[test]
    fn test_empty_manager() {
        let manager = GradeManager::new();

        assert_eq!(manager.grade_count(), 0);
        assert!(manager.grades().is_empty());
        assert_eq!(manager.calculate_core_average("STU001"), 0.0);
        assert_eq!(manager.calculate_elective_average("STU001"), 0.0);
        assert_eq!(manager.calculate_overall_average("STU001"), 0.0);
        assert_eq!(manager.enrolled_subjects_count("STU001"), 0);
    }

    #[test]
    fn test_add_grade_appends_in_order() {
        let subject = Arc::new(Subject::core("Mathematics", "MAT101"));
        let mut manager = GradeManager::new();

        for (i, score) in [70.0, 60.0, 90.0].into_iter().enumerate() {
            manager.add_grade(Grade::new("STU001", subject.clone(), score).unwrap());
            assert_eq!(manager.grade_count(), i + 1);
        }

        let scores: Vec<f64> = manager.grades().iter().map(Grade::score).collect();
        assert_eq!(scores, vec![70.0, 60.0, 90.0]);
    }

    #[test]
    fn test_category_averages() {
        let manager = sample_manager();

        assert_eq!(manager.calculate_core_average("STU001"), 80.0);
        assert_eq!(manager.calculate_elective_average("STU001"), 90.0);
    }

    #[test]
    fn test_overall_average_is_flat_mean() {
        let manager = sample_manager();

        // (80 + 90 + 70 + 85 + 95) / 5, not (80 + 90) / 2
        assert_eq!(manager.calculate_overall_average("STU001"), 84.0);
    }

    #[test]
    fn test_only_elective_grades() {
        let music = Arc::new(Subject::elective("Music", "MUS101"));
        let mut manager = GradeManager::new();
        manager.add_grade(Grade::new("STU002", music, 77.0).unwrap());

        assert_eq!(manager.calculate_core_average("STU002"), 0.0);
        assert_eq!(manager.calculate_elective_average("STU002"), 77.0);
    }

    #[test]
    fn test_enrolled_count_counts_records() {
        let maths = Arc::new(Subject::core("Mathematics", "MAT101"));
        let mut manager = GradeManager::new();
        manager.add_grade(Grade::new("STU001", maths.clone(), 50.0).unwrap());
        manager.add_grade(Grade::new("STU002", maths.clone(), 60.0).unwrap());
        manager.add_grade(Grade::new("STU001", maths, 70.0).unwrap());

        assert_eq!(manager.enrolled_subjects_count("STU001"), 2);
        assert_eq!(manager.enrolled_subjects_count("STU002"), 1);
        assert_eq!(manager.enrolled_subjects_count("STU003"), 0);
    }

    #[test]
    fn test_other_students_do_not_leak() {
        let mut manager = sample_manager();
        let maths = Arc::new(Subject::core("Mathematics", "MAT101"));
        manager.add_grade(Grade::new("STU002", maths, 10.0).unwrap());

        assert_eq!(manager.calculate_overall_average("STU001"), 84.0);
        assert_eq!(manager.calculate_overall_average("STU002"), 10.0);
    }

    #[test]
    fn test_student_ids_first_seen_order() {
        let maths = Arc::new(Subject::core("Mathematics", "MAT101"));
        let mut manager = GradeManager::new();
        for id in ["STU003", "STU001", "STU003", "STU002"] {
            manager.add_grade(Grade::new(id, maths.clone(), 50.0).unwrap());
        }

        assert_eq!(manager.student_ids(), vec!["STU003", "STU001", "STU002"]);
    }

    #[test]
    fn test_student_summary() {
        let manager = sample_manager();
        let summary = manager.student_summary("STU001");

        assert_eq!(summary.total_grades, 5);
        assert_eq!(summary.core_grades, 3);
        assert_eq!(summary.elective_grades, 2);
        assert_eq!(summary.overall_average, 84.0);
        assert_eq!(summary.letter_grade, "B");
        assert_eq!(summary.gpa, 3.0);
        // B-(2.7) + A-(3.7) + C-(1.7) + B(3.0) + A(4.0)
        assert!(approx_eq(summary.cumulative_gpa, 15.1 / 5.0));
        assert!(approx_eq(summary.score_stddev, 74.0_f64.sqrt()));
    }

    #[test]
    fn test_summaries_cover_each_student() {
        let mut manager = sample_manager();
        let maths = Arc::new(Subject::core("Mathematics", "MAT101"));
        manager.add_grade(Grade::new("STU002", maths, 65.0).unwrap());

        let summaries = manager.summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].student_id, "STU002");
        assert_eq!(summaries[1].letter_grade, "D");
    }
}
