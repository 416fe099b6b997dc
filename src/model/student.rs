use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::grading::manager::GradeManager;

/// Overall average an honors student needs to stay eligible.
pub const HONORS_THRESHOLD: f64 = 85.0;

static NEXT_STUDENT_NUMBER: AtomicU32 = AtomicU32::new(1);

fn next_student_id() -> String {
    let n = NEXT_STUDENT_NUMBER.fetch_add(1, Ordering::Relaxed);
    format!("STU{:03}", n)
}

/// Moves the generator past an externally assigned `STUnnn` id.
fn reserve_student_id(student_id: &str) {
    if let Some(n) = student_id
        .strip_prefix("STU")
        .and_then(|digits| digits.parse::<u32>().ok())
    {
        NEXT_STUDENT_NUMBER.fetch_max(n.saturating_add(1), Ordering::Relaxed);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentType {
    #[serde(alias = "Regular")]
    Regular,
    #[serde(alias = "Honors")]
    Honors,
}

impl StudentType {
    /// Minimum passing score for this kind of student.
    pub fn passing_grade(self) -> f64 {
        match self {
            StudentType::Regular => 50.0,
            StudentType::Honors => 60.0,
        }
    }
}

impl fmt::Display for StudentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentType::Regular => f.pad("Regular"),
            StudentType::Honors => f.pad("Honors"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Eligibility {
    Yes,
    No,
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eligibility::Yes => f.pad("Yes"),
            Eligibility::No => f.pad("No"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    student_id: String,
    name: String,
    age: u32,
    email: String,
    phone: String,
    student_type: StudentType,
}

impl Student {
    /// Creates a student with a freshly generated id (`STU001`, `STU002`, ...).
    pub fn new(name: &str, age: u32, email: &str, phone: &str, student_type: StudentType) -> Self {
        Self::with_id(&next_student_id(), name, age, email, phone, student_type)
    }

    /// Creates a student under an id assigned elsewhere, e.g. a roster file.
    ///
    /// Ids of the generated `STUnnn` form are reserved, so a later
    /// [`Student::new`] never hands out the same id.
    pub fn with_id(
        student_id: &str,
        name: &str,
        age: u32,
        email: &str,
        phone: &str,
        student_type: StudentType,
    ) -> Self {
        reserve_student_id(student_id);
        Student {
            student_id: student_id.to_string(),
            name: name.to_string(),
            age,
            email: email.to_string(),
            phone: phone.to_string(),
            student_type,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn student_type(&self) -> StudentType {
        self.student_type
    }

    pub fn passing_grade(&self) -> f64 {
        self.student_type.passing_grade()
    }

    pub fn is_passing(&self, score: f64) -> bool {
        score >= self.passing_grade()
    }

    /// Overall average of this student's grades held by `manager`.
    pub fn average_grade(&self, manager: &GradeManager) -> f64 {
        manager.calculate_overall_average(&self.student_id)
    }

    /// Honors students qualify with an overall average of at least 85.0.
    /// Regular students are never eligible.
    pub fn check_honors_eligibility(&self, manager: &GradeManager) -> Eligibility {
        match self.student_type {
            StudentType::Honors if self.average_grade(manager) >= HONORS_THRESHOLD => {
                Eligibility::Yes
            }
            _ => Eligibility::No,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Grade, Subject};
    use std::sync::Arc;

    fn manager_with(student_id: &str, scores: &[f64]) -> GradeManager {
        let subject = Arc::new(Subject::core("Mathematics", "MAT101"));
        let mut manager = GradeManager::new();
        for &score in scores {
            manager.add_grade(Grade::new(student_id, subject.clone(), score).unwrap());
        }
        manager
    }

    #[test]
    fn test_passing_grade_by_type() {
        let regular = Student::new("Ama", 19, "ama@school.edu", "555-0101", StudentType::Regular);
        let honors = Student::new("Kofi", 20, "kofi@school.edu", "555-0102", StudentType::Honors);

        assert_eq!(regular.passing_grade(), 50.0);
        assert_eq!(honors.passing_grade(), 60.0);
        assert!(regular.is_passing(55.0));
        assert!(!honors.is_passing(55.0));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Student::new("A", 18, "a@x.io", "1", StudentType::Regular);
        let b = Student::new("B", 18, "b@x.io", "2", StudentType::Regular);

        assert!(a.student_id().starts_with("STU"));
        assert_ne!(a.student_id(), b.student_id());
    }

    #[test]
    fn test_generated_ids_skip_assigned_ones() {
        let loaded = Student::with_id("STU700", "Adjoa", 19, "ad@x.io", "7", StudentType::Regular);
        let fresh = Student::new("Kojo", 19, "kj@x.io", "8", StudentType::Regular);

        let n: u32 = fresh.student_id()["STU".len()..].parse().unwrap();
        assert!(n > 700, "{} collides with {}", fresh.student_id(), loaded.student_id());
    }

    #[test]
    fn test_foreign_id_format_is_kept() {
        let student = Student::with_id("2024-0042", "Afia", 20, "af@x.io", "9", StudentType::Honors);
        assert_eq!(student.student_id(), "2024-0042");
    }

    #[test]
    fn test_honors_eligible_at_threshold() {
        let student = Student::with_id("STU900", "Esi", 21, "e@x.io", "3", StudentType::Honors);
        let manager = manager_with("STU900", &[90.0, 80.0]);

        assert_eq!(student.check_honors_eligibility(&manager), Eligibility::Yes);
        assert_eq!(student.check_honors_eligibility(&manager).to_string(), "Yes");
    }

    #[test]
    fn test_honors_not_eligible_below_threshold() {
        let student = Student::with_id("STU901", "Yaw", 21, "y@x.io", "4", StudentType::Honors);
        let manager = manager_with("STU901", &[80.0, 84.0]);

        assert_eq!(student.average_grade(&manager), 82.0);
        assert_eq!(student.check_honors_eligibility(&manager), Eligibility::No);
    }

    #[test]
    fn test_honors_not_eligible_without_grades() {
        let student = Student::with_id("STU902", "Abena", 22, "ab@x.io", "5", StudentType::Honors);
        let manager = GradeManager::new();

        assert_eq!(student.check_honors_eligibility(&manager).to_string(), "No");
    }

    #[test]
    fn test_regular_student_never_eligible() {
        let student = Student::with_id("STU903", "Kwame", 22, "k@x.io", "6", StudentType::Regular);
        let manager = manager_with("STU903", &[99.0, 100.0]);

        assert_eq!(student.check_honors_eligibility(&manager), Eligibility::No);
    }
}
