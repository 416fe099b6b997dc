use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;

use crate::model::{Student, StudentType};

#[derive(Debug, Deserialize)]
struct RosterEntry {
    student_id: String,
    name: String,
    age: u32,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    student_type: StudentType,
}

/// Students known to the gradebook.
///
/// Stored as a JSON array on disk:
/// ```json
/// [
///   { "student_id": "STU001", "name": "Ama Mensah", "age": 19,
///     "email": "ama@school.edu", "phone": "555-0101", "student_type": "honors" }
/// ]
/// ```
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Loads the roster from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read roster {path}"))?;
        Self::from_json(&content).with_context(|| format!("invalid roster {path}"))
    }

    /// Parses a roster document. Student ids must be unique.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: Vec<RosterEntry> = serde_json::from_str(content)?;

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.student_id.as_str()) {
                bail!("duplicate student id in roster: {}", entry.student_id);
            }
        }

        let students = entries
            .into_iter()
            .map(|e| {
                Student::with_id(&e.student_id, &e.name, e.age, &e.email, &e.phone, e.student_type)
            })
            .collect();
        Ok(Self { students })
    }

    pub fn get(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id() == student_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
