use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a subject counts towards when averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCategory {
    #[serde(alias = "Core", alias = "CORE")]
    Core,
    #[serde(alias = "Elective", alias = "ELECTIVE")]
    Elective,
}

impl fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectCategory::Core => f.pad("Core"),
            SubjectCategory::Elective => f.pad("Elective"),
        }
    }
}

impl FromStr for SubjectCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(SubjectCategory::Core),
            "elective" => Ok(SubjectCategory::Elective),
            other => anyhow::bail!("unknown subject category: {other}"),
        }
    }
}

/// A named subject. Shared read-only between the grades recorded against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    name: String,
    code: String,
    category: SubjectCategory,
}

impl Subject {
    pub fn new(name: &str, code: &str, category: SubjectCategory) -> Self {
        Subject {
            name: name.to_string(),
            code: code.to_string(),
            category,
        }
    }

    pub fn core(name: &str, code: &str) -> Self {
        Self::new(name, code, SubjectCategory::Core)
    }

    pub fn elective(name: &str, code: &str) -> Self {
        Self::new(name, code, SubjectCategory::Elective)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn category(&self) -> SubjectCategory {
        self.category
    }
}
