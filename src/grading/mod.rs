//! Grade aggregation and GPA conversion.
//!
//! [`manager::GradeManager`] owns the append-only list of recorded grades and
//! answers per-student aggregate queries; [`gpa::GpaCalculator`] maps
//! percentages onto letter grades and GPA points.

pub mod gpa;
pub mod manager;
pub mod report;
pub mod types;
pub mod utility;
