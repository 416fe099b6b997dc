//! Domain records: subjects, grades and students.
//!
//! [`Subject`] and [`Student`] carry their category as a tag ([`SubjectCategory`],
//! [`StudentType`]); category-specific behaviour is a `match` on that tag.

pub mod grade;
pub mod student;
pub mod subject;

pub use grade::{Grade, validate_grade};
pub use student::{Eligibility, Student, StudentType};
pub use subject::{Subject, SubjectCategory};
