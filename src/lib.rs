pub mod error;
pub mod grading;
pub mod model;
pub mod output;
pub mod roster;
pub mod sheet;

pub use error::GradeError;
pub use grading::gpa::GpaCalculator;
pub use grading::manager::GradeManager;
