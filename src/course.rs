//! Course entries and the validation applied before any grade lookup.

use serde::Deserialize;
use thiserror::Error;

/// One course's submitted result: a marks percentage and its credit weight.
///
/// Immutable once submitted; rows deserialize straight from a course list
/// CSV. The `course` label is optional and only used for display and error
/// messages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseEntry {
    #[serde(default)]
    pub course: Option<String>,
    pub marks: f64,
    pub credit_hours: f64,
}

/// Validation failures surfaced before grading runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Credit hours must be a multiple of 0.5 between 0.5 and 5.0.
    #[error("credit hours {0} must be a multiple of 0.5 in 0.5..=5.0")]
    InvalidCreditHours(f64),

    /// Marks outside 0..=100 are rejected, never clamped.
    #[error("marks {0} outside 0..=100")]
    OutOfRangeMarks(f64),
}

/// Rejects marks outside 0..=100.
pub fn check_marks(marks: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&marks) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRangeMarks(marks))
    }
}

/// Rejects credit hours that are not half-steps in 0.5..=5.0.
///
/// The half-step constraint is what keeps the weighted GPA sum exact in
/// scaled integers, and it also guards the zero-hours division.
pub fn check_credit_hours(credit_hours: f64) -> Result<(), ValidationError> {
    if (0.5..=5.0).contains(&credit_hours) && (credit_hours * 2.0).fract() == 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidCreditHours(credit_hours))
    }
}

impl CourseEntry {
    /// Checks the submitted ranges; grading assumes this has passed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_marks(self.marks)?;
        check_credit_hours(self.credit_hours)
    }

    /// Display name for logs and errors; unlabeled rows fall back to position.
    pub fn display_name(&self, position: usize) -> String {
        self.course
            .clone()
            .unwrap_or_else(|| format!("course {}", position + 1))
    }
}
