//! Data types used by the grading pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One graded course, preserving input order for display and audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub course: Option<String>,
    pub marks: f64,
    pub credit_hours: f64,
    pub letter_grade: String,
    pub grade_point: f64,
}

/// One computed semester, as appended to the ledger CSV.
///
/// Only `gpa` and `total_credits` feed into the cumulative average; once a
/// semester is collapsed to this record, its per-course marks are gone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemesterRecord {
    pub semester: String,
    pub computed_at: DateTime<Utc>,
    pub courses: usize,
    pub gpa: f64,
    pub total_credits: f64,
}

/// Result of grading a single semester's course list.
#[derive(Debug, Serialize)]
pub struct SemesterSummary {
    pub record: SemesterRecord,
    pub details: Vec<GradeResult>,
}

/// Cumulative view over every semester in the ledger.
#[derive(Debug, Serialize)]
pub struct TranscriptSummary {
    pub generated_at: DateTime<Utc>,
    pub semesters: usize,
    pub total_credits: f64,
    pub cgpa: f64,
    pub classification: String,
}
