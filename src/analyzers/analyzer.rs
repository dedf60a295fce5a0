use crate::analyzers::aggregate::{compute_cgpa, compute_gpa};
use crate::analyzers::grade::classify;
use crate::analyzers::types::{SemesterRecord, SemesterSummary, TranscriptSummary};
use crate::course::CourseEntry;
use crate::output::append_record;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Grades one semester's course list and appends the collapsed record to the
/// ledger CSV.
///
/// Every row is validated before anything is computed or written; a single
/// bad row rejects the whole semester.
pub fn analyze_semester(
    label: &str,
    courses_path: &str,
    ledger_path: &str,
) -> Result<SemesterSummary> {
    let entries = load_course_rows(courses_path)?;

    for (position, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .with_context(|| format!("rejecting {}", entry.display_name(position)))?;
    }

    let (gpa, details) = compute_gpa(&entries);
    let total_credits = entries.iter().map(|e| e.credit_hours).sum();

    let record = SemesterRecord {
        semester: label.to_string(),
        computed_at: Utc::now(),
        courses: entries.len(),
        gpa,
        total_credits,
    };

    append_record(ledger_path, &record)?;
    info!(semester = label, gpa, total_credits, "Semester graded");

    Ok(SemesterSummary { record, details })
}

/// Computes the cumulative view over every semester in the ledger.
///
/// Semesters contribute in ledger order, already collapsed to their GPA and
/// total credit hours.
pub fn analyze_transcript(ledger_path: &str) -> Result<TranscriptSummary> {
    let records = load_semester_records(ledger_path)?;
    let cgpa = compute_cgpa(&records);
    let total_credits = records.iter().map(|r| r.total_credits).sum();

    Ok(TranscriptSummary {
        generated_at: Utc::now(),
        semesters: records.len(),
        total_credits,
        cgpa,
        classification: classify(cgpa).to_string(),
    })
}

fn load_course_rows(path: &str) -> Result<Vec<CourseEntry>> {
    let file = File::open(path).with_context(|| format!("opening course list {path}"))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: CourseEntry = result?;
        rows.push(record);
    }

    Ok(rows)
}

/// A missing ledger reads as an empty transcript rather than an error.
fn load_semester_records(path: &str) -> Result<Vec<SemesterRecord>> {
    if !Path::new(path).exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: SemesterRecord = result?;
        rows.push(record);
    }

    Ok(rows)
}
