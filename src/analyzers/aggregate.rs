use crate::analyzers::grade::points_for_score;
use crate::analyzers::types::{GradeResult, SemesterRecord};
use crate::analyzers::utility::{div_round_half_up, to_half_steps, to_hundredths};
use crate::course::CourseEntry;

/// Computes a semester GPA as the credit-weighted average of grade points,
/// rounded half-up to two decimal places.
///
/// `details` mirrors the input order, carrying each course's resolved letter
/// grade and point. An empty course list yields `(0.00, [])`; that is the
/// defined degenerate case, not an error.
///
/// Grade points are exact hundredths and credit hours exact half-steps, so
/// the weighted sum is carried in scaled integers and the half-up rounding
/// is exact (85/3h + 50/1h is 3.425 and rounds to 3.43).
pub fn compute_gpa(entries: &[CourseEntry]) -> (f64, Vec<GradeResult>) {
    let mut earned_points = 0u64; // hundredth-points x half-steps
    let mut attempted_hours = 0u64; // half-steps
    let mut details = Vec::with_capacity(entries.len());

    for entry in entries {
        let (grade_point, letter) = points_for_score(entry.marks);
        let hours = to_half_steps(entry.credit_hours);

        earned_points += to_hundredths(grade_point) * hours;
        attempted_hours += hours;

        details.push(GradeResult {
            course: entry.course.clone(),
            marks: entry.marks,
            credit_hours: entry.credit_hours,
            letter_grade: letter.to_string(),
            grade_point,
        });
    }

    let gpa = if attempted_hours == 0 {
        0.0
    } else {
        div_round_half_up(earned_points, attempted_hours) as f64 / 100.0
    };

    (gpa, details)
}

/// Computes the cumulative CGPA as the credit-weighted average of semester
/// GPAs, rounded half-up to two decimal places.
///
/// Operates only on collapsed `(gpa, total_credits)` pairs; individual course
/// marks are not visible at this level. An empty ledger yields `0.00`.
pub fn compute_cgpa(records: &[SemesterRecord]) -> f64 {
    let mut earned_points = 0u64;
    let mut attempted_hours = 0u64;

    for record in records {
        let credits = to_half_steps(record.total_credits);
        earned_points += to_hundredths(record.gpa) * credits;
        attempted_hours += credits;
    }

    if attempted_hours == 0 {
        0.0
    } else {
        div_round_half_up(earned_points, attempted_hours) as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(marks: f64, credit_hours: f64) -> CourseEntry {
        CourseEntry {
            course: None,
            marks,
            credit_hours,
        }
    }

    fn record(gpa: f64, total_credits: f64) -> SemesterRecord {
        SemesterRecord {
            gpa,
            total_credits,
            ..Default::default()
        }
    }

    #[test]
    fn test_gpa_empty_input() {
        let (gpa, details) = compute_gpa(&[]);
        assert_eq!(gpa, 0.0);
        assert!(details.is_empty());
    }

    #[test]
    fn test_gpa_single_course() {
        let (gpa, details) = compute_gpa(&[entry(85.0, 3.0)]);
        assert_eq!(gpa, 4.00);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].letter_grade, "A");
        assert_eq!(details[0].grade_point, 4.00);
    }

    #[test]
    fn test_gpa_weighted_half_rounds_up() {
        // 4.00*3 + 1.70*1 = 13.70 over 4 hours = 3.425, half-up to 3.43.
        let (gpa, _) = compute_gpa(&[entry(85.0, 3.0), entry(50.0, 1.0)]);
        assert_eq!(gpa, 3.43);
    }

    #[test]
    fn test_gpa_half_credit_hours() {
        // 4.00*2.5 + 3.00*0.5 = 11.50 over 3 hours = 3.8333 -> 3.83.
        let (gpa, _) = compute_gpa(&[entry(90.0, 2.5), entry(71.0, 0.5)]);
        assert_eq!(gpa, 3.83);
    }

    #[test]
    fn test_gpa_details_preserve_order() {
        let entries = vec![
            CourseEntry {
                course: Some("Calculus I".to_string()),
                marks: 72.0,
                credit_hours: 3.0,
            },
            CourseEntry {
                course: Some("Applied Physics".to_string()),
                marks: 48.0,
                credit_hours: 3.0,
            },
        ];

        let (gpa, details) = compute_gpa(&entries);

        assert_eq!(gpa, 1.50);
        assert_eq!(details[0].course.as_deref(), Some("Calculus I"));
        assert_eq!(details[0].letter_grade, "B");
        assert_eq!(details[1].course.as_deref(), Some("Applied Physics"));
        assert_eq!(details[1].letter_grade, "F");
        assert_eq!(details[1].grade_point, 0.00);
    }

    #[test]
    fn test_gpa_is_deterministic() {
        let entries = vec![entry(85.0, 3.0), entry(67.5, 1.5), entry(50.0, 1.0)];
        let first = compute_gpa(&entries);
        let second = compute_gpa(&entries);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cgpa_empty_ledger() {
        assert_eq!(compute_cgpa(&[]), 0.0);
    }

    #[test]
    fn test_cgpa_single_semester_passes_through() {
        assert_eq!(compute_cgpa(&[record(2.00, 3.0)]), 2.00);
    }

    #[test]
    fn test_cgpa_credit_weighted() {
        // (3.43*4 + 4.00*3) / 7 = 25.72 / 7 = 3.6742... -> 3.67.
        let records = vec![record(3.43, 4.0), record(4.00, 3.0)];
        assert_eq!(compute_cgpa(&records), 3.67);
    }

    #[test]
    fn test_cgpa_ignores_everything_but_gpa_and_credits() {
        let full = SemesterRecord {
            semester: "Fall 2024".to_string(),
            computed_at: chrono::Utc::now(),
            courses: 6,
            gpa: 3.43,
            total_credits: 4.0,
        };
        assert_eq!(
            compute_cgpa(&[full]),
            compute_cgpa(&[record(3.43, 4.0)])
        );
    }
}
