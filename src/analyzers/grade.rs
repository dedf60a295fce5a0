/// Converts a marks percentage into a grade point and letter grade.
///
/// | Marks   | Point | Letter |
/// |---------|-------|--------|
/// | >= 85   | 4.00  | A      |
/// | >= 80   | 3.70  | A-     |
/// | >= 75   | 3.30  | B+     |
/// | >= 70   | 3.00  | B      |
/// | >= 65   | 2.70  | B-     |
/// | >= 60   | 2.30  | C+     |
/// | >= 55   | 2.00  | C      |
/// | >= 50   | 1.70  | C-     |
/// | < 50    | 0.00  | F      |
///
/// Total over all inputs; anything below 50, negatives included, lands on F.
/// Range checking happens upstream in [`crate::course::check_marks`].
pub fn points_for_score(marks: f64) -> (f64, &'static str) {
    match marks {
        m if m >= 85.0 => (4.00, "A"),
        m if m >= 80.0 => (3.70, "A-"),
        m if m >= 75.0 => (3.30, "B+"),
        m if m >= 70.0 => (3.00, "B"),
        m if m >= 65.0 => (2.70, "B-"),
        m if m >= 60.0 => (2.30, "C+"),
        m if m >= 55.0 => (2.00, "C"),
        m if m >= 50.0 => (1.70, "C-"),
        _ => (0.00, "F"),
    }
}

/// Converts a cumulative CGPA into an academic classification.
///
/// | CGPA    | Classification  |
/// |---------|-----------------|
/// | >= 3.5  | Distinction     |
/// | >= 3.0  | First Division  |
/// | >= 2.5  | Second Division |
/// | >= 2.0  | Pass            |
/// | < 2.0   | Probation       |
pub fn classify(cgpa: f64) -> &'static str {
    match cgpa {
        c if c >= 3.5 => "Distinction",
        c if c >= 3.0 => "First Division",
        c if c >= 2.5 => "Second Division",
        c if c >= 2.0 => "Pass",
        _ => "Probation",
    }
}
