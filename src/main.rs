//! CLI entry point for the GPA analyzer tool.
//!
//! Provides subcommands for grading a single marks value, computing one
//! semester's GPA from a course list CSV, and computing the cumulative CGPA
//! and classification from the semester ledger.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gpa_analyzer::analyzers::analyzer::{analyze_semester, analyze_transcript};
use gpa_analyzer::analyzers::grade::points_for_score;
use gpa_analyzer::course::check_marks;
use gpa_analyzer::output::{print_json, write_json};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_analyzer")]
#[command(about = "A tool to grade courses and track GPA/CGPA", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a marks percentage into a grade point and letter grade
    Grade {
        /// Marks percentage, 0 to 100
        #[arg(value_name = "MARKS")]
        marks: f64,
    },
    /// Compute one semester's GPA from a course list CSV
    Semester {
        /// Course list CSV with marks and credit_hours columns
        #[arg(value_name = "COURSES_CSV")]
        courses: String,

        /// Label recorded for this semester in the ledger
        #[arg(short, long, default_value = "semester")]
        label: String,

        /// Ledger CSV the computed record is appended to
        #[arg(short = 'd', long, default_value = "semesters.csv")]
        ledger: String,
    },
    /// Compute the cumulative CGPA and classification from the ledger
    Transcript {
        /// Ledger CSV of previously computed semesters
        #[arg(short = 'd', long, default_value = "semesters.csv")]
        ledger: String,

        /// Optional file to write the JSON summary to
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gpa_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Grade { marks } => {
            check_marks(marks)?;
            let (grade_point, letter) = points_for_score(marks);

            info!(marks, grade_point, letter, "Marks graded");
        }
        Commands::Semester {
            courses,
            label,
            ledger,
        } => {
            let summary = analyze_semester(&label, &courses, &ledger)?;
            print_json(&summary)?;

            info!(
                semester = %summary.record.semester,
                gpa = summary.record.gpa,
                total_credits = summary.record.total_credits,
                courses = summary.record.courses,
                ledger = %ledger,
                "Semester GPA computed"
            );
        }
        Commands::Transcript { ledger, output } => {
            let summary = analyze_transcript(&ledger)?;
            print_json(&summary)?;

            info!(
                cgpa = summary.cgpa,
                classification = %summary.classification,
                semesters = summary.semesters,
                total_credits = summary.total_credits,
                "Cumulative CGPA computed"
            );

            if let Some(path) = output {
                write_json(&path, &summary)?;
                info!(path = %path, "Transcript summary written");
            }
        }
    }

    Ok(())
}
