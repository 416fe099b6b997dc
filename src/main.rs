//! CLI entry point for the gradebook tool.
//!
//! Provides subcommands for printing a student's grade history, converting
//! percentages to letter grades and GPA, exporting per-student summaries, and
//! checking honors eligibility against a roster.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradebook::roster::Roster;
use gradebook::sheet::load_sheet;
use gradebook::{
    GpaCalculator,
    output::{SummaryTable, to_json, write_csv},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Grade averages, letter grades and GPA for a class", long_about = None)]
struct Cli {
    /// CSV grade sheet (student_id,subject_code,subject_name,category,score)
    #[arg(short, long, global = true, env = "GRADEBOOK_SHEET", default_value = "grades.csv")]
    sheet: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the grade history of one student
    Report {
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
    },
    /// Convert a percentage into a letter grade and GPA points
    Gpa {
        #[arg(value_name = "PERCENT")]
        percent: f64,
    },
    /// Summarize every student on the sheet
    Summary {
        /// CSV file to append summaries to
        #[arg(short, long)]
        output: Option<String>,

        /// Print summaries as a JSON array instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check honors eligibility for every student in a roster
    Honors {
        /// JSON roster file
        #[arg(short, long, default_value = "roster.json")]
        roster: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gradebook.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { student_id } => {
            let manager = load_sheet(&cli.sheet)?;
            print!("{}", manager.view_grades_by_student(&student_id));
        }
        Commands::Gpa { percent } => {
            if !(0.0..=100.0).contains(&percent) {
                warn!(percent, "Percentage outside 0-100, mapping anyway");
            }
            println!(
                "{:.2}% -> {} ({:.1})",
                percent,
                GpaCalculator::letter_grade(percent),
                GpaCalculator::percentage_to_gpa(percent)
            );
        }
        Commands::Summary { output, json } => {
            let manager = load_sheet(&cli.sheet)?;
            let summaries = manager.summaries();

            if json {
                println!("{}", to_json(&summaries)?);
            } else {
                print!("{}", SummaryTable::new(&summaries));
            }

            if let Some(path) = output {
                let rows = write_csv(&path, &summaries)?;
                info!(path = %path, rows, "Summaries exported");
            }
        }
        Commands::Honors { roster } => {
            let manager = load_sheet(&cli.sheet)?;
            let roster = Roster::load(&roster)?;

            for student in roster.iter() {
                let average = student.average_grade(&manager);
                println!(
                    "{} {} [{}] average {:.2}% passing: {} honors eligible: {}",
                    student.student_id(),
                    student.name(),
                    student.student_type(),
                    average,
                    if student.is_passing(average) { "Yes" } else { "No" },
                    student.check_honors_eligibility(&manager)
                );
            }

            for id in manager.student_ids() {
                if roster.get(id).is_none() {
                    warn!(student_id = id, "Graded student missing from roster");
                }
            }
        }
    }

    Ok(())
}
