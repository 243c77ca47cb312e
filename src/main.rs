//! CLI entry point for the grading-scale tool.
//!
//! Provides subcommands for classifying a single grade, proposing and
//! normalizing its limits, checking it against limits, and evaluating a CSV
//! batch of applicant grades.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use grading_scale::{
    output::{append_record, print_json, print_pretty},
    record::evaluate_batch,
    scale::{
        GradeRange, detect_grading_scale, get_grade_type, is_grade_in_range,
        normalize_limits_for_grade,
    },
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grading_scale")]
#[command(about = "A tool to detect and check academic grading scales", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a grade as letter, numeric, percentage or invalid
    Classify {
        #[arg(value_name = "GRADE")]
        grade: String,
    },
    /// Propose best and worst limits for a grade
    Detect {
        #[arg(value_name = "GRADE")]
        grade: String,
    },
    /// Reformat stored limits to match a grade's percentage-ness
    Normalize {
        #[arg(value_name = "GRADE")]
        grade: String,

        /// Best grade of the scale
        #[arg(short, long)]
        upper: String,

        /// Worst grade of the scale
        #[arg(short, long)]
        lower: String,
    },
    /// Check whether a grade lies between two limits
    Check {
        #[arg(value_name = "GRADE")]
        grade: String,

        /// Best grade of the scale
        #[arg(short, long)]
        upper: String,

        /// Worst grade of the scale
        #[arg(short, long)]
        lower: String,
    },
    /// Evaluate a CSV batch of applicant grades
    Batch {
        /// CSV with columns applicant_id,grade,upper_limit,lower_limit,manually_set
        #[arg(value_name = "INPUT")]
        input: String,

        /// CSV file to append results to
        #[arg(short, long, default_value = "grades.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grading_scale.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grading_scale.log"));

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
        Commands::Classify { grade } => {
            let grade_type = get_grade_type(&grade);
            info!(grade = %grade, %grade_type, "Grade classified");
        }
        Commands::Detect { grade } => match detect_grading_scale(&grade) {
            Some(range) => print_json(&range)?,
            None => warn!(grade = %grade, "No grading scale detected"),
        },
        Commands::Normalize {
            grade,
            upper,
            lower,
        } => {
            let range = normalize_limits_for_grade(&grade, &GradeRange::new(upper, lower));
            print_json(&range)?;
        }
        Commands::Check {
            grade,
            upper,
            lower,
        } => {
            let range = GradeRange::new(upper, lower);
            if !is_grade_in_range(&grade, &range) {
                bail!(
                    "grade {grade} is outside {} to {}",
                    range.upper_limit,
                    range.lower_limit
                );
            }
            info!(grade = %grade, "Grade is within limits");
        }
        Commands::Batch { input, output } => {
            run_batch(&input, &output)?;
        }
    }

    Ok(())
}

/// Evaluates every applicant row in `input` and appends the results to
/// `output`.
#[tracing::instrument(fields(input, output))]
fn run_batch(input: &str, output: &str) -> Result<()> {
    let bytes = std::fs::read(input).with_context(|| format!("Failed to read {input}"))?;
    let records = evaluate_batch(&bytes)?;

    let mut written = 0;
    let mut failed = 0;
    let mut out_of_range = 0;

    for record in &records {
        print_pretty(record);

        if record.error_type.is_some() {
            failed += 1;
        } else if !record.in_range {
            out_of_range += 1;
        }

        if let Err(e) = append_record(output, record) {
            error!(error = %e, "Failed to write grade record");
        } else {
            written += 1;
        }
    }

    info!(
        total = records.len(),
        written,
        failed,
        out_of_range,
        "Batch evaluation complete"
    );
    Ok(())
}
