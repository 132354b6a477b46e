//! Internal command handler

use super::read;
use crate::args::{ExportArgs, IntegratedFields, InternalPaper, TheoryFields};
use markify::config::Config;
use markify::core::input::{MAX_ASSIGNMENT, MAX_FULL_PAPER, MAX_HALF_PAPER};
use markify::core::internal::{calculate, CalculationResult};
use markify::core::models::{IntegratedMarks, PaperMarks, TheoryMarks};
use markify::core::snapshot::{Snapshot, SnapshotFormat};
use markify::{error, info, verbose};
use std::path::PathBuf;

/// Run the internal-mark calculation and print the result
pub fn run(paper: &InternalPaper, config: &Config) {
    let (marks, export): (PaperMarks, &ExportArgs) = match paper {
        InternalPaper::Theory { fields, export } => (read_theory(fields).into(), export),
        InternalPaper::Integrated { fields, export } => {
            (read_integrated(fields).into(), export)
        }
    };

    let result = calculate(&marks, config.assignment_default());
    info!("{} internal: {}", marks.layout(), result.summary_line());
    print_result(&result);

    if let Some(format) = export.export {
        export_snapshot(
            Snapshot::new(marks, result),
            format.into(),
            export.output.clone(),
            config,
        );
    }
}

/// Bound Theory fields to their declared maxima
pub fn read_theory(fields: &TheoryFields) -> TheoryMarks {
    TheoryMarks {
        cie1: read("CIE 1", fields.cie1.as_deref(), MAX_HALF_PAPER),
        cie2: read("CIE 2", fields.cie2.as_deref(), MAX_HALF_PAPER),
        assignment1: read("Assignment 1", fields.assignment1.as_deref(), MAX_ASSIGNMENT),
        assignment2: read("Assignment 2", fields.assignment2.as_deref(), MAX_ASSIGNMENT),
        assignment3: read("Assignment 3", fields.assignment3.as_deref(), MAX_ASSIGNMENT),
        model: read("Model Exam", fields.model.as_deref(), MAX_FULL_PAPER),
    }
}

/// Bound Integrated fields to their declared maxima
pub fn read_integrated(fields: &IntegratedFields) -> IntegratedMarks {
    IntegratedMarks {
        cie1: read("CIE 1", fields.cie1.as_deref(), MAX_HALF_PAPER),
        cie2: read("CIE 2", fields.cie2.as_deref(), MAX_HALF_PAPER),
        cie3: read("CIE 3", fields.cie3.as_deref(), MAX_FULL_PAPER),
        practical1: read("Practical 1", fields.practical1.as_deref(), MAX_HALF_PAPER),
        practical2: read("Practical 2", fields.practical2.as_deref(), MAX_HALF_PAPER),
        practical3: read("Practical 3", fields.practical3.as_deref(), MAX_FULL_PAPER),
    }
}

fn print_result(result: &CalculationResult) {
    println!("\n=== Internal Marks ===\n");
    println!("  Total:      {}/{}", result.total, result.max_total);
    println!("  Percentage: {:.1}%", result.percentage);
    println!("  {}", result.message);
    verbose!("\n{}", result.summary_line());
}

fn export_snapshot(
    snapshot: Snapshot,
    format: SnapshotFormat,
    output: Option<PathBuf>,
    config: &Config,
) {
    let path = output.unwrap_or_else(|| {
        PathBuf::from(&config.paths.exports_dir).join(snapshot.default_file_name(format))
    });

    match format.exporter().export(&snapshot, &path) {
        Ok(()) => println!("\n✓ Snapshot written: {}", path.display()),
        Err(e) => {
            eprintln!("✗ Failed to write snapshot {}: {e}", path.display());
            error!("Snapshot export failed for {}: {e}", path.display());
        }
    }
}
