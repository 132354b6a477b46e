//! Boost command handler

use super::read;
use markify::config::Config;
use markify::core::gpa::{required_future_gpa, BoostOutcome};
use markify::core::input::MAX_GPA;
use markify::{info, verbose};

/// Print the average GPA needed in the remaining semesters.
///
/// The programme length comes from config (`--program-length` is applied as
/// an override before this runs).
pub fn run(target: &str, completed: &[String], config: &Config) {
    let target = read("Target CGPA", Some(target), MAX_GPA).unwrap_or(0.0);
    let gpas: Vec<f64> = completed
        .iter()
        .enumerate()
        .map(|(i, text)| {
            read(&format!("Semester {}", i + 1), Some(text.as_str()), MAX_GPA).unwrap_or(0.0)
        })
        .collect();
    let program_length = config.program_length();

    verbose!(
        "{} of {program_length} semesters completed, target CGPA {target}",
        gpas.len()
    );

    let outcome = required_future_gpa(target, &gpas, program_length);
    info!("Boost outcome: {outcome:?}");

    match outcome {
        BoostOutcome::Required { gpa, remaining, .. } => {
            println!("Required GPA: {gpa:.2} in each of the next {remaining} semesters");
        }
        _ => println!("{}", outcome.headline()),
    }
    println!("{}", outcome.message());
}
