//! Target command handler

use super::internal::{read_integrated, read_theory};
use super::read;
use crate::args::TargetPaper;
use markify::config::Config;
use markify::core::input::max_internal;
use markify::core::models::Layout;
use markify::core::target::{solve_integrated_target, solve_theory_target, TargetSolution};
use markify::{error, info, verbose, warn};

/// Solve for the mark needed in the unknown component and print it
pub fn run(paper: &TargetPaper, config: &Config) {
    let solution = match paper {
        TargetPaper::Theory { target, fields } => {
            if fields.model.is_some() {
                warn!("--model is ignored when solving a Theory target");
            }
            let Some(target) = read_target(target, Layout::Theory) else {
                reject_target(target);
                return;
            };
            solve_theory_target(target, &read_theory(fields), config.assignment_default())
        }
        TargetPaper::Integrated { target, fields } => {
            if fields.cie3.is_some() {
                warn!("--cie3 is ignored when solving an Integrated target");
            }
            let Some(target) = read_target(target, Layout::Integrated) else {
                reject_target(target);
                return;
            };
            solve_integrated_target(target, &read_integrated(fields))
        }
    };

    print_solution(&solution);
}

/// Parse the target, bounded to the layout's maximum; blank or invalid is `None`
fn read_target(text: &str, layout: Layout) -> Option<f64> {
    read("Target", Some(text), max_internal(layout))
}

fn reject_target(text: &str) {
    eprintln!("✗ Enter a target internal mark (got '{text}')");
    error!("No usable target in '{text}'; nothing solved");
}

fn print_solution(solution: &TargetSolution) {
    let required = &solution.required;
    info!(
        "{} target: {} in {} ({})",
        solution.layout,
        required.required_raw_mark,
        solution.unknown.label,
        required.status
    );
    verbose!(
        "Solving for {} (weight {} of {})",
        solution.unknown.label,
        solution.unknown.spec.target_weight,
        solution.unknown.spec.source_max
    );
    println!("{}", solution.message());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_target_requires_a_number() {
        assert_eq!(read_target("", Layout::Theory), None);
        assert_eq!(read_target("   ", Layout::Integrated), None);
        assert_eq!(read_target("abc", Layout::Theory), None);
        assert_eq!(read_target("35", Layout::Theory), Some(35.0));
    }

    #[test]
    fn test_read_target_is_bounded_by_layout() {
        assert_eq!(read_target("45", Layout::Theory), Some(40.0));
        assert_eq!(read_target("45", Layout::Integrated), Some(45.0));
    }
}
