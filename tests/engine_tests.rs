//! End-to-end checks of the marks engine through the public API

use markify::core::gpa::{
    calculate_cgpa, mark_to_grade_point, predict_gpa, required_future_gpa, BoostOutcome,
};
use markify::core::internal::{calculate, calculate_integrated, calculate_theory, AssignmentDefault};
use markify::core::models::{IntegratedMarks, Layout, Paper, PaperMarks, Semester, TheoryMarks};
use markify::core::snapshot::{JsonExporter, Snapshot, SnapshotExporter};
use markify::core::target::{solve_integrated_target, solve_theory_target, TargetStatus};

const TOLERANCE: f64 = 1e-9;

fn theory(cie1: f64, cie2: f64, a1: f64, a2: f64, a3: f64, model: f64) -> TheoryMarks {
    TheoryMarks {
        cie1: Some(cie1),
        cie2: Some(cie2),
        assignment1: Some(a1),
        assignment2: Some(a2),
        assignment3: Some(a3),
        model: Some(model),
    }
}

#[test]
fn test_theory_scenario() {
    let result = calculate_theory(&theory(45.0, 42.0, 9.0, 10.0, 8.0, 85.0));

    assert!((result.total - 34.8).abs() < TOLERANCE);
    assert!((result.max_total - 40.0).abs() < TOLERANCE);
    assert!((result.percentage - 34.82 / 40.0 * 100.0).abs() < 1e-6);
    assert_eq!(result.message, "Great job!");
    assert_eq!(
        result.summary_line(),
        "Total Internal Marks: 34.8/40 (Great job!)"
    );
}

#[test]
fn test_integrated_scenario() {
    let marks = IntegratedMarks {
        cie1: Some(40.0),
        cie2: Some(38.0),
        cie3: Some(90.0),
        practical1: Some(45.0),
        practical2: Some(48.0),
        practical3: Some(95.0),
    };
    let result = calculate_integrated(&marks);

    assert!((result.total - 44.3).abs() < TOLERANCE);
    assert!((result.max_total - 50.0).abs() < TOLERANCE);
    assert_eq!(result.message, "Great job!");
}

#[test]
fn test_over_max_inputs_are_clamped_by_the_engine() {
    let result = calculate_theory(&theory(500.0, 50.0, 10.0, 10.0, 10.0, 100.0));
    assert!((result.total - 40.0).abs() < TOLERANCE);
    assert!((result.percentage - 100.0).abs() < TOLERANCE);
    assert_eq!(result.message, "Excellent work!");

    let result = calculate_integrated(&IntegratedMarks::default());
    assert!(result.total.abs() < TOLERANCE);
    assert_eq!(result.message, "Focus on the practicals.");
}

#[test]
fn test_integrated_over_max_practical_is_clamped_by_the_engine() {
    // 500/100 of an 11-mark practical alone overshoots the 50-mark cap
    let lone = IntegratedMarks {
        practical3: Some(500.0),
        ..IntegratedMarks::default()
    };
    let result = calculate_integrated(&lone);
    assert!((result.total - 50.0).abs() < TOLERANCE);
    assert!((result.percentage - 100.0).abs() < TOLERANCE);
    assert_eq!(result.message, "Outstanding performance!");

    let full_with_overshoot = IntegratedMarks {
        cie1: Some(50.0),
        cie2: Some(50.0),
        cie3: Some(100.0),
        practical1: Some(50.0),
        practical2: Some(50.0),
        practical3: Some(500.0),
    };
    let result = calculate_integrated(&full_with_overshoot);
    assert!((result.total - 50.0).abs() < TOLERANCE);
    assert!((result.max_total - 50.0).abs() < TOLERANCE);
    assert_eq!(result.message, "Outstanding performance!");
}

#[test]
fn test_booster_band_follows_unrounded_requirement() {
    let outcome = required_future_gpa(9.004, &[], 8);
    assert_eq!(outcome.headline(), "9.00");
    assert_eq!(outcome.message(), "It will be tough, but you can do it!");
}

#[test]
fn test_blank_assignment_policy_through_dispatch() {
    let blank: PaperMarks = TheoryMarks::default().into();

    let zero = calculate(&blank, AssignmentDefault::Zero);
    assert!(zero.total.abs() < TOLERANCE);

    let full = calculate(&blank, AssignmentDefault::Full);
    assert!((full.total - 14.0).abs() < TOLERANCE);
    assert_eq!(full.message, "Needs improvement.");
}

#[test]
fn test_theory_target_scenario() {
    let known = TheoryMarks {
        model: None,
        ..theory(40.0, 40.0, 10.0, 10.0, 10.0, 0.0)
    };
    let solution = solve_theory_target(35.0, &known, AssignmentDefault::Zero);

    assert_eq!(solution.required.status, TargetStatus::Normal);
    assert!((solution.required.required_raw_mark - 82.0).abs() < TOLERANCE);
    assert_eq!(solution.message(), "You need 82/100 in Model Exam.");

    // Reaching the reported mark reaches the target
    let reached = calculate_theory(&TheoryMarks {
        model: Some(solution.required.required_raw_mark),
        ..known
    });
    assert!(reached.total >= 35.0);
}

#[test]
fn test_integrated_target_classifications() {
    let strong = IntegratedMarks {
        cie1: Some(50.0),
        cie2: Some(50.0),
        practical1: Some(50.0),
        practical2: Some(50.0),
        practical3: Some(100.0),
        ..IntegratedMarks::default()
    };
    let achieved = solve_integrated_target(30.0, &strong);
    assert_eq!(achieved.required.status, TargetStatus::Achieved);
    assert_eq!(
        achieved.message(),
        "Target already achieved! You don't need any marks in Model/CIE3."
    );

    let impossible = solve_integrated_target(50.0, &IntegratedMarks::default());
    assert_eq!(impossible.required.status, TargetStatus::Impossible);
    assert_eq!(
        impossible.message(),
        "Impossible target. You would need 454.5/100 in Model/CIE3."
    );
}

#[test]
fn test_grade_point_discontinuity_at_forty() {
    assert_eq!(mark_to_grade_point(39.999), 0);
    assert_eq!(mark_to_grade_point(40.0), 5);
}

#[test]
fn test_predict_gpa_mixed_layouts() {
    let papers = [
        // 35 + 80% of 60 = 83 -> 9
        Paper::new(Layout::Theory, Some(4.0), Some(35.0), Some(80.0)),
        // 45 + 90% of 50 = 90 -> 10
        Paper::new(Layout::Integrated, Some(3.0), Some(45.0), Some(90.0)),
    ];
    assert!((predict_gpa(&papers) - 9.43).abs() < TOLERANCE);

    let no_credits = [Paper::new(Layout::Theory, None, Some(40.0), Some(100.0))];
    assert!(predict_gpa(&no_credits).abs() < TOLERANCE);
}

#[test]
fn test_cgpa_weighting_and_fallbacks() {
    assert!(calculate_cgpa(&[]).abs() < TOLERANCE);

    let weighted = [Semester::new(8.0, 20.0), Semester::new(9.0, 30.0)];
    assert!((calculate_cgpa(&weighted) - 8.6).abs() < TOLERANCE);

    let unweighted = [
        Semester::without_credits(7.0),
        Semester::without_credits(8.0),
        Semester::without_credits(9.0),
    ];
    assert!((calculate_cgpa(&unweighted) - 8.0).abs() < TOLERANCE);

    let mixed = [Semester::new(8.0, 20.0), Semester::without_credits(10.0)];
    assert!((calculate_cgpa(&mixed) - 8.0).abs() < TOLERANCE);
}

#[test]
fn test_booster_scenario() {
    let outcome = required_future_gpa(9.0, &[8.2, 8.5], 8);
    match outcome {
        BoostOutcome::Required { gpa, remaining, .. } => {
            assert!((gpa - 9.22).abs() < TOLERANCE);
            assert_eq!(remaining, 6);
        }
        other => panic!("expected a required GPA, got {other:?}"),
    }
    assert_eq!(outcome.message(), "It will be tough, but you can do it!");
}

#[test]
fn test_booster_statuses() {
    assert_eq!(
        required_future_gpa(8.0, &[8.0; 8], 8),
        BoostOutcome::Completed
    );
    assert!(matches!(
        required_future_gpa(9.9, &[5.0; 6], 8),
        BoostOutcome::Impossible { .. }
    ));
    assert!(matches!(
        required_future_gpa(5.0, &[10.0; 7], 8),
        BoostOutcome::Achieved { .. }
    ));
}

#[test]
fn test_json_snapshot_of_a_calculation() {
    let marks = theory(45.0, 42.0, 9.0, 10.0, 8.0, 85.0);
    let snapshot = Snapshot::new(marks.into(), calculate_theory(&marks));
    let json = JsonExporter.render(&snapshot).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "theory");
    assert_eq!(value["marks"]["model"], 85.0);
    assert_eq!(value["result"]["total"], 34.8);
    assert_eq!(value["result"]["message"], "Great job!");
}
