//! GPA prediction, CGPA calculation and the CGPA booster
//!
//! All values live on the fixed 10-point scale. Grade points come from a
//! step function over the final percentage mark; there is no partial
//! credit below 40.

use crate::core::models::{Paper, Semester};
use crate::core::round_to;
use serde::Serialize;
use std::fmt;

/// Highest GPA on the scale
pub const MAX_GRADE_POINT: f64 = 10.0;

/// Default number of semesters in a programme
pub const DEFAULT_PROGRAM_LENGTH: usize = 8;

/// Grade scale as `(minimum percentage, grade point)`, highest band first.
/// Anything below the last band scores 0.
pub const GRADE_SCALE: [(f64, u8); 6] = [
    (90.0, 10),
    (80.0, 9),
    (70.0, 8),
    (60.0, 7),
    (50.0, 6),
    (40.0, 5),
];

/// Convert a final percentage mark to a grade point (0..=10).
#[must_use]
pub fn mark_to_grade_point(final_mark: f64) -> u8 {
    GRADE_SCALE
        .iter()
        .find(|(min, _)| final_mark >= *min)
        .map_or(0, |(_, point)| *point)
}

/// Final percentage for a paper: internal plus the weighted external mark.
///
/// Theory externals count 60, Integrated externals 50.
#[must_use]
pub fn paper_final_mark(paper: &Paper) -> f64 {
    let internal = finite_or_zero(paper.internal);
    let external = finite_or_zero(paper.external);
    internal + external / 100.0 * paper.layout.external_weight()
}

/// Credit-weighted GPA over `papers`, rounded to two decimals.
///
/// Returns 0.0 when the papers carry no credits.
#[must_use]
pub fn predict_gpa(papers: &[Paper]) -> f64 {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;

    for paper in papers {
        let final_mark = paper_final_mark(paper);
        let grade_point = mark_to_grade_point(final_mark);
        let credits = paper.credit_weight();
        crate::debug!(
            "{} paper: final {final_mark:.2} -> grade point {grade_point} x {credits} credits",
            paper.layout
        );

        total_points += f64::from(grade_point) * credits;
        total_credits += credits;
    }

    if total_credits > 0.0 {
        round_to(total_points / total_credits, 2)
    } else {
        0.0
    }
}

/// CGPA over completed semesters, rounded to two decimals.
///
/// Semesters are weighted by their credits; a semester without credits
/// weighs nothing. When no semester carries credits the plain mean of the
/// GPAs is used instead. An empty list gives 0.0.
#[must_use]
pub fn calculate_cgpa(semesters: &[Semester]) -> f64 {
    if semesters.is_empty() {
        return 0.0;
    }

    let (points, credits) = semesters.iter().fold((0.0, 0.0), |(points, credits), s| {
        let weight = s.credit_weight();
        (points + gpa_value(s.gpa) * weight, credits + weight)
    });

    if credits > 0.0 {
        round_to(points / credits, 2)
    } else {
        crate::debug!("no semester credits entered, using unweighted mean");
        let sum: f64 = semesters.iter().map(|s| gpa_value(s.gpa)).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = semesters.len() as f64;
        round_to(sum / count, 2)
    }
}

/// Outcome of the CGPA booster
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BoostOutcome {
    /// No semesters remain in the programme
    Completed,
    /// The average needed over the remaining semesters exceeds 10
    Impossible {
        /// Unrounded requirement
        required: f64,
    },
    /// The target is already secured
    Achieved {
        /// Unrounded (negative) requirement
        required: f64,
    },
    /// The target is reachable with this average
    Required {
        /// Average GPA needed over the remaining semesters, two decimals
        gpa: f64,
        /// Unrounded requirement; picks the encouragement band
        required: f64,
        /// Remaining semesters
        remaining: usize,
    },
}

impl BoostOutcome {
    /// Short value for display: the GPA, or the status word
    #[must_use]
    pub fn headline(&self) -> String {
        match self {
            Self::Completed => "Completed".to_string(),
            Self::Impossible { .. } => "Impossible".to_string(),
            Self::Achieved { .. } => "Achieved".to_string(),
            Self::Required { gpa, .. } => format!("{gpa:.2}"),
        }
    }

    /// Encouragement or explanation for the outcome
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Completed => "You have already completed all semesters.",
            Self::Impossible { .. } => {
                "Even with a perfect 10 in all remaining semesters, this target is mathematically impossible."
            }
            Self::Achieved { .. } => "You have already achieved your target CGPA!",
            Self::Required { required, .. } => {
                if *required > 9.0 {
                    "It will be tough, but you can do it!"
                } else if *required > 8.0 {
                    "Aim high and stay consistent."
                } else if *required > 7.0 {
                    "You're on the right track."
                } else {
                    "Achievable with steady effort."
                }
            }
        }
    }
}

impl fmt::Display for BoostOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.headline(), self.message())
    }
}

/// Average GPA needed over the remaining semesters to finish at `target_cgpa`.
///
/// Assumes equally weighted semesters over a programme of
/// `program_length` semesters.
#[must_use]
pub fn required_future_gpa(
    target_cgpa: f64,
    completed_gpas: &[f64],
    program_length: usize,
) -> BoostOutcome {
    if completed_gpas.len() >= program_length {
        return BoostOutcome::Completed;
    }
    let remaining = program_length - completed_gpas.len();

    let completed_sum: f64 = completed_gpas.iter().copied().map(gpa_value).sum();
    #[allow(clippy::cast_precision_loss)]
    let needed_points = target_cgpa * program_length as f64 - completed_sum;
    #[allow(clippy::cast_precision_loss)]
    let required = needed_points / remaining as f64;

    crate::debug!(
        "booster: need {needed_points:.3} points over {remaining} semesters -> {required:.4}"
    );

    if required > MAX_GRADE_POINT {
        BoostOutcome::Impossible { required }
    } else if required < 0.0 {
        BoostOutcome::Achieved { required }
    } else {
        BoostOutcome::Required {
            gpa: round_to(required, 2),
            required,
            remaining,
        }
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn gpa_value(gpa: f64) -> f64 {
    if gpa.is_finite() {
        gpa
    } else {
        0.0
    }
}
